use classhandle_core::{
    CategoryFilter, EntryDraft, EntryId, JsonFileRepository, PersistError, Store,
    StoreRepository,
};
use std::fs;
use tempfile::TempDir;

fn populated_store() -> Store {
    let mut store = Store::default();
    store.add_category("Biology").unwrap();
    let cells = store
        .add_entry(
            EntryDraft::new("Biology", "Cell structure")
                .with_video("https://example.com/v1")
                .with_notes("membranes first"),
        )
        .unwrap();
    store
        .add_entry(EntryDraft::new("Physics", "Optics").with_pdf("/tmp/optics.pdf"))
        .unwrap();
    store.toggle_completed(&cells.id).unwrap();
    store
}

#[test]
fn save_then_load_round_trips_every_field() {
    let dir = TempDir::new().unwrap();
    let mut repo = JsonFileRepository::new(dir.path().join("class_data_v2.json"));
    let store = populated_store();

    repo.save(&store).unwrap();
    let loaded = repo.load();

    assert_eq!(loaded, store);
}

#[test]
fn missing_file_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let repo = JsonFileRepository::new(dir.path().join("absent.json"));

    let loaded = repo.load();
    assert_eq!(loaded, Store::default());
    assert_eq!(loaded.list_categories(), vec!["Chemistry", "Physics"]);
    assert_eq!(loaded.entry_count(), 0);
}

#[test]
fn malformed_json_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ \"categories\": [\"Physics\"], \"entries\": [").unwrap();

    assert_eq!(JsonFileRepository::new(&path).load(), Store::default());
}

#[test]
fn wrong_shape_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("shape.json");
    fs::write(&path, r#"{"categories": "Physics", "entries": {}}"#).unwrap();

    assert_eq!(JsonFileRepository::new(&path).load(), Store::default());
}

#[test]
fn duplicate_ids_on_disk_load_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("dupes.json");
    let id = "6f1c1d2e-3b4a-4c5d-8e9f-0a1b2c3d4e5f";
    fs::write(
        &path,
        format!(
            r#"{{"categories": ["Physics"], "entries": [
                {{"id": "{id}", "category": "Physics", "description": "A"}},
                {{"id": "{id}", "category": "Physics", "description": "B"}}
            ]}}"#
        ),
    )
    .unwrap();

    assert_eq!(JsonFileRepository::new(&path).load(), Store::default());
}

#[test]
fn empty_description_on_disk_loads_defaults() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blank.json");
    fs::write(
        &path,
        r#"{"categories": ["Physics"], "entries": [
            {"id": "6f1c1d2e-3b4a-4c5d-8e9f-0a1b2c3d4e5f", "category": "Physics", "description": "  "}
        ]}"#,
    )
    .unwrap();

    assert_eq!(JsonFileRepository::new(&path).load(), Store::default());
}

#[test]
fn entries_without_optional_fields_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("sparse.json");
    fs::write(
        &path,
        r#"{"categories": ["Physics", "Art"], "entries": [
            {"id": "6f1c1d2e-3b4a-4c5d-8e9f-0a1b2c3d4e5f", "category": "Physics", "description": "Waves"}
        ]}"#,
    )
    .unwrap();

    let loaded = JsonFileRepository::new(&path).load();
    assert_eq!(loaded.list_categories(), vec!["Art", "Physics"]);
    let entry = &loaded.entries()[0];
    assert_eq!(entry.description, "Waves");
    assert!(entry.pdf_path.is_empty());
    assert!(entry.video_link.is_empty());
    assert!(!entry.completed);
}

#[test]
fn non_uuid_ids_load_and_survive_the_next_save() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("legacy.json");
    fs::write(
        &path,
        r#"{"categories": ["Physics", "Chemistry", "Biology"], "entries": [
            {"id": "entry-1", "category": "Biology", "description": "Cells",
             "pdf_path": "", "video_link": "", "notes": "", "completed": true}
        ]}"#,
    )
    .unwrap();
    let mut repo = JsonFileRepository::new(&path);

    let mut loaded = repo.load();
    assert_eq!(loaded.entry_count(), 1);
    assert_eq!(
        loaded.list_categories(),
        vec!["Biology", "Chemistry", "Physics"]
    );
    let legacy_id = EntryId::from("entry-1");
    assert!(loaded.get_entry(&legacy_id).unwrap().completed);

    loaded.toggle_completed(&legacy_id).unwrap();
    loaded
        .add_entry(EntryDraft::new("Biology", "Mitosis"))
        .unwrap();
    repo.save(&loaded).unwrap();

    let reloaded = repo.load();
    assert_eq!(reloaded, loaded);
    assert!(!reloaded.get_entry(&legacy_id).unwrap().completed);
    assert_eq!(
        reloaded
            .summarize(&CategoryFilter::parse("Biology"))
            .total,
        2
    );
}

#[test]
fn save_writes_the_documented_shape_and_leaves_no_temp_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("class_data_v2.json");
    let mut repo = JsonFileRepository::new(&path);
    let store = populated_store();

    repo.save(&store).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(text.contains("\n    \"categories\""));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value["categories"],
        serde_json::json!(["Biology", "Chemistry", "Physics"])
    );
    let entries = value["entries"].as_array().unwrap();
    assert_eq!(entries.len(), 2);
    for entry in entries {
        for key in ["id", "category", "description", "pdf_path", "video_link", "notes"] {
            assert!(entry[key].is_string(), "{key} should be a string");
        }
        assert!(entry["completed"].is_boolean());
    }

    let leftovers = fs::read_dir(path.parent().unwrap())
        .unwrap()
        .filter_map(Result::ok)
        .filter(|item| item.file_name().to_string_lossy().ends_with(".tmp"))
        .count();
    assert_eq!(leftovers, 0);
}

#[test]
fn save_overwrites_previous_content() {
    let dir = TempDir::new().unwrap();
    let mut repo = JsonFileRepository::new(dir.path().join("data.json"));

    repo.save(&populated_store()).unwrap();
    repo.save(&Store::empty()).unwrap();

    assert_eq!(repo.load(), Store::empty());
}

#[test]
fn save_failure_is_reported_and_keeps_old_file() {
    let dir = TempDir::new().unwrap();
    let blocker = dir.path().join("not_a_dir");
    fs::write(&blocker, "plain file").unwrap();
    let mut repo = JsonFileRepository::new(blocker.join("data.json"));

    let err = repo.save(&populated_store()).unwrap_err();
    assert!(matches!(err, PersistError::Io { .. }));
    assert_eq!(fs::read_to_string(&blocker).unwrap(), "plain file");
}
