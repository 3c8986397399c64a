use classhandle_core::{
    CategoryFilter, EntryDraft, MissingRecord, Store, StoreError, ValidationError,
};

#[test]
fn duplicate_physics_is_rejected_and_set_unchanged() {
    let mut store = Store::default();
    let before = store.list_categories();

    let err = store.add_category("Physics").unwrap_err();
    assert!(matches!(err, StoreError::Duplicate(name) if name == "Physics"));
    assert_eq!(store.list_categories(), before);
}

#[test]
fn list_categories_is_sorted() {
    let mut store = Store::default();
    store.add_category("Mathematics").unwrap();
    store.add_category("Biology").unwrap();
    store.add_category("Zoology").unwrap();

    assert_eq!(
        store.list_categories(),
        vec!["Biology", "Chemistry", "Mathematics", "Physics", "Zoology"]
    );
}

#[test]
fn blank_category_name_is_a_validation_error() {
    let mut store = Store::default();
    let err = store.add_category("   ").unwrap_err();
    assert!(matches!(
        err,
        StoreError::Validation(ValidationError::EmptyCategoryName)
    ));
    assert_eq!(store.categories().len(), 2);
}

#[test]
fn remove_unknown_category_is_not_found() {
    let mut store = Store::default();
    let err = store.remove_category("Biology").unwrap_err();
    assert!(matches!(
        err,
        StoreError::NotFound(MissingRecord::Category(name)) if name == "Biology"
    ));
}

#[test]
fn removing_a_category_leaves_its_entries_in_place() {
    let mut store = Store::default();
    let entry = store
        .add_entry(EntryDraft::new("Chemistry", "Titration"))
        .unwrap();

    store.remove_category("Chemistry").unwrap();

    assert_eq!(store.list_categories(), vec!["Physics"]);
    let stored = store.get_entry(&entry.id).unwrap();
    assert_eq!(stored.category, "Chemistry");

    let dangling = store.list_entries(&CategoryFilter::parse("Chemistry"));
    assert_eq!(dangling.len(), 1);
    assert!(store
        .add_entry(EntryDraft::new("Chemistry", "Redox"))
        .is_err());
}
