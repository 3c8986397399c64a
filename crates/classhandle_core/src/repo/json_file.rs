//! JSON file persistence.
//!
//! # Responsibility
//! - Read and write the whole store as one human-readable JSON document.
//! - Replace the file atomically on save (write temp sibling, then rename).
//!
//! # Invariants
//! - A failed save leaves the previous file untouched.
//! - Read paths reject invalid persisted state instead of masking it.

use super::{PersistError, PersistResult, StoreRepository};
use crate::store::Store;
use log::{error, info, warn};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

const TEMP_SUFFIX: &str = ".tmp";
const JSON_INDENT: &[u8] = b"    ";

/// Why a load fell back to defaults.
enum LoadFailure {
    Missing,
    Unreadable(std::io::Error),
    Malformed(String),
}

impl LoadFailure {
    fn reason(&self) -> String {
        match self {
            Self::Missing => "missing".to_string(),
            Self::Unreadable(err) => format!("unreadable error={err}"),
            Self::Malformed(details) => format!("malformed error={details}"),
        }
    }
}

/// Store persisted to a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_store(&self) -> Result<Store, LoadFailure> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => return Err(LoadFailure::Missing),
            Err(err) => return Err(LoadFailure::Unreadable(err)),
        };

        let store: Store = serde_json::from_reader(BufReader::new(file))
            .map_err(|err| LoadFailure::Malformed(err.to_string()))?;
        store.check_integrity().map_err(LoadFailure::Malformed)?;
        Ok(store)
    }

    fn temp_path(&self) -> PersistResult<PathBuf> {
        let file_name = self.path.file_name().ok_or_else(|| PersistError::Io {
            path: self.path.clone(),
            source: std::io::Error::new(ErrorKind::InvalidInput, "data path has no file name"),
        })?;
        let mut temp_name = file_name.to_os_string();
        temp_name.push(TEMP_SUFFIX);
        Ok(self.path.with_file_name(temp_name))
    }

    fn write_and_replace(&self, store: &Store) -> PersistResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| PersistError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let temp_path = self.temp_path()?;
        let result = write_snapshot(&temp_path, store).and_then(|()| {
            fs::rename(&temp_path, &self.path).map_err(|source| PersistError::Io {
                path: self.path.clone(),
                source,
            })
        });
        if result.is_err() {
            let _ = fs::remove_file(&temp_path);
        }
        result
    }
}

impl StoreRepository for JsonFileRepository {
    fn load(&self) -> Store {
        let started_at = Instant::now();
        match self.read_store() {
            Ok(store) => {
                info!(
                    "event=store_load module=repo status=ok categories={} entries={} duration_ms={}",
                    store.categories().len(),
                    store.entry_count(),
                    started_at.elapsed().as_millis()
                );
                store
            }
            Err(LoadFailure::Missing) => {
                info!(
                    "event=store_load module=repo status=fallback reason=missing path={}",
                    self.path.display()
                );
                Store::default()
            }
            Err(failure) => {
                warn!(
                    "event=store_load module=repo status=fallback reason={} path={}",
                    failure.reason(),
                    self.path.display()
                );
                Store::default()
            }
        }
    }

    fn save(&mut self, store: &Store) -> PersistResult<()> {
        let started_at = Instant::now();
        match self.write_and_replace(store) {
            Ok(()) => {
                info!(
                    "event=store_save module=repo status=ok entries={} duration_ms={}",
                    store.entry_count(),
                    started_at.elapsed().as_millis()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=store_save module=repo status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

fn write_snapshot(path: &Path, store: &Store) -> PersistResult<()> {
    let io_error = |source: std::io::Error| PersistError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut writer, PrettyFormatter::with_indent(JSON_INDENT));
    store.serialize(&mut serializer)?;
    writer.write_all(b"\n").map_err(io_error)?;

    let file = writer
        .into_inner()
        .map_err(|err| io_error(err.into_error()))?;
    file.sync_all().map_err(io_error)
}

#[cfg(test)]
mod tests {
    use super::JsonFileRepository;
    use std::path::Path;

    #[test]
    fn temp_path_is_a_sibling_with_suffix() {
        let repo = JsonFileRepository::new("/data/class_data_v2.json");
        assert_eq!(
            repo.temp_path().unwrap(),
            Path::new("/data/class_data_v2.json.tmp")
        );
    }

    #[test]
    fn temp_path_requires_file_name() {
        let repo = JsonFileRepository::new("/");
        assert!(repo.temp_path().is_err());
    }
}
