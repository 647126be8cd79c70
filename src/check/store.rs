use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::check::error::StoreError;
use crate::check::record::CacheRecord;

/// Durable storage for the single cache record slot.
///
/// The file lives at a per-user path and is user-writable, so reads must
/// tolerate a missing, truncated, or corrupted file.
pub struct CacheStore {
    path: PathBuf,
}

impl CacheStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted record.
    ///
    /// A missing file, an unreadable file, and undeserializable content all
    /// read as "no cache"; this never surfaces an error to the caller.
    pub fn read(&self) -> Option<CacheRecord> {
        if !self.path.exists() {
            return None;
        }

        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                debug!("Reading {:?} failed: {}", self.path, e);
                return None;
            }
        };

        match serde_json::from_str(&content) {
            Ok(record) => Some(record),
            Err(e) => {
                debug!("Discarding unparseable cache at {:?}: {}", self.path, e);
                None
            }
        }
    }

    /// Persists the record, fully replacing prior content.
    ///
    /// The record is serialized to a sibling temporary file and renamed into
    /// place, so an interrupted write leaves the previous file intact.
    pub fn write(&self, record: &CacheRecord) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp_path = PathBuf::from(tmp);

        fs::write(&tmp_path, serde_json::to_string(record)?)?;
        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    fn sample_record() -> CacheRecord {
        CacheRecord {
            last_check: 1700000000.0,
            tool_version: "1.0.0".to_string(),
            latest_version: "1.2.0".to_string(),
        }
    }

    #[test]
    fn read_returns_none_when_file_is_absent() {
        let temp_dir = TempDir::new().unwrap();
        let store = CacheStore::new(temp_dir.path().join("version.json"));

        assert_eq!(store.read(), None);
    }

    #[rstest]
    #[case("this is not json")]
    #[case(r#"{"last_check": 17"#)] // truncated mid-write by a crashed process
    #[case(r#"{"unexpected": "shape"}"#)]
    #[case("")]
    fn read_returns_none_for_corrupted_content(#[case] content: &str) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("version.json");
        fs::write(&path, content).unwrap();

        let store = CacheStore::new(&path);
        assert_eq!(store.read(), None);
    }

    #[test]
    fn write_then_read_returns_the_record() {
        let temp_dir = TempDir::new().unwrap();
        let store = CacheStore::new(temp_dir.path().join("version.json"));

        let record = sample_record();
        store.write(&record).unwrap();

        assert_eq!(store.read(), Some(record));
    }

    #[test]
    fn write_creates_missing_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/version.json");
        let store = CacheStore::new(&path);

        store.write(&sample_record()).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn write_replaces_prior_content() {
        let temp_dir = TempDir::new().unwrap();
        let store = CacheStore::new(temp_dir.path().join("version.json"));

        store.write(&sample_record()).unwrap();

        let updated = CacheRecord {
            last_check: 1700009999.0,
            tool_version: "1.2.0".to_string(),
            latest_version: "1.3.0".to_string(),
        };
        store.write(&updated).unwrap();

        assert_eq!(store.read(), Some(updated));
    }

    #[test]
    fn write_leaves_no_temporary_file_behind() {
        let temp_dir = TempDir::new().unwrap();
        let store = CacheStore::new(temp_dir.path().join("version.json"));

        store.write(&sample_record()).unwrap();

        let leftovers: Vec<_> = fs::read_dir(temp_dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(leftovers, vec!["version.json"]);
    }
}
