//! JSON file implementation of the record repository.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

use crate::domain::entities::Record;
use crate::domain::repositories::RecordRepository;
use crate::error::{StoreError, StoreResult};

/// Stores the record as a single pretty-printed JSON file.
///
/// Output is UTF-8 with a four-space indent and non-ASCII characters written
/// verbatim. Writes go to a sibling `*.tmp` file which is synced and then
/// renamed over the target, so readers observe either the old or the new
/// document and never a partial one.
pub struct JsonRecordRepository {
    path: PathBuf,
}

impl JsonRecordRepository {
    /// Creates a repository backed by the file at `path`.
    ///
    /// The file does not need to exist; it is created on the first save along
    /// with any missing parent directories.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(OsString::from)
            .unwrap_or_else(|| OsString::from("record"));
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

/// Encodes a record the way the file format expects.
pub fn encode_record(record: &Record) -> StoreResult<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
    record.serialize(&mut serializer)?;
    Ok(buf)
}

#[async_trait]
impl RecordRepository for JsonRecordRepository {
    async fn load(&self) -> StoreResult<Option<Record>> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("Record file {} does not exist yet", self.path.display());
                return Ok(None);
            }
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }

        let record: Option<Record> =
            serde_json::from_slice(&bytes).map_err(|source| StoreError::Parse {
                path: self.path.clone(),
                source,
            })?;

        Ok(record.filter(|r| !r.is_empty()))
    }

    async fn save(&self, record: &Record) -> StoreResult<()> {
        let bytes = encode_record(record)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| self.write_error(e))?;
        }

        let temp_path = self.temp_path();
        let mut file = fs::File::create(&temp_path)
            .await
            .map_err(|e| self.write_error(e))?;
        file.write_all(&bytes)
            .await
            .map_err(|e| self.write_error(e))?;
        file.sync_all().await.map_err(|e| self.write_error(e))?;
        drop(file);

        if let Err(e) = fs::rename(&temp_path, &self.path).await {
            let _ = fs::remove_file(&temp_path).await;
            return Err(self.write_error(e));
        }

        debug!(
            "Record file {} written ({} bytes)",
            self.path.display(),
            bytes.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{FavoriteActor, Group};
    use tempfile::TempDir;

    fn repo_in(dir: &TempDir) -> JsonRecordRepository {
        JsonRecordRepository::new(dir.path().join("record.json"))
    }

    #[test]
    fn test_temp_path_is_sibling() {
        let repo = JsonRecordRepository::new("/data/record.json");

        assert_eq!(repo.temp_path(), PathBuf::from("/data/record.json.tmp"));
    }

    #[test]
    fn test_encode_uses_four_space_indent_and_keeps_unicode() {
        let mut record = Record::default();
        record.stars.push(FavoriteActor::new("三上悠亜", "abc123"));

        let text = String::from_utf8(encode_record(&record).unwrap()).unwrap();

        assert!(text.contains("三上悠亜"));
        assert!(!text.contains("\\u"));
        assert!(text.starts_with("{\n    \"stars\": [\n        {\n"));
    }

    #[tokio::test]
    async fn test_missing_file_is_no_data() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);

        assert!(repo.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_blank_null_and_empty_object_are_no_data() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);

        for contents in ["", "  \n", "null", "{}"] {
            std::fs::write(repo.path(), contents).unwrap();
            assert!(
                repo.load().await.unwrap().is_none(),
                "contents {:?} should load as no data",
                contents
            );
        }
    }

    #[tokio::test]
    async fn test_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let repo = repo_in(&dir);
        std::fs::write(repo.path(), "{ not json").unwrap();

        let err = repo.load().await.unwrap_err();

        assert!(matches!(err, StoreError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_directory_in_place_of_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let repo = JsonRecordRepository::new(dir.path());

        let err = repo.load().await.unwrap_err();

        assert!(matches!(err, StoreError::Read { .. }));
    }

    #[tokio::test]
    async fn test_save_creates_parent_dirs_and_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let repo = JsonRecordRepository::new(dir.path().join("nested/deeper/record.json"));
        let mut record = Record::default();
        record.groups.push(Group::new(-100, "Group"));

        repo.save(&record).await.unwrap();

        assert!(repo.path().exists());
        assert!(!repo.temp_path().exists());
        assert_eq!(repo.load().await.unwrap(), Some(record));
    }
}
