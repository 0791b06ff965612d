use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};
use crate::storage::KeyValueStore;

/// Key-value store keeping one `<key>.json` file per key under a directory
#[derive(Debug, Clone)]
pub struct FileStore {
    base_dir: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// File backing `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(Error::InvalidInput(format!(
                "storage key must be non-empty ASCII alphanumerics, '_' or '-': {:?}",
                key
            )));
        }
        Ok(self.base_dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.base_dir)?;

        // Write beside the target and rename so readers never see a partial file
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value)?;
        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_reads_as_none() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());
        assert_eq!(store.get("mazeGameLeaderboard").unwrap(), None);
    }

    #[test]
    fn test_set_creates_directory_and_file() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("data").join("mazeboard");
        let mut store = FileStore::new(&nested);

        store.set("mazeGameLeaderboard", "{}").unwrap();

        let path = nested.join("mazeGameLeaderboard.json");
        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert!(!nested.join("mazeGameLeaderboard.json.tmp").exists());
    }

    #[test]
    fn test_values_survive_a_new_instance() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path());
        store.set("scores", r#"{"level1":[1.5]}"#).unwrap();

        let reopened = FileStore::new(dir.path());
        assert_eq!(
            reopened.get("scores").unwrap().as_deref(),
            Some(r#"{"level1":[1.5]}"#)
        );
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let dir = tempdir().unwrap();
        let mut store = FileStore::new(dir.path());

        assert!(store.set("../escape", "x").unwrap_err().is_invalid_input());
        assert!(store.get("").unwrap_err().is_invalid_input());
    }

    #[test]
    fn test_write_into_file_path_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, "x").unwrap();

        let mut store = FileStore::new(&blocker);
        assert!(store.set("scores", "{}").is_err());
    }
}
