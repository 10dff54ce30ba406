use super::{DataStore, Slot};
use crate::error::{QuotezError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

const QUOTES_FILENAME: &str = "quotes.json";
const CATEGORY_FILENAME: &str = "category";
const LAST_VIEWED_FILENAME: &str = "last_viewed.json";
const SESSION_DIRNAME: &str = "quotez-session";

pub struct FileStore {
    data_dir: PathBuf,
    session_dir: PathBuf,
}

impl FileStore {
    /// Store rooted at `data_dir`, keeping session state under the OS runtime
    /// directory (or the temp directory when there is none).
    pub fn new(data_dir: PathBuf) -> Self {
        let session_root = directories::BaseDirs::new()
            .and_then(|dirs| dirs.runtime_dir().map(Path::to_path_buf))
            .unwrap_or_else(std::env::temp_dir);
        Self {
            data_dir,
            session_dir: session_root.join(SESSION_DIRNAME),
        }
    }

    pub fn with_session_dir(mut self, session_dir: PathBuf) -> Self {
        self.session_dir = session_dir;
        self
    }

    pub fn slot_path(&self, slot: Slot) -> PathBuf {
        match slot {
            Slot::Quotes => self.data_dir.join(QUOTES_FILENAME),
            Slot::SelectedCategory => self.data_dir.join(CATEGORY_FILENAME),
            Slot::LastViewed => self.session_dir.join(LAST_VIEWED_FILENAME),
        }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.exists() {
            fs::create_dir_all(path).map_err(QuotezError::Io)?;
        }
        Ok(())
    }
}

impl DataStore for FileStore {
    fn read(&self, slot: Slot) -> Result<Option<String>> {
        let path = self.slot_path(slot);
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(QuotezError::Io)?;
        Ok(Some(content))
    }

    fn write(&mut self, slot: Slot, value: &str) -> Result<()> {
        let target = self.slot_path(slot);
        let dir = target
            .parent()
            .ok_or_else(|| QuotezError::Store(format!("No parent for {}", target.display())))?;
        self.ensure_dir(dir)?;

        // Atomic write
        let tmp = dir.join(format!(".slot-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, value).map_err(QuotezError::Io)?;
        fs::rename(&tmp, &target).map_err(QuotezError::Io)?;

        tracing::debug!(path = %target.display(), bytes = value.len(), "slot written");
        Ok(())
    }

    fn clear(&mut self, slot: Slot) -> Result<()> {
        let path = self.slot_path(slot);
        if path.exists() {
            fs::remove_file(path).map_err(QuotezError::Io)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> FileStore {
        FileStore::new(dir.path().join("data")).with_session_dir(dir.path().join("session"))
    }

    #[test]
    fn missing_slot_reads_none() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.read(Slot::Quotes).unwrap(), None);
    }

    #[test]
    fn write_creates_dirs_and_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.write(Slot::Quotes, "[]").unwrap();
        store.write(Slot::Quotes, "[1]").unwrap();

        assert_eq!(store.read(Slot::Quotes).unwrap().as_deref(), Some("[1]"));
        let leftovers: Vec<_> = fs::read_dir(dir.path().join("data"))
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[test]
    fn last_viewed_lives_in_session_dir() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.write(Slot::LastViewed, "{}").unwrap();

        assert!(dir.path().join("session").join(LAST_VIEWED_FILENAME).exists());
        assert!(!dir.path().join("data").join(LAST_VIEWED_FILENAME).exists());
    }

    #[test]
    fn clear_removes_file_and_tolerates_missing() {
        let dir = TempDir::new().unwrap();
        let mut store = store_in(&dir);

        store.write(Slot::SelectedCategory, "Life").unwrap();
        store.clear(Slot::SelectedCategory).unwrap();
        store.clear(Slot::SelectedCategory).unwrap();

        assert_eq!(store.read(Slot::SelectedCategory).unwrap(), None);
    }
}
