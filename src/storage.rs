use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ScrapeError;
use crate::types::{OverwritePolicy, SaveOutcome};

pub const DEFAULT_OUTPUT_ROOT: &str = "Scraped Images";

/// Writes images to `<root>/<folder>/<file name>`
#[derive(Debug, Clone)]
pub struct ImageStore {
    root: PathBuf,
    overwrite: OverwritePolicy,
}

impl ImageStore {
    pub fn new(root: impl Into<PathBuf>, overwrite: OverwritePolicy) -> Self {
        Self {
            root: root.into(),
            overwrite,
        }
    }

    pub fn folder_path(&self, folder: &str) -> PathBuf {
        self.root.join(folder)
    }

    /// Create the product folder if needed and write the file
    pub fn save(&self, folder: &str, file_name: &str, bytes: &[u8]) -> Result<SaveOutcome, ScrapeError> {
        let dir = self.folder_path(folder);
        fs::create_dir_all(&dir).map_err(|e| ScrapeError::filesystem(&dir, e))?;

        let path = dir.join(file_name);
        if self.overwrite == OverwritePolicy::Skip && path.exists() {
            tracing::debug!(path = %path.display(), "keeping existing file");
            return Ok(SaveOutcome::SkippedExisting);
        }

        write_file(&path, bytes)?;
        Ok(SaveOutcome::Written)
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), ScrapeError> {
    fs::write(path, bytes).map_err(|e| ScrapeError::filesystem(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_creates_nested_folder() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path().join(DEFAULT_OUTPUT_ROOT), OverwritePolicy::Overwrite);

        let outcome = store.save("Blue Hoodie", "front.jpg", b"front").unwrap();
        assert_eq!(outcome, SaveOutcome::Written);

        let saved = dir.path().join("Scraped Images").join("Blue Hoodie").join("front.jpg");
        assert_eq!(fs::read(saved).unwrap(), b"front");
    }

    #[test]
    fn test_save_overwrites_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path(), OverwritePolicy::Overwrite);

        store.save("Tee", "img.jpg", b"first").unwrap();
        assert_eq!(store.save("Tee", "img.jpg", b"second").unwrap(), SaveOutcome::Written);
        assert_eq!(fs::read(dir.path().join("Tee/img.jpg")).unwrap(), b"second");
    }

    #[test]
    fn test_skip_policy_keeps_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = ImageStore::new(dir.path(), OverwritePolicy::Skip);

        store.save("Tee", "img.jpg", b"first").unwrap();
        assert_eq!(
            store.save("Tee", "img.jpg", b"second").unwrap(),
            SaveOutcome::SkippedExisting
        );
        assert_eq!(fs::read(dir.path().join("Tee/img.jpg")).unwrap(), b"first");
    }

    #[test]
    fn test_unwritable_root_is_filesystem_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, b"x").unwrap();

        let store = ImageStore::new(&blocker, OverwritePolicy::Overwrite);
        let err = store.save("Tee", "img.jpg", b"data").unwrap_err();
        assert!(matches!(err, ScrapeError::Filesystem { .. }));
    }
}
