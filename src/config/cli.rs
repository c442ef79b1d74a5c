use crate::core::KeyValueStore;
use crate::utils::error::{GymError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Local storage on disk: one `<key>.json` file per key under `base_path`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    base_path: String,
}

impl FileStorage {
    pub fn new(base_path: String) -> Self {
        Self { base_path }
    }

    fn item_path(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\', '\0']) || key.starts_with('.') {
            return Err(GymError::StorageError {
                message: format!("invalid storage key '{}'", key),
            });
        }
        Ok(Path::new(&self.base_path).join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let full_path = self.item_path(key)?;
        match fs::read_to_string(full_path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let full_path = self.item_path(key)?;

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(full_path, value)?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let full_path = self.item_path(key)?;
        match fs::remove_file(full_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_set_get_remove() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").to_str().unwrap().to_string();
        let mut storage = FileStorage::new(base);

        assert_eq!(storage.get_item("aoGymUser").unwrap(), None);

        storage.set_item("aoGymUser", "{\"id\":1}").unwrap();
        assert_eq!(
            storage.get_item("aoGymUser").unwrap().as_deref(),
            Some("{\"id\":1}")
        );

        storage.remove_item("aoGymUser").unwrap();
        storage.remove_item("aoGymUser").unwrap();
        assert_eq!(storage.get_item("aoGymUser").unwrap(), None);
    }

    #[test]
    fn test_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let mut storage = FileStorage::new(temp_dir.path().to_str().unwrap().to_string());

        assert!(storage.set_item("../escape", "x").is_err());
        assert!(storage.get_item("").is_err());
    }
}
