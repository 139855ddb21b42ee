use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
    #[error("storage io: {0}")]
    Io(#[from] io::Error),
}

/// Synchronous string key-value store, the shape of browser `localStorage`.
pub trait CartStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<T: CartStorage + ?Sized> CartStorage for &T {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Default)]
pub struct InMemoryStorage {
    entries: RefCell<HashMap<String, String>>,
}

impl InMemoryStorage {
    pub fn with_entry(key: &str, value: &str) -> Self {
        let storage = Self::default();
        storage
            .entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        storage
    }
}

impl CartStorage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// One `<key>.json` file per key inside `root`.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn open(root: impl AsRef<Path>) -> Result<Self, StorageError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_owned()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl CartStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        // Readers only ever see a complete value.
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value)?;
        fs::rename(&staging, &path)?;
        debug!(key, bytes = value.len(), "storage value written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_overwrites_previous_value() -> anyhow::Result<()> {
        let storage = InMemoryStorage::default();
        assert_eq!(storage.get("cart")?, None);

        storage.set("cart", "[]")?;
        storage.set("cart", r#"[{"id":1}]"#)?;

        assert_eq!(storage.get("cart")?.as_deref(), Some(r#"[{"id":1}]"#));
        Ok(())
    }

    #[test]
    fn file_storage_survives_reopen() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;

        let storage = FileStorage::open(dir.path())?;
        assert_eq!(storage.get("cart")?, None);
        storage.set("cart", "[1,2,3]")?;
        drop(storage);

        let reopened = FileStorage::open(dir.path())?;
        assert_eq!(reopened.get("cart")?.as_deref(), Some("[1,2,3]"));
        assert!(!dir.path().join("cart.json.tmp").exists());
        Ok(())
    }

    #[test]
    fn file_storage_rejects_path_like_keys() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let storage = FileStorage::open(dir.path())?;

        let err = storage.set("../escape", "x").unwrap_err();
        assert!(matches!(err, StorageError::InvalidKey(_)));
        assert!(matches!(storage.get(""), Err(StorageError::InvalidKey(_))));
        Ok(())
    }
}
