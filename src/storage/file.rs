//! Store backed by a small JSON object file

use std::collections::BTreeMap;
use std::path::{
    Path,
    PathBuf,
};

use super::{
    LanguageStore,
    StorageError,
};

/// Persists values as a JSON object, e.g. `{"language": "ta"}`.
///
/// Every `load` rereads the file, so a fresh `FileStore` over the same path
/// sees what an earlier one saved (the equivalent of a page reload).
#[derive(Debug, Clone)]
pub struct FileStore {
    /// Backing file
    path: PathBuf,
}

impl FileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current file contents; a missing or corrupt file reads as empty.
    fn read_all(&self) -> BTreeMap<String, String> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return BTreeMap::new(),
            Err(e) => {
                tracing::warn!("Failed to read storage file {:?}: {}", self.path, e);
                return BTreeMap::new();
            }
        };

        serde_json::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!("Ignoring corrupt storage file {:?}: {}", self.path, e);
            BTreeMap::new()
        })
    }
}

impl LanguageStore for FileStore {
    fn load(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self.read_all();
        values.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&values)?)?;

        tracing::debug!(path = %self.path.display(), key, value, "Saved storage value");
        Ok(())
    }
}
