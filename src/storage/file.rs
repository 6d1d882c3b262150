use std::{
    fs,
    io::ErrorKind,
    path::PathBuf,
};

use tracing::debug;

use super::{KeyValueStore, StoreError};

/// One `<key>.json` file per entry under a root directory.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write leaves the previous value readable.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let path = self.entry_path(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let path = self.entry_path(key)?;
        let write_err = |source| StoreError::Write {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.root).map_err(write_err)?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(write_err)?;
        fs::rename(&tmp, &path).map_err(write_err)?;

        debug!("Stored {} bytes under '{}'", value.len(), key);
        Ok(())
    }
}
