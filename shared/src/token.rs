//! Persistent storage for the authentication token
//!
//! The token is kept in a single file under the application config directory,
//! the desktop equivalent of the fixed storage key the service's web client
//! uses. Each successful login overwrites the previous token; nothing in the
//! client ever deletes it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::SharedResult;

/// On-disk store for the single authentication token.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Create a store backed by an explicit file path.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Store rooted at the default application config directory.
    pub fn default_location() -> Self {
        Self::new(crate::config::paths::token_file())
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Persist `token`, replacing whatever was stored before.
    pub fn save(&self, token: &str) -> SharedResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, token)?;
        debug!(path = %self.path.display(), "token persisted");
        Ok(())
    }

    /// Read the stored token, if any. A missing file or an empty file counts
    /// as no token.
    pub fn load(&self) -> SharedResult<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                let token = raw.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> TokenStore {
        TokenStore::new(dir.path().join("token"))
    }

    #[test]
    fn missing_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn saved_token_loads_back_identical() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save("eyJhbGciOiJIUzI1NiJ9.abc.def").unwrap();
        assert_eq!(
            store.load().unwrap().as_deref(),
            Some("eyJhbGciOiJIUzI1NiJ9.abc.def")
        );
    }

    #[test]
    fn save_overwrites_previous_token() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save("first").unwrap();
        store.save("second").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn empty_file_loads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save("").unwrap();
        assert_eq!(store.load().unwrap(), None);
    }

    #[test]
    fn save_creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let store = TokenStore::new(dir.path().join("nested").join("dir").join("token"));

        store.save("tok").unwrap();
        assert_eq!(store.load().unwrap().as_deref(), Some("tok"));
    }
}
