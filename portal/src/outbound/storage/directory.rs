//! Directory-backed durable store built on `cap_std`.
//!
//! Each key is one file inside a capability-scoped directory, so a key can
//! never address anything outside it. Used by non-browser hosts to persist
//! the session token across runs.

use std::io;
use std::path::Path;

use cap_std::{ambient_authority, fs::Dir};

use crate::domain::ports::{DurableStore, DurableStoreError};

/// Store keeping one file per key under a directory.
#[derive(Debug)]
pub struct DirectoryDurableStore {
    dir: Dir,
}

impl DirectoryDurableStore {
    /// Open `path`, creating it when missing.
    ///
    /// # Errors
    ///
    /// Returns [`DurableStoreError::Unavailable`] when the directory cannot
    /// be created or opened.
    pub fn open(path: &Path) -> Result<Self, DurableStoreError> {
        Dir::create_ambient_dir_all(path, ambient_authority()).map_err(|err| {
            DurableStoreError::unavailable(format!("create {}: {err}", path.display()))
        })?;
        let dir = Dir::open_ambient_dir(path, ambient_authority()).map_err(|err| {
            DurableStoreError::unavailable(format!("open {}: {err}", path.display()))
        })?;
        Ok(Self { dir })
    }

    /// Wrap an already opened directory capability.
    pub fn from_dir(dir: Dir) -> Self {
        Self { dir }
    }
}

fn validate_key(key: &str) -> Result<&Path, DurableStoreError> {
    let well_formed = !key.is_empty()
        && !key.starts_with('.')
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'));
    if well_formed {
        Ok(Path::new(key))
    } else {
        Err(DurableStoreError::io(key, "key is not a plain file name"))
    }
}

impl DurableStore for DirectoryDurableStore {
    fn read(&self, key: &str) -> Result<Option<String>, DurableStoreError> {
        match self.dir.read_to_string(validate_key(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(DurableStoreError::io(key, err.to_string())),
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), DurableStoreError> {
        self.dir
            .write(validate_key(key)?, value)
            .map_err(|err| DurableStoreError::io(key, err.to_string()))
    }

    fn remove(&self, key: &str) -> Result<(), DurableStoreError> {
        match self.dir.remove_file(validate_key(key)?) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(DurableStoreError::io(key, err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[test]
    fn values_survive_reopening() {
        let temp = tempfile::tempdir().expect("temp dir");
        let first = DirectoryDurableStore::open(temp.path()).expect("open store");
        first.write("token", "abc").expect("write");
        drop(first);

        let second = DirectoryDurableStore::open(temp.path()).expect("reopen store");
        assert_eq!(second.read("token").expect("read"), Some("abc".to_owned()));
    }

    #[test]
    fn open_creates_missing_directories() {
        let temp = tempfile::tempdir().expect("temp dir");
        let nested = temp.path().join("portal").join("session");
        let store = DirectoryDurableStore::open(&nested).expect("open nested store");
        assert_eq!(store.read("token").expect("read"), None);
    }

    #[test]
    fn remove_is_idempotent() {
        let temp = tempfile::tempdir().expect("temp dir");
        let store = DirectoryDurableStore::open(temp.path()).expect("open store");
        store.write("token", "abc").expect("write");
        store.remove("token").expect("first remove");
        store.remove("token").expect("second remove");
        assert_eq!(store.read("token").expect("read"), None);
    }

    #[rstest]
    #[case("")]
    #[case("../token")]
    #[case("nested/token")]
    #[case(".hidden")]
    fn rejects_keys_that_are_not_plain_names(#[case] key: &str) {
        let temp = tempfile::tempdir().expect("temp dir");
        let store = DirectoryDurableStore::open(temp.path()).expect("open store");
        let err = store.write(key, "abc").expect_err("key must be rejected");
        assert!(matches!(err, DurableStoreError::Io { .. }));
    }
}
