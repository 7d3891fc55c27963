//! `window.localStorage` backend for the web build.

use gloo_storage::{LocalStorage, Storage as _};

use crate::{KeyValueStore, StorageError};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStore;

fn js_error(op: &str, key: &str, err: impl std::fmt::Debug) -> StorageError {
    StorageError::Backend(format!("localStorage {op} {key:?} failed: {err:?}"))
}

impl KeyValueStore for BrowserStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        LocalStorage::raw()
            .get_item(key)
            .map_err(|e| js_error("read", key, e))
    }

    fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        LocalStorage::raw()
            .set_item(key, value)
            .map_err(|e| js_error("write", key, e))
    }
}
