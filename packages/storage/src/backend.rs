//! The raw key-value capability every backend provides.

use crate::StorageError;

/// A flat string-to-string store.
///
/// Every `put` replaces the whole value for its key; there are no
/// transactions, so two writers racing on one key end up last-writer-wins.
pub trait KeyValueStore {
    /// Read the value for `key`, `None` when the key has never been written.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value for `key`.
    fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;
}
