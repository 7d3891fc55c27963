//! Key-value storage for the board's three persisted records.
//!
//! Backends:
//! - `localStorage` in the browser
//! - On-disk files for the desktop build and local dev
//! - In-memory for tests
//!
//! Values are JSON documents wrapped in a small version envelope. Reads are
//! total: a missing, corrupt or unreadable record yields the caller's
//! default and a warning in the log, never an error.

use std::path::PathBuf;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

mod backend;
#[cfg(target_arch = "wasm32")]
mod browser;
mod filesystem;
mod memory;

pub use backend::KeyValueStore;
#[cfg(target_arch = "wasm32")]
pub use browser::BrowserStore;
pub use filesystem::FileStore;
pub use memory::MemoryStore;

/// Version written into every envelope.
pub const SCHEMA_VERSION: u32 = 1;

const DEFAULT_FS_ROOT: &str = "./data/shiftmatch";

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("invalid storage config: {0}")]
    InvalidConfig(String),

    #[error("invalid key: {0:?}")]
    InvalidKey(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported schema version {version} for {key:?}")]
    UnsupportedVersion { key: String, version: u32 },

    #[error("storage backend error: {0}")]
    Backend(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageKind {
    Browser,
    Filesystem,
    Memory,
}

impl StorageKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StorageKind::Browser => "browser",
            StorageKind::Filesystem => "filesystem",
            StorageKind::Memory => "memory",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageBackendConfig {
    Browser,
    Filesystem { root: PathBuf },
    Memory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: StorageBackendConfig,
    /// Optional namespace applied to all keys.
    pub prefix: Option<String>,
}

impl StorageConfig {
    pub fn memory() -> Self {
        Self {
            backend: StorageBackendConfig::Memory,
            prefix: None,
        }
    }

    pub fn filesystem(root: impl Into<PathBuf>) -> Self {
        Self {
            backend: StorageBackendConfig::Filesystem { root: root.into() },
            prefix: None,
        }
    }

    pub fn browser() -> Self {
        Self {
            backend: StorageBackendConfig::Browser,
            prefix: None,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = non_empty(prefix.into());
        self
    }

    /// Build a config from environment variables.
    ///
    /// - `STORAGE_BACKEND`: `browser`, `filesystem` (`fs`) or `memory` (`mem`).
    ///   Defaults to `browser` on wasm and `filesystem` elsewhere.
    /// - `STORAGE_FS_ROOT`: filesystem root (default: `./data/shiftmatch`)
    /// - `STORAGE_PREFIX`: optional key namespace
    pub fn from_env() -> Result<Self, StorageError> {
        Self::from_vars(
            std::env::var("STORAGE_BACKEND").ok().as_deref(),
            std::env::var("STORAGE_FS_ROOT").ok(),
            std::env::var("STORAGE_PREFIX").ok(),
        )
    }

    fn from_vars(
        backend: Option<&str>,
        fs_root: Option<String>,
        prefix: Option<String>,
    ) -> Result<Self, StorageError> {
        let root = || {
            fs_root
                .clone()
                .and_then(non_empty)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FS_ROOT))
        };

        let cfg = match backend.map(|b| b.trim().to_ascii_lowercase()).as_deref() {
            Some("browser") => Self::browser(),
            Some("filesystem") | Some("fs") => Self::filesystem(root()),
            Some("memory") | Some("mem") => Self::memory(),
            Some(other) => {
                return Err(StorageError::InvalidConfig(format!(
                    "unsupported STORAGE_BACKEND={other} (expected browser|filesystem|memory)"
                )));
            }
            None if cfg!(target_arch = "wasm32") => Self::browser(),
            None => Self::filesystem(root()),
        };

        Ok(Self {
            prefix: prefix.and_then(non_empty),
            ..cfg
        })
    }
}

/// Handle to the configured store. Cheap to clone.
#[derive(Clone)]
pub struct Storage {
    kind: StorageKind,
    store: Arc<dyn KeyValueStore + Send + Sync>,
    prefix: Option<String>,
}

impl std::fmt::Debug for Storage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storage")
            .field("kind", &self.kind)
            .field("prefix", &self.prefix)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    version: u32,
    data: &'a T,
}

#[derive(Deserialize)]
struct Envelope {
    version: u32,
    data: serde_json::Value,
}

impl Storage {
    pub fn kind_str(&self) -> &'static str {
        self.kind.as_str()
    }

    pub fn new(cfg: StorageConfig) -> Result<Self, StorageError> {
        let (kind, store): (StorageKind, Arc<dyn KeyValueStore + Send + Sync>) = match cfg.backend
        {
            StorageBackendConfig::Browser => (StorageKind::Browser, browser_store()?),
            StorageBackendConfig::Filesystem { root } => {
                (StorageKind::Filesystem, Arc::new(FileStore::open(&root)?) as _)
            }
            StorageBackendConfig::Memory => (StorageKind::Memory, Arc::new(MemoryStore::new()) as _),
        };

        tracing::debug!("Opened {} storage", kind.as_str());

        Ok(Self {
            kind,
            store,
            prefix: cfg.prefix.and_then(non_empty),
        })
    }

    pub fn from_env() -> Result<Self, StorageError> {
        Self::new(StorageConfig::from_env()?)
    }

    /// Fresh in-memory storage.
    pub fn memory() -> Self {
        Self {
            kind: StorageKind::Memory,
            store: Arc::new(MemoryStore::new()),
            prefix: None,
        }
    }

    fn to_key(&self, key: &str) -> Result<String, StorageError> {
        let key = key.trim_matches('/');
        if key.is_empty() {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        Ok(match self.prefix.as_deref().map(|p| p.trim_matches('/')) {
            Some(prefix) if !prefix.is_empty() => format!("{prefix}/{key}"),
            _ => key.to_string(),
        })
    }

    pub fn get_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.store.get(&self.to_key(key)?)
    }

    pub fn put_raw(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.store.put(&self.to_key(key)?, value)
    }

    /// Write `value` under `key`, replacing whatever was there.
    pub fn put_json_value<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let json = serde_json::to_string(&EnvelopeRef {
            version: SCHEMA_VERSION,
            data: value,
        })?;
        self.put_raw(key, &json)?;
        tracing::debug!("Wrote {key} ({} bytes)", json.len());
        Ok(())
    }

    /// Strict read: `Ok(None)` when absent, an error when undecodable.
    ///
    /// Accepts the versioned envelope as well as a bare, untagged value.
    pub fn get_json_value<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(text) = self.get_raw(key)? else {
            return Ok(None);
        };

        let value: serde_json::Value = serde_json::from_str(&text)?;
        let is_envelope = matches!(
            &value,
            serde_json::Value::Object(map)
                if map.len() == 2 && map.contains_key("version") && map.contains_key("data")
        );
        let data = if is_envelope {
            let envelope: Envelope = serde_json::from_value(value)?;
            if envelope.version != SCHEMA_VERSION {
                return Err(StorageError::UnsupportedVersion {
                    key: key.to_string(),
                    version: envelope.version,
                });
            }
            envelope.data
        } else {
            value
        };

        if data.is_null() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(data)?))
    }

    /// Total read: the stored value, or `default()` when it is absent or
    /// cannot be read. Failures are logged, not returned.
    pub fn read_or_default<T: DeserializeOwned>(&self, key: &str, default: impl FnOnce() -> T) -> T {
        match self.get_json_value(key) {
            Ok(Some(value)) => value,
            Ok(None) => default(),
            Err(e) => {
                tracing::warn!("Ignoring unreadable {key} record: {e}");
                default()
            }
        }
    }

    /// Total read of a list, decoded one element at a time.
    ///
    /// Elements that do not decode as `T` are skipped with a warning so one
    /// bad entry never hides the rest. A record that is not a list at all
    /// reads as empty.
    pub fn read_list<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        let items: Vec<serde_json::Value> = self.read_or_default(key, Vec::new);
        items
            .into_iter()
            .enumerate()
            .filter_map(|(index, item)| match serde_json::from_value(item) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!("Skipping unreadable {key}[{index}]: {e}");
                    None
                }
            })
            .collect()
    }
}

#[cfg(target_arch = "wasm32")]
fn browser_store() -> Result<Arc<dyn KeyValueStore + Send + Sync>, StorageError> {
    let store: Arc<dyn KeyValueStore + Send + Sync> = Arc::new(BrowserStore);
    Ok(store)
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_store() -> Result<Arc<dyn KeyValueStore + Send + Sync>, StorageError> {
    Err(StorageError::InvalidConfig(
        "browser storage is only available in wasm builds".to_string(),
    ))
}

fn non_empty(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
