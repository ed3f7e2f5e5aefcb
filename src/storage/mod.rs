//! Local key-value storage
//!
//! Everything Termitoon persists lives in a synchronous, process-local
//! key-value store: string keys, string values, no partial updates.
//! The `file` backend is durable (one file per key inside the data
//! directory); the `memory` backend lives as long as the process and backs
//! per-session state.

use std::sync::Arc;

use tracing::debug;

use crate::config::StorageConfig;
use crate::errors::{Result, TermitoonError};

pub mod file;
pub mod memory;
pub mod models;

pub use file::FileKvStore;
pub use memory::MemoryKvStore;
pub use models::Link;

/// Synchronous key-value store.
///
/// Reads always hit the backing medium; implementations must not cache
/// values across calls, so a write made by another handle (or another
/// process sharing the data directory) is visible on the next `get`.
pub trait KvStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
    fn backend_name(&self) -> &'static str;
}

pub struct StorageFactory;

impl StorageFactory {
    pub fn create(config: &StorageConfig) -> Result<Arc<dyn KvStore>> {
        debug!("Creating storage backend: {}", config.backend);

        let store: Arc<dyn KvStore> = match config.backend.as_str() {
            "file" => Arc::new(FileKvStore::new(&config.data_dir)?),
            "memory" => Arc::new(MemoryKvStore::new()),
            other => {
                return Err(TermitoonError::storage_backend_not_found(format!(
                    "Unknown storage backend '{}'. Valid: file, memory",
                    other
                )));
            }
        };

        Ok(store)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_creates_memory_backend() {
        let config = StorageConfig {
            backend: "memory".into(),
            data_dir: "unused".into(),
        };
        let store = StorageFactory::create(&config).expect("memory backend");
        assert_eq!(store.backend_name(), "memory");
    }

    #[test]
    fn test_factory_creates_file_backend() {
        let dir = tempfile::TempDir::new().expect("temp dir");
        let config = StorageConfig {
            backend: "file".into(),
            data_dir: dir.path().join("store").display().to_string(),
        };
        let store = StorageFactory::create(&config).expect("file backend");
        assert_eq!(store.backend_name(), "file");
        assert!(dir.path().join("store").is_dir());
    }

    #[test]
    fn test_factory_rejects_unknown_backend() {
        let config = StorageConfig {
            backend: "redis".into(),
            data_dir: "unused".into(),
        };
        let err = match StorageFactory::create(&config) {
            Ok(_) => panic!("unknown backend should fail"),
            Err(e) => e,
        };
        assert!(matches!(err, TermitoonError::StorageBackendNotFound(_)));
    }
}
