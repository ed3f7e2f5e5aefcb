use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use parking_lot::Mutex;
use tracing::{debug, info};

use super::KvStore;
use crate::errors::{Result, TermitoonError};

/// Durable key-value store rooted in a data directory.
///
/// Each key maps to `<data_dir>/<key>.json`. Values are replaced whole:
/// the new value is written to a uniquely named sibling temp file and
/// renamed over the old one, so a reader never observes a half-written
/// value. Writers in this process are serialized; writers in other
/// processes race as last writer wins.
pub struct FileKvStore {
    root: PathBuf,
    write_lock: Mutex<()>,
}

impl FileKvStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let root = data_dir.as_ref().to_path_buf();

        // 如果不存在就初始化
        if !root.exists() {
            fs::create_dir_all(&root).map_err(|e| {
                TermitoonError::file_operation(format!(
                    "Failed to create data directory {}: {}",
                    root.display(),
                    e
                ))
            })?;
            info!("Created data directory: {}", root.display());
        }

        Ok(Self {
            root,
            write_lock: Mutex::new(()),
        })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
            && !key.starts_with('.');
        if !valid {
            return Err(TermitoonError::validation(format!(
                "Invalid storage key: {:?}",
                key
            )));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }

    /// Temp file next to the target. Keys never start with '.', so this
    /// cannot collide with a stored value.
    fn temp_path_for(&self, key: &str) -> PathBuf {
        let nonce = uuid::Uuid::new_v4().simple();
        self.root.join(format!(".{}.{}.tmp", key, nonce))
    }
}

impl KvStore for FileKvStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TermitoonError::file_operation(format!(
                "Failed to read {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let tmp = self.temp_path_for(key);

        let _guard = self.write_lock.lock();
        fs::write(&tmp, value).map_err(|e| {
            TermitoonError::file_operation(format!("Failed to write {}: {}", tmp.display(), e))
        })?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(TermitoonError::file_operation(format!(
                "Failed to replace {}: {}",
                path.display(),
                e
            )));
        }

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let _guard = self.write_lock.lock();
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(TermitoonError::file_operation(format!(
                "Failed to remove {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn backend_name(&self) -> &'static str {
        "file"
    }
}
