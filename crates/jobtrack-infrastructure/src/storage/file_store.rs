//! Directory-backed key-value store with atomic writes.
//!
//! Each key maps to `{dir}/{key}.json`. Writes go through a temporary file,
//! an explicit fsync and an atomic rename, under an exclusive lock file.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write as IoWrite};
use std::path::{Path, PathBuf};

use fs2::FileExt;

use jobtrack_core::error::{JobTrackError, Result};
use jobtrack_core::storage::KeyValueStore;

/// A [`KeyValueStore`] persisting each key as a file in one directory.
///
/// Provides:
/// - **Atomicity**: values are replaced via tmp file + atomic rename
/// - **Isolation**: an `fs2` lock file serializes writers from other processes
/// - **Durability**: explicit fsync before rename
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    const EXTENSION: &'static str = "json";

    /// Creates a store rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Returns the file backing `key`.
    ///
    /// Keys containing path separators are rejected so a key can never
    /// escape the store directory.
    fn path_for(&self, key: &str) -> Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(JobTrackError::io(format!("Invalid store key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.{}", key, Self::EXTENSION)))
    }

    fn temp_path_for(path: &Path) -> Result<PathBuf> {
        let file_name = path
            .file_name()
            .ok_or_else(|| JobTrackError::io("Path has no file name"))?;
        let parent = path
            .parent()
            .ok_or_else(|| JobTrackError::io("Path has no parent directory"))?;
        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir).map_err(|e| {
                JobTrackError::io(format!(
                    "Failed to create store directory {}: {}",
                    self.dir.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(JobTrackError::io(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )));
            }
        };

        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(content))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        self.ensure_dir()?;
        let _lock = FileLock::acquire(&path)?;

        let tmp_path = Self::temp_path_for(&path)?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(value.as_bytes())?;

        // Ensure data is written to disk
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &path)?;

        tracing::trace!(key, bytes = value.len(), "FileStore: wrote {}", path.display());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        if !path.exists() {
            return Ok(());
        }

        let _lock = FileLock::acquire(&path)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// An exclusive `fs2` lock held for the lifetime of the guard.
///
/// The lock file itself stays on disk. Deleting it on release would let a
/// waiter hold a lock on an unlinked inode while a newcomer locks a fresh
/// file at the same path.
struct FileLock {
    file: File,
}

impl FileLock {
    /// Acquires an exclusive lock next to the given path.
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        file.lock_exclusive()
            .map_err(|e| JobTrackError::io(format!("Failed to acquire lock: {}", e)))?;

        Ok(FileLock { file })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
