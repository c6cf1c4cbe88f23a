//! Key-value persistence backends
//!
//! Provides the [`KeyValueBackend`] seam the store persists through, with an
//! in-memory implementation ([`MemoryBackend`]) and a directory of JSON files
//! ([`FileBackend`]). Every write replaces a whole slot.

use crate::error::PersistenceError;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt::Debug;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Synchronous single-slot storage addressed by a fixed key
pub trait KeyValueBackend: Debug {
    /// Read the slot, `None` if it was never written
    ///
    /// # Errors
    /// Returns [`PersistenceError::Read`] if the slot exists but cannot be read
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Replace the slot contents
    ///
    /// # Errors
    /// Returns [`PersistenceError::Write`] if the value could not be stored
    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;
}

impl<B: KeyValueBackend + ?Sized> KeyValueBackend for Box<B> {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        (**self).set(key, value)
    }
}

/// In-memory backend
///
/// Clones share the same slots, so a test can keep a handle and inspect what
/// the store persisted. Reads and writes can be made to fail on demand.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    slots: Arc<Mutex<HashMap<String, String>>>,
    fail_reads: Arc<AtomicBool>,
    fail_writes: Arc<AtomicBool>,
}

impl MemoryBackend {
    /// Create empty backend
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create backend with one pre-filled slot
    #[must_use]
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let backend = Self::new();
        backend.slots.lock().insert(key.into(), value.into());
        backend
    }

    /// Current slot contents, bypassing failure injection
    #[must_use]
    pub fn slot(&self, key: &str) -> Option<String> {
        self.slots.lock().get(key).cloned()
    }

    /// Make subsequent reads fail
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    /// Make subsequent writes fail
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl KeyValueBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(PersistenceError::read(
                key,
                io::Error::new(ErrorKind::Other, "injected read failure"),
            ));
        }
        Ok(self.slot(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(PersistenceError::write(
                key,
                io::Error::new(ErrorKind::Other, "injected write failure"),
            ));
        }
        self.slots.lock().insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Directory backend: slot `key` lives in `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Create backend rooted at `dir` (created on first write)
    #[inline]
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Root directory
    #[inline]
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding a slot
    ///
    /// # Errors
    /// Returns `InvalidInput` if the key is empty or would escape the directory
    pub fn slot_path(&self, key: &str) -> io::Result<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.starts_with('.') {
            return Err(io::Error::new(
                ErrorKind::InvalidInput,
                format!("invalid slot key: {key:?}"),
            ));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl KeyValueBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.slot_path(key).map_err(|e| PersistenceError::read(key, e))?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PersistenceError::read(key, e)),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        let path = self.slot_path(key).map_err(|e| PersistenceError::write(key, e))?;
        let tmp = self.dir.join(format!(".{key}.json.tmp"));

        // Write then rename so readers never see a half-written slot
        std::fs::create_dir_all(&self.dir)
            .and_then(|()| std::fs::write(&tmp, value))
            .and_then(|()| std::fs::rename(&tmp, &path))
            .map_err(|e| {
                let _ = std::fs::remove_file(&tmp);
                PersistenceError::write(key, e)
            })?;

        tracing::debug!(path = %path.display(), bytes = value.len(), "slot written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_backend_absent_slot_is_none() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.get("explosiveDB").unwrap(), None);
    }

    #[test]
    fn memory_backend_clones_share_slots() {
        let mut backend = MemoryBackend::new();
        let observer = backend.clone();

        backend.set("explosiveDB", "[]").unwrap();
        assert_eq!(observer.slot("explosiveDB").as_deref(), Some("[]"));
    }

    #[test]
    fn memory_backend_injected_failures() {
        let mut backend = MemoryBackend::with_slot("k", "v");
        backend.set_fail_writes(true);
        assert!(matches!(backend.set("k", "w"), Err(PersistenceError::Write { .. })));
        assert_eq!(backend.slot("k").as_deref(), Some("v"));

        backend.set_fail_reads(true);
        assert!(matches!(backend.get("k"), Err(PersistenceError::Read { .. })));
    }

    #[test]
    fn file_backend_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path().join("nested"));

        assert_eq!(backend.get("explosiveDB").unwrap(), None);
        backend.set("explosiveDB", "[1]").unwrap();
        backend.set("explosiveDB", "[2]").unwrap();
        assert_eq!(backend.get("explosiveDB").unwrap().as_deref(), Some("[2]"));
        assert!(dir.path().join("nested/explosiveDB.json").exists());
        assert!(!dir.path().join("nested/.explosiveDB.json.tmp").exists());
    }

    #[test]
    fn file_backend_rejects_path_keys() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path());

        assert!(backend.slot_path("../escape").is_err());
        assert!(matches!(backend.set("a/b", "x"), Err(PersistenceError::Write { .. })));
        assert!(matches!(backend.get(""), Err(PersistenceError::Read { .. })));
    }
}
