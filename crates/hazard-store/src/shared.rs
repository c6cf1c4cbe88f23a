//! Shared store handle
//!
//! [`SharedRecordStore`] serializes access to one [`RecordStore`] so several
//! sessions can insert without breaking uniqueness or letting memory and the
//! persisted slot diverge.

use crate::error::InsertError;
use crate::record::ClassificationRecord;
use crate::store::RecordStore;
use parking_lot::Mutex;
use std::sync::Arc;

/// Cloneable, mutex-guarded [`RecordStore`]
#[derive(Debug, Clone)]
pub struct SharedRecordStore {
    inner: Arc<Mutex<RecordStore>>,
}

impl SharedRecordStore {
    /// Wrap a loaded store
    #[inline]
    #[must_use]
    pub fn new(store: RecordStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Insert under the lock; the whole validate-insert-persist step is atomic
    ///
    /// # Errors
    /// Same as [`RecordStore::insert`]
    pub fn insert(
        &self,
        code: &str,
        description: &str,
        compatible: &str,
    ) -> Result<ClassificationRecord, InsertError> {
        self.inner.lock().insert(code, description, compatible)
    }

    /// Run a read-only closure against the current snapshot
    pub fn read<R>(&self, f: impl FnOnce(&RecordStore) -> R) -> R {
        f(&*self.inner.lock())
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Check if store is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

impl From<RecordStore> for SharedRecordStore {
    fn from(store: RecordStore) -> Self {
        Self::new(store)
    }
}
