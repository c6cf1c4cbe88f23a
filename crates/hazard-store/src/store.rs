//! Record store
//!
//! Provides [`RecordStore`]: the unique, code-ordered record set together
//! with the backend slot it is persisted to. The in-memory set and the
//! persisted slot only ever advance together.

use crate::backend::{KeyValueBackend, MemoryBackend};
use crate::code::{normalize, ClassificationCode, LIST_SEPARATOR};
use crate::codec::{self, RecordMap};
use crate::error::{Field, InsertError, PersistenceError, Violation};
use crate::record::{ClassificationRecord, CompatibleCodes};
use crate::seed::seed_records;
use serde::{Deserialize, Serialize};
use std::ops::Bound;

/// Default name of the persisted slot
pub const DEFAULT_STORAGE_KEY: &str = "explosiveDB";

/// How a query is matched against codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchMode {
    /// Query may occur anywhere in the code
    #[default]
    Substring,

    /// Code must start with the query
    Prefix,
}

/// Where the records of a loaded store came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// Decoded from the persisted slot
    Persisted,

    /// Slot was empty; seed data was used and persisted
    Seeded,

    /// Slot was unreadable or malformed, or seeding could not be persisted
    Recovered {
        /// Why the persisted records were not used
        reason: String,
    },
}

/// Unique, code-ordered set of classification records
#[derive(Debug)]
pub struct RecordStore {
    records: RecordMap,
    backend: Box<dyn KeyValueBackend + Send>,
    key: String,
    source: LoadSource,
}

impl RecordStore {
    /// Load from the default slot, falling back to seed data
    #[must_use]
    pub fn load(backend: impl KeyValueBackend + Send + 'static) -> Self {
        Self::load_with_key(backend, DEFAULT_STORAGE_KEY)
    }

    /// Load from a named slot, falling back to seed data
    ///
    /// Never fails: an absent, unreadable or malformed slot is replaced by
    /// the seed corpus, which is persisted immediately. See [`Self::source`]
    /// for what happened.
    #[must_use]
    pub fn load_with_key(
        backend: impl KeyValueBackend + Send + 'static,
        key: impl Into<String>,
    ) -> Self {
        let key = key.into();
        let mut store = Self {
            records: RecordMap::new(),
            backend: Box::new(backend),
            key,
            source: LoadSource::Seeded,
        };

        let fallback_reason = match store.backend.get(&store.key) {
            Ok(Some(raw)) if !raw.trim().is_empty() => match codec::decode(&raw) {
                Ok(records) => {
                    tracing::debug!(key = %store.key, count = records.len(), "loaded persisted records");
                    store.records = records;
                    store.source = LoadSource::Persisted;
                    return store;
                }
                Err(e) => Some(e.to_string()),
            },
            Ok(_) => None,
            Err(e) => Some(e.to_string()),
        };

        if let Some(reason) = &fallback_reason {
            tracing::warn!(key = %store.key, %reason, "persisted records unusable, using seed data");
        }
        store.reseed(fallback_reason);
        store
    }

    /// Seeded store over a fresh [`MemoryBackend`]
    #[must_use]
    pub fn in_memory() -> Self {
        Self::load(MemoryBackend::new())
    }

    fn reseed(&mut self, fallback_reason: Option<String>) {
        self.records = seed_records()
            .into_iter()
            .map(|r| (r.code().clone(), r))
            .collect();

        self.source = match (self.persist(), fallback_reason) {
            (Ok(()), None) => {
                tracing::info!(key = %self.key, count = self.records.len(), "seed records persisted");
                LoadSource::Seeded
            }
            (Ok(()), Some(reason)) => LoadSource::Recovered { reason },
            (Err(e), _) => {
                tracing::warn!(key = %self.key, error = %e, "seed records not persisted");
                LoadSource::Recovered {
                    reason: e.to_string(),
                }
            }
        };
    }

    /// Validate and add a record, then persist the whole set
    ///
    /// `code` is trimmed and upper-cased, `description` is trimmed and
    /// `compatible` is stored verbatim (it may be empty).
    ///
    /// # Errors
    /// - [`InsertError::Validation`] if code or description is blank, or the
    ///   code contains a comma
    /// - [`InsertError::DuplicateCode`] if the normalized code already exists
    /// - [`InsertError::Persistence`] if the write failed; the record is
    ///   removed again so memory matches the persisted slot
    pub fn insert(
        &mut self,
        code: &str,
        description: &str,
        compatible: &str,
    ) -> Result<ClassificationRecord, InsertError> {
        let code =
            ClassificationCode::new(code).map_err(|v| InsertError::validation(Field::Code, v))?;
        // Only new codes are checked; persisted codes with commas load as-is
        if code.as_str().contains(LIST_SEPARATOR) {
            return Err(InsertError::validation(Field::Code, Violation::ContainsSeparator));
        }
        let description = description.trim();
        if description.is_empty() {
            return Err(InsertError::validation(Field::Description, Violation::Empty));
        }
        if self.records.contains_key(&code) {
            return Err(InsertError::DuplicateCode { code });
        }

        let record =
            ClassificationRecord::new(code.clone(), description, CompatibleCodes::new(compatible));
        self.records.insert(code.clone(), record.clone());

        if let Err(e) = self.persist() {
            self.records.remove(&code);
            tracing::warn!(%code, error = %e, "insert rolled back");
            return Err(e.into());
        }

        tracing::info!(%code, total = self.records.len(), "record inserted");
        Ok(record)
    }

    fn persist(&mut self) -> Result<(), PersistenceError> {
        let encoded = codec::encode(self.records.values())?;
        self.backend.set(&self.key, &encoded)
    }

    /// Records whose code matches `query`, in code order
    ///
    /// Matching is case-insensitive. The query is not trimmed; an empty query
    /// matches nothing.
    #[must_use]
    pub fn find_matching(&self, query: &str, mode: MatchMode) -> Vec<&ClassificationRecord> {
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_uppercase();

        match mode {
            MatchMode::Substring => self
                .records
                .values()
                .filter(|r| r.code().as_str().contains(needle.as_str()))
                .collect(),
            MatchMode::Prefix => self
                .records
                .range::<str, _>((Bound::Included(needle.as_str()), Bound::Unbounded))
                .take_while(|(code, _)| code.as_str().starts_with(needle.as_str()))
                .map(|(_, r)| r)
                .collect(),
        }
    }

    /// Record with exactly this code, after normalization
    #[must_use]
    pub fn find_exact(&self, code: &str) -> Option<&ClassificationRecord> {
        self.records.get(normalize(code).as_str())
    }

    /// Check if a code is present
    #[inline]
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.find_exact(code).is_some()
    }

    /// All records in code order
    pub fn records(&self) -> impl Iterator<Item = &ClassificationRecord> + '_ {
        self.records.values()
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if store is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Name of the persisted slot
    #[inline]
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Where the records came from at load time
    #[inline]
    #[must_use]
    pub fn source(&self) -> &LoadSource {
        &self.source
    }

    /// Persisted form of the current record set
    ///
    /// # Errors
    /// Returns [`PersistenceError::Encode`] if serialization fails
    pub fn to_json(&self) -> Result<String, PersistenceError> {
        codec::encode(self.records.values())
    }
}
