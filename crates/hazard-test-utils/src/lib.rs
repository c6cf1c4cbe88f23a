//! Testing utilities for the hazard lookup workspace
//!
//! Shared fixtures and helpers.

#![allow(missing_docs)]

use hazard_store::{
    ClassificationCode, ClassificationRecord, CompatibleCodes, MemoryBackend, RecordStore,
    DEFAULT_STORAGE_KEY,
};

/// Seed codes in store order
pub const SEED_CODES: [&str; 6] = ["1.1A", "1.1B", "1.1C", "1.4S", "1.5D", "1.6N"];

pub fn record(code: &str, description: &str, compatible: &str) -> ClassificationRecord {
    ClassificationRecord::new(
        ClassificationCode::new(code).unwrap(),
        description,
        CompatibleCodes::new(compatible),
    )
}

pub fn seeded_store() -> RecordStore {
    RecordStore::in_memory()
}

/// Seeded store plus a handle on its backend for inspecting persisted state
pub fn seeded_store_with_backend() -> (RecordStore, MemoryBackend) {
    let backend = MemoryBackend::new();
    let store = RecordStore::load(backend.clone());
    (store, backend)
}

pub fn persisted_json(backend: &MemoryBackend) -> String {
    backend.slot(DEFAULT_STORAGE_KEY).unwrap_or_default()
}

pub fn store_codes(store: &RecordStore) -> Vec<String> {
    store.records().map(|r| r.code().to_string()).collect()
}
