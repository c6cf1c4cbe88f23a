//! Hazard Record Store
//!
//! Owns the set of hazard-classification records and keeps it persisted.
//!
//! # Overview
//!
//! The store provides:
//! - **ClassificationRecord**: code, description and compatibility text
//! - **RecordStore**: unique, code-ordered record set with duplicate-safe insertion
//! - **KeyValueBackend**: single-slot persistence seam (memory or file backed)
//! - **SharedRecordStore**: mutex-guarded handle for multi-session use
//!
//! # Example
//!
//! ```rust
//! use hazard_store::{MatchMode, MemoryBackend, RecordStore};
//!
//! // First load against an empty backend seeds the built-in corpus
//! let mut store = RecordStore::load(MemoryBackend::new());
//! assert_eq!(store.len(), 6);
//!
//! store.insert("1.2b", "Example", "1.1B, 1.1C").unwrap();
//!
//! let hits = store.find_matching("1.2", MatchMode::Substring);
//! assert_eq!(hits[0].code().as_str(), "1.2B");
//! ```

#![warn(missing_docs)]

pub mod backend;
pub mod code;
pub mod codec;
pub mod error;
pub mod record;
pub mod seed;
pub mod shared;
pub mod store;

// Re-exports
pub use backend::{FileBackend, KeyValueBackend, MemoryBackend};
pub use code::ClassificationCode;
pub use error::{CodecError, Field, InsertError, PersistenceError, Violation};
pub use record::{ClassificationRecord, CompatibleCodes};
pub use shared::SharedRecordStore;
pub use store::{LoadSource, MatchMode, RecordStore, DEFAULT_STORAGE_KEY};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for record store operations
    pub use crate::{
        ClassificationCode, ClassificationRecord, CompatibleCodes, InsertError, KeyValueBackend,
        MatchMode, MemoryBackend, RecordStore,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
