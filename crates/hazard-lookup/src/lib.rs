//! Hazard Lookup Engine
//!
//! Read-only query layer over [`hazard_store::RecordStore`] plus the adapter
//! a presentation layer drives.
//!
//! # Overview
//!
//! - **search / detail**: stateless matching and exact lookup
//! - **Suggestion / DetailView**: render-ready data for the autocomplete list
//!   and the detail panel
//! - **LookupSession**: the three caller-facing events (query changed, match
//!   chosen, new record submitted)
//! - **LookupConfig**: TOML configuration for storage and search
//!
//! # Example
//!
//! ```rust
//! use hazard_lookup::{LookupSession, SearchConfig};
//! use hazard_store::RecordStore;
//!
//! let mut session = LookupSession::new(RecordStore::in_memory(), SearchConfig::default());
//!
//! let codes: Vec<_> = session
//!     .on_query_changed("1.1")
//!     .iter()
//!     .map(|s| s.code.clone())
//!     .collect();
//! assert_eq!(codes, ["1.1A", "1.1B", "1.1C"]);
//!
//! let panel = session.on_match_chosen("1.6N").unwrap();
//! assert_eq!(panel.title, "Hazard Division 1.6N");
//! assert_eq!(panel.compatibility(), "None");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod engine;
pub mod session;
pub mod view;

// Re-exports
pub use config::{ConfigError, LookupConfig, SearchConfig, StorageConfig};
pub use engine::{detail, search, search_with, SearchHit};
pub use hazard_store::MatchMode;
pub use session::LookupSession;
pub use view::{
    insert_error_message, insert_success_message, DetailView, Suggestion, MISSING_FIELDS_MESSAGE,
    NO_COMPATIBILITY,
};

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for lookup operations
    pub use crate::{
        detail, search, DetailView, LookupConfig, LookupSession, MatchMode, SearchConfig,
        SearchHit, Suggestion,
    };
}

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
