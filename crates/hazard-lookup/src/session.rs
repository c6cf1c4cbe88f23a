//! Caller-facing lookup session
//!
//! [`LookupSession`] owns the record store and the currently shown
//! suggestions. A presentation layer forwards user events to it and renders
//! what comes back; opening and closing its own chrome stays with the caller.

use crate::config::{LookupConfig, SearchConfig};
use crate::engine::{detail, search_with};
use crate::view::{DetailView, Suggestion};
use hazard_store::{ClassificationRecord, InsertError, RecordStore};

/// Store plus the autocomplete list derived from the latest query
#[derive(Debug)]
pub struct LookupSession {
    store: RecordStore,
    search: SearchConfig,
    suggestions: Vec<Suggestion>,
}

impl LookupSession {
    /// Create session over a loaded store
    #[inline]
    #[must_use]
    pub fn new(store: RecordStore, search: SearchConfig) -> Self {
        Self {
            store,
            search,
            suggestions: Vec::new(),
        }
    }

    /// Open the configured store and create a session over it
    #[must_use]
    pub fn from_config(config: &LookupConfig) -> Self {
        Self::new(config.open_store(), config.search)
    }

    /// Recompute suggestions for the search input's new text
    ///
    /// Empty text clears the list.
    pub fn on_query_changed(&mut self, text: &str) -> &[Suggestion] {
        self.suggestions = search_with(&self.store, text, &self.search)
            .iter()
            .map(Suggestion::from)
            .collect();
        &self.suggestions
    }

    /// Resolve the chosen match for the detail panel and close the list
    pub fn on_match_chosen(&mut self, code: &str) -> Option<DetailView> {
        self.suggestions.clear();
        detail(&self.store, code).cloned().map(DetailView::from)
    }

    /// Submit the add-record form
    ///
    /// # Errors
    /// Same as [`RecordStore::insert`]; the store is unchanged on error
    pub fn on_submit_new_record(
        &mut self,
        code: &str,
        description: &str,
        compatible: &str,
    ) -> Result<ClassificationRecord, InsertError> {
        self.store.insert(code, description, compatible)
    }

    /// Interaction outside the search input: close the list
    #[inline]
    pub fn on_dismiss(&mut self) {
        self.suggestions.clear();
    }

    /// Suggestions currently shown
    #[inline]
    #[must_use]
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    /// Underlying store
    #[inline]
    #[must_use]
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Active search settings
    #[inline]
    #[must_use]
    pub fn search_config(&self) -> &SearchConfig {
        &self.search
    }

    /// Release the store
    #[inline]
    #[must_use]
    pub fn into_store(self) -> RecordStore {
        self.store
    }
}
