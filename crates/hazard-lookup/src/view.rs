//! Render-ready data for a presentation layer

use crate::engine::{split_on_char_boundary, SearchHit};
use hazard_store::{ClassificationRecord, InsertError, Violation};

/// Shown in place of an empty compatibility list
pub const NO_COMPATIBILITY: &str = "None";

/// Shown when code or description was left blank
pub const MISSING_FIELDS_MESSAGE: &str =
    "Please fill out both the Classification Code and Description fields.";

/// One autocomplete entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    /// Matched code, unaltered
    pub code: String,
    /// Byte offset where the highlighted head ends
    pub highlight_split: usize,
}

impl Suggestion {
    /// `(highlighted, rest)` of the code
    ///
    /// A split past the end or inside a character is moved back to the
    /// nearest char boundary.
    #[must_use]
    pub fn parts(&self) -> (&str, &str) {
        split_on_char_boundary(&self.code, self.highlight_split)
    }
}

impl From<&SearchHit<'_>> for Suggestion {
    fn from(hit: &SearchHit<'_>) -> Self {
        Self {
            code: hit.code().to_owned(),
            highlight_split: hit.highlight_split,
        }
    }
}

/// Detail panel content for one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    /// `Hazard Division {code}`
    pub title: String,
    /// Record as stored
    pub record: ClassificationRecord,
}

impl DetailView {
    /// Description, verbatim
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        self.record.description()
    }

    /// Compatibility text, or [`NO_COMPATIBILITY`] when none is recorded
    #[must_use]
    pub fn compatibility(&self) -> &str {
        let compatible = self.record.compatible();
        if compatible.is_empty() {
            NO_COMPATIBILITY
        } else {
            compatible.as_str()
        }
    }
}

impl From<ClassificationRecord> for DetailView {
    fn from(record: ClassificationRecord) -> Self {
        Self {
            title: format!("Hazard Division {}", record.code()),
            record,
        }
    }
}

/// User-facing text for a rejected submission
#[must_use]
pub fn insert_error_message(err: &InsertError) -> String {
    match err {
        InsertError::Validation {
            violation: Violation::Empty,
            ..
        } => MISSING_FIELDS_MESSAGE.to_string(),
        InsertError::Validation { field, violation } => {
            format!("Error: the {field} {violation}.")
        }
        InsertError::DuplicateCode { code } => {
            format!("Error: Classification code '{code}' already exists in the database.")
        }
        InsertError::Persistence(e) => format!("Error: the record could not be saved ({e})."),
    }
}

/// User-facing text for an accepted submission
#[must_use]
pub fn insert_success_message(record: &ClassificationRecord) -> String {
    format!("Explosive {} has been added successfully!", record.code())
}
