//! Error types for the record store
//!
//! Provides error handling for:
//! - Field validation during insertion
//! - Duplicate code detection
//! - Reading and writing the persisted slot
//! - Decoding malformed persisted state

use crate::code::ClassificationCode;
use std::fmt::{self, Display, Formatter};

/// Rule a submitted field broke
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    /// Nothing left after trimming
    #[error("must not be empty")]
    Empty,

    /// Contains the compatibility-list separator
    #[error("must not contain ','")]
    ContainsSeparator,
}

/// Submitted record field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Classification code
    Code,
    /// Free-text description
    Description,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code => f.write_str("classification code"),
            Self::Description => f.write_str("description"),
        }
    }
}

/// Errors reading or writing the key-value slot
#[derive(Debug, thiserror::Error)]
pub enum PersistenceError {
    /// Slot could not be read
    #[error("io error reading slot '{key}': {source}")]
    Read {
        /// Slot key
        key: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Slot could not be written
    #[error("io error writing slot '{key}': {source}")]
    Write {
        /// Slot key
        key: String,
        /// Underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// Record set could not be encoded
    #[error("failed to encode record set: {0}")]
    Encode(#[from] serde_json::Error),
}

impl PersistenceError {
    /// Create read error for key
    pub fn read(key: impl Into<String>, source: std::io::Error) -> Self {
        Self::Read {
            key: key.into(),
            source,
        }
    }

    /// Create write error for key
    pub fn write(key: impl Into<String>, source: std::io::Error) -> Self {
        Self::Write {
            key: key.into(),
            source,
        }
    }
}

/// Persisted state that does not describe a valid record set
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Not a JSON array of `{code, description, compatible}` objects
    #[error("malformed record set: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Two entries normalize to the same code
    #[error("duplicate code in record set: {0}")]
    DuplicateCode(ClassificationCode),
}

/// Errors from [`RecordStore::insert`](crate::RecordStore::insert)
#[derive(Debug, thiserror::Error)]
pub enum InsertError {
    /// A submitted field is invalid; nothing was changed
    #[error("invalid {field}: {violation}")]
    Validation {
        /// Offending field
        field: Field,
        /// Rule it broke
        violation: Violation,
    },

    /// The normalized code is already present; nothing was changed
    #[error("classification code '{code}' already exists")]
    DuplicateCode {
        /// Normalized code that already exists
        code: ClassificationCode,
    },

    /// The write failed and the in-memory insertion was rolled back
    #[error("persistence failed: {0}")]
    Persistence(#[from] PersistenceError),
}

impl InsertError {
    /// Create validation error for field
    #[inline]
    #[must_use]
    pub fn validation(field: Field, violation: Violation) -> Self {
        Self::Validation { field, violation }
    }

    /// Check if error was caused by the submitted values rather than storage
    #[inline]
    #[must_use]
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::DuplicateCode { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display() {
        let err = InsertError::validation(Field::Description, Violation::Empty);
        assert_eq!(err.to_string(), "invalid description: must not be empty");
        assert!(err.is_user_error());
    }

    #[test]
    fn duplicate_error_display() {
        let err = InsertError::DuplicateCode {
            code: ClassificationCode::new("1.1a").unwrap(),
        };
        assert_eq!(err.to_string(), "classification code '1.1A' already exists");
    }

    #[test]
    fn persistence_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: InsertError = PersistenceError::write("explosiveDB", io).into();
        assert!(matches!(err, InsertError::Persistence(PersistenceError::Write { .. })));
        assert!(!err.is_user_error());
        assert!(err.to_string().contains("explosiveDB"));
    }
}
