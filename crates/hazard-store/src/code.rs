//! Normalized classification codes
//!
//! Provides [`ClassificationCode`], the unique key of every record. A code is
//! always held trimmed and upper-cased, so equality and ordering are
//! case-insensitive with respect to what the user typed.

use crate::error::Violation;
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Separator used by the flattened compatibility encoding
pub(crate) const LIST_SEPARATOR: char = ',';

/// Trimmed, upper-cased hazard classification code (e.g. `1.1A`)
///
/// Ordering is byte-lexicographic over the normalized form, which is the
/// iteration order of [`RecordStore`](crate::RecordStore).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClassificationCode(String);

impl ClassificationCode {
    /// Normalize raw user input into a code
    ///
    /// # Errors
    /// Returns [`Violation::Empty`] if nothing is left after trimming
    pub fn new(raw: &str) -> Result<Self, Violation> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return Err(Violation::Empty);
        }
        Ok(Self(normalized))
    }

    /// Wrap a literal already in normalized form
    pub(crate) fn from_normalized(code: &str) -> Self {
        debug_assert_eq!(code, normalize(code));
        Self(code.to_owned())
    }

    /// Normalized string form
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length of the normalized code in characters
    #[inline]
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

/// Trim and upper-case a code or query
#[inline]
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_uppercase()
}

impl Display for ClassificationCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ClassificationCode {
    type Err = Violation;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ClassificationCode {
    type Error = Violation;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<ClassificationCode> for String {
    fn from(code: ClassificationCode) -> Self {
        code.0
    }
}

impl AsRef<str> for ClassificationCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Lets BTreeMap<ClassificationCode, _> be queried and ranged by &str.
impl Borrow<str> for ClassificationCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}
