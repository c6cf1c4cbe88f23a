//! Classification records
//!
//! Provides [`ClassificationRecord`] and [`CompatibleCodes`]. The serde shape
//! is the persisted shape: `{ "code", "description", "compatible" }` with
//! `compatible` as a single `", "`-joined string.

use crate::code::{normalize, ClassificationCode, LIST_SEPARATOR};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// One hazard classification entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    /// Unique normalized code
    code: ClassificationCode,

    /// Free-text description
    description: String,

    /// Codes this one may be stored or transported with
    #[serde(default)]
    compatible: CompatibleCodes,
}

impl ClassificationRecord {
    /// Create new record
    ///
    /// Callers are responsible for the description being non-blank;
    /// [`RecordStore::insert`](crate::RecordStore::insert) checks it.
    #[inline]
    #[must_use]
    pub fn new(
        code: ClassificationCode,
        description: impl Into<String>,
        compatible: CompatibleCodes,
    ) -> Self {
        Self {
            code,
            description: description.into(),
            compatible,
        }
    }

    /// Record code
    #[inline]
    #[must_use]
    pub fn code(&self) -> &ClassificationCode {
        &self.code
    }

    /// Record description
    #[inline]
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Compatibility list
    #[inline]
    #[must_use]
    pub fn compatible(&self) -> &CompatibleCodes {
        &self.compatible
    }
}

/// Compatibility list in its flattened textual form
///
/// The text is kept exactly as entered. "None recorded" is the empty string,
/// never an absent value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompatibleCodes(String);

impl CompatibleCodes {
    /// Join separator of the flattened form
    pub const SEPARATOR: &'static str = ", ";

    /// Wrap flattened text verbatim
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Build from individual codes, joined with [`Self::SEPARATOR`]
    #[must_use]
    pub fn from_codes<I, S>(codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = codes
            .into_iter()
            .map(|c| normalize(c.as_ref()))
            .filter(|c| !c.is_empty())
            .collect::<Vec<_>>()
            .join(Self::SEPARATOR);
        Self(joined)
    }

    /// Stored text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when no compatibility is recorded
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Individual codes, normalized, blanks skipped
    ///
    /// Values need not exist as records themselves.
    pub fn codes(&self) -> impl Iterator<Item = String> + '_ {
        self.0
            .split(LIST_SEPARATOR)
            .map(normalize)
            .filter(|c| !c.is_empty())
    }

    /// Check whether `code` appears in the list (case-insensitive)
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        let wanted = normalize(code);
        self.codes().any(|c| c == wanted)
    }
}

impl Display for CompatibleCodes {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> ClassificationCode {
        ClassificationCode::new(s).unwrap()
    }

    #[test]
    fn record_serializes_to_persisted_shape() {
        let record = ClassificationRecord::new(
            code("1.2B"),
            "Example",
            CompatibleCodes::new("1.1B, 1.1C"),
        );
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            r#"{"code":"1.2B","description":"Example","compatible":"1.1B, 1.1C"}"#
        );
    }

    #[test]
    fn missing_compatible_reads_as_empty_string() {
        let record: ClassificationRecord =
            serde_json::from_str(r#"{"code":"1.6N","description":"Insensitive"}"#).unwrap();
        assert!(record.compatible().is_empty());
        assert_eq!(record.compatible().as_str(), "");
    }

    #[test]
    fn compatible_codes_split_and_normalize() {
        let compat = CompatibleCodes::new("1.1b,  1.1C ,, 1.4s");
        let codes: Vec<_> = compat.codes().collect();
        assert_eq!(codes, vec!["1.1B", "1.1C", "1.4S"]);
        assert!(compat.contains("1.4S"));
        assert!(!compat.contains("1.5D"));
    }

    #[test]
    fn compatible_codes_keep_text_verbatim() {
        let compat = CompatibleCodes::new("1.1b,1.1c");
        assert_eq!(compat.as_str(), "1.1b,1.1c");
    }

    #[test]
    fn compatible_codes_from_codes_joins() {
        let compat = CompatibleCodes::from_codes(["1.1b", " ", "1.1C"]);
        assert_eq!(compat.as_str(), "1.1B, 1.1C");
    }

    #[test]
    fn blank_compatibility_is_empty() {
        assert!(CompatibleCodes::default().is_empty());
        assert!(CompatibleCodes::new("  ").is_empty());
    }
}
