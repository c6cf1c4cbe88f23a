//! Persisted form of the record set
//!
//! A compact JSON array of `{code, description, compatible}` objects in code
//! order, replaced whole on every write. Decoding only rejects what cannot be
//! keyed: blank or duplicate codes.

use crate::code::ClassificationCode;
use crate::error::{CodecError, PersistenceError};
use crate::record::ClassificationRecord;
use std::collections::BTreeMap;

/// Record set keyed and ordered by normalized code
pub type RecordMap = BTreeMap<ClassificationCode, ClassificationRecord>;

/// Encode records in iteration order
///
/// # Errors
/// Returns [`PersistenceError::Encode`] if serialization fails
pub fn encode<'a, I>(records: I) -> Result<String, PersistenceError>
where
    I: IntoIterator<Item = &'a ClassificationRecord>,
{
    let records: Vec<&ClassificationRecord> = records.into_iter().collect();
    Ok(serde_json::to_string(&records)?)
}

/// Decode a persisted record set
///
/// Codes are normalized on the way in; entry order in the input does not
/// matter.
///
/// # Errors
/// Returns [`CodecError`] if the input is not a valid array of records or two
/// entries share a normalized code
pub fn decode(raw: &str) -> Result<RecordMap, CodecError> {
    let entries: Vec<ClassificationRecord> = serde_json::from_str(raw)?;
    let mut records = RecordMap::new();

    for record in entries {
        let code = record.code().clone();
        if records.insert(code.clone(), record).is_some() {
            return Err(CodecError::DuplicateCode(code));
        }
    }

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_records;
    use pretty_assertions::assert_eq;

    #[test]
    fn decode_reads_reference_encoding() {
        let raw = r#"[{"code":"1.4S","description":"Small hazard","compatible":"1.1B, 1.1C"},
                      {"code":"1.1a","description":"Mass explosion","compatible":"1.1A"}]"#;
        let records = decode(raw).unwrap();

        let codes: Vec<_> = records.keys().map(ClassificationCode::as_str).collect();
        assert_eq!(codes, vec!["1.1A", "1.4S"]);
        assert_eq!(records["1.4S"].compatible().as_str(), "1.1B, 1.1C");
    }

    #[test]
    fn encode_then_decode_preserves_seed() {
        let seed = seed_records();
        let raw = encode(&seed).unwrap();
        let decoded: Vec<_> = decode(&raw).unwrap().into_values().collect();
        assert_eq!(decoded, seed);
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(decode("not json"), Err(CodecError::Malformed(_))));
        assert!(matches!(decode(r#"{"code":"1.1A"}"#), Err(CodecError::Malformed(_))));
        assert!(matches!(
            decode(r#"[{"code":" ","description":"x","compatible":""}]"#),
            Err(CodecError::Malformed(_))
        ));
    }

    #[test]
    fn decode_rejects_normalized_duplicates() {
        let raw = r#"[{"code":"1.1A","description":"a","compatible":""},
                      {"code":"1.1a","description":"b","compatible":""}]"#;
        assert!(matches!(decode(raw), Err(CodecError::DuplicateCode(code)) if code.as_str() == "1.1A"));
    }

    #[test]
    fn decode_accepts_blank_description_and_comma_code() {
        let raw = r#"[{"code":"1.1A","description":"   ","compatible":""},
                      {"code":"x,y","description":"legacy","compatible":""}]"#;
        let records = decode(raw).unwrap();
        assert_eq!(records["1.1A"].description(), "   ");
        assert!(records.contains_key("X,Y"));
    }
}
