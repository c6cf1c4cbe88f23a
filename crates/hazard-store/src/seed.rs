//! Built-in default corpus
//!
//! Used only when no persisted record set exists yet.

use crate::code::ClassificationCode;
use crate::record::{ClassificationRecord, CompatibleCodes};

/// `(code, description, compatible)` of every seed record, in code order
pub const SEED: [(&str, &str, &str); 6] = [
    (
        "1.1A",
        "Substances and articles which have a mass explosion hazard. Consists of primary explosives such as lead azide, lead styphnate, tetracene, etc. transport of these explosives is forbidden except in special cases.",
        "1.1A",
    ),
    (
        "1.1B",
        "Articles which have a mass explosion hazard but are not made of primary explosives. It comprises items filled with secondary explosives, like bombs, torpedoes, grenades and rockets.",
        "1.1B, 1.1C, 1.1D, 1.1E, 1.2B, 1.2C, 1.2D, 1.2E, 1.3C, 1.4B, 1.4C, 1.4D, 1.4E, 1.4S, 1.5D",
    ),
    (
        "1.1C",
        "Substances and articles which have a fire hazard and either a minor blast hazard or a minor projection hazard or both, but not a mass explosion hazard.",
        "1.1B, 1.1C, 1.1D, 1.1E, 1.1G, 1.2B, 1.2C, 1.2D, 1.2E, 1.2G, 1.3C, 1.3G, 1.4B, 1.4C, 1.4D, 1.4E, 1.4G, 1.4S, 1.5D",
    ),
    (
        "1.4S",
        "Substances and articles which present no significant hazard, packed or designed to present only a small hazard in the event of accidental ignition.",
        "1.1B, 1.1C, 1.2B, 1.2C, 1.3C, 1.4B, 1.4C, 1.4S",
    ),
    (
        "1.5D",
        "Very insensitive substances which have a mass explosion hazard but are so insensitive that there is very little probability of initiation.",
        "1.1B, 1.1C, 1.1D, 1.1E, 1.1G, 1.2B, 1.2C, 1.2D, 1.2E, 1.2G, 1.3C, 1.3G, 1.4B, 1.4C, 1.4D, 1.4E, 1.4G, 1.5D",
    ),
    (
        "1.6N",
        "Extremely insensitive articles which do not have a mass explosion hazard. Containing only extremely insensitive substances and which demonstrate a negligible probability of accidental initiation or propagation.",
        "",
    ),
];

/// Materialize the seed corpus
#[must_use]
pub fn seed_records() -> Vec<ClassificationRecord> {
    SEED.iter()
        .map(|(code, description, compatible)| {
            ClassificationRecord::new(
                ClassificationCode::from_normalized(code),
                *description,
                CompatibleCodes::new(*compatible),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_sorted_and_unique() {
        let codes: Vec<_> = SEED.iter().map(|(code, _, _)| *code).collect();
        let mut sorted = codes.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(codes, sorted);
    }

    #[test]
    fn seed_codes_are_normalized() {
        for (code, description, _) in SEED {
            assert_eq!(ClassificationCode::new(code).unwrap().as_str(), code);
            assert!(!description.trim().is_empty());
        }
    }

    #[test]
    fn only_1_6n_lacks_compatibility() {
        let empty: Vec<_> = seed_records()
            .into_iter()
            .filter(|r| r.compatible().is_empty())
            .map(|r| r.code().to_string())
            .collect();
        assert_eq!(empty, vec!["1.6N"]);
    }
}
