//! Stateless search over a record store
//!
//! Every function takes the store by shared reference and never mutates it.

use crate::config::SearchConfig;
use hazard_store::{ClassificationRecord, MatchMode, RecordStore};

/// One search match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'s> {
    /// Matched record, code unaltered
    pub record: &'s ClassificationRecord,

    /// Byte offset in the code where the query occurs
    pub match_start: usize,

    /// Byte offset splitting the highlighted head of the code from the rest
    ///
    /// The head is as many characters as the query has, clamped to the code.
    pub highlight_split: usize,
}

impl<'s> SearchHit<'s> {
    /// Matched code
    #[inline]
    #[must_use]
    pub fn code(&self) -> &'s str {
        self.record.code().as_str()
    }

    /// Code split at [`Self::highlight_split`], moved back to a char boundary
    #[inline]
    #[must_use]
    pub fn highlighted(&self) -> (&'s str, &'s str) {
        split_on_char_boundary(self.code(), self.highlight_split)
    }
}

/// Search codes with the default (substring) configuration
///
/// An empty query yields no hits. Hits come back in code order.
#[must_use]
pub fn search<'s>(store: &'s RecordStore, raw_query: &str) -> Vec<SearchHit<'s>> {
    search_with(store, raw_query, &SearchConfig::default())
}

/// Search codes with an explicit match mode and optional hit limit
#[must_use]
pub fn search_with<'s>(
    store: &'s RecordStore,
    raw_query: &str,
    config: &SearchConfig,
) -> Vec<SearchHit<'s>> {
    let needle = raw_query.to_uppercase();
    let query_chars = raw_query.chars().count();
    let limit = config.limit.unwrap_or(usize::MAX);

    let hits: Vec<_> = store
        .find_matching(raw_query, config.mode)
        .into_iter()
        .take(limit)
        .map(|record| {
            let code = record.code().as_str();
            let match_start = match config.mode {
                MatchMode::Prefix => 0,
                MatchMode::Substring => code.find(needle.as_str()).unwrap_or(0),
            };
            SearchHit {
                record,
                match_start,
                highlight_split: byte_offset_of_char(code, query_chars),
            }
        })
        .collect();

    tracing::debug!(query = raw_query, mode = ?config.mode, hits = hits.len(), "search");
    hits
}

/// Exact lookup after trimming and upper-casing `code`
#[inline]
#[must_use]
pub fn detail<'s>(store: &'s RecordStore, code: &str) -> Option<&'s ClassificationRecord> {
    store.find_exact(code)
}

/// Split at `at`, clamped to the string and rounded down to a char boundary
pub(crate) fn split_on_char_boundary(s: &str, at: usize) -> (&str, &str) {
    let mut at = at.min(s.len());
    while !s.is_char_boundary(at) {
        at -= 1;
    }
    s.split_at(at)
}

fn byte_offset_of_char(s: &str, n: usize) -> usize {
    s.char_indices().nth(n).map_or(s.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hazard_test_utils::seeded_store;
    use pretty_assertions::assert_eq;

    fn hit_codes<'s>(hits: &[SearchHit<'s>]) -> Vec<&'s str> {
        hits.iter().map(SearchHit::code).collect()
    }

    #[test]
    fn search_seed_by_division() {
        let store = seeded_store();
        assert_eq!(hit_codes(&search(&store, "1.1")), vec!["1.1A", "1.1B", "1.1C"]);
    }

    #[test]
    fn search_empty_or_unknown_is_empty() {
        let store = seeded_store();
        assert!(search(&store, "").is_empty());
        assert!(search(&store, "ZZZZ").is_empty());
    }

    #[test]
    fn search_is_case_insensitive() {
        let store = seeded_store();
        assert_eq!(hit_codes(&search(&store, "1.4s")), vec!["1.4S"]);
    }

    #[test]
    fn search_matches_inside_code() {
        let store = seeded_store();
        let hits = search(&store, "D");

        assert_eq!(hit_codes(&hits), vec!["1.5D"]);
        assert_eq!(hits[0].match_start, 3);
    }

    #[test]
    fn highlight_split_follows_query_length() {
        let store = seeded_store();
        let hits = search(&store, "1.1");
        assert_eq!(hits[0].highlighted(), ("1.1", "A"));

        // Query as long as the code highlights all of it
        let mut store = seeded_store();
        store.insert("Ä1", "Umlaut code", "").unwrap();
        let hits = search(&store, "ä1");
        assert_eq!(hits[0].highlighted(), ("Ä1", ""));
        let hits = search(&store, "ä");
        assert_eq!(hits[0].highlighted(), ("Ä", "1"));
    }

    #[test]
    fn highlighted_tolerates_out_of_range_split() {
        let mut store = seeded_store();
        store.insert("Ä1", "Umlaut code", "").unwrap();
        let record = detail(&store, "Ä1").unwrap();

        let inside_char = SearchHit { record, match_start: 0, highlight_split: 1 };
        assert_eq!(inside_char.highlighted(), ("", "Ä1"));
        let past_end = SearchHit { record, match_start: 0, highlight_split: 99 };
        assert_eq!(past_end.highlighted(), ("Ä1", ""));
    }

    #[test]
    fn prefix_mode_and_limit() {
        let mut store = seeded_store();
        store.insert("X1.1", "Odd code", "").unwrap();

        let prefix = SearchConfig::default().with_mode(MatchMode::Prefix);
        assert_eq!(hit_codes(&search_with(&store, "1.1", &prefix)), vec!["1.1A", "1.1B", "1.1C"]);

        let limited = SearchConfig::default().with_limit(2);
        assert_eq!(hit_codes(&search_with(&store, "1.1", &limited)), vec!["1.1A", "1.1B"]);
        assert_eq!(hit_codes(&search(&store, "1.1")), vec!["1.1A", "1.1B", "1.1C", "X1.1"]);
    }

    #[test]
    fn detail_normalizes_code() {
        let store = seeded_store();
        let record = detail(&store, " 1.6n").unwrap();

        assert_eq!(record.code().as_str(), "1.6N");
        assert_eq!(record.compatible().as_str(), "");
        assert!(detail(&store, "9.9X").is_none());
    }
}
