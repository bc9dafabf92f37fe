//! Keyword ranker.
//!
//! Scores every record by exact-token match count against the keyword list
//! and returns the hits ordered by descending score. Matching is exact
//! equality, with no substrings and no case folding. The input is a list,
//! not a set: repeating a keyword weights it, adding one match per
//! repetition for every field it equals. Callers use that to bias terms.

use crate::store::record::Record;
use std::cmp::Ordering;

/// A transient search result; never persisted.
#[derive(Debug, Clone)]
pub struct SearchHit<'a> {
    /// Number of (field, keyword) exact-equality pairs.
    pub matches: usize,
    /// The record's position in the store at search time.
    pub index: usize,
    pub record: &'a Record,
}

impl SearchHit<'_> {
    // The frozen ranking order: descending (matches, index, record fields).
    // Index is unique, so the field comparison can never decide anything,
    // but the full tuple is part of the ranking contract, so it stays.
    fn rank_cmp(&self, other: &Self) -> Ordering {
        self.matches
            .cmp(&other.matches)
            .then_with(|| self.index.cmp(&other.index))
            .then_with(|| self.record.field_cmp(other.record))
    }
}

/// Rank `records` against `keywords`; zero-match records are excluded.
pub fn rank<'a, S: AsRef<str>>(records: &'a [Record], keywords: &[S]) -> Vec<SearchHit<'a>> {
    let mut hits: Vec<SearchHit<'a>> = Vec::new();

    for (index, record) in records.iter().enumerate() {
        let mut matches = 0;
        for field in record.text_fields() {
            for keyword in keywords {
                if field == keyword.as_ref() {
                    matches += 1;
                }
            }
        }
        if matches > 0 {
            hits.push(SearchHit { matches, index, record });
        }
    }

    hits.sort_by(|a, b| b.rank_cmp(a));
    hits
}
