// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The fuzzy matcher: one schema, one threshold, any corpus snapshot.
//!
//! Matching is split in two so the expensive part happens once:
//!
//! ```text
//! build time:  records ──normalize fields──▶ Snapshot (chars per field)
//! query time:  query ──normalize──▶ chars ──DP per field──▶ MatchResult[]
//! ```
//!
//! The output is unordered and unfiltered. Ranking and post-filters belong to
//! the entity index that owns the snapshot.

use std::fmt;

use crate::fuzzy::{max_edits_for, MAX_QUERY_CHARS};
use crate::schema::Schema;
use crate::scoring::{list_match, text_match, weighted_score, FieldMatch};
use crate::types::{FieldValue, Searchable};
use crate::util::normalize::normalize;

/// Corpora at least this large are matched on the rayon pool.
#[cfg(feature = "parallel")]
const PARALLEL_MIN_RECORDS: usize = 2048;

/// A normalized matchable field, ready for the DP.
#[derive(Debug, Clone, PartialEq)]
pub enum NormalizedField {
    Absent,
    Text(Box<[char]>),
    List(Vec<Box<[char]>>),
}

impl NormalizedField {
    fn from_value(value: FieldValue<'_>) -> Self {
        fn chars(text: &str) -> Box<[char]> {
            normalize(text).chars().collect()
        }

        match value {
            FieldValue::Missing => NormalizedField::Absent,
            FieldValue::Text(text) => NormalizedField::Text(chars(text)),
            FieldValue::List(items) => {
                let items: Vec<Box<[char]>> = items
                    .iter()
                    .map(|item| chars(item))
                    .filter(|item| !item.is_empty())
                    .collect();
                if items.is_empty() {
                    NormalizedField::Absent
                } else {
                    NormalizedField::List(items)
                }
            }
        }
    }

    fn match_query(&self, query: &[char], max_edits: usize) -> FieldMatch {
        match self {
            NormalizedField::Absent => FieldMatch::Absent,
            NormalizedField::Text(text) => text_match(query, text, max_edits),
            NormalizedField::List(items) => list_match(query, items.iter().map(|i| &i[..]), max_edits),
        }
    }
}

/// An immutable corpus slice plus its pre-normalized fields.
///
/// Never mutated after construction. Rebuilding an index creates a new
/// snapshot and swaps the pointer.
pub struct Snapshot<T> {
    records: Vec<T>,
    /// `fields[i][k]` is record `i`'s value for schema field `k`.
    fields: Vec<Vec<NormalizedField>>,
    generation: u64,
}

impl<T> Snapshot<T> {
    /// The snapshot an index starts with before anyone initializes it.
    pub fn uninitialized() -> Self {
        Self {
            records: Vec::new(),
            fields: Vec::new(),
            generation: 0,
        }
    }

    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 0 for the uninitialized snapshot, then 1, 2, .. per rebuild.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl<T> fmt::Debug for Snapshot<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("records", &self.records.len())
            .field("generation", &self.generation)
            .finish()
    }
}

/// One match: which record, and how far from the query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchResult {
    pub position: usize,
    pub score: f64,
}

/// A prepared query: normalized, truncated, with its edit budget.
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedQuery {
    pub chars: Vec<char>,
    pub max_edits: usize,
}

impl PreparedQuery {
    /// `None` when nothing is left after normalization.
    pub fn new(query: &str, threshold: f64) -> Option<Self> {
        let chars: Vec<char> = normalize(query).chars().take(MAX_QUERY_CHARS).collect();
        if chars.is_empty() {
            return None;
        }
        let max_edits = max_edits_for(chars.len(), threshold);
        Some(Self { chars, max_edits })
    }
}

/// Weighted approximate matcher for one record type.
pub struct FuzzyMatcher<T: Searchable> {
    schema: Schema<T>,
    threshold: f64,
}

impl<T: Searchable> FuzzyMatcher<T> {
    pub fn new(schema: Schema<T>, threshold: f64) -> Self {
        Self { schema, threshold }
    }

    pub fn schema(&self) -> &Schema<T> {
        &self.schema
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Normalize every schema field of every record into a snapshot.
    pub fn snapshot(&self, records: Vec<T>, generation: u64) -> Snapshot<T> {
        let fields = records
            .iter()
            .map(|record| {
                self.schema
                    .fields()
                    .iter()
                    .map(|(field, _)| NormalizedField::from_value(record.field(*field)))
                    .collect()
            })
            .collect();

        Snapshot {
            records,
            fields,
            generation,
        }
    }

    /// Score every record against the query; drop the ones that miss on
    /// every field. Order of the output is unspecified.
    pub fn match_snapshot(&self, snapshot: &Snapshot<T>, query: &str) -> Vec<MatchResult> {
        let Some(query) = PreparedQuery::new(query, self.threshold) else {
            return Vec::new();
        };

        let score_record = |(position, fields): (usize, &Vec<NormalizedField>)| {
            let matches = fields
                .iter()
                .zip(self.schema.fields())
                .map(|(field, (_, weight))| (field.match_query(&query.chars, query.max_edits), *weight));
            weighted_score(matches).map(|score| MatchResult { position, score })
        };

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;
            if snapshot.fields.len() >= PARALLEL_MIN_RECORDS {
                return snapshot
                    .fields
                    .par_iter()
                    .enumerate()
                    .filter_map(score_record)
                    .collect();
            }
        }

        snapshot
            .fields
            .iter()
            .enumerate()
            .filter_map(score_record)
            .collect()
    }
}

impl<T: Searchable> fmt::Debug for FuzzyMatcher<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FuzzyMatcher")
            .field("kind", &T::KIND)
            .field("schema", &self.schema)
            .field("threshold", &self.threshold)
            .finish()
    }
}
