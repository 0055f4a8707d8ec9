// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind a record score.
//!
//! Per field, the score is `edits / query_chars` for the best approximate
//! occurrence of the query in that field. A field whose best occurrence needs
//! more edits than the threshold allows scores [`NO_MATCH`].
//!
//! Per record, the score is the weighted mean over the fields the record
//! actually has:
//!
//! ```text
//! score = Σ(fieldScore_i · w_i) / Σ(w_i)      over present fields only
//! ```
//!
//! Absent fields (no tags, no author) are skipped and the remaining weights
//! renormalized. A video without tags is therefore judged on title,
//! description, and author alone rather than being pushed down for data it
//! never had.
//!
//! A record is a match only if at least one present field is within the
//! threshold. Records that miss on every field are dropped, not ranked last.

use crate::fuzzy::substring_distance_chars;

/// Default fuzziness: up to 40% of the query's characters may be edits.
///
/// Lenient enough for "calculs" → "calculus" and "algerba" → "algebra",
/// strict enough that "biology" does not find "calculus".
pub const DEFAULT_THRESHOLD: f64 = 0.4;

/// Score of a present field that does not match within the threshold.
pub const NO_MATCH: f64 = 1.0;

/// Outcome of matching the query against one field of one record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldMatch {
    /// The record has no value for this field.
    Absent,
    /// The field exists but is beyond the threshold.
    Miss,
    /// The field matched with this normalized distance.
    Hit(f64),
}

impl FieldMatch {
    /// Contribution to the weighted mean, or `None` if the field is skipped.
    pub fn score(self) -> Option<f64> {
        match self {
            FieldMatch::Absent => None,
            FieldMatch::Miss => Some(NO_MATCH),
            FieldMatch::Hit(score) => Some(score),
        }
    }
}

/// Match a query against one field's text.
pub fn text_match(query: &[char], text: &[char], max_edits: usize) -> FieldMatch {
    match substring_distance_chars(query, text, max_edits) {
        Some(edits) => FieldMatch::Hit(edits as f64 / query.len().max(1) as f64),
        None => FieldMatch::Miss,
    }
}

/// Match a query against a list field: the best element wins.
pub fn list_match<'a, I>(query: &[char], items: I, max_edits: usize) -> FieldMatch
where
    I: IntoIterator<Item = &'a [char]>,
{
    let mut best = FieldMatch::Absent;
    for item in items {
        best = match (best, text_match(query, item, max_edits)) {
            (FieldMatch::Hit(a), FieldMatch::Hit(b)) => FieldMatch::Hit(a.min(b)),
            (FieldMatch::Hit(a), _) => FieldMatch::Hit(a),
            (_, hit @ FieldMatch::Hit(_)) => hit,
            _ => FieldMatch::Miss,
        };
    }
    best
}

/// Combine per-field matches into a record score.
///
/// Returns `None` when no field hit, which excludes the record entirely.
pub fn weighted_score<I>(matches: I) -> Option<f64>
where
    I: IntoIterator<Item = (FieldMatch, f64)>,
{
    let mut any_hit = false;
    let mut total = 0.0;
    let mut present_weight = 0.0;

    for (field_match, weight) in matches {
        if matches!(field_match, FieldMatch::Hit(_)) {
            any_hit = true;
        }
        if let Some(score) = field_match.score() {
            total += score * weight;
            present_weight += weight;
        }
    }

    if !any_hit || present_weight <= 0.0 {
        return None;
    }
    Some(total / present_weight)
}
