// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Approximate substring distance with early exit.
//!
//! This is Sellers' variant of the edit-distance DP: the first row is all zeros,
//! so an alignment may start anywhere in the text for free, and the answer is
//! the minimum of the last row, so it may end anywhere for free. On top of
//! insert/delete/substitute we allow adjacent transpositions (optimal string
//! alignment), which is how most real typos look.
//!
//! Two early exits keep the DP cheap on a corpus that mostly does not match:
//! 1. If the pattern is longer than the text by more than `max`, skip the DP.
//! 2. Row minima never decrease, so once a whole row exceeds `max` we stop.

/// Longest query (in characters) the matcher will consider.
///
/// Anything past this is dropped before matching. The DP is O(query * field),
/// so this is the only thing bounding per-record cost on huge inputs.
pub const MAX_QUERY_CHARS: usize = 64;

/// Minimum number of edits between `pattern` and any substring of `text`,
/// or `None` if that number exceeds `max`.
///
/// An empty pattern matches everywhere with distance 0.
///
/// # Example
///
/// ```
/// use edusearch::substring_distance;
///
/// assert_eq!(substring_distance("deriv", "limits and derivatives", 0), Some(0));
/// assert_eq!(substring_distance("calculs", "intro to calculus", 2), Some(1));
/// assert_eq!(substring_distance("biology", "intro to calculus", 2), None);
/// ```
pub fn substring_distance(pattern: &str, text: &str, max: usize) -> Option<usize> {
    let pattern: Vec<char> = pattern.chars().collect();
    let text: Vec<char> = text.chars().collect();
    substring_distance_chars(&pattern, &text, max)
}

/// Same as [`substring_distance`], over pre-split characters.
///
/// Snapshots store field text as `char` slices so that the per-query cost is
/// just the DP, with no re-decoding of UTF-8.
pub fn substring_distance_chars(pattern: &[char], text: &[char], max: usize) -> Option<usize> {
    let m = pattern.len();
    let n = text.len();

    if m == 0 {
        return Some(0);
    }

    // Early-exit: every pattern char beyond the text length costs one edit
    if m > n + max {
        return None;
    }

    // Row 0 is all zeros: a match may start at any text position.
    let mut before_prev: Vec<usize> = vec![0; n + 1];
    let mut prev: Vec<usize> = vec![0; n + 1];
    let mut curr: Vec<usize> = vec![0; n + 1];

    for i in 1..=m {
        curr[0] = i;
        let mut row_min = curr[0];

        for j in 1..=n {
            let cost = usize::from(pattern[i - 1] != text[j - 1]);
            let mut best = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);

            // Adjacent transposition: "ab" <-> "ba" costs one edit
            if i > 1 && j > 1 && pattern[i - 1] == text[j - 2] && pattern[i - 2] == text[j - 1] {
                best = best.min(before_prev[j - 2] + 1);
            }

            curr[j] = best;
            row_min = row_min.min(best);
        }

        // Early-exit: no later row can come back under `max`
        if row_min > max {
            return None;
        }

        std::mem::swap(&mut before_prev, &mut prev);
        std::mem::swap(&mut prev, &mut curr);
    }

    // `prev` now holds row m; the alignment may end anywhere in the text
    let best = prev.iter().copied().min().unwrap_or(m);
    (best <= max).then_some(best)
}

/// Unbounded normalized distance: `edits / query_chars`, in `[0, 1]`.
///
/// `0.0` means the query occurs verbatim in `text`; `1.0` means the best
/// alignment is no better than deleting every query character. An empty
/// query is `0.0`. Unlike the matcher this applies no threshold, so it is
/// useful as a relative signal for ordering arbitrary strings.
pub fn field_distance(query: &str, text: &str) -> f64 {
    let pattern: Vec<char> = query.chars().collect();
    let text: Vec<char> = text.chars().collect();
    let m = pattern.len();
    if m == 0 {
        return 0.0;
    }
    // Deleting all of the pattern is always an alignment, so `m` never cuts off
    let edits = substring_distance_chars(&pattern, &text, m).unwrap_or(m);
    (edits as f64 / m as f64).min(1.0)
}

/// Largest edit count that still keeps `edits / query_len <= threshold`.
pub fn max_edits_for(query_len: usize, threshold: f64) -> usize {
    // Nudge up so that e.g. 0.4 * 5 lands on 2, not 1.999..
    (threshold * query_len as f64 + 1e-9).floor() as usize
}
