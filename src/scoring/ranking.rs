// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: best match first, corpus order on ties.

use std::cmp::Ordering;

use crate::types::Scored;

/// Compare two scored records for ranking.
///
/// Sort order:
/// 1. **Score** ascending (lower distance wins)
/// 2. **Position** ascending, so equal scores keep corpus order
///
/// Uses `total_cmp`, so the order is total even if a NaN ever slips in.
pub fn compare_scored<T>(a: &Scored<T>, b: &Scored<T>) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| a.position.cmp(&b.position))
}

/// Sort in place, best first.
pub fn rank<T>(results: &mut [Scored<T>]) {
    results.sort_by(compare_scored);
}
