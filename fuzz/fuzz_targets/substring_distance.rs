// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the bounded substring edit distance.
//!
//! Checks the distance against its own definition: it never exceeds the
//! budget, is zero exactly when the pattern occurs verbatim, and never
//! changes when the budget is raised past it.

#![no_main]

use arbitrary::Arbitrary;
use edusearch::substring_distance;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct DistanceInput {
    pattern: String,
    text: String,
    max: u8,
}

fn truncate_chars(s: &str, n: usize) -> String {
    s.chars().take(n).collect()
}

fuzz_target!(|input: DistanceInput| {
    // Cap lengths to avoid timeouts
    let pattern = truncate_chars(&input.pattern, 40);
    let text = truncate_chars(&input.text, 200);
    let max = usize::from(input.max % 16);

    let result = substring_distance(&pattern, &text, max);

    // INVARIANT 1: Never above the budget
    if let Some(d) = result {
        assert!(d <= max, "distance {} over budget {} for {:?} in {:?}", d, max, pattern, text);
    }

    // INVARIANT 2: Zero iff the pattern is a substring
    assert_eq!(
        result == Some(0),
        text.contains(pattern.as_str()),
        "zero distance must mean containment: {:?} in {:?}",
        pattern,
        text
    );

    // INVARIANT 3: A larger budget finds the same distance
    let generous = substring_distance(&pattern, &text, max + 8);
    if let Some(d) = result {
        assert_eq!(generous, Some(d));
    }

    // INVARIANT 4: Deleting every pattern char is always enough
    let m = pattern.chars().count();
    assert!(substring_distance(&pattern, &text, m).is_some());
});
