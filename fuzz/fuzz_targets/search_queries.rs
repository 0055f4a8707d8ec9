// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for search query handling.
//!
//! Throws arbitrary strings at every entity index and the global search to
//! verify they never panic, keep scores in range, and respect the caps.

#![no_main]

use edusearch::testing::sample_corpus;
use edusearch::{SearchEngine, NO_MATCH};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|query: &[u8]| {
    static ENGINE: std::sync::OnceLock<SearchEngine> = std::sync::OnceLock::new();
    let engine = ENGINE.get_or_init(|| SearchEngine::with_corpus(sample_corpus()));

    let query = String::from_utf8_lossy(query);
    // Cap query length to avoid timeout
    let query: String = query.chars().take(200).collect();

    // INVARIANT 1: Scores in [0, NO_MATCH), sorted ascending
    let videos = engine.search_videos(&query, None);
    for pair in videos.windows(2) {
        assert!(pair[0].score <= pair[1].score, "videos not sorted for {:?}", query);
    }
    assert!(videos.iter().all(|v| (0.0..NO_MATCH).contains(&v.score)));

    // INVARIANT 2: Caps hold
    let response = engine.global_search(&query);
    let caps = &engine.config().caps;
    assert!(response.videos.len() <= caps.videos);
    assert!(response.courses.len() <= caps.courses);
    assert!(response.teachers.len() <= caps.teachers);
    assert!(response.communities.len() <= caps.communities);

    // INVARIANT 3: Blank queries return nothing
    if query.trim().is_empty() {
        assert!(response.is_empty(), "blank query {:?} returned results", query);
    }
});
