// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy matching: typo tolerance via bounded edit distance.
//!
//! A query matches a field when it is within a few edits of SOME substring of
//! that field. That single primitive covers typos ("calculs"), missing
//! characters, swapped neighbours ("clacul"), and partial words ("deriv").

mod distance;

pub use distance::*;
