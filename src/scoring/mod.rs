// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how matches get their numbers and their order.
//!
//! Scores are distances. Zero means the query occurs verbatim in every field
//! the record has; bigger is worse. Ranking is ascending score with corpus
//! position as the tiebreaker, so identical queries give identical lists.

mod core;
pub mod ranking;

pub use self::core::*;
