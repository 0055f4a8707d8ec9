// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted fuzzy search over an education platform's catalog.
//!
//! Videos, courses, teachers, and communities are loaded once into
//! per-kind indexes. A query is matched approximately against each record's
//! weighted fields, post-filtered, ranked best-first, and (for the header
//! dropdown) merged into one capped response.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │  live.rs     │───▶│ aggregate.rs │───▶│  engine.rs   │
//! │ (debounce,   │    │ (4-way join, │    │ (4 indexes + │
//! │  last wins)  │    │  caps)       │    │  notes)      │
//! └──────────────┘    └──────────────┘    └──────┬───────┘
//!                                                │
//!        ┌───────────────────────────────────────┘
//!        ▼
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────┐
//! │  index.rs    │───▶│  matcher.rs  │───▶│  fuzzy/      │
//! │ (snapshot    │    │ (per-field   │    │ (bounded     │
//! │  swap, rank) │    │  scoring)    │    │  edit dist.) │
//! └──────┬───────┘    └──────────────┘    └──────────────┘
//!        ▼
//! ┌──────────────┐
//! │  filter.rs   │  (category, level, price, author, subject)
//! └──────────────┘
//! ```
//!
//! # Scores
//!
//! | Score   | Meaning                                        |
//! |---------|------------------------------------------------|
//! | `0.0`   | the query appears verbatim in every present field |
//! | `< 1.0` | weighted mean of per-field normalized distances |
//! | `1.0`   | a field beyond the edit budget (never returned alone) |
//!
//! A record is returned only if at least one field is within the budget.
//!
//! # Usage
//!
//! ```
//! use edusearch::{Corpus, SearchEngine};
//! use edusearch::testing::make_video;
//!
//! let engine = SearchEngine::default();
//! engine.initialize(Corpus {
//!     videos: vec![make_video("v1", "Introduction to Calculus", &["calculus"])],
//!     ..Default::default()
//! });
//!
//! let results = engine.search_videos("calculs", None);
//! assert_eq!(results[0].record.id, "v1");
//! ```

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod error;
pub mod filter;
pub mod fuzzy;
pub mod index;
pub mod live;
pub mod matcher;
pub mod schema;
pub mod scoring;
pub mod testing;
pub mod types;
pub mod util;

pub use config::{DisplayCaps, EngineConfig, LiveConfig, ResultCaps, WeightOverrides};
pub use engine::SearchEngine;
pub use error::{Result, SearchError};
pub use filter::{
    CommunityFilter, CourseFilter, NoteFilter, PriceRange, RecordFilter, TeacherFilter,
    VideoFilter,
};
pub use fuzzy::{field_distance, max_edits_for, substring_distance, MAX_QUERY_CHARS};
pub use index::EntityIndex;
pub use live::{Dropdown, DropdownGroup, DropdownItem, LiveSearch, LiveState};
pub use matcher::{FuzzyMatcher, MatchResult, Snapshot};
pub use schema::Schema;
pub use scoring::{DEFAULT_THRESHOLD, NO_MATCH};
pub use types::{
    Community, CommunityField, Corpus, Course, CourseField, EntityKind, FieldPath, FieldValue,
    GlobalSearchResponse, Note, NoteField, Person, Scored, Searchable, Teacher, TeacherField,
    Video, VideoField,
};
pub use util::normalize::normalize;
