// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Errors raised while building an engine.
//!
//! Only configuration problems are errors. Everything that can go wrong at
//! query time (blank query, uninitialized index, bad filter value, a panicking
//! branch in the aggregator) degrades to an empty or unfiltered result instead.

use std::path::PathBuf;

use thiserror::Error;

use crate::types::EntityKind;

/// Error type for engine construction and configuration loading.
///
/// | Variant         | Raised When                                              |
/// |-----------------|----------------------------------------------------------|
/// | `UnknownField`  | A weight override names a path the record does not have  |
/// | `InvalidSchema` | Weights are empty, duplicated, out of range, or not 1.0  |
/// | `InvalidConfig` | Threshold outside (0, 1] or `minQueryChars` of 0         |
/// | `Io`            | A config or corpus file cannot be read                   |
/// | `Json`          | A config or corpus file is not valid JSON                |
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("unknown {kind} field '{path}'")]
    UnknownField { kind: EntityKind, path: String },

    #[error("invalid {kind} schema: {reason}")]
    InvalidSchema { kind: EntityKind, reason: String },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for engine construction.
pub type Result<T> = std::result::Result<T, SearchError>;
