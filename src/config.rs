// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Engine configuration.
//!
//! Everything has a default, so an empty JSON object is a valid config:
//!
//! ```json
//! {
//!   "threshold": 0.4,
//!   "caps": { "videos": 10, "courses": 5, "teachers": 5, "communities": 5 },
//!   "live": { "minQueryChars": 3, "debounceMs": 200,
//!             "display": { "videos": 3, "courses": 3, "teachers": 3, "communities": 3 } },
//!   "weights": { "videos": { "title": 0.7, "tags": 0.3 } }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};
use crate::scoring::DEFAULT_THRESHOLD;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineConfig {
    /// Fraction of the query's characters that may be edits, in `(0, 1]`.
    pub threshold: f64,
    pub caps: ResultCaps,
    pub live: LiveConfig,
    pub weights: WeightOverrides,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            caps: ResultCaps::default(),
            live: LiveConfig::default(),
            weights: WeightOverrides::default(),
        }
    }
}

impl EngineConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SearchError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Reject values no search could work with.
    ///
    /// Weight overrides are checked separately, when the schemas are built.
    pub fn validate(&self) -> Result<()> {
        if !(self.threshold > 0.0 && self.threshold <= 1.0) {
            return Err(SearchError::InvalidConfig(format!(
                "threshold must be in (0, 1], got {}",
                self.threshold
            )));
        }
        if self.live.min_query_chars == 0 {
            return Err(SearchError::InvalidConfig(
                "live.minQueryChars must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Per-kind limits for the aggregated (dropdown) search.
///
/// Videos get more room because they are the platform's primary content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResultCaps {
    pub videos: usize,
    pub courses: usize,
    pub teachers: usize,
    pub communities: usize,
}

impl Default for ResultCaps {
    fn default() -> Self {
        Self {
            videos: 10,
            courses: 5,
            teachers: 5,
            communities: 5,
        }
    }
}

/// How many of the capped results the dropdown actually shows per group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DisplayCaps {
    pub videos: usize,
    pub courses: usize,
    pub teachers: usize,
    pub communities: usize,
}

impl Default for DisplayCaps {
    fn default() -> Self {
        Self {
            videos: 3,
            courses: 3,
            teachers: 3,
            communities: 3,
        }
    }
}

/// Search-as-you-type behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LiveConfig {
    /// Queries shorter than this (after trimming) keep the dropdown closed.
    pub min_query_chars: usize,
    /// Quiet period after the last keystroke before a search is dispatched.
    pub debounce_ms: u64,
    pub display: DisplayCaps,
}

impl Default for LiveConfig {
    fn default() -> Self {
        Self {
            min_query_chars: 3,
            debounce_ms: 200,
            display: DisplayCaps::default(),
        }
    }
}

impl LiveConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

/// Optional `{ "field.path": weight }` maps replacing the built-in schemas.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeightOverrides {
    pub videos: Option<BTreeMap<String, f64>>,
    pub courses: Option<BTreeMap<String, f64>>,
    pub teachers: Option<BTreeMap<String, f64>>,
    pub communities: Option<BTreeMap<String, f64>>,
    pub notes: Option<BTreeMap<String, f64>>,
}
