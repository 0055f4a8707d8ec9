// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Exact and range post-filters, applied after fuzzy matching.
//!
//! Filters only remove matches. They never touch scores, so whatever survives
//! keeps the rank the matcher gave it.
//!
//! Every filter field is optional and the set is conjunctive: a record passes
//! when it passes each field that is set. A blank string or an unusable price
//! range counts as "not set", because these values usually come straight from
//! UI state (an empty `<select>`, a half-typed price box) and a search box
//! should never fail on them.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::types::{Community, Course, Note, Teacher, Video};

/// A post-filter for one record type.
pub trait RecordFilter<T> {
    /// Does the record pass every filter field that is set?
    fn matches(&self, record: &T) -> bool;

    /// True when no field is set, so every record passes.
    fn is_empty(&self) -> bool;

    /// Log any filter values that were ignored as unusable.
    fn report_ignored(&self) {}
}

/// Treat `None`, `""` and whitespace the same way.
fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn equals(filter: &Option<String>, field: Option<&str>) -> bool {
    match active(filter) {
        None => true,
        Some(wanted) => field == Some(wanted),
    }
}

// =============================================================================
// PRICE RANGE
// =============================================================================

/// Inclusive price range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A range with a NaN bound or `min > max` is ignored rather than applied.
    pub fn is_valid(&self) -> bool {
        !self.min.is_nan() && !self.max.is_nan() && self.min <= self.max
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min && price <= self.max
    }

    /// Parse `[min, max]` or `{"min": .., "max": ..}`; bounds may be numbers
    /// or numeric strings. Anything else is `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        fn bound(value: &Value) -> Option<f64> {
            value
                .as_f64()
                .or_else(|| value.as_str().and_then(|s| s.trim().parse().ok()))
        }

        match value {
            Value::Array(items) if items.len() == 2 => {
                Some(Self::new(bound(&items[0])?, bound(&items[1])?))
            }
            Value::Object(map) => Some(Self::new(bound(map.get("min")?)?, bound(map.get("max")?)?)),
            _ => None,
        }
    }
}

fn lenient_price_range<'de, D>(deserializer: D) -> Result<Option<PriceRange>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| {
        let range = PriceRange::from_json(&value);
        if range.is_none() && !value.is_null() {
            warn!(value = %value, "ignoring non-numeric price range");
        }
        range
    }))
}

// =============================================================================
// PER-KIND FILTERS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct VideoFilter {
    /// Exact category.
    pub category: Option<String>,
    /// Case-insensitive substring of the author's name.
    pub author: Option<String>,
}

impl RecordFilter<Video> for VideoFilter {
    fn matches(&self, video: &Video) -> bool {
        if !equals(&self.category, video.category.as_deref()) {
            return false;
        }
        match active(&self.author) {
            None => true,
            Some(needle) => video
                .author
                .as_ref()
                .is_some_and(|a| a.name.to_lowercase().contains(&needle.to_lowercase())),
        }
    }

    fn is_empty(&self) -> bool {
        active(&self.category).is_none() && active(&self.author).is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CourseFilter {
    pub category: Option<String>,
    pub level: Option<String>,
    #[serde(deserialize_with = "lenient_price_range")]
    pub price_range: Option<PriceRange>,
}

impl CourseFilter {
    fn active_price_range(&self) -> Option<PriceRange> {
        self.price_range.filter(PriceRange::is_valid)
    }
}

impl RecordFilter<Course> for CourseFilter {
    fn matches(&self, course: &Course) -> bool {
        if !equals(&self.category, course.category.as_deref())
            || !equals(&self.level, course.level.as_deref())
        {
            return false;
        }
        match self.active_price_range() {
            None => true,
            Some(range) => course.price.is_some_and(|price| range.contains(price)),
        }
    }

    fn is_empty(&self) -> bool {
        active(&self.category).is_none()
            && active(&self.level).is_none()
            && self.active_price_range().is_none()
    }

    fn report_ignored(&self) {
        if let Some(range) = self.price_range.filter(|r| !r.is_valid()) {
            warn!(min = range.min, max = range.max, "ignoring invalid price range");
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TeacherFilter {
    /// Must appear in the teacher's subject list.
    pub subject: Option<String>,
}

impl RecordFilter<Teacher> for TeacherFilter {
    fn matches(&self, teacher: &Teacher) -> bool {
        match active(&self.subject) {
            None => true,
            Some(subject) => teacher.subjects.iter().any(|s| s == subject),
        }
    }

    fn is_empty(&self) -> bool {
        active(&self.subject).is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommunityFilter {
    pub category: Option<String>,
}

impl RecordFilter<Community> for CommunityFilter {
    fn matches(&self, community: &Community) -> bool {
        equals(&self.category, community.category.as_deref())
    }

    fn is_empty(&self) -> bool {
        active(&self.category).is_none()
    }
}

/// Notes have no filters; the type exists so notes share the index code path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NoteFilter {}

impl RecordFilter<Note> for NoteFilter {
    fn matches(&self, _note: &Note) -> bool {
        true
    }

    fn is_empty(&self) -> bool {
        true
    }
}
