// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Weighted field schemas.
//!
//! A schema says which fields of a record are matched and how much each one
//! contributes to the record score. Weights are fractions of the whole and
//! must add up to 1.0; the scoring formula divides by the weight of the fields
//! a record actually has, so the sum is what keeps scores comparable across
//! kinds.

use std::collections::BTreeMap;
use std::fmt;

use crate::error::{Result, SearchError};
use crate::types::{FieldPath, Searchable};

/// How far the weights may drift from 1.0 before the schema is rejected.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Validated `(field, weight)` pairs for one record type.
pub struct Schema<T: Searchable> {
    fields: Vec<(T::Field, f64)>,
}

impl<T: Searchable> Schema<T> {
    /// Build a schema, checking the weight contract.
    ///
    /// Rejects an empty field list, duplicate fields, weights outside `(0, 1]`,
    /// and weights that do not sum to 1.0.
    pub fn new(fields: Vec<(T::Field, f64)>) -> Result<Self> {
        let invalid = |reason: String| SearchError::InvalidSchema { kind: T::KIND, reason };

        if fields.is_empty() {
            return Err(invalid("no fields".to_string()));
        }

        for (i, (field, weight)) in fields.iter().enumerate() {
            if !weight.is_finite() || *weight <= 0.0 || *weight > 1.0 {
                return Err(invalid(format!(
                    "weight {} for '{}' is outside (0, 1]",
                    weight,
                    field.path()
                )));
            }
            if fields[..i].iter().any(|(other, _)| other == field) {
                return Err(invalid(format!("field '{}' listed twice", field.path())));
            }
        }

        let sum: f64 = fields.iter().map(|(_, w)| w).sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(invalid(format!("weights sum to {}, expected 1.0", sum)));
        }

        Ok(Self { fields })
    }

    /// Build a schema from dotted paths, e.g. from a config file.
    ///
    /// An unknown path is a configuration error, reported before any index
    /// is built.
    pub fn from_paths(paths: &BTreeMap<String, f64>) -> Result<Self> {
        let fields = paths
            .iter()
            .map(|(path, weight)| {
                T::Field::from_path(path)
                    .map(|field| (field, *weight))
                    .ok_or_else(|| SearchError::UnknownField {
                        kind: T::KIND,
                        path: path.clone(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        Self::new(fields)
    }

    /// The record type's built-in weights, or the given override.
    pub fn resolve(overrides: Option<&BTreeMap<String, f64>>) -> Result<Self> {
        match overrides {
            Some(paths) => Self::from_paths(paths),
            None => Ok(Self::default()),
        }
    }

    pub fn fields(&self) -> &[(T::Field, f64)] {
        &self.fields
    }

    pub fn weight(&self, field: T::Field) -> Option<f64> {
        self.fields.iter().find(|(f, _)| *f == field).map(|(_, w)| *w)
    }
}

impl<T: Searchable> Default for Schema<T> {
    fn default() -> Self {
        // Built-in weights are checked by the tests below.
        Self {
            fields: T::default_weights().to_vec(),
        }
    }
}

impl<T: Searchable> Clone for Schema<T> {
    fn clone(&self) -> Self {
        Self {
            fields: self.fields.clone(),
        }
    }
}

impl<T: Searchable> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.fields.iter().map(|(field, w)| (field.path(), w)))
            .finish()
    }
}
