// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Entity indexes: a matcher bound to a swappable corpus snapshot.
//!
//! # Snapshot lifecycle
//!
//! ```text
//!   EntityIndex
//!   ┌──────────────────────────────┐
//!   │ RwLock<Arc<Snapshot>> ───────┼──▶ generation 0 (empty, uninitialized)
//!   └──────────────────────────────┘
//!              │ rebuild(records)
//!              ▼
//!   build new Snapshot off-lock, then swap the Arc under a short write lock
//! ```
//!
//! A search clones the `Arc` and releases the lock before doing any work, so
//! a rebuild never waits on a slow query and a query never sees a half-built
//! corpus: it keeps the snapshot it started with until it returns.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use parking_lot::RwLock;
use tracing::{debug, warn};

use crate::filter::RecordFilter;
use crate::matcher::{FuzzyMatcher, Snapshot};
use crate::schema::Schema;
use crate::scoring::ranking::rank;
use crate::types::{Scored, Searchable};

/// Fuzzy index over one kind of record.
pub struct EntityIndex<T: Searchable> {
    matcher: FuzzyMatcher<T>,
    snapshot: RwLock<Arc<Snapshot<T>>>,
    generations: AtomicU64,
}

impl<T: Searchable> EntityIndex<T> {
    /// An index with no corpus yet. Searches return nothing until
    /// [`EntityIndex::rebuild`] is called.
    pub fn new(schema: Schema<T>, threshold: f64) -> Self {
        Self {
            matcher: FuzzyMatcher::new(schema, threshold),
            snapshot: RwLock::new(Arc::new(Snapshot::uninitialized())),
            generations: AtomicU64::new(0),
        }
    }

    /// A one-off index over the given records.
    pub fn from_records(schema: Schema<T>, threshold: f64, records: Vec<T>) -> Self {
        let index = Self::new(schema, threshold);
        index.rebuild(records);
        index
    }

    /// Replace the corpus wholesale. Returns the generation now being searched.
    ///
    /// In-flight searches finish against the snapshot they already hold.
    /// When rebuilds overlap, the one that started last wins: a slower,
    /// older build that finishes afterwards is discarded.
    pub fn rebuild(&self, records: Vec<T>) -> u64 {
        let count = records.len();
        let snapshot = self.build(records);
        let generation = snapshot.generation();

        let current = self.install(snapshot);
        if current == generation {
            debug!(kind = %T::KIND, records = count, generation, "rebuilt index");
        } else {
            debug!(kind = %T::KIND, generation, current, "discarded superseded rebuild");
        }
        current
    }

    /// Claim the next generation number and normalize the records off-lock.
    fn build(&self, records: Vec<T>) -> Arc<Snapshot<T>> {
        let generation = self.generations.fetch_add(1, Ordering::SeqCst) + 1;
        Arc::new(self.matcher.snapshot(records, generation))
    }

    /// Swap in `snapshot` unless a newer one is already live. Returns the
    /// generation in place afterwards.
    fn install(&self, snapshot: Arc<Snapshot<T>>) -> u64 {
        let mut live = self.snapshot.write();
        if snapshot.generation() > live.generation() {
            *live = snapshot;
        }
        live.generation()
    }

    /// The current snapshot. Holding it pins that corpus version.
    pub fn snapshot(&self) -> Arc<Snapshot<T>> {
        Arc::clone(&self.snapshot.read())
    }

    pub fn len(&self) -> usize {
        self.snapshot.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot.read().is_empty()
    }

    /// How many times the corpus has been replaced (0 = never initialized).
    pub fn generation(&self) -> u64 {
        self.snapshot.read().generation()
    }

    pub fn matcher(&self) -> &FuzzyMatcher<T> {
        &self.matcher
    }

    /// Fuzzy search, post-filter, then rank best-first.
    ///
    /// - A blank query returns nothing, never the whole corpus.
    /// - An uninitialized or empty index returns nothing (and says so in the log).
    /// - The list is not truncated; callers pick their own limit.
    pub fn search(&self, query: &str, filter: Option<&T::Filter>) -> Vec<Scored<T>> {
        let query = query.trim();
        if query.is_empty() {
            return Vec::new();
        }

        let snapshot = self.snapshot();
        if snapshot.is_empty() {
            if snapshot.generation() == 0 {
                warn!(kind = %T::KIND, "search before the index was initialized");
            } else {
                debug!(kind = %T::KIND, "search against an empty corpus");
            }
            return Vec::new();
        }

        if let Some(filter) = filter {
            filter.report_ignored();
        }
        let filter = filter.filter(|f| !f.is_empty());

        let start = Instant::now();
        let matches = self.matcher.match_snapshot(&snapshot, query);
        let matched = matches.len();

        let records = snapshot.records();
        let mut results: Vec<Scored<T>> = matches
            .into_iter()
            .filter(|m| filter.is_none_or(|f| f.matches(&records[m.position])))
            .map(|m| Scored {
                record: records[m.position].clone(),
                score: m.score,
                position: m.position,
            })
            .collect();
        rank(&mut results);

        debug!(
            kind = %T::KIND,
            query,
            corpus = records.len(),
            matched,
            returned = results.len(),
            elapsed_us = start.elapsed().as_micros() as u64,
            "entity search"
        );
        results
    }
}
