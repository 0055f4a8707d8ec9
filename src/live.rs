// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search-as-you-type controller for the header search box.
//!
//! ```text
//!            input ≥ min chars            response (latest seq)
//!   ┌──────┐ ─────────────────▶ ┌───────────┐ ─────────────────▶ ┌─────────┐
//!   │ Idle │                    │ Searching │                    │ Showing │
//!   └──────┘ ◀───────────────── └───────────┘ ◀───────────────── └─────────┘
//!        clear / submit / select /       more input (previous results
//!        short input / blur w/o results  stay visible as `stale`)
//! ```
//!
//! Every dispatched search carries a sequence number. A response is applied
//! only if its number is still the latest issued, so a slow search for
//! `"calc"` can never overwrite the results for `"calculus"`. Searches also
//! wait out a short debounce and are dropped if another keystroke arrives in
//! the meantime.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::Serialize;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::aggregate;
use crate::config::{DisplayCaps, LiveConfig};
use crate::engine::SearchEngine;
use crate::types::{EntityKind, GlobalSearchResponse, Scored};

/// Where the dropdown is in its lifecycle.
#[derive(Debug, Clone, PartialEq)]
pub enum LiveState {
    /// Nothing to show; the dropdown is hidden.
    Idle,
    /// A search for `query` is pending. `stale` is what was on screen before.
    Searching {
        seq: u64,
        query: String,
        stale: Option<Arc<GlobalSearchResponse>>,
    },
    /// Results for `query` have arrived.
    Showing {
        seq: u64,
        query: String,
        results: Arc<GlobalSearchResponse>,
    },
}

impl LiveState {
    fn query(&self) -> Option<&str> {
        match self {
            LiveState::Idle => None,
            LiveState::Searching { query, .. } | LiveState::Showing { query, .. } => Some(query),
        }
    }

    /// The result set currently on screen, if any.
    fn visible(&self) -> Option<&Arc<GlobalSearchResponse>> {
        match self {
            LiveState::Idle => None,
            LiveState::Searching { stale, .. } => stale.as_ref(),
            LiveState::Showing { results, .. } => Some(results),
        }
    }
}

/// One row in the dropdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DropdownItem {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub score: f64,
}

/// One entity kind's section of the dropdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DropdownGroup {
    pub kind: EntityKind,
    pub label: &'static str,
    pub items: Vec<DropdownItem>,
    /// How many results the aggregator returned for this kind.
    pub total: usize,
    pub has_more: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dropdown {
    pub query: String,
    pub groups: Vec<DropdownGroup>,
}

impl Dropdown {
    /// Group a response by kind, cutting each group to its display cap.
    /// Empty groups are left out.
    pub fn build(query: &str, response: &GlobalSearchResponse, caps: &DisplayCaps) -> Self {
        let groups = [
            group(EntityKind::Video, &response.videos, caps.videos, |v| {
                (v.id.clone(), v.title.clone(), v.author.as_ref().map(|a| a.name.clone()))
            }),
            group(EntityKind::Course, &response.courses, caps.courses, |c| {
                (c.id.clone(), c.title.clone(), c.instructor.as_ref().map(|p| p.name.clone()))
            }),
            group(EntityKind::Teacher, &response.teachers, caps.teachers, |t| {
                let subjects = (!t.subjects.is_empty()).then(|| t.subjects.join(", "));
                (t.id.clone(), t.name.clone(), subjects)
            }),
            group(EntityKind::Community, &response.communities, caps.communities, |g| {
                (g.id.clone(), g.name.clone(), g.category.clone())
            }),
        ];

        Self {
            query: query.to_string(),
            groups: groups.into_iter().flatten().collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

fn group<T>(
    kind: EntityKind,
    results: &[Scored<T>],
    cap: usize,
    describe: impl Fn(&T) -> (String, String, Option<String>),
) -> Option<DropdownGroup> {
    if results.is_empty() {
        return None;
    }
    let items: Vec<DropdownItem> = results
        .iter()
        .take(cap)
        .map(|scored| {
            let (id, title, subtitle) = describe(&scored.record);
            DropdownItem {
                id,
                title,
                subtitle,
                score: scored.score,
            }
        })
        .collect();

    Some(DropdownGroup {
        kind,
        label: kind.group_label(),
        has_more: results.len() > items.len(),
        total: results.len(),
        items,
    })
}

struct Inner {
    engine: Arc<SearchEngine>,
    config: LiveConfig,
    /// Last sequence number issued. Only a response carrying it is applied.
    latest: AtomicU64,
    state: Mutex<LiveState>,
}

impl Inner {
    /// Move to `Idle` and orphan any search still in flight.
    fn reset(&self) {
        let mut state = self.state.lock();
        self.latest.fetch_add(1, Ordering::SeqCst);
        *state = LiveState::Idle;
    }

    fn apply(&self, seq: u64, response: GlobalSearchResponse) -> bool {
        let mut state = self.state.lock();
        if self.latest.load(Ordering::SeqCst) != seq {
            debug!(seq, "discarding stale search response");
            return false;
        }
        let query = match &*state {
            LiveState::Searching { seq: pending, query, .. } if *pending == seq => query.clone(),
            _ => return false,
        };
        debug!(seq, query = %query, results = response.total(), "showing search results");
        *state = LiveState::Showing {
            seq,
            query,
            results: Arc::new(response),
        };
        true
    }
}

/// Controller for one search box. Cheap to clone; clones share state.
#[derive(Clone)]
pub struct LiveSearch {
    inner: Arc<Inner>,
}

impl LiveSearch {
    pub fn new(engine: Arc<SearchEngine>, config: LiveConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                engine,
                config,
                latest: AtomicU64::new(0),
                state: Mutex::new(LiveState::Idle),
            }),
        }
    }

    /// Uses the engine's own live settings.
    pub fn for_engine(engine: Arc<SearchEngine>) -> Self {
        let config = engine.config().live;
        Self::new(engine, config)
    }

    /// Handle the search box's new contents.
    ///
    /// Too-short input returns to `Idle`. Otherwise a debounced search is
    /// spawned on the current tokio runtime and its handle returned; the
    /// handle resolves once the search has been applied or discarded.
    ///
    /// Called outside a tokio runtime, nothing is dispatched: the state is
    /// left as it was and `None` is returned.
    pub fn input(&self, text: &str) -> Option<JoinHandle<()>> {
        let query = text.trim();
        if query.chars().count() < self.inner.config.min_query_chars {
            self.inner.reset();
            return None;
        }

        let Ok(runtime) = Handle::try_current() else {
            warn!(query, "live search needs a tokio runtime; input ignored");
            return None;
        };

        let seq = {
            let mut state = self.inner.state.lock();
            let seq = self.inner.latest.fetch_add(1, Ordering::SeqCst) + 1;
            let stale = state.visible().cloned();
            *state = LiveState::Searching {
                seq,
                query: query.to_string(),
                stale,
            };
            seq
        };
        debug!(seq, query, "search dispatched");

        let inner = Arc::clone(&self.inner);
        let query = query.to_string();
        Some(runtime.spawn(async move {
            let debounce = inner.config.debounce();
            if !debounce.is_zero() {
                tokio::time::sleep(debounce).await;
            }
            if inner.latest.load(Ordering::SeqCst) != seq {
                debug!(seq, "search superseded during debounce");
                return;
            }
            let response = aggregate::global_search_async(Arc::clone(&inner.engine), query).await;
            inner.apply(seq, response);
        }))
    }

    /// Apply a response for search `seq`. Returns `false` if a newer search
    /// has been issued since (or the box was reset), in which case the
    /// response is dropped.
    pub fn apply_response(&self, seq: u64, response: GlobalSearchResponse) -> bool {
        self.inner.apply(seq, response)
    }

    /// The user cleared the input.
    pub fn clear(&self) {
        self.inner.reset();
    }

    /// The user pressed enter. Returns the query for the full results page.
    pub fn submit(&self) -> Option<String> {
        let query = self.inner.state.lock().query().map(str::to_string);
        self.inner.reset();
        query
    }

    /// The user picked a dropdown item and is navigating away.
    pub fn select(&self) {
        self.inner.reset();
    }

    /// The input lost focus. The dropdown stays open if it has something in it.
    pub fn blur(&self) {
        let has_results = self
            .inner
            .state
            .lock()
            .visible()
            .is_some_and(|results| !results.is_empty());
        if !has_results {
            self.inner.reset();
        }
    }

    pub fn state(&self) -> LiveState {
        self.inner.state.lock().clone()
    }

    /// Last sequence number issued.
    pub fn latest_seq(&self) -> u64 {
        self.inner.latest.load(Ordering::SeqCst)
    }

    /// What the dropdown should render, or `None` if it is hidden.
    ///
    /// While a search is pending the previous results stay on screen.
    pub fn dropdown(&self) -> Option<Dropdown> {
        let state = self.inner.state.lock();
        let query = state.query()?;
        let results = state.visible()?;
        let dropdown = Dropdown::build(query, results, &self.inner.config.display);
        (!dropdown.is_empty()).then_some(dropdown)
    }
}
