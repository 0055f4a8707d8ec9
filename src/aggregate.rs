// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Global search: one query, four indexes, one capped response.
//!
//! ```text
//!            ┌──► videos      ──► cap 10 ──┐
//!   query ───┼──► courses     ──► cap 5  ──┼──► GlobalSearchResponse
//!            ├──► teachers    ──► cap 5  ──┤
//!            └──► communities ──► cap 5  ──┘
//!                 (rayon::join, all four joined)
//! ```
//!
//! The branches share nothing mutable, so they run in parallel and the call
//! takes as long as the slowest one. A branch that panics is contained: its
//! kind comes back empty and the error is logged, the other three are
//! returned as usual.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, error};

use crate::engine::SearchEngine;
use crate::types::{EntityKind, GlobalSearchResponse, Scored};

/// Run all four searches and cap each list.
pub fn global_search(engine: &SearchEngine, query: &str) -> GlobalSearchResponse {
    let caps = engine.config().caps;
    let start = Instant::now();

    let (videos, courses, teachers, communities) = join4(
        || isolated(EntityKind::Video, || capped(engine.search_videos(query, None), caps.videos)),
        || isolated(EntityKind::Course, || capped(engine.search_courses(query, None), caps.courses)),
        || isolated(EntityKind::Teacher, || capped(engine.search_teachers(query, None), caps.teachers)),
        || {
            isolated(EntityKind::Community, || {
                capped(engine.search_communities(query, None), caps.communities)
            })
        },
    );

    let response = GlobalSearchResponse {
        videos,
        courses,
        teachers,
        communities,
    };
    debug!(
        query,
        videos = response.videos.len(),
        courses = response.courses.len(),
        teachers = response.teachers.len(),
        communities = response.communities.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "global search"
    );
    response
}

/// [`global_search`] on tokio's blocking pool.
///
/// Matching is CPU-bound, so it must not run on an async worker thread.
pub async fn global_search_async(engine: Arc<SearchEngine>, query: String) -> GlobalSearchResponse {
    match tokio::task::spawn_blocking(move || global_search(&engine, &query)).await {
        Ok(response) => response,
        Err(err) => {
            error!(error = %err, "global search task failed");
            GlobalSearchResponse::default()
        }
    }
}

/// Keep the best `cap` results.
fn capped<T>(mut results: Vec<Scored<T>>, cap: usize) -> Vec<Scored<T>> {
    results.truncate(cap);
    results
}

/// Run one branch, turning a panic into an empty result plus a log line.
pub(crate) fn isolated<R: Default>(kind: EntityKind, branch: impl FnOnce() -> R) -> R {
    match panic::catch_unwind(AssertUnwindSafe(branch)) {
        Ok(result) => result,
        Err(payload) => {
            error!(
                kind = %kind,
                error = panic_message(payload.as_ref()),
                "search branch failed; returning no results for it"
            );
            R::default()
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&'static str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown panic"
    }
}

/// Run four closures and wait for all of them.
#[cfg(feature = "parallel")]
pub(crate) fn join4<A, B, C, D>(
    a: impl FnOnce() -> A + Send,
    b: impl FnOnce() -> B + Send,
    c: impl FnOnce() -> C + Send,
    d: impl FnOnce() -> D + Send,
) -> (A, B, C, D)
where
    A: Send,
    B: Send,
    C: Send,
    D: Send,
{
    let ((a, b), (c, d)) = rayon::join(|| rayon::join(a, b), || rayon::join(c, d));
    (a, b, c, d)
}

/// Run four closures one after another.
#[cfg(not(feature = "parallel"))]
pub(crate) fn join4<A, B, C, D>(
    a: impl FnOnce() -> A + Send,
    b: impl FnOnce() -> B + Send,
    c: impl FnOnce() -> C + Send,
    d: impl FnOnce() -> D + Send,
) -> (A, B, C, D)
where
    A: Send,
    B: Send,
    C: Send,
    D: Send,
{
    (a(), b(), c(), d())
}
