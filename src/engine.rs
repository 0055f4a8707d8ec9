// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The search engine: four persistent indexes and the notes schema.
//!
//! There is no global instance. Build one [`SearchEngine`] at startup, share it
//! behind an `Arc`, and call [`SearchEngine::initialize`] whenever the data
//! layer has a fresh corpus.
//!
//! # Persistent vs. per-call indexes
//!
//! Videos, courses, teachers, and communities are global and loaded once, so
//! they live in persistent indexes. Notes belong to one user and arrive with
//! the request, so [`SearchEngine::search_notes`] builds a throwaway
//! [`EntityIndex`] per call. Both paths use the same index type, matcher, and
//! ranking; only the lifetime differs.

use std::sync::Arc;

use tracing::info;

use crate::aggregate;
use crate::config::EngineConfig;
use crate::error::Result;
use crate::filter::{CommunityFilter, CourseFilter, TeacherFilter, VideoFilter};
use crate::index::EntityIndex;
use crate::schema::Schema;
use crate::types::{
    Community, Corpus, Course, GlobalSearchResponse, Note, Scored, Teacher, Video,
};

pub struct SearchEngine {
    config: EngineConfig,
    videos: EntityIndex<Video>,
    courses: EntityIndex<Course>,
    teachers: EntityIndex<Teacher>,
    communities: EntityIndex<Community>,
    notes_schema: Schema<Note>,
}

impl SearchEngine {
    /// Validate the config and every schema, then create empty indexes.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        let weights = &config.weights;
        let threshold = config.threshold;

        let videos = EntityIndex::new(Schema::resolve(weights.videos.as_ref())?, threshold);
        let courses = EntityIndex::new(Schema::resolve(weights.courses.as_ref())?, threshold);
        let teachers = EntityIndex::new(Schema::resolve(weights.teachers.as_ref())?, threshold);
        let communities =
            EntityIndex::new(Schema::resolve(weights.communities.as_ref())?, threshold);
        let notes_schema = Schema::resolve(weights.notes.as_ref())?;

        Ok(Self {
            config,
            videos,
            courses,
            teachers,
            communities,
            notes_schema,
        })
    }

    /// An engine with default config, already loaded with `corpus`.
    pub fn with_corpus(corpus: Corpus) -> Self {
        let engine = Self::default();
        engine.initialize(corpus);
        engine
    }

    /// Replace all four corpora. Omitted kinds become empty.
    pub fn initialize(&self, corpus: Corpus) {
        let Corpus {
            videos,
            courses,
            users,
            communities,
        } = corpus;

        let counts = (videos.len(), courses.len(), users.len(), communities.len());
        self.videos.rebuild(videos);
        self.courses.rebuild(courses);
        self.teachers.rebuild(users);
        self.communities.rebuild(communities);

        info!(
            videos = counts.0,
            courses = counts.1,
            teachers = counts.2,
            communities = counts.3,
            "search corpus initialized"
        );
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn videos(&self) -> &EntityIndex<Video> {
        &self.videos
    }

    pub fn courses(&self) -> &EntityIndex<Course> {
        &self.courses
    }

    pub fn teachers(&self) -> &EntityIndex<Teacher> {
        &self.teachers
    }

    pub fn communities(&self) -> &EntityIndex<Community> {
        &self.communities
    }

    pub fn search_videos(&self, query: &str, filter: Option<&VideoFilter>) -> Vec<Scored<Video>> {
        self.videos.search(query, filter)
    }

    pub fn search_courses(&self, query: &str, filter: Option<&CourseFilter>) -> Vec<Scored<Course>> {
        self.courses.search(query, filter)
    }

    pub fn search_teachers(
        &self,
        query: &str,
        filter: Option<&TeacherFilter>,
    ) -> Vec<Scored<Teacher>> {
        self.teachers.search(query, filter)
    }

    pub fn search_communities(
        &self,
        query: &str,
        filter: Option<&CommunityFilter>,
    ) -> Vec<Scored<Community>> {
        self.communities.search(query, filter)
    }

    /// Search a user's own notes with a one-off index.
    pub fn search_notes(&self, notes: &[Note], query: &str) -> Vec<Scored<Note>> {
        if query.trim().is_empty() || notes.is_empty() {
            return Vec::new();
        }
        EntityIndex::from_records(self.notes_schema.clone(), self.config.threshold, notes.to_vec())
            .search(query, None)
    }

    /// Unfiltered search across all four kinds, capped per kind.
    pub fn global_search(&self, query: &str) -> GlobalSearchResponse {
        aggregate::global_search(self, query)
    }

    /// [`SearchEngine::global_search`] on the blocking pool, for async callers.
    pub async fn global_search_async(self: Arc<Self>, query: String) -> GlobalSearchResponse {
        aggregate::global_search_async(self, query).await
    }
}

impl Default for SearchEngine {
    /// Built-in schemas and defaults; cannot fail, so no `Result`.
    fn default() -> Self {
        let config = EngineConfig::default();
        let threshold = config.threshold;
        Self {
            config,
            videos: EntityIndex::new(Schema::default(), threshold),
            courses: EntityIndex::new(Schema::default(), threshold),
            teachers: EntityIndex::new(Schema::default(), threshold),
            communities: EntityIndex::new(Schema::default(), threshold),
            notes_schema: Schema::default(),
        }
    }
}
