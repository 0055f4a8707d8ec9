// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use edusearch::{
    CommunityFilter, Corpus, CourseFilter, DisplayCaps, Dropdown, EngineConfig, FieldPath,
    GlobalSearchResponse, PriceRange, Schema, SearchEngine, Searchable, TeacherFilter,
    VideoFilter,
};

mod cli;
use cli::display;
use cli::{Cli, Commands, Kind};

/// Default per-kind limit when searching a single kind.
const DEFAULT_KIND_LIMIT: usize = 10;

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            corpus,
            query,
            kind,
            config,
            category,
            level,
            author,
            subject,
            min_price,
            max_price,
            limit,
            json,
        } => {
            let filters = Filters {
                category,
                level,
                author,
                subject,
                price_range: price_range(min_price, max_price),
            };
            run_search(&corpus, config.as_deref(), &query, kind, &filters, limit, json)
        }
        Commands::Stats { corpus, config } => run_stats(&corpus, config.as_deref()),
    }
}

/// Logs go to stderr; `EDUSEARCH_LOG` takes the usual `EnvFilter` syntax.
fn init_tracing() {
    let filter = EnvFilter::try_from_env("EDUSEARCH_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_corpus(path: &Path) -> Result<Corpus> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse corpus {}", path.display()))
}

fn load_engine(corpus_path: &Path, config_path: Option<&Path>) -> Result<SearchEngine> {
    let config = match config_path {
        Some(path) => EngineConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    let engine = SearchEngine::new(config).context("Invalid search configuration")?;
    engine.initialize(load_corpus(corpus_path)?);
    Ok(engine)
}

/// Either bound may be omitted; a missing one is open-ended.
fn price_range(min: Option<f64>, max: Option<f64>) -> Option<PriceRange> {
    if min.is_none() && max.is_none() {
        return None;
    }
    Some(PriceRange::new(min.unwrap_or(0.0), max.unwrap_or(f64::INFINITY)))
}

struct Filters {
    category: Option<String>,
    level: Option<String>,
    author: Option<String>,
    subject: Option<String>,
    price_range: Option<PriceRange>,
}

impl Filters {
    fn any(&self) -> bool {
        self.category.is_some()
            || self.level.is_some()
            || self.author.is_some()
            || self.subject.is_some()
            || self.price_range.is_some()
    }
}

fn run_search(
    corpus: &Path,
    config: Option<&Path>,
    query: &str,
    kind: Kind,
    filters: &Filters,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let engine = load_engine(corpus, config)?;
    let start = Instant::now();

    let cap = limit.unwrap_or(DEFAULT_KIND_LIMIT);
    let mut response = GlobalSearchResponse::default();
    match kind {
        Kind::All => {
            if filters.any() {
                warn!("filters are ignored when searching all kinds");
            }
            response = engine.global_search(query);
            if let Some(limit) = limit {
                response.videos.truncate(limit);
                response.courses.truncate(limit);
                response.teachers.truncate(limit);
                response.communities.truncate(limit);
            }
        }
        Kind::Videos => {
            let filter = VideoFilter {
                category: filters.category.clone(),
                author: filters.author.clone(),
            };
            response.videos = engine.search_videos(query, Some(&filter));
            response.videos.truncate(cap);
        }
        Kind::Courses => {
            let filter = CourseFilter {
                category: filters.category.clone(),
                level: filters.level.clone(),
                price_range: filters.price_range,
            };
            response.courses = engine.search_courses(query, Some(&filter));
            response.courses.truncate(cap);
        }
        Kind::Teachers => {
            let filter = TeacherFilter {
                subject: filters.subject.clone(),
            };
            response.teachers = engine.search_teachers(query, Some(&filter));
            response.teachers.truncate(cap);
        }
        Kind::Communities => {
            let filter = CommunityFilter {
                category: filters.category.clone(),
            };
            response.communities = engine.search_communities(query, Some(&filter));
            response.communities.truncate(cap);
        }
    }
    let elapsed_us = start.elapsed().as_micros();

    if json {
        let out = match kind {
            Kind::All => serde_json::to_string_pretty(&response)?,
            Kind::Videos => serde_json::to_string_pretty(&response.videos)?,
            Kind::Courses => serde_json::to_string_pretty(&response.courses)?,
            Kind::Teachers => serde_json::to_string_pretty(&response.teachers)?,
            Kind::Communities => serde_json::to_string_pretty(&response.communities)?,
        };
        println!("{}", out);
        return Ok(());
    }

    // Everything returned is shown; the caps above already did the cutting
    let show_all = DisplayCaps {
        videos: usize::MAX,
        courses: usize::MAX,
        teachers: usize::MAX,
        communities: usize::MAX,
    };
    display::render_results(&Dropdown::build(query, &response, &show_all), elapsed_us);
    Ok(())
}

fn run_stats(corpus: &Path, config: Option<&Path>) -> Result<()> {
    let engine = load_engine(corpus, config)?;

    display::section_top("Corpus");
    display::stat_row("videos", &engine.videos().len().to_string());
    display::stat_row("courses", &engine.courses().len().to_string());
    display::stat_row("teachers", &engine.teachers().len().to_string());
    display::stat_row("communities", &engine.communities().len().to_string());

    display::section_mid("Field weights");
    stat_schema(engine.videos().matcher().schema());
    stat_schema(engine.courses().matcher().schema());
    stat_schema(engine.teachers().matcher().schema());
    stat_schema(engine.communities().matcher().schema());

    let config = engine.config();
    display::section_mid("Matching");
    display::stat_row("threshold", &format!("{}", config.threshold));
    display::stat_row(
        "caps",
        &format!(
            "videos {} / courses {} / teachers {} / communities {}",
            config.caps.videos, config.caps.courses, config.caps.teachers, config.caps.communities
        ),
    );
    display::section_bot();
    Ok(())
}

fn stat_schema<T: Searchable>(schema: &Schema<T>) {
    let weights: Vec<String> = schema
        .fields()
        .iter()
        .map(|(field, weight)| format!("{} {}", field.path(), weight))
        .collect();
    display::stat_row(T::KIND.group_label(), &weights.join(", "));
}
