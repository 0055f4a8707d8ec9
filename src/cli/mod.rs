// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the edusearch command-line interface.
//!
//! Two subcommands: `search` runs a query against a corpus file (one kind
//! with filters, or all kinds through the capped global search), and `stats`
//! summarizes what a corpus file would load.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "edusearch",
    about = "Weighted fuzzy search over an education catalog",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Which index to query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Kind {
    Videos,
    Courses,
    Teachers,
    Communities,
    /// Every kind, capped per kind (what the header dropdown sees)
    All,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus file and display ranked results
    Search {
        /// JSON corpus: { "videos": [..], "courses": [..], "users": [..], "communities": [..] }
        corpus: PathBuf,

        /// Search query
        query: String,

        /// Which kind of record to search
        #[arg(short, long, value_enum, default_value = "all")]
        kind: Kind,

        /// Engine configuration (threshold, caps, weight overrides)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Exact category (videos, courses, communities)
        #[arg(long)]
        category: Option<String>,

        /// Exact level (courses)
        #[arg(long)]
        level: Option<String>,

        /// Author name substring, case-insensitive (videos)
        #[arg(long)]
        author: Option<String>,

        /// Subject the teacher must list (teachers)
        #[arg(long)]
        subject: Option<String>,

        /// Lowest price, inclusive (courses)
        #[arg(long)]
        min_price: Option<f64>,

        /// Highest price, inclusive (courses)
        #[arg(long)]
        max_price: Option<f64>,

        /// Maximum results per kind (defaults to the configured caps)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Print results as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show record counts and field weights for a corpus file
    Stats {
        /// JSON corpus file
        corpus: PathBuf,

        /// Engine configuration (weight overrides are shown)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}
