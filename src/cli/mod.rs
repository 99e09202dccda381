// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the searchit command-line interface.
//!
//! Three subcommands, all of which load a JSON Lines corpus first: `search`
//! answers one query, `serve` answers one query per stdin line with one JSON
//! response per stdout line, and `inspect` prints index statistics.

pub mod display;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "searchit",
    about = "Full-text search over crawled pages, with typo correction",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where the pages come from and how to read them.
#[derive(Args, Debug, Clone)]
pub struct CorpusArgs {
    /// JSON Lines file, one {"url", "html"} record per line
    pub corpus: PathBuf,

    /// Treat page content as plain text (first line is the title) instead of HTML
    #[arg(long)]
    pub plain_text: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run one query and display the results
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Search query
        query: String,

        /// Maximum number of results to display
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Print the raw JSON response instead of the table
        #[arg(long)]
        json: bool,

        /// Engine configuration (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Answer one query per stdin line with one JSON response per line
    Serve {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Engine configuration (JSON)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Load a corpus and print index statistics
    Inspect {
        #[command(flatten)]
        corpus: CorpusArgs,
    },
}
