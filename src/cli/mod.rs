// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the scour command-line interface.
//!
//! Three subcommands: `search` to query a corpus file or URL the way the
//! search box would, `inspect` to check what a corpus loads into, and `mark`
//! to highlight text read from stdin the way a destination page would.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "scour",
    about = "Search and highlight a static site's article corpus",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search a corpus and display ranked results
    Search {
        /// Corpus file or URL (`json` suffix for JSON, XML otherwise)
        corpus: String,

        /// Search query
        query: String,

        /// Search configuration (JSON, the theme's search block)
        #[arg(short, long)]
        config: Option<String>,

        /// Content excerpts per document; negative keeps all
        #[arg(short = 'n', long, allow_hyphen_values = true)]
        top_n: Option<i64>,

        /// Match keywords in their HTML-escaped form
        #[arg(long)]
        unescape: bool,

        /// Base url for relative document links
        #[arg(long)]
        origin: Option<String>,

        /// Print the result and stats markup instead of a terminal view
        #[arg(long)]
        html: bool,
    },

    /// Load a corpus and summarize its documents
    Inspect {
        /// Corpus file or URL
        corpus: String,

        /// Documents to list (0 lists none)
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Highlight keywords in text read from stdin
    Mark {
        /// Keywords to mark
        #[arg(required_unless_present = "url", num_args = 1..)]
        keywords: Vec<String>,

        /// Take the keywords from a result link's `highlight` parameter
        #[arg(long, conflicts_with = "keywords")]
        url: Option<String>,

        /// Match keywords in their HTML-escaped form
        #[arg(long)]
        unescape: bool,

        /// Print HTML with `<mark>` elements instead of a terminal view
        #[arg(long)]
        html: bool,
    },
}
