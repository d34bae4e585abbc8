// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use scour::render::{fill_template, slice_fragments, QUERY_TOKEN};
use scour::{
    highlight, keywords_from_url, mark_text, parse_query, AutoSource, CorpusFormat, ExclusionSet, Fragment,
    MatchOptions, MemoryTree, SearchConfig, SearchSession, Searcher,
};

mod cli;
use cli::display::{self, BOX_WIDTH};
use cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Search {
            corpus,
            query,
            config,
            top_n,
            unescape,
            origin,
            html,
        } => {
            let options = SearchArgs {
                config,
                top_n,
                unescape,
                origin,
            };
            run_search(corpus, &query, options, html).await
        }
        Commands::Inspect { corpus, limit } => run_inspect(&corpus, limit).await,
        Commands::Mark {
            keywords,
            url,
            unescape,
            html,
        } => run_mark(keywords, url.as_deref(), unescape, html),
    };

    if let Err(err) = result {
        display::error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

/// Command-line overrides on top of the configuration file.
struct SearchArgs {
    config: Option<String>,
    top_n: Option<i64>,
    unescape: bool,
    origin: Option<String>,
}

impl SearchArgs {
    fn into_config(self, corpus: String) -> Result<SearchConfig> {
        let mut config = match &self.config {
            Some(path) => SearchConfig::from_file(path).with_context(|| format!("reading config {}", path))?,
            None => SearchConfig::default(),
        };
        config.path = corpus;
        if let Some(top_n) = self.top_n {
            config.top_n_per_article = top_n;
        }
        if self.unescape {
            config.unescape = true;
        }
        if let Some(origin) = self.origin {
            config.origin = origin;
        }
        Ok(config)
    }
}

async fn run_search(corpus: String, raw_query: &str, args: SearchArgs, html: bool) -> Result<()> {
    let config = args.into_config(corpus)?;
    let session = SearchSession::new(config, AutoSource::new()).context("invalid search configuration")?;

    if html {
        let view = session
            .search(raw_query)
            .await
            .with_context(|| format!("loading {}", session.config().path))?;
        println!("{}", view.stats_html());
        println!("{}", view.results_html());
        return Ok(());
    }

    let query = parse_query(raw_query, session.options().format);
    if query.is_empty() {
        return Ok(());
    }

    let corpus = session
        .ensure_loaded()
        .await
        .with_context(|| format!("loading {}", session.config().path))?;
    let matches = Searcher::new(&corpus, session.options()).ranked_matches(&query.keywords);

    if matches.is_empty() {
        let message = fill_template(&session.config().languages.hits_empty, QUERY_TOKEN, &query.text);
        println!("{}", display::themed(display::YELLOW, &[], &message));
        return Ok(());
    }

    display::section_top(&format!("{} results for \"{}\"", matches.len(), query.text));
    for (rank, matched) in matches.iter().enumerate() {
        let document = matched.document;
        let title = match &matched.excerpts.title {
            Some(slice) => slice_fragments(&document.title, slice),
            None => vec![Fragment::Plain(document.title.clone())],
        };

        display::row(&format!(" {:>2}. {}", rank + 1, display::fragments_inline(&title)));
        display::row(&format!(
            "     {}",
            display::themed(display::BLUE, &[], &display::truncate(&matched.href, BOX_WIDTH - 6))
        ));
        display::row(&format!(
            "     {}",
            display::coverage_label(
                matched.item.included_count,
                query.keywords.len(),
                matched.item.hit_count
            )
        ));
        for slice in &matched.excerpts.content {
            let fragments = slice_fragments(&document.content, slice);
            for line in display::fragments_wrapped(&fragments, BOX_WIDTH - 6) {
                display::row(&format!("     {}", line));
            }
        }
        if rank + 1 < matches.len() {
            display::row("");
        }
    }
    display::section_bot();
    Ok(())
}

async fn run_inspect(path: &str, limit: usize) -> Result<()> {
    let corpus = scour::load(&AutoSource::new(), path)
        .await
        .with_context(|| format!("loading {}", path))?;

    let format = match CorpusFormat::from_path(path) {
        CorpusFormat::Json => "JSON",
        CorpusFormat::Xml => "XML",
    };
    let content_bytes: usize = corpus.iter().map(|doc| doc.content.len()).sum();
    let without_content = corpus.iter().filter(|doc| doc.content.is_empty()).count();

    display::section_top("CORPUS");
    display::row(&format!(" {} {}", display::pad_right("source", 12), path));
    display::row(&format!(" {} {}", display::pad_right("format", 12), format));
    display::row(&format!(
        " {} {}",
        display::pad_right("documents", 12),
        display::themed(display::GREEN, &[display::BOLD], &corpus.len().to_string())
    ));
    display::row(&format!(
        " {} {}",
        display::pad_right("content", 12),
        display::format_size(content_bytes)
    ));
    if without_content > 0 {
        display::row(&format!(
            " {} {}",
            display::pad_right("empty", 12),
            display::themed(display::YELLOW, &[], &format!("{} without content", without_content))
        ));
    }
    display::section_bot();

    if limit > 0 && !corpus.is_empty() {
        display::section_top("DOCUMENTS");
        for doc in corpus.iter().take(limit) {
            display::row(&format!(" {}", display::truncate(&doc.title, BOX_WIDTH - 2)));
            display::row(&format!(
                "   {}",
                display::themed(display::GRAY, &[], &display::truncate(&doc.url, BOX_WIDTH - 4))
            ));
        }
        if corpus.len() > limit {
            display::row(&format!(" ... {} more", corpus.len() - limit));
        }
        display::section_bot();
    }
    Ok(())
}

fn run_mark(keywords: Vec<String>, url: Option<&str>, unescape: bool, html: bool) -> Result<()> {
    let keywords = match url {
        Some(url) => keywords_from_url(url),
        None => keywords,
    };

    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading stdin")?;

    let options = MatchOptions::with_unescape(unescape);
    if html {
        let mut tree = MemoryTree::from_text("body", &input);
        let marks = match highlight(&mut tree, &keywords, options, &ExclusionSet::default()) {
            Ok(marks) => marks,
            Err(never) => match never {},
        };
        log::info!("inserted {} marks", marks);
        println!("{}", tree.to_html(tree.root()));
    } else {
        let fragments = mark_text(&keywords, &input, options).unwrap_or_else(|| vec![Fragment::Plain(input.clone())]);
        print!("{}", display::fragments_inline(&fragments));
    }
    Ok(())
}
