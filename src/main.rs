// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::time::Duration;

use searchit::{
    EngineConfig, HtmlExtractor, JsonLinesCorpus, PlainTextExtractor, QueryEngine, SearchResponse, TextExtractor,
};

mod cli;
use cli::{Cli, Commands, CorpusArgs};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Commands::Search {
            corpus,
            query,
            limit,
            json,
            config,
        } => run_search(&corpus, &query, limit, json, config.as_deref()),
        Commands::Serve { corpus, config } => run_serve(&corpus, config.as_deref()),
        Commands::Inspect { corpus } => run_inspect(&corpus),
    };

    if let Err(e) = outcome {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn create_spinner_style() -> ProgressStyle {
    ProgressStyle::with_template("{spinner:.cyan} {prefix:<10} {msg} {elapsed:.dim}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
}

/// Load the corpus behind a spinner. The spinner draws to stderr and hides
/// itself when stderr is not a terminal.
fn load_engine(args: &CorpusArgs, config_path: Option<&Path>) -> Result<QueryEngine, String> {
    let config = match config_path {
        Some(path) => EngineConfig::from_path(path).map_err(|e| e.to_string())?,
        None => EngineConfig::default(),
    };

    let extractor: Box<dyn TextExtractor> = if args.plain_text {
        Box::new(PlainTextExtractor)
    } else {
        Box::new(HtmlExtractor::new())
    };

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(create_spinner_style());
    spinner.set_prefix("Loading");
    spinner.set_message(args.corpus.display().to_string());
    spinner.enable_steady_tick(Duration::from_millis(80));

    let source = JsonLinesCorpus::open(&args.corpus);
    let engine = QueryEngine::load(&source, extractor.as_ref(), config);

    match &engine {
        Ok(engine) => spinner.finish_with_message(format!("indexed {} documents", engine.len())),
        Err(_) => spinner.abandon_with_message("failed"),
    }
    engine.map_err(|e| e.to_string())
}

fn run_search(args: &CorpusArgs, query: &str, limit: usize, json: bool, config: Option<&Path>) -> Result<(), String> {
    let engine = load_engine(args, config)?;
    let response = engine.respond(query);

    if json {
        let rendered = serde_json::to_string_pretty(&response).map_err(|e| e.to_string())?;
        println!("{}", rendered);
        return Ok(());
    }

    match response {
        SearchResponse::Success { data } => {
            cli::display::print_results(query, &data, limit);
            Ok(())
        }
        SearchResponse::Error { error_message } => Err(error_message),
    }
}

/// One query per stdin line, one JSON response per stdout line.
fn run_serve(args: &CorpusArgs, config: Option<&Path>) -> Result<(), String> {
    let engine = load_engine(args, config)?;
    log::info!("serving queries from stdin");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let query = line.map_err(|e| format!("failed to read stdin: {}", e))?;
        let response = engine.respond(&query);
        let rendered = serde_json::to_string(&response).unwrap_or_else(|e| {
            serde_json::json!({ "type": "error", "errorMessage": e.to_string() }).to_string()
        });
        writeln!(stdout, "{}", rendered).map_err(|e| format!("failed to write response: {}", e))?;
        stdout.flush().map_err(|e| format!("failed to write response: {}", e))?;
    }
    Ok(())
}

fn run_inspect(args: &CorpusArgs) -> Result<(), String> {
    let engine = load_engine(args, None)?;
    cli::display::print_inspect(
        &args.corpus.display().to_string(),
        &engine.index_stats(),
        &engine.metrics(),
    );
    Ok(())
}
