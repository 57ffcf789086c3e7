//! Entry point for the passage segmentation CLI.
//!
//! Responsibilities here are intentionally minimal:
//! - Parse command-line arguments (book, chapter, optional input file).
//! - Load configuration from `conf/versicle.toml`.
//! - Read the raw passage text from the file or stdin, standing in for the
//!   upstream fetch layer.
//! - Segment it and print the resulting JSON payload to stdout.

use anyhow::{Context, Result, anyhow};
use std::env;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*, reload};
use versicle::{Passage, PassageRequest, PassageSegmenter, load_config};

type ReloadHandle = reload::Handle<EnvFilter, tracing_subscriber::Registry>;

fn main() {
    let reload_handle = init_tracing();
    if let Err(err) = run(&reload_handle) {
        error!("{err:?}");
        std::process::exit(1);
    }
}

fn run(reload_handle: &ReloadHandle) -> Result<()> {
    let args = parse_args()?;
    let config = load_config(Path::new("conf/versicle.toml"));
    set_log_level(reload_handle, config.log_level.as_filter_str());

    let request = PassageRequest::new(&args.book, args.chapter)?;
    let raw = read_passage(args.input.as_deref())?;
    info!(
        reference = %request.reference(),
        chars = raw.len(),
        "Segmenting passage text"
    );

    let segmenter = PassageSegmenter::new(config);
    let verses = segmenter.segment_passage(&request, &raw)?;
    info!(verses = verses.len(), "Segmented passage");

    let payload = Passage {
        reference: request.reference(),
        attribution: None,
        verses,
    };
    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

struct Args {
    book: String,
    chapter: u32,
    input: Option<PathBuf>,
}

fn parse_args() -> Result<Args> {
    let mut args = env::args().skip(1);
    let book = args.next().ok_or_else(usage)?;
    let chapter = args.next().ok_or_else(usage)?;
    let chapter = chapter
        .parse()
        .with_context(|| format!("Chapter must be a number, got {chapter:?}"))?;
    let input = args.next().map(PathBuf::from);

    if let Some(path) = &input {
        if !path.exists() {
            return Err(anyhow!("File not found: {}", path.display()));
        }
    }

    Ok(Args {
        book,
        chapter,
        input,
    })
}

fn usage() -> anyhow::Error {
    anyhow!("Usage: versicle <book> <chapter> [passage-file]")
}

/// Read the raw passage from the given file, or from stdin when the caller
/// pipes it in.
fn read_passage(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read passage text from stdin")?;
            Ok(buffer)
        }
    }
}

fn init_tracing() -> ReloadHandle {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter_layer, handle) = reload::Layer::new(env_filter);
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .with_filter(filter_layer),
        )
        .init();
    handle
}

fn set_log_level(handle: &ReloadHandle, level: &str) {
    let parsed = EnvFilter::builder()
        .parse(level)
        .unwrap_or_else(|_| EnvFilter::new("info"));
    if let Err(err) = handle.modify(|filter| *filter = parsed) {
        tracing::warn!(%level, "Failed to update log level from config: {err}");
    }
}
