//! Extract command — per-language filter over the raw wiktextract dump.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use revlex_core::config::Config;
use revlex_core::kaikki;

use super::{artifact_path, ensure_parent_dir};

/// Arguments for the `extract` subcommand.
#[derive(Args, Debug)]
pub struct ExtractArgs {
    /// Raw dump file (JSONL, optionally gzipped).
    pub input: Utf8PathBuf,

    /// Language code to keep (default: configured language).
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Output file (default: `<data_dir>/<lang>.jsonl`).
    #[arg(short, long)]
    pub output: Option<Utf8PathBuf>,
}

/// Filter the raw dump down to a single language.
#[instrument(name = "cmd_extract", skip_all, fields(input = %args.input))]
pub fn cmd_extract(args: ExtractArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let lang = args.lang.unwrap_or_else(|| config.language.clone());
    let output = artifact_path(args.output, config, &format!("{lang}.jsonl"));
    debug!(lang = %lang, output = %output, "executing extract command");

    ensure_parent_dir(&output)?;
    let stats = kaikki::extract_language(&args.input, &output, &lang)
        .with_context(|| format!("failed to extract '{lang}' entries from {}", args.input))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    println!(
        "{} {} entries written to {}",
        "extracted".green(),
        stats.count,
        output,
    );
    let mut by_count: Vec<_> = stats.pos_counts.iter().collect();
    by_count.sort_by(|a, b| b.1.cmp(a.1));
    for (pos, count) in by_count.into_iter().take(10) {
        println!("  {:<12} {count}", pos.cyan());
    }

    Ok(())
}
