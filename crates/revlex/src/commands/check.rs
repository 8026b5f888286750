//! Check command — quality validation of a built index.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use revlex_core::config::Config;
use revlex_core::{FrequencyTable, ReverseIndex, quality};

use super::{artifact_path, frequency_path};

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Language code (default: configured language).
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Index to check (default: `<data_dir>/en-<lang>.json.gz`).
    #[arg(short, long)]
    pub index: Option<Utf8PathBuf>,

    /// Frequency list, one word per line, rank order.
    #[arg(short, long)]
    pub frequency: Option<Utf8PathBuf>,
}

/// Run the quality checks and exit non-zero when any fail.
#[instrument(name = "cmd_check", skip_all)]
pub fn cmd_check(args: CheckArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let lang = args.lang.unwrap_or_else(|| config.language.clone());
    let index_path = artifact_path(args.index, config, &format!("en-{lang}.json.gz"));
    let frequency = frequency_path(args.frequency, config, &lang);
    debug!(lang = %lang, index = %index_path, "executing check command");

    let index = ReverseIndex::load(&index_path)
        .with_context(|| format!("failed to load index from {index_path}"))?;
    let freq = FrequencyTable::load(&frequency)
        .with_context(|| format!("failed to load frequency list from {frequency}"))?;

    let report = quality::run_checks(&index, &freq);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        if !report.passed {
            bail!("quality checks failed");
        }
        return Ok(());
    }

    println!("{} entries in {}", report.entries, index_path);
    for check in &report.checks {
        let status = if check.ok() {
            format!("{}", "PASS".green())
        } else {
            format!("{}", "FAIL".red())
        };
        println!("{status} {:<28} {}/{}", check.name, check.passed, check.total);
        for failure in check.failures.iter().take(5) {
            println!("       {}", failure.dimmed());
        }
        if check.failures.len() > 5 {
            println!("       {}", format!("... and {} more", check.failures.len() - 5).dimmed());
        }
    }

    if !report.passed {
        bail!("quality checks failed");
    }
    println!("{}", "all checks passed".green());
    Ok(())
}
