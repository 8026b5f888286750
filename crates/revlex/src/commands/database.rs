//! Database command — builds the flat dictionary from extracted JSONL.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use revlex_core::config::Config;
use revlex_core::database;

use super::{artifact_path, ensure_parent_dir};

/// Arguments for the `database` subcommand.
#[derive(Args, Debug)]
pub struct DatabaseArgs {
    /// Language code (default: configured language).
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Extracted single-language JSONL (default: `<data_dir>/<lang>.jsonl`).
    #[arg(short, long)]
    pub input: Option<Utf8PathBuf>,

    /// Output file (default: `<data_dir>/<lang>-dict.json.gz`).
    #[arg(short, long)]
    pub output: Option<Utf8PathBuf>,
}

#[derive(Serialize)]
struct DatabaseReport {
    lang: String,
    entry_count: usize,
    word_count: usize,
    output: Utf8PathBuf,
}

/// Build the simplified dictionary from a single-language dump.
#[instrument(name = "cmd_database", skip_all)]
pub fn cmd_database(args: DatabaseArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let lang = args.lang.unwrap_or_else(|| config.language.clone());
    let input = artifact_path(args.input, config, &format!("{lang}.jsonl"));
    let output = artifact_path(args.output, config, &format!("{lang}-dict.json.gz"));
    debug!(lang = %lang, input = %input, output = %output, "executing database command");

    let lexicon = database::build_lexicon(&input, &lang)
        .with_context(|| format!("failed to build dictionary from {input}"))?;
    ensure_parent_dir(&output)?;
    lexicon
        .save(&output)
        .with_context(|| format!("failed to write dictionary to {output}"))?;

    if global_json {
        let report = DatabaseReport {
            lang,
            entry_count: lexicon.entry_count,
            word_count: lexicon.word_count,
            output,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} headwords ({} entries) written to {}",
        "built".green(),
        lexicon.word_count,
        lexicon.entry_count,
        output,
    );

    Ok(())
}
