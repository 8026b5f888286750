//! Index command — builds the English reverse lookup index.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use revlex_core::config::Config;
use revlex_core::{FrequencyTable, Lexicon, ReverseIndex, index};

use super::{artifact_path, ensure_parent_dir, frequency_path};

/// English words shown as a sanity sample after a build.
const SAMPLE_WORDS: &[&str] = &["speak", "eat", "house", "beautiful", "love"];

/// Arguments for the `index` subcommand.
#[derive(Args, Debug)]
pub struct IndexArgs {
    /// Language code (default: configured language).
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Source dictionary (default: `<data_dir>/<lang>-dict.json.gz`).
    #[arg(short, long)]
    pub dictionary: Option<Utf8PathBuf>,

    /// Frequency list, one word per line, rank order.
    #[arg(short, long)]
    pub frequency: Option<Utf8PathBuf>,

    /// Output file (default: `<data_dir>/en-<lang>.json.gz`).
    #[arg(short, long)]
    pub output: Option<Utf8PathBuf>,
}

#[derive(Serialize)]
struct IndexReport {
    lang: String,
    entry_count: usize,
    output: Utf8PathBuf,
}

/// Build the English → target-language reverse index.
#[instrument(name = "cmd_index", skip_all)]
pub fn cmd_index(args: IndexArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let lang = args.lang.unwrap_or_else(|| config.language.clone());
    let dictionary = artifact_path(args.dictionary, config, &format!("{lang}-dict.json.gz"));
    let frequency = frequency_path(args.frequency, config, &lang);
    let output = artifact_path(args.output, config, &format!("en-{lang}.json.gz"));
    debug!(lang = %lang, dictionary = %dictionary, frequency = %frequency, "executing index command");

    let lexicon = Lexicon::load(&dictionary)
        .with_context(|| format!("failed to load dictionary from {dictionary}"))?;
    let freq = FrequencyTable::load(&frequency)
        .with_context(|| format!("failed to load frequency list from {frequency}"))?;

    let index = index::build(&lexicon, &freq);
    ensure_parent_dir(&output)?;
    index
        .save(&output)
        .with_context(|| format!("failed to write index to {output}"))?;

    if global_json {
        let report = IndexReport {
            lang,
            entry_count: index.len(),
            output,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} English entries written to {}",
        "built".green(),
        index.len(),
        output,
    );
    print_samples(&index);

    Ok(())
}

fn print_samples(index: &ReverseIndex) {
    for word in SAMPLE_WORDS {
        match index.lookup(word) {
            Some(results) => {
                let shown: Vec<&str> = results.iter().take(5).map(String::as_str).collect();
                println!("  {:<12} {}", word.cyan(), shown.join(", "));
            }
            None => println!("  {:<12} {}", word.cyan(), "(no results)".dimmed()),
        }
    }
}
