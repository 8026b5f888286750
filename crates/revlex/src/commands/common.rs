//! Common command — frequency-bounded dictionary and verb forms index.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use revlex_core::FrequencyTable;
use revlex_core::Lexicon;
use revlex_core::common;
use revlex_core::config::Config;

use super::{artifact_path, ensure_parent_dir, frequency_path};

/// Arguments for the `common` subcommand.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Language code (default: configured language).
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Full dictionary (default: `<data_dir>/<lang>-dict.json.gz`).
    #[arg(short, long)]
    pub dictionary: Option<Utf8PathBuf>,

    /// Frequency list, one word per line, rank order.
    #[arg(short, long)]
    pub frequency: Option<Utf8PathBuf>,

    /// Output file (default: `<data_dir>/<lang>-common.json.gz`).
    #[arg(short, long)]
    pub output: Option<Utf8PathBuf>,

    /// Forms index output (default: `<data_dir>/<lang>-common-forms.json.gz`).
    #[arg(long)]
    pub forms_output: Option<Utf8PathBuf>,
}

#[derive(Serialize)]
struct CommonReport {
    lang: String,
    word_count: usize,
    form_count: usize,
    output: Utf8PathBuf,
    forms_output: Utf8PathBuf,
}

/// Build the common-word dictionary and its conjugated-forms index.
#[instrument(name = "cmd_common", skip_all)]
pub fn cmd_common(args: CommonArgs, global_json: bool, config: &Config) -> anyhow::Result<()> {
    let lang = args.lang.unwrap_or_else(|| config.language.clone());
    let dictionary = artifact_path(args.dictionary, config, &format!("{lang}-dict.json.gz"));
    let frequency = frequency_path(args.frequency, config, &lang);
    let output = artifact_path(args.output, config, &format!("{lang}-common.json.gz"));
    let forms_output = artifact_path(
        args.forms_output,
        config,
        &format!("{lang}-common-forms.json.gz"),
    );
    debug!(lang = %lang, dictionary = %dictionary, frequency = %frequency, "executing common command");

    let full = Lexicon::load(&dictionary)
        .with_context(|| format!("failed to load dictionary from {dictionary}"))?;
    let words = FrequencyTable::load_ordered(&frequency)
        .with_context(|| format!("failed to load frequency list from {frequency}"))?;

    let lexicon = common::build_common(&full, &words);
    let forms = common::build_forms_index(&lexicon);

    ensure_parent_dir(&output)?;
    lexicon
        .save(&output)
        .with_context(|| format!("failed to write common dictionary to {output}"))?;
    ensure_parent_dir(&forms_output)?;
    forms
        .save(&forms_output)
        .with_context(|| format!("failed to write forms index to {forms_output}"))?;

    if global_json {
        let report = CommonReport {
            lang,
            word_count: lexicon.word_count,
            form_count: forms.len(),
            output,
            forms_output,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!(
        "{} {} common headwords written to {}",
        "built".green(),
        lexicon.word_count,
        output,
    );
    println!(
        "{} {} conjugated forms written to {}",
        "built".green(),
        forms.len(),
        forms_output,
    );

    Ok(())
}
