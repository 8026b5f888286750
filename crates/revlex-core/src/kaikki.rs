//! Raw wiktextract dump handling.
//!
//! The upstream dump is one JSON object per line covering every
//! language at once. This module carries tolerant serde models for the
//! fields the pipeline consumes and the per-language line filter that
//! produces a single-language JSONL file. Unknown fields are ignored
//! everywhere; a line that fails to parse is skipped, never fatal.

use std::collections::BTreeMap;
use std::io::Write;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::{BuildError, BuildResult};
use crate::storage;

/// Well-known language codes and their English names, used to match
/// entries that carry a `lang` name but no `lang_code`.
static LANGUAGES: &[(&str, &str)] = &[
    ("fr", "French"),
    ("es", "Spanish"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("nl", "Dutch"),
    ("ru", "Russian"),
    ("ja", "Japanese"),
    ("zh", "Chinese"),
    ("ko", "Korean"),
    ("ar", "Arabic"),
    ("hi", "Hindi"),
    ("sv", "Swedish"),
    ("pl", "Polish"),
    ("la", "Latin"),
    ("grc", "Ancient Greek"),
    ("en", "English"),
];

/// The English name for a language code, when it is a known one.
pub fn language_name(code: &str) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
}

/// A usage example on a raw sense. The dump uses either `english` or
/// `translation` for the English rendering depending on extractor
/// version.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawExample {
    /// Example text in the entry's language.
    pub text: Option<String>,
    /// English translation (newer dumps).
    pub english: Option<String>,
    /// English translation (older dumps).
    pub translation: Option<String>,
}

impl RawExample {
    /// The English rendering, whichever field carries it.
    pub fn english_text(&self) -> Option<&str> {
        self.english.as_deref().or(self.translation.as_deref())
    }
}

/// A raw sense: gloss lines plus tags and examples.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSense {
    /// Definition lines, most specific last in nested glosses.
    pub glosses: Vec<String>,
    /// Usage tags.
    pub tags: Vec<String>,
    /// Usage examples.
    pub examples: Vec<RawExample>,
}

impl RawSense {
    /// The primary gloss line, if any.
    pub fn primary_gloss(&self) -> Option<&str> {
        self.glosses.first().map(String::as_str)
    }
}

/// A pronunciation or audio record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawSound {
    /// IPA transcription.
    pub ipa: Option<String>,
    /// URL of an mp3 recording.
    pub mp3_url: Option<String>,
}

/// An inflected form record.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawForm {
    /// The surface form.
    pub form: Option<String>,
    /// Inflection tags, including table metadata markers.
    pub tags: Vec<String>,
    /// IPA of the form.
    pub ipa: Option<String>,
}

/// One line of the raw dump, reduced to the fields the pipeline reads.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RawEntry {
    /// The headword.
    pub word: Option<String>,
    /// Part of speech.
    pub pos: Option<String>,
    /// Language name ("French").
    pub lang: Option<String>,
    /// Language code ("fr").
    pub lang_code: Option<String>,
    /// Entry-level tags.
    pub tags: Vec<String>,
    /// Senses in dictionary order.
    pub senses: Vec<RawSense>,
    /// Pronunciation and audio records.
    pub sounds: Vec<RawSound>,
    /// Etymology prose.
    pub etymology_text: Option<String>,
    /// Inflected forms.
    pub forms: Vec<RawForm>,
    /// Wiki category names.
    pub categories: Vec<String>,
}

/// Summary of one language-filter run.
#[derive(Debug, Default, Serialize)]
pub struct ExtractStats {
    /// Entries written to the output.
    pub count: usize,
    /// Entry counts per part of speech.
    pub pos_counts: BTreeMap<String, usize>,
}

/// Copy the raw dump lines belonging to one language into `output`.
///
/// Matches on `lang_code` first and falls back to the language name.
/// Matched lines are passed through verbatim so no information is lost
/// before the database stage. Unparseable lines are skipped.
#[tracing::instrument(skip_all, fields(lang = lang_code, input = %input, output = %output))]
pub fn extract_language(
    input: &Utf8Path,
    output: &Utf8Path,
    lang_code: &str,
) -> BuildResult<ExtractStats> {
    let lang_name = language_name(lang_code).unwrap_or(lang_code);
    let reader = storage::open_lines(input)?;
    let mut writer = storage::create_writer(output)?;
    let mut stats = ExtractStats::default();

    for line in std::io::BufRead::lines(reader) {
        let line = line.map_err(|source| BuildError::ReadInput {
            path: input.to_path_buf(),
            source,
        })?;
        let Ok(entry) = serde_json::from_str::<RawEntry>(&line) else {
            continue;
        };
        let matches = entry.lang_code.as_deref() == Some(lang_code)
            || entry.lang.as_deref() == Some(lang_name);
        if !matches {
            continue;
        }

        writeln!(writer, "{line}").map_err(|source| BuildError::WriteOutput {
            path: output.to_path_buf(),
            source,
        })?;
        stats.count += 1;
        let pos = entry.pos.unwrap_or_else(|| "unknown".to_string());
        *stats.pos_counts.entry(pos).or_insert(0) += 1;

        if stats.count % 50_000 == 0 {
            tracing::debug!(count = stats.count, "extracting");
        }
    }

    writer.flush().map_err(|source| BuildError::WriteOutput {
        path: output.to_path_buf(),
        source,
    })?;
    tracing::info!(count = stats.count, "language extracted");
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn temp_path(dir: &tempfile::TempDir, name: &str) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(dir.path().join(name)).unwrap()
    }

    #[test]
    fn filters_by_lang_code_or_name() {
        let dir = tempfile::tempdir().unwrap();
        let input = temp_path(&dir, "raw.jsonl");
        let output = temp_path(&dir, "fr.jsonl");
        std::fs::write(
            &input,
            concat!(
                r#"{"word":"chat","lang_code":"fr","pos":"noun"}"#,
                "\n",
                r#"{"word":"cat","lang_code":"en","pos":"noun"}"#,
                "\n",
                r#"{"word":"chien","lang":"French","pos":"noun"}"#,
                "\n",
                "not json\n",
            ),
        )
        .unwrap();

        let stats = extract_language(&input, &output, "fr").unwrap();
        assert_eq!(stats.count, 2);
        assert_eq!(stats.pos_counts["noun"], 2);

        let out = std::fs::read_to_string(&output).unwrap();
        assert!(out.contains("chat"));
        assert!(out.contains("chien"));
        assert!(!out.contains("\"cat\""));
    }

    #[test]
    fn matched_lines_pass_through_verbatim() {
        let dir = tempfile::tempdir().unwrap();
        let input = temp_path(&dir, "raw.jsonl");
        let output = temp_path(&dir, "fr.jsonl");
        let line = r#"{"word":"chat","lang_code":"fr","unmodelled_field":{"deep":[1,2]}}"#;
        std::fs::write(&input, format!("{line}\n")).unwrap();

        extract_language(&input, &output, "fr").unwrap();
        assert_eq!(std::fs::read_to_string(&output).unwrap(), format!("{line}\n"));
    }

    #[test]
    fn gzipped_input_is_accepted() {
        use flate2::Compression;
        use flate2::write::GzEncoder;
        use std::io::Write as _;

        let dir = tempfile::tempdir().unwrap();
        let input = temp_path(&dir, "raw.jsonl.gz");
        let output = temp_path(&dir, "fr.jsonl");
        let mut enc = GzEncoder::new(
            std::fs::File::create(&input).unwrap(),
            Compression::default(),
        );
        writeln!(enc, r#"{{"word":"chat","lang_code":"fr"}}"#).unwrap();
        enc.finish().unwrap();

        let stats = extract_language(&input, &output, "fr").unwrap();
        assert_eq!(stats.count, 1);
    }

    #[test]
    fn example_english_falls_back_to_translation() {
        let ex: RawExample =
            serde_json::from_str(r#"{"text":"le chat dort","translation":"the cat sleeps"}"#)
                .unwrap();
        assert_eq!(ex.english_text(), Some("the cat sleeps"));
    }
}
