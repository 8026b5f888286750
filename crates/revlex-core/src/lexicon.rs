//! Flat dictionary data model.
//!
//! A [`Lexicon`] maps lowercase headwords to their dictionary entries:
//! one [`WordEntry`] per part of speech, each carrying an ordered list
//! of [`Sense`]s. Sense order is meaningful — index 0 is the primary
//! meaning, and the scorer decays later senses.

use std::collections::BTreeMap;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::BuildResult;
use crate::storage;

/// A usage example attached to a sense.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Example {
    /// The example text in the source language.
    pub text: String,
    /// English translation of the example, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
}

/// One meaning of a headword: a free-text English gloss plus tags.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Sense {
    /// The English-language definition text.
    pub gloss: String,
    /// Category/usage tags (vulgar, slang, figurative, ...).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Usage examples (at most two are kept by the database builder).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
}

/// An inflected form of a headword.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Form {
    /// The inflected surface form.
    pub form: String,
    /// Inflection tags (tense, person, number, ...).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// IPA pronunciation of this form, when available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipa: Option<String>,
}

/// A dictionary entry: one part of speech of a headword.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct WordEntry {
    /// Part-of-speech tag (verb, noun, adj, intj, name, ...).
    pub pos: String,
    /// Entry-level tags.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// Senses in dictionary order; index 0 is the primary meaning.
    pub senses: Vec<Sense>,
    /// IPA pronunciation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipa: Option<String>,
    /// Audio recording URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    /// Etymology text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etymology: Option<String>,
    /// Inflected forms (verbs, adjectives, nouns).
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub forms: Vec<Form>,
    /// Grammatical gender for nouns (`m` or `f`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Auxiliary verb for compound tenses (`être` when not `avoir`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aux: Option<String>,
    /// Marks irregular verbs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub irregular: Option<bool>,
}

/// The flat per-word dictionary database.
///
/// Headwords are lowercase. `BTreeMap` keeps iteration (and therefore
/// every downstream build) deterministic.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Lexicon {
    /// Language code of the headwords (e.g. `fr`).
    pub lang: String,
    /// Schema version string.
    pub version: String,
    /// Total number of entries across all headwords.
    pub entry_count: usize,
    /// Number of distinct headwords.
    pub word_count: usize,
    /// Headword → entries, one per part of speech occurrence.
    pub words: BTreeMap<String, Vec<WordEntry>>,
}

impl Lexicon {
    /// Load a lexicon from a JSON file (`.gz` handled transparently).
    #[tracing::instrument(skip_all, fields(path = %path))]
    pub fn load(path: &Utf8Path) -> BuildResult<Self> {
        let lexicon: Self = storage::read_json(path)?;
        tracing::info!(
            words = lexicon.words.len(),
            entries = lexicon.entry_count,
            "lexicon loaded"
        );
        Ok(lexicon)
    }

    /// Write the lexicon as compact JSON (`.gz` handled transparently).
    pub fn save(&self, path: &Utf8Path) -> BuildResult<()> {
        storage::write_json(path, self)
    }

    /// Iterate over all (headword, entry) pairs in deterministic order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &WordEntry)> {
        self.words
            .iter()
            .flat_map(|(word, entries)| entries.iter().map(move |e| (word.as_str(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn sense(gloss: &str) -> Sense {
        Sense {
            gloss: gloss.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn roundtrip_preserves_sense_order() {
        let mut lexicon = Lexicon {
            lang: "fr".to_string(),
            version: "1.0".to_string(),
            ..Default::default()
        };
        lexicon.words.insert(
            "voir".to_string(),
            vec![WordEntry {
                pos: "verb".to_string(),
                senses: vec![sense("to see"), sense("to witness")],
                ..Default::default()
            }],
        );
        lexicon.entry_count = 1;
        lexicon.word_count = 1;

        let dir = tempfile::tempdir().unwrap();
        let path = camino::Utf8PathBuf::from_path_buf(dir.path().join("lex.json.gz")).unwrap();
        lexicon.save(&path).unwrap();
        let back = Lexicon::load(&path).unwrap();
        assert_eq!(back, lexicon);
        assert_eq!(back.words["voir"][0].senses[0].gloss, "to see");
    }

    #[test]
    fn entries_iterates_in_headword_order() {
        let mut lexicon = Lexicon::default();
        for word in ["zèbre", "abeille", "mouton"] {
            lexicon.words.insert(
                word.to_string(),
                vec![WordEntry {
                    pos: "noun".to_string(),
                    ..Default::default()
                }],
            );
        }
        let order: Vec<&str> = lexicon.entries().map(|(w, _)| w).collect();
        assert_eq!(order, vec!["abeille", "mouton", "zèbre"]);
    }

    #[test]
    fn unknown_fields_are_tolerated() {
        let json = r#"{"lang":"fr","words":{"chat":[{"pos":"noun","senses":[{"gloss":"cat","extra":1}]}]},"bogus":true}"#;
        let lexicon: Lexicon = serde_json::from_str(json).unwrap();
        assert_eq!(lexicon.words["chat"][0].senses[0].gloss, "cat");
    }
}
