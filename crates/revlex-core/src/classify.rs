//! Vulgarity and dominant part-of-speech classification.
//!
//! One pass over the lexicon derives two facts per headword that the
//! scorer and ranker consult later: whether the word carries vulgar
//! tagging anywhere, and which part of speech dominates its entries.

use std::collections::{BTreeMap, HashMap, HashSet};

use crate::lexicon::Lexicon;
use crate::word_lists::VULGAR_TAGS;

/// Per-headword traits derived from the lexicon.
#[derive(Debug, Clone, Default)]
pub struct WordTraits {
    /// Headwords with a vulgar/offensive tag on any entry or sense.
    pub vulgar: HashSet<String>,
    /// Headword → its dominant part of speech, where one exists.
    pub dominant_pos: HashMap<String, String>,
}

impl WordTraits {
    /// Whether `headword` carries vulgar tagging.
    pub fn is_vulgar(&self, headword: &str) -> bool {
        self.vulgar.contains(headword)
    }

    /// The dominant POS of `headword`, if unambiguous.
    pub fn dominant_pos(&self, headword: &str) -> Option<&str> {
        self.dominant_pos.get(headword).map(String::as_str)
    }
}

/// Classify every headword in one pass.
///
/// Dominance rule: count entries per POS; the POS with the highest
/// count is dominant only when that count strictly exceeds every other
/// POS's count, or when the headword has a single POS overall. Ties
/// record nothing. This lets the scorer penalize a minor sense of a
/// word that is overwhelmingly used as a different part of speech
/// (e.g. the noun sense of "sortir").
#[tracing::instrument(skip_all, fields(words = lexicon.words.len()))]
pub fn classify(lexicon: &Lexicon) -> WordTraits {
    let mut traits = WordTraits::default();

    for (headword, entries) in &lexicon.words {
        let mut pos_counts: BTreeMap<&str, usize> = BTreeMap::new();
        let mut is_vulgar = false;

        for entry in entries {
            *pos_counts.entry(entry.pos.as_str()).or_insert(0) += 1;
            if !is_vulgar {
                is_vulgar = entry
                    .tags
                    .iter()
                    .chain(entry.senses.iter().flat_map(|s| s.tags.iter()))
                    .any(|t| VULGAR_TAGS.contains(t.as_str()));
            }
        }

        if is_vulgar {
            traits.vulgar.insert(headword.clone());
        }

        if let Some((&best_pos, &best_count)) = pos_counts.iter().max_by_key(|&(_, &count)| count) {
            let unambiguous = pos_counts.len() == 1
                || pos_counts
                    .iter()
                    .all(|(&pos, &count)| pos == best_pos || count < best_count);
            if unambiguous {
                traits
                    .dominant_pos
                    .insert(headword.clone(), best_pos.to_string());
            }
        }
    }

    tracing::info!(
        vulgar = traits.vulgar.len(),
        dominant = traits.dominant_pos.len(),
        "lexicon classified"
    );
    traits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{Sense, WordEntry};

    fn entry(pos: &str, glosses_and_tags: &[(&str, &[&str])]) -> WordEntry {
        WordEntry {
            pos: pos.to_string(),
            senses: glosses_and_tags
                .iter()
                .map(|(gloss, tags)| Sense {
                    gloss: (*gloss).to_string(),
                    tags: tags.iter().map(|t| (*t).to_string()).collect(),
                    ..Default::default()
                })
                .collect(),
            ..Default::default()
        }
    }

    fn lexicon(words: Vec<(&str, Vec<WordEntry>)>) -> Lexicon {
        Lexicon {
            words: words
                .into_iter()
                .map(|(w, e)| (w.to_string(), e))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn vulgar_tag_on_sense_marks_headword() {
        let lex = lexicon(vec![
            ("putain", vec![entry("noun", &[("whore", &["vulgar"])])]),
            ("vache", vec![entry("noun", &[("cow", &[])])]),
        ]);
        let traits = classify(&lex);
        assert!(traits.is_vulgar("putain"));
        assert!(!traits.is_vulgar("vache"));
    }

    #[test]
    fn derogatory_alone_is_not_vulgar() {
        let lex = lexicon(vec![(
            "bled",
            vec![entry("noun", &[("village", &["derogatory"])])],
        )]);
        assert!(!classify(&lex).is_vulgar("bled"));
    }

    #[test]
    fn plurality_picks_dominant_pos() {
        let lex = lexicon(vec![(
            "sortir",
            vec![
                entry("verb", &[("to go out", &[])]),
                entry("verb", &[("to take out", &[])]),
                entry("noun", &[("exit", &[])]),
            ],
        )]);
        assert_eq!(classify(&lex).dominant_pos("sortir"), Some("verb"));
    }

    #[test]
    fn single_pos_is_dominant() {
        let lex = lexicon(vec![("chat", vec![entry("noun", &[("cat", &[])])])]);
        assert_eq!(classify(&lex).dominant_pos("chat"), Some("noun"));
    }

    #[test]
    fn tied_pos_counts_record_nothing() {
        let lex = lexicon(vec![(
            "ferme",
            vec![
                entry("noun", &[("farm", &[])]),
                entry("adj", &[("firm", &[])]),
            ],
        )]);
        assert_eq!(classify(&lex).dominant_pos("ferme"), None);
    }
}
