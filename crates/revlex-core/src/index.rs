//! English → French reverse index construction.
//!
//! Walks every sense of every dictionary entry, extracts English
//! keywords from the gloss, expands synonyms, scores each candidate
//! pair, and aggregates the results into a ranked lookup map. The
//! whole pipeline is deterministic: identical inputs produce
//! byte-identical output.

use std::collections::BTreeMap;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::classify::{self, WordTraits};
use crate::error::BuildResult;
use crate::extract::extract_keywords;
use crate::frequency::FrequencyTable;
use crate::lexicon::Lexicon;
use crate::rank::Aggregator;
use crate::score::{MatchProfile, ScoreInput, SenseContext, score};
use crate::storage;
use crate::synonyms::synonyms_of;

/// Score deducted from candidates reached through synonym expansion.
pub const SYNONYM_PENALTY: i32 = 80;

/// The finished English → French lookup map.
///
/// Keys are extracted English words; values are up to ten French
/// headwords in descending relevance order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReverseIndex {
    /// English word → ranked French headwords.
    pub entries: BTreeMap<String, Vec<String>>,
}

impl ReverseIndex {
    /// The ranked French results for an English word.
    pub fn lookup(&self, word: &str) -> Option<&[String]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// Number of indexed English words.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read an index from a JSON file, gzip-compressed when the path
    /// ends in `.gz`.
    pub fn load(path: &Utf8Path) -> BuildResult<Self> {
        storage::read_json(path)
    }

    /// Write the index as compact JSON, gzip-compressed when the path
    /// ends in `.gz`.
    pub fn save(&self, path: &Utf8Path) -> BuildResult<()> {
        storage::write_json(path, self)
    }
}

/// Headwords that cannot yield useful index entries: phrases longer
/// than two words, and entries carrying slashes or parentheses.
fn skip_headword(fr_word: &str) -> bool {
    fr_word.split_whitespace().count() > 2 || fr_word.contains(['/', '(', ')'])
}

/// Build the reverse index from a lexicon and a frequency table.
///
/// Classification (vulgarity, dominant POS) runs first over the same
/// lexicon; the frequency table may be empty, which simply disables
/// frequency bonuses and loan-word discrimination.
#[tracing::instrument(skip_all, fields(words = lexicon.words.len()))]
pub fn build(lexicon: &Lexicon, frequency: &FrequencyTable) -> ReverseIndex {
    let traits = classify::classify(lexicon);
    build_with_traits(lexicon, frequency, &traits)
}

/// Build the reverse index against precomputed word traits.
pub fn build_with_traits(
    lexicon: &Lexicon,
    frequency: &FrequencyTable,
    traits: &WordTraits,
) -> ReverseIndex {
    let mut aggregator = Aggregator::default();

    for (fr_word, entries) in &lexicon.words {
        if skip_headword(fr_word) {
            continue;
        }
        let frequency_rank = frequency.rank(fr_word);
        let dominant_pos = traits.dominant_pos(fr_word);

        for entry in entries {
            for (sense_idx, sense) in entry.senses.iter().enumerate() {
                if sense.gloss.is_empty() {
                    continue;
                }
                let gloss_lower = sense.gloss.to_lowercase();
                let keywords = extract_keywords(&sense.gloss);
                let sense_ctx = SenseContext::new(
                    fr_word,
                    &entry.pos,
                    sense_idx,
                    &sense.gloss,
                    &gloss_lower,
                    frequency_rank,
                    dominant_pos,
                );

                for (position, keyword) in keywords.iter().enumerate() {
                    let profile = MatchProfile::analyze(&sense_ctx, keyword);
                    let mut candidates = vec![(keyword.as_str(), 0)];
                    if let Some(synonyms) = synonyms_of(keyword) {
                        candidates.extend(synonyms.iter().map(|syn| (*syn, SYNONYM_PENALTY)));
                    }

                    for (index_word, synonym_penalty) in candidates {
                        let value = score(&ScoreInput {
                            sense: &sense_ctx,
                            index_word,
                            synonym_penalty,
                            position,
                            profile: &profile,
                        });
                        aggregator.record(index_word, fr_word, value);
                    }
                }
            }
        }
    }

    let index = ReverseIndex {
        entries: aggregator.finish(traits),
    };
    tracing::info!(entries = index.len(), "reverse index built");
    index
}
