//! Candidate aggregation and final ranking.
//!
//! Scored (English word, French headword) pairs stream in from the
//! scorer; the [`Aggregator`] keeps the best score per pair in
//! first-seen order, then [`Aggregator::finish`] applies the junk
//! filter and the vulgarity gate, sorts each list by descending score
//! with a stable tie-break on arrival order, and truncates to
//! [`RESULT_WIDTH`] results.

use std::collections::{BTreeMap, HashMap};

use crate::classify::WordTraits;
use crate::word_lists::VULGAR_ENGLISH;

/// Maximum number of French results kept per English word.
pub const RESULT_WIDTH: usize = 10;

/// Candidates for one English word, in first-seen order with the best
/// score per French headword.
#[derive(Debug, Default)]
struct CandidateList {
    order: Vec<String>,
    best: HashMap<String, i32>,
}

impl CandidateList {
    fn record(&mut self, fr_word: &str, score: i32) {
        match self.best.get_mut(fr_word) {
            Some(best) => {
                if score > *best {
                    *best = score;
                }
            }
            None => {
                self.order.push(fr_word.to_string());
                self.best.insert(fr_word.to_string(), score);
            }
        }
    }
}

/// Collects scored pairs and produces the ranked reverse map.
#[derive(Debug, Default)]
pub struct Aggregator {
    candidates: BTreeMap<String, CandidateList>,
}

/// English keys that are noise rather than vocabulary: overlong
/// concatenations and URL or file-name fragments.
fn is_junk_keyword(word: &str) -> bool {
    word.len() > 30 || word.contains("www") || word.contains("pdf") || word.contains("http")
}

impl Aggregator {
    /// Record one scored candidate pair.
    pub fn record(&mut self, index_word: &str, fr_word: &str, score: i32) {
        self.candidates
            .entry(index_word.to_string())
            .or_default()
            .record(fr_word, score);
    }

    /// Number of distinct English words recorded so far.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Rank and filter every candidate list.
    ///
    /// Vulgar French results are dropped unless the English word is
    /// itself vulgar. Words whose lists end up empty are omitted.
    pub fn finish(self, traits: &WordTraits) -> BTreeMap<String, Vec<String>> {
        let mut index = BTreeMap::new();
        for (en_word, list) in self.candidates {
            if is_junk_keyword(&en_word) {
                continue;
            }
            let gate_vulgar = !VULGAR_ENGLISH.contains(en_word.as_str());

            let mut ranked: Vec<(String, i32)> = list
                .order
                .into_iter()
                .filter(|fr| !(gate_vulgar && traits.is_vulgar(fr)))
                .map(|fr| {
                    let score = list.best[&fr];
                    (fr, score)
                })
                .collect();
            // Stable sort keeps arrival order among equal scores.
            ranked.sort_by(|a, b| b.1.cmp(&a.1));
            ranked.truncate(RESULT_WIDTH);

            if !ranked.is_empty() {
                index.insert(en_word, ranked.into_iter().map(|(fr, _)| fr).collect());
            }
        }
        index
    }
}
