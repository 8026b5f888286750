//! Quality validation for a built reverse index.
//!
//! These checks target genuinely bad output (noise words indexed,
//! junk results, missing coverage of everyday vocabulary) rather than
//! exact expected lists, which are subjective. Each check reports a
//! passed/total count plus human-readable failure lines.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::frequency::FrequencyTable;
use crate::index::ReverseIndex;
use crate::word_lists::VALID_SINGLE_CHARS;

/// Result of one quality check.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CheckReport {
    /// Check identifier.
    pub name: String,
    /// Cases that passed.
    pub passed: usize,
    /// Cases examined.
    pub total: usize,
    /// One line per failing case.
    pub failures: Vec<String>,
}

impl CheckReport {
    fn new(name: &str, total: usize, failures: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: total - failures.len(),
            total,
            failures,
        }
    }

    /// Whether every case passed.
    pub fn ok(&self) -> bool {
        self.passed == self.total
    }
}

/// Aggregated result of all quality checks.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct QualityReport {
    /// Number of English words in the index under test.
    pub entries: usize,
    /// Individual check results.
    pub checks: Vec<CheckReport>,
    /// Whether every check passed.
    pub passed: bool,
}

/// English function words that must never be indexed.
const NOISE_WORDS: &[&str] = &[
    "did", "does", "has", "is", "are", "was", "were", "whether", "usually", "often", "especially",
    "particularly",
];

/// Conjugated auxiliaries that appear in descriptive gloss text and
/// must be filtered out.
const CONJUGATED_FORMS: &[&str] = &["does", "has", "did", "was", "were"];

/// Base verbs with the translation expected in their top three.
const EXPECTED_VERBS: &[(&str, &str)] = &[
    ("do", "faire"),
    ("be", "être"),
    ("have", "avoir"),
    ("go", "aller"),
    ("come", "venir"),
    ("see", "voir"),
    ("know", "savoir"),
    ("make", "faire"),
    ("say", "dire"),
    ("take", "prendre"),
    ("give", "donner"),
    ("get", "obtenir"),
];

/// Everyday vocabulary that must have at least one result.
const COMMON_WORDS: &str = "hello goodbye yes no please thank sorry good bad big small new old \
    beautiful ugly hot cold fast slow easy hard happy sad man woman child \
    mother father brother sister family friend house room door window table \
    chair bed book water food bread milk coffee tea car bus train plane boat \
    road street city country school hospital money work time day night week \
    month year sun moon star rain fire speak eat drink sleep run walk talk \
    see hear think know want love help give take make go find lose win buy \
    sell open close start stop read write learn teach ask answer";

/// Everyday vocabulary whose top result must look common.
const QUALITY_WORDS: &str = "hello goodbye good bad big small new old beautiful hot cold fast slow \
    easy hard happy sad man woman child house room door window table chair \
    water food bread car train city country school money work time day night \
    sun moon fire speak eat drink sleep run walk see hear think know want \
    love help give take make go find buy open close start stop read write";

fn top(index: &ReverseIndex, word: &str, n: usize) -> Vec<String> {
    index
        .lookup(word)
        .unwrap_or_default()
        .iter()
        .take(n)
        .cloned()
        .collect()
}

fn noise_words_removed(index: &ReverseIndex) -> CheckReport {
    let failures = NOISE_WORDS
        .iter()
        .filter(|word| index.lookup(word).is_some())
        .map(|word| format!("{word}: should be filtered, got {:?}", top(index, word, 3)))
        .collect();
    CheckReport::new("noise_words_removed", NOISE_WORDS.len(), failures)
}

fn base_verbs_work(index: &ReverseIndex) -> CheckReport {
    let mut failures = Vec::new();
    for (en, fr) in EXPECTED_VERBS {
        match index.lookup(en) {
            None => failures.push(format!("{en}: no results")),
            Some(results) if !results.iter().take(3).any(|r| r == fr) => {
                failures.push(format!(
                    "{en}: expected '{fr}' in top 3, got {:?}",
                    top(index, en, 3)
                ));
            }
            Some(_) => {}
        }
    }
    CheckReport::new("base_verbs_work", EXPECTED_VERBS.len(), failures)
}

fn common_words_have_results(index: &ReverseIndex) -> CheckReport {
    let words: Vec<&str> = COMMON_WORDS.split_whitespace().collect();
    let failures = words
        .iter()
        .filter(|word| index.lookup(word).is_none_or(<[String]>::is_empty))
        .map(|word| format!("{word}: no results"))
        .collect();
    CheckReport::new("common_words_have_results", words.len(), failures)
}

fn top_result_quality(index: &ReverseIndex, freq: &FrequencyTable) -> CheckReport {
    let words: Vec<&str> = QUALITY_WORDS.split_whitespace().collect();
    let mut failures = Vec::new();
    for word in &words {
        let Some(results) = index.lookup(word).filter(|r| !r.is_empty()) else {
            continue;
        };
        let top1 = &results[0];
        let is_ok = freq.contains(top1)
            || top1.split_whitespace().any(|part| freq.contains(part))
            || top1.to_lowercase() == word.to_lowercase();
        let common_in_top3 = results.iter().take(3).any(|r| freq.contains(r));
        if !is_ok && !common_in_top3 {
            failures.push(format!(
                "{word}: top result '{top1}' is rare, no common in top 3: {:?}",
                top(index, word, 3)
            ));
        }
    }
    CheckReport::new("top_result_quality", words.len(), failures)
}

fn conjugated_forms_filtered(index: &ReverseIndex) -> CheckReport {
    let failures = CONJUGATED_FORMS
        .iter()
        .filter(|word| index.lookup(word).is_some_and(|r| !r.is_empty()))
        .map(|word| format!("{word}: should be filtered, got {:?}", top(index, word, 3)))
        .collect();
    CheckReport::new("conjugated_forms_filtered", CONJUGATED_FORMS.len(), failures)
}

fn no_junk_entries(index: &ReverseIndex, freq: &FrequencyTable) -> CheckReport {
    let mut failures = Vec::new();
    let mut checked = 0usize;
    for (en_word, results) in index.entries.iter().take(1000) {
        let Some(top1) = results.first() else {
            continue;
        };
        checked += 1;
        let single_char = top1.chars().count() == 1;
        if single_char && !VALID_SINGLE_CHARS.contains(top1.as_str()) && !freq.contains(top1) {
            failures.push(format!("{en_word}: single char result '{top1}'"));
        } else if !top1.is_empty() && top1.chars().all(|c| c.is_ascii_digit()) {
            failures.push(format!("{en_word}: numeric result '{top1}'"));
        }
    }
    CheckReport::new("no_junk_entries", checked, failures)
}

/// Run every quality check against an index.
///
/// The frequency table feeds the commonness heuristics; an empty table
/// makes those checks stricter, not fatal.
#[tracing::instrument(skip_all, fields(entries = index.len()))]
pub fn run_checks(index: &ReverseIndex, freq: &FrequencyTable) -> QualityReport {
    let checks = vec![
        noise_words_removed(index),
        base_verbs_work(index),
        common_words_have_results(index),
        top_result_quality(index, freq),
        conjugated_forms_filtered(index),
        no_junk_entries(index, freq),
    ];
    let passed = checks.iter().all(CheckReport::ok);
    QualityReport {
        entries: index.len(),
        checks,
        passed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn index_of(pairs: &[(&str, &[&str])]) -> ReverseIndex {
        let entries: BTreeMap<String, Vec<String>> = pairs
            .iter()
            .map(|(en, frs)| {
                (
                    (*en).to_string(),
                    frs.iter().map(|f| (*f).to_string()).collect(),
                )
            })
            .collect();
        ReverseIndex { entries }
    }

    #[test]
    fn indexed_noise_word_fails_the_check() {
        let index = index_of(&[("did", &["faire"])]);
        let report = noise_words_removed(&index);
        assert!(!report.ok());
        assert_eq!(report.failures.len(), 1);
    }

    #[test]
    fn clean_index_passes_noise_check() {
        let index = index_of(&[("speak", &["parler"])]);
        assert!(noise_words_removed(&index).ok());
    }

    #[test]
    fn expected_verb_outside_top_three_fails() {
        let index = index_of(&[(
            "go",
            &["marcher", "partir", "filer", "aller"],
        )]);
        let report = base_verbs_work(&index);
        assert!(report.failures.iter().any(|f| f.starts_with("go:")));
    }

    #[test]
    fn expected_verb_in_top_three_passes() {
        let index = index_of(&[("go", &["aller", "partir"])]);
        let report = base_verbs_work(&index);
        assert!(!report.failures.iter().any(|f| f.starts_with("go:")));
    }

    #[test]
    fn rare_top_result_with_no_common_backup_fails() {
        let freq = FrequencyTable::from_ranked(["parler"]);
        let index = index_of(&[("speak", &["jaspiner", "baragouiner"])]);
        let report = top_result_quality(&index, &freq);
        assert!(report.failures.iter().any(|f| f.starts_with("speak:")));
    }

    #[test]
    fn same_surface_top_result_is_accepted() {
        let freq = FrequencyTable::default();
        let index = index_of(&[("table", &["table"])]);
        let report = top_result_quality(&index, &freq);
        assert!(!report.failures.iter().any(|f| f.starts_with("table:")));
    }

    #[test]
    fn junk_single_char_and_numeric_results_fail() {
        let freq = FrequencyTable::from_ranked(["de"]);
        let index = index_of(&[
            ("alpha", &["z"]),
            ("numeric", &["1234"]),
            ("there", &["y"]),
            ("of", &["de"]),
        ]);
        let report = no_junk_entries(&index, &freq);
        assert_eq!(report.total, 4);
        assert_eq!(report.failures.len(), 2);
    }

    #[test]
    fn full_run_aggregates_all_checks() {
        let report = run_checks(&ReverseIndex::default(), &FrequencyTable::default());
        assert_eq!(report.checks.len(), 6);
        assert!(!report.passed);
    }
}
