//! Common-word sub-dictionary and verb forms index.
//!
//! The full dictionary is far too large to ship to a client, so this
//! stage cuts it down to the words on the frequency list, pulls in the
//! pronominal `s'en <verb>` phrases whose base verb made the cut, and
//! derives a conjugated-form → lemma index so "vais" resolves to
//! "aller".

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;

/// Conjugated form → lemmas whose inflection it is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormsIndex {
    /// Lowercase surface form → lemma headwords.
    pub forms: BTreeMap<String, Vec<String>>,
}

impl FormsIndex {
    /// The lemmas a surface form may belong to.
    pub fn lemmas(&self, form: &str) -> Option<&[String]> {
        self.forms.get(form).map(Vec::as_slice)
    }

    /// Number of indexed forms.
    pub fn len(&self) -> usize {
        self.forms.len()
    }

    /// Whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.forms.is_empty()
    }

    /// Read a forms index from a JSON file, gzip-compressed when the
    /// path ends in `.gz`.
    pub fn load(path: &camino::Utf8Path) -> crate::error::BuildResult<Self> {
        crate::storage::read_json(path)
    }

    /// Write the forms index as compact JSON, gzip-compressed when the
    /// path ends in `.gz`.
    pub fn save(&self, path: &camino::Utf8Path) -> crate::error::BuildResult<()> {
        crate::storage::write_json(path, self)
    }
}

/// Cut the full dictionary down to the frequency list's words.
///
/// Words missing from the dictionary are counted and logged but never
/// fatal. After the cut, every `s'en <verb>` headword whose base verb
/// survived is added back in.
#[tracing::instrument(skip_all, fields(frequency_words = frequency_words.len()))]
pub fn build_common(full: &Lexicon, frequency_words: &[String]) -> Lexicon {
    let mut words = BTreeMap::new();
    let mut missing = 0usize;

    for word in frequency_words {
        match full.words.get(word) {
            Some(entries) => {
                words.insert(word.clone(), entries.clone());
            }
            None => missing += 1,
        }
    }

    let mut pronominal_added = 0usize;
    for (word, entries) in &full.words {
        let Some(rest) = word.strip_prefix("s'en ") else {
            continue;
        };
        let base = rest.split_whitespace().next().unwrap_or("");
        if !base.is_empty() && words.contains_key(base) && !words.contains_key(word) {
            words.insert(word.clone(), entries.clone());
            pronominal_added += 1;
        }
    }

    tracing::info!(
        found = words.len() - pronominal_added,
        missing,
        pronominal_added,
        "common dictionary built"
    );

    Lexicon {
        lang: full.lang.clone(),
        version: full.version.clone(),
        entry_count: words.values().map(Vec::len).sum(),
        word_count: words.len(),
        words,
    }
}

/// Index every verb's inflected forms back to their lemmas.
///
/// Forms identical to the headword are skipped; a form shared by
/// several verbs lists each lemma once.
pub fn build_forms_index(common: &Lexicon) -> FormsIndex {
    let mut index = FormsIndex::default();
    for (word, entries) in &common.words {
        for entry in entries {
            if entry.pos != "verb" {
                continue;
            }
            for form in &entry.forms {
                let surface = form.form.to_lowercase();
                if surface.is_empty() || surface == *word {
                    continue;
                }
                let lemmas = index.forms.entry(surface).or_default();
                if !lemmas.contains(word) {
                    lemmas.push(word.clone());
                }
            }
        }
    }
    index
}
