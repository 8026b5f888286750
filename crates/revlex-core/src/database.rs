//! Flat dictionary construction from a single-language JSONL file.
//!
//! Each raw entry is reduced to the fields the app and the index
//! builder need, junk entry classes are dropped, and entries are
//! grouped under their lowercase headword.

use std::collections::BTreeMap;
use std::io::BufRead;

use camino::Utf8Path;

use crate::error::{BuildError, BuildResult};
use crate::kaikki::RawEntry;
use crate::lexicon::{Example, Form, Lexicon, Sense, WordEntry};
use crate::storage;

/// Schema version stamped into built dictionaries.
pub const SCHEMA_VERSION: &str = "1.0";

/// Regional tag excluded from senses and sense tags.
const EXCLUDED_REGION: &str = "Louisiana";

/// Inflection-table metadata markers that are not real forms.
const META_FORM_TAGS: &[&str] = &["table-tags", "inflection-template", "multiword-construction"];

/// Whether every sense of the entry glosses an abbreviation, which
/// makes the whole entry a cross-reference rather than a definition.
fn all_abbreviations(entry: &RawEntry) -> bool {
    !entry.senses.is_empty()
        && entry.senses.iter().all(|sense| {
            sense
                .primary_gloss()
                .unwrap_or("")
                .to_lowercase()
                .contains("abbreviation")
        })
}

/// Whether the entry only describes an inflection of another word.
///
/// Determiners and pronouns are exempt: "vos" or "ceux" are form-of
/// entries people still look up directly.
fn is_form_of(entry: &RawEntry, pos: &str) -> bool {
    if matches!(pos, "det" | "pron") {
        return false;
    }
    entry
        .senses
        .iter()
        .any(|sense| sense.tags.iter().any(|t| t == "form-of"))
}

fn simplify_senses(entry: &RawEntry) -> Vec<Sense> {
    let mut senses = Vec::new();
    for raw in &entry.senses {
        if raw.tags.iter().any(|t| t == EXCLUDED_REGION) {
            continue;
        }
        let Some(gloss) = raw.primary_gloss().filter(|g| !g.is_empty()) else {
            continue;
        };
        let examples = raw
            .examples
            .iter()
            .take(2)
            .filter_map(|ex| {
                let text = ex.text.clone().filter(|t| !t.is_empty())?;
                Some(Example {
                    text,
                    en: ex.english_text().map(str::to_string),
                })
            })
            .collect();
        senses.push(Sense {
            gloss: gloss.to_string(),
            tags: raw
                .tags
                .iter()
                .filter(|t| *t != EXCLUDED_REGION)
                .cloned()
                .collect(),
            examples,
        });
    }
    senses
}

fn simplify_forms(entry: &RawEntry) -> Vec<Form> {
    entry
        .forms
        .iter()
        .filter_map(|raw| {
            let form = raw.form.clone()?;
            if raw.tags.iter().any(|t| META_FORM_TAGS.contains(&t.as_str())) {
                return None;
            }
            Some(Form {
                form,
                tags: raw.tags.clone(),
                ipa: raw.ipa.clone(),
            })
        })
        .collect()
}

/// Reduce one raw entry to a dictionary [`WordEntry`].
///
/// Returns `None` when no usable senses remain.
fn simplify_entry(entry: &RawEntry) -> Option<WordEntry> {
    let pos = entry.pos.clone().unwrap_or_default();
    let senses = simplify_senses(entry);
    if senses.is_empty() {
        return None;
    }

    let ipa = entry.sounds.iter().find_map(|s| s.ipa.clone());
    let audio = entry.sounds.iter().find_map(|s| s.mp3_url.clone());

    let forms = if matches!(pos.as_str(), "verb" | "adj" | "noun") {
        simplify_forms(entry)
    } else {
        Vec::new()
    };

    let gender = if pos == "noun" {
        entry.categories.iter().find_map(|cat| {
            let cat = cat.to_lowercase();
            if cat.contains("masculine") {
                Some("m".to_string())
            } else if cat.contains("feminine") {
                Some("f".to_string())
            } else {
                None
            }
        })
    } else {
        None
    };

    let (aux, irregular) = if pos == "verb" {
        let aux = entry
            .categories
            .iter()
            .any(|cat| cat.to_lowercase().contains("verbs taking être as auxiliary"))
            .then(|| "être".to_string());
        let irregular = entry
            .categories
            .iter()
            .any(|cat| cat == "French irregular verbs")
            .then_some(true);
        (aux, irregular)
    } else {
        (None, None)
    };

    Some(WordEntry {
        pos,
        tags: entry.tags.clone(),
        senses,
        ipa,
        audio,
        etymology: entry.etymology_text.clone(),
        forms,
        gender,
        aux,
        irregular,
    })
}

/// Build the flat dictionary from a single-language JSONL file.
///
/// Skipped entry classes: raw characters, entries whose senses all
/// gloss abbreviations, and form-of entries outside determiners and
/// pronouns. Unparseable lines and entries with no usable senses are
/// dropped silently.
#[tracing::instrument(skip_all, fields(lang = lang_code, input = %input))]
pub fn build_lexicon(input: &Utf8Path, lang_code: &str) -> BuildResult<Lexicon> {
    let mut words: BTreeMap<String, Vec<WordEntry>> = BTreeMap::new();
    let mut entry_count = 0usize;

    let reader = storage::open_lines(input)?;
    for line in reader.lines() {
        let line = line.map_err(|source| BuildError::ReadInput {
            path: input.to_path_buf(),
            source,
        })?;
        let Ok(entry) = serde_json::from_str::<RawEntry>(&line) else {
            continue;
        };

        let word = entry
            .word
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default();
        if word.is_empty() {
            continue;
        }
        let pos = entry.pos.as_deref().unwrap_or_default();
        if pos == "character" {
            continue;
        }
        if all_abbreviations(&entry) {
            continue;
        }
        if is_form_of(&entry, pos) {
            continue;
        }

        if let Some(simplified) = simplify_entry(&entry) {
            words.entry(word).or_default().push(simplified);
            entry_count += 1;
        }
    }

    let lexicon = Lexicon {
        lang: lang_code.to_string(),
        version: SCHEMA_VERSION.to_string(),
        entry_count,
        word_count: words.len(),
        words,
    };
    tracing::info!(
        entries = lexicon.entry_count,
        words = lexicon.word_count,
        "dictionary built"
    );
    Ok(lexicon)
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;

    fn build_from(lines: &str) -> Lexicon {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("fr.jsonl")).unwrap();
        std::fs::write(&path, lines).unwrap();
        build_lexicon(&path, "fr").unwrap()
    }

    #[test]
    fn groups_entries_under_lowercase_headword() {
        let lex = build_from(concat!(
            r#"{"word":"Chat","pos":"noun","senses":[{"glosses":["cat"]}]}"#,
            "\n",
            r#"{"word":"chat","pos":"noun","senses":[{"glosses":["chat, online conversation"]}]}"#,
            "\n",
        ));
        assert_eq!(lex.words["chat"].len(), 2);
        assert_eq!(lex.entry_count, 2);
        assert_eq!(lex.word_count, 1);
    }

    #[test]
    fn character_entries_are_skipped() {
        let lex = build_from(
            r#"{"word":"a","pos":"character","senses":[{"glosses":["letter a"]}]}"#,
        );
        assert!(lex.words.is_empty());
    }

    #[test]
    fn all_abbreviation_entries_are_skipped() {
        let lex = build_from(concat!(
            r#"{"word":"svp","pos":"phrase","senses":[{"glosses":["Abbreviation of s'il vous plaît"]}]}"#,
            "\n",
            r#"{"word":"km","pos":"noun","senses":[{"glosses":["abbreviation of kilomètre"]},{"glosses":["kilometre"]}]}"#,
            "\n",
        ));
        assert!(!lex.words.contains_key("svp"));
        // one non-abbreviation sense keeps the entry
        assert!(lex.words.contains_key("km"));
    }

    #[test]
    fn form_of_entries_are_skipped_except_det_and_pron() {
        let lex = build_from(concat!(
            r#"{"word":"vis","pos":"verb","senses":[{"glosses":["inflection of vivre"],"tags":["form-of"]}]}"#,
            "\n",
            r#"{"word":"vos","pos":"det","senses":[{"glosses":["your (plural)"],"tags":["form-of"]}]}"#,
            "\n",
        ));
        assert!(!lex.words.contains_key("vis"));
        assert!(lex.words.contains_key("vos"));
    }

    #[test]
    fn senses_keep_at_most_two_examples() {
        let lex = build_from(
            r#"{"word":"chat","pos":"noun","senses":[{"glosses":["cat"],"examples":[{"text":"un chat noir","english":"a black cat"},{"text":"deux chats"},{"text":"trois chats"}]}]}"#,
        );
        let sense = &lex.words["chat"][0].senses[0];
        assert_eq!(sense.examples.len(), 2);
        assert_eq!(sense.examples[0].en.as_deref(), Some("a black cat"));
        assert_eq!(sense.examples[1].en, None);
    }

    #[test]
    fn regional_senses_are_dropped() {
        let lex = build_from(
            r#"{"word":"char","pos":"noun","senses":[{"glosses":["car"],"tags":["Louisiana"]},{"glosses":["tank"]}]}"#,
        );
        let senses = &lex.words["char"][0].senses;
        assert_eq!(senses.len(), 1);
        assert_eq!(senses[0].gloss, "tank");
    }

    #[test]
    fn table_metadata_forms_are_dropped() {
        let lex = build_from(
            r#"{"word":"aller","pos":"verb","senses":[{"glosses":["to go"]}],"forms":[{"form":"aller-table","tags":["table-tags"]},{"form":"vais","tags":["first-person","singular"]}]}"#,
        );
        let forms = &lex.words["aller"][0].forms;
        assert_eq!(forms.len(), 1);
        assert_eq!(forms[0].form, "vais");
    }

    #[test]
    fn noun_gender_comes_from_categories() {
        let lex = build_from(concat!(
            r#"{"word":"chat","pos":"noun","senses":[{"glosses":["cat"]}],"categories":["French masculine nouns"]}"#,
            "\n",
            r#"{"word":"table","pos":"noun","senses":[{"glosses":["table"]}],"categories":["French feminine nouns"]}"#,
            "\n",
        ));
        assert_eq!(lex.words["chat"][0].gender.as_deref(), Some("m"));
        assert_eq!(lex.words["table"][0].gender.as_deref(), Some("f"));
    }

    #[test]
    fn verb_aux_and_irregularity_come_from_categories() {
        let lex = build_from(
            r#"{"word":"aller","pos":"verb","senses":[{"glosses":["to go"]}],"categories":["French verbs taking être as auxiliary","French irregular verbs"]}"#,
        );
        let entry = &lex.words["aller"][0];
        assert_eq!(entry.aux.as_deref(), Some("être"));
        assert_eq!(entry.irregular, Some(true));
    }

    #[test]
    fn entries_without_usable_senses_are_dropped() {
        let lex = build_from(concat!(
            r#"{"word":"x","pos":"noun","senses":[]}"#,
            "\n",
            r#"{"word":"y","pos":"noun","senses":[{"tags":["rare"]}]}"#,
            "\n",
            "garbage line\n",
        ));
        assert!(lex.words.is_empty());
    }

    #[test]
    fn sound_records_supply_ipa_and_audio() {
        let lex = build_from(
            r#"{"word":"chat","pos":"noun","senses":[{"glosses":["cat"]}],"sounds":[{"ipa":"/ʃa/"},{"mp3_url":"https://example.org/chat.mp3"}]}"#,
        );
        let entry = &lex.words["chat"][0];
        assert_eq!(entry.ipa.as_deref(), Some("/ʃa/"));
        assert_eq!(entry.audio.as_deref(), Some("https://example.org/chat.mp3"));
    }
}
