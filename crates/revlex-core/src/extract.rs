//! Gloss keyword extraction and continuation-shape classification.
//!
//! [`extract_keywords`] turns a free-text English gloss into the
//! ordered candidate keyword sequence the scorer evaluates.
//! [`GlossShape`] classifies how a gloss continues after its first
//! word(s) — phrasal particle, gerund, or abbreviation reference — so
//! several scoring rules can consult the same parse instead of
//! re-matching.

use std::sync::LazyLock;

use regex::Regex;

use crate::word_lists::{ENGLISH_STOPWORDS, PHRASAL_PARTICLES};

/// Parenthetical asides: `(something)`.
static PAREN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\([^)]*\)").expect("valid regex"));

/// Parenthetical asides together with their leading whitespace.
pub(crate) static SPACED_PAREN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\([^)]*\)").expect("valid regex"));

/// Quote characters stripped before tokenizing.
static QUOTES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"["']"#).expect("valid regex"));

/// Extract the candidate English keywords from a gloss, in order.
///
/// Parentheticals and quotes are stripped, clause punctuation becomes
/// token boundaries, tokens are case-folded and reduced to their
/// `a-z` core. Stopwords are dropped unless the gloss is a single
/// capitalized word (proper-noun heuristic, e.g. the month "May").
/// An empty or missing gloss yields an empty sequence; malformed text
/// never errors.
pub fn extract_keywords(gloss: &str) -> Vec<String> {
    let cleaned = PAREN.replace_all(gloss, "");
    let cleaned = QUOTES.replace_all(&cleaned, "");
    let cleaned: String = cleaned
        .chars()
        .map(|c| if matches!(c, ',' | ';' | ':') { ' ' } else { c })
        .collect();

    let tokens: Vec<&str> = cleaned.split_whitespace().collect();
    let single_word_gloss = tokens.len() == 1;

    let mut words = Vec::new();
    for token in &tokens {
        let lower = token.to_lowercase();
        if lower.chars().count() < 2 {
            continue;
        }
        let word: String = lower.chars().filter(char::is_ascii_lowercase).collect();
        let is_proper_noun =
            single_word_gloss && token.chars().next().is_some_and(char::is_uppercase);
        if ENGLISH_STOPWORDS.contains(word.as_str()) && !is_proper_noun {
            continue;
        }
        if word.len() >= 2 {
            words.push(word);
        }
    }
    words
}

/// Strip parenthetical asides from a gloss.
pub fn strip_parens(gloss: &str) -> String {
    PAREN.replace_all(gloss, "").into_owned()
}

/// How a gloss continues after a leading word.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Lead {
    /// The first content word ("see" in "to see oneself").
    head: String,
    /// Followed by a phrasal/reflexive particle ("out", "oneself", ...).
    particle: bool,
    /// Followed by a gerund ("to stop carrying").
    gerund: bool,
}

/// Continuation shape of a gloss, computed once per gloss.
///
/// Consulted by the scorer to reject start-of-gloss matches that
/// actually define a different lexical unit: "to find out" is not a
/// translation of the bare verb "find".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlossShape {
    /// Gloss begins "short for " — a definitional cross-reference.
    abbreviation: bool,
    /// Shape of `^<head> <rest>` (adjective/noun phrasal forms: "cut out").
    plain: Option<Lead>,
    /// Shape of `^to <head> <rest>`.
    to_prefixed: Option<Lead>,
}

impl GlossShape {
    /// Classify a lowercased gloss.
    pub fn classify(gloss_lower: &str) -> Self {
        Self {
            abbreviation: gloss_lower.starts_with("short for "),
            plain: parse_lead(gloss_lower, false),
            to_prefixed: gloss_lower.strip_prefix("to ").and_then(|r| parse_lead(r, true)),
        }
    }

    /// Whether a start-of-gloss match on `keyword` must be rejected.
    ///
    /// True for abbreviation references, `[to] <keyword> <particle>`
    /// continuations, and `to <keyword> <gerund>` continuations.
    pub fn excludes(&self, keyword: &str) -> bool {
        if self.abbreviation {
            return true;
        }
        if let Some(lead) = &self.plain
            && lead.head == keyword
            && lead.particle
        {
            return true;
        }
        if let Some(lead) = &self.to_prefixed
            && lead.head == keyword
            && (lead.particle || lead.gerund)
        {
            return true;
        }
        false
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Leading run of word characters of `text`.
fn word_run(text: &str) -> &str {
    let end = text.find(|c| !is_word_char(c)).unwrap_or(text.len());
    &text[..end]
}

/// Whether `rest` begins with a phrasal particle at a word boundary.
fn starts_with_particle(rest: &str) -> bool {
    PHRASAL_PARTICLES.iter().any(|particle| {
        rest.strip_prefix(particle)
            .is_some_and(|after| !after.starts_with(is_word_char))
    })
}

fn parse_lead(text: &str, allow_gerund: bool) -> Option<Lead> {
    let (head, rest) = text.split_once(' ')?;
    let run = word_run(rest);
    Some(Lead {
        head: head.to_string(),
        particle: starts_with_particle(rest),
        gerund: allow_gerund && run.len() > 3 && run.ends_with("ing"),
    })
}
