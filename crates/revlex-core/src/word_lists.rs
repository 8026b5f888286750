//! Curated word lists for reverse-index construction.
//!
//! Vulgarity tagging vocabularies, English gloss stopwords, phrasal
//! particles, and compound-noun suffixes. All lists are immutable
//! static data, initialized on first use.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Dictionary tags that mark an entry or sense as vulgar/offensive.
///
/// `derogatory` is deliberately excluded: it is too broad and would
/// sweep up hundreds of merely informal words.
pub static VULGAR_TAGS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["vulgar", "offensive", "slur", "ethnic"].into_iter().collect());

/// English query words that unlock vulgar French results.
///
/// Someone searching one of these wants the vulgar translations, so the
/// vulgarity gate is lifted for them.
pub static VULGAR_ENGLISH: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Direct vulgar words
        "fuck", "fucking", "fucked", "fucker", "shit", "shitty", "bullshit",
        "ass", "asshole", "arse", "arsehole", "bitch", "whore", "slut", "cunt",
        "cock", "dick", "piss", "pissed", "bastard", "damn", "damned",
        "crap", "crappy", "screw", "screwed", "balls", "butt", "butthole",
        // Body parts (vulgar context)
        "penis", "vagina", "testicle", "testicles", "anus",
        // Related words
        "prostitute", "brothel", "whorehouse", "pimp",
        "defecate", "urinate", "fart", "cum", "ejaculate",
        "bugger", "bum", "turd", "prick", "jerk",
    ]
    .into_iter()
    .collect()
});

/// English words that appear in explanatory gloss text but are not
/// translations.
///
/// These attract false matches from phrases like "but did not",
/// "whether by", "is used when". Base auxiliary forms (be, have, do)
/// are intentionally absent: people search "be" for être, "have" for
/// avoir, "do" for faire.
pub static ENGLISH_STOPWORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Articles and determiners
        "a", "an", "the", "this", "that", "these", "those",
        // Prepositions
        "of", "in", "on", "at", "by", "for", "to", "from", "with", "into", "onto",
        "about", "after", "before", "between", "through", "during", "without",
        "under", "over", "above", "below", "against", "among", "within",
        // Conjunctions
        "and", "or", "but", "if", "than", "as", "so", "yet", "nor",
        "whether", "either", "neither", "both",
        // Pronouns (but keep who, what, which: qui, quoi, lequel)
        "it", "its", "he", "she", "they", "we",
        // Conjugated auxiliary/modal forms; base forms stay indexable
        "is", "are", "was", "were", "been", "being",
        "has", "had", "having",
        "does", "did", "doing", "done",
        "will", "would", "shall", "should", "may", "might", "must", "can", "could",
        // Common adverbs in explanations (always and never stay: toujours, jamais)
        "not", "also", "often", "usually", "especially", "particularly",
        "generally", "typically", "sometimes",
        // Other noise words
        "such", "some", "any", "each", "every", "other", "another",
        "up", "out", "off", // phrasal verb particles
    ]
    .into_iter()
    .collect()
});

/// Particles that continue a phrasal or reflexive verb gloss.
///
/// A gloss like "to find out" or "to see oneself" defines a different
/// lexical unit than the bare verb, so a start match on the verb is
/// rejected when one of these follows it. Includes the two-token
/// reciprocals "each other" and "one another".
pub static PHRASAL_PARTICLES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "oneself", "yourself", "himself", "herself", "itself", "ourselves",
        "themselves", "each other", "one another", "out", "up", "down", "in",
        "off", "on", "away", "back", "over", "around", "about", "through",
    ]
    .into_iter()
    .collect()
});

/// Function words that introduce elaboration rather than form a compound.
///
/// "tool of the trade" elaborates on "tool"; "tool box" is a compound.
pub static ELABORATION_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    ["to", "of", "and", "or", "in", "for", "as", "that", "which", "with"]
        .into_iter()
        .collect()
});

/// Concrete nouns that commonly terminate two-word compounds.
///
/// When a gloss is "<word> <suffix>" the indexed word is only a
/// modifier ("stop sign", "fire engine", "hot chocolate") and should
/// rank far behind the general term.
pub static COMPOUND_SUFFIXES: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        // Objects
        "sign", "mark", "board", "line", "light", "engine", "bottle",
        "machine", "box", "man", "woman", "house", "room", "car", "boat",
        "plane", "train", "station", "shop", "store", "office", "school",
        // Food/drink compounds
        "chocolate", "coffee", "tea", "water", "juice", "wine", "beer",
        "milk", "cake", "pie", "cream", "sauce", "soup", "salad", "bread",
        // Other common compounds
        "wave", "storm", "day", "night", "time", "year", "week", "month",
        "war", "game", "show", "film", "movie", "book", "story", "song",
    ]
    .into_iter()
    .collect()
});

/// Single-character French headwords that are legitimate words.
///
/// Used by the quality harness to separate real entries (y = there,
/// à = to) from junk leaking into top results.
pub static VALID_SINGLE_CHARS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ["y", "à", "a", "ô", "ù"].into_iter().collect());

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_auxiliaries_are_not_stopwords() {
        for base in ["be", "have", "do"] {
            assert!(!ENGLISH_STOPWORDS.contains(base), "{base} must stay indexable");
        }
        for conjugated in ["is", "was", "has", "did", "does"] {
            assert!(ENGLISH_STOPWORDS.contains(conjugated));
        }
    }

    #[test]
    fn derogatory_is_not_a_vulgar_tag() {
        assert!(!VULGAR_TAGS.contains("derogatory"));
    }

    #[test]
    fn reciprocal_particles_present() {
        assert!(PHRASAL_PARTICLES.contains("each other"));
        assert!(PHRASAL_PARTICLES.contains("one another"));
    }
}
