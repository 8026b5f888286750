//! Curated English synonym groups.
//!
//! A gloss containing "begin" is weaker evidence that the headword also
//! translates "start" and "commence". The scorer consults
//! [`synonyms_of`] to index each keyword under its synonyms at a fixed
//! penalty.

use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

/// Synonym clusters. Membership is symmetric within a group.
static SYNONYM_GROUPS: &[&[&str]] = &[
    &["start", "begin", "commence"],
    &["end", "finish", "terminate", "conclude"],
    &["stop", "halt", "cease"],
    &["big", "large", "great"],
    &["small", "little", "tiny"],
    &["fast", "quick", "rapid"],
    &["slow", "sluggish"],
    &["happy", "glad", "joyful"],
    &["sad", "unhappy", "sorrowful"],
    &["beautiful", "pretty", "lovely", "gorgeous", "handsome", "attractive"],
    &["ugly", "hideous"],
    &["good", "fine", "nice"],
    &["bad", "poor", "terrible"],
    &["speak", "talk", "converse"],
    &["walk", "stroll"],
    &["run", "sprint", "dash"],
    &["buy", "purchase"],
    &["sell", "vend"],
    &["see", "view", "observe"],
    &["hear", "listen"],
    &["smell", "sniff"],
    &["eat", "consume", "devour"],
    &["drink", "sip", "gulp"],
    &["give", "donate", "grant"],
    &["take", "grab", "seize"],
    &["make", "create", "produce"],
    &["break", "shatter", "smash"],
    &["fix", "repair", "mend"],
    &["help", "assist", "aid"],
    &["hurt", "injure", "harm"],
    &["love", "adore"],
    &["hate", "detest", "loathe"],
    &["want", "desire", "wish"],
    &["need", "require"],
    &["know", "understand", "comprehend"],
    &["think", "believe", "consider"],
    &["remember", "recall", "recollect"],
    &["forget", "overlook"],
    &["find", "discover", "locate"],
    &["lose", "misplace"],
    &["search", "seek", "look for"],
    &["show", "display", "exhibit"],
    &["hide", "conceal"],
    &["open", "unlock"],
    &["close", "shut"],
    &["answer", "reply", "respond"],
    &["ask", "inquire", "question"],
    &["tell", "inform", "notify"],
    &["cry", "weep", "sob"],
    &["laugh", "chuckle", "giggle"],
    &["sleep", "slumber", "rest"],
    &["wake", "awaken", "rouse"],
    &["live", "exist", "dwell"],
    &["die", "perish", "expire"],
    &["clean", "wash", "cleanse"],
    &["dirty", "soil", "stain"],
    &["bike", "bicycle", "cycle"],
    &["car", "automobile", "vehicle"],
    &["plane", "airplane", "aircraft"],
    &["home", "house", "dwelling"],
    &["room", "chamber"],
];

/// Bidirectional lookup: word → the other members of its group.
///
/// Ordered sets keep synonym expansion deterministic, which in turn
/// keeps ranking tie-breaks stable from run to run.
static SYNONYMS: LazyLock<HashMap<&'static str, BTreeSet<&'static str>>> = LazyLock::new(|| {
    let mut map: HashMap<&str, BTreeSet<&str>> = HashMap::new();
    for group in SYNONYM_GROUPS {
        for word in *group {
            let others = map.entry(word).or_default();
            others.extend(group.iter().copied().filter(|w| w != word));
        }
    }
    map
});

/// Returns the synonyms of `word`, if it belongs to any group.
pub fn synonyms_of(word: &str) -> Option<&'static BTreeSet<&'static str>> {
    SYNONYMS.get(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_bidirectional() {
        let of_start = synonyms_of("start").unwrap();
        assert!(of_start.contains("begin"));
        assert!(of_start.contains("commence"));

        let of_begin = synonyms_of("begin").unwrap();
        assert!(of_begin.contains("start"));
    }

    #[test]
    fn word_is_not_its_own_synonym() {
        assert!(!synonyms_of("eat").unwrap().contains("eat"));
    }

    #[test]
    fn unknown_word_has_no_synonyms() {
        assert!(synonyms_of("aardvark").is_none());
    }
}
