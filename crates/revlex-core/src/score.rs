//! Relevance scoring for (English keyword, French headword) pairs.
//!
//! The rubric is an ordered list of additive rules folded over a
//! precomputed [`ScoreInput`]. Each rule is a pure function of the
//! input; the final score is the sum of every rule's delta. Rules
//! never short-circuit, so two rules may penalize the same surface
//! pattern independently (compound modifiers are hit both by the
//! match-profile penalty and by the compound-suffix rule).

use std::sync::LazyLock;

use regex::Regex;

use crate::extract::{strip_parens, GlossShape, SPACED_PAREN};
use crate::word_lists::{COMPOUND_SUFFIXES, ELABORATION_WORDS};

/// Contextual parentheticals that mark specialized usage, e.g.
/// "hello (when answering the phone)" or "find (again)".
static QUALIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\([^)]*\b(when|used|especially|specifically|in|formal|informal|phone|slang|again|back)\b[^)]*\)",
    )
    .expect("valid regex")
});

/// Everything about a sense that scoring needs and that does not
/// depend on which keyword is being scored. Built once per sense and
/// shared across all of its keywords and their synonyms.
#[derive(Debug)]
pub struct SenseContext<'a> {
    /// The French headword this sense belongs to.
    pub fr_word: &'a str,
    /// Whitespace-separated token count of the headword.
    pub word_count: usize,
    /// Part of speech of the entry.
    pub pos: &'a str,
    /// Zero-based position of this sense within the entry.
    pub sense_idx: usize,
    /// The gloss with original casing.
    pub gloss: &'a str,
    /// The case-folded gloss.
    pub gloss_lower: &'a str,
    /// Continuation shape of the gloss.
    pub shape: GlossShape,
    /// Frequency rank of the headword, if it is a common word.
    pub frequency_rank: Option<usize>,
    /// The headword's dominant part of speech, when one exists.
    pub dominant_pos: Option<&'a str>,
    /// The gloss lists several meanings (a semicolon survives
    /// parenthetical stripping).
    multi_meaning: bool,
    /// The gloss carries a specialized-usage parenthetical.
    qualified: bool,
}

impl<'a> SenseContext<'a> {
    /// Build the per-sense context, computing the derived fields.
    pub fn new(
        fr_word: &'a str,
        pos: &'a str,
        sense_idx: usize,
        gloss: &'a str,
        gloss_lower: &'a str,
        frequency_rank: Option<usize>,
        dominant_pos: Option<&'a str>,
    ) -> Self {
        Self {
            fr_word,
            word_count: fr_word.split_whitespace().count(),
            pos,
            sense_idx,
            gloss,
            gloss_lower,
            shape: GlossShape::classify(gloss_lower),
            frequency_rank,
            dominant_pos,
            multi_meaning: strip_parens(gloss).contains(';'),
            qualified: QUALIFIER.is_match(gloss_lower),
        }
    }
}

/// Where in the gloss a keyword was matched, computed once per
/// keyword and shared by the keyword and all of its synonyms.
#[derive(Debug, Clone, Copy, Default)]
pub struct MatchProfile {
    /// The keyword opens the gloss (optionally after "to "), is a
    /// complete word there, and no exclusion applies.
    pub start: bool,
    /// The keyword opens a semicolon-separated alternative.
    pub alt: bool,
    /// The keyword is the modifier of a compound ("salty dog",
    /// "stop sign"). Cancels the start match.
    pub compound: bool,
}

/// Whether `text` begins with `word` as a complete word, i.e.
/// followed by a clause delimiter, a space, a parenthesis, or the end.
fn leads(text: &str, word: &str) -> bool {
    text.strip_prefix(word)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with([',', ';', ':', ' ', '(']))
}

impl MatchProfile {
    /// Locate `keyword` within the sense's gloss.
    ///
    /// `keyword` is the word actually present in the gloss; synonyms
    /// expanded from it share the profile.
    pub fn analyze(sense: &SenseContext<'_>, keyword: &str) -> Self {
        let gloss_lower = sense.gloss_lower;

        let opens = leads(gloss_lower, keyword)
            || gloss_lower
                .strip_prefix("to ")
                .is_some_and(|rest| leads(rest, keyword));
        let mut start = opens && !sense.shape.excludes(keyword);

        let alt = gloss_lower.match_indices("; ").any(|(i, sep)| {
            let rest = &gloss_lower[i + sep.len()..];
            leads(rest, keyword)
                || rest
                    .strip_prefix("to ")
                    .is_some_and(|r| leads(r, keyword))
        });

        // Multi-word headwords attract descriptive glosses ("Used to
        // introduce..."), so their start matches face extra scrutiny.
        if sense.word_count > 1 && start {
            let first_word = sense.gloss.split_whitespace().next().unwrap_or("");
            let capitalized = first_word.chars().next().is_some_and(char::is_uppercase);
            if capitalized && first_word.to_lowercase() != "i" {
                start = false;
            }
            let long = sense.gloss.chars().count() > 50;
            let early_comma = sense.gloss.chars().take(30).any(|c| c == ',');
            if long && !sense.gloss.contains(';') && !early_comma {
                start = false;
            }
        }

        // Compound modifier check. When the keyword opens the first
        // clause and the next word is a content word, the gloss names
        // a compound ("salty dog") rather than a translation.
        let first_segment = SPACED_PAREN.replace_all(gloss_lower, "");
        let first_segment = first_segment
            .split([',', ';'])
            .next()
            .unwrap_or("")
            .trim();
        let mut segment_words = first_segment.split_whitespace();
        let compound = matches!(
            (segment_words.next(), segment_words.next()),
            (Some(head), Some(next))
                if head == keyword && !ELABORATION_WORDS.contains(next)
        );
        if compound {
            start = false;
        }

        Self { start, alt, compound }
    }
}

/// Scoring input for one (sense, index word) pair.
#[derive(Debug)]
pub struct ScoreInput<'a> {
    /// The per-sense context.
    pub sense: &'a SenseContext<'a>,
    /// The English word being indexed (the keyword or a synonym).
    pub index_word: &'a str,
    /// Penalty carried by synonym expansion. Zero for direct matches.
    pub synonym_penalty: i32,
    /// Position of the source keyword among the gloss's keywords.
    pub position: usize,
    /// Where the source keyword matched in the gloss.
    pub profile: &'a MatchProfile,
}

type Rule = fn(&ScoreInput<'_>) -> i32;

/// The rubric, applied in order and summed.
static RULES: &[Rule] = &[
    synonym_expansion,
    interjection,
    proper_name,
    minor_pos,
    loanword,
    frequency,
    first_keyword,
    compound_modifier,
    gloss_match,
    sense_position,
    single_word_headword,
    pos_context,
];

/// Score one (sense, index word) pair against the full rubric.
pub fn score(input: &ScoreInput<'_>) -> i32 {
    RULES.iter().fold(0, |total, rule| total + rule(input))
}

fn synonym_expansion(input: &ScoreInput<'_>) -> i32 {
    -input.synonym_penalty
}

/// Interjections are poor translations ("stop!" should lose to
/// "arrêter").
fn interjection(input: &ScoreInput<'_>) -> i32 {
    if input.sense.pos == "intj" { -150 } else { 0 }
}

/// Proper nouns like "Amour" (the Amur river) gloss common words
/// such as "river" without translating them.
fn proper_name(input: &ScoreInput<'_>) -> i32 {
    if input.sense.pos == "name" { -200 } else { 0 }
}

/// A sense whose part of speech is not the headword's dominant one is
/// a minor usage ("sortir" the noun vs "sortir" the verb).
fn minor_pos(input: &ScoreInput<'_>) -> i32 {
    match input.sense.dominant_pos {
        Some(dominant) if dominant != input.sense.pos => -100,
        _ => 0,
    }
}

/// Headwords spelled like their own English query are loan words
/// ("stop", "bicycle") unless they are established common French
/// words ("fruit", "table").
fn loanword(input: &ScoreInput<'_>) -> i32 {
    let sense = input.sense;
    if sense.fr_word.to_lowercase() == input.index_word.to_lowercase()
        && sense.frequency_rank.is_none()
    {
        -100
    } else {
        0
    }
}

/// The largest single bonus. The top thousand words earn 200+ points,
/// anything in the list earns at least a small boost.
fn frequency(input: &ScoreInput<'_>) -> i32 {
    match input.sense.frequency_rank {
        #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
        Some(rank) => 0.max(300 - (rank / 10) as i32),
        None => 0,
    }
}

fn first_keyword(input: &ScoreInput<'_>) -> i32 {
    if input.position == 0 { 50 } else { 0 }
}

fn compound_modifier(input: &ScoreInput<'_>) -> i32 {
    if input.profile.compound { -100 } else { 0 }
}

/// The positional bonus. Start-of-gloss matches earn the most, alt
/// matches (after a semicolon) less, and the bonus shrinks when the
/// gloss lists several meanings, when the sense is late in its entry,
/// and when a specialized-usage parenthetical qualifies the gloss.
fn gloss_match(input: &ScoreInput<'_>) -> i32 {
    let sense = input.sense;
    let profile = input.profile;

    if profile.start || profile.alt {
        let mut base = match (profile.start, sense.multi_meaning) {
            (true, false) => 200,
            (true, true) => 100,
            (false, false) => 150,
            (false, true) => 75,
        };
        if sense.sense_idx >= 2 {
            base /= 2;
        } else if sense.sense_idx == 1 {
            base = base * 3 / 4;
        }
        if sense.qualified { base / 4 } else { base }
    } else if input.position < 3 {
        50
    } else {
        0
    }
}

/// Primary senses carry the primary meaning; very late senses are
/// obscure.
fn sense_position(input: &ScoreInput<'_>) -> i32 {
    match input.sense.sense_idx {
        0 => 100,
        1 => 50,
        idx if idx >= 5 => -50,
        _ => 0,
    }
}

fn single_word_headword(input: &ScoreInput<'_>) -> i32 {
    if input.sense.word_count == 1 { 30 } else { 0 }
}

/// Verbs glossed in the infinitive ("to ...") get a small boost;
/// nouns and adjectives a smaller one, minus a heavy penalty when the
/// gloss is a two-word compound whose second word is a known compound
/// suffix ("stop sign", "hot chocolate").
fn pos_context(input: &ScoreInput<'_>) -> i32 {
    let sense = input.sense;
    if sense.pos == "verb" && sense.gloss_lower.starts_with("to ") {
        30
    } else if matches!(sense.pos, "noun" | "adj") {
        let mut delta = 20;
        let mut words = sense.gloss_lower.split_whitespace();
        if let (Some(_), Some(second), None) = (words.next(), words.next(), words.next())
            && COMPOUND_SUFFIXES.contains(second)
        {
            delta -= 150;
        }
        delta
    } else {
        0
    }
}
