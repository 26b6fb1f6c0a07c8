// Single-word part-of-speech tagging.
//
// The engine treats tagging as an injectable collaborator. `LexiconTagger`
// is the built-in implementation used by the tokenizer and as the filter's
// fallback when the thesaurus has no tags for a candidate: character-class
// checks, a closed-class function-word lexicon, suffix heuristics, then the
// thesaurus majority tag, defaulting to NOUN.

use hashbrown::HashMap;

use plainword_core::tags;

use crate::thesaurus::{Thesaurus, map_pos};

/// Assigns a single coarse tag to a word out of context.
pub trait PosTagger {
    fn tag(&self, word: &str) -> String;
}

/// Closed-class function words with fixed tags.
const FUNCTION_WORDS: &[(&str, &str)] = &[
    ("the", tags::DET),
    ("a", tags::DET),
    ("an", tags::DET),
    ("this", tags::DET),
    ("that", tags::DET),
    ("these", tags::DET),
    ("those", tags::DET),
    ("i", tags::PRON),
    ("you", tags::PRON),
    ("he", tags::PRON),
    ("she", tags::PRON),
    ("it", tags::PRON),
    ("we", tags::PRON),
    ("they", tags::PRON),
    ("me", tags::PRON),
    ("him", tags::PRON),
    ("her", tags::PRON),
    ("us", tags::PRON),
    ("them", tags::PRON),
    ("my", tags::PRON),
    ("your", tags::PRON),
    ("his", tags::PRON),
    ("its", tags::PRON),
    ("our", tags::PRON),
    ("their", tags::PRON),
    ("who", tags::PRON),
    ("what", tags::PRON),
    ("which", tags::PRON),
    ("of", tags::ADP),
    ("in", tags::ADP),
    ("on", tags::ADP),
    ("at", tags::ADP),
    ("by", tags::ADP),
    ("for", tags::ADP),
    ("with", tags::ADP),
    ("from", tags::ADP),
    ("into", tags::ADP),
    ("onto", tags::ADP),
    ("over", tags::ADP),
    ("under", tags::ADP),
    ("about", tags::ADP),
    ("be", tags::AUX),
    ("am", tags::AUX),
    ("is", tags::AUX),
    ("are", tags::AUX),
    ("was", tags::AUX),
    ("were", tags::AUX),
    ("been", tags::AUX),
    ("being", tags::AUX),
    ("have", tags::AUX),
    ("has", tags::AUX),
    ("had", tags::AUX),
    ("do", tags::AUX),
    ("does", tags::AUX),
    ("did", tags::AUX),
    ("will", tags::AUX),
    ("would", tags::AUX),
    ("shall", tags::AUX),
    ("should", tags::AUX),
    ("can", tags::AUX),
    ("could", tags::AUX),
    ("may", tags::AUX),
    ("might", tags::AUX),
    ("must", tags::AUX),
    ("not", tags::PART),
    ("to", tags::PART),
    ("and", tags::UNKNOWN),
    ("or", tags::UNKNOWN),
    ("but", tags::UNKNOWN),
];

/// Lexicon-and-heuristics tagger backed by a thesaurus for open-class
/// words.
pub struct LexiconTagger<'a> {
    thesaurus: &'a dyn Thesaurus,
    function_words: HashMap<&'static str, &'static str>,
}

impl<'a> LexiconTagger<'a> {
    pub fn new(thesaurus: &'a dyn Thesaurus) -> Self {
        Self {
            thesaurus,
            function_words: FUNCTION_WORDS.iter().copied().collect(),
        }
    }

    /// Majority coarse tag across the thesaurus senses of `word`, if any.
    fn majority_sense_tag(&self, word: &str) -> Option<String> {
        let senses = self.thesaurus.senses(word);
        if senses.is_empty() {
            return None;
        }
        let mut counts: Vec<(&'static str, usize)> = Vec::new();
        for sense in &senses {
            let tag = map_pos(sense.pos);
            match counts.iter_mut().find(|(t, _)| *t == tag) {
                Some((_, n)) => *n += 1,
                None => counts.push((tag, 1)),
            }
        }
        // First-seen wins ties, keeping the tagger deterministic.
        let mut best: Option<(&'static str, usize)> = None;
        for &(tag, n) in &counts {
            if best.is_none_or(|(_, best_n)| n > best_n) {
                best = Some((tag, n));
            }
        }
        best.map(|(tag, _)| tag.to_string())
    }
}

impl PosTagger for LexiconTagger<'_> {
    fn tag(&self, word: &str) -> String {
        let lower = word.trim().to_lowercase();
        if lower.is_empty() {
            return tags::UNKNOWN.to_string();
        }
        if lower.chars().all(|c| !c.is_alphanumeric()) {
            return tags::PUNCT.to_string();
        }
        if lower.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
            return tags::NUM.to_string();
        }
        if let Some(tag) = self.function_words.get(lower.as_str()) {
            return (*tag).to_string();
        }
        if let Some(tag) = self.majority_sense_tag(&lower) {
            return tag;
        }
        if lower.ends_with("ly") {
            return tags::ADV.to_string();
        }
        if lower.ends_with("ing") || lower.ends_with("ed") {
            return tags::VERB.to_string();
        }
        tags::NOUN.to_string()
    }
}
