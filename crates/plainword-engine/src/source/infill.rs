// Masked-infill candidate source: asks a fill-mask language model for
// completions of the sentence with the target word masked out.
//
// This source is generative and single-direction: it has no second-stage
// search (the pipeline substitutes the vector source when a second stage is
// requested on top of it). It is also the only source that scores inline,
// because the model call already produces the reconstructed sentence the
// semantic scorer needs.

use plainword_core::tags;
use plainword_core::word::Word;

use crate::filter::SimplicityFilter;
use crate::scorer::{SimilarityModel, round3};
use crate::text::{is_word_char, replace_first_word, token_before};

use super::{CandidateSource, SearchOutcome, contains_surface};

/// Mask marker substituted for the target word.
pub const MASK: &str = "[MASK]";

/// One ranked completion from the fill-mask model: the predicted token and
/// the fully reconstructed sentence.
#[derive(Debug, Clone)]
pub struct InfillFill {
    pub token: String,
    pub sequence: String,
}

/// Fill-mask model interface. Completions are expected best-first.
pub trait MaskedInfill {
    fn fill(&self, masked_sentence: &str) -> Vec<InfillFill>;
}

pub struct InfillSource<'a> {
    model: &'a dyn MaskedInfill,
    similarity: &'a dyn SimilarityModel,
    filter: &'a SimplicityFilter<'a>,
}

impl<'a> InfillSource<'a> {
    pub fn new(
        model: &'a dyn MaskedInfill,
        similarity: &'a dyn SimilarityModel,
        filter: &'a SimplicityFilter<'a>,
    ) -> Self {
        Self {
            model,
            similarity,
            filter,
        }
    }

    /// Masked sentence variants for `original`: the target-masked sentence
    /// first, then one variant per predicted fill of the token preceding
    /// the target (surfacing particle/preposition changes around phrasal
    /// verbs). A sentence-initial target gets no particle variants.
    fn masked_variants(&self, original: &Word, sentence: &str) -> Vec<String> {
        let Some(target_masked) = replace_first_word(sentence, original.surface(), MASK) else {
            return Vec::new(); // target absent from the sentence
        };
        let mut variants = vec![target_masked];

        let Some(preceding) = token_before(sentence, original.surface()) else {
            return variants;
        };
        let Some(preceding_masked) = replace_first_word(sentence, &preceding, MASK) else {
            return variants;
        };
        for fill in self.model.fill(&preceding_masked) {
            let token = fill.token.trim();
            if token.is_empty() {
                continue;
            }
            let Some(altered) = replace_first_word(sentence, &preceding, token) else {
                continue;
            };
            if let Some(masked) = replace_first_word(&altered, original.surface(), MASK) {
                variants.push(masked);
            }
        }
        variants
    }
}

/// Recover the whole word containing `fragment` from a reconstructed
/// sentence. Fill-mask models may return sub-word fragments; the usable
/// candidate is the full token of the sentence the fragment landed in.
/// Returns `None` when no token contains the fragment.
pub fn extract_word(sequence: &str, fragment: &str) -> Option<String> {
    let needle = fragment.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }
    for token in sequence.split_whitespace() {
        let stripped = token.trim_matches(|c: char| !is_word_char(c));
        if stripped.to_lowercase().contains(&needle) {
            return Some(stripped.to_string());
        }
    }
    None
}

impl CandidateSource for InfillSource<'_> {
    fn first_search(&self, original: &Word, sentence: &str) -> SearchOutcome {
        let mut outcome = SearchOutcome::default();

        for variant in self.masked_variants(original, sentence) {
            for fill in self.model.fill(&variant) {
                let token = fill.token.trim();
                if token.is_empty() || contains_surface(&outcome.accepted, token) {
                    continue;
                }
                let Some(candidate) = extract_word(&fill.sequence, token) else {
                    continue; // fragment lost in reconstruction
                };
                if contains_surface(&outcome.accepted, &candidate) {
                    continue;
                }
                if self.filter.accept(original, &candidate) {
                    let mut word = Word::new(&candidate, original.category());
                    let score = round3(self.similarity.similarity(sentence, &fill.sequence));
                    word.set_score(score);
                    outcome.accepted.push(word);
                } else if !contains_surface(&outcome.rejected, &candidate) {
                    outcome.rejected.push(Word::new(&candidate, tags::REJECTED));
                }
            }
        }
        outcome
    }

    fn second_search(&self, _seeds: &[Word], _original: &Word) -> Vec<Word> {
        Vec::new()
    }

    fn supports_second_search(&self) -> bool {
        false
    }
}
