// Scoring: attaches the two (incompatible) similarity metrics to candidate
// words.
//
// Scoring is idempotent by contract: a scorer computes only when the word
// still holds `None` for its metric, so visiting the same word twice is a
// no-op the second time. The two metrics are independent and both may be
// populated on one word.

use plainword_core::word::{UNSCOREABLE_DISTANCE, Word};
use plainword_embed::EmbeddingStore;

use crate::text::replace_first_word;

/// Sentence-pair similarity model interface. Higher is more similar; the
/// range is model-defined but bounded.
pub trait SimilarityModel {
    fn similarity(&self, reference: &str, candidate_sentence: &str) -> f64;
}

/// Round to three decimals, the precision every reported metric uses.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

/// Embedding-distance scorer: Euclidean distance between the original's
/// and the candidate's vectors. Lower is better.
pub struct DistanceScorer<'a> {
    embeddings: &'a EmbeddingStore,
}

impl<'a> DistanceScorer<'a> {
    pub fn new(embeddings: &'a EmbeddingStore) -> Self {
        Self { embeddings }
    }

    /// Attach the distance metric to `candidate` if it is still unscored.
    /// A vocabulary miss on either side yields the documented
    /// `UNSCOREABLE_DISTANCE` constant, never an error.
    pub fn score(&self, original: &Word, candidate: &mut Word) {
        if candidate.distance().is_some() {
            return;
        }
        let distance = self
            .embeddings
            .distance_between(original.surface(), candidate.surface())
            .map(round3)
            .unwrap_or(UNSCOREABLE_DISTANCE);
        candidate.set_distance(distance);
    }
}

/// Semantic-similarity scorer: substitutes the candidate into the sentence
/// at the original word's first occurrence and scores the sentence pair.
/// Higher is better.
pub struct SimilarityScorer<'a> {
    model: &'a dyn SimilarityModel,
}

impl<'a> SimilarityScorer<'a> {
    pub fn new(model: &'a dyn SimilarityModel) -> Self {
        Self { model }
    }

    /// Attach the similarity metric to `candidate` if it is still
    /// unscored. When the original word cannot be found in the sentence
    /// the unmodified sentence is scored against itself, which degrades to
    /// a perfect-similarity score rather than failing.
    pub fn score(&self, sentence: &str, original: &Word, candidate: &mut Word) {
        if candidate.score().is_some() {
            return;
        }
        let substituted = replace_first_word(sentence, original.surface(), candidate.surface())
            .unwrap_or_else(|| sentence.to_string());
        let score = round3(self.model.similarity(sentence, &substituted));
        candidate.set_score(score);
    }
}
