// Candidate sources -- the polymorphic search backends.
//
// Every source takes an original word (plus its sentence, which only the
// masked-infill source actually reads) and produces filtered candidate
// words. The composite acceptance gate is shared: each source hands its
// raw strings to the same `SimplicityFilter`.
//
//   - `vector`: nearest neighbors in embedding space
//   - `thesaurus`: lemmas of same-category senses
//   - `infill`: masked language-model completions (first stage only)

pub mod infill;
pub mod thesaurus;
pub mod vector;

use plainword_core::word::Word;

pub use infill::InfillSource;
pub use thesaurus::ThesaurusSource;
pub use vector::VectorSource;

/// Filtered output of a first-stage search.
#[derive(Debug, Default)]
pub struct SearchOutcome {
    pub accepted: Vec<Word>,
    pub rejected: Vec<Word>,
}

/// Common contract of the three candidate sources.
pub trait CandidateSource {
    /// Search for candidates of `original` within `sentence`, returning
    /// accepted and rejected words. Absence of the word from the backing
    /// resource yields an empty outcome, never an error.
    fn first_search(&self, original: &Word, sentence: &str) -> SearchOutcome;

    /// Search again from each already-accepted seed, returning only new
    /// accepted words: anything already present (case-insensitively) in
    /// `seeds` or found earlier in this pass is excluded.
    fn second_search(&self, seeds: &[Word], original: &Word) -> Vec<Word>;

    /// Whether `second_search` is meaningful for this source.
    fn supports_second_search(&self) -> bool {
        true
    }
}

/// Case-insensitive membership test on word surfaces. Surfaces are stored
/// lowercased, so the probe is lowercased before comparison.
pub(crate) fn contains_surface(words: &[Word], surface: &str) -> bool {
    let surface = surface.to_lowercase();
    words.iter().any(|w| w.surface() == surface)
}
