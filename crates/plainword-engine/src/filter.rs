// The simplicity filter: decides which original words are worth
// simplifying at all and which candidate strings count as acceptable
// simpler substitutes.
//
// `accept` is the composite gate applied identically at every
// candidate-acceptance point in the pipeline; the three candidate sources
// all funnel their raw strings through it (directly or via `partition`).

use plainword_core::tags;
use plainword_core::word::Word;

use crate::frequency::FrequencyTable;
use crate::syllable;
use crate::tag::PosTagger;
use crate::thesaurus::{Thesaurus, tags_for};

/// Candidates simple enough on syllables alone: at most this many.
const MAX_SIMPLE_SYLLABLES: usize = 2;

/// Result of splitting raw candidates into accepted and rejected words.
/// Input order is preserved on both sides; rejected words carry the `-`
/// sentinel category.
#[derive(Debug, Default)]
pub struct Partition {
    pub accepted: Vec<Word>,
    pub rejected: Vec<Word>,
}

/// The filter borrows its three read-only collaborators; it holds no
/// mutable state and can be shared freely.
pub struct SimplicityFilter<'a> {
    frequency: &'a FrequencyTable,
    thesaurus: &'a dyn Thesaurus,
    tagger: &'a dyn PosTagger,
}

impl<'a> SimplicityFilter<'a> {
    pub fn new(
        frequency: &'a FrequencyTable,
        thesaurus: &'a dyn Thesaurus,
        tagger: &'a dyn PosTagger,
    ) -> Self {
        Self {
            frequency,
            thesaurus,
            tagger,
        }
    }

    /// True iff every character is alphabetic or a hyphen. Rejects URLs,
    /// numerics, and punctuation-laden tokens; the empty string is invalid.
    pub fn is_format_valid(candidate: &str) -> bool {
        !candidate.is_empty() && candidate.chars().all(|c| c.is_alphabetic() || c == '-')
    }

    /// Lenient simplicity test: a candidate is simple enough if it clears
    /// any one bar — listed as common, no longer than the original, or at
    /// most two estimated syllables.
    pub fn is_simpler(&self, original: &str, candidate: &str) -> bool {
        self.frequency.contains(candidate)
            || candidate.chars().count() <= original.chars().count()
            || syllable::estimate(candidate) <= MAX_SIMPLE_SYLLABLES
    }

    /// True iff the original word should bypass candidate search entirely:
    /// function-word category, listed as common, or exactly one syllable.
    pub fn should_skip(&self, original: &Word) -> bool {
        tags::is_function_category(original.category())
            || self.frequency.contains(original.surface())
            || syllable::estimate(original.surface()) == 1
    }

    /// True iff `candidate` can serve as the same grammatical type as
    /// `category`. The thesaurus tag set decides when it is non-empty;
    /// otherwise the single-word tagger is consulted, because a thesaurus
    /// does not list every surface form.
    pub fn same_grammatical_type(&self, category: &str, candidate: &str) -> bool {
        let thesaurus_tags = tags_for(self.thesaurus, candidate);
        if thesaurus_tags.is_empty() {
            return self.tagger.tag(candidate).eq_ignore_ascii_case(category);
        }
        thesaurus_tags
            .iter()
            .any(|tag| tag.eq_ignore_ascii_case(category))
    }

    /// The composite acceptance gate: format-valid, simpler, same
    /// grammatical type, and not the original word itself.
    pub fn accept(&self, original: &Word, candidate: &str) -> bool {
        Self::is_format_valid(candidate)
            && self.is_simpler(original.surface(), candidate)
            && self.same_grammatical_type(original.category(), candidate)
            && !original.matches(candidate)
    }

    /// Apply the composite gate to every raw candidate, wrapping accepted
    /// strings as words with the original's category and rejected strings
    /// with the `-` sentinel category. No deduplication happens here;
    /// exclusion sets are the candidate sources' responsibility.
    pub fn partition<S: AsRef<str>>(&self, candidates: &[S], original: &Word) -> Partition {
        let mut partition = Partition::default();
        for candidate in candidates {
            let candidate = candidate.as_ref();
            if self.accept(original, candidate) {
                partition
                    .accepted
                    .push(Word::new(candidate, original.category()));
            } else {
                partition.rejected.push(Word::new(candidate, tags::REJECTED));
            }
        }
        partition
    }
}
