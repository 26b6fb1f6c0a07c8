// The suggestion table: accumulated per-sentence, per-word results of a
// pipeline run.

use plainword_core::word::Word;

use crate::source::SearchOutcome;

/// Placeholder line recorded (and reported) for words the filter skipped.
pub const SKIP_NOTE: &str = "Word skipped ; considered common.";

/// Accepted and rejected candidates for one original word. Rejected words
/// carry the `-` sentinel category and are kept only for diagnostics.
#[derive(Debug, Default)]
pub struct CandidateSet {
    pub accepted: Vec<Word>,
    pub rejected: Vec<Word>,
}

impl From<SearchOutcome> for CandidateSet {
    fn from(outcome: SearchOutcome) -> Self {
        Self {
            accepted: outcome.accepted,
            rejected: outcome.rejected,
        }
    }
}

/// Result for one original word: either skipped outright or searched.
#[derive(Debug)]
pub enum WordSuggestions {
    /// The word bypassed candidate search (function word, common, or
    /// monosyllabic).
    Skipped,
    Candidates(CandidateSet),
}

/// One original word with its search result.
#[derive(Debug)]
pub struct SentenceEntry {
    pub original: Word,
    pub suggestions: WordSuggestions,
}

/// All distinct words of one sentence, in left-to-right order of first
/// occurrence.
#[derive(Debug)]
pub struct SentenceSuggestions {
    pub sentence: String,
    pub entries: Vec<SentenceEntry>,
}

/// Per-run accumulation: one block per processed sentence, in input order.
#[derive(Debug, Default)]
pub struct SuggestionTable {
    pub sentences: Vec<SentenceSuggestions>,
}

/// Run-level counters over the whole table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Words flagged complex (i.e. actually searched).
    pub complex_words: usize,
    /// Searched words that ended up with at least one accepted suggestion.
    pub words_with_suggestions: usize,
}

impl SuggestionTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count searched words and searched words with suggestions. Skipped
    /// words are excluded from both counters.
    pub fn summary(&self) -> RunSummary {
        let mut complex_words = 0;
        let mut words_with_suggestions = 0;
        for entry in self.sentences.iter().flat_map(|s| s.entries.iter()) {
            if let WordSuggestions::Candidates(set) = &entry.suggestions {
                complex_words += 1;
                if !set.accepted.is_empty() {
                    words_with_suggestions += 1;
                }
            }
        }
        RunSummary {
            complex_words,
            words_with_suggestions,
        }
    }

    /// Visit every accepted candidate together with its original word and
    /// sentence, mutably. This is the scoring pass's traversal.
    pub fn for_each_accepted_mut(&mut self, mut visit: impl FnMut(&str, &Word, &mut Word)) {
        for sentence in &mut self.sentences {
            for entry in &mut sentence.entries {
                if let WordSuggestions::Candidates(set) = &mut entry.suggestions {
                    for candidate in &mut set.accepted {
                        visit(&sentence.sentence, &entry.original, candidate);
                    }
                }
            }
        }
    }
}
