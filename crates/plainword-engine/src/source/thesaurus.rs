// Thesaurus candidate source: lemmas harvested from every sense whose
// part-of-speech matches the original word's category.

use plainword_core::word::Word;

use crate::filter::SimplicityFilter;
use crate::thesaurus::{Thesaurus, map_pos};

use super::{CandidateSource, SearchOutcome, contains_surface};

pub struct ThesaurusSource<'a> {
    thesaurus: &'a dyn Thesaurus,
    filter: &'a SimplicityFilter<'a>,
}

impl<'a> ThesaurusSource<'a> {
    pub fn new(thesaurus: &'a dyn Thesaurus, filter: &'a SimplicityFilter<'a>) -> Self {
        Self { thesaurus, filter }
    }

    /// Collect the lemmas of every sense of `word` whose mapped tag equals
    /// `category`, excluding the original word and anything already in
    /// `exclude` (case-insensitive), deduplicating within the harvest.
    fn harvest(
        &self,
        word: &str,
        category: &str,
        original: &Word,
        exclude: &[Word],
        harvested: &mut Vec<String>,
    ) {
        for sense in self.thesaurus.senses(word) {
            if !map_pos(sense.pos).eq_ignore_ascii_case(category) {
                continue;
            }
            for lemma in sense.lemmas {
                let lower = lemma.to_lowercase();
                if lower == original.surface()
                    || harvested.iter().any(|h| h.to_lowercase() == lower)
                    || contains_surface(exclude, &lemma)
                {
                    continue;
                }
                harvested.push(lemma);
            }
        }
    }
}

impl CandidateSource for ThesaurusSource<'_> {
    fn first_search(&self, original: &Word, _sentence: &str) -> SearchOutcome {
        let mut harvested = Vec::new();
        self.harvest(
            original.surface(),
            original.category(),
            original,
            &[],
            &mut harvested,
        );
        let partition = self.filter.partition(&harvested, original);
        SearchOutcome {
            accepted: partition.accepted,
            rejected: partition.rejected,
        }
    }

    fn second_search(&self, seeds: &[Word], original: &Word) -> Vec<Word> {
        let mut harvested = Vec::new();
        for seed in seeds {
            self.harvest(
                seed.surface(),
                original.category(),
                original,
                seeds,
                &mut harvested,
            );
        }
        self.filter.partition(&harvested, original).accepted
    }
}
