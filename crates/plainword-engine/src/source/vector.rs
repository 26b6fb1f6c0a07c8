// Vector-similarity candidate source: nearest neighbors of the original
// word in embedding space, filtered through the composite gate.

use plainword_core::word::Word;
use plainword_embed::EmbeddingStore;

use crate::filter::SimplicityFilter;

use super::{CandidateSource, SearchOutcome, contains_surface};

/// Neighbors requested for the first-stage search.
pub const FIRST_SEARCH_NEIGHBORS: usize = 50;

/// Neighbors requested per seed word in the second-stage search.
pub const SECOND_SEARCH_NEIGHBORS: usize = 25;

pub struct VectorSource<'a> {
    embeddings: &'a EmbeddingStore,
    filter: &'a SimplicityFilter<'a>,
}

impl<'a> VectorSource<'a> {
    pub fn new(embeddings: &'a EmbeddingStore, filter: &'a SimplicityFilter<'a>) -> Self {
        Self { embeddings, filter }
    }
}

impl CandidateSource for VectorSource<'_> {
    fn first_search(&self, original: &Word, _sentence: &str) -> SearchOutcome {
        // An out-of-vocabulary original returns no neighbors; the empty
        // outcome is the normal silent result.
        let neighbors = self
            .embeddings
            .nearest(original.surface(), FIRST_SEARCH_NEIGHBORS);
        let partition = self.filter.partition(&neighbors, original);
        SearchOutcome {
            accepted: partition.accepted,
            rejected: partition.rejected,
        }
    }

    fn second_search(&self, seeds: &[Word], original: &Word) -> Vec<Word> {
        let mut found: Vec<Word> = Vec::new();
        for seed in seeds {
            let neighbors = self
                .embeddings
                .nearest(seed.surface(), SECOND_SEARCH_NEIGHBORS);
            let partition = self.filter.partition(&neighbors, original);
            for word in partition.accepted {
                if contains_surface(seeds, word.surface())
                    || contains_surface(&found, word.surface())
                {
                    continue;
                }
                found.push(word);
            }
        }
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frequency::FrequencyTable;
    use crate::tag::PosTagger;
    use crate::thesaurus::{Sense, Thesaurus};

    struct EmptyThesaurus;

    impl Thesaurus for EmptyThesaurus {
        fn senses(&self, _word: &str) -> Vec<Sense> {
            Vec::new()
        }
    }

    struct NounTagger;

    impl PosTagger for NounTagger {
        fn tag(&self, _word: &str) -> String {
            "NOUN".to_string()
        }
    }

    // One tight cluster around "wound" plus a far-away distractor.
    const VECTORS: &str = "\
wound 0.0 0.0
cut 0.1 0.0
gash 0.2 0.0
sore 0.3 0.0
engine 9.0 9.0
";

    #[test]
    fn first_search_filters_nearest_neighbors() {
        let store = EmbeddingStore::from_reader(VECTORS.as_bytes()).unwrap();
        let frequency = FrequencyTable::from_words(["cut"]);
        let thesaurus = EmptyThesaurus;
        let tagger = NounTagger;
        let filter = SimplicityFilter::new(&frequency, &thesaurus, &tagger);
        let source = VectorSource::new(&store, &filter);

        let original = Word::new("wound", "NOUN");
        let outcome = source.first_search(&original, "");
        let accepted: Vec<&str> = outcome.accepted.iter().map(|w| w.surface()).collect();
        // Nearest-first order, the original itself excluded.
        assert_eq!(accepted, vec!["cut", "gash", "sore", "engine"]);
    }

    #[test]
    fn first_search_of_unknown_word_is_empty() {
        let store = EmbeddingStore::from_reader(VECTORS.as_bytes()).unwrap();
        let frequency = FrequencyTable::from_words(["cut"]);
        let thesaurus = EmptyThesaurus;
        let tagger = NounTagger;
        let filter = SimplicityFilter::new(&frequency, &thesaurus, &tagger);
        let source = VectorSource::new(&store, &filter);

        let outcome = source.first_search(&Word::new("zzz", "NOUN"), "");
        assert!(outcome.accepted.is_empty());
        assert!(outcome.rejected.is_empty());
    }

    #[test]
    fn second_search_excludes_seeds_and_own_finds() {
        let store = EmbeddingStore::from_reader(VECTORS.as_bytes()).unwrap();
        let frequency = FrequencyTable::from_words(["cut"]);
        let thesaurus = EmptyThesaurus;
        let tagger = NounTagger;
        let filter = SimplicityFilter::new(&frequency, &thesaurus, &tagger);
        let source = VectorSource::new(&store, &filter);

        let original = Word::new("wound", "NOUN");
        let seeds = vec![Word::new("cut", "NOUN"), Word::new("gash", "NOUN")];
        let found = source.second_search(&seeds, &original);
        let surfaces: Vec<&str> = found.iter().map(|w| w.surface()).collect();

        // Neither seed reappears, and nothing is listed twice.
        assert!(!surfaces.contains(&"cut"));
        assert!(!surfaces.contains(&"gash"));
        let mut deduped = surfaces.clone();
        deduped.dedup();
        assert_eq!(surfaces, deduped);
        // The neighbors of the seeds (minus seeds) do show up.
        assert!(surfaces.contains(&"sore"));
    }
}
