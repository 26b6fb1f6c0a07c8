// End-to-end pipeline scenarios with in-memory resources and mock models.

use plainword_core::word::{UNSCOREABLE_DISTANCE, Word};
use plainword_embed::EmbeddingStore;
use plainword_engine::filter::SimplicityFilter;
use plainword_engine::frequency::FrequencyTable;
use plainword_engine::pipeline::{
    PipelineError, PipelineOptions, RankMetric, SecondStage, SourceKind, SuggestionPipeline,
};
use plainword_engine::scorer::SimilarityModel;
use plainword_engine::source::{CandidateSource, ThesaurusSource};
use plainword_engine::table::WordSuggestions;
use plainword_engine::tag::LexiconTagger;
use plainword_engine::thesaurus::FileThesaurus;
use plainword_engine::tokenize::SimpleTokenizer;

const SENTENCE: &str = "The girl had an abrasion on her knee.";

const SENSES: &str = "\
abrasion\tn\tscratch,scrape,excoriation
abrasion\tn\tgraze
scratch\tn\tscrape,mark
scrape\tn\tscratch,graze
";

const VECTORS: &str = "\
abrasion 0.0 0.0
scratch 1.0 0.0
scrape 2.0 0.0
mark 3.0 0.0
wound 0.5 0.5
";

fn frequency() -> FrequencyTable {
    FrequencyTable::from_words(["the", "girl", "have", "had", "knee", "mark"])
}

fn thesaurus() -> FileThesaurus {
    FileThesaurus::from_reader(SENSES.as_bytes()).unwrap()
}

fn embeddings() -> EmbeddingStore {
    EmbeddingStore::from_reader(VECTORS.as_bytes()).unwrap()
}

/// Deterministic stand-in for a sentence-similarity model: shorter
/// substituted sentences score higher, identical sentences score 1.
struct LengthSimilarity;

impl SimilarityModel for LengthSimilarity {
    fn similarity(&self, reference: &str, candidate_sentence: &str) -> f64 {
        if reference == candidate_sentence {
            return 1.0;
        }
        1.0 - 0.001 * candidate_sentence.chars().count() as f64
    }
}

fn sentences() -> Vec<String> {
    vec![SENTENCE.to_string()]
}

#[test]
fn thesaurus_run_suggests_noun_synonyms_for_abrasion() {
    let frequency = frequency();
    let thesaurus = thesaurus();
    let embeddings = embeddings();
    let tagger = LexiconTagger::new(&thesaurus);
    let tokenizer = SimpleTokenizer::new(&tagger);
    let options = PipelineOptions {
        first: SourceKind::Thesaurus,
        second: SecondStage::None,
        sort_by: RankMetric::Distance,
        top_k: 15,
    };
    let pipeline = SuggestionPipeline::new(&frequency, &thesaurus, &tagger, &tokenizer, options)
        .with_embeddings(&embeddings);

    let table = pipeline.run(&sentences()).unwrap();
    assert_eq!(table.sentences.len(), 1);

    let entry = table.sentences[0]
        .entries
        .iter()
        .find(|e| e.original.surface() == "abrasion")
        .expect("abrasion should be present");
    let WordSuggestions::Candidates(set) = &entry.suggestions else {
        panic!("abrasion should be searched, not skipped");
    };

    assert!(!set.accepted.is_empty());
    for word in &set.accepted {
        assert_eq!(word.category(), "NOUN");
        assert_ne!(word.surface(), "abrasion");
    }
    let surfaces: Vec<&str> = set.accepted.iter().map(|w| w.surface()).collect();
    assert!(surfaces.contains(&"scratch"));
    assert!(surfaces.contains(&"scrape"));
    // Too long, too many syllables, not common: fails the simplicity bar.
    assert!(set.rejected.iter().any(|w| w.surface() == "excoriation"));
    assert!(set.rejected.iter().all(|w| w.category() == "-"));
}

#[test]
fn function_words_always_skip() {
    let frequency = frequency();
    let thesaurus = thesaurus();
    let embeddings = embeddings();
    let tagger = LexiconTagger::new(&thesaurus);
    let tokenizer = SimpleTokenizer::new(&tagger);

    for first in [SourceKind::Thesaurus, SourceKind::Vector] {
        let options = PipelineOptions {
            first,
            second: SecondStage::None,
            sort_by: RankMetric::Distance,
            top_k: 15,
        };
        let pipeline =
            SuggestionPipeline::new(&frequency, &thesaurus, &tagger, &tokenizer, options)
                .with_embeddings(&embeddings);
        let table = pipeline.run(&sentences()).unwrap();

        let entry = &table.sentences[0].entries[0];
        assert_eq!(entry.original.surface(), "the");
        assert!(matches!(entry.suggestions, WordSuggestions::Skipped));
    }
}

#[test]
fn out_of_vocabulary_candidate_gets_the_sentinel_distance() {
    let frequency = frequency();
    let thesaurus = thesaurus();
    let embeddings = embeddings();
    let tagger = LexiconTagger::new(&thesaurus);
    let tokenizer = SimpleTokenizer::new(&tagger);
    let options = PipelineOptions {
        first: SourceKind::Thesaurus,
        second: SecondStage::None,
        sort_by: RankMetric::Distance,
        top_k: 15,
    };
    let pipeline = SuggestionPipeline::new(&frequency, &thesaurus, &tagger, &tokenizer, options)
        .with_embeddings(&embeddings);

    let table = pipeline.run(&sentences()).unwrap();
    let entry = table.sentences[0]
        .entries
        .iter()
        .find(|e| e.original.surface() == "abrasion")
        .unwrap();
    let WordSuggestions::Candidates(set) = &entry.suggestions else {
        panic!("expected candidates");
    };

    // "graze" has no vector; its distance is the sentinel, and scoring of
    // the other candidates still happened.
    let graze = set.accepted.iter().find(|w| w.surface() == "graze").unwrap();
    assert_eq!(graze.distance(), Some(UNSCOREABLE_DISTANCE));
    let scratch = set
        .accepted
        .iter()
        .find(|w| w.surface() == "scratch")
        .unwrap();
    assert_eq!(scratch.distance(), Some(1.0));
}

#[test]
fn distance_ranking_is_non_decreasing() {
    let frequency = frequency();
    let thesaurus = thesaurus();
    let embeddings = embeddings();
    let tagger = LexiconTagger::new(&thesaurus);
    let tokenizer = SimpleTokenizer::new(&tagger);
    let options = PipelineOptions {
        first: SourceKind::Thesaurus,
        second: SecondStage::None,
        sort_by: RankMetric::Distance,
        top_k: 15,
    };
    let pipeline = SuggestionPipeline::new(&frequency, &thesaurus, &tagger, &tokenizer, options)
        .with_embeddings(&embeddings);

    let table = pipeline.run(&sentences()).unwrap();
    for entry in &table.sentences[0].entries {
        let WordSuggestions::Candidates(set) = &entry.suggestions else {
            continue;
        };
        let distances: Vec<f64> = set.accepted.iter().filter_map(|w| w.distance()).collect();
        assert_eq!(distances.len(), set.accepted.len());
        for pair in distances.windows(2) {
            assert!(pair[0] <= pair[1], "distances must be non-decreasing");
        }
    }
}

#[test]
fn similarity_ranking_is_non_increasing() {
    let frequency = frequency();
    let thesaurus = thesaurus();
    let tagger = LexiconTagger::new(&thesaurus);
    let tokenizer = SimpleTokenizer::new(&tagger);
    let similarity = LengthSimilarity;
    let options = PipelineOptions {
        first: SourceKind::Thesaurus,
        second: SecondStage::None,
        sort_by: RankMetric::Similarity,
        top_k: 15,
    };
    let pipeline = SuggestionPipeline::new(&frequency, &thesaurus, &tagger, &tokenizer, options)
        .with_similarity(&similarity);

    let table = pipeline.run(&sentences()).unwrap();
    for entry in &table.sentences[0].entries {
        let WordSuggestions::Candidates(set) = &entry.suggestions else {
            continue;
        };
        let scores: Vec<f64> = set.accepted.iter().filter_map(|w| w.score()).collect();
        assert_eq!(scores.len(), set.accepted.len());
        for pair in scores.windows(2) {
            assert!(pair[0] >= pair[1], "scores must be non-increasing");
        }
    }
}

#[test]
fn second_stage_never_duplicates_first_stage_results() {
    let frequency = frequency();
    let thesaurus = thesaurus();
    let embeddings = embeddings();
    let tagger = LexiconTagger::new(&thesaurus);
    let tokenizer = SimpleTokenizer::new(&tagger);
    let options = PipelineOptions {
        first: SourceKind::Thesaurus,
        second: SecondStage::Thesaurus,
        sort_by: RankMetric::Distance,
        top_k: 15,
    };
    let pipeline = SuggestionPipeline::new(&frequency, &thesaurus, &tagger, &tokenizer, options)
        .with_embeddings(&embeddings);

    let table = pipeline.run(&sentences()).unwrap();
    for entry in &table.sentences[0].entries {
        let WordSuggestions::Candidates(set) = &entry.suggestions else {
            continue;
        };
        let mut surfaces: Vec<&str> = set.accepted.iter().map(|w| w.surface()).collect();
        let before = surfaces.len();
        surfaces.sort_unstable();
        surfaces.dedup();
        assert_eq!(surfaces.len(), before, "accepted list must be dedup'd");
    }
}

#[test]
fn second_search_respects_the_seed_list() {
    let frequency = frequency();
    let thesaurus = thesaurus();
    let tagger = LexiconTagger::new(&thesaurus);
    let filter = SimplicityFilter::new(&frequency, &thesaurus, &tagger);
    let source = ThesaurusSource::new(&thesaurus, &filter);

    let original = Word::new("abrasion", "NOUN");
    let seeds = vec![Word::new("scratch", "NOUN"), Word::new("scrape", "NOUN")];
    let found = source.second_search(&seeds, &original);
    for word in &found {
        assert!(
            !seeds.iter().any(|s| s.surface() == word.surface()),
            "second search must not return seed words"
        );
    }
}

#[test]
fn scoring_twice_changes_nothing() {
    let frequency = frequency();
    let thesaurus = thesaurus();
    let embeddings = embeddings();
    let tagger = LexiconTagger::new(&thesaurus);
    let tokenizer = SimpleTokenizer::new(&tagger);
    let options = PipelineOptions {
        first: SourceKind::Thesaurus,
        second: SecondStage::None,
        sort_by: RankMetric::Distance,
        top_k: 15,
    };
    let pipeline = SuggestionPipeline::new(&frequency, &thesaurus, &tagger, &tokenizer, options)
        .with_embeddings(&embeddings);

    let mut table = pipeline.search(&sentences()).unwrap();
    pipeline.score(&mut table);
    let first_pass: Vec<Option<f64>> = collect_distances(&table);
    pipeline.score(&mut table);
    let second_pass: Vec<Option<f64>> = collect_distances(&table);
    assert_eq!(first_pass, second_pass);
}

fn collect_distances(table: &plainword_engine::table::SuggestionTable) -> Vec<Option<f64>> {
    table
        .sentences
        .iter()
        .flat_map(|s| s.entries.iter())
        .filter_map(|e| match &e.suggestions {
            WordSuggestions::Candidates(set) => Some(set.accepted.iter().map(|w| w.distance())),
            WordSuggestions::Skipped => None,
        })
        .flatten()
        .collect()
}

#[test]
fn duplicate_words_within_a_sentence_merge() {
    let frequency = frequency();
    let thesaurus = thesaurus();
    let embeddings = embeddings();
    let tagger = LexiconTagger::new(&thesaurus);
    let tokenizer = SimpleTokenizer::new(&tagger);
    let options = PipelineOptions {
        first: SourceKind::Thesaurus,
        second: SecondStage::None,
        sort_by: RankMetric::Distance,
        top_k: 15,
    };
    let pipeline = SuggestionPipeline::new(&frequency, &thesaurus, &tagger, &tokenizer, options)
        .with_embeddings(&embeddings);

    let table = pipeline
        .run(&["An abrasion is an abrasion.".to_string()])
        .unwrap();
    let abrasions = table.sentences[0]
        .entries
        .iter()
        .filter(|e| e.original.surface() == "abrasion")
        .count();
    assert_eq!(abrasions, 1);
}

#[test]
fn vector_backend_without_embeddings_is_a_configuration_error() {
    let frequency = frequency();
    let thesaurus = thesaurus();
    let tagger = LexiconTagger::new(&thesaurus);
    let tokenizer = SimpleTokenizer::new(&tagger);
    let options = PipelineOptions {
        first: SourceKind::Vector,
        second: SecondStage::None,
        sort_by: RankMetric::Distance,
        top_k: 15,
    };
    let pipeline = SuggestionPipeline::new(&frequency, &thesaurus, &tagger, &tokenizer, options);

    let result = pipeline.run(&sentences());
    assert!(matches!(
        result,
        Err(PipelineError::MissingResource { .. })
    ));
}

#[test]
fn infill_first_stage_expands_through_the_vector_backend() {
    use plainword_engine::source::infill::{InfillFill, MaskedInfill};

    /// Fills any mask with "scratch".
    struct ScratchInfill;

    impl MaskedInfill for ScratchInfill {
        fn fill(&self, masked_sentence: &str) -> Vec<InfillFill> {
            vec![InfillFill {
                token: "scratch".to_string(),
                sequence: masked_sentence.replace("[MASK]", "scratch"),
            }]
        }
    }

    let frequency = frequency();
    let thesaurus = thesaurus();
    let embeddings = embeddings();
    let tagger = LexiconTagger::new(&thesaurus);
    let tokenizer = SimpleTokenizer::new(&tagger);
    let infill = ScratchInfill;
    let similarity = LengthSimilarity;
    // Second stage asks for the thesaurus, but an infill first stage
    // always expands through the vector backend.
    let options = PipelineOptions {
        first: SourceKind::Infill,
        second: SecondStage::Thesaurus,
        sort_by: RankMetric::Similarity,
        top_k: 15,
    };
    let pipeline = SuggestionPipeline::new(&frequency, &thesaurus, &tagger, &tokenizer, options)
        .with_embeddings(&embeddings)
        .with_infill(&infill)
        .with_similarity(&similarity);

    let table = pipeline.run(&sentences()).unwrap();
    let entry = table.sentences[0]
        .entries
        .iter()
        .find(|e| e.original.surface() == "abrasion")
        .unwrap();
    let WordSuggestions::Candidates(set) = &entry.suggestions else {
        panic!("expected candidates");
    };

    let surfaces: Vec<&str> = set.accepted.iter().map(|w| w.surface()).collect();
    assert!(surfaces.contains(&"scratch")); // infill result
    assert!(surfaces.contains(&"scrape")); // vector neighbor of "scratch"
    // Expansion never reintroduces a surface already present.
    let mut deduped = surfaces.clone();
    deduped.sort_unstable();
    deduped.dedup();
    assert_eq!(deduped.len(), surfaces.len());
    // Every accepted word carries both metrics after the scoring pass.
    for word in &set.accepted {
        assert!(word.score().is_some());
        assert!(word.distance().is_some());
    }
}

#[test]
fn run_summary_counts_complex_words() {
    let frequency = frequency();
    let thesaurus = thesaurus();
    let embeddings = embeddings();
    let tagger = LexiconTagger::new(&thesaurus);
    let tokenizer = SimpleTokenizer::new(&tagger);
    let options = PipelineOptions {
        first: SourceKind::Thesaurus,
        second: SecondStage::None,
        sort_by: RankMetric::Distance,
        top_k: 15,
    };
    let pipeline = SuggestionPipeline::new(&frequency, &thesaurus, &tagger, &tokenizer, options)
        .with_embeddings(&embeddings);

    let table = pipeline.run(&sentences()).unwrap();
    let summary = table.summary();
    // "abrasion" is the only searched word in the sample sentence; the
    // rest are function words, common words, or monosyllables.
    assert_eq!(summary.complex_words, 1);
    assert_eq!(summary.words_with_suggestions, 1);
}
