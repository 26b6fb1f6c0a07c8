// The suggestion pipeline: per-sentence orchestration of tokenization,
// skip checks, first-stage search, optional second-stage expansion, the
// scoring pass, and final ranking.
//
// The pipeline borrows all of its resources; everything it touches is
// read-only except the suggestion table it builds. Backend selection is a
// closed set of enums parsed fail-fast from configuration strings.

use std::fmt;
use std::str::FromStr;

use plainword_core::word::Word;
use plainword_embed::EmbeddingStore;
use tracing::{debug, info};

use crate::expand::{self, ResolvedSecond};
use crate::filter::SimplicityFilter;
use crate::frequency::FrequencyTable;
use crate::scorer::{DistanceScorer, SimilarityModel, SimilarityScorer};
use crate::source::infill::MaskedInfill;
use crate::source::{CandidateSource, InfillSource, SearchOutcome, ThesaurusSource, VectorSource};
use crate::table::{SentenceEntry, SentenceSuggestions, SuggestionTable, WordSuggestions};
use crate::tag::PosTagger;
use crate::thesaurus::Thesaurus;
use crate::tokenize::Tokenizer;

/// Default shortlist length.
pub const DEFAULT_TOP_K: usize = 15;

/// First-stage search backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceKind {
    Vector,
    Thesaurus,
    Infill,
}

/// Second-stage search selection. `Infill` is accepted but silently runs
/// through the vector backend (see `expand::resolve`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SecondStage {
    None,
    Vector,
    Thesaurus,
    Infill,
}

/// Metric used for the final ranking of each accepted list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankMetric {
    /// Ascending embedding distance (lower is better).
    Distance,
    /// Descending semantic similarity (higher is better).
    Similarity,
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SourceKind::Vector => "VECTOR",
            SourceKind::Thesaurus => "THESAURUS",
            SourceKind::Infill => "INFILL",
        })
    }
}

impl fmt::Display for SecondStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SecondStage::None => "NONE",
            SecondStage::Vector => "VECTOR",
            SecondStage::Thesaurus => "THESAURUS",
            SecondStage::Infill => "INFILL",
        })
    }
}

impl fmt::Display for RankMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RankMetric::Distance => "DISTANCE",
            RankMetric::Similarity => "SIMILARITY",
        })
    }
}

impl FromStr for SourceKind {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vector" => Ok(SourceKind::Vector),
            "thesaurus" => Ok(SourceKind::Thesaurus),
            "infill" => Ok(SourceKind::Infill),
            _ => Err(PipelineError::UnknownSelection {
                role: "first-stage backend",
                name: s.to_string(),
            }),
        }
    }
}

impl FromStr for SecondStage {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" => Ok(SecondStage::None),
            "vector" => Ok(SecondStage::Vector),
            "thesaurus" => Ok(SecondStage::Thesaurus),
            "infill" => Ok(SecondStage::Infill),
            _ => Err(PipelineError::UnknownSelection {
                role: "second-stage backend",
                name: s.to_string(),
            }),
        }
    }
}

impl FromStr for RankMetric {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "distance" => Ok(RankMetric::Distance),
            "similarity" => Ok(RankMetric::Similarity),
            _ => Err(PipelineError::UnknownSelection {
                role: "ranking metric",
                name: s.to_string(),
            }),
        }
    }
}

/// Backend selection and shortlist length for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    pub first: SourceKind,
    pub second: SecondStage,
    pub sort_by: RankMetric,
    pub top_k: usize,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            first: SourceKind::Vector,
            second: SecondStage::None,
            sort_by: RankMetric::Similarity,
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// Configuration and resource errors. Lookup misses inside a search are
/// never errors; these fire only for unrecognized selections and for
/// resources the selected configuration requires but was not given.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("unknown {role}: {name}")]
    UnknownSelection { role: &'static str, name: String },

    #[error("the selected configuration requires {resource}, which is not available")]
    MissingResource { resource: &'static str },
}

/// The orchestrator. Construct with the always-required resources, attach
/// the optional ones, then `run`.
pub struct SuggestionPipeline<'a> {
    frequency: &'a FrequencyTable,
    thesaurus: &'a dyn Thesaurus,
    tagger: &'a dyn PosTagger,
    tokenizer: &'a dyn Tokenizer,
    embeddings: Option<&'a EmbeddingStore>,
    infill: Option<&'a dyn MaskedInfill>,
    similarity: Option<&'a dyn SimilarityModel>,
    options: PipelineOptions,
}

impl<'a> SuggestionPipeline<'a> {
    pub fn new(
        frequency: &'a FrequencyTable,
        thesaurus: &'a dyn Thesaurus,
        tagger: &'a dyn PosTagger,
        tokenizer: &'a dyn Tokenizer,
        options: PipelineOptions,
    ) -> Self {
        Self {
            frequency,
            thesaurus,
            tagger,
            tokenizer,
            embeddings: None,
            infill: None,
            similarity: None,
            options,
        }
    }

    pub fn with_embeddings(mut self, embeddings: &'a EmbeddingStore) -> Self {
        self.embeddings = Some(embeddings);
        self
    }

    pub fn with_infill(mut self, model: &'a dyn MaskedInfill) -> Self {
        self.infill = Some(model);
        self
    }

    pub fn with_similarity(mut self, model: &'a dyn SimilarityModel) -> Self {
        self.similarity = Some(model);
        self
    }

    pub fn options(&self) -> &PipelineOptions {
        &self.options
    }

    fn embeddings(&self) -> Result<&'a EmbeddingStore, PipelineError> {
        self.embeddings.ok_or(PipelineError::MissingResource {
            resource: "an embedding store",
        })
    }

    fn infill_model(&self) -> Result<&'a dyn MaskedInfill, PipelineError> {
        self.infill.ok_or(PipelineError::MissingResource {
            resource: "a masked-infill model",
        })
    }

    fn similarity_model(&self) -> Result<&'a dyn SimilarityModel, PipelineError> {
        self.similarity.ok_or(PipelineError::MissingResource {
            resource: "a similarity model",
        })
    }

    /// Check that every resource the selected configuration needs was
    /// attached, before any search starts.
    pub fn validate(&self) -> Result<(), PipelineError> {
        match self.options.first {
            SourceKind::Vector => {
                self.embeddings()?;
            }
            SourceKind::Thesaurus => {}
            SourceKind::Infill => {
                self.infill_model()?;
                self.similarity_model()?;
            }
        }
        if let Some(ResolvedSecond::Vector) =
            expand::resolve(self.options.first, self.options.second)
        {
            self.embeddings()?;
        }
        match self.options.sort_by {
            RankMetric::Distance => {
                self.embeddings()?;
            }
            RankMetric::Similarity => {
                self.similarity_model()?;
            }
        }
        Ok(())
    }

    /// Full run: search every sentence, then score, then rank.
    pub fn run(&self, sentences: &[String]) -> Result<SuggestionTable, PipelineError> {
        self.validate()?;
        let mut table = self.search(sentences)?;
        self.score(&mut table);
        self.rank(&mut table);
        let summary = table.summary();
        info!(
            sentences = sentences.len(),
            complex_words = summary.complex_words,
            words_with_suggestions = summary.words_with_suggestions,
            "pipeline run complete"
        );
        Ok(table)
    }

    /// Search pass: build the suggestion table for every sentence, in
    /// order. Candidates are unscored at this point.
    pub fn search(&self, sentences: &[String]) -> Result<SuggestionTable, PipelineError> {
        let filter = SimplicityFilter::new(self.frequency, self.thesaurus, self.tagger);
        let mut table = SuggestionTable::new();
        for (index, sentence) in sentences.iter().enumerate() {
            debug!(index = index + 1, sentence = sentence.as_str(), "searching");
            let block = self.search_sentence(&filter, sentence)?;
            table.sentences.push(block);
        }
        Ok(table)
    }

    fn search_sentence(
        &self,
        filter: &SimplicityFilter<'_>,
        sentence: &str,
    ) -> Result<SentenceSuggestions, PipelineError> {
        let mut entries = Vec::new();
        let mut seen: Vec<String> = Vec::new();

        for (surface, category) in self.tokenizer.tokenize(sentence) {
            let original = Word::new(&surface, &category);
            if seen.iter().any(|s| s == original.surface()) {
                continue; // duplicate within the sentence; first wins
            }
            seen.push(original.surface().to_string());

            if filter.should_skip(&original) {
                entries.push(SentenceEntry {
                    original,
                    suggestions: WordSuggestions::Skipped,
                });
                continue;
            }

            let mut outcome = self.first_search(filter, &original, sentence)?;
            match expand::resolve(self.options.first, self.options.second) {
                Some(ResolvedSecond::Vector) => {
                    let source = VectorSource::new(self.embeddings()?, filter);
                    expand::expand(&source, &mut outcome.accepted, &original);
                }
                Some(ResolvedSecond::Thesaurus) => {
                    let source = ThesaurusSource::new(self.thesaurus, filter);
                    expand::expand(&source, &mut outcome.accepted, &original);
                }
                None => {}
            }

            entries.push(SentenceEntry {
                original,
                suggestions: WordSuggestions::Candidates(outcome.into()),
            });
        }

        Ok(SentenceSuggestions {
            sentence: sentence.to_string(),
            entries,
        })
    }

    fn first_search(
        &self,
        filter: &SimplicityFilter<'_>,
        original: &Word,
        sentence: &str,
    ) -> Result<SearchOutcome, PipelineError> {
        Ok(match self.options.first {
            SourceKind::Vector => {
                VectorSource::new(self.embeddings()?, filter).first_search(original, sentence)
            }
            SourceKind::Thesaurus => {
                ThesaurusSource::new(self.thesaurus, filter).first_search(original, sentence)
            }
            SourceKind::Infill => {
                InfillSource::new(self.infill_model()?, self.similarity_model()?, filter)
                    .first_search(original, sentence)
            }
        })
    }

    /// Scoring pass: attach both metrics to every accepted word whose
    /// metric is still unset. Either scorer is skipped entirely when its
    /// backing resource was not attached.
    pub fn score(&self, table: &mut SuggestionTable) {
        let distance_scorer = self.embeddings.map(DistanceScorer::new);
        let similarity_scorer = self.similarity.map(SimilarityScorer::new);
        table.for_each_accepted_mut(|sentence, original, candidate| {
            if let Some(scorer) = &distance_scorer {
                scorer.score(original, candidate);
            }
            if let Some(scorer) = &similarity_scorer {
                scorer.score(sentence, original, candidate);
            }
        });
    }

    /// Ranking pass: stably sort each accepted list by the selected
    /// metric, so ties keep their discovery order.
    pub fn rank(&self, table: &mut SuggestionTable) {
        for sentence in &mut table.sentences {
            for entry in &mut sentence.entries {
                let WordSuggestions::Candidates(set) = &mut entry.suggestions else {
                    continue;
                };
                match self.options.sort_by {
                    RankMetric::Distance => set.accepted.sort_by(|a, b| {
                        let a = a.distance().unwrap_or(f64::INFINITY);
                        let b = b.distance().unwrap_or(f64::INFINITY);
                        a.total_cmp(&b)
                    }),
                    RankMetric::Similarity => set.accepted.sort_by(|a, b| {
                        let a = a.score().unwrap_or(f64::NEG_INFINITY);
                        let b = b.score().unwrap_or(f64::NEG_INFINITY);
                        b.total_cmp(&a)
                    }),
                }
            }
        }
    }
}
