// plainword-engine: the lexical simplification pipeline.
//
// Turns (word, sentence) pairs into ordered lists of validated simpler
// substitute words. The pipeline fans out to independent candidate sources
// (embedding nearest-neighbor, thesaurus, masked infill), applies one
// composite acceptance gate everywhere, optionally expands accepted
// candidates with a second-stage search, attaches two similarity metrics,
// and ranks each word's accepted list by a caller-chosen metric.
//
// Architecture:
//   - `frequency`, `syllable`, `thesaurus`, `tag`, `tokenize`: lexical
//     resources and collaborator traits with file-backed/heuristic impls
//   - `filter`: the simplicity filter and composite acceptance gate
//   - `source`: the three candidate sources behind one trait
//   - `expand`: second-stage backend resolution
//   - `scorer`: embedding-distance and sentence-similarity scorers
//   - `table` + `pipeline`: the per-run suggestion table and orchestrator
//   - `report` + `stats`: run output and annotated-result statistics

pub mod csv;
pub mod expand;
pub mod filter;
pub mod frequency;
pub mod pipeline;
pub mod report;
pub mod scorer;
pub mod source;
pub mod stats;
pub mod syllable;
pub mod tag;
pub mod table;
pub mod text;
pub mod thesaurus;
pub mod tokenize;

pub use filter::SimplicityFilter;
pub use frequency::FrequencyTable;
pub use pipeline::{
    PipelineError, PipelineOptions, RankMetric, SecondStage, SourceKind, SuggestionPipeline,
};
pub use scorer::SimilarityModel;
pub use source::infill::MaskedInfill;
pub use table::{CandidateSet, SuggestionTable, WordSuggestions};
pub use thesaurus::{FileThesaurus, Sense, Thesaurus};
pub use tokenize::{SimpleTokenizer, Tokenizer};
