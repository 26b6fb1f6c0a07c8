// Run output: the plain-text report, the `WORD,SUGGESTIONS` CSV used for
// downstream statistics, and a JSON rendering of the full table.

use std::io::{self, Write};

use serde::Serialize;

use crate::csv::quote_field;
use crate::pipeline::PipelineOptions;
use crate::table::{RunSummary, SKIP_NOTE, SuggestionTable, WordSuggestions};

const SEPARATOR: &str = "--------------------------------------------------";

/// Line written for a searched word that ended with no accepted candidate.
const NO_ALTERNATIVES: &str = "No simpler alternatives were found for this word";

/// Header context shared by all writers.
pub struct ReportMeta<'a> {
    pub timestamp: &'a str,
    pub options: &'a PipelineOptions,
}

/// Write the plain-text report and return the run counters.
pub fn write_text(
    out: &mut impl Write,
    meta: &ReportMeta<'_>,
    table: &SuggestionTable,
) -> io::Result<RunSummary> {
    writeln!(out, "TIMESTAMP : {}", meta.timestamp)?;
    writeln!(
        out,
        "SEARCH METHODS : {}-{}",
        meta.options.first, meta.options.second
    )?;
    writeln!(out, "SORTED BY : {}", meta.options.sort_by)?;
    writeln!(out, "{SEPARATOR}")?;

    for block in &table.sentences {
        writeln!(out, "{}", block.sentence)?;
        for entry in &block.entries {
            writeln!(
                out,
                "[{} | {}]",
                entry.original.surface(),
                entry.original.category()
            )?;
            match &entry.suggestions {
                WordSuggestions::Skipped => writeln!(out, "{SKIP_NOTE}")?,
                WordSuggestions::Candidates(set) if set.accepted.is_empty() => {
                    writeln!(out, "{NO_ALTERNATIVES}")?
                }
                WordSuggestions::Candidates(set) => {
                    for word in set.accepted.iter().take(meta.options.top_k) {
                        writeln!(out, "{word}")?;
                    }
                }
            }
        }
        writeln!(out, "{SEPARATOR}")?;
    }

    let summary = table.summary();
    writeln!(
        out,
        "{} words were identified as complex.",
        summary.complex_words
    )?;
    writeln!(
        out,
        "Alternatives were found for {} complex words.",
        summary.words_with_suggestions
    )?;
    Ok(summary)
}

/// Write the `WORD,SUGGESTIONS` records: one row per searched word with a
/// non-empty shortlist, the shortlist comma-joined in rank order.
pub fn write_csv(out: &mut impl Write, table: &SuggestionTable, top_k: usize) -> io::Result<()> {
    writeln!(out, "WORD,SUGGESTIONS")?;
    for entry in table.sentences.iter().flat_map(|s| s.entries.iter()) {
        let WordSuggestions::Candidates(set) = &entry.suggestions else {
            continue;
        };
        if set.accepted.is_empty() {
            continue;
        }
        let shortlist: Vec<&str> = set
            .accepted
            .iter()
            .take(top_k)
            .map(|w| w.surface())
            .collect();
        writeln!(
            out,
            "{},{}",
            quote_field(entry.original.surface()),
            quote_field(&shortlist.join(","))
        )?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// JSON rendering
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct JsonCandidate {
    pub word: String,
    pub category: String,
    pub score: Option<f64>,
    pub distance: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct JsonWordEntry {
    pub word: String,
    pub category: String,
    pub skipped: bool,
    pub suggestions: Vec<JsonCandidate>,
}

#[derive(Debug, Serialize)]
pub struct JsonSentence {
    pub sentence: String,
    pub words: Vec<JsonWordEntry>,
}

#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub timestamp: String,
    pub search: String,
    pub sorted_by: String,
    pub complex_words: usize,
    pub words_with_suggestions: usize,
    pub sentences: Vec<JsonSentence>,
}

/// Build the JSON form of a run: shortlists truncated to `top_k`, skipped
/// words marked rather than given placeholder suggestions.
pub fn json_report(meta: &ReportMeta<'_>, table: &SuggestionTable) -> JsonReport {
    let summary = table.summary();
    let sentences = table
        .sentences
        .iter()
        .map(|block| JsonSentence {
            sentence: block.sentence.clone(),
            words: block
                .entries
                .iter()
                .map(|entry| {
                    let (skipped, suggestions) = match &entry.suggestions {
                        WordSuggestions::Skipped => (true, Vec::new()),
                        WordSuggestions::Candidates(set) => (
                            false,
                            set.accepted
                                .iter()
                                .take(meta.options.top_k)
                                .map(|w| JsonCandidate {
                                    word: w.surface().to_string(),
                                    category: w.category().to_string(),
                                    score: w.score(),
                                    distance: w.distance(),
                                })
                                .collect(),
                        ),
                    };
                    JsonWordEntry {
                        word: entry.original.surface().to_string(),
                        category: entry.original.category().to_string(),
                        skipped,
                        suggestions,
                    }
                })
                .collect(),
        })
        .collect();

    JsonReport {
        timestamp: meta.timestamp.to_string(),
        search: format!("{}-{}", meta.options.first, meta.options.second),
        sorted_by: meta.options.sort_by.to_string(),
        complex_words: summary.complex_words,
        words_with_suggestions: summary.words_with_suggestions,
        sentences,
    }
}

/// Write the JSON report, pretty-printed.
pub fn write_json(
    out: &mut impl Write,
    meta: &ReportMeta<'_>,
    table: &SuggestionTable,
) -> io::Result<()> {
    let report = json_report(meta, table);
    serde_json::to_writer_pretty(out, &report).map_err(io::Error::other)
}
