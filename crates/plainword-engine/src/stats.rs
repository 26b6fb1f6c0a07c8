// Statistics over annotated result records.
//
// After a run, a reviewer annotates the `WORD,SUGGESTIONS` CSV by hand:
// each shortlisted suggestion gets a trailing quality letter (`I` invalid,
// `V` valid, `G` good), and a word may get a trailing ` M` (better treated
// as a multi-word phrase) or ` N` (no real replacement exists) marker. This
// module parses those records and aggregates run-level quality statistics.

use std::io::{self, BufRead, BufReader, Read, Write};

use crate::csv::split_line;

/// One annotated word row: the base word, its optional M/N marker, and the
/// trailing quality letter of each suggestion in shortlist order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    pub word: String,
    pub marker: Option<char>,
    pub tags: Vec<char>,
}

/// Parse annotated records from CSV data with a `WORD,SUGGESTIONS` header.
pub fn parse_records(reader: impl Read) -> io::Result<Vec<WordRecord>> {
    let mut records = Vec::new();
    let mut lines = BufReader::new(reader).lines();

    // Header row.
    if lines.next().transpose()?.is_none() {
        return Ok(records);
    }

    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_line(&line);
        let (Some(word), Some(suggestions)) = (fields.first(), fields.get(1)) else {
            continue;
        };

        let (word, marker) = split_marker(word.trim());
        let tags = suggestions
            .split(',')
            .filter_map(|s| s.trim_end().chars().next_back())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        records.push(WordRecord {
            word,
            marker,
            tags,
        });
    }
    Ok(records)
}

/// Split a trailing uppercase ` M` / ` N` marker off an annotated word.
/// Record words are lowercased by the report writer, so an uppercase final
/// letter can only be the annotator's marker.
fn split_marker(word: &str) -> (String, Option<char>) {
    let mut chars = word.chars();
    match chars.next_back() {
        Some(marker @ ('M' | 'N')) => {
            let base: String = chars.collect();
            (base.trim_end().to_string(), Some(marker))
        }
        _ => (word.to_string(), None),
    }
}

/// Aggregated quality statistics for one annotated run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct OverallStats {
    pub total: usize,
    pub no_good_suggestions: usize,
    pub top5_has_good: usize,
    pub top5_has_valid: usize,
    pub top1_is_good: usize,
    pub top1_is_valid: usize,
    pub multi_phrase_words: Vec<String>,
    pub no_replacement_words: Vec<String>,
}

/// Aggregate annotated records into overall statistics.
pub fn analyze(records: &[WordRecord]) -> OverallStats {
    let mut stats = OverallStats {
        total: records.len(),
        ..OverallStats::default()
    };

    for record in records {
        let top5: Vec<char> = record.tags.iter().copied().take(5).collect();
        let good = record.tags.iter().filter(|&&t| t == 'G').count();

        if good == 0 {
            stats.no_good_suggestions += 1;
        }
        match top5.first() {
            Some('G') => stats.top1_is_good += 1,
            Some('V') => stats.top1_is_valid += 1,
            _ => {}
        }
        if top5.contains(&'G') {
            stats.top5_has_good += 1;
        }
        if top5.contains(&'V') {
            stats.top5_has_valid += 1;
        }

        match record.marker {
            Some('M') => stats.multi_phrase_words.push(record.word.clone()),
            Some('N') => stats.no_replacement_words.push(record.word.clone()),
            _ => {}
        }
    }
    stats
}

/// Append one run's statistics block to a stats log.
pub fn write_stats(out: &mut impl Write, method: &str, stats: &OverallStats) -> io::Result<()> {
    let total = stats.total;
    writeln!(out, "[RECORDING RESULTS FOR {method} SEARCH]")?;
    writeln!(
        out,
        "Overall, {total} words were identified as complex and had alternative words suggested."
    )?;
    writeln!(
        out,
        "{} / {total} words had no good suggestions at all.",
        stats.no_good_suggestions
    )?;
    writeln!(
        out,
        "{} / {total} words had a good suggestion in the Top 5.",
        stats.top5_has_good
    )?;
    writeln!(
        out,
        "{} / {total} words had a good suggestion as the highest suggestion.",
        stats.top1_is_good
    )?;
    writeln!(
        out,
        "{} / {total} words had a valid suggestion in the Top 5.",
        stats.top5_has_valid
    )?;
    writeln!(
        out,
        "{} / {total} words had a valid suggestion as the highest suggestion.",
        stats.top1_is_valid
    )?;
    writeln!(out)?;

    writeln!(
        out,
        "{} words are better considered as multi-word phrases:",
        stats.multi_phrase_words.len()
    )?;
    for word in &stats.multi_phrase_words {
        writeln!(out, "- {word}")?;
    }
    writeln!(out)?;

    writeln!(
        out,
        "{} words don't have an alternative:",
        stats.no_replacement_words.len()
    )?;
    for word in &stats.no_replacement_words {
        writeln!(out, "- {word}")?;
    }
    writeln!(out, "{}", "-".repeat(100))?;
    Ok(())
}
