// Word frequency/commonness resource.
//
// The table maps lowercased lemmas to a commonness rank and is read-only
// after loading. Membership alone decides "common" in the filter; the rank
// is kept for diagnostics and the nearest-neighbor explorer.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use hashbrown::HashMap;

use crate::csv::split_line;

/// Header name of the lemma column.
const LEMMA_COLUMN: &str = "Lemma";

/// Header name of the rank column.
const RANK_COLUMN: &str = "SFI Rank";

/// Errors raised while loading a frequency table.
#[derive(Debug, thiserror::Error)]
pub enum FrequencyError {
    #[error("failed to read frequency data: {0}")]
    Io(#[from] std::io::Error),

    #[error("frequency data has no header row")]
    MissingHeader,

    #[error("frequency data is missing the `{0}` column")]
    MissingColumn(&'static str),
}

/// Mapping from lowercased lemma to commonness rank.
pub struct FrequencyTable {
    ranks: HashMap<String, u32>,
}

impl FrequencyTable {
    /// Parse a frequency table from CSV data with a header row. The lemma
    /// and rank columns are located by header name; data rows that do not
    /// parse are skipped.
    pub fn from_reader(reader: impl Read) -> Result<Self, FrequencyError> {
        let mut lines = BufReader::new(reader).lines();

        let header = match lines.next() {
            Some(line) => line?,
            None => return Err(FrequencyError::MissingHeader),
        };
        let columns = split_line(&header);
        let find = |name: &'static str| {
            columns
                .iter()
                .position(|c| c.trim().eq_ignore_ascii_case(name))
                .ok_or(FrequencyError::MissingColumn(name))
        };
        let lemma_idx = find(LEMMA_COLUMN)?;
        let rank_idx = find(RANK_COLUMN)?;

        let mut ranks = HashMap::new();
        for line in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let fields = split_line(&line);
            let (Some(lemma), Some(rank)) = (fields.get(lemma_idx), fields.get(rank_idx)) else {
                continue;
            };
            let Ok(rank) = rank.trim().parse::<f64>() else {
                continue;
            };
            let lemma = lemma.trim().to_lowercase();
            if lemma.is_empty() {
                continue;
            }
            ranks.entry(lemma).or_insert(rank as u32);
        }

        Ok(Self { ranks })
    }

    /// Parse a frequency table from a CSV file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, FrequencyError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Build a table directly from lemmas; ranks are assigned by position.
    /// Mostly useful in tests and small tools.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ranks = words
            .into_iter()
            .enumerate()
            .map(|(i, w)| (w.as_ref().to_lowercase(), i as u32 + 1))
            .collect();
        Self { ranks }
    }

    /// True if the lemma is listed, i.e. the word counts as common.
    /// Lookup is by lowercased form.
    pub fn contains(&self, lemma: &str) -> bool {
        self.ranks.contains_key(lemma.to_lowercase().as_str())
    }

    /// Commonness rank of a lemma, if listed.
    pub fn rank(&self, lemma: &str) -> Option<u32> {
        self.ranks.get(lemma.to_lowercase().as_str()).copied()
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}
