// Thesaurus collaborator: sense lookup and the fixed mapping from raw
// thesaurus part-of-speech letters to the coarse tag vocabulary.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use hashbrown::HashMap;

use plainword_core::tags;

/// One sense of a word: the raw part-of-speech letter used by the
/// thesaurus (`n`, `v`, `a`, `s`, `r`, ...) and the lemmas of the sense.
#[derive(Debug, Clone)]
pub struct Sense {
    pub pos: char,
    pub lemmas: Vec<String>,
}

/// Sense lookup interface. Absence of a word is a normal outcome and
/// yields an empty list, never an error.
pub trait Thesaurus {
    fn senses(&self, word: &str) -> Vec<Sense>;
}

/// Map a raw thesaurus part-of-speech letter to a coarse tag.
pub fn map_pos(pos: char) -> &'static str {
    match pos.to_ascii_lowercase() {
        'n' => tags::NOUN,
        'v' => tags::VERB,
        'a' | 's' => tags::ADJ,
        'r' => tags::ADV,
        _ => tags::UNKNOWN,
    }
}

/// Coarse tags of every sense of `word`, in sense order. Duplicates are
/// kept; callers only test membership.
pub fn tags_for(thesaurus: &dyn Thesaurus, word: &str) -> Vec<String> {
    thesaurus
        .senses(word)
        .iter()
        .map(|sense| map_pos(sense.pos).to_string())
        .collect()
}

/// Errors raised while loading a sense file.
#[derive(Debug, thiserror::Error)]
pub enum ThesaurusError {
    #[error("failed to read thesaurus data: {0}")]
    Io(#[from] std::io::Error),

    #[error("no senses found in thesaurus data")]
    Empty,
}

/// File-backed thesaurus.
///
/// The sense file is tab-separated, one sense per line:
/// `word<TAB>pos-letter<TAB>lemma,lemma,...`. Lines starting with `#` and
/// blank lines are ignored. Multiple lines for one word accumulate senses
/// in file order; lookup is by lowercased head word.
pub struct FileThesaurus {
    senses: HashMap<String, Vec<Sense>>,
}

impl FileThesaurus {
    pub fn from_reader(reader: impl Read) -> Result<Self, ThesaurusError> {
        let mut senses: HashMap<String, Vec<Sense>> = HashMap::new();

        for line in BufReader::new(reader).lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let mut fields = trimmed.split('\t');
            let (Some(word), Some(pos), Some(lemmas)) =
                (fields.next(), fields.next(), fields.next())
            else {
                continue;
            };
            let Some(pos) = pos.trim().chars().next() else {
                continue;
            };
            let lemmas: Vec<String> = lemmas
                .split(',')
                .map(|l| l.trim().to_string())
                .filter(|l| !l.is_empty())
                .collect();
            if lemmas.is_empty() {
                continue;
            }
            senses
                .entry(word.trim().to_lowercase())
                .or_default()
                .push(Sense { pos, lemmas });
        }

        if senses.is_empty() {
            return Err(ThesaurusError::Empty);
        }
        Ok(Self { senses })
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ThesaurusError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Number of distinct head words.
    pub fn len(&self) -> usize {
        self.senses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.senses.is_empty()
    }
}

impl Thesaurus for FileThesaurus {
    fn senses(&self, word: &str) -> Vec<Sense> {
        self.senses
            .get(word.to_lowercase().as_str())
            .cloned()
            .unwrap_or_default()
    }
}
