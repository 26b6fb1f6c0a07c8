// Embedding store: parses the text vector format (one `word v1 v2 ... vd`
// entry per line) into parallel word/vector tables with a surface-form
// lookup map.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use hashbrown::HashMap;

/// Errors raised while building an `EmbeddingStore`.
#[derive(Debug, thiserror::Error)]
pub enum EmbedError {
    /// The underlying reader failed.
    #[error("failed to read embedding data: {0}")]
    Io(#[from] std::io::Error),

    /// The input contained no line that parsed as a vector entry.
    #[error("no usable vectors found in embedding data")]
    NoVectors,
}

/// An in-memory embedding table.
///
/// The vector dimension is fixed by the first line that parses cleanly.
/// Later lines with a different arity or non-numeric components are skipped
/// (the count is kept for diagnostics), and only the first occurrence of a
/// word is stored. Insertion order is preserved so that distance ties in
/// the nearest-neighbor search resolve deterministically.
pub struct EmbeddingStore {
    words: Vec<String>,
    vectors: Vec<Vec<f32>>,
    by_surface: HashMap<String, usize>,
    dim: usize,
    skipped: usize,
}

impl EmbeddingStore {
    /// Parse an embedding table from a reader over the text vector format.
    pub fn from_reader(reader: impl Read) -> Result<Self, EmbedError> {
        let mut words = Vec::new();
        let mut vectors: Vec<Vec<f32>> = Vec::new();
        let mut by_surface: HashMap<String, usize> = HashMap::new();
        let mut dim = 0usize;
        let mut skipped = 0usize;

        for line in BufReader::new(reader).lines() {
            let line = line?;
            let mut parts = line.split_whitespace();
            let Some(word) = parts.next() else {
                continue; // blank line
            };
            let components: Option<Vec<f32>> = parts.map(|p| p.parse::<f32>().ok()).collect();
            let vector = match components {
                Some(v) if !v.is_empty() => v,
                _ => {
                    skipped += 1;
                    continue;
                }
            };

            if dim == 0 {
                dim = vector.len();
            } else if vector.len() != dim {
                skipped += 1;
                continue;
            }

            if by_surface.contains_key(word) {
                skipped += 1;
                continue; // first occurrence wins
            }
            by_surface.insert(word.to_string(), words.len());
            words.push(word.to_string());
            vectors.push(vector);
        }

        if words.is_empty() {
            return Err(EmbedError::NoVectors);
        }

        Ok(Self {
            words,
            vectors,
            by_surface,
            dim,
            skipped,
        })
    }

    /// Parse an embedding table from a file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, EmbedError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Look up the vector for a word: exact surface form first, then the
    /// lowercased form. Returns `None` for out-of-vocabulary words.
    pub fn vector(&self, word: &str) -> Option<&[f32]> {
        let idx = match self.by_surface.get(word) {
            Some(idx) => Some(idx),
            None => self.by_surface.get(word.to_lowercase().as_str()),
        };
        idx.map(|&i| self.vectors[i].as_slice())
    }

    /// True if the word (exact or lowercased) is in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.vector(word).is_some()
    }

    /// Number of stored vectors.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Vector dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of input lines dropped during parsing (malformed, wrong
    /// arity, or duplicate words).
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub(crate) fn surface_at(&self, idx: usize) -> &str {
        &self.words[idx]
    }

    pub(crate) fn entries(&self) -> impl Iterator<Item = (usize, &str, &[f32])> {
        self.words
            .iter()
            .zip(self.vectors.iter())
            .enumerate()
            .map(|(i, (w, v))| (i, w.as_str(), v.as_slice()))
    }
}
