// Word value object: a lowercased surface form, a coarse grammatical
// category, and two optional similarity metrics attached after the fact.

use std::fmt;
use std::hash::{Hash, Hasher};

/// Distance assigned to a candidate whose vector is missing from the
/// embedding vocabulary. A real Euclidean distance is never negative, so
/// this value cannot collide with a genuine score.
pub const UNSCOREABLE_DISTANCE: f64 = -1.0;

/// A word under consideration: either an original token extracted from a
/// sentence or a candidate replacement produced by a search backend.
///
/// The surface form is lowercased and the category upper-cased on every
/// construction and mutation. Identity (equality and hashing) uses the
/// surface form only, so a map keyed by `Word` merges entries that differ
/// only in category or scores.
#[derive(Debug, Clone)]
pub struct Word {
    surface: String,
    category: String,
    /// Embedding distance to the original word. Lower is more similar.
    /// `None` until the scoring pass runs.
    distance: Option<f64>,
    /// Sentence-level semantic similarity. Higher is more similar.
    /// `None` until the scoring pass runs.
    score: Option<f64>,
}

impl Word {
    /// Create a new word, normalizing case on both fields.
    pub fn new(surface: impl AsRef<str>, category: impl AsRef<str>) -> Self {
        Self {
            surface: surface.as_ref().to_lowercase(),
            category: category.as_ref().to_uppercase(),
            distance: None,
            score: None,
        }
    }

    pub fn surface(&self) -> &str {
        &self.surface
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn distance(&self) -> Option<f64> {
        self.distance
    }

    pub fn score(&self) -> Option<f64> {
        self.score
    }

    /// Overwrite the embedding distance. No validation is performed;
    /// scoring idempotence is the caller's contract (a scorer only computes
    /// when `distance()` is `None`).
    pub fn set_distance(&mut self, distance: f64) {
        self.distance = Some(distance);
    }

    /// Overwrite the semantic similarity score. See `set_distance`.
    pub fn set_score(&mut self, score: f64) {
        self.score = Some(score);
    }

    /// Case-insensitive surface comparison against a raw string.
    pub fn matches(&self, other: &str) -> bool {
        self.surface == other.to_lowercase()
    }
}

impl PartialEq for Word {
    fn eq(&self, other: &Self) -> bool {
        self.surface == other.surface
    }
}

impl Eq for Word {}

impl Hash for Word {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.surface.hash(state);
    }
}

impl fmt::Display for Word {
    /// Deterministic one-line rendering used by the plain-text report:
    /// `surface <CATEGORY> || SCORE: s | DISTANCE: d`, with `-` standing in
    /// for a metric that has not been computed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} <{}> || SCORE: ", self.surface, self.category)?;
        match self.score {
            Some(s) => write!(f, "{s}")?,
            None => write!(f, "-")?,
        }
        write!(f, " | DISTANCE: ")?;
        match self.distance {
            Some(d) => write!(f, "{d}"),
            None => write!(f, "-"),
        }
    }
}
