// Flat L2 nearest-neighbor search over the embedding store.
//
// The search is an exact scan: every stored vector is compared against the
// query and the k nearest are returned. Ties on distance resolve by
// insertion order, which keeps results deterministic across runs.

use crate::store::EmbeddingStore;

/// Euclidean distance between two vectors. The slices must have equal
/// length; components beyond the shorter slice are ignored by `zip`.
pub fn euclidean(a: &[f32], b: &[f32]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = f64::from(x - y);
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

impl EmbeddingStore {
    /// Return the `k` nearest neighbors of `word`, nearest first, excluding
    /// the query word itself. The scan keeps `k + 1` candidates so the
    /// self-match (always at distance zero) can be dropped without
    /// shortening the result.
    ///
    /// An out-of-vocabulary query returns an empty list; absence is a
    /// normal outcome, not an error.
    pub fn nearest(&self, word: &str, k: usize) -> Vec<String> {
        let Some(query) = self.vector(word) else {
            return Vec::new();
        };
        if k == 0 {
            return Vec::new();
        }

        // (distance, insertion index) pairs for every stored vector.
        let mut scored: Vec<(f64, usize)> = self
            .entries()
            .map(|(idx, _, vector)| (euclidean(query, vector), idx))
            .collect();
        scored.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        let mut neighbors = Vec::with_capacity(k);
        for (_, idx) in scored.into_iter().take(k + 1) {
            let surface = self.surface_at(idx);
            if surface.eq_ignore_ascii_case(word) {
                continue; // self-match
            }
            neighbors.push(surface.to_string());
            if neighbors.len() == k {
                break;
            }
        }
        neighbors
    }

    /// Euclidean distance between two stored words, or `None` if either is
    /// out of vocabulary.
    pub fn distance_between(&self, a: &str, b: &str) -> Option<f64> {
        Some(euclidean(self.vector(a)?, self.vector(b)?))
    }
}
