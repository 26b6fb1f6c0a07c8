// plainword-embed: memory-resident word embedding backend.
//
// Parses a GloVe-style text vector file into an `EmbeddingStore` and exposes
// exact vector lookup, Euclidean distance, and brute-force (flat L2)
// k-nearest-neighbor search. The store is built once at startup and is
// immutable afterwards; lookups for unknown words return `None`/empty
// rather than failing.

pub mod index;
pub mod store;

pub use index::euclidean;
pub use store::{EmbedError, EmbeddingStore};
