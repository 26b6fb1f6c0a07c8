// plainword-core: shared leaf types for the lexical simplification engine.
//
// This crate holds the `Word` value object and the coarse grammatical tag
// vocabulary. It has no dependencies; everything that loads resources or
// talks to models lives in the higher-level crates.

pub mod tags;
pub mod word;

pub use word::{UNSCOREABLE_DISTANCE, Word};
