//! # hive-corpus
//!
//! Loads the pattern corpus from its JSON source and serves nearest-neighbor
//! queries over the patterns' embedding vectors. Both the corpus and the
//! index are immutable after construction; one instance is built at startup
//! and shared by reference across queries.

pub mod index;
pub mod loader;

pub use index::{Neighbor, PatternIndex};
pub use loader::patterns_from_json;
