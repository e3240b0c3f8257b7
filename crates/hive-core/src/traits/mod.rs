//! Trait seams between the core and its external collaborators.

mod embedding;

pub use embedding::IEmbeddingProvider;
