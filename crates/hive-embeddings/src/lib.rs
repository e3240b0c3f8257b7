//! # hive-embeddings
//!
//! Embedding providers that need no network access or model download.
//! The neural model the system normally runs against lives behind the
//! [`hive_core::traits::IEmbeddingProvider`] seam and is supplied by the
//! host process; this crate covers air-gapped and test environments.

pub mod providers;

pub use providers::{create_provider, HashedTfIdf};
