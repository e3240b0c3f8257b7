//! Error taxonomy for the Hive engine.
//!
//! Construction-time errors (`CorpusError`) abort startup; per-query errors
//! (`QueryError`) are local to one query and never corrupt the shared index
//! or provider. An empty match list is a legitimate outcome, not an error.

mod corpus_error;
mod query_error;

pub use corpus_error::CorpusError;
pub use query_error::QueryError;

/// Umbrella error for all Hive subsystems.
#[derive(Debug, thiserror::Error)]
pub enum HiveError {
    #[error(transparent)]
    Corpus(#[from] CorpusError),

    #[error(transparent)]
    Query(#[from] QueryError),
}

/// Convenience result alias used throughout the workspace.
pub type HiveResult<T> = Result<T, HiveError>;
