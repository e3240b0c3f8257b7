/// Corpus loading and index construction errors. All fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum CorpusError {
    #[error("corpus contains no patterns")]
    EmptyCorpus,

    #[error("malformed pattern at position {index}: missing or empty field `{field}`")]
    MalformedPattern { index: usize, field: &'static str },

    #[error("corpus entry at position {index} is nested deeper than one level")]
    NestingTooDeep { index: usize },

    #[error("corpus source is not a JSON array: {reason}")]
    InvalidSource { reason: String },

    #[error("pattern count {patterns} does not match embedding count {embeddings}")]
    CountMismatch { patterns: usize, embeddings: usize },

    #[error("embedding at position {index} has {actual} dimensions, expected {expected}")]
    RaggedEmbeddings {
        index: usize,
        expected: usize,
        actual: usize,
    },
}
