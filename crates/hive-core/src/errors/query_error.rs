/// Per-query errors. Local to the failing query; shared state stays intact.
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    #[error("problem text is blank; callers must pre-validate input")]
    EmptyProblem,

    #[error("invalid distance {distance}: must be finite and non-negative")]
    InvalidDistance { distance: f64 },

    #[error("query vector has {actual} dimensions, index expects {expected}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("embedding provider `{provider}` failed: {reason}")]
    ProviderFailed { provider: String, reason: String },
}
