use serde::{Deserialize, Serialize};

/// One recorded solution pattern: an immutable unit of reusable knowledge.
///
/// A pattern's identifier is its position in the corpus; the `PatternIndex`
/// owns the corpus for the process lifetime and never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pattern {
    /// Short label for the class of problem this pattern solves.
    pub problem_type: String,
    /// Free text used for embedding.
    pub description: String,
    /// Prior application contexts. May be empty.
    pub used_in: Vec<String>,
    /// Ordered, non-empty sequence of recommended steps.
    pub solution_steps: Vec<String>,
}

impl Pattern {
    /// Check required-field invariants, returning the name of the first
    /// missing or empty field.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.problem_type.trim().is_empty() {
            return Err("problem_type");
        }
        if self.description.trim().is_empty() {
            return Err("description");
        }
        if self.solution_steps.is_empty() {
            return Err("solution_steps");
        }
        Ok(())
    }
}
