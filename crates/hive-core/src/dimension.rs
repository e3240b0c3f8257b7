use std::fmt;

use serde::{Deserialize, Serialize};

/// Qualitative category describing one aspect of an input problem.
///
/// Derived per query by the dimension tagger; the tagger guarantees a
/// non-empty set by falling back to [`Dimension::GeneralProblem`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Dimension {
    Scalability,
    CostOptimization,
    ResourceAllocation,
    Efficiency,
    Optimization,
    /// Fallback when no keyword matched the problem text.
    GeneralProblem,
}

impl Dimension {
    /// Human-readable label, stable across versions.
    pub fn label(self) -> &'static str {
        match self {
            Dimension::Scalability => "Scalability",
            Dimension::CostOptimization => "Cost Optimization",
            Dimension::ResourceAllocation => "Resource Allocation",
            Dimension::Efficiency => "Efficiency",
            Dimension::Optimization => "Optimization",
            Dimension::GeneralProblem => "General Problem",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
