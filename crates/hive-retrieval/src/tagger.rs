//! Rule-based problem dimension tagging.
//!
//! Substring containment against a fixed keyword table. The table is part of
//! the system's behavioral contract; changing a key or label changes every
//! downstream trace and graph.

use std::collections::BTreeSet;

use hive_core::dimension::Dimension;

/// Keyword → dimension table. Several keys may map to one dimension; the
/// result is a set, so duplicates collapse.
const KEYWORD_DIMENSIONS: &[(&str, Dimension)] = &[
    ("scale", Dimension::Scalability),
    ("scalability", Dimension::Scalability),
    ("cost", Dimension::CostOptimization),
    ("resource", Dimension::ResourceAllocation),
    ("time", Dimension::Efficiency),
    ("delay", Dimension::Efficiency),
    ("traffic", Dimension::Optimization),
];

/// Tag a problem statement with its qualitative dimensions.
///
/// Case-insensitive, deterministic, infallible: when nothing matches
/// (including empty input) the result is `{GeneralProblem}`, so the set is
/// never empty.
pub fn tag(problem: &str) -> BTreeSet<Dimension> {
    let lowered = problem.to_lowercase();

    let mut dimensions: BTreeSet<Dimension> = KEYWORD_DIMENSIONS
        .iter()
        .filter(|(keyword, _)| lowered.contains(*keyword))
        .map(|(_, dimension)| *dimension)
        .collect();

    if dimensions.is_empty() {
        dimensions.insert(Dimension::GeneralProblem);
    }
    dimensions
}
