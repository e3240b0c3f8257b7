//! Corpus-facing and consumer-facing data models.

mod analysis;
mod confidence;
mod pattern;
mod pattern_match;

pub use analysis::Analysis;
pub use confidence::Confidence;
pub use pattern::Pattern;
pub use pattern_match::PatternMatch;
