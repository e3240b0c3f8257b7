//! # hive-core
//!
//! Foundation crate for the Hive pattern-retrieval engine.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod dimension;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::HiveConfig;
pub use dimension::Dimension;
pub use errors::{HiveError, HiveResult};
pub use models::{Analysis, Confidence, Pattern, PatternMatch};
