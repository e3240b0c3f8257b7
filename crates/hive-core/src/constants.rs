/// Hive system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Width (in characters) at which the problem text is cut for the
/// explanation-graph root label. The ellipsis is appended unconditionally
/// so labels stay reproducible regardless of input length.
pub const PROBLEM_LABEL_WIDTH: usize = 50;
