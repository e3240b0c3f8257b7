//! Distance → confidence conversion.

use hive_core::errors::QueryError;
use hive_core::models::Confidence;

/// Convert a nearest-neighbor distance into a bounded confidence score.
///
/// `1 / (1 + distance)`, rounded to two decimals: distance 0 scores 1.00,
/// and the score decreases monotonically toward 0 as distance grows.
///
/// A negative or non-finite distance means the index or provider broke its
/// contract; that is surfaced as `InvalidDistance`, never clamped away.
pub fn confidence_from_distance(distance: f64) -> Result<Confidence, QueryError> {
    if !distance.is_finite() || distance < 0.0 {
        return Err(QueryError::InvalidDistance { distance });
    }
    let raw = 1.0 / (1.0 + distance);
    Ok(Confidence::new((raw * 100.0).round() / 100.0))
}
