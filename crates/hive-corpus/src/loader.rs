//! Corpus source adapter: JSON parsing, one-level flattening, validation.
//!
//! The corpus source may deliver pattern records either flat or grouped one
//! level deep (`[P1, [P2, P3], P4]`). Exactly one level is flattened,
//! preserving order; deeper nesting violates the source contract and is
//! rejected rather than silently recursed.

use serde_json::Value;
use tracing::info;

use hive_core::errors::CorpusError;
use hive_core::models::Pattern;

/// Parse a JSON corpus document into validated patterns.
///
/// Fatal at load time: a malformed record rejects the whole record set, so
/// an index can never be built over partially valid data.
pub fn patterns_from_json(content: &str) -> Result<Vec<Pattern>, CorpusError> {
    let value: Value = serde_json::from_str(content).map_err(|e| CorpusError::InvalidSource {
        reason: e.to_string(),
    })?;
    patterns_from_value(&value)
}

/// Flatten and validate an already-parsed corpus document.
pub fn patterns_from_value(value: &Value) -> Result<Vec<Pattern>, CorpusError> {
    let entries = value.as_array().ok_or_else(|| CorpusError::InvalidSource {
        reason: "top-level value must be an array".to_string(),
    })?;

    let mut patterns = Vec::new();
    for entry in entries {
        match entry {
            Value::Array(group) => {
                for record in group {
                    if record.is_array() {
                        return Err(CorpusError::NestingTooDeep {
                            index: patterns.len(),
                        });
                    }
                    patterns.push(pattern_from_record(record, patterns.len())?);
                }
            }
            record => patterns.push(pattern_from_record(record, patterns.len())?),
        }
    }

    info!(patterns = patterns.len(), "corpus loaded");
    Ok(patterns)
}

/// Deserialize one record, mapping any missing or ill-typed field to
/// `MalformedPattern` with the flattened position and field name.
fn pattern_from_record(record: &Value, index: usize) -> Result<Pattern, CorpusError> {
    let malformed = |field: &'static str| CorpusError::MalformedPattern { index, field };

    let obj = record.as_object().ok_or_else(|| malformed("record"))?;

    let pattern = Pattern {
        problem_type: string_field(obj, "problem_type").ok_or_else(|| malformed("problem_type"))?,
        description: string_field(obj, "description").ok_or_else(|| malformed("description"))?,
        used_in: string_list_field(obj, "used_in").ok_or_else(|| malformed("used_in"))?,
        solution_steps: string_list_field(obj, "solution_steps")
            .ok_or_else(|| malformed("solution_steps"))?,
    };

    pattern.validate().map_err(malformed)?;
    Ok(pattern)
}

fn string_field(obj: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)?.as_str().map(str::to_string)
}

fn string_list_field(obj: &serde_json::Map<String, Value>, key: &str) -> Option<Vec<String>> {
    obj.get(key)?
        .as_array()?
        .iter()
        .map(|v| v.as_str().map(str::to_string))
        .collect()
}
