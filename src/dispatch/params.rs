//! Argument validation, default merging, and business-rule checks.
//!
//! A JSON `null` is how a caller passes an explicitly-unset value. It is accepted
//! for any declared parameter, it still overrides that parameter's default, and the
//! request builder then drops it from the query.

use serde_json::{Map, Value};

use crate::error::ValidationError;
use crate::operations::OperationDescriptor;

/// Check every declared parameter present in `raw` holds a string (or `null`).
///
/// Keys the operation does not declare are tolerated and left untouched.
pub fn validate(
    descriptor: &OperationDescriptor,
    raw: &Map<String, Value>,
) -> Result<(), ValidationError> {
    for spec in descriptor.params {
        match raw.get(spec.name) {
            None | Some(Value::Null) | Some(Value::String(_)) => {}
            Some(other) => {
                return Err(ValidationError::InvalidType {
                    field: spec.name.to_string(),
                    found: json_type_name(other),
                })
            }
        }
    }
    Ok(())
}

/// Overlay caller arguments on the operation defaults.
///
/// Key presence wins: a caller key replaces the default even when its value is `null`.
/// Defaults keep their declared position; new caller keys are appended in order.
pub fn merge_defaults(
    descriptor: &OperationDescriptor,
    raw: Map<String, Value>,
) -> Map<String, Value> {
    let mut merged = descriptor.default_map();
    for (key, value) in raw {
        merged.insert(key, value);
    }
    merged
}

/// Evaluate the operation's business rule, if any, on the merged parameters.
pub fn check_rule(
    descriptor: &OperationDescriptor,
    merged: &Map<String, Value>,
) -> Result<(), ValidationError> {
    match &descriptor.rule {
        Some(rule) => rule
            .check(merged)
            .map_err(|message| ValidationError::RuleFailed { message }),
        None => Ok(()),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
