// crates/hubspot-mcp-server/src/validation.rs
// ============================================================================
// Module: Argument Validation
// Description: Validates tool arguments against the published input schemas.
// Purpose: Reject bad calls before the dispatcher touches the backend.
// Dependencies: serde_json, thiserror
// ============================================================================

//! ## Overview
//! The validator interprets the same schema values the catalog publishes in
//! `tools/list`, so the advertised contract and the enforced contract are
//! one artifact. Rules: declared defaults are filled for absent fields,
//! required fields must be present and non-null, declared `type`, `enum`,
//! and `minimum` constraints are enforced, and fields the schema does not
//! declare pass through untouched. Every violated field is collected into a
//! single error so callers learn about all of them at once.

use serde_json::Map;
use serde_json::Value;
use thiserror::Error;

/// Validation failures, phrased for the `Error: ...` tool result surface.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The arguments payload was not a JSON object.
    #[error("arguments must be a JSON object")]
    NotAnObject,
    /// One or more fields violated the schema. Every offending field is
    /// named, not just the first.
    #[error("{}", join_violations(.0))]
    Fields(Vec<FieldViolation>),
}

/// One field-level schema violation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FieldViolation {
    /// A required field is missing or null.
    #[error("missing required parameter: {0}")]
    Missing(String),
    /// A field does not match its declared type.
    #[error("parameter {field} must be of type {expected}")]
    WrongType {
        /// Offending field name.
        field: String,
        /// Declared schema type.
        expected: String,
    },
    /// A numeric field is below its declared minimum.
    #[error("parameter {field} must be at least {minimum}")]
    BelowMinimum {
        /// Offending field name.
        field: String,
        /// Declared minimum.
        minimum: i64,
    },
    /// A field is not one of the declared enum values.
    #[error("parameter {field} must be one of: {allowed}")]
    NotInEnum {
        /// Offending field name.
        field: String,
        /// Comma-joined allowed values.
        allowed: String,
    },
}

/// Joins field violations into one message.
fn join_violations(violations: &[FieldViolation]) -> String {
    violations.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

/// Validates `arguments` against an object schema and returns the argument
/// map with declared defaults filled in.
///
/// # Errors
/// Returns a [`ValidationError`] naming every violated field.
pub fn validate_arguments(
    schema: &Value,
    arguments: Value,
) -> Result<Map<String, Value>, ValidationError> {
    let mut arguments = match arguments {
        Value::Object(map) => map,
        Value::Null => Map::new(),
        _ => return Err(ValidationError::NotAnObject),
    };
    let properties = schema.get("properties").and_then(Value::as_object);
    let required: Vec<&str> = schema
        .get("required")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().filter_map(Value::as_str).collect())
        .unwrap_or_default();

    let mut violations = Vec::new();
    if let Some(properties) = properties {
        for (field, field_schema) in properties {
            match arguments.get(field) {
                None | Some(Value::Null) => {
                    if let Some(default) = field_schema.get("default") {
                        arguments.insert(field.clone(), default.clone());
                    }
                }
                Some(value) => check_field(field, field_schema, value, &mut violations),
            }
        }
    }
    for field in required {
        match arguments.get(field) {
            None | Some(Value::Null) => {
                violations.push(FieldViolation::Missing(field.to_string()));
            }
            Some(_) => {}
        }
    }
    if violations.is_empty() {
        Ok(arguments)
    } else {
        Err(ValidationError::Fields(violations))
    }
}

/// Checks one present field against its declared constraints, recording
/// every violation.
fn check_field(
    field: &str,
    schema: &Value,
    value: &Value,
    violations: &mut Vec<FieldViolation>,
) {
    if let Some(expected) = schema.get("type").and_then(Value::as_str) {
        let matches = match expected {
            "string" => value.is_string(),
            // Floats never pass as integers; nothing is silently truncated.
            "integer" => value.is_i64() || value.is_u64(),
            "number" => value.is_number(),
            "boolean" => value.is_boolean(),
            "array" => value.is_array(),
            "object" => value.is_object(),
            _ => true,
        };
        if !matches {
            violations.push(FieldViolation::WrongType {
                field: field.to_string(),
                expected: expected.to_string(),
            });
            return;
        }
        if expected == "array"
            && let Some(item_type) = schema.pointer("/items/type").and_then(Value::as_str)
            && item_type == "string"
            && let Some(items) = value.as_array()
            && !items.iter().all(Value::is_string)
        {
            violations.push(FieldViolation::WrongType {
                field: field.to_string(),
                expected: "array of strings".to_string(),
            });
        }
    }
    if let Some(minimum) = schema.get("minimum").and_then(Value::as_i64)
        && let Some(actual) = value.as_i64()
        && actual < minimum
    {
        violations.push(FieldViolation::BelowMinimum {
            field: field.to_string(),
            minimum,
        });
    }
    if let Some(allowed) = schema.get("enum").and_then(Value::as_array)
        && !allowed.contains(value)
    {
        violations.push(FieldViolation::NotInEnum {
            field: field.to_string(),
            allowed: allowed
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", "),
        });
    }
}

#[cfg(test)]
mod tests;
