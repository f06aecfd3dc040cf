// crates/hubspot-mcp-server/src/validation/tests.rs
// ============================================================================
// Module: Validation Unit Tests
// Description: Covers default filling, required fields, and type checks.
// Purpose: Keep the validator aligned with the published schemas.
// Dependencies: hubspot-mcp-server, hubspot-mcp-contract
// ============================================================================

//! ## Overview
//! Exercises `validate_arguments` against the real catalog schemas rather
//! than synthetic ones, so schema drift shows up here first.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions use panic-based helpers for clarity."
)]

use serde_json::Value;
use serde_json::json;

use hubspot_mcp_contract::ToolName;
use hubspot_mcp_contract::tool_definitions;

use super::FieldViolation;
use super::ValidationError;
use super::validate_arguments;

fn schema_for(tool: ToolName) -> Value {
    tool_definitions()
        .into_iter()
        .find(|definition| definition.name == tool)
        .expect("tool missing from catalog")
        .input_schema
}

#[test]
fn defaults_fill_absent_fields() {
    let schema = schema_for(ToolName::GetContacts);
    let args = validate_arguments(&schema, json!({})).unwrap();
    assert_eq!(args["limit"], 10);
}

#[test]
fn defaults_fill_null_fields() {
    let schema = schema_for(ToolName::GetContacts);
    let args = validate_arguments(&schema, json!({ "limit": null })).unwrap();
    assert_eq!(args["limit"], 10);
}

#[test]
fn explicit_values_override_defaults() {
    let schema = schema_for(ToolName::GetContacts);
    let args = validate_arguments(&schema, json!({ "limit": 25 })).unwrap();
    assert_eq!(args["limit"], 25);
}

#[test]
fn missing_required_field_is_rejected() {
    let schema = schema_for(ToolName::GetContactById);
    let err = validate_arguments(&schema, json!({})).unwrap_err();
    assert_eq!(
        err,
        ValidationError::Fields(vec![FieldViolation::Missing("contact_id".to_string())])
    );
    assert_eq!(err.to_string(), "missing required parameter: contact_id");
}

#[test]
fn every_missing_required_field_is_named() {
    let schema = schema_for(ToolName::UpdateContactById);
    let err = validate_arguments(&schema, json!({})).unwrap_err();
    assert_eq!(
        err,
        ValidationError::Fields(vec![
            FieldViolation::Missing("contact_id".to_string()),
            FieldViolation::Missing("updates".to_string()),
        ])
    );
    let message = err.to_string();
    assert!(message.contains("contact_id"), "{message}");
    assert!(message.contains("updates"), "{message}");
}

#[test]
fn null_required_field_is_rejected() {
    let schema = schema_for(ToolName::GetContactById);
    let err = validate_arguments(&schema, json!({ "contact_id": null })).unwrap_err();
    assert_eq!(
        err,
        ValidationError::Fields(vec![FieldViolation::Missing("contact_id".to_string())])
    );
}

#[test]
fn wrong_type_is_rejected() {
    let schema = schema_for(ToolName::GetContactById);
    let err = validate_arguments(&schema, json!({ "contact_id": 42 })).unwrap_err();
    assert_eq!(
        err,
        ValidationError::Fields(vec![FieldViolation::WrongType {
            field: "contact_id".to_string(),
            expected: "string".to_string(),
        }])
    );
}

#[test]
fn float_limit_is_not_silently_truncated() {
    let schema = schema_for(ToolName::GetContacts);
    let err = validate_arguments(&schema, json!({ "limit": 10.5 })).unwrap_err();
    assert_eq!(
        err,
        ValidationError::Fields(vec![FieldViolation::WrongType {
            field: "limit".to_string(),
            expected: "integer".to_string(),
        }])
    );
}

#[test]
fn limit_below_the_declared_minimum_is_rejected() {
    let schema = schema_for(ToolName::GetContacts);
    let err = validate_arguments(&schema, json!({ "limit": 0 })).unwrap_err();
    assert_eq!(
        err,
        ValidationError::Fields(vec![FieldViolation::BelowMinimum {
            field: "limit".to_string(),
            minimum: 1,
        }])
    );
    let args = validate_arguments(&schema, json!({ "limit": 1 })).unwrap();
    assert_eq!(args["limit"], 1);
}

#[test]
fn enum_membership_is_enforced() {
    let schema = schema_for(ToolName::ListProperties);
    let err = validate_arguments(&schema, json!({ "object_type": "leads" })).unwrap_err();
    assert!(matches!(
        err,
        ValidationError::Fields(ref violations)
            if matches!(violations[..], [FieldViolation::NotInEnum { .. }])
    ));
    let args = validate_arguments(&schema, json!({ "object_type": "deals" })).unwrap();
    assert_eq!(args["object_type"], "deals");
}

#[test]
fn string_array_items_are_checked() {
    let schema = schema_for(ToolName::SearchByProperty);
    let err = validate_arguments(
        &schema,
        json!({
            "object_type": "contacts",
            "property_name": "email",
            "operator": "EQ",
            "value": "a@b.com",
            "properties": ["email", 7]
        }),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ValidationError::Fields(vec![FieldViolation::WrongType {
            field: "properties".to_string(),
            expected: "array of strings".to_string(),
        }])
    );
}

#[test]
fn violations_accumulate_across_fields() {
    let schema = schema_for(ToolName::SearchByProperty);
    let err = validate_arguments(
        &schema,
        json!({
            "object_type": "contacts",
            "property_name": 7,
            "value": "a@b.com",
            "properties": ["email"]
        }),
    )
    .unwrap_err();
    let ValidationError::Fields(violations) = err else {
        panic!("expected field violations");
    };
    assert!(violations.contains(&FieldViolation::WrongType {
        field: "property_name".to_string(),
        expected: "string".to_string(),
    }));
    assert!(violations.contains(&FieldViolation::Missing("operator".to_string())));
}

#[test]
fn unknown_fields_pass_through() {
    let schema = schema_for(ToolName::GetContactById);
    let args =
        validate_arguments(&schema, json!({ "contact_id": "42", "trace": "abc" })).unwrap();
    assert_eq!(args["trace"], "abc");
}

#[test]
fn non_object_arguments_are_rejected() {
    let schema = schema_for(ToolName::GetContacts);
    let err = validate_arguments(&schema, json!([1, 2])).unwrap_err();
    assert_eq!(err, ValidationError::NotAnObject);
}

#[test]
fn null_arguments_become_an_empty_object() {
    let schema = schema_for(ToolName::GetContacts);
    let args = validate_arguments(&schema, Value::Null).unwrap();
    assert_eq!(args["limit"], 10);
}
