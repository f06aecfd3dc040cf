// crates/hubspot-mcp-backend/src/filters/tests.rs
// ============================================================================
// Module: Filter Unit Tests
// Description: Covers operator parsing and filter arity enforcement.
// Purpose: Ensure malformed filters fail before any request is built.
// Dependencies: hubspot-mcp-backend
// ============================================================================

//! ## Overview
//! Exercises the closed operator set and the arity rules: `BETWEEN` takes
//! exactly two values, `IN`/`NOT_IN` take a non-empty list, everything else
//! takes a single string.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions use panic-based helpers for clarity."
)]

use serde_json::json;

use super::FilterError;
use super::FilterOperator;
use super::PropertyFilter;

#[test]
fn operators_round_trip() {
    for operator in FilterOperator::all() {
        assert_eq!(FilterOperator::parse(operator.as_str()), Some(*operator));
    }
    assert_eq!(FilterOperator::parse("LIKE"), None);
    assert_eq!(FilterOperator::parse("eq"), None);
}

#[test]
fn unknown_operator_is_rejected() {
    let result = PropertyFilter::new("email", "LIKE", "a@b.com");
    assert_eq!(result.unwrap_err(), FilterError::UnknownOperator("LIKE".to_string()));
}

#[test]
fn single_value_operator_encodes_value() {
    let filter = PropertyFilter::new("lifecyclestage", "EQ", "customer").unwrap();
    assert_eq!(
        filter.to_search_value(),
        json!({
            "propertyName": "lifecyclestage",
            "operator": "EQ",
            "value": "customer"
        })
    );
}

#[test]
fn between_requires_exactly_two_values() {
    assert_eq!(
        PropertyFilter::new("createdate", "BETWEEN", "[\"2023-01-01\"]").unwrap_err(),
        FilterError::BetweenArity(1)
    );
    assert_eq!(
        PropertyFilter::new("createdate", "BETWEEN", "[\"a\", \"b\", \"c\"]").unwrap_err(),
        FilterError::BetweenArity(3)
    );
}

#[test]
fn between_encodes_low_and_high_bounds() {
    let filter =
        PropertyFilter::new("createdate", "BETWEEN", "[\"2023-01-01\", \"2023-12-31\"]").unwrap();
    assert_eq!(
        filter.to_search_value(),
        json!({
            "propertyName": "createdate",
            "operator": "BETWEEN",
            "value": "2023-01-01",
            "highValue": "2023-12-31"
        })
    );
}

#[test]
fn in_requires_a_json_list() {
    assert_eq!(
        PropertyFilter::new("industry", "IN", "Technology").unwrap_err(),
        FilterError::ExpectedList(FilterOperator::In)
    );
}

#[test]
fn in_rejects_an_empty_list() {
    assert_eq!(
        PropertyFilter::new("industry", "NOT_IN", "[]").unwrap_err(),
        FilterError::EmptyList(FilterOperator::NotIn)
    );
}

#[test]
fn in_encodes_a_values_array() {
    let filter = PropertyFilter::new("industry", "IN", "[\"Technology\", \"Healthcare\"]").unwrap();
    assert_eq!(
        filter.to_search_value(),
        json!({
            "propertyName": "industry",
            "operator": "IN",
            "values": ["Technology", "Healthcare"]
        })
    );
}
