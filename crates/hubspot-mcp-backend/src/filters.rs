// crates/hubspot-mcp-backend/src/filters.rs
// ============================================================================
// Module: Search Filters
// Description: Closed filter-operator set and validated property filters.
// Purpose: Reject malformed filters before any network call is made.
// Dependencies: serde, serde_json, thiserror
// ============================================================================

//! ## Overview
//! The search tool accepts a closed set of filter operators. Operators that
//! take a list (`BETWEEN`, `IN`, `NOT_IN`) receive their value as a
//! JSON-encoded string list; everything else takes a single string.
//! `PropertyFilter::new` decodes and arity-checks the raw value up front so
//! an invalid filter never reaches the CRM.

use std::fmt;

use serde::Serialize;
use serde_json::Value;
use serde_json::json;
use thiserror::Error;

/// Errors produced while building a property filter.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The operator string is not in the supported set.
    #[error("unsupported operator: {0}")]
    UnknownOperator(String),
    /// A list operator received a value that is not a JSON string list.
    #[error("operator {0} requires a JSON-encoded list value, e.g. '[\"a\", \"b\"]'")]
    ExpectedList(FilterOperator),
    /// `BETWEEN` received a list whose length is not exactly two.
    #[error("operator BETWEEN requires exactly two values [start, end], got {0}")]
    BetweenArity(usize),
    /// `IN`/`NOT_IN` received an empty list.
    #[error("operator {0} requires at least one value")]
    EmptyList(FilterOperator),
}

/// Supported search filter operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FilterOperator {
    /// Property equals the value.
    Eq,
    /// Property does not equal the value.
    Neq,
    /// Property is greater than the value.
    Gt,
    /// Property is greater than or equal to the value.
    Gte,
    /// Property is less than the value.
    Lt,
    /// Property is less than or equal to the value.
    Lte,
    /// Property lies within an inclusive range.
    Between,
    /// Property is one of the listed values.
    In,
    /// Property is none of the listed values.
    NotIn,
    /// Property contains the given token (case-insensitive).
    ContainsToken,
    /// Property does not contain the given token.
    NotContainsToken,
    /// Property value starts with the given substring.
    StartsWith,
    /// Property value ends with the given substring.
    EndsWith,
    /// Datetime property is on or after the value.
    OnOrAfter,
    /// Datetime property is on or before the value.
    OnOrBefore,
}

impl FilterOperator {
    /// Returns the wire form of the operator.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Eq => "EQ",
            Self::Neq => "NEQ",
            Self::Gt => "GT",
            Self::Gte => "GTE",
            Self::Lt => "LT",
            Self::Lte => "LTE",
            Self::Between => "BETWEEN",
            Self::In => "IN",
            Self::NotIn => "NOT_IN",
            Self::ContainsToken => "CONTAINS_TOKEN",
            Self::NotContainsToken => "NOT_CONTAINS_TOKEN",
            Self::StartsWith => "STARTS_WITH",
            Self::EndsWith => "ENDS_WITH",
            Self::OnOrAfter => "ON_OR_AFTER",
            Self::OnOrBefore => "ON_OR_BEFORE",
        }
    }

    /// Returns every supported operator.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Eq,
            Self::Neq,
            Self::Gt,
            Self::Gte,
            Self::Lt,
            Self::Lte,
            Self::Between,
            Self::In,
            Self::NotIn,
            Self::ContainsToken,
            Self::NotContainsToken,
            Self::StartsWith,
            Self::EndsWith,
            Self::OnOrAfter,
            Self::OnOrBefore,
        ]
    }

    /// Parses an operator from its wire form.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "EQ" => Some(Self::Eq),
            "NEQ" => Some(Self::Neq),
            "GT" => Some(Self::Gt),
            "GTE" => Some(Self::Gte),
            "LT" => Some(Self::Lt),
            "LTE" => Some(Self::Lte),
            "BETWEEN" => Some(Self::Between),
            "IN" => Some(Self::In),
            "NOT_IN" => Some(Self::NotIn),
            "CONTAINS_TOKEN" => Some(Self::ContainsToken),
            "NOT_CONTAINS_TOKEN" => Some(Self::NotContainsToken),
            "STARTS_WITH" => Some(Self::StartsWith),
            "ENDS_WITH" => Some(Self::EndsWith),
            "ON_OR_AFTER" => Some(Self::OnOrAfter),
            "ON_OR_BEFORE" => Some(Self::OnOrBefore),
            _ => None,
        }
    }

    /// Whether this operator takes its value as a list.
    #[must_use]
    pub const fn expects_list(self) -> bool {
        matches!(self, Self::Between | Self::In | Self::NotIn)
    }
}

impl fmt::Display for FilterOperator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Decoded filter value, single or list per the operator's arity.
#[derive(Debug, Clone, PartialEq, Eq)]
enum FilterValue {
    /// Single string value.
    Single(String),
    /// List of string values, already arity-checked.
    List(Vec<String>),
}

/// A validated search filter ready to send to the CRM.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyFilter {
    /// Property name to filter on.
    property_name: String,
    /// Filter operator.
    operator: FilterOperator,
    /// Arity-checked value.
    value: FilterValue,
}

impl PropertyFilter {
    /// Builds a filter from the raw tool arguments, decoding and
    /// arity-checking the value.
    ///
    /// # Errors
    /// Returns a [`FilterError`] when the operator is unknown, a list
    /// operator did not receive a JSON string list, `BETWEEN` did not
    /// receive exactly two values, or `IN`/`NOT_IN` received an empty list.
    pub fn new(property_name: &str, operator: &str, raw_value: &str) -> Result<Self, FilterError> {
        let operator = FilterOperator::parse(operator)
            .ok_or_else(|| FilterError::UnknownOperator(operator.to_string()))?;
        let value = if operator.expects_list() {
            let values: Vec<String> = serde_json::from_str(raw_value)
                .map_err(|_| FilterError::ExpectedList(operator))?;
            match operator {
                FilterOperator::Between if values.len() != 2 => {
                    return Err(FilterError::BetweenArity(values.len()));
                }
                FilterOperator::In | FilterOperator::NotIn if values.is_empty() => {
                    return Err(FilterError::EmptyList(operator));
                }
                _ => {}
            }
            FilterValue::List(values)
        } else {
            FilterValue::Single(raw_value.to_string())
        };
        Ok(Self {
            property_name: property_name.to_string(),
            operator,
            value,
        })
    }

    /// Returns the operator.
    #[must_use]
    pub const fn operator(&self) -> FilterOperator {
        self.operator
    }

    /// Encodes the filter in the CRM search request shape. `BETWEEN` maps
    /// its pair to `value`/`highValue`; `IN`/`NOT_IN` use `values`.
    #[must_use]
    pub fn to_search_value(&self) -> Value {
        match &self.value {
            FilterValue::Single(value) => json!({
                "propertyName": self.property_name,
                "operator": self.operator.as_str(),
                "value": value
            }),
            FilterValue::List(values) if self.operator == FilterOperator::Between => json!({
                "propertyName": self.property_name,
                "operator": self.operator.as_str(),
                "value": values[0],
                "highValue": values[1]
            }),
            FilterValue::List(values) => json!({
                "propertyName": self.property_name,
                "operator": self.operator.as_str(),
                "values": values
            }),
        }
    }
}

#[cfg(test)]
mod tests;
