// crates/hubspot-mcp-backend/src/types.rs
// ============================================================================
// Module: Backend Types
// Description: CRM object types and records decoded from property-bag JSON.
// Purpose: Shared domain records across the adapter and the dispatcher.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Domain records for the CRM backend. Remote payloads are property bags:
//! every object carries an `id` and a flat string-keyed `properties` map,
//! plus whatever extra metadata the CRM attaches. Decoding happens at a
//! single point (`CrmObject::from_value`) so malformed payloads surface as
//! one error instead of leaking partially decoded state.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Map;
use serde_json::Value;

use crate::error::BackendError;

/// CRM object types the tool surface operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectType {
    /// People records.
    Contacts,
    /// Organization records.
    Companies,
    /// Sales pipeline records.
    Deals,
    /// Support pipeline records.
    Tickets,
}

impl ObjectType {
    /// Returns the canonical string form, which is also the REST path segment.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Contacts => "contacts",
            Self::Companies => "companies",
            Self::Deals => "deals",
            Self::Tickets => "tickets",
        }
    }

    /// Returns every supported object type.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Contacts, Self::Companies, Self::Deals, Self::Tickets]
    }

    /// Parses an object type from its string representation.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "contacts" => Some(Self::Contacts),
            "companies" => Some(Self::Companies),
            "deals" => Some(Self::Deals),
            "tickets" => Some(Self::Tickets),
            _ => None,
        }
    }

    /// Returns the property group new custom properties are filed under.
    #[must_use]
    pub const fn property_group(self) -> &'static str {
        match self {
            Self::Contacts => "contactinformation",
            Self::Companies => "companyinformation",
            Self::Deals => "dealinformation",
            Self::Tickets => "ticketinformation",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// One CRM object: an id plus its property bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrmObject {
    /// Backend-assigned object id.
    pub id: String,
    /// Flat property bag. Values arrive as strings from the CRM but are kept
    /// as JSON values so nothing is silently coerced.
    pub properties: Map<String, Value>,
    /// Any extra metadata the CRM attaches (timestamps, archival flags).
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CrmObject {
    /// Decodes an object from a raw payload.
    ///
    /// # Errors
    /// Returns [`BackendError::Malformed`] when the payload is not the
    /// expected property-bag shape.
    pub fn from_value(value: Value) -> Result<Self, BackendError> {
        serde_json::from_value(value).map_err(|_| BackendError::Malformed)
    }
}

/// One page of objects plus the cursor to the next page, if any.
#[derive(Debug, Clone, Default)]
pub struct ObjectPage {
    /// Objects on this page.
    pub results: Vec<CrmObject>,
    /// Cursor for the next page. `None` means the listing is exhausted.
    pub next_after: Option<String>,
}

/// Property metadata returned by the property-listing tool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyMetadata {
    /// Internal property name.
    pub name: String,
    /// Label shown in the CRM UI.
    pub label: String,
    /// Property data type.
    #[serde(rename = "type")]
    pub kind: String,
    /// UI field type.
    #[serde(rename = "fieldType", alias = "field_type")]
    pub field_type: String,
}

/// Request body for creating a custom property definition.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyCreate {
    /// Internal property name.
    pub name: String,
    /// Label shown in the CRM UI.
    pub label: String,
    /// Human-readable description.
    pub description: String,
    /// Property group the definition is filed under.
    #[serde(rename = "groupName")]
    pub group_name: String,
    /// Property data type. Custom properties are created as strings.
    #[serde(rename = "type")]
    pub kind: String,
    /// UI field type the CRM renders the property with.
    #[serde(rename = "fieldType")]
    pub field_type: String,
}

impl PropertyCreate {
    /// Builds a string-typed property definition for the given object type.
    #[must_use]
    pub fn string_property(
        object_type: ObjectType,
        name: &str,
        label: &str,
        description: &str,
    ) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            description: description.to_string(),
            group_name: object_type.property_group().to_string(),
            kind: "string".to_string(),
            field_type: "text".to_string(),
        }
    }
}
