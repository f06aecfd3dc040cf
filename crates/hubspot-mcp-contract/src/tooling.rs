// crates/hubspot-mcp-contract/src/tooling.rs
// ============================================================================
// Module: MCP Tool Catalog
// Description: Canonical MCP tool definitions and input schemas.
// Purpose: Drive MCP tool listings and argument validation from one place.
// Dependencies: serde_json, hubspot-mcp-contract::types
// ============================================================================

//! ## Overview
//! This module defines the canonical MCP tool surface: one builder per tool,
//! composed in registration order. Schemas are plain `serde_json` values so
//! the same data serves `tools/list` responses and argument validation.
//! Tool inputs are untrusted; schemas describe the accepted shape only.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde_json::Value;
use serde_json::json;

use crate::types::ToolDefinition;
use crate::types::ToolName;

// ============================================================================
// SECTION: Operator Documentation
// ============================================================================

/// Filter operator documentation surfaced verbatim in the search tool schema.
const OPERATOR_DOC: &str = "Filter operator\n\
Supported operators (with expected value format and behavior):\n\
\n\
- EQ (Equal): Matches records where the property exactly equals the given value.\n  \
Example: \"lifecyclestage\" EQ \"customer\"\n\
\n\
- NEQ (Not Equal): Matches records where the property does not equal the given value.\n  \
Example: \"country\" NEQ \"India\"\n\
\n\
- GT (Greater Than): Matches records where the property is greater than the given value.\n  \
Example: \"numberofemployees\" GT \"100\"\n\
\n\
- GTE (Greater Than or Equal): Matches records where the property is greater than or equal to the given value.\n  \
Example: \"revenue\" GTE \"50000\"\n\
\n\
- LT (Less Than): Matches records where the property is less than the given value.\n  \
Example: \"score\" LT \"75\"\n\
\n\
- LTE (Less Than or Equal): Matches records where the property is less than or equal to the given value.\n  \
Example: \"createdate\" LTE \"2023-01-01T00:00:00Z\"\n\
\n\
- BETWEEN: Matches records where the property is within a specified range.\n  \
Value must be a list of two values [start, end].\n  \
Example: \"createdate\" BETWEEN [\"2023-01-01T00:00:00Z\", \"2023-12-31T23:59:59Z\"]\n\
\n\
- IN: Matches records where the property is one of the values in the list.\n  \
Value must be a list.\n  \
Example: \"industry\" IN [\"Technology\", \"Healthcare\"]\n\
\n\
- NOT_IN: Matches records where the property is none of the values in the list.\n  \
Value must be a list.\n  \
Example: \"state\" NOT_IN [\"CA\", \"NY\"]\n\
\n\
- CONTAINS_TOKEN: Matches records where the property contains the given word/token (case-insensitive).\n  \
Example: \"notes\" CONTAINS_TOKEN \"demo\"\n\
\n\
- NOT_CONTAINS_TOKEN: Matches records where the property does NOT contain the given word/token.\n  \
Example: \"comments\" NOT_CONTAINS_TOKEN \"urgent\"\n\
\n\
- STARTS_WITH: Matches records where the property value starts with the given substring.\n  \
Example: \"firstname\" STARTS_WITH \"Jo\"\n\
\n\
- ENDS_WITH: Matches records where the property value ends with the given substring.\n  \
Example: \"email\" ENDS_WITH \"@gmail.com\"\n\
\n\
- ON_OR_AFTER: For datetime fields, matches records where the date is the same or after the given value.\n  \
Example: \"createdate\" ON_OR_AFTER \"2024-01-01T00:00:00Z\"\n\
\n\
- ON_OR_BEFORE: For datetime fields, matches records where the date is the same or before the given value.\n  \
Example: \"closedate\" ON_OR_BEFORE \"2024-12-31T23:59:59Z\"\n\
\n\
Value type rules:\n\
- If the operator expects a list (e.g., IN, BETWEEN), pass value as a JSON-encoded string list: '[\"a\", \"b\"]'\n\
- All other operators expect a single string (even for numbers or dates)";

// ============================================================================
// SECTION: Tool Definitions
// ============================================================================

/// Returns the canonical MCP tool definitions.
///
/// The order is intentional: clients see it in `tools/list` and existing
/// integrations depend on it staying stable. Append new tools at the end.
#[must_use]
pub fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        list_properties_definition(),
        search_by_property_definition(),
        get_contacts_definition(),
        get_contact_by_id_definition(),
        create_property_definition(),
        delete_contact_by_id_definition(),
        create_contact_definition(),
        update_contact_by_id_definition(),
        create_company_definition(),
        get_companies_definition(),
        get_company_by_id_definition(),
        update_company_by_id_definition(),
        delete_company_by_id_definition(),
        get_deals_definition(),
        get_deal_by_id_definition(),
        create_deal_definition(),
        update_deal_by_id_definition(),
        delete_deal_by_id_definition(),
        get_tickets_definition(),
        get_ticket_by_id_definition(),
        create_ticket_definition(),
        update_ticket_by_id_definition(),
        delete_ticket_by_id_definition(),
    ]
}

/// Builds the definition for `hubspot_list_properties`.
fn list_properties_definition() -> ToolDefinition {
    build_tool_definition(
        ToolName::ListProperties,
        "List all property metadata for a HubSpot object type like contacts, companies, deals, \
         or tickets.",
        object_schema(
            &json!({
                "object_type": {
                    "type": "string",
                    "description": "The HubSpot object type. One of 'contacts', 'companies', 'deals', or 'tickets'.",
                    "enum": ["contacts", "companies", "deals", "tickets"]
                }
            }),
            &["object_type"],
        ),
    )
}

/// Builds the definition for `hubspot_search_by_property`.
fn search_by_property_definition() -> ToolDefinition {
    build_tool_definition(
        ToolName::SearchByProperty,
        "Search HubSpot objects by a specific property and value using a filter operator.",
        object_schema(
            &json!({
                "object_type": schema_for_string(
                    "The object type to search (contacts, companies, deals, tickets)."
                ),
                "property_name": schema_for_string("The property name to filter by."),
                "operator": schema_for_string(OPERATOR_DOC),
                "value": schema_for_string("The value to match against the property."),
                "properties": schema_for_string_array(
                    "List of properties to return in the result."
                ),
                "limit": {
                    "type": "integer",
                    "default": 10,
                    "description": "Maximum number of results to return."
                }
            }),
            &["object_type", "property_name", "operator", "value", "properties"],
        ),
    )
}

/// Builds the definition for `get_HubSpot_contacts`.
fn get_contacts_definition() -> ToolDefinition {
    build_tool_definition(
        ToolName::GetContacts,
        "Fetch a list of contacts from HubSpot.",
        object_schema(
            &json!({
                "limit": schema_for_limit("Number of contacts to retrieve. Defaults to 10.")
            }),
            &[],
        ),
    )
}

/// Builds the definition for `get_HubSpot_contact_by_id`.
fn get_contact_by_id_definition() -> ToolDefinition {
    build_tool_definition(
        ToolName::GetContactById,
        "Get a specific contact by HubSpot contact ID.",
        object_schema(
            &json!({
                "contact_id": schema_for_string("The HubSpot contact ID.")
            }),
            &["contact_id"],
        ),
    )
}

/// Builds the definition for `hubspot_create_property`.
fn create_property_definition() -> ToolDefinition {
    build_tool_definition(
        ToolName::CreateProperty,
        "Create a new custom property for HubSpot contacts.",
        object_schema(
            &json!({
                "name": schema_for_string("Internal name of the property."),
                "label": schema_for_string("Label shown in the HubSpot UI."),
                "description": schema_for_string("Description of the property."),
                "object_type": schema_for_string(
                    "Type of the property, 'contacts', 'companies', 'deals' or 'tickets'"
                )
            }),
            &["name", "label", "description", "object_type"],
        ),
    )
}

/// Builds the definition for `hubspot_delete_contant_by_id`.
fn delete_contact_by_id_definition() -> ToolDefinition {
    build_tool_definition(
        ToolName::DeleteContactById,
        "Delete a contact from HubSpot by contact ID.",
        object_schema(
            &json!({
                "contact_id": schema_for_string("The HubSpot contact ID to delete.")
            }),
            &["contact_id"],
        ),
    )
}

/// Builds the definition for `hubspot_create_contact`.
fn create_contact_definition() -> ToolDefinition {
    build_tool_definition(
        ToolName::CreateContact,
        "Create a new contact using a JSON string of properties.",
        object_schema(
            &json!({
                "properties": schema_for_string(
                    "JSON string containing contact fields and values."
                )
            }),
            &["properties"],
        ),
    )
}

/// Builds the definition for `hubspot_update_contact_by_id`.
fn update_contact_by_id_definition() -> ToolDefinition {
    build_tool_definition(
        ToolName::UpdateContactById,
        "Update a contact in HubSpot by contact ID using JSON property updates.",
        object_schema(
            &json!({
                "contact_id": schema_for_string("HubSpot contact ID to update."),
                "updates": schema_for_string("JSON string with fields to update.")
            }),
            &["contact_id", "updates"],
        ),
    )
}

/// Builds the definition for `hubspot_create_companies`.
fn create_company_definition() -> ToolDefinition {
    build_tool_definition(
        ToolName::CreateCompany,
        "Create a new company using a JSON string of fields.",
        object_schema(
            &json!({
                "properties": schema_for_string(
                    "JSON string containing company fields and values."
                )
            }),
            &["properties"],
        ),
    )
}

/// Builds the definition for `get_HubSpot_companies`.
fn get_companies_definition() -> ToolDefinition {
    build_tool_definition(
        ToolName::GetCompanies,
        "Fetch a list of companies from HubSpot.",
        object_schema(
            &json!({
                "limit": schema_for_limit("Number of companies to retrieve. Defaults to 10.")
            }),
            &[],
        ),
    )
}

/// Builds the definition for `get_HubSpot_companies_by_id`.
fn get_company_by_id_definition() -> ToolDefinition {
    build_tool_definition(
        ToolName::GetCompanyById,
        "Get a company from HubSpot by company ID.",
        object_schema(
            &json!({
                "company_id": schema_for_string("The HubSpot company ID.")
            }),
            &["company_id"],
        ),
    )
}

/// Builds the definition for `hubspot_update_company_by_id`.
fn update_company_by_id_definition() -> ToolDefinition {
    build_tool_definition(
        ToolName::UpdateCompanyById,
        "Update an existing company by ID using JSON property updates.",
        object_schema(
            &json!({
                "company_id": schema_for_string("The HubSpot company ID to update."),
                "updates": schema_for_string("JSON string with fields to update.")
            }),
            &["company_id", "updates"],
        ),
    )
}

/// Builds the definition for `hubspot_delete_company_by_id`.
fn delete_company_by_id_definition() -> ToolDefinition {
    build_tool_definition(
        ToolName::DeleteCompanyById,
        "Delete a company from HubSpot by company ID.",
        object_schema(
            &json!({
                "company_id": schema_for_string("The HubSpot company ID to delete.")
            }),
            &["company_id"],
        ),
    )
}

/// Builds the definition for `get_HubSpot_deals`.
fn get_deals_definition() -> ToolDefinition {
    build_tool_definition(
        ToolName::GetDeals,
        "Fetch a list of deals from HubSpot.",
        object_schema(
            &json!({
                "limit": schema_for_limit("Number of deals to retrieve. Defaults to 10.")
            }),
            &[],
        ),
    )
}

/// Builds the definition for `get_HubSpot_deal_by_id`.
fn get_deal_by_id_definition() -> ToolDefinition {
    build_tool_definition(
        ToolName::GetDealById,
        "Fetch a deal by its ID.",
        object_schema(
            &json!({
                "deal_id": schema_for_string("The HubSpot deal ID.")
            }),
            &["deal_id"],
        ),
    )
}

/// Builds the definition for `hubspot_create_deal`.
fn create_deal_definition() -> ToolDefinition {
    build_tool_definition(
        ToolName::CreateDeal,
        "Create a new deal using a JSON string of properties.",
        object_schema(
            &json!({
                "properties": schema_for_string("JSON string with fields to create the deal.")
            }),
            &["properties"],
        ),
    )
}

/// Builds the definition for `hubspot_update_deal_by_id`.
fn update_deal_by_id_definition() -> ToolDefinition {
    build_tool_definition(
        ToolName::UpdateDealById,
        "Update an existing deal using a JSON string of updated properties.",
        object_schema(
            &json!({
                "deal_id": schema_for_string("The ID of the deal to update."),
                "updates": schema_for_string("JSON string of the properties to update.")
            }),
            &["deal_id", "updates"],
        ),
    )
}

/// Builds the definition for `hubspot_delete_deal_by_id`.
fn delete_deal_by_id_definition() -> ToolDefinition {
    build_tool_definition(
        ToolName::DeleteDealById,
        "Delete a deal from HubSpot by deal ID.",
        object_schema(
            &json!({
                "deal_id": schema_for_string("The ID of the deal to delete.")
            }),
            &["deal_id"],
        ),
    )
}

/// Builds the definition for `get_HubSpot_tickets`.
fn get_tickets_definition() -> ToolDefinition {
    build_tool_definition(
        ToolName::GetTickets,
        "Fetch a list of tickets from HubSpot.",
        object_schema(
            &json!({
                "limit": schema_for_limit("Number of tickets to retrieve. Defaults to 10.")
            }),
            &[],
        ),
    )
}

/// Builds the definition for `get_HubSpot_ticket_by_id`.
fn get_ticket_by_id_definition() -> ToolDefinition {
    build_tool_definition(
        ToolName::GetTicketById,
        "Fetch a ticket by its ID.",
        object_schema(
            &json!({
                "ticket_id": schema_for_string("The HubSpot ticket ID.")
            }),
            &["ticket_id"],
        ),
    )
}

/// Builds the definition for `hubspot_create_ticket`.
fn create_ticket_definition() -> ToolDefinition {
    build_tool_definition(
        ToolName::CreateTicket,
        "Create a new ticket using a JSON string of properties.",
        object_schema(
            &json!({
                "properties": schema_for_string("JSON string with fields to create the ticket.")
            }),
            &["properties"],
        ),
    )
}

/// Builds the definition for `hubspot_update_ticket_by_id`.
fn update_ticket_by_id_definition() -> ToolDefinition {
    build_tool_definition(
        ToolName::UpdateTicketById,
        "Update an existing ticket using a JSON string of updated properties.",
        object_schema(
            &json!({
                "ticket_id": schema_for_string("The ID of the ticket to update."),
                "updates": schema_for_string("JSON string of the properties to update.")
            }),
            &["ticket_id", "updates"],
        ),
    )
}

/// Builds the definition for `hubspot_delete_ticket_by_id`.
fn delete_ticket_by_id_definition() -> ToolDefinition {
    build_tool_definition(
        ToolName::DeleteTicketById,
        "Delete a ticket from HubSpot by ticket ID.",
        object_schema(
            &json!({
                "ticket_id": schema_for_string("The ID of the ticket to delete.")
            }),
            &["ticket_id"],
        ),
    )
}

// ============================================================================
// SECTION: Schema Helpers
// ============================================================================

/// Assembles a `ToolDefinition` from its parts.
fn build_tool_definition(name: ToolName, description: &str, input_schema: Value) -> ToolDefinition {
    ToolDefinition {
        name,
        description: description.to_string(),
        input_schema,
    }
}

/// Returns an object schema with the given properties and required keys.
fn object_schema(properties: &Value, required: &[&str]) -> Value {
    if required.is_empty() {
        json!({
            "type": "object",
            "properties": properties
        })
    } else {
        json!({
            "type": "object",
            "properties": properties,
            "required": required
        })
    }
}

/// Returns a JSON schema for strings.
fn schema_for_string(description: &str) -> Value {
    json!({
        "type": "string",
        "description": description
    })
}

/// Returns a JSON schema for string arrays.
fn schema_for_string_array(description: &str) -> Value {
    json!({
        "type": "array",
        "items": { "type": "string" },
        "description": description
    })
}

/// Returns the page-size schema shared by the listing tools.
fn schema_for_limit(description: &str) -> Value {
    json!({
        "type": "integer",
        "description": description,
        "default": 10,
        "minimum": 1
    })
}
