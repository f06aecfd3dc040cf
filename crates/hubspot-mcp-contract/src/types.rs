// crates/hubspot-mcp-contract/src/types.rs
// ============================================================================
// Module: Contract Types
// Description: Canonical tool identifiers and tool definition records.
// Purpose: Shared tool naming across contract, dispatch, and transports.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! Canonical tool identifiers used by the HubSpot MCP server. These names are
//! part of the external contract surface and are preserved byte for byte,
//! including the historical `hubspot_delete_contant_by_id` spelling and the
//! mixed-case `get_HubSpot_*` prefixes that existing clients depend on.

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;

/// Canonical tool names for the HubSpot MCP server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ToolName {
    /// Lists property metadata for an object type.
    #[serde(rename = "hubspot_list_properties")]
    ListProperties,
    /// Searches objects by a property filter.
    #[serde(rename = "hubspot_search_by_property")]
    SearchByProperty,
    /// Fetches a page of contacts.
    #[serde(rename = "get_HubSpot_contacts")]
    GetContacts,
    /// Fetches one contact by id.
    #[serde(rename = "get_HubSpot_contact_by_id")]
    GetContactById,
    /// Creates a custom property definition.
    #[serde(rename = "hubspot_create_property")]
    CreateProperty,
    /// Deletes a contact by id. The misspelling is load-bearing.
    #[serde(rename = "hubspot_delete_contant_by_id")]
    DeleteContactById,
    /// Creates a contact from a JSON property string.
    #[serde(rename = "hubspot_create_contact")]
    CreateContact,
    /// Updates a contact by id.
    #[serde(rename = "hubspot_update_contact_by_id")]
    UpdateContactById,
    /// Creates a company from a JSON property string.
    #[serde(rename = "hubspot_create_companies")]
    CreateCompany,
    /// Fetches a page of companies.
    #[serde(rename = "get_HubSpot_companies")]
    GetCompanies,
    /// Fetches one company by id.
    #[serde(rename = "get_HubSpot_companies_by_id")]
    GetCompanyById,
    /// Updates a company by id.
    #[serde(rename = "hubspot_update_company_by_id")]
    UpdateCompanyById,
    /// Deletes a company by id.
    #[serde(rename = "hubspot_delete_company_by_id")]
    DeleteCompanyById,
    /// Fetches a page of deals.
    #[serde(rename = "get_HubSpot_deals")]
    GetDeals,
    /// Fetches one deal by id.
    #[serde(rename = "get_HubSpot_deal_by_id")]
    GetDealById,
    /// Creates a deal from a JSON property string.
    #[serde(rename = "hubspot_create_deal")]
    CreateDeal,
    /// Updates a deal by id.
    #[serde(rename = "hubspot_update_deal_by_id")]
    UpdateDealById,
    /// Deletes a deal by id.
    #[serde(rename = "hubspot_delete_deal_by_id")]
    DeleteDealById,
    /// Fetches a page of tickets.
    #[serde(rename = "get_HubSpot_tickets")]
    GetTickets,
    /// Fetches one ticket by id.
    #[serde(rename = "get_HubSpot_ticket_by_id")]
    GetTicketById,
    /// Creates a ticket from a JSON property string.
    #[serde(rename = "hubspot_create_ticket")]
    CreateTicket,
    /// Updates a ticket by id.
    #[serde(rename = "hubspot_update_ticket_by_id")]
    UpdateTicketById,
    /// Deletes a ticket by id.
    #[serde(rename = "hubspot_delete_ticket_by_id")]
    DeleteTicketById,
}

impl ToolName {
    /// Returns the canonical string form of the tool name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ListProperties => "hubspot_list_properties",
            Self::SearchByProperty => "hubspot_search_by_property",
            Self::GetContacts => "get_HubSpot_contacts",
            Self::GetContactById => "get_HubSpot_contact_by_id",
            Self::CreateProperty => "hubspot_create_property",
            Self::DeleteContactById => "hubspot_delete_contant_by_id",
            Self::CreateContact => "hubspot_create_contact",
            Self::UpdateContactById => "hubspot_update_contact_by_id",
            Self::CreateCompany => "hubspot_create_companies",
            Self::GetCompanies => "get_HubSpot_companies",
            Self::GetCompanyById => "get_HubSpot_companies_by_id",
            Self::UpdateCompanyById => "hubspot_update_company_by_id",
            Self::DeleteCompanyById => "hubspot_delete_company_by_id",
            Self::GetDeals => "get_HubSpot_deals",
            Self::GetDealById => "get_HubSpot_deal_by_id",
            Self::CreateDeal => "hubspot_create_deal",
            Self::UpdateDealById => "hubspot_update_deal_by_id",
            Self::DeleteDealById => "hubspot_delete_deal_by_id",
            Self::GetTickets => "get_HubSpot_tickets",
            Self::GetTicketById => "get_HubSpot_ticket_by_id",
            Self::CreateTicket => "hubspot_create_ticket",
            Self::UpdateTicketById => "hubspot_update_ticket_by_id",
            Self::DeleteTicketById => "hubspot_delete_ticket_by_id",
        }
    }

    /// Returns every tool name in registration order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::ListProperties,
            Self::SearchByProperty,
            Self::GetContacts,
            Self::GetContactById,
            Self::CreateProperty,
            Self::DeleteContactById,
            Self::CreateContact,
            Self::UpdateContactById,
            Self::CreateCompany,
            Self::GetCompanies,
            Self::GetCompanyById,
            Self::UpdateCompanyById,
            Self::DeleteCompanyById,
            Self::GetDeals,
            Self::GetDealById,
            Self::CreateDeal,
            Self::UpdateDealById,
            Self::DeleteDealById,
            Self::GetTickets,
            Self::GetTicketById,
            Self::CreateTicket,
            Self::UpdateTicketById,
            Self::DeleteTicketById,
        ]
    }

    /// Parses a tool name from its string representation.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "hubspot_list_properties" => Some(Self::ListProperties),
            "hubspot_search_by_property" => Some(Self::SearchByProperty),
            "get_HubSpot_contacts" => Some(Self::GetContacts),
            "get_HubSpot_contact_by_id" => Some(Self::GetContactById),
            "hubspot_create_property" => Some(Self::CreateProperty),
            "hubspot_delete_contant_by_id" => Some(Self::DeleteContactById),
            "hubspot_create_contact" => Some(Self::CreateContact),
            "hubspot_update_contact_by_id" => Some(Self::UpdateContactById),
            "hubspot_create_companies" => Some(Self::CreateCompany),
            "get_HubSpot_companies" => Some(Self::GetCompanies),
            "get_HubSpot_companies_by_id" => Some(Self::GetCompanyById),
            "hubspot_update_company_by_id" => Some(Self::UpdateCompanyById),
            "hubspot_delete_company_by_id" => Some(Self::DeleteCompanyById),
            "get_HubSpot_deals" => Some(Self::GetDeals),
            "get_HubSpot_deal_by_id" => Some(Self::GetDealById),
            "hubspot_create_deal" => Some(Self::CreateDeal),
            "hubspot_update_deal_by_id" => Some(Self::UpdateDealById),
            "hubspot_delete_deal_by_id" => Some(Self::DeleteDealById),
            "get_HubSpot_tickets" => Some(Self::GetTickets),
            "get_HubSpot_ticket_by_id" => Some(Self::GetTicketById),
            "hubspot_create_ticket" => Some(Self::CreateTicket),
            "hubspot_update_ticket_by_id" => Some(Self::UpdateTicketById),
            "hubspot_delete_ticket_by_id" => Some(Self::DeleteTicketById),
            _ => None,
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Tool definition shape used by MCP tool listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Canonical tool name.
    pub name: ToolName,
    /// Human-readable description shown to clients.
    pub description: String,
    /// JSON schema for the tool's arguments.
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}
