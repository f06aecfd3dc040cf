// crates/hubspot-mcp-server/tests/dispatch_surface.rs
// ============================================================================
// Module: Dispatch Surface Integration Tests
// Description: Drives every cataloged tool through the router end to end.
// Purpose: Catch catalog/dispatch drift across the contract and server crates.
// Dependencies: hubspot-mcp-server, hubspot-mcp-backend, hubspot-mcp-contract
// ============================================================================

//! ## Overview
//! Walks the published catalog and invokes each tool with minimal valid
//! arguments against an in-memory backend. Every call must produce a real
//! tool result: no `Unknown tool:` and no `Error:` text. This is the drift
//! alarm for a tool added to the catalog without a dispatch arm, or renamed
//! in one place only.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions use panic-based helpers for clarity."
)]

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;

use hubspot_mcp_backend::BackendError;
use hubspot_mcp_backend::CrmBackend;
use hubspot_mcp_backend::CrmObject;
use hubspot_mcp_backend::ObjectType;
use hubspot_mcp_backend::PropertyCreate;
use hubspot_mcp_backend::PropertyFilter;
use hubspot_mcp_backend::PropertyMetadata;
use hubspot_mcp_contract::ToolName;
use hubspot_mcp_contract::tool_definitions;
use hubspot_mcp_server::RequestContext;
use hubspot_mcp_server::ToolRouter;
use hubspot_mcp_server::context::ServerTransport;

/// Backend that answers every operation with plausible data.
struct InMemoryBackend;

fn sample_object(id: &str) -> CrmObject {
    let mut properties = Map::new();
    properties.insert("email".to_string(), Value::String("a@b.com".to_string()));
    CrmObject {
        id: id.to_string(),
        properties,
        extra: Map::new(),
    }
}

#[async_trait]
impl CrmBackend for InMemoryBackend {
    async fn list_properties(
        &self,
        _object_type: ObjectType,
        _token: Option<&str>,
    ) -> Result<Vec<PropertyMetadata>, BackendError> {
        Ok(vec![PropertyMetadata {
            name: "email".to_string(),
            label: "Email".to_string(),
            kind: "string".to_string(),
            field_type: "text".to_string(),
        }])
    }

    async fn create_property(
        &self,
        _object_type: ObjectType,
        _property: &PropertyCreate,
        _token: Option<&str>,
    ) -> Result<(), BackendError> {
        Ok(())
    }

    async fn list_objects(
        &self,
        _object_type: ObjectType,
        limit: usize,
        _token: Option<&str>,
    ) -> Result<Vec<CrmObject>, BackendError> {
        Ok((0..limit.min(3)).map(|index| sample_object(&index.to_string())).collect())
    }

    async fn get_object(
        &self,
        _object_type: ObjectType,
        id: &str,
        _token: Option<&str>,
    ) -> Result<CrmObject, BackendError> {
        Ok(sample_object(id))
    }

    async fn create_object(
        &self,
        _object_type: ObjectType,
        properties: &Map<String, Value>,
        _token: Option<&str>,
    ) -> Result<CrmObject, BackendError> {
        Ok(CrmObject {
            id: "1001".to_string(),
            properties: properties.clone(),
            extra: Map::new(),
        })
    }

    async fn update_object(
        &self,
        _object_type: ObjectType,
        id: &str,
        properties: &Map<String, Value>,
        _token: Option<&str>,
    ) -> Result<CrmObject, BackendError> {
        Ok(CrmObject {
            id: id.to_string(),
            properties: properties.clone(),
            extra: Map::new(),
        })
    }

    async fn delete_object(
        &self,
        _object_type: ObjectType,
        _id: &str,
        _token: Option<&str>,
    ) -> Result<(), BackendError> {
        Ok(())
    }

    async fn search_objects(
        &self,
        _object_type: ObjectType,
        _filter: &PropertyFilter,
        properties: &[String],
        _limit: usize,
        _token: Option<&str>,
    ) -> Result<Vec<Map<String, Value>>, BackendError> {
        let mut bag = Map::new();
        for property in properties {
            bag.insert(property.clone(), Value::String("x".to_string()));
        }
        Ok(vec![bag])
    }
}

/// Minimal valid arguments for each cataloged tool.
fn arguments_for(tool: ToolName) -> Value {
    match tool {
        ToolName::ListProperties => json!({ "object_type": "contacts" }),
        ToolName::SearchByProperty => json!({
            "object_type": "companies",
            "property_name": "industry",
            "operator": "IN",
            "value": "[\"Technology\"]",
            "properties": ["industry", "name"]
        }),
        ToolName::CreateProperty => json!({
            "name": "favorite_color",
            "label": "Favorite Color",
            "description": "Preferred color",
            "object_type": "contacts"
        }),
        ToolName::GetContacts | ToolName::GetCompanies | ToolName::GetDeals
        | ToolName::GetTickets => json!({ "limit": 3 }),
        ToolName::GetContactById | ToolName::DeleteContactById => {
            json!({ "contact_id": "42" })
        }
        ToolName::GetCompanyById | ToolName::DeleteCompanyById => {
            json!({ "company_id": "42" })
        }
        ToolName::GetDealById | ToolName::DeleteDealById => json!({ "deal_id": "42" }),
        ToolName::GetTicketById | ToolName::DeleteTicketById => json!({ "ticket_id": "42" }),
        ToolName::CreateContact | ToolName::CreateCompany | ToolName::CreateDeal
        | ToolName::CreateTicket => json!({ "properties": "{\"name\": \"x\"}" }),
        ToolName::UpdateContactById => {
            json!({ "contact_id": "42", "updates": "{\"name\": \"x\"}" })
        }
        ToolName::UpdateCompanyById => {
            json!({ "company_id": "42", "updates": "{\"name\": \"x\"}" })
        }
        ToolName::UpdateDealById => json!({ "deal_id": "42", "updates": "{\"name\": \"x\"}" }),
        ToolName::UpdateTicketById => {
            json!({ "ticket_id": "42", "updates": "{\"name\": \"x\"}" })
        }
    }
}

#[tokio::test]
async fn every_cataloged_tool_dispatches_cleanly() {
    let router = ToolRouter::new(Arc::new(InMemoryBackend));
    let context = RequestContext::http(ServerTransport::StreamableHttp, None, None);
    for definition in tool_definitions() {
        let text = router
            .handle_tool_call(&context, definition.name.as_str(), arguments_for(definition.name))
            .await;
        assert!(!text.starts_with("Unknown tool:"), "{}: {text}", definition.name);
        assert!(!text.starts_with("Error:"), "{}: {text}", definition.name);
    }
}

#[tokio::test]
async fn mutation_tools_report_their_status_strings() {
    let router = ToolRouter::new(Arc::new(InMemoryBackend));
    let context = RequestContext::http(ServerTransport::StreamableHttp, None, None);
    let deleted = router
        .handle_tool_call(&context, "hubspot_delete_deal_by_id", json!({ "deal_id": "42" }))
        .await;
    assert_eq!(deleted, "Deleted");
    let created = router
        .handle_tool_call(&context, "hubspot_create_property", arguments_for(ToolName::CreateProperty))
        .await;
    assert_eq!(created, "Property Created");
}

#[tokio::test]
async fn create_then_fetch_round_trips_the_generated_id() {
    let router = ToolRouter::new(Arc::new(InMemoryBackend));
    let context = RequestContext::http(ServerTransport::StreamableHttp, None, None);
    let created = router
        .handle_tool_call(
            &context,
            "hubspot_create_contact",
            json!({ "properties": "{\"email\": \"new@b.com\"}" }),
        )
        .await;
    let created: Value = serde_json::from_str(&created).unwrap();
    let id = created["id"].as_str().unwrap();
    let fetched = router
        .handle_tool_call(&context, "get_HubSpot_contact_by_id", json!({ "contact_id": id }))
        .await;
    let fetched: Value = serde_json::from_str(&fetched).unwrap();
    assert_eq!(fetched["id"], created["id"]);
}
