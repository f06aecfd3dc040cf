// crates/hubspot-mcp-server/src/tools.rs
// ============================================================================
// Module: MCP Tool Router
// Description: Tool routing for the HubSpot MCP server.
// Purpose: Expose thin wrappers over the CRM backend.
// Dependencies: hubspot-mcp-backend, hubspot-mcp-contract
// ============================================================================

//! ## Overview
//! The tool router dispatches MCP tool calls to the CRM backend. Each call
//! moves through a fixed sequence: the name is resolved, the arguments are
//! validated against the published input schema, and only then does a
//! handler touch the backend. Every failure, validation or backend alike,
//! flattens into an `Error: ...` text result so clients always receive a
//! well-formed tool response.
//!
//! ## Invariants
//! - An unknown tool name never reaches the backend.
//! - Arguments that fail validation never reach the backend.
//! - The caller's credential is taken from the request context only.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;

use serde_json::Map;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use tracing::warn;

use hubspot_mcp_backend::BackendError;
use hubspot_mcp_backend::CrmBackend;
use hubspot_mcp_backend::ObjectType;
use hubspot_mcp_backend::PropertyCreate;
use hubspot_mcp_backend::PropertyFilter;
use hubspot_mcp_backend::filters::FilterError;
use hubspot_mcp_contract::ToolDefinition;
use hubspot_mcp_contract::ToolName;
use hubspot_mcp_contract::tool_definitions;

use crate::context::RequestContext;
use crate::validation::ValidationError;
use crate::validation::validate_arguments;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Fallback page size for the listing and search tools.
const DEFAULT_LIMIT: usize = 10;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Failures produced while executing a tool call.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The arguments failed schema validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// The search filter was malformed.
    #[error(transparent)]
    Filter(#[from] FilterError),
    /// The backend call failed.
    #[error(transparent)]
    Backend(#[from] BackendError),
    /// The arguments passed validation but could not be interpreted.
    #[error("{0}")]
    InvalidParams(String),
    /// The result could not be serialized.
    #[error("serialization failed")]
    Serialization,
}

// ============================================================================
// SECTION: Tool Router
// ============================================================================

/// Routes validated tool calls to the CRM backend.
pub struct ToolRouter {
    /// Backend every handler calls through.
    backend: Arc<dyn CrmBackend>,
    /// Published tool catalog, also the validation source.
    definitions: Vec<ToolDefinition>,
}

impl ToolRouter {
    /// Builds a router over the given backend.
    #[must_use]
    pub fn new(backend: Arc<dyn CrmBackend>) -> Self {
        Self {
            backend,
            definitions: tool_definitions(),
        }
    }

    /// Returns the published tool catalog.
    #[must_use]
    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        self.definitions.clone()
    }

    /// Executes a tool call and returns the text content for the response.
    ///
    /// Failures are part of the tool surface, not the protocol: an unknown
    /// name yields `Unknown tool: <name>` and every other failure yields
    /// `Error: <message>`.
    pub async fn handle_tool_call(
        &self,
        context: &RequestContext,
        name: &str,
        arguments: Value,
    ) -> String {
        let Some(tool) = ToolName::parse(name) else {
            warn!(tool = name, "unknown tool requested");
            return format!("Unknown tool: {name}");
        };
        debug!(tool = %tool, "tool call received");
        match self.dispatch(context, tool, arguments).await {
            Ok(text) => {
                debug!(tool = %tool, "tool call completed");
                text
            }
            Err(err) => {
                warn!(tool = %tool, error = %err, "tool call failed");
                format!("Error: {err}")
            }
        }
    }

    /// Validates the arguments and runs the matching handler.
    async fn dispatch(
        &self,
        context: &RequestContext,
        tool: ToolName,
        arguments: Value,
    ) -> Result<String, ToolError> {
        let schema = self
            .definitions
            .iter()
            .find(|definition| definition.name == tool)
            .map(|definition| &definition.input_schema)
            .ok_or_else(|| ToolError::InvalidParams(format!("tool {tool} not registered")))?;
        let args = validate_arguments(schema, arguments)?;
        debug!(tool = %tool, "arguments validated");
        let token = context.token();
        match tool {
            ToolName::ListProperties => self.handle_list_properties(&args, token).await,
            ToolName::SearchByProperty => self.handle_search_by_property(&args, token).await,
            ToolName::CreateProperty => self.handle_create_property(&args, token).await,
            ToolName::GetContacts => self.handle_list(ObjectType::Contacts, &args, token).await,
            ToolName::GetCompanies => self.handle_list(ObjectType::Companies, &args, token).await,
            ToolName::GetDeals => self.handle_list(ObjectType::Deals, &args, token).await,
            ToolName::GetTickets => self.handle_list(ObjectType::Tickets, &args, token).await,
            ToolName::GetContactById => {
                self.handle_get(ObjectType::Contacts, &args, "contact_id", token).await
            }
            ToolName::GetCompanyById => {
                self.handle_get(ObjectType::Companies, &args, "company_id", token).await
            }
            ToolName::GetDealById => {
                self.handle_get(ObjectType::Deals, &args, "deal_id", token).await
            }
            ToolName::GetTicketById => {
                self.handle_get(ObjectType::Tickets, &args, "ticket_id", token).await
            }
            ToolName::CreateContact => self.handle_create(ObjectType::Contacts, &args, token).await,
            ToolName::CreateCompany => {
                self.handle_create(ObjectType::Companies, &args, token).await
            }
            ToolName::CreateDeal => self.handle_create(ObjectType::Deals, &args, token).await,
            ToolName::CreateTicket => self.handle_create(ObjectType::Tickets, &args, token).await,
            ToolName::UpdateContactById => {
                self.handle_update(ObjectType::Contacts, &args, "contact_id", token).await
            }
            ToolName::UpdateCompanyById => {
                self.handle_update(ObjectType::Companies, &args, "company_id", token).await
            }
            ToolName::UpdateDealById => {
                self.handle_update(ObjectType::Deals, &args, "deal_id", token).await
            }
            ToolName::UpdateTicketById => {
                self.handle_update(ObjectType::Tickets, &args, "ticket_id", token).await
            }
            ToolName::DeleteContactById => {
                self.handle_delete(ObjectType::Contacts, &args, "contact_id", token).await
            }
            ToolName::DeleteCompanyById => {
                self.handle_delete(ObjectType::Companies, &args, "company_id", token).await
            }
            ToolName::DeleteDealById => {
                self.handle_delete(ObjectType::Deals, &args, "deal_id", token).await
            }
            ToolName::DeleteTicketById => {
                self.handle_delete(ObjectType::Tickets, &args, "ticket_id", token).await
            }
        }
    }

    /// Handles `hubspot_list_properties`.
    async fn handle_list_properties(
        &self,
        args: &Map<String, Value>,
        token: Option<&str>,
    ) -> Result<String, ToolError> {
        let object_type = require_object_type(args)?;
        let properties = self.backend.list_properties(object_type, token).await?;
        encode(&properties)
    }

    /// Handles `hubspot_search_by_property`.
    async fn handle_search_by_property(
        &self,
        args: &Map<String, Value>,
        token: Option<&str>,
    ) -> Result<String, ToolError> {
        let object_type = require_object_type(args)?;
        let filter = PropertyFilter::new(
            require_str(args, "property_name")?,
            require_str(args, "operator")?,
            require_str(args, "value")?,
        )?;
        let properties: Vec<String> = args
            .get("properties")
            .and_then(Value::as_array)
            .map(|entries| {
                entries.iter().filter_map(Value::as_str).map(str::to_string).collect()
            })
            .unwrap_or_default();
        let limit = limit_from(args);
        let results = self
            .backend
            .search_objects(object_type, &filter, &properties, limit, token)
            .await?;
        encode(&results)
    }

    /// Handles `hubspot_create_property`.
    async fn handle_create_property(
        &self,
        args: &Map<String, Value>,
        token: Option<&str>,
    ) -> Result<String, ToolError> {
        let object_type = require_object_type(args)?;
        let property = PropertyCreate::string_property(
            object_type,
            require_str(args, "name")?,
            require_str(args, "label")?,
            require_str(args, "description")?,
        );
        self.backend.create_property(object_type, &property, token).await?;
        Ok("Property Created".to_string())
    }

    /// Handles the listing tools.
    async fn handle_list(
        &self,
        object_type: ObjectType,
        args: &Map<String, Value>,
        token: Option<&str>,
    ) -> Result<String, ToolError> {
        let objects = self.backend.list_objects(object_type, limit_from(args), token).await?;
        encode(&objects)
    }

    /// Handles the fetch-by-id tools.
    async fn handle_get(
        &self,
        object_type: ObjectType,
        args: &Map<String, Value>,
        id_field: &str,
        token: Option<&str>,
    ) -> Result<String, ToolError> {
        let object = self.backend.get_object(object_type, require_str(args, id_field)?, token).await?;
        encode(&object)
    }

    /// Handles the create tools. The `properties` argument is a JSON string
    /// of fields; the created record comes back so callers learn its id.
    async fn handle_create(
        &self,
        object_type: ObjectType,
        args: &Map<String, Value>,
        token: Option<&str>,
    ) -> Result<String, ToolError> {
        let properties = decode_property_bag(require_str(args, "properties")?)?;
        let object = self.backend.create_object(object_type, &properties, token).await?;
        encode(&object)
    }

    /// Handles the update tools.
    async fn handle_update(
        &self,
        object_type: ObjectType,
        args: &Map<String, Value>,
        id_field: &str,
        token: Option<&str>,
    ) -> Result<String, ToolError> {
        let updates = decode_property_bag(require_str(args, "updates")?)?;
        let object = self
            .backend
            .update_object(object_type, require_str(args, id_field)?, &updates, token)
            .await?;
        encode(&object)
    }

    /// Handles the delete tools.
    async fn handle_delete(
        &self,
        object_type: ObjectType,
        args: &Map<String, Value>,
        id_field: &str,
        token: Option<&str>,
    ) -> Result<String, ToolError> {
        self.backend.delete_object(object_type, require_str(args, id_field)?, token).await?;
        Ok("Deleted".to_string())
    }
}

// ============================================================================
// SECTION: Argument Helpers
// ============================================================================

/// Extracts a required string argument.
fn require_str<'a>(args: &'a Map<String, Value>, field: &str) -> Result<&'a str, ToolError> {
    args.get(field)
        .and_then(Value::as_str)
        .ok_or_else(|| ToolError::InvalidParams(format!("missing required parameter: {field}")))
}

/// Extracts and checks the `object_type` argument.
fn require_object_type(args: &Map<String, Value>) -> Result<ObjectType, ToolError> {
    let raw = require_str(args, "object_type")?;
    ObjectType::parse(raw)
        .ok_or_else(|| ToolError::InvalidParams(format!("Unsupported object type: {raw}")))
}

/// Reads the page-size argument, falling back to the shared default.
fn limit_from(args: &Map<String, Value>) -> usize {
    args.get("limit")
        .and_then(Value::as_u64)
        .map_or(DEFAULT_LIMIT, |limit| usize::try_from(limit).unwrap_or(DEFAULT_LIMIT))
}

/// Decodes a JSON-string property bag from the create/update tools.
fn decode_property_bag(raw: &str) -> Result<Map<String, Value>, ToolError> {
    serde_json::from_str::<Map<String, Value>>(raw)
        .map_err(|_| ToolError::InvalidParams("properties must be a JSON object string".to_string()))
}

/// Serializes a result compactly for the text content surface.
fn encode<T: serde::Serialize>(value: &T) -> Result<String, ToolError> {
    serde_json::to_string(value).map_err(|_| ToolError::Serialization)
}
