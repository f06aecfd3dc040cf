// crates/hubspot-mcp-server/src/rpc.rs
// ============================================================================
// Module: JSON-RPC Envelope
// Description: JSON-RPC 2.0 request/response types and MCP result shapes.
// Purpose: One envelope shared by every transport.
// Dependencies: serde, serde_json, hubspot-mcp-contract
// ============================================================================

//! ## Overview
//! JSON-RPC 2.0 types plus the MCP-specific result payloads (`tools/list`
//! and `tools/call`). Envelope problems map to the standard codes: -32600
//! invalid request, -32601 method not found, -32602 invalid params. Tool
//! failures never appear here; they travel as `Error: ...` text content
//! inside a successful response.

use serde::Deserialize;
use serde::Serialize;
use serde_json::Value;
use serde_json::json;

use hubspot_mcp_contract::ToolDefinition;

/// Incoming JSON-RPC request payload.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcRequest {
    /// JSON-RPC protocol version.
    pub jsonrpc: String,
    /// Request identifier. Absent for notifications.
    #[serde(default)]
    pub id: Value,
    /// Method name.
    pub method: String,
    /// Optional parameters payload.
    #[serde(default)]
    pub params: Option<Value>,
}

impl JsonRpcRequest {
    /// Whether this request is a notification (no id, no response owed).
    #[must_use]
    pub fn is_notification(&self) -> bool {
        self.id.is_null()
    }
}

/// JSON-RPC response envelope.
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    /// JSON-RPC protocol version.
    pub jsonrpc: &'static str,
    /// Request identifier.
    pub id: Value,
    /// Successful result payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error payload when the request fails.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

impl JsonRpcResponse {
    /// Builds a success response.
    #[must_use]
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Builds an error response.
    #[must_use]
    pub fn failure(id: Value, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0",
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
            }),
        }
    }

    /// Builds a -32600 invalid-request response.
    #[must_use]
    pub fn invalid_request(id: Value, message: impl Into<String>) -> Self {
        Self::failure(id, -32600, message)
    }

    /// Builds a -32601 method-not-found response.
    #[must_use]
    pub fn method_not_found(id: Value) -> Self {
        Self::failure(id, -32601, "method not found")
    }

    /// Builds a -32602 invalid-params response.
    #[must_use]
    pub fn invalid_params(id: Value, message: impl Into<String>) -> Self {
        Self::failure(id, -32602, message)
    }
}

/// JSON-RPC error payload.
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    /// Error code.
    pub code: i64,
    /// Human-readable error message.
    pub message: String,
}

/// Tool call parameters for `tools/call`.
#[derive(Debug, Deserialize)]
pub struct ToolCallParams {
    /// Tool name as sent by the client.
    pub name: String,
    /// Raw JSON arguments. Defaults to an empty object.
    #[serde(default)]
    pub arguments: Value,
}

/// Tool list response payload.
#[derive(Debug, Serialize)]
pub struct ToolListResult {
    /// Registered tool definitions in catalog order.
    pub tools: Vec<ToolDefinition>,
}

/// Tool call response payload.
#[derive(Debug, Serialize)]
pub struct ToolCallResult {
    /// Tool output content.
    pub content: Vec<ToolContent>,
}

impl ToolCallResult {
    /// Wraps tool output text in the MCP content shape.
    #[must_use]
    pub fn text(text: String) -> Self {
        Self {
            content: vec![ToolContent::Text { text }],
        }
    }
}

/// Tool output payloads for JSON-RPC responses.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ToolContent {
    /// Plain text tool output.
    Text {
        /// Text payload.
        text: String,
    },
}

/// Builds the `initialize` result payload.
#[must_use]
pub fn initialize_result() -> Value {
    json!({
        "protocolVersion": "2025-03-26",
        "capabilities": { "tools": { "listChanged": false } },
        "serverInfo": {
            "name": "hubspot-mcp-server",
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}
