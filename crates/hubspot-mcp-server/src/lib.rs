// crates/hubspot-mcp-server/src/lib.rs
// ============================================================================
// Module: HubSpot MCP Server
// Description: Tool dispatch, validation, and MCP transports.
// Purpose: Expose the CRM tool surface via JSON-RPC 2.0 over HTTP.
// Dependencies: hubspot-mcp-backend, hubspot-mcp-contract, axum, tokio
// ============================================================================

//! ## Overview
//! This crate turns the contract catalog and the CRM backend into a running
//! MCP server. Incoming calls are validated against the published input
//! schemas, dispatched through [`tools::ToolRouter`], and served over two
//! transports: the session-oriented SSE pair (`GET /sse` +
//! `POST /messages/`) and the stateless streamable endpoint (`POST /mcp`).
//! Tool failures are surfaced as `Error: ...` text content, never as
//! protocol-level faults.

pub mod config;
pub mod context;
pub mod rpc;
pub mod server;
pub mod tools;
pub mod validation;

pub use config::ServerConfig;
pub use context::RequestContext;
pub use server::McpServer;
pub use server::McpServerError;
pub use tools::ToolRouter;
