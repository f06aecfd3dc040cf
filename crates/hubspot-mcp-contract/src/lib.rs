// crates/hubspot-mcp-contract/src/lib.rs
// ============================================================================
// Module: HubSpot MCP Contract
// Description: Canonical tool names, definitions, and input schemas.
// Purpose: Single source of truth for the externally visible tool surface.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! This crate defines the external MCP tool surface of the HubSpot server:
//! the canonical tool names, their human-readable descriptions, and the JSON
//! input schemas clients see in `tools/list`. The same schema values drive
//! argument validation at dispatch time, so the published contract and the
//! enforced contract cannot drift apart.

pub mod tooling;
pub mod types;

pub use tooling::tool_definitions;
pub use types::ToolDefinition;
pub use types::ToolName;
