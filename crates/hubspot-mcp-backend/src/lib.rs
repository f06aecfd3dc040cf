// crates/hubspot-mcp-backend/src/lib.rs
// ============================================================================
// Module: HubSpot MCP Backend
// Description: CRM domain types and the HubSpot REST adapter.
// Purpose: Isolate all knowledge of the remote CRM behind one trait seam.
// Dependencies: async-trait, reqwest, serde, serde_json, thiserror, tracing
// ============================================================================

//! ## Overview
//! This crate owns everything that touches the remote CRM: the `CrmBackend`
//! trait the dispatcher programs against, the domain records decoded from
//! the CRM's property-bag JSON, the closed filter-operator set, and the
//! `HubSpotClient` that speaks the v3 REST surface. Credentials are passed
//! per call so a connection-scoped token can override the process-level one
//! without any global state.

pub mod backend;
pub mod client;
pub mod error;
pub mod filters;
pub mod types;

pub use backend::CrmBackend;
pub use client::HubSpotClient;
pub use error::BackendError;
pub use filters::FilterOperator;
pub use filters::PropertyFilter;
pub use types::CrmObject;
pub use types::ObjectPage;
pub use types::ObjectType;
pub use types::PropertyCreate;
pub use types::PropertyMetadata;
