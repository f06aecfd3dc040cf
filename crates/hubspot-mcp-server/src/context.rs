// crates/hubspot-mcp-server/src/context.rs
// ============================================================================
// Module: Request Context
// Description: Per-invocation transport and credential context.
// Purpose: Carry the caller's token structurally instead of globally.
// Dependencies: std
// ============================================================================

//! ## Overview
//! Every tool invocation carries a [`RequestContext`] built by the transport
//! that received it. The context owns the optional `x-auth-token` credential
//! for exactly that invocation; concurrent requests with different tokens
//! never observe each other's credential because nothing is stored in
//! globals or task-local state.

use std::net::IpAddr;

/// Transport a request arrived on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServerTransport {
    /// Session-oriented SSE transport (`GET /sse` + `POST /messages/`).
    Sse,
    /// Stateless streamable HTTP transport (`POST /mcp`).
    StreamableHttp,
}

/// Per-invocation request context.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Transport used by the caller.
    pub transport: ServerTransport,
    /// Peer IP address when available.
    pub peer_ip: Option<IpAddr>,
    /// Credential from the `x-auth-token` header, if any.
    pub auth_token: Option<String>,
    /// Optional request identifier for logging.
    pub request_id: Option<String>,
}

impl RequestContext {
    /// Builds a context for a transport-received request.
    #[must_use]
    pub fn http(
        transport: ServerTransport,
        peer_ip: Option<IpAddr>,
        auth_token: Option<String>,
    ) -> Self {
        Self {
            transport,
            peer_ip,
            auth_token,
            request_id: None,
        }
    }

    /// Returns a copy with the request identifier set.
    #[must_use]
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    /// Returns the effective credential. Empty headers count as absent so
    /// the backend falls back to its configured token.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.auth_token.as_deref().filter(|token| !token.is_empty())
    }
}
