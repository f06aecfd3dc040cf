// crates/hubspot-mcp-server/src/config.rs
// ============================================================================
// Module: Server Configuration
// Description: Validated settings for the MCP server.
// Purpose: One place for bind and transport behavior knobs.
// Dependencies: std, thiserror
// ============================================================================

//! ## Overview
//! Server settings assembled by the CLI and validated before anything binds
//! a socket. The access token is the process-level fallback credential; a
//! request-scoped `x-auth-token` header always takes precedence over it.

use std::net::IpAddr;
use std::net::Ipv4Addr;
use std::net::SocketAddr;

use thiserror::Error;

/// Default listen port, overridable via `HUBSPOT_MCP_SERVER_PORT`.
pub const DEFAULT_PORT: u16 = 5000;

/// Configuration errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The configured port cannot be bound.
    #[error("port must be non-zero")]
    InvalidPort,
}

/// MCP server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,
    /// When set, `POST /mcp` answers with plain JSON instead of an SSE body.
    pub json_response: bool,
    /// Process-level access token used when a request carries none.
    pub access_token: Option<String>,
}

impl ServerConfig {
    /// Checks the configuration for unusable values.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when a setting cannot be served.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        Ok(())
    }

    /// Returns the socket address to bind.
    #[must_use]
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            json_response: false,
            access_token: None,
        }
    }
}
