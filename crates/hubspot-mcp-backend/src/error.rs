// crates/hubspot-mcp-backend/src/error.rs
// ============================================================================
// Module: Backend Errors
// Description: Error taxonomy for CRM adapter failures.
// Purpose: Map transport and API failures into a small, stable set.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Failure taxonomy for the CRM adapter. HTTP status classes collapse into
//! a handful of variants so callers never branch on raw status codes, and
//! payloads that do not decode as property bags surface as one `Malformed`
//! error regardless of which field was wrong.

use thiserror::Error;

/// Errors surfaced by the CRM backend.
#[derive(Debug, Error)]
pub enum BackendError {
    /// The requested object does not exist (HTTP 404).
    #[error("object not found")]
    NotFound,
    /// The credential was missing or rejected (HTTP 401/403).
    #[error("unauthorized: access token missing or rejected")]
    Unauthorized,
    /// The CRM rejected the request for another reason.
    #[error("api error (status {status}): {message}")]
    Api {
        /// HTTP status code returned by the CRM.
        status: u16,
        /// Response body or status text.
        message: String,
    },
    /// The request never produced an HTTP response.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// The response decoded as JSON but not as the expected shape.
    #[error("malformed payload")]
    Malformed,
    /// The caller supplied an argument the backend cannot act on.
    #[error("invalid request: {0}")]
    InvalidRequest(String),
}
