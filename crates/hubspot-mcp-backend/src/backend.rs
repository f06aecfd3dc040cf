// crates/hubspot-mcp-backend/src/backend.rs
// ============================================================================
// Module: Backend Trait
// Description: The trait seam between tool dispatch and the remote CRM.
// Purpose: Let the dispatcher run against a stub in tests.
// Dependencies: async-trait, serde_json
// ============================================================================

//! ## Overview
//! `CrmBackend` is the only surface the dispatcher sees. Every method takes
//! the credential as an explicit `Option<&str>`: `Some` is a per-connection
//! token captured from the transport, `None` falls back to whatever the
//! implementation was configured with.

use async_trait::async_trait;
use serde_json::Map;
use serde_json::Value;

use crate::error::BackendError;
use crate::filters::PropertyFilter;
use crate::types::CrmObject;
use crate::types::ObjectType;
use crate::types::PropertyCreate;
use crate::types::PropertyMetadata;

/// Operations the tool surface needs from the CRM.
#[async_trait]
pub trait CrmBackend: Send + Sync {
    /// Lists property metadata for an object type.
    async fn list_properties(
        &self,
        object_type: ObjectType,
        token: Option<&str>,
    ) -> Result<Vec<PropertyMetadata>, BackendError>;

    /// Creates a custom property definition.
    async fn create_property(
        &self,
        object_type: ObjectType,
        property: &PropertyCreate,
        token: Option<&str>,
    ) -> Result<(), BackendError>;

    /// Lists up to `limit` objects, following pagination cursors as needed.
    async fn list_objects(
        &self,
        object_type: ObjectType,
        limit: usize,
        token: Option<&str>,
    ) -> Result<Vec<CrmObject>, BackendError>;

    /// Fetches one object by id.
    async fn get_object(
        &self,
        object_type: ObjectType,
        id: &str,
        token: Option<&str>,
    ) -> Result<CrmObject, BackendError>;

    /// Creates an object from a property bag and returns the created record.
    async fn create_object(
        &self,
        object_type: ObjectType,
        properties: &Map<String, Value>,
        token: Option<&str>,
    ) -> Result<CrmObject, BackendError>;

    /// Patches an object's properties and returns the updated record.
    async fn update_object(
        &self,
        object_type: ObjectType,
        id: &str,
        properties: &Map<String, Value>,
        token: Option<&str>,
    ) -> Result<CrmObject, BackendError>;

    /// Archives an object by id.
    async fn delete_object(
        &self,
        object_type: ObjectType,
        id: &str,
        token: Option<&str>,
    ) -> Result<(), BackendError>;

    /// Searches objects by a single property filter, returning the selected
    /// property bags of up to `limit` matches.
    async fn search_objects(
        &self,
        object_type: ObjectType,
        filter: &PropertyFilter,
        properties: &[String],
        limit: usize,
        token: Option<&str>,
    ) -> Result<Vec<Map<String, Value>>, BackendError>;
}
