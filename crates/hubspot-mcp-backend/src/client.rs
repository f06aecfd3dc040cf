// crates/hubspot-mcp-backend/src/client.rs
// ============================================================================
// Module: HubSpot Client
// Description: reqwest-based implementation of the CRM backend trait.
// Purpose: Speak the HubSpot v3 REST surface with transparent pagination.
// Dependencies: async-trait, reqwest, serde_json, tracing
// ============================================================================

//! ## Overview
//! `HubSpotClient` implements [`CrmBackend`] over the HubSpot v3 REST API:
//! `/crm/v3/objects/{type}` for object CRUD, `/crm/v3/objects/{type}/search`
//! for filtered search, and `/crm/v3/properties/{type}` for property
//! metadata. Listings follow `paging.next.after` cursors until the caller's
//! limit is satisfied or the cursor ends, so callers never see pagination.

// ============================================================================
// SECTION: Imports
// ============================================================================

use async_trait::async_trait;
use reqwest::Client;
use reqwest::RequestBuilder;
use reqwest::Response;
use reqwest::StatusCode;
use serde_json::Map;
use serde_json::Value;
use serde_json::json;
use tracing::debug;

use crate::backend::CrmBackend;
use crate::error::BackendError;
use crate::filters::PropertyFilter;
use crate::types::CrmObject;
use crate::types::ObjectPage;
use crate::types::ObjectType;
use crate::types::PropertyCreate;
use crate::types::PropertyMetadata;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Production HubSpot API origin.
const DEFAULT_BASE_URL: &str = "https://api.hubapi.com";

/// Largest page size the objects API accepts per request.
const MAX_PAGE_SIZE: usize = 100;

// ============================================================================
// SECTION: Client
// ============================================================================

/// HTTP client for the HubSpot v3 CRM API.
#[derive(Debug, Clone)]
pub struct HubSpotClient {
    /// API origin, overridable for tests.
    base_url: String,
    /// Shared connection pool.
    http: Client,
    /// Process-level token used when a request carries no credential.
    default_token: Option<String>,
}

impl HubSpotClient {
    /// Creates a client against the production API.
    #[must_use]
    pub fn new(default_token: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, default_token)
    }

    /// Creates a client against a custom origin.
    #[must_use]
    pub fn with_base_url(base_url: &str, default_token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
            default_token,
        }
    }

    /// Attaches the effective credential to a request. A per-request token
    /// wins over the configured default.
    fn authorize(&self, request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
        match token.or(self.default_token.as_deref()).filter(|token| !token.is_empty()) {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Builds the object-collection URL for a type.
    fn objects_url(&self, object_type: ObjectType) -> String {
        format!("{}/crm/v3/objects/{}", self.base_url, object_type)
    }

    /// Fetches one page of objects.
    async fn fetch_page(
        &self,
        object_type: ObjectType,
        page_size: usize,
        after: Option<&str>,
        token: Option<&str>,
    ) -> Result<ObjectPage, BackendError> {
        let mut request = self
            .authorize(self.http.get(self.objects_url(object_type)), token)
            .query(&[("limit", page_size.to_string())]);
        if let Some(after) = after {
            request = request.query(&[("after", after)]);
        }
        let payload = check_response(request.send().await?).await?;
        let results = payload
            .get("results")
            .and_then(Value::as_array)
            .ok_or(BackendError::Malformed)?
            .iter()
            .cloned()
            .map(CrmObject::from_value)
            .collect::<Result<Vec<_>, _>>()?;
        let next_after = payload
            .pointer("/paging/next/after")
            .and_then(Value::as_str)
            .map(str::to_string);
        Ok(ObjectPage { results, next_after })
    }
}

// ============================================================================
// SECTION: Backend Implementation
// ============================================================================

#[async_trait]
impl CrmBackend for HubSpotClient {
    async fn list_properties(
        &self,
        object_type: ObjectType,
        token: Option<&str>,
    ) -> Result<Vec<PropertyMetadata>, BackendError> {
        let url = format!("{}/crm/v3/properties/{}", self.base_url, object_type);
        let payload = check_response(self.authorize(self.http.get(url), token).send().await?).await?;
        let results = payload
            .get("results")
            .and_then(Value::as_array)
            .ok_or(BackendError::Malformed)?;
        results
            .iter()
            .cloned()
            .map(|entry| serde_json::from_value(entry).map_err(|_| BackendError::Malformed))
            .collect()
    }

    async fn create_property(
        &self,
        object_type: ObjectType,
        property: &PropertyCreate,
        token: Option<&str>,
    ) -> Result<(), BackendError> {
        let url = format!("{}/crm/v3/properties/{}", self.base_url, object_type);
        let request = self.authorize(self.http.post(url), token).json(property);
        check_response(request.send().await?).await?;
        Ok(())
    }

    async fn list_objects(
        &self,
        object_type: ObjectType,
        limit: usize,
        token: Option<&str>,
    ) -> Result<Vec<CrmObject>, BackendError> {
        let mut collected: Vec<CrmObject> = Vec::new();
        let mut after: Option<String> = None;
        while collected.len() < limit {
            let remaining = limit - collected.len();
            let page = self
                .fetch_page(object_type, remaining.min(MAX_PAGE_SIZE), after.as_deref(), token)
                .await?;
            // An empty page with a cursor would otherwise spin forever.
            let exhausted = page.next_after.is_none() || page.results.is_empty();
            collected.extend(page.results);
            after = page.next_after;
            if exhausted {
                break;
            }
        }
        collected.truncate(limit);
        debug!(object_type = %object_type, count = collected.len(), "listed objects");
        Ok(collected)
    }

    async fn get_object(
        &self,
        object_type: ObjectType,
        id: &str,
        token: Option<&str>,
    ) -> Result<CrmObject, BackendError> {
        let url = format!("{}/{}", self.objects_url(object_type), id);
        let payload = check_response(self.authorize(self.http.get(url), token).send().await?).await?;
        CrmObject::from_value(payload)
    }

    async fn create_object(
        &self,
        object_type: ObjectType,
        properties: &Map<String, Value>,
        token: Option<&str>,
    ) -> Result<CrmObject, BackendError> {
        let request = self
            .authorize(self.http.post(self.objects_url(object_type)), token)
            .json(&json!({ "properties": properties }));
        let payload = check_response(request.send().await?).await?;
        CrmObject::from_value(payload)
    }

    async fn update_object(
        &self,
        object_type: ObjectType,
        id: &str,
        properties: &Map<String, Value>,
        token: Option<&str>,
    ) -> Result<CrmObject, BackendError> {
        let url = format!("{}/{}", self.objects_url(object_type), id);
        let request = self
            .authorize(self.http.patch(url), token)
            .json(&json!({ "properties": properties }));
        let payload = check_response(request.send().await?).await?;
        CrmObject::from_value(payload)
    }

    async fn delete_object(
        &self,
        object_type: ObjectType,
        id: &str,
        token: Option<&str>,
    ) -> Result<(), BackendError> {
        let url = format!("{}/{}", self.objects_url(object_type), id);
        let response = self.authorize(self.http.delete(url), token).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(status_error(status, response.text().await.unwrap_or_default()))
    }

    async fn search_objects(
        &self,
        object_type: ObjectType,
        filter: &PropertyFilter,
        properties: &[String],
        limit: usize,
        token: Option<&str>,
    ) -> Result<Vec<Map<String, Value>>, BackendError> {
        let url = format!("{}/search", self.objects_url(object_type));
        let body = json!({
            "filterGroups": [{ "filters": [filter.to_search_value()] }],
            "properties": properties,
            "limit": limit.min(MAX_PAGE_SIZE)
        });
        let request = self.authorize(self.http.post(url), token).json(&body);
        let payload = check_response(request.send().await?).await?;
        let results = payload
            .get("results")
            .and_then(Value::as_array)
            .ok_or(BackendError::Malformed)?;
        let mut bags = Vec::with_capacity(results.len());
        for entry in results.iter().take(limit) {
            let object = CrmObject::from_value(entry.clone())?;
            bags.push(object.properties);
        }
        Ok(bags)
    }
}

// ============================================================================
// SECTION: Response Handling
// ============================================================================

/// Maps a non-success status into the backend error taxonomy.
fn status_error(status: StatusCode, message: String) -> BackendError {
    match status {
        StatusCode::NOT_FOUND => BackendError::NotFound,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => BackendError::Unauthorized,
        status => BackendError::Api { status: status.as_u16(), message },
    }
}

/// Checks the status and decodes the body as JSON.
async fn check_response(response: Response) -> Result<Value, BackendError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(status_error(status, body));
    }
    serde_json::from_str(&body).map_err(|_| BackendError::Malformed)
}
