// crates/hubspot-mcp-backend/tests/pagination.rs
// ============================================================================
// Module: Pagination Integration Tests
// Description: Exercises cursor-following against a local HTTP stub.
// Purpose: Prove listings accumulate every item once and honor limits.
// Dependencies: hubspot-mcp-backend, tiny_http, tokio
// ============================================================================

//! ## Overview
//! Runs a `tiny_http` stub that serves an object collection in small pages
//! with `paging.next.after` cursors, then checks that `list_objects`
//! accumulates all items exactly once in order, truncates to the caller's
//! limit, and that error statuses map into the backend taxonomy.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    reason = "Test-only assertions use panic-based helpers for clarity."
)]

use std::sync::Arc;
use std::thread;

use serde_json::Value;
use serde_json::json;
use tiny_http::Header;
use tiny_http::Response;
use tiny_http::Server;

use hubspot_mcp_backend::BackendError;
use hubspot_mcp_backend::CrmBackend;
use hubspot_mcp_backend::HubSpotClient;
use hubspot_mcp_backend::ObjectType;

/// Items the stub collection holds.
const TOTAL_ITEMS: usize = 25;

/// Items the stub returns per page regardless of the requested size.
const SERVER_PAGE_SIZE: usize = 7;

/// Reads a query parameter from a request URL.
fn query_param(url: &str, key: &str) -> Option<String> {
    let query = url.split_once('?')?.1;
    query.split('&').find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name == key).then(|| value.to_string())
    })
}

/// Builds one page of the stub collection starting at `after`.
fn page_body(after: usize) -> String {
    let end = (after + SERVER_PAGE_SIZE).min(TOTAL_ITEMS);
    let results: Vec<Value> = (after..end)
        .map(|index| {
            json!({
                "id": index.to_string(),
                "properties": { "email": format!("user{index}@b.com") }
            })
        })
        .collect();
    let mut body = json!({ "results": results });
    if end < TOTAL_ITEMS {
        body["paging"] = json!({ "next": { "after": end.to_string() } });
    }
    body.to_string()
}

/// Starts the stub and returns its base URL. The serving thread lives for
/// the rest of the test process.
fn start_stub() -> String {
    let server = Arc::new(Server::http("127.0.0.1:0").expect("stub must bind"));
    let port = server.server_addr().to_ip().expect("stub must have an ip addr").port();
    let handle = Arc::clone(&server);
    thread::spawn(move || {
        for request in handle.incoming_requests() {
            let url = request.url().to_string();
            let json_header =
                Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..])
                    .expect("static header must parse");
            if url.starts_with("/crm/v3/objects/contacts/missing") {
                let _ = request.respond(
                    Response::from_string("{\"status\":\"error\"}")
                        .with_status_code(404)
                        .with_header(json_header),
                );
            } else if url.starts_with("/crm/v3/objects/tickets") {
                // An empty page that still advertises a next cursor.
                let body = json!({
                    "results": [],
                    "paging": { "next": { "after": "0" } }
                });
                let _ = request.respond(
                    Response::from_string(body.to_string()).with_header(json_header),
                );
            } else if url.starts_with("/crm/v3/objects/contacts") {
                let after = query_param(&url, "after")
                    .and_then(|after| after.parse::<usize>().ok())
                    .unwrap_or(0);
                let _ = request.respond(
                    Response::from_string(page_body(after)).with_header(json_header),
                );
            } else {
                let _ = request.respond(
                    Response::from_string("{}").with_status_code(401).with_header(json_header),
                );
            }
        }
    });
    format!("http://127.0.0.1:{port}")
}

#[tokio::test]
async fn listing_follows_cursors_and_returns_every_item_once() {
    let client = HubSpotClient::with_base_url(&start_stub(), None);
    let objects = client
        .list_objects(ObjectType::Contacts, TOTAL_ITEMS, None)
        .await
        .expect("listing must succeed");
    assert_eq!(objects.len(), TOTAL_ITEMS);
    for (index, object) in objects.iter().enumerate() {
        assert_eq!(object.id, index.to_string(), "items must stay in backend order");
    }
}

#[tokio::test]
async fn listing_truncates_to_the_requested_limit() {
    let client = HubSpotClient::with_base_url(&start_stub(), None);
    let objects = client
        .list_objects(ObjectType::Contacts, 10, None)
        .await
        .expect("listing must succeed");
    assert_eq!(objects.len(), 10);
    assert_eq!(objects.last().unwrap().id, "9");
}

#[tokio::test]
async fn a_limit_past_the_collection_end_returns_everything() {
    let client = HubSpotClient::with_base_url(&start_stub(), None);
    let objects = client
        .list_objects(ObjectType::Contacts, TOTAL_ITEMS * 2, None)
        .await
        .expect("listing must succeed");
    assert_eq!(objects.len(), TOTAL_ITEMS);
}

#[tokio::test]
async fn an_empty_page_with_a_cursor_terminates_the_listing() {
    let client = HubSpotClient::with_base_url(&start_stub(), None);
    let objects = client
        .list_objects(ObjectType::Tickets, 10, None)
        .await
        .expect("listing must succeed");
    assert!(objects.is_empty());
}

#[tokio::test]
async fn not_found_status_maps_into_the_taxonomy() {
    let client = HubSpotClient::with_base_url(&start_stub(), None);
    let result = client.get_object(ObjectType::Contacts, "missing", None).await;
    assert!(matches!(result, Err(BackendError::NotFound)));
}

#[tokio::test]
async fn unauthorized_status_maps_into_the_taxonomy() {
    let client = HubSpotClient::with_base_url(&start_stub(), None);
    let result = client.list_properties(ObjectType::Deals, None).await;
    assert!(matches!(result, Err(BackendError::Unauthorized)));
}
