// crates/hubspot-mcp-server/src/server.rs
// ============================================================================
// Module: MCP Server
// Description: MCP server implementation for the SSE and streamable transports.
// Purpose: Expose HubSpot tools via JSON-RPC 2.0.
// Dependencies: axum, tokio, tokio-stream, rand
// ============================================================================

//! ## Overview
//! The MCP server exposes the HubSpot tools using JSON-RPC 2.0 over two
//! transports. The SSE pair: `GET /sse` opens a session and streams an
//! `endpoint` event naming the `POST /messages/?session_id=` URL; posted
//! requests are dispatched and their responses pushed down the session
//! stream while the POST itself returns 202. The streamable endpoint:
//! `POST /mcp` is stateless and answers in the same HTTP exchange, as plain
//! JSON or a single-event SSE body depending on configuration. Both
//! transports capture the request's `x-auth-token` header into the request
//! context. Inputs are untrusted and validated before dispatch.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::Mutex;

use axum::Router;
use axum::body::Bytes;
use axum::extract::ConnectInfo;
use axum::extract::Query;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::response::Sse;
use axum::response::sse::Event;
use axum::response::sse::KeepAlive;
use axum::routing::get;
use axum::routing::post;
use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::debug;
use tracing::info;
use tracing::warn;

use hubspot_mcp_backend::CrmBackend;

use crate::config::ConfigError;
use crate::config::ServerConfig;
use crate::context::RequestContext;
use crate::context::ServerTransport;
use crate::rpc::JsonRpcRequest;
use crate::rpc::JsonRpcResponse;
use crate::rpc::ToolCallParams;
use crate::rpc::ToolCallResult;
use crate::rpc::ToolListResult;
use crate::rpc::initialize_result;
use crate::tools::ToolRouter;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Header the transports read the per-request credential from.
const AUTH_TOKEN_HEADER: &str = "x-auth-token";

/// Length of generated SSE session identifiers.
const SESSION_ID_LEN: usize = 32;

/// Buffered events per SSE session before posts back-pressure.
const SESSION_CHANNEL_CAPACITY: usize = 16;

// ============================================================================
// SECTION: MCP Server
// ============================================================================

/// MCP server instance.
pub struct McpServer {
    /// Server configuration.
    config: ServerConfig,
    /// Tool router for request dispatch.
    router: Arc<ToolRouter>,
}

impl McpServer {
    /// Builds a new MCP server over the given backend.
    ///
    /// # Errors
    ///
    /// Returns [`McpServerError`] when the configuration is unusable.
    pub fn new(config: ServerConfig, backend: Arc<dyn CrmBackend>) -> Result<Self, McpServerError> {
        config.validate()?;
        Ok(Self {
            config,
            router: Arc::new(ToolRouter::new(backend)),
        })
    }

    /// Serves both transports until the process receives a shutdown signal.
    ///
    /// # Errors
    ///
    /// Returns [`McpServerError`] when binding or serving fails.
    pub async fn serve(self) -> Result<(), McpServerError> {
        let addr = self.config.bind_addr();
        let state = Arc::new(ServerState {
            router: self.router,
            json_response: self.config.json_response,
            sessions: Mutex::new(HashMap::new()),
        });
        let app = Router::new()
            .route("/sse", get(handle_sse))
            .route("/messages/", post(handle_message))
            .route("/mcp", post(handle_streamable))
            .with_state(state);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| McpServerError::Transport(format!("bind failed: {err}")))?;
        info!(port = addr.port(), "server starting with dual transports");
        info!("SSE endpoint: http://localhost:{}/sse", addr.port());
        info!("StreamableHTTP endpoint: http://localhost:{}/mcp", addr.port());
        axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|err| McpServerError::Transport(format!("server failed: {err}")))
    }
}

/// Resolves when the process receives ctrl-c.
async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown signal received");
    }
}

// ============================================================================
// SECTION: Server State
// ============================================================================

/// Shared state for the transport handlers.
struct ServerState {
    /// Tool router for request dispatch.
    router: Arc<ToolRouter>,
    /// Whether `POST /mcp` answers with plain JSON.
    json_response: bool,
    /// Live SSE sessions keyed by session id.
    sessions: Mutex<HashMap<String, SseSession>>,
}

/// One live SSE session.
struct SseSession {
    /// Channel feeding the session's event stream.
    sender: mpsc::Sender<Result<Event, Infallible>>,
    /// Credential captured when the session was opened.
    auth_token: Option<String>,
}

/// Query parameters for `POST /messages/`.
#[derive(Debug, Deserialize)]
struct MessageQuery {
    /// Session the message belongs to.
    session_id: String,
}

/// Reads the per-request credential header.
fn auth_token_from(headers: &HeaderMap) -> Option<String> {
    headers
        .get(AUTH_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

/// Generates a fresh session identifier.
fn new_session_id() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(SESSION_ID_LEN)
        .map(char::from)
        .collect()
}

// ============================================================================
// SECTION: SSE Transport
// ============================================================================

/// Opens an SSE session and streams the endpoint event plus responses.
async fn handle_sse(
    State(state): State<Arc<ServerState>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let session_id = new_session_id();
    let (tx, rx) = mpsc::channel::<Result<Event, Infallible>>(SESSION_CHANNEL_CAPACITY);
    let endpoint = format!("/messages/?session_id={session_id}");
    let _ = tx.send(Ok(Event::default().event("endpoint").data(endpoint))).await;
    if let Ok(mut sessions) = state.sessions.lock() {
        sessions.insert(
            session_id.clone(),
            SseSession {
                sender: tx.clone(),
                auth_token: auth_token_from(&headers),
            },
        );
    }
    // Reap the session (and its captured credential) once the client drops
    // the stream, even if nothing was ever posted to it.
    let reaper_state = Arc::clone(&state);
    let reaper_id = session_id.clone();
    tokio::spawn(async move {
        tx.closed().await;
        if let Ok(mut sessions) = reaper_state.sessions.lock() {
            sessions.remove(&reaper_id);
        }
        debug!(session_id = %reaper_id, "sse session reaped");
    });
    info!(session_id = %session_id, peer = %peer.ip(), "sse session opened");
    Sse::new(ReceiverStream::new(rx)).keep_alive(KeepAlive::default())
}

/// Dispatches a posted message into its SSE session.
async fn handle_message(
    State(state): State<Arc<ServerState>>,
    Query(query): Query<MessageQuery>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    bytes: Bytes,
) -> Response {
    let session = state.sessions.lock().ok().and_then(|sessions| {
        sessions.get(&query.session_id).map(|session| {
            (session.sender.clone(), session.auth_token.clone())
        })
    });
    let Some((sender, auth_token)) = session else {
        return (StatusCode::NOT_FOUND, "session not found").into_response();
    };
    let request: JsonRpcRequest = match serde_json::from_slice(bytes.as_ref()) {
        Ok(request) => request,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                axum::Json(JsonRpcResponse::invalid_request(
                    Value::Null,
                    "invalid json-rpc request",
                )),
            )
                .into_response();
        }
    };
    let context = RequestContext::http(ServerTransport::Sse, Some(peer.ip()), auth_token);
    let Some(response) = handle_request(&state.router, &context, request).await else {
        return StatusCode::ACCEPTED.into_response();
    };
    let payload = encode_response(&response);
    if sender.send(Ok(Event::default().event("message").data(payload))).await.is_err() {
        // Receiver is gone: the client dropped the stream.
        if let Ok(mut sessions) = state.sessions.lock() {
            sessions.remove(&query.session_id);
        }
        warn!(session_id = %query.session_id, "sse session closed, dropping message");
        return (StatusCode::NOT_FOUND, "session closed").into_response();
    }
    StatusCode::ACCEPTED.into_response()
}

// ============================================================================
// SECTION: Streamable Transport
// ============================================================================

/// Handles one stateless streamable HTTP exchange.
async fn handle_streamable(
    State(state): State<Arc<ServerState>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    headers: HeaderMap,
    bytes: Bytes,
) -> Response {
    let request: JsonRpcRequest = match serde_json::from_slice(bytes.as_ref()) {
        Ok(request) => request,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                axum::Json(JsonRpcResponse::invalid_request(
                    Value::Null,
                    "invalid json-rpc request",
                )),
            )
                .into_response();
        }
    };
    let context = RequestContext::http(
        ServerTransport::StreamableHttp,
        Some(peer.ip()),
        auth_token_from(&headers),
    );
    let Some(response) = handle_request(&state.router, &context, request).await else {
        return StatusCode::ACCEPTED.into_response();
    };
    if state.json_response {
        return axum::Json(response).into_response();
    }
    let (tx, rx) = mpsc::channel::<Result<Event, Infallible>>(1);
    let payload = encode_response(&response);
    let _ = tx.send(Ok(Event::default().event("message").data(payload))).await;
    Sse::new(ReceiverStream::new(rx)).into_response()
}

// ============================================================================
// SECTION: JSON-RPC Handling
// ============================================================================

/// Dispatches one JSON-RPC request. Returns `None` for notifications.
async fn handle_request(
    router: &ToolRouter,
    base_context: &RequestContext,
    request: JsonRpcRequest,
) -> Option<JsonRpcResponse> {
    if request.jsonrpc != "2.0" {
        return Some(JsonRpcResponse::invalid_request(
            request.id,
            "invalid json-rpc version",
        ));
    }
    if request.method.starts_with("notifications/") || request.is_notification() {
        debug!(method = %request.method, "notification acknowledged");
        return None;
    }
    let context = base_context.clone().with_request_id(request.id.to_string());
    let response = match request.method.as_str() {
        "initialize" => JsonRpcResponse::success(request.id, initialize_result()),
        "ping" => JsonRpcResponse::success(request.id, Value::Object(serde_json::Map::new())),
        "tools/list" => {
            let result = ToolListResult {
                tools: router.list_tools(),
            };
            match serde_json::to_value(result) {
                Ok(value) => JsonRpcResponse::success(request.id, value),
                Err(_) => JsonRpcResponse::failure(request.id, -32603, "serialization failed"),
            }
        }
        "tools/call" => {
            let params = request.params.unwrap_or(Value::Null);
            match serde_json::from_value::<ToolCallParams>(params) {
                Ok(call) => {
                    let text =
                        router.handle_tool_call(&context, &call.name, call.arguments).await;
                    match serde_json::to_value(ToolCallResult::text(text)) {
                        Ok(value) => JsonRpcResponse::success(request.id, value),
                        Err(_) => {
                            JsonRpcResponse::failure(request.id, -32603, "serialization failed")
                        }
                    }
                }
                Err(_) => JsonRpcResponse::invalid_params(request.id, "invalid tool params"),
            }
        }
        _ => JsonRpcResponse::method_not_found(request.id),
    };
    Some(response)
}

/// Serializes a response for the wire, falling back to a canned error.
fn encode_response(response: &JsonRpcResponse) -> String {
    serde_json::to_string(response).unwrap_or_else(|_| {
        "{\"jsonrpc\":\"2.0\",\"id\":null,\"error\":{\"code\":-32603,\"message\":\"serialization \
         failed\"}}"
            .to_string()
    })
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors surfaced by the MCP server.
#[derive(Debug, Error)]
pub enum McpServerError {
    /// Configuration was invalid.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// The transport failed to bind or serve.
    #[error("transport error: {0}")]
    Transport(String),
}
