// crates/hubspot-mcp-cli/src/main.rs
// ============================================================================
// Module: HubSpot MCP CLI Entry Point
// Description: Flag parsing and server startup for the MCP binary.
// Purpose: Run the HubSpot MCP server with dual HTTP transports.
// Dependencies: clap, hubspot-mcp-backend, hubspot-mcp-server, tokio, tracing
// ============================================================================

//! ## Overview
//! Binary entry point. Parses the listen port, log level, and response-mode
//! flags, wires the HubSpot client to the MCP server, and serves until the
//! process receives ctrl-c. The process-level access token comes from
//! `HUBSPOT_ACCESS_TOKEN`; requests can still override it per call via the
//! `x-auth-token` header.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use clap::ValueEnum;
use tracing::error;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use hubspot_mcp_backend::HubSpotClient;
use hubspot_mcp_server::McpServer;
use hubspot_mcp_server::ServerConfig;
use hubspot_mcp_server::config::DEFAULT_PORT;

// ============================================================================
// SECTION: CLI Definition
// ============================================================================

/// HubSpot MCP server.
#[derive(Debug, Parser)]
#[command(name = "hubspot-mcp", version, about = "MCP server for the HubSpot CRM tool surface")]
struct Cli {
    /// Port to listen on for HTTP.
    #[arg(long, env = "HUBSPOT_MCP_SERVER_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Logging level.
    #[arg(long, value_enum, default_value_t = LogLevel::Info, ignore_case = true)]
    log_level: LogLevel,

    /// Enable JSON responses for StreamableHTTP instead of SSE streams.
    #[arg(long, default_value_t = false)]
    json_response: bool,

    /// Process-level HubSpot access token.
    #[arg(long, env = "HUBSPOT_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,
}

/// Logging levels accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    /// Verbose diagnostics.
    #[value(name = "DEBUG")]
    Debug,
    /// Normal operation.
    #[value(name = "INFO")]
    Info,
    /// Recoverable problems only.
    #[value(name = "WARNING")]
    Warning,
    /// Failures only.
    #[value(name = "ERROR")]
    Error,
    /// Fatal failures only. Mapped to the error level.
    #[value(name = "CRITICAL")]
    Critical,
}

impl LogLevel {
    /// Returns the tracing filter directive for the level.
    const fn as_filter(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error | Self::Critical => "error",
        }
    }
}

// ============================================================================
// SECTION: Entry Point
// ============================================================================

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.log_level);
    if cli.access_token.is_none() {
        warn!("no HUBSPOT_ACCESS_TOKEN configured; requests must supply x-auth-token");
    }
    let config = ServerConfig {
        port: cli.port,
        json_response: cli.json_response,
        access_token: cli.access_token,
    };
    let backend = Arc::new(HubSpotClient::new(config.access_token.clone()));
    let server = match McpServer::new(config, backend) {
        Ok(server) => server,
        Err(err) => {
            error!(error = %err, "failed to initialize server");
            return ExitCode::FAILURE;
        }
    };
    if let Err(err) = server.serve().await {
        error!(error = %err, "server terminated with an error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

/// Installs the global tracing subscriber. `RUST_LOG` overrides the flag.
fn init_logging(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(true).init();
}
