//! HTTP endpoint exposing the quick-add parser.
//!
//! ## Endpoints
//!
//! - `POST /api/tasks/parse`: body `{ "text": "..." }`, responds with the parsed input
//! - `GET /health`: liveness probe
//!
//! Parsing never fails, so every well-formed request gets a `200`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::State;
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::ServerConfig;
use crate::error::QuickAddError;
use crate::features::nlp::{InputParser, ParsedInput, ParserOptions};

/// Request body for `POST /api/tasks/parse`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParseRequest {
    /// Raw quick-add text.
    pub text: String,
}

/// Response from `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
}

/// Shared state for axum handlers.
#[derive(Clone)]
struct AppState {
    parser: Arc<InputParser>,
}

/// Build the router with all parse endpoints.
pub fn router(options: ParserOptions) -> Router {
    let state = AppState {
        parser: Arc::new(InputParser::new(options)),
    };

    Router::new()
        .route("/api/tasks/parse", post(handle_parse))
        .route("/health", get(handle_health))
        .with_state(state)
}

/// Parse endpoint running in a background tokio task.
pub struct ParseServer {
    /// The address the server is listening on.
    addr: SocketAddr,
    /// Handle to the background server task.
    handle: JoinHandle<()>,
}

impl ParseServer {
    /// Start the server in the background.
    ///
    /// Binds to `{config.host}:{config.port}`; port `0` picks a free port.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP listener cannot bind.
    pub async fn start(config: &ServerConfig, options: ParserOptions) -> Result<Self, QuickAddError> {
        let listener = bind(config).await?;
        let addr = local_addr(&listener)?;
        let app = router(options);

        info!("parse endpoint listening on http://{addr}/api/tasks/parse");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("parse server error: {e}");
            }
        });

        Ok(Self { addr, handle })
    }

    /// Returns the address the server is listening on.
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Returns the port the server is listening on.
    pub fn port(&self) -> u16 {
        self.addr.port()
    }

    /// Abort the server task.
    pub fn shutdown(&self) {
        self.handle.abort();
    }
}

impl Drop for ParseServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Serve in the foreground until Ctrl-C.
///
/// # Errors
///
/// Returns an error if binding fails or the server stops unexpectedly.
pub async fn serve_until_shutdown(config: &ServerConfig, options: ParserOptions) -> Result<(), QuickAddError> {
    let listener = bind(config).await?;
    let addr = local_addr(&listener)?;

    info!("parse endpoint listening on http://{addr}/api/tasks/parse");

    axum::serve(listener, router(options))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!("failed to listen for Ctrl-C: {e}");
            }
        })
        .await
        .map_err(|e| QuickAddError::Server(format!("server stopped: {e}")))?;

    info!("parse endpoint shut down");
    Ok(())
}

async fn bind(config: &ServerConfig) -> Result<TcpListener, QuickAddError> {
    let bind_addr = format!("{}:{}", config.host, config.port);
    TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| QuickAddError::Server(format!("bind to {bind_addr} failed: {e}")))
}

fn local_addr(listener: &TcpListener) -> Result<SocketAddr, QuickAddError> {
    listener
        .local_addr()
        .map_err(|e| QuickAddError::Server(format!("failed to get local addr: {e}")))
}

/// `POST /api/tasks/parse`
async fn handle_parse(State(state): State<AppState>, Json(request): Json<ParseRequest>) -> Json<ParsedInput> {
    debug!(len = request.text.len(), "parse request");
    Json(state.parser.parse(&request.text))
}

/// `GET /health`
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_owned(),
    })
}
