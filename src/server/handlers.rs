//! HTTP request handlers for serve-config.
//!
//! # Endpoints
//!
//! - `GET /cooker_config.json`, `GET /eiot_config.json`,
//!   `GET /pico_iot_config.json` - Serve a configuration file
//! - `GET /ping` - Liveness check

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Request, State},
    response::{IntoResponse, Response},
};
use http::{header, StatusCode};
use tracing::{error, info};

use crate::error::ConfigFileError;
use crate::store::{ConfigName, ConfigStore};

/// Body returned when a configuration file is absent.
pub const NOT_FOUND_BODY: &str = "Config file not found";

/// Body returned for filesystem failures other than absence.
pub const INTERNAL_ERROR_BODY: &str = "Internal server error";

/// Body returned by the liveness endpoint.
pub const PING_BODY: &str = "pong";

/// Content type of every successful configuration response.
pub const JSON_CONTENT_TYPE: &str = "application/json";

// =============================================================================
// Application State
// =============================================================================

/// Shared application state, passed to handlers via Axum's State extractor.
#[derive(Clone)]
pub struct AppState {
    /// Store resolving configuration names to files
    pub store: Arc<ConfigStore>,
}

impl AppState {
    pub fn new(store: ConfigStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

// =============================================================================
// Error Mapping
// =============================================================================

/// Convert ConfigFileError to HTTP response.
///
/// Paths are logged server-side only; response bodies stay generic.
impl IntoResponse for ConfigFileError {
    fn into_response(self) -> Response {
        match &self {
            ConfigFileError::NotFound { path } => {
                error!(path = %path.display(), "File not found: {}", path.display());
                (StatusCode::NOT_FOUND, NOT_FOUND_BODY).into_response()
            }
            ConfigFileError::Io { path, message } => {
                error!(
                    path = %path.display(),
                    status = StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                    "Failed to read config file: {}",
                    message
                );
                (StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_BODY).into_response()
            }
        }
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// Remote address of the caller, if the server was started with connect info.
fn remote_addr(request: &Request) -> Option<SocketAddr> {
    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| *addr)
}

fn display_addr(addr: Option<SocketAddr>) -> String {
    addr.map_or_else(|| "unknown".to_string(), |a| a.to_string())
}

/// Serve one configuration file.
///
/// Registered once per [`ConfigName`]; the route table supplies `name`.
///
/// # Response
///
/// - `200 OK`: raw file bytes with `Content-Type: application/json`
/// - `404 Not Found`: `Config file not found`
/// - `500 Internal Server Error`: any other filesystem failure
pub async fn config_handler(
    State(state): State<AppState>,
    name: ConfigName,
    request: Request,
) -> Result<Response, ConfigFileError> {
    let data = state.store.read(name).await?;

    info!(
        "Serving {} to {}",
        name.file_name(),
        display_addr(remote_addr(&request))
    );

    Ok(([(header::CONTENT_TYPE, JSON_CONTENT_TYPE)], data).into_response())
}

/// Handle liveness checks.
///
/// # Endpoint
///
/// `GET /ping`
///
/// # Response
///
/// `200 OK` with the plain-text body `pong`.
pub async fn ping_handler(request: Request) -> &'static str {
    info!("Ping request from IP: {}", display_addr(remote_addr(&request)));
    PING_BODY
}

// =============================================================================
// Tests
// =============================================================================
