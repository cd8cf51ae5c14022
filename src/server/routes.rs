//! Router configuration for serve-config.
//!
//! # Route Structure
//!
//! ```text
//! /cooker_config.json     - Config file
//! /eiot_config.json       - Config file
//! /pico_iot_config.json   - Config file
//! /ping                   - Liveness check
//! ```
//!
//! Config routes are registered from [`ConfigName::ALL`], so adding a file
//! means adding an enum variant rather than a handler.
//!
//! # Example
//!
//! ```ignore
//! use serve_config::server::routes::{create_router, serve, RouterConfig};
//! use serve_config::store::ConfigStore;
//!
//! let router = create_router(ConfigStore::new("/srv/app"), RouterConfig::new());
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! serve(listener, router, std::future::pending::<()>()).await?;
//! ```

use std::future::Future;
use std::net::SocketAddr;

use axum::{
    extract::{Request, State},
    routing::{get, MethodRouter},
    Router,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use super::handlers::{config_handler, ping_handler, AppState};
use crate::store::{ConfigName, ConfigStore};

/// Path of the liveness endpoint.
pub const PING_ROUTE: &str = "/ping";

// =============================================================================
// Router Configuration
// =============================================================================

/// Configuration for the HTTP router.
#[derive(Debug, Clone)]
pub struct RouterConfig {
    /// Whether to enable request tracing
    pub enable_tracing: bool,
}

impl RouterConfig {
    /// Create a router configuration with tracing enabled.
    pub fn new() -> Self {
        Self {
            enable_tracing: true,
        }
    }

    /// Enable or disable request tracing.
    pub fn with_tracing(mut self, enabled: bool) -> Self {
        self.enable_tracing = enabled;
        self
    }
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Router Builder
// =============================================================================

/// GET route serving the file behind `name`.
fn config_route(name: ConfigName) -> MethodRouter<AppState> {
    get(move |state: State<AppState>, request: Request| config_handler(state, name, request))
}

/// Create the application router.
///
/// Unmatched paths and methods fall through to axum's default 404 / 405.
pub fn create_router(store: ConfigStore, config: RouterConfig) -> Router {
    let app_state = AppState::new(store);

    let router = ConfigName::ALL
        .into_iter()
        .fold(Router::new(), |router, name| {
            router.route(name.route(), config_route(name))
        })
        .route(PING_ROUTE, get(ping_handler))
        .with_state(app_state);

    if config.enable_tracing {
        router.layer(TraceLayer::new_for_http())
    } else {
        router
    }
}

// =============================================================================
// Serving
// =============================================================================

/// Serve `router` on `listener` until `shutdown` resolves.
///
/// Connections carry their peer address so handlers can log the caller.
pub async fn serve<F>(listener: TcpListener, router: Router, shutdown: F) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown)
    .await
}

// =============================================================================
// Tests
// =============================================================================
