//! # serve-config
//!
//! A minimal HTTP server handing out static JSON configuration files to
//! devices at boot, plus a `/ping` liveness endpoint.
//!
//! ## Architecture
//!
//! - [`store`] - Maps configuration names to files under `<content_root>/config_files`
//! - [`server`] - Axum-based HTTP handlers and router
//! - [`config`] - CLI and configuration types
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```rust,no_run
//! use serve_config::{create_router, serve, ConfigStore, RouterConfig};
//!
//! #[tokio::main]
//! async fn main() -> std::io::Result<()> {
//!     let router = create_router(ConfigStore::new("/srv/app"), RouterConfig::new());
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//!     serve(listener, router, std::future::pending::<()>()).await
//! }
//! ```

pub mod config;
pub mod error;
pub mod server;
pub mod store;

// Re-export commonly used types
pub use config::{CheckConfig, CheckOutputFormat, Cli, Command, ServeConfig};
pub use error::ConfigFileError;
pub use server::{
    config_handler, create_router, ping_handler, serve, AppState, RouterConfig, NOT_FOUND_BODY,
    PING_BODY,
};
pub use store::{CheckReport, ConfigName, ConfigStore, FileStatus, CONFIG_DIR_NAME};
