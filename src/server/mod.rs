//! HTTP server layer for serve-config.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                         HTTP Layer                              │
//! │        GET /{cooker,eiot,pico_iot}_config.json   GET /ping      │
//! │                                                                 │
//! │  ┌──────────────────────────┐  ┌─────────────────────────────┐  │
//! │  │         handlers         │  │           routes            │  │
//! │  │ (config file, liveness)  │  │ (route table, serve loop)   │  │
//! │  └──────────────────────────┘  └─────────────────────────────┘  │
//! └────────────────────────────────┬────────────────────────────────┘
//!                                  ▼
//!                        ConfigStore (disk reads)
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    config_handler, ping_handler, AppState, INTERNAL_ERROR_BODY, JSON_CONTENT_TYPE,
    NOT_FOUND_BODY, PING_BODY,
};
pub use routes::{create_router, serve, RouterConfig, PING_ROUTE};
