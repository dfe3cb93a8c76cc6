//! HTTP server layer
//!
//! Axum server with:
//! - Server-rendered dashboard pages (askama templates)
//! - JSON API over the same data operations
//! - Request tracing, timeouts, CORS (localhost only by default)
//! - Graceful shutdown

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::{ApiError, PageError};
pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
