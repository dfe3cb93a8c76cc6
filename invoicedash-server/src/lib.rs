//! invoicedash-server: data layer and HTTP dashboard
//!
//! - `db`: connection pool and SQL repositories
//! - `data`: the dashboard read operations, with the opaque error contract
//! - `http`: axum router serving HTML pages and a JSON API

pub mod data;
pub mod db;
pub mod http;

pub use data::DashboardData;
pub use db::{create_pool, DatabaseConfig, SslMode};
pub use http::{build_router, run_server, ServerConfig};
