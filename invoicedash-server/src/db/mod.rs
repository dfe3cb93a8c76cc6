//! Database layer - connection pool and repositories
//!
//! - One `PgPool`, created at startup and passed in, never looked up globally
//! - Every filter and id is a bound parameter
//! - Read-only: single statements, no transactions

pub mod pool;
pub mod repos;

pub use pool::{create_lazy_pool, create_pool, DatabaseConfig, SslMode};
pub use repos::*;
