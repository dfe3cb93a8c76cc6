//! Command implementations for the invoicedash CLI

pub mod query;
pub mod serve;

pub use query::run_query;
pub use serve::run_serve;
