//! Repository implementations for database access
//!
//! Each repository borrows the shared pool and owns the SQL for one table.
//! Rows are mapped with `try_get` so a bad row is an error, not a panic.

pub mod customers;
pub mod invoices;
pub mod revenue;

use invoicedash_core::{InvoiceStatus, ValidationError};
use sqlx::postgres::PgRow;
use sqlx::Row;

pub use customers::CustomerRepo;
pub use invoices::InvoiceRepo;
pub use revenue::RevenueRepo;

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("invalid row: {0}")]
    InvalidRow(#[from] ValidationError),
}

/// Decode the text `status` column.
pub(crate) fn status_column(row: &PgRow) -> Result<InvoiceStatus, DbError> {
    let raw: String = row.try_get("status")?;
    Ok(raw.parse()?)
}
