//! Revenue repository

use invoicedash_core::Revenue;
use sqlx::{PgPool, Row};

use super::DbError;

/// Read access to the `revenue` reporting table
pub struct RevenueRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> RevenueRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Every revenue bucket, unfiltered, in storage order.
    pub async fn all(&self) -> Result<Vec<Revenue>, DbError> {
        let rows = sqlx::query("SELECT month, revenue FROM revenue")
            .fetch_all(self.pool)
            .await?;

        rows.into_iter()
            .map(|r| -> Result<_, DbError> {
                Ok(Revenue {
                    month: r.try_get("month")?,
                    revenue: r.try_get("revenue")?,
                })
            })
            .collect()
    }
}
