//! Customer repository

use invoicedash_core::{Customer, CustomerTotals, SearchQuery};
use sqlx::{PgPool, Row};

use super::DbError;

/// Customer repository
pub struct CustomerRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Total number of customers.
    pub async fn count(&self) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM customers")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// All customers by name.
    pub async fn all(&self) -> Result<Vec<Customer>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, email, image_url
            FROM customers
            ORDER BY name ASC, id
            "#,
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter()
            .map(|r| -> Result<_, DbError> {
                Ok(Customer {
                    id: r.try_get("id")?,
                    name: r.try_get("name")?,
                    email: r.try_get("email")?,
                    image_url: r.try_get("image_url")?,
                })
            })
            .collect()
    }

    /// Customers whose name or email matches `query`, with invoice totals.
    ///
    /// LEFT JOIN keeps customers without invoices (count 0, sums 0).
    pub async fn filtered_totals(&self, query: &SearchQuery) -> Result<Vec<CustomerTotals>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT
                customers.id,
                customers.name,
                customers.email,
                customers.image_url,
                COUNT(invoices.id) AS total_invoices,
                COALESCE(SUM(CASE WHEN invoices.status = 'pending' THEN invoices.amount ELSE 0 END), 0) AS total_pending,
                COALESCE(SUM(CASE WHEN invoices.status = 'paid' THEN invoices.amount ELSE 0 END), 0) AS total_paid
            FROM customers
            LEFT JOIN invoices ON customers.id = invoices.customer_id
            WHERE
                customers.name ILIKE $1 OR
                customers.email ILIKE $1
            GROUP BY customers.id, customers.name, customers.email, customers.image_url
            ORDER BY customers.name ASC, customers.id
            "#,
        )
        .bind(query.like_pattern())
        .fetch_all(self.pool)
        .await?;

        rows.into_iter()
            .map(|r| -> Result<_, DbError> {
                Ok(CustomerTotals {
                    id: r.try_get("id")?,
                    name: r.try_get("name")?,
                    email: r.try_get("email")?,
                    image_url: r.try_get("image_url")?,
                    total_invoices: r.try_get("total_invoices")?,
                    total_pending: r.try_get("total_pending")?,
                    total_paid: r.try_get("total_paid")?,
                })
            })
            .collect()
    }
}
