//! Invoice repository
//!
//! The free-text filter is one bound `ILIKE` pattern (`$1`) applied to
//! customer name, customer email, amount, date and status. The list query
//! and the count query share the same predicate so page counts always
//! agree with the rows they paginate.

use invoicedash_core::{Invoice, InvoiceRow, LatestInvoiceRaw, Pagination, SearchQuery};
use sqlx::{PgPool, Row};
use uuid::Uuid;

use super::{status_column, DbError};

macro_rules! invoice_filter {
    () => {
        r#"
            customers.name ILIKE $1 OR
            customers.email ILIKE $1 OR
            invoices.amount::text ILIKE $1 OR
            invoices.date::text ILIKE $1 OR
            invoices.status ILIKE $1
        "#
    };
}

/// Invoice repository
pub struct InvoiceRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> InvoiceRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Most recent invoices joined with their customer, newest first.
    pub async fn latest(&self, limit: i64) -> Result<Vec<LatestInvoiceRaw>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT invoices.id, invoices.amount, customers.name, customers.image_url, customers.email
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            ORDER BY invoices.date DESC, invoices.id
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter()
            .map(|r| -> Result<_, DbError> {
                Ok(LatestInvoiceRaw {
                    id: r.try_get("id")?,
                    name: r.try_get("name")?,
                    image_url: r.try_get("image_url")?,
                    email: r.try_get("email")?,
                    amount: r.try_get("amount")?,
                })
            })
            .collect()
    }

    /// Total number of invoices.
    pub async fn count(&self) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM invoices")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// Sums of paid and pending amounts in cents. `None` when there are no invoices.
    pub async fn status_totals(&self) -> Result<(Option<i64>, Option<i64>), DbError> {
        let totals = sqlx::query_as::<_, (Option<i64>, Option<i64>)>(
            r#"
            SELECT
                SUM(CASE WHEN status = 'paid' THEN amount ELSE 0 END) AS paid,
                SUM(CASE WHEN status = 'pending' THEN amount ELSE 0 END) AS pending
            FROM invoices
            "#,
        )
        .fetch_one(self.pool)
        .await?;
        Ok(totals)
    }

    /// One page of invoices matching `query`, newest first.
    pub async fn filtered(
        &self,
        query: &SearchQuery,
        page: Pagination,
    ) -> Result<Vec<InvoiceRow>, DbError> {
        let rows = sqlx::query(concat!(
            r#"
            SELECT
                invoices.id,
                invoices.customer_id,
                invoices.amount,
                invoices.date,
                invoices.status,
                customers.name,
                customers.email,
                customers.image_url
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            WHERE
            "#,
            invoice_filter!(),
            r#"
            ORDER BY invoices.date DESC, invoices.id
            LIMIT $2 OFFSET $3
            "#,
        ))
        .bind(query.like_pattern())
        .bind(i64::from(page.limit()))
        .bind(page.offset() as i64)
        .fetch_all(self.pool)
        .await?;

        rows.into_iter()
            .map(|r| -> Result<_, DbError> {
                Ok(InvoiceRow {
                    id: r.try_get("id")?,
                    customer_id: r.try_get("customer_id")?,
                    name: r.try_get("name")?,
                    email: r.try_get("email")?,
                    image_url: r.try_get("image_url")?,
                    date: r.try_get("date")?,
                    amount: r.try_get("amount")?,
                    status: status_column(&r)?,
                })
            })
            .collect()
    }

    /// Number of invoices matching `query`.
    pub async fn count_filtered(&self, query: &SearchQuery) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>(concat!(
            r#"
            SELECT COUNT(*)
            FROM invoices
            JOIN customers ON invoices.customer_id = customers.id
            WHERE
            "#,
            invoice_filter!(),
        ))
        .bind(query.like_pattern())
        .fetch_one(self.pool)
        .await?;
        Ok(count)
    }

    /// A single invoice, or `None` if the id does not exist.
    pub async fn by_id(&self, id: Uuid) -> Result<Option<Invoice>, DbError> {
        let row = sqlx::query(
            r#"
            SELECT id, customer_id, amount, status, date
            FROM invoices
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(|r| -> Result<_, DbError> {
            Ok(Invoice {
                id: r.try_get("id")?,
                customer_id: r.try_get("customer_id")?,
                amount: r.try_get("amount")?,
                status: status_column(&r)?,
                date: r.try_get("date")?,
            })
        })
        .transpose()
    }
}
