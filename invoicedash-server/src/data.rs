//! Dashboard read operations.
//!
//! Each operation runs against the injected pool, reshapes the rows for
//! display and returns them. On failure the cause is logged here and the
//! caller receives only the operation's `FetchError`.

use invoicedash_core::{
    total_pages, CardSummary, Customer, CustomerSummary, FetchError, InvoiceForm, InvoiceRow,
    LatestInvoice, Operation, Pagination, Revenue, SearchQuery, ITEMS_PER_PAGE,
};
use sqlx::PgPool;
use tracing::{debug, error};
use uuid::Uuid;

use crate::db::{CustomerRepo, DbError, InvoiceRepo, RevenueRepo};

/// Number of invoices on the dashboard's "latest" panel
pub const LATEST_INVOICES: i64 = 5;

/// Read-only data access for the dashboard pages
#[derive(Clone)]
pub struct DashboardData {
    pool: PgPool,
}

impl DashboardData {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Round-trip to the database.
    pub async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    /// All revenue buckets, in storage order.
    pub async fn fetch_revenue(&self) -> Result<Vec<Revenue>, FetchError> {
        debug!("fetching revenue data");
        let revenue = RevenueRepo::new(&self.pool)
            .all()
            .await
            .map_err(|e| failed(Operation::Revenue, e))?;
        debug!(rows = revenue.len(), "fetched revenue data");
        Ok(revenue)
    }

    /// The five newest invoices with customer details, amounts formatted.
    pub async fn fetch_latest_invoices(&self) -> Result<Vec<LatestInvoice>, FetchError> {
        debug!("fetching latest invoices");
        let rows = InvoiceRepo::new(&self.pool)
            .latest(LATEST_INVOICES)
            .await
            .map_err(|e| failed(Operation::LatestInvoices, e))?;
        debug!(rows = rows.len(), "fetched latest invoices");
        Ok(rows.into_iter().map(LatestInvoice::from).collect())
    }

    /// Card totals. The three aggregates run concurrently and the result
    /// is all-or-nothing: one failing query fails the whole summary.
    pub async fn fetch_card_data(&self) -> Result<CardSummary, FetchError> {
        let invoices = InvoiceRepo::new(&self.pool);
        let customers = CustomerRepo::new(&self.pool);

        let (number_of_invoices, number_of_customers, (paid, pending)) = tokio::try_join!(
            invoices.count(),
            customers.count(),
            invoices.status_totals(),
        )
        .map_err(|e| failed(Operation::CardData, e))?;

        Ok(CardSummary::from_totals(
            number_of_invoices,
            number_of_customers,
            paid,
            pending,
        ))
    }

    /// One page (six rows) of invoices matching `query`, newest first.
    pub async fn fetch_filtered_invoices(
        &self,
        query: &str,
        page: u32,
    ) -> Result<Vec<InvoiceRow>, FetchError> {
        let query = SearchQuery::new(query);
        let page = Pagination::invoices(page);
        InvoiceRepo::new(&self.pool)
            .filtered(&query, page)
            .await
            .map_err(|e| failed(Operation::FilteredInvoices, e))
    }

    /// Number of six-row pages needed for the invoices matching `query`.
    pub async fn fetch_invoices_pages(&self, query: &str) -> Result<u32, FetchError> {
        let query = SearchQuery::new(query);
        let count = InvoiceRepo::new(&self.pool)
            .count_filtered(&query)
            .await
            .map_err(|e| failed(Operation::InvoicePages, e))?;
        Ok(total_pages(count, ITEMS_PER_PAGE))
    }

    /// A single invoice with its amount in dollars; `None` if absent.
    pub async fn fetch_invoice_by_id(&self, id: Uuid) -> Result<Option<InvoiceForm>, FetchError> {
        let invoice = InvoiceRepo::new(&self.pool)
            .by_id(id)
            .await
            .map_err(|e| failed(Operation::InvoiceById, e))?;
        Ok(invoice.map(InvoiceForm::from))
    }

    /// Every customer, ordered by name.
    pub async fn fetch_customers(&self) -> Result<Vec<Customer>, FetchError> {
        CustomerRepo::new(&self.pool)
            .all()
            .await
            .map_err(|e| failed(Operation::Customers, e))
    }

    /// Customers matching `query` by name or email, with invoice totals.
    pub async fn fetch_filtered_customers(
        &self,
        query: &str,
    ) -> Result<Vec<CustomerSummary>, FetchError> {
        let query = SearchQuery::new(query);
        let rows = CustomerRepo::new(&self.pool)
            .filtered_totals(&query)
            .await
            .map_err(|e| failed(Operation::FilteredCustomers, e))?;
        Ok(rows.into_iter().map(CustomerSummary::from).collect())
    }
}

/// Log the underlying cause and collapse it into the operation's error.
fn failed(operation: Operation, err: DbError) -> FetchError {
    error!(%operation, error = %err, "Database Error");
    FetchError::from(operation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_lazy_pool, DatabaseConfig, SslMode};
    use std::time::Duration;

    /// A pool pointed at a port nothing listens on.
    fn unreachable() -> DashboardData {
        let mut config =
            DatabaseConfig::new("postgres://invoicedash@127.0.0.1:1/none").with_ssl_mode(SslMode::Disable);
        config.acquire_timeout = Duration::from_millis(500);
        DashboardData::new(create_lazy_pool(&config).expect("valid url"))
    }

    #[tokio::test]
    async fn failures_are_opaque_per_operation() {
        let data = unreachable();

        assert_eq!(data.fetch_revenue().await.unwrap_err(), FetchError::Revenue);
        assert_eq!(
            data.fetch_latest_invoices().await.unwrap_err(),
            FetchError::LatestInvoices
        );
        assert_eq!(
            data.fetch_filtered_invoices("", 1).await.unwrap_err(),
            FetchError::FilteredInvoices
        );
        assert_eq!(
            data.fetch_invoices_pages("").await.unwrap_err(),
            FetchError::InvoicePages
        );
        assert_eq!(
            data.fetch_invoice_by_id(Uuid::nil()).await.unwrap_err(),
            FetchError::InvoiceById
        );
        assert_eq!(data.fetch_customers().await.unwrap_err(), FetchError::Customers);
        assert_eq!(
            data.fetch_filtered_customers("a").await.unwrap_err(),
            FetchError::FilteredCustomers
        );
    }

    #[tokio::test]
    async fn ping_reports_unreachable_pool() {
        assert!(unreachable().ping().await.is_err());
    }

    #[tokio::test]
    async fn card_data_fails_as_a_whole() {
        let data = unreachable();
        assert_eq!(data.fetch_card_data().await.unwrap_err(), FetchError::CardData);
    }
}
