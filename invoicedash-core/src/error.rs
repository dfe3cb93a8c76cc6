//! Fetch error taxonomy.
//!
//! Each data operation fails with exactly one opaque error kind. The
//! underlying driver error is logged where it happens and never travels
//! upward, so callers can only tell failures apart by operation.

use std::fmt;

use thiserror::Error;

/// The read operations exposed by the data layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Revenue,
    LatestInvoices,
    CardData,
    FilteredInvoices,
    InvoicePages,
    InvoiceById,
    Customers,
    FilteredCustomers,
}

impl Operation {
    /// Stable identifier used in log fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Revenue => "revenue",
            Self::LatestInvoices => "latest_invoices",
            Self::CardData => "card_data",
            Self::FilteredInvoices => "filtered_invoices",
            Self::InvoicePages => "invoice_pages",
            Self::InvoiceById => "invoice_by_id",
            Self::Customers => "customers",
            Self::FilteredCustomers => "filtered_customers",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Generic data-fetch failure, one variant per operation.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchError {
    #[error("Failed to fetch revenue data.")]
    Revenue,

    #[error("Failed to fetch the latest invoices.")]
    LatestInvoices,

    #[error("Failed to fetch card data.")]
    CardData,

    #[error("Failed to fetch invoices.")]
    FilteredInvoices,

    #[error("Failed to fetch total number of invoices.")]
    InvoicePages,

    #[error("Failed to fetch invoice.")]
    InvoiceById,

    #[error("Failed to fetch all customers.")]
    Customers,

    #[error("Failed to fetch customer table.")]
    FilteredCustomers,
}

impl FetchError {
    /// Which operation raised this error.
    pub fn operation(&self) -> Operation {
        match self {
            Self::Revenue => Operation::Revenue,
            Self::LatestInvoices => Operation::LatestInvoices,
            Self::CardData => Operation::CardData,
            Self::FilteredInvoices => Operation::FilteredInvoices,
            Self::InvoicePages => Operation::InvoicePages,
            Self::InvoiceById => Operation::InvoiceById,
            Self::Customers => Operation::Customers,
            Self::FilteredCustomers => Operation::FilteredCustomers,
        }
    }
}

impl From<Operation> for FetchError {
    fn from(op: Operation) -> Self {
        match op {
            Operation::Revenue => Self::Revenue,
            Operation::LatestInvoices => Self::LatestInvoices,
            Operation::CardData => Self::CardData,
            Operation::FilteredInvoices => Self::FilteredInvoices,
            Operation::InvoicePages => Self::InvoicePages,
            Operation::InvoiceById => Self::InvoiceById,
            Operation::Customers => Self::Customers,
            Operation::FilteredCustomers => Self::FilteredCustomers,
        }
    }
}
