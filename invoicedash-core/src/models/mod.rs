//! Domain models
//!
//! Row types mirror the `invoices`, `customers` and `revenue` tables.
//! View types are what the data layer hands to the presentation layer,
//! with amounts already formatted where the views call for it.

pub mod customer;
pub mod invoice;
pub mod revenue;
pub mod validation;

pub use customer::{Customer, CustomerSummary, CustomerTotals};
pub use invoice::{
    CardSummary, Invoice, InvoiceForm, InvoiceRow, InvoiceStatus, LatestInvoice, LatestInvoiceRaw,
};
pub use revenue::Revenue;
pub use validation::ValidationError;
