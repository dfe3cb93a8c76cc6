//! invoicedash-core: domain types shared by the dashboard server and CLI
//!
//! Everything here is pure: no database, no I/O. The server crate maps
//! rows into these types and the presentation layer renders them.

pub mod error;
pub mod format;
pub mod models;
pub mod pagination;
pub mod search;

pub use error::{FetchError, Operation};
pub use format::{cents_to_dollars, format_currency, format_date};
pub use models::{
    CardSummary, Customer, CustomerSummary, CustomerTotals, Invoice, InvoiceForm, InvoiceRow,
    InvoiceStatus, LatestInvoice, LatestInvoiceRaw, Revenue, ValidationError,
};
pub use pagination::{total_pages, PageParams, Pagination, ITEMS_PER_PAGE};
pub use search::SearchQuery;
