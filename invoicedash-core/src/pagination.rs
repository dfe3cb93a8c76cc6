//! Pagination for the invoice table
//!
//! Pages are 1-indexed and fixed at six rows. Page numbers arrive as URL
//! text, so parsing is lenient: anything unusable means the first page.

use serde::Deserialize;

/// Rows per page of the invoice table
pub const ITEMS_PER_PAGE: u32 = 6;

/// Pagination parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page number (1-indexed)
    pub page: u32,
    /// Items per page
    pub per_page: u32,
}

impl Pagination {
    /// Create pagination; page and per_page are clamped to a minimum of 1.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: per_page.max(1),
        }
    }

    /// Invoice-table pagination for a given page.
    pub fn invoices(page: u32) -> Self {
        Self::new(page, ITEMS_PER_PAGE)
    }

    /// Calculate SQL OFFSET value.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.per_page)
    }

    /// Get LIMIT value.
    pub fn limit(&self) -> u32 {
        self.per_page
    }
}

/// Number of pages needed for `count` rows: `ceil(count / per_page)`.
///
/// Zero rows is zero pages.
pub fn total_pages(count: i64, per_page: u32) -> u32 {
    if count <= 0 {
        return 0;
    }
    let per_page = i64::from(per_page.max(1));
    let pages = (count + per_page - 1) / per_page;
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// The `query` and `page` URL parameters shared by the search pages
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub query: Option<String>,
    pub page: Option<String>,
}

impl PageParams {
    /// Search text, empty when absent.
    pub fn query(&self) -> &str {
        self.query.as_deref().unwrap_or("")
    }

    /// Current page; missing, unparsable or zero means page 1.
    pub fn page(&self) -> u32 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse::<u32>().ok())
            .unwrap_or(1)
            .max(1)
    }
}
