//! Customer rows and the customer table view

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::format::format_currency;

/// Customer record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
}

/// Customer with per-customer invoice aggregates, sums in cents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerTotals {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: i64,
    pub total_paid: i64,
}

/// Customer table row with sums formatted as currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub total_invoices: i64,
    pub total_pending: String,
    pub total_paid: String,
}

impl From<CustomerTotals> for CustomerSummary {
    fn from(totals: CustomerTotals) -> Self {
        Self {
            id: totals.id,
            name: totals.name,
            email: totals.email,
            image_url: totals.image_url,
            total_invoices: totals.total_invoices,
            total_pending: format_currency(totals.total_pending),
            total_paid: format_currency(totals.total_paid),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn customer_without_invoices_shows_zero() {
        let summary = CustomerSummary::from(CustomerTotals {
            id: Uuid::nil(),
            name: "Bob".into(),
            email: "b@x.com".into(),
            image_url: "/customers/bob.png".into(),
            total_invoices: 0,
            total_pending: 0,
            total_paid: 0,
        });
        assert_eq!(summary.total_invoices, 0);
        assert_eq!(summary.total_paid, "$0.00");
        assert_eq!(summary.total_pending, "$0.00");
    }
}
