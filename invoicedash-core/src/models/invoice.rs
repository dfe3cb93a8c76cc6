//! Invoice rows and the invoice-derived views

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::ValidationError;
use crate::format::{cents_to_dollars, format_currency};

/// Payment status of an invoice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InvoiceStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            other => Err(ValidationError::InvalidVariant {
                field: "status",
                value: other.to_owned(),
            }),
        }
    }
}

/// Invoice record. `amount` is in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub amount: i32,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// Latest invoice as read from the database, before formatting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LatestInvoiceRaw {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub email: String,
    pub amount: i32,
}

/// Latest invoice joined with its customer, amount formatted as currency
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LatestInvoice {
    pub id: Uuid,
    pub name: String,
    pub image_url: String,
    pub email: String,
    pub amount: String,
}

impl From<LatestInvoiceRaw> for LatestInvoice {
    fn from(raw: LatestInvoiceRaw) -> Self {
        Self {
            id: raw.id,
            name: raw.name,
            image_url: raw.image_url,
            email: raw.email,
            amount: format_currency(raw.amount.into()),
        }
    }
}

/// One row of the filtered invoice table. `amount` stays in cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceRow {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub name: String,
    pub email: String,
    pub image_url: String,
    pub date: NaiveDate,
    pub amount: i32,
    pub status: InvoiceStatus,
}

/// Single invoice prepared for an edit form: amount in dollars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceForm {
    pub id: Uuid,
    pub customer_id: Uuid,
    #[serde(with = "rust_decimal::serde::float")]
    pub amount: Decimal,
    pub status: InvoiceStatus,
}

impl From<Invoice> for InvoiceForm {
    fn from(invoice: Invoice) -> Self {
        Self {
            id: invoice.id,
            customer_id: invoice.customer_id,
            amount: cents_to_dollars(invoice.amount.into()),
            status: invoice.status,
        }
    }
}

/// Dashboard card totals
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSummary {
    pub number_of_customers: i64,
    pub number_of_invoices: i64,
    pub total_paid_invoices: String,
    pub total_pending_invoices: String,
}

impl CardSummary {
    /// Combine the three aggregate results. Missing sums count as zero.
    pub fn from_totals(
        number_of_invoices: i64,
        number_of_customers: i64,
        paid: Option<i64>,
        pending: Option<i64>,
    ) -> Self {
        Self {
            number_of_customers,
            number_of_invoices,
            total_paid_invoices: format_currency(paid.unwrap_or(0)),
            total_pending_invoices: format_currency(pending.unwrap_or(0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_lowercase_only() {
        assert_eq!("paid".parse::<InvoiceStatus>(), Ok(InvoiceStatus::Paid));
        assert_eq!("pending".parse::<InvoiceStatus>(), Ok(InvoiceStatus::Pending));
        assert!("Paid".parse::<InvoiceStatus>().is_err());
        assert!("".parse::<InvoiceStatus>().is_err());
    }

    #[test]
    fn latest_invoice_formats_amount() {
        let latest = LatestInvoice::from(LatestInvoiceRaw {
            id: Uuid::nil(),
            name: "Alice".into(),
            image_url: "/customers/alice.png".into(),
            email: "a@x.com".into(),
            amount: 125000,
        });
        assert_eq!(latest.amount, "$1,250.00");
        assert_eq!(latest.name, "Alice");
        assert_eq!(latest.email, "a@x.com");
    }

    #[test]
    fn form_amount_is_dollars() {
        let form = InvoiceForm::from(Invoice {
            id: Uuid::nil(),
            customer_id: Uuid::nil(),
            amount: 125000,
            status: InvoiceStatus::Paid,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        });
        assert_eq!(form.amount, Decimal::new(1250, 0));

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["amount"], serde_json::json!(1250.0));
        assert_eq!(json["status"], "paid");
    }

    #[test]
    fn card_summary_defaults_missing_sums() {
        let cards = CardSummary::from_totals(1, 1, Some(125000), None);
        assert_eq!(
            cards,
            CardSummary {
                number_of_customers: 1,
                number_of_invoices: 1,
                total_paid_invoices: "$1,250.00".into(),
                total_pending_invoices: "$0.00".into(),
            }
        );
    }

    #[test]
    fn card_summary_serializes_camel_case() {
        let json = serde_json::to_value(CardSummary::from_totals(2, 3, None, None)).unwrap();
        assert_eq!(json["numberOfCustomers"], 3);
        assert_eq!(json["numberOfInvoices"], 2);
        assert_eq!(json["totalPendingInvoices"], "$0.00");
    }
}
