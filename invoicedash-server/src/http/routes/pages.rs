//! Server-rendered dashboard pages

use std::sync::Arc;

use askama::Template;
use axum::{
    extract::{Path, Query, State},
    response::{Html, Redirect},
    routing::get,
    Router,
};
use invoicedash_core::{
    format_currency, format_date, CardSummary, Customer, CustomerSummary, InvoiceForm, InvoiceRow,
    LatestInvoice, PageParams, Revenue,
};

use crate::http::error::{ApiError, PageError};
use crate::http::extractors::parse_id;
use crate::http::server::AppState;

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {
    cards: CardSummary,
    revenue: Vec<Revenue>,
    latest: Vec<LatestInvoice>,
}

/// Invoice table row prepared for display
struct InvoiceView {
    id: String,
    name: String,
    email: String,
    image_url: String,
    amount: String,
    date: String,
    status: &'static str,
}

impl From<InvoiceRow> for InvoiceView {
    fn from(row: InvoiceRow) -> Self {
        Self {
            id: row.id.to_string(),
            name: row.name,
            email: row.email,
            image_url: row.image_url,
            amount: format_currency(row.amount.into()),
            date: format_date(row.date),
            status: row.status.as_str(),
        }
    }
}

#[derive(Template)]
#[template(path = "invoices.html")]
struct InvoicesTemplate {
    placeholder: &'static str,
    query: String,
    invoices: Vec<InvoiceView>,
    page: u32,
    total_pages: u32,
    has_prev: bool,
    prev_href: String,
    has_next: bool,
    next_href: String,
}

/// Customer choice in the invoice form
struct CustomerOption {
    id: String,
    name: String,
    selected: bool,
}

#[derive(Template)]
#[template(path = "invoice.html")]
struct InvoiceTemplate {
    invoice: InvoiceForm,
    customers: Vec<CustomerOption>,
}

#[derive(Template)]
#[template(path = "customers.html")]
struct CustomersTemplate {
    placeholder: &'static str,
    query: String,
    /// Plain directory, shown when there is no search text
    directory: Vec<Customer>,
    /// Filtered rows with invoice totals
    summaries: Vec<CustomerSummary>,
}

fn render<T: Template>(template: &T) -> Result<Html<String>, PageError> {
    Ok(Html(template.render()?))
}

/// Link to a page of the invoice table, keeping the search text.
fn invoices_href(query: &str, page: u32) -> String {
    if query.is_empty() {
        format!("/dashboard/invoices?page={}", page)
    } else {
        format!(
            "/dashboard/invoices?query={}&page={}",
            urlencoding::encode(query),
            page
        )
    }
}

/// GET /
async fn index() -> Redirect {
    Redirect::to("/dashboard")
}

/// GET /dashboard
async fn dashboard(State(state): State<Arc<AppState>>) -> Result<Html<String>, PageError> {
    let (cards, revenue, latest) = tokio::try_join!(
        state.data.fetch_card_data(),
        state.data.fetch_revenue(),
        state.data.fetch_latest_invoices(),
    )?;

    render(&DashboardTemplate {
        cards,
        revenue,
        latest,
    })
}

/// GET /dashboard/invoices?query=&page=
async fn invoices(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Html<String>, PageError> {
    let query = params.query().to_owned();
    let page = params.page();

    let (rows, total_pages) = tokio::try_join!(
        state.data.fetch_filtered_invoices(&query, page),
        state.data.fetch_invoices_pages(&query),
    )?;

    render(&InvoicesTemplate {
        placeholder: "Search invoices...",
        invoices: rows.into_iter().map(InvoiceView::from).collect(),
        page,
        total_pages,
        has_prev: page > 1,
        prev_href: invoices_href(&query, page.saturating_sub(1).max(1)),
        has_next: page < total_pages,
        next_href: invoices_href(&query, page.saturating_add(1)),
        query,
    })
}

/// GET /dashboard/invoices/{id}
async fn invoice(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Html<String>, PageError> {
    let id = parse_id(&id)?;

    let (invoice, customers) = tokio::try_join!(
        state.data.fetch_invoice_by_id(id),
        state.data.fetch_customers(),
    )?;

    let invoice = invoice.ok_or_else(|| ApiError::NotFound {
        resource: "invoice",
        id: id.to_string(),
    })?;

    let customers = customers
        .into_iter()
        .map(|c| CustomerOption {
            selected: c.id == invoice.customer_id,
            id: c.id.to_string(),
            name: c.name,
        })
        .collect();

    render(&InvoiceTemplate { invoice, customers })
}

/// GET /dashboard/customers?query=
///
/// Without search text this is the customer directory; with it, the
/// matching customers and their invoice totals.
async fn customers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Html<String>, PageError> {
    let query = params.query().to_owned();

    let (directory, summaries) = if query.is_empty() {
        (state.data.fetch_customers().await?, Vec::new())
    } else {
        (Vec::new(), state.data.fetch_filtered_customers(&query).await?)
    };

    render(&CustomersTemplate {
        placeholder: "Search customers...",
        query,
        directory,
        summaries,
    })
}

/// Page routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(index))
        .route("/dashboard", get(dashboard))
        .route("/dashboard/invoices", get(invoices))
        .route("/dashboard/invoices/{id}", get(invoice))
        .route("/dashboard/customers", get(customers))
}
