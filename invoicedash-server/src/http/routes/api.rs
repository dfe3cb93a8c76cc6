//! JSON API over the dashboard data operations

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use invoicedash_core::{
    CardSummary, Customer, CustomerSummary, InvoiceForm, InvoiceRow, LatestInvoice, PageParams,
    Revenue,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::extractors::ValidUuid;
use crate::http::server::AppState;

/// Page-count response
#[derive(Serialize)]
pub struct PagesResponse {
    pub total_pages: u32,
}

/// GET /api/revenue
async fn revenue(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Revenue>>, ApiError> {
    Ok(Json(state.data.fetch_revenue().await?))
}

/// GET /api/invoices/latest
async fn latest_invoices(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<LatestInvoice>>, ApiError> {
    Ok(Json(state.data.fetch_latest_invoices().await?))
}

/// GET /api/cards
async fn cards(State(state): State<Arc<AppState>>) -> Result<Json<CardSummary>, ApiError> {
    Ok(Json(state.data.fetch_card_data().await?))
}

/// GET /api/invoices?query=&page=
async fn invoices(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<InvoiceRow>>, ApiError> {
    let rows = state
        .data
        .fetch_filtered_invoices(params.query(), params.page())
        .await?;
    Ok(Json(rows))
}

/// GET /api/invoices/pages?query=
async fn invoice_pages(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<PagesResponse>, ApiError> {
    let total_pages = state.data.fetch_invoices_pages(params.query()).await?;
    Ok(Json(PagesResponse { total_pages }))
}

/// GET /api/invoices/{id}
async fn invoice(
    State(state): State<Arc<AppState>>,
    ValidUuid(id): ValidUuid,
) -> Result<Json<InvoiceForm>, ApiError> {
    let invoice = state
        .data
        .fetch_invoice_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            resource: "invoice",
            id: id.to_string(),
        })?;
    Ok(Json(invoice))
}

/// GET /api/customers
async fn customers(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Customer>>, ApiError> {
    Ok(Json(state.data.fetch_customers().await?))
}

/// GET /api/customers/summary?query=
async fn customer_summary(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PageParams>,
) -> Result<Json<Vec<CustomerSummary>>, ApiError> {
    Ok(Json(
        state.data.fetch_filtered_customers(params.query()).await?,
    ))
}

/// API routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/revenue", get(revenue))
        .route("/api/cards", get(cards))
        .route("/api/invoices", get(invoices))
        .route("/api/invoices/latest", get(latest_invoices))
        .route("/api/invoices/pages", get(invoice_pages))
        .route("/api/invoices/{id}", get(invoice))
        .route("/api/customers", get(customers))
        .route("/api/customers/summary", get(customer_summary))
}
