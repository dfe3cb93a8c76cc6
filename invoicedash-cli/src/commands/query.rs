//! One-shot query commands: run a single data operation and print JSON

use anyhow::{Context, Result};
use clap::Subcommand;
use invoicedash_server::{create_pool, DashboardData};
use serde::Serialize;
use serde_json::json;
use uuid::Uuid;

use crate::config::DbArgs;

#[derive(Subcommand, Debug)]
pub enum QueryCommand {
    /// Monthly revenue rows
    Revenue,
    /// The five most recent invoices
    Latest,
    /// Dashboard card totals
    Cards,
    /// One page of invoices matching a search
    Invoices {
        /// Search text (name, email, amount, date or status)
        #[arg(long, short = 'q', default_value = "")]
        query: String,

        /// Page number (1-based, six rows per page)
        #[arg(long, short = 'p', default_value = "1")]
        page: u32,
    },
    /// Number of invoice pages for a search
    Pages {
        /// Search text
        #[arg(long, short = 'q', default_value = "")]
        query: String,
    },
    /// A single invoice by id, amount in dollars
    Invoice {
        /// Invoice UUID
        id: Uuid,
    },
    /// Customers; with --query, the customer table with invoice totals
    Customers {
        /// Search text (name or email)
        #[arg(long, short = 'q')]
        query: Option<String>,
    },
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Connect, run one operation, print its result.
pub async fn run_query(command: QueryCommand, db: &DbArgs) -> Result<()> {
    let pool = create_pool(&db.database_config()?)
        .await
        .context("Failed to create database pool")?;
    let data = DashboardData::new(pool.clone());

    let result = execute(&data, command).await;
    pool.close().await;
    result
}

async fn execute(data: &DashboardData, command: QueryCommand) -> Result<()> {
    match command {
        QueryCommand::Revenue => print_json(&data.fetch_revenue().await?),
        QueryCommand::Latest => print_json(&data.fetch_latest_invoices().await?),
        QueryCommand::Cards => print_json(&data.fetch_card_data().await?),
        QueryCommand::Invoices { query, page } => {
            print_json(&data.fetch_filtered_invoices(&query, page).await?)
        }
        QueryCommand::Pages { query } => {
            let total_pages = data.fetch_invoices_pages(&query).await?;
            print_json(&json!({ "total_pages": total_pages }))
        }
        QueryCommand::Invoice { id } => match data.fetch_invoice_by_id(id).await? {
            Some(invoice) => print_json(&invoice),
            None => anyhow::bail!("invoice {} not found", id),
        },
        QueryCommand::Customers { query: None } => print_json(&data.fetch_customers().await?),
        QueryCommand::Customers { query: Some(query) } => {
            print_json(&data.fetch_filtered_customers(&query).await?)
        }
    }
}
