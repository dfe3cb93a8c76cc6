//! invoicedash CLI - invoice and customer dashboard
//!
//! - `serve`: run the HTTP dashboard and JSON API
//! - `revenue`, `latest`, `cards`, `invoices`, `pages`, `invoice`,
//!   `customers`: run one read operation and print JSON

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;

mod commands;
mod config;
mod tracing_setup;

use commands::query::QueryCommand;
use config::DbArgs;

#[derive(Parser, Debug)]
#[command(
    name = "invoicedash",
    author,
    version,
    about = "Invoice and customer dashboard over Postgres",
    long_about = "Serve a server-rendered dashboard of invoices, customers and revenue, \
                  or run its read queries directly and print JSON."
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(flatten)]
    db: DbArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP dashboard server
    Serve(commands::serve::ServeArgs),
    #[command(flatten)]
    Query(QueryCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env must be loaded before parsing so `env = "POSTGRES_URL"` sees it.
    let env_files = config::load_dotenv();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;
    if env_files.is_empty() {
        debug!("No .env files found (current dir or ~/.invoicedash)");
    }
    for path in &env_files {
        debug!("Loaded .env from {}", path.display());
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args, &cli.db).await,
        Commands::Query(command) => commands::run_query(command, &cli.db).await,
    }
}
