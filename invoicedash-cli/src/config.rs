//! Environment and database settings
//!
//! The connection string is read once at startup, from (highest first):
//! `--database-url`, the `POSTGRES_URL` environment variable, `./.env`,
//! then `~/.invoicedash/.env`.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use invoicedash_server::{DatabaseConfig, SslMode};

/// Load `.env` files without overriding variables already set.
///
/// Runs before tracing is installed, so it returns the files it loaded
/// for the caller to log.
pub fn load_dotenv() -> Vec<PathBuf> {
    let mut loaded = Vec::new();

    if let Ok(path) = dotenvy::dotenv() {
        loaded.push(path);
    }

    if let Some(env_file) = config_dir().map(|dir| dir.join(".env")) {
        if env_file.exists() && dotenvy::from_path(&env_file).is_ok() {
            loaded.push(env_file);
        }
    }

    loaded
}

/// The invoicedash config directory (~/.invoicedash)
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".invoicedash"))
}

/// Database connection flags shared by every subcommand
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Database URL (overrides environment)
    #[arg(long, env = "POSTGRES_URL", global = true, hide_env_values = true)]
    pub database_url: Option<String>,

    /// TLS mode: disable, prefer, require, verify-ca, verify-full
    #[arg(long, default_value = "verify-full", global = true, value_parser = parse_ssl_mode)]
    pub db_ssl_mode: SslMode,

    /// Maximum pooled connections
    #[arg(long, default_value = "5", global = true)]
    pub db_max_connections: u32,
}

fn parse_ssl_mode(s: &str) -> Result<SslMode, String> {
    s.parse().map_err(|e: invoicedash_core::ValidationError| e.to_string())
}

impl DbArgs {
    pub fn database_config(&self) -> Result<DatabaseConfig> {
        let url = self
            .database_url
            .clone()
            .context("POSTGRES_URL not set. Set via --database-url, POSTGRES_URL env, or ~/.invoicedash/.env")?;

        let mut config = DatabaseConfig::new(url).with_ssl_mode(self.db_ssl_mode);
        config.max_connections = self.db_max_connections;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_url_is_reported() {
        let args = DbArgs {
            database_url: None,
            db_ssl_mode: SslMode::VerifyFull,
            db_max_connections: 5,
        };
        let err = args.database_config().unwrap_err();
        assert!(err.to_string().contains("POSTGRES_URL"));
    }

    #[test]
    fn flags_reach_the_pool_config() {
        let args = DbArgs {
            database_url: Some("postgres://localhost/invoicedash".into()),
            db_ssl_mode: SslMode::Require,
            db_max_connections: 12,
        };
        let config = args.database_config().unwrap();
        assert_eq!(config.ssl_mode, SslMode::Require);
        assert_eq!(config.max_connections, 12);
    }

    #[test]
    fn ssl_mode_parser_reports_bad_values() {
        assert!(parse_ssl_mode("verify-ca").is_ok());
        assert!(parse_ssl_mode("maybe").unwrap_err().contains("maybe"));
    }
}
