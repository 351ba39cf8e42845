//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Required Variables
//!
//! - `DISK_TOKEN` - OAuth token for the Yandex Disk API
//! - Either `DATABASE_URL` or all of (`DB_HOST`, `DB_USER`, `DB_PASSWORD`,
//!   `DB_NAME`)
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Public base URL used in generated short links
//!   (default: `http://localhost:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DISK_API_BASE` - Disk API base URL, overridable for testing
//! - `DISK_BASE_FOLDER` - Folder receiving uploads (default: `yacut_uploads`)
//! - `DB_MAX_CONNECTIONS`, `DB_CONNECT_TIMEOUT` - Pool tuning

use anyhow::{Context, Result};
use std::env;

use crate::infrastructure::disk::DEFAULT_API_BASE;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    /// Public base URL prefixed to short identifiers in responses.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    /// OAuth token for the Disk API. Passed into the upload client; never
    /// read from the environment anywhere else.
    pub disk_token: String,
    pub disk_api_base: String,
    /// Remote folder receiving uploaded files.
    pub disk_base_folder: String,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 10).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if required database configuration or the Disk
    /// token is missing.
    pub fn from_env() -> Result<Self> {
        let database_url =
            Self::load_database_url().context("Failed to load database configuration")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let disk_token = env::var("DISK_TOKEN").context("DISK_TOKEN must be set")?;
        let disk_api_base =
            env::var("DISK_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let disk_base_folder =
            env::var("DISK_BASE_FOLDER").unwrap_or_else(|_| "yacut_uploads".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            database_url,
            listen_addr,
            base_url,
            log_level,
            log_format,
            disk_token,
            disk_api_base,
            disk_base_folder,
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Loads database URL with fallback to component-based configuration.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. Constructed from `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD`, `DB_NAME`
    fn load_database_url() -> Result<String> {
        if let Ok(url) = env::var("DATABASE_URL") {
            return Ok(url);
        }

        let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
        let port = env::var("DB_PORT").unwrap_or_else(|_| "5432".to_string());
        let user =
            env::var("DB_USER").context("DB_USER must be set when DATABASE_URL is not provided")?;
        let password = env::var("DB_PASSWORD")
            .context("DB_PASSWORD must be set when DATABASE_URL is not provided")?;
        let name =
            env::var("DB_NAME").context("DB_NAME must be set when DATABASE_URL is not provided")?;

        Ok(format!(
            "postgres://{}:{}@{}:{}/{}",
            user, password, host, port, name
        ))
    }
}
