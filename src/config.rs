//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before use.
//!
//! ## Optional Variables
//!
//! - `EMBED_DEFAULT_BASE` - App URL unknown paths are passed through to
//!   (default: `https://synthetix.streamlit.app`)
//! - `EMBED_MOUNT_PREFIX` - Path prefix stripped before route lookup
//!   (default: `/html`, empty disables stripping)
//! - `EMBED_ROUTES_FILE` - JSON route table replacing the built-in one
//! - `EMBED_PAGE_TITLE` - Title of the embedding page (default: `Synthetix Stats`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//!
//! ## Routes File
//!
//! ```json
//! {
//!   "/": "https://synthetix.streamlit.app",
//!   "/all": { "url": "https://synthetix-all.streamlit.app" }
//! }
//! ```

use crate::application::services::{
    DEFAULT_MOUNT_PREFIX, DEFAULT_PAGE_TITLE, EmbedService, RouteResolver,
};
use crate::domain::RouteTable;
use crate::domain::route::ROOT_APP_URL;
use crate::error::EmbedError;
use crate::utils::normalize_base_url;
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Embedding configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Normalized default base URL, without trailing slash.
    pub default_base: String,
    pub mount_prefix: String,
    /// When set, replaces the built-in route table.
    pub routes_file: Option<PathBuf>,
    pub page_title: String,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_base: ROOT_APP_URL.to_string(),
            mount_prefix: DEFAULT_MOUNT_PREFIX.to_string(),
            routes_file: None,
            page_title: DEFAULT_PAGE_TITLE.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `EMBED_DEFAULT_BASE` is not a valid http(s) URL.
    pub fn from_env() -> Result<Self> {
        let raw_base = env::var("EMBED_DEFAULT_BASE").unwrap_or_else(|_| ROOT_APP_URL.to_string());
        let default_base =
            normalize_base_url(&raw_base).context("Failed to load EMBED_DEFAULT_BASE")?;

        let mount_prefix =
            env::var("EMBED_MOUNT_PREFIX").unwrap_or_else(|_| DEFAULT_MOUNT_PREFIX.to_string());

        let routes_file = env::var("EMBED_ROUTES_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let page_title =
            env::var("EMBED_PAGE_TITLE").unwrap_or_else(|_| DEFAULT_PAGE_TITLE.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            default_base,
            mount_prefix,
            routes_file,
            page_title,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `mount_prefix` is non-empty and does not start with `/`, or ends with `/`
    /// - `log_format` is not `text` or `json`
    /// - `page_title` is blank
    pub fn validate(&self) -> Result<()> {
        if !self.mount_prefix.is_empty() {
            if !self.mount_prefix.starts_with('/') {
                anyhow::bail!(
                    "EMBED_MOUNT_PREFIX must start with '/', got '{}'",
                    self.mount_prefix
                );
            }
            if self.mount_prefix.ends_with('/') {
                anyhow::bail!(
                    "EMBED_MOUNT_PREFIX must not end with '/', got '{}'",
                    self.mount_prefix
                );
            }
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.page_title.trim().is_empty() {
            anyhow::bail!("EMBED_PAGE_TITLE must not be empty");
        }

        Ok(())
    }

    /// Returns the route table: the routes file if configured, otherwise the built-in one.
    ///
    /// # Errors
    ///
    /// Returns an error if the routes file cannot be read, parsed or validated.
    pub fn route_table(&self) -> Result<RouteTable, EmbedError> {
        match &self.routes_file {
            Some(path) => RouteTable::from_json_file(path),
            None => Ok(RouteTable::default()),
        }
    }

    /// Builds the resolver described by this configuration.
    ///
    /// # Errors
    ///
    /// See [`Config::route_table`].
    pub fn resolver(&self) -> Result<RouteResolver, EmbedError> {
        Ok(RouteResolver::new(
            self.route_table()?,
            self.default_base.clone(),
            self.mount_prefix.clone(),
        ))
    }

    /// Builds the embed service described by this configuration.
    ///
    /// # Errors
    ///
    /// See [`Config::route_table`].
    pub fn embed_service(&self) -> Result<EmbedService, EmbedError> {
        Ok(EmbedService::new(self.resolver()?, self.page_title.clone()))
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Default base: {}", self.default_base);
        if self.mount_prefix.is_empty() {
            tracing::info!("  Mount prefix: disabled");
        } else {
            tracing::info!("  Mount prefix: {}", self.mount_prefix);
        }
        match &self.routes_file {
            Some(path) => tracing::info!("  Routes: {}", path.display()),
            None => tracing::info!("  Routes: built-in"),
        }
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
