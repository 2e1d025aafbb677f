//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RESPONSE_MODE` - Shape of the shorten response: `key` returns the bare
//!   short key, `full_url` returns a fully-qualified short URL (default: `key`)
//! - `BASE_URL` - Public base used to build short URLs in `full_url` mode
//!   (default: `http://localhost:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::str::FromStr;

/// Shape of the successful `POST /shorten` response.
///
/// The two deployment variants of this service differ only in what the
/// client receives back: the bare key (the frontend builds the short URL
/// itself) or a ready-to-use fully-qualified short URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResponseMode {
    #[default]
    Key,
    FullUrl,
}

impl FromStr for ResponseMode {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "key" => Ok(ResponseMode::Key),
            "full_url" => Ok(ResponseMode::FullUrl),
            other => anyhow::bail!("RESPONSE_MODE must be 'key' or 'full_url', got '{other}'"),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub response_mode: ResponseMode,
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `RESPONSE_MODE` carries an unknown value.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

        let response_mode = match env::var("RESPONSE_MODE") {
            Ok(raw) => raw.parse()?,
            Err(_) => ResponseMode::default(),
        };

        let base_url = env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            listen_addr,
            response_mode,
            base_url,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not in `host:port` form
    /// - `log_format` is not `text` or `json`
    /// - `base_url` is not an http(s) URL in `full_url` mode
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.response_mode == ResponseMode::FullUrl
            && !self.base_url.starts_with("http://")
            && !self.base_url.starts_with("https://")
        {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Response mode: {:?}", self.response_mode);

        if self.response_mode == ResponseMode::FullUrl {
            tracing::info!("  Base URL: {}", self.base_url);
        }

        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if variables carry invalid values.
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
