//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Example
//!
//! ```bash
//! export LISTEN="0.0.0.0:8080"
//! export PUBLIC_ORIGIN="https://invites.example.com"
//! export TEMPLATES_DIR="/srv/invites/templates"
//! ```
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `PUBLIC_ORIGIN` - Scheme and host share links point at (default: `http://localhost:3000`)
//! - `TEMPLATES_DIR` - Directory with `template<N>.html` files (default: `static/templates`)
//! - `STATIC_DIR` - Directory served under `/static` (default: `static`)
//! - `QR_MIN_DIMENSION` - Minimum QR image size in pixels (default: 200, 64..=2048)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use url::Url;

const MIN_QR_DIMENSION: u32 = 64;
const MAX_QR_DIMENSION: u32 = 2048;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Origin embedded in share links, without a trailing slash.
    pub public_origin: String,
    pub templates_dir: PathBuf,
    pub static_dir: PathBuf,
    pub qr_min_dimension: u32,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:3000".to_string(),
            public_origin: "http://localhost:3000".to_string(),
            templates_dir: PathBuf::from("static/templates"),
            static_dir: PathBuf::from("static"),
            qr_min_dimension: 200,
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
    /// Returns an error if `QR_MIN_DIMENSION` is set but not a number.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let public_origin = env::var("PUBLIC_ORIGIN")
            .map(|origin| origin.trim_end_matches('/').to_string())
            .unwrap_or(defaults.public_origin);
        let templates_dir = env::var("TEMPLATES_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.templates_dir);
        let static_dir = env::var("STATIC_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        let qr_min_dimension = match env::var("QR_MIN_DIMENSION") {
            Ok(value) => value
                .parse()
                .with_context(|| format!("QR_MIN_DIMENSION must be a number, got '{}'", value))?,
            Err(_) => defaults.qr_min_dimension,
        };

        Ok(Self {
            listen_addr,
            public_origin,
            templates_dir,
            static_dir,
            qr_min_dimension,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `public_origin` is not an http(s) URL
    /// - `qr_min_dimension` is outside 64..=2048
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        let origin = Url::parse(&self.public_origin)
            .with_context(|| format!("PUBLIC_ORIGIN is not a valid URL: '{}'", self.public_origin))?;
        if origin.scheme() != "http" && origin.scheme() != "https" {
            anyhow::bail!(
                "PUBLIC_ORIGIN must start with 'http://' or 'https://', got '{}'",
                self.public_origin
            );
        }

        if !(MIN_QR_DIMENSION..=MAX_QR_DIMENSION).contains(&self.qr_min_dimension) {
            anyhow::bail!(
                "QR_MIN_DIMENSION must be between {} and {}, got {}",
                MIN_QR_DIMENSION,
                MAX_QR_DIMENSION,
                self.qr_min_dimension
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Public origin: {}", self.public_origin);
        tracing::info!("  Templates: {}", self.templates_dir.display());
        tracing::info!("  Static files: {}", self.static_dir.display());
        tracing::info!("  QR minimum size: {}px", self.qr_min_dimension);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable cannot be parsed or validation fails.
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
