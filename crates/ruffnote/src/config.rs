use std::{env, str::FromStr};

use anyhow::{bail, Context, Result};
use ruffnote_core::item::LocalIdStrategy;
use ruffnote_core::service::{DEFAULT_SERVICE_NAME, DEFAULT_SERVICE_VERSION};

use crate::repository::DEFAULT_CREATE_MAX_ATTEMPTS;

/// Default number of owner items scanned by rename and delete.
pub const DEFAULT_OWNER_SCAN_LIMIT: usize = 100;

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => bail!("unknown log format: {other}"),
        }
    }
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to SQLite database file (default: "ruffnote.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[cfg_attr(not(feature = "sqlite"), allow(dead_code))]
    pub sqlite_path: String,
    pub id_strategy: LocalIdStrategy,
    pub create_max_attempts: u32,
    pub owner_scan_limit: usize,
    pub service_name: String,
    pub service_version: String,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sqlite_path: "ruffnote.db".to_string(),
            id_strategy: LocalIdStrategy::default(),
            create_max_attempts: DEFAULT_CREATE_MAX_ATTEMPTS,
            owner_scan_limit: DEFAULT_OWNER_SCAN_LIMIT,
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            service_version: DEFAULT_SERVICE_VERSION.to_string(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - SQLite database path (default: "ruffnote.db")
    /// - `ITEM_ID_STRATEGY` - `placeholder` or `uuid` (default: placeholder)
    /// - `CREATE_MAX_ATTEMPTS` - optimistic commit attempts per create (default: 3)
    /// - `OWNER_SCAN_LIMIT` - owner items scanned by rename/delete (default: 100)
    /// - `SERVICE_NAME` - first segment of the API root (default: "ruffnote_plus")
    /// - `SERVICE_VERSION` - second segment of the API root (default: "v1")
    /// - `LOG_FORMAT` - `pretty` or `json` (default: pretty)
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let id_strategy = match lookup("ITEM_ID_STRATEGY") {
            Some(value) => value
                .parse()
                .context("ITEM_ID_STRATEGY must be 'placeholder' or 'uuid'")?,
            None => defaults.id_strategy,
        };

        let log_format = match lookup("LOG_FORMAT") {
            Some(value) => value.parse()?,
            None => defaults.log_format,
        };

        Ok(Self {
            sqlite_path: lookup("SQLITE_PATH").unwrap_or(defaults.sqlite_path),
            id_strategy,
            create_max_attempts: parse_positive_or(
                lookup("CREATE_MAX_ATTEMPTS"),
                "CREATE_MAX_ATTEMPTS",
                defaults.create_max_attempts,
            )?,
            owner_scan_limit: parse_positive_or(
                lookup("OWNER_SCAN_LIMIT"),
                "OWNER_SCAN_LIMIT",
                defaults.owner_scan_limit,
            )?,
            service_name: lookup("SERVICE_NAME").unwrap_or(defaults.service_name),
            service_version: lookup("SERVICE_VERSION").unwrap_or(defaults.service_version),
            log_format,
        })
    }
}

/// Parses an optional integer variable that must be greater than zero.
fn parse_positive_or<T>(value: Option<String>, name: &str, default: T) -> Result<T>
where
    T: FromStr + Default + PartialOrd,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let Some(raw) = value else {
        return Ok(default);
    };

    let parsed: T = raw
        .trim()
        .parse()
        .with_context(|| format!("{name} must be a positive integer, got '{raw}'"))?;
    if parsed <= T::default() {
        bail!("{name} must be a positive integer, got '{raw}'");
    }
    Ok(parsed)
}
