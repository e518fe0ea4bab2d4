//! Configuration module for the storefront.
//!
//! Loads YAML configuration, expands environment variables and validates
//! every section before anything is wired.
//!
//! # Usage
//!
//! ```rust,ignore
//! use storefront::config::{Config, load_config};
//!
//! // Load from default path (config.yaml)
//! let config = load_config(None)?;
//!
//! // Load from custom path
//! let config = load_config(Some("custom/config.yaml"))?;
//!
//! println!("Open from {}:00", config.store_hours.opening_hour);
//! ```

mod observability;
mod payments;
mod promotions;
mod shipping;
mod store_hours;

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::shared::CurrencyCode;

pub use observability::{LoggingConfig, ObservabilityConfig};
pub use payments::PaymentsConfig;
pub use promotions::{HolidayConfig, PromotionsConfig};
pub use shipping::ShippingConfig;
pub use store_hours::StoreHoursConfig;

/// Default configuration file path.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read configuration file.
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        /// Path to the config file.
        path: String,
        /// The underlying IO error.
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse config YAML: {0}")]
    ParseError(#[from] serde_yaml_bw::Error),

    /// Configuration validation failed.
    #[error("Config validation failed: {0}")]
    ValidationError(String),
}

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Online window.
    #[serde(default)]
    pub store_hours: StoreHoursConfig,
    /// Promotions.
    #[serde(default)]
    pub promotions: PromotionsConfig,
    /// Exchange rate per currency, relative to the store's base currency.
    #[serde(default)]
    pub exchange_rates: BTreeMap<CurrencyCode, Decimal>,
    /// Shipping table.
    #[serde(default)]
    pub shipping: ShippingConfig,
    /// Sandbox payment processor settings.
    #[serde(default)]
    pub payments: PaymentsConfig,
    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

// ============================================
// Configuration Loading
// ============================================

/// Load configuration from a YAML file with environment variable interpolation.
///
/// # Arguments
///
/// * `path` - Optional path to the config file. Defaults to "config.yaml".
///
/// # Errors
///
/// Returns a `ConfigError` if the file cannot be read, parsed, or validated.
pub fn load_config(path: Option<&str>) -> Result<Config, ConfigError> {
    let path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_string(),
        source: e,
    })?;

    load_config_from_string(&contents)
}

/// Load configuration from a YAML string (useful for testing).
///
/// # Errors
///
/// Returns a `ConfigError` if the YAML cannot be parsed or validated.
pub fn load_config_from_string(yaml: &str) -> Result<Config, ConfigError> {
    let interpolated = interpolate_env_vars(yaml);
    let config: Config = serde_yaml_bw::from_str(&interpolated)?;
    validate_config(&config)?;
    Ok(config)
}

/// Interpolate environment variables in a string.
///
/// Supports both `${VAR}` and `${VAR:-default}` syntax.
#[allow(clippy::expect_used)] // Regex is compile-time constant; expect() is safe here
fn interpolate_env_vars(input: &str) -> String {
    use std::sync::OnceLock;

    static ENV_VAR_REGEX: OnceLock<regex::Regex> = OnceLock::new();

    let re = ENV_VAR_REGEX.get_or_init(|| {
        regex::Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)(?::-([^}]*))?\}")
            .expect("env var regex is valid")
    });

    re.replace_all(input, |caps: &regex::Captures<'_>| {
        let default_value = caps.get(2).map_or("", |m| m.as_str());
        match std::env::var(&caps[1]) {
            Ok(v) if !v.is_empty() => v,
            _ => default_value.to_string(),
        }
    })
    .into_owned()
}

/// Validate configuration values.
fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let hours = &config.store_hours;
    if hours.closing_hour > 24 {
        return Err(ConfigError::ValidationError(
            "store_hours.closing_hour must be at most 24".to_string(),
        ));
    }
    if hours.opening_hour >= hours.closing_hour {
        return Err(ConfigError::ValidationError(
            "store_hours.opening_hour must be before closing_hour".to_string(),
        ));
    }

    let holiday = &config.promotions.holiday;
    if holiday.rate < Decimal::ZERO || holiday.rate > Decimal::ONE {
        return Err(ConfigError::ValidationError(
            "promotions.holiday.rate must be between 0 and 1".to_string(),
        ));
    }
    // 2024 is a leap year, so Feb 29 passes.
    if NaiveDate::from_ymd_opt(2024, holiday.month, holiday.day).is_none() {
        return Err(ConfigError::ValidationError(format!(
            "promotions.holiday {}/{} is not a calendar date",
            holiday.month, holiday.day
        )));
    }

    if let Some((currency, _)) = config
        .exchange_rates
        .iter()
        .find(|(_, rate)| **rate <= Decimal::ZERO)
    {
        return Err(ConfigError::ValidationError(format!(
            "exchange_rates.{currency} must be positive"
        )));
    }

    if let Some((destination, _)) = config
        .shipping
        .destinations
        .iter()
        .find(|(_, quote)| quote.cost.is_negative())
    {
        return Err(ConfigError::ValidationError(format!(
            "shipping.destinations.{destination}.cost cannot be negative"
        )));
    }

    if config.payments.approval_limit <= Decimal::ZERO {
        return Err(ConfigError::ValidationError(
            "payments.approval_limit must be positive".to_string(),
        ));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error", "off"];
    let level = config.observability.logging.level.to_ascii_lowercase();
    if !valid_levels.contains(&level.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.level must be one of: {valid_levels:?}"
        )));
    }

    let valid_formats = ["pretty", "compact", "json"];
    if !valid_formats.contains(&config.observability.logging.format.as_str()) {
        return Err(ConfigError::ValidationError(format!(
            "observability.logging.format must be one of: {valid_formats:?}"
        )));
    }

    Ok(())
}
