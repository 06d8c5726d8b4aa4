//! Environment variable overrides.
//!
//! `INNKEEP_*` variables override values from configuration files.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;

/// Handles environment variable overrides for configuration.
///
/// | Variable | Field |
/// |---|---|
/// | `INNKEEP_MAX_RANGE_DAYS` | `resolver.max_range_days` |
/// | `INNKEEP_ENFORCE_CHECK_IN_WINDOW` | `transitions.enforce_check_in_window` |
/// | `INNKEEP_SESSION_TTL_MINUTES` | `session.ttl_minutes` |
/// | `INNKEEP_DISABLE_AUTOINIT` | `disable_autoinit` |
/// | `INNKEEP_MAXIMUM_LOCK_WAIT_SECONDS` | `maximum_lock_wait_seconds` |
/// | `INNKEEP_OUTPUT_FORMAT` | `output_format` |
/// | `INNKEEP_STAFF` | `default_staff` |
///
/// # Examples
///
/// ```no_run
/// use innkeep::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable holds an unparsable value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var("INNKEEP_MAX_RANGE_DAYS") {
            let days = Self::parse_number("INNKEEP_MAX_RANGE_DAYS", &val)?;
            config
                .resolver
                .get_or_insert_with(Default::default)
                .max_range_days = Some(days);
        }

        if let Ok(val) = env::var("INNKEEP_ENFORCE_CHECK_IN_WINDOW") {
            let enforce = Self::parse_bool("INNKEEP_ENFORCE_CHECK_IN_WINDOW", &val)?;
            config
                .transitions
                .get_or_insert_with(Default::default)
                .enforce_check_in_window = Some(enforce);
        }

        if let Ok(val) = env::var("INNKEEP_SESSION_TTL_MINUTES") {
            let minutes = Self::parse_number("INNKEEP_SESSION_TTL_MINUTES", &val)?;
            config
                .session
                .get_or_insert_with(Default::default)
                .ttl_minutes = Some(minutes);
        }

        if let Ok(val) = env::var("INNKEEP_DISABLE_AUTOINIT") {
            config.disable_autoinit = Some(Self::parse_bool("INNKEEP_DISABLE_AUTOINIT", &val)?);
        }

        if let Ok(val) = env::var("INNKEEP_MAXIMUM_LOCK_WAIT_SECONDS") {
            config.maximum_lock_wait_seconds =
                Some(Self::parse_number("INNKEEP_MAXIMUM_LOCK_WAIT_SECONDS", &val)?);
        }

        if let Ok(val) = env::var("INNKEEP_OUTPUT_FORMAT") {
            config.output_format = Some(Self::parse_output_format(&val)?);
        }

        if let Ok(staff) = env::var("INNKEEP_STAFF") {
            config.default_staff = Some(staff);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    fn parse_number<T: std::str::FromStr>(field: &str, s: &str) -> Result<T> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Must be a positive integer, got '{s}'"),
        })
    }

    fn parse_output_format(s: &str) -> Result<OutputFormat> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => Err(Error::Validation {
                field: "INNKEEP_OUTPUT_FORMAT".into(),
                message: format!("Unknown output format '{s}' (expected table or json)"),
            }),
        }
    }
}
