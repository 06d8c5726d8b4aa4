//! Configuration schema definitions.
//!
//! Every field is optional so partial files can be layered; the accessor
//! methods on [`Config`] apply the built-in defaults.

use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Default longest span, in days, of one range query.
pub const DEFAULT_MAX_RANGE_DAYS: u32 = 366;

/// Default staff session lifetime in minutes.
pub const DEFAULT_SESSION_TTL_MINUTES: u32 = 480;

/// Default busy timeout in seconds.
pub const DEFAULT_LOCK_WAIT_SECONDS: u64 = 5;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use innkeep::config::{Config, ResolverConfig};
///
/// let config = Config {
///     resolver: Some(ResolverConfig { max_range_days: Some(31) }),
///     ..Default::default()
/// };
/// assert_eq!(config.max_range_days(), 31);
/// assert!(!config.enforce_check_in_window());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Availability resolution settings.
    pub resolver: Option<ResolverConfig>,

    /// Booking transition settings.
    pub transitions: Option<TransitionConfig>,

    /// Staff session settings.
    pub session: Option<SessionConfig>,

    /// Disable automatic database initialization.
    pub disable_autoinit: Option<bool>,

    /// Maximum time to wait for database lock acquisition (seconds).
    pub maximum_lock_wait_seconds: Option<u64>,

    /// Output format for query commands.
    pub output_format: Option<OutputFormat>,

    /// Staff name used when none is given on the command line.
    pub default_staff: Option<String>,
}

impl Config {
    /// Returns the longest span, in days, of one range query.
    #[must_use]
    pub fn max_range_days(&self) -> u32 {
        self.resolver
            .as_ref()
            .and_then(|r| r.max_range_days)
            .unwrap_or(DEFAULT_MAX_RANGE_DAYS)
    }

    /// Returns whether check-ins outside the stay are rejected.
    #[must_use]
    pub fn enforce_check_in_window(&self) -> bool {
        self.transitions
            .as_ref()
            .and_then(|t| t.enforce_check_in_window)
            .unwrap_or(false)
    }

    /// Returns the staff session lifetime.
    #[must_use]
    pub fn session_ttl(&self) -> Duration {
        let minutes = self
            .session
            .as_ref()
            .and_then(|s| s.ttl_minutes)
            .unwrap_or(DEFAULT_SESSION_TTL_MINUTES);
        Duration::minutes(i64::from(minutes))
    }

    /// Returns the busy timeout in seconds.
    #[must_use]
    pub fn lock_wait_seconds(&self) -> u64 {
        self.maximum_lock_wait_seconds
            .unwrap_or(DEFAULT_LOCK_WAIT_SECONDS)
    }

    /// Returns the configured output format.
    #[must_use]
    pub fn output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Availability resolution settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ResolverConfig {
    /// Longest span, in days, of one range query.
    pub max_range_days: Option<u32>,
}

/// Booking transition settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct TransitionConfig {
    /// Reject check-ins outside `[check_in, check_out)` instead of warning.
    pub enforce_check_in_window: Option<bool>,
}

/// Staff session settings.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Session lifetime in minutes.
    pub ttl_minutes: Option<u32>,
}

/// Output format for query commands.
///
/// # Examples
///
/// ```
/// use innkeep::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// ```
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON output format.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}
