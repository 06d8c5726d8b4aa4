//! Configuration validation.

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Upper bound on `resolver.max_range_days`, about ten years.
pub const MAX_RANGE_DAYS_LIMIT: u32 = 3660;

/// Upper bound on `session.ttl_minutes`, one week.
pub const MAX_SESSION_TTL_MINUTES: u32 = 7 * 24 * 60;

const MAX_STAFF_NAME_LEN: usize = 64;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use innkeep::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first invalid field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(days) = config.resolver.as_ref().and_then(|r| r.max_range_days) {
            if days == 0 || days > MAX_RANGE_DAYS_LIMIT {
                return Err(Error::Validation {
                    field: "resolver.max_range_days".into(),
                    message: format!("Must be between 1 and {MAX_RANGE_DAYS_LIMIT}, got {days}"),
                });
            }
        }

        if let Some(minutes) = config.session.as_ref().and_then(|s| s.ttl_minutes) {
            if minutes == 0 || minutes > MAX_SESSION_TTL_MINUTES {
                return Err(Error::Validation {
                    field: "session.ttl_minutes".into(),
                    message: format!(
                        "Must be between 1 and {MAX_SESSION_TTL_MINUTES}, got {minutes}"
                    ),
                });
            }
        }

        if config.maximum_lock_wait_seconds == Some(0) {
            return Err(Error::Validation {
                field: "maximum_lock_wait_seconds".into(),
                message: "Timeout must be greater than 0".into(),
            });
        }

        if let Some(staff) = &config.default_staff {
            Self::validate_staff_name("default_staff", staff)?;
        }

        Ok(())
    }

    /// Validate a staff name used to open a session.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is blank, too long or contains control
    /// characters.
    pub fn validate_staff_name(field: &str, value: &str) -> Result<()> {
        let trimmed = value.trim();

        if trimmed.is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or whitespace-only".into(),
            });
        }

        if trimmed.chars().any(char::is_control) {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain control characters".into(),
            });
        }

        if trimmed.chars().count() > MAX_STAFF_NAME_LEN {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Cannot exceed {MAX_STAFF_NAME_LEN} characters"),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{ResolverConfig, SessionConfig};

    fn field_of(result: Result<()>) -> String {
        match result {
            Err(Error::Validation { field, .. }) => field,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_empty_config() {
        assert!(ConfigValidator::validate(&Config::default()).is_ok());
    }

    #[test]
    fn test_max_range_days_bounds() {
        for bad in [0, MAX_RANGE_DAYS_LIMIT + 1] {
            let config = Config {
                resolver: Some(ResolverConfig {
                    max_range_days: Some(bad),
                }),
                ..Default::default()
            };
            assert_eq!(
                field_of(ConfigValidator::validate(&config)),
                "resolver.max_range_days"
            );
        }

        let config = Config {
            resolver: Some(ResolverConfig {
                max_range_days: Some(1),
            }),
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_session_ttl_bounds() {
        let config = Config {
            session: Some(SessionConfig {
                ttl_minutes: Some(0),
            }),
            ..Default::default()
        };
        assert_eq!(
            field_of(ConfigValidator::validate(&config)),
            "session.ttl_minutes"
        );
    }

    #[test]
    fn test_zero_lock_wait_rejected() {
        let config = Config {
            maximum_lock_wait_seconds: Some(0),
            ..Default::default()
        };
        assert_eq!(
            field_of(ConfigValidator::validate(&config)),
            "maximum_lock_wait_seconds"
        );
    }

    #[test]
    fn test_staff_names() {
        assert!(ConfigValidator::validate_staff_name("staff", "maria").is_ok());
        assert!(ConfigValidator::validate_staff_name("staff", "   ").is_err());
        assert!(ConfigValidator::validate_staff_name("staff", "a\tb").is_err());
        assert!(ConfigValidator::validate_staff_name("staff", &"x".repeat(65)).is_err());
    }
}
