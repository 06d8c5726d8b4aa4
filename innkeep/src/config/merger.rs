//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use innkeep::config::{Config, ConfigMerger};
///
/// let low = Config { default_staff: Some("low".to_string()), ..Default::default() };
/// let high = Config { default_staff: Some("high".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.default_staff, Some("high".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge configuration sources into the final config.
    ///
    /// Sources should be provided from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Merge `source` into `target`; set fields in `source` win.
    ///
    /// Nested sections merge field by field.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if let Some(resolver) = &source.resolver {
            let merged = target.resolver.get_or_insert_with(Default::default);
            if resolver.max_range_days.is_some() {
                merged.max_range_days = resolver.max_range_days;
            }
        }

        if let Some(transitions) = &source.transitions {
            let merged = target.transitions.get_or_insert_with(Default::default);
            if transitions.enforce_check_in_window.is_some() {
                merged.enforce_check_in_window = transitions.enforce_check_in_window;
            }
        }

        if let Some(session) = &source.session {
            let merged = target.session.get_or_insert_with(Default::default);
            if session.ttl_minutes.is_some() {
                merged.ttl_minutes = session.ttl_minutes;
            }
        }

        if source.disable_autoinit.is_some() {
            target.disable_autoinit = source.disable_autoinit;
        }

        if source.maximum_lock_wait_seconds.is_some() {
            target.maximum_lock_wait_seconds = source.maximum_lock_wait_seconds;
        }

        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if source.default_staff.is_some() {
            target.default_staff.clone_from(&source.default_staff);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::{OutputFormat, ResolverConfig, SessionConfig, TransitionConfig};
    use std::path::PathBuf;

    fn source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/config/{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_empty_sources() {
        assert_eq!(ConfigMerger::merge(Vec::new()), Config::default());
    }

    #[test]
    fn test_higher_precedence_wins() {
        let user = Config {
            output_format: Some(OutputFormat::Json),
            maximum_lock_wait_seconds: Some(3),
            ..Default::default()
        };
        let project = Config {
            maximum_lock_wait_seconds: Some(8),
            ..Default::default()
        };

        let merged = ConfigMerger::merge(vec![source(1, user), source(2, project)]);
        assert_eq!(merged.output_format, Some(OutputFormat::Json));
        assert_eq!(merged.maximum_lock_wait_seconds, Some(8));
    }

    #[test]
    fn test_nested_sections_merge_field_by_field() {
        let user = Config {
            resolver: Some(ResolverConfig {
                max_range_days: Some(60),
            }),
            session: Some(SessionConfig {
                ttl_minutes: Some(30),
            }),
            ..Default::default()
        };
        let project = Config {
            resolver: Some(ResolverConfig {
                max_range_days: None,
            }),
            transitions: Some(TransitionConfig {
                enforce_check_in_window: Some(true),
            }),
            ..Default::default()
        };

        let merged = ConfigMerger::merge(vec![source(1, user), source(2, project)]);
        assert_eq!(merged.max_range_days(), 60);
        assert!(merged.enforce_check_in_window());
        assert_eq!(merged.session_ttl(), chrono::Duration::minutes(30));
    }
}
