//! Property-based tests for configuration merging.

use super::merger::ConfigMerger;
use super::schema::{Config, OutputFormat, ResolverConfig, SessionConfig, TransitionConfig};
use super::validator::ConfigValidator;
use proptest::prelude::*;

fn config_strategy() -> impl Strategy<Value = Config> {
    (
        prop::option::of(prop::option::of(1u32..=3660)),
        prop::option::of(prop::option::of(any::<bool>())),
        prop::option::of(prop::option::of(1u32..=10080)),
        prop::option::of(any::<bool>()),
        prop::option::of(1u64..120),
        prop::option::of(prop_oneof![Just(OutputFormat::Table), Just(OutputFormat::Json)]),
        prop::option::of("[a-z][a-z-]{0,15}"),
    )
        .prop_map(
            |(range, enforce, ttl, autoinit, lock_wait, format, staff)| Config {
                resolver: range.map(|max_range_days| ResolverConfig { max_range_days }),
                transitions: enforce
                    .map(|enforce_check_in_window| TransitionConfig { enforce_check_in_window }),
                session: ttl.map(|ttl_minutes| SessionConfig { ttl_minutes }),
                disable_autoinit: autoinit,
                maximum_lock_wait_seconds: lock_wait,
                output_format: format,
                default_staff: staff,
            },
        )
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Every value set in the higher-precedence config survives the merge;
    // unset ones fall through to the lower.
    #[test]
    fn config_merge_higher_precedence_wins(
        low in config_strategy(),
        high in config_strategy(),
    ) {
        let mut merged = low.clone();
        ConfigMerger::merge_into(&mut merged, &high);

        let pick = |h: Option<u32>, l: Option<u32>| h.or(l);
        prop_assert_eq!(
            merged.resolver.as_ref().and_then(|r| r.max_range_days),
            pick(
                high.resolver.as_ref().and_then(|r| r.max_range_days),
                low.resolver.as_ref().and_then(|r| r.max_range_days),
            )
        );
        prop_assert_eq!(
            merged.enforce_check_in_window(),
            high.transitions
                .as_ref()
                .and_then(|t| t.enforce_check_in_window)
                .or_else(|| low.transitions.as_ref().and_then(|t| t.enforce_check_in_window))
                .unwrap_or(false)
        );
        prop_assert_eq!(
            merged.session.as_ref().and_then(|s| s.ttl_minutes),
            pick(
                high.session.as_ref().and_then(|s| s.ttl_minutes),
                low.session.as_ref().and_then(|s| s.ttl_minutes),
            )
        );
        prop_assert_eq!(merged.disable_autoinit, high.disable_autoinit.or(low.disable_autoinit));
        prop_assert_eq!(
            merged.maximum_lock_wait_seconds,
            high.maximum_lock_wait_seconds.or(low.maximum_lock_wait_seconds)
        );
        prop_assert_eq!(merged.output_format, high.output_format.or(low.output_format));
        prop_assert_eq!(
            merged.default_staff,
            high.default_staff.clone().or(low.default_staff.clone())
        );
    }

    // Merging a config into itself changes nothing.
    #[test]
    fn config_merge_idempotent(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &config);
        prop_assert_eq!(merged, config);
    }

    // Merging an empty config changes no effective value.
    #[test]
    fn config_merge_empty_is_identity(config in config_strategy()) {
        let mut merged = config.clone();
        ConfigMerger::merge_into(&mut merged, &Config::default());
        prop_assert_eq!(merged, config);
    }

    // Generated configs hold only in-range values and always validate, so a
    // merge of valid configs is valid too.
    #[test]
    fn merged_valid_configs_validate(
        low in config_strategy(),
        high in config_strategy(),
    ) {
        let mut merged = low;
        ConfigMerger::merge_into(&mut merged, &high);
        prop_assert!(ConfigValidator::validate(&merged).is_ok());
    }

    // YAML written by serde reads back identically.
    #[test]
    fn config_yaml_survives_serialization(config in config_strategy()) {
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: Config = serde_yaml::from_str(&yaml).unwrap();
        prop_assert_eq!(parsed, config);
    }
}
