//! Tests for environment lookup and tier classification.

use super::*;
use serial_test::serial;

mod tier_tests {
    use super::*;

    #[test]
    fn test_production_and_staging_are_not_local() {
        for name in ["production", "staging"] {
            let env = StaticEnvironment::new().with_var(TIER_VARIABLE, name);
            assert!(!is_local(&env), "{} should not be local", name);
            assert_eq!(Tier::detect(&env), Tier::NonLocal);
        }
    }

    #[test]
    fn test_other_tiers_are_local() {
        for name in ["dev", "test", "qa", "", "Production", "STAGING", "production "] {
            let env = StaticEnvironment::new().with_var(TIER_VARIABLE, name);
            assert!(is_local(&env), "'{}' should be local", name);
        }
    }

    #[test]
    fn test_unset_tier_defaults_to_local() {
        let env = StaticEnvironment::new();

        assert!(is_local(&env));
        assert_eq!(Tier::detect(&env), Tier::from_name(DEFAULT_TIER));
    }

    #[test]
    fn test_classification_is_repeatable() {
        let env = StaticEnvironment::new().with_var(TIER_VARIABLE, "staging");

        let first = Tier::detect(&env);
        let second = Tier::detect(&env);
        assert_eq!(first, second);
    }

    #[test]
    fn test_tier_display() {
        assert_eq!(Tier::Local.to_string(), "local");
        assert_eq!(Tier::NonLocal.to_string(), "non-local");
    }
}

mod source_tests {
    use super::*;

    #[test]
    fn test_static_environment_from_iterator() {
        let env: StaticEnvironment = [("A", "1"), ("B", "2")].into_iter().collect();

        assert_eq!(env.var("A").as_deref(), Some("1"));
        assert_eq!(env.var("B").as_deref(), Some("2"));
        assert_eq!(env.var("C"), None);
    }

    #[test]
    fn test_static_environment_later_value_wins() {
        let env = StaticEnvironment::new()
            .with_var("ENV", "dev")
            .with_var("ENV", "production");

        assert_eq!(env.var("ENV").as_deref(), Some("production"));
    }

    #[test]
    #[serial]
    fn test_process_environment_reads_real_variables() {
        std::env::set_var("SQS_BOOTSTRAP_TEST_VARIABLE", "present");

        assert_eq!(
            ProcessEnvironment.var("SQS_BOOTSTRAP_TEST_VARIABLE").as_deref(),
            Some("present")
        );

        std::env::remove_var("SQS_BOOTSTRAP_TEST_VARIABLE");
        assert_eq!(ProcessEnvironment.var("SQS_BOOTSTRAP_TEST_VARIABLE"), None);
    }
}
