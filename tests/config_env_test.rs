//! Loading configuration from the process environment.

use homescreen::config::{
    HomepageConfig, ENV_PRIVATE, ENV_TELEMETRY, ENV_TELEMETRY_CAPACITY, ENV_ZERO_SEARCH,
};
use homescreen::error::{ConfigError, ErrorCategory, HomepageError};
use serial_test::serial;

fn clear_env() {
    for var in [ENV_PRIVATE, ENV_ZERO_SEARCH, ENV_TELEMETRY, ENV_TELEMETRY_CAPACITY] {
        std::env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_from_env_defaults_when_unset() {
    clear_env();
    assert_eq!(HomepageConfig::from_env().unwrap(), HomepageConfig::default());
}

#[test]
#[serial]
fn test_from_env_reads_flags() {
    clear_env();
    std::env::set_var(ENV_PRIVATE, "yes");
    std::env::set_var(ENV_ZERO_SEARCH, "1");
    std::env::set_var(ENV_TELEMETRY, "off");

    let config = HomepageConfig::from_env().unwrap();
    clear_env();

    assert!(config.is_private);
    assert!(config.is_zero_search);
    assert!(!config.telemetry_enabled);
}

#[test]
#[serial]
fn test_from_env_invalid_value_is_configuration_error() {
    clear_env();
    std::env::set_var(ENV_TELEMETRY_CAPACITY, "lots");

    let err: HomepageError = HomepageConfig::from_env().unwrap_err().into();
    clear_env();

    assert_eq!(err.category(), ErrorCategory::Configuration);
    assert!(matches!(
        err,
        HomepageError::Config(ConfigError::InvalidNumber { .. })
    ));
}
