//! Coordinator configuration.
//!
//! Initial flag values and telemetry settings, built either in code with
//! the builder methods or from `HOMESCREEN_*` environment variables.

use crate::error::ConfigError;

/// Environment variable for the initial private-browsing flag.
pub const ENV_PRIVATE: &str = "HOMESCREEN_PRIVATE";
/// Environment variable for the initial zero-search flag.
pub const ENV_ZERO_SEARCH: &str = "HOMESCREEN_ZERO_SEARCH";
/// Environment variable that turns telemetry on or off.
pub const ENV_TELEMETRY: &str = "HOMESCREEN_TELEMETRY";
/// Environment variable for the telemetry channel capacity.
pub const ENV_TELEMETRY_CAPACITY: &str = "HOMESCREEN_TELEMETRY_CAPACITY";

/// Default capacity of the telemetry broadcast channel.
pub const DEFAULT_TELEMETRY_CAPACITY: usize = 64;

/// Configuration for a [`crate::coordinator::HomepageCoordinator`].
///
/// # Example
///
/// ```ignore
/// use homescreen::config::HomepageConfig;
///
/// let config = HomepageConfig::default()
///     .with_private(true)
///     .with_telemetry_enabled(false);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomepageConfig {
    /// Start in private-browsing mode
    pub is_private: bool,
    /// Start in zero-search mode (selects the view-opened origin)
    pub is_zero_search: bool,
    /// Record view telemetry at all
    pub telemetry_enabled: bool,
    /// Capacity of a [`crate::telemetry::ChannelTelemetry`] built from this
    /// config. The coordinator itself does not read it.
    pub telemetry_channel_capacity: usize,
}

impl Default for HomepageConfig {
    fn default() -> Self {
        Self {
            is_private: false,
            is_zero_search: false,
            telemetry_enabled: true,
            telemetry_channel_capacity: DEFAULT_TELEMETRY_CAPACITY,
        }
    }
}

impl HomepageConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_private(mut self, is_private: bool) -> Self {
        self.is_private = is_private;
        self
    }

    pub fn with_zero_search(mut self, is_zero_search: bool) -> Self {
        self.is_zero_search = is_zero_search;
        self
    }

    pub fn with_telemetry_enabled(mut self, enabled: bool) -> Self {
        self.telemetry_enabled = enabled;
        self
    }

    pub fn with_telemetry_channel_capacity(mut self, capacity: usize) -> Self {
        self.telemetry_channel_capacity = capacity;
        self
    }

    /// Load configuration from `HOMESCREEN_*` environment variables.
    ///
    /// Unset variables keep their defaults. Set but unparsable variables
    /// are an error rather than silently ignored.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_PRIVATE) {
            config.is_private = parse_bool(ENV_PRIVATE, &value)?;
        }
        if let Some(value) = lookup(ENV_ZERO_SEARCH) {
            config.is_zero_search = parse_bool(ENV_ZERO_SEARCH, &value)?;
        }
        if let Some(value) = lookup(ENV_TELEMETRY) {
            config.telemetry_enabled = parse_bool(ENV_TELEMETRY, &value)?;
        }
        if let Some(value) = lookup(ENV_TELEMETRY_CAPACITY) {
            config.telemetry_channel_capacity =
                value.trim().parse().map_err(|_| ConfigError::InvalidNumber {
                    var: ENV_TELEMETRY_CAPACITY.to_string(),
                    value: value.clone(),
                })?;
        }

        Ok(config)
    }
}

fn parse_bool(var: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidBool {
            var: var.to_string(),
            value: value.to_string(),
        }),
    }
}
