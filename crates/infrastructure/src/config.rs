//! Application configuration
//!
//! Values are layered: built-in defaults, then an optional `config.toml`
//! (or any format the `config` crate recognises under the stem `config`),
//! then `WEATHER_MCP__*` environment variables. Nested keys use a double
//! underscore, e.g. `WEATHER_MCP__WEATHER__TIMEOUT_SECS=5`.

use std::path::Path;

use integration_weather::WeatherConfig;
use serde::{Deserialize, Serialize};

use crate::telemetry::LoggingConfig;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "WEATHER_MCP";

/// Separator between the prefix and nested keys
const ENV_SEPARATOR: &str = "__";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Upstream weather service settings
    #[serde(default)]
    pub weather: WeatherConfig,

    /// Log output settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from `./config.*` and the environment
    ///
    /// # Errors
    ///
    /// Returns an error if a present file or variable cannot be parsed.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(
            config::File::with_name("config").required(false),
            Self::environment(),
        )
    }

    /// Load configuration from an explicit file plus the environment
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or either source cannot be parsed.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, config::ConfigError> {
        Self::build(
            config::File::from(path.as_ref()).required(true),
            Self::environment(),
        )
    }

    fn environment() -> config::Environment {
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .try_parsing(true)
    }

    fn build<F>(file: F, env: config::Environment) -> Result<Self, config::ConfigError>
    where
        F: config::Source + Send + Sync + 'static,
    {
        config::Config::builder()
            .add_source(file)
            .add_source(env)
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use crate::telemetry::LogFormat;

    fn env_from(pairs: &[(&str, &str)]) -> config::Environment {
        let map = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        AppConfig::environment().source(Some(map))
    }

    fn write_toml(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        file
    }

    #[test]
    fn defaults_point_at_nws() {
        let config = AppConfig::default();
        assert_eq!(config.weather.base_url, "https://api.weather.gov");
        assert_eq!(config.weather.timeout_secs, 10);
        assert!(config.weather.user_agent.starts_with("weather-mcp/"));
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn empty_sources_yield_defaults() {
        let config = AppConfig::build(
            config::File::with_name("definitely-not-a-config-file").required(false),
            env_from(&[]),
        )
        .expect("load");

        assert_eq!(config.weather.base_url, "https://api.weather.gov");
        assert_eq!(config.weather.timeout_secs, 10);
    }

    #[test]
    fn file_values_override_defaults() {
        let file = write_toml(
            r#"
[weather]
base_url = "http://localhost:8080"
user_agent = "test-agent/0.1"

[logging]
format = "json"
"#,
        );

        let config = AppConfig::load_from(file.path()).expect("load");

        assert_eq!(config.weather.base_url, "http://localhost:8080");
        assert_eq!(config.weather.user_agent, "test-agent/0.1");
        assert_eq!(config.weather.timeout_secs, 10);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn environment_overrides_file() {
        let file = write_toml("[weather]\ntimeout_secs = 30\n");

        let config = AppConfig::build(
            config::File::from(file.path()),
            env_from(&[("WEATHER_MCP__WEATHER__TIMEOUT_SECS", "5")]),
        )
        .expect("load");

        assert_eq!(config.weather.timeout_secs, 5);
    }

    #[test]
    fn unrelated_variables_are_ignored() {
        let config = AppConfig::build(
            config::File::with_name("definitely-not-a-config-file").required(false),
            env_from(&[("OTHER__WEATHER__TIMEOUT_SECS", "99")]),
        )
        .expect("load");

        assert_eq!(config.weather.timeout_secs, 10);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        assert!(AppConfig::load_from("/nonexistent/weather-mcp.toml").is_err());
    }

    #[test]
    fn invalid_value_is_an_error() {
        let file = write_toml("[weather]\ntimeout_secs = \"soon\"\n");
        assert!(AppConfig::load_from(file.path()).is_err());
    }
}
