//! Configuration management for the MCP server.
//!
//! Configuration is loaded once at startup from a local `.env` file and
//! environment variables prefixed with [`ENV_PREFIX`], then passed explicitly
//! to the components that need it.
//!
//! Loading runs before logging is set up, so problems found while loading
//! are returned as warnings for the caller to log once a subscriber exists.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::Level;

use super::transport::TransportConfig;

/// Prefix shared by every environment variable this server reads.
pub const ENV_PREFIX: &str = "MBXAI_MCP_WEATHER_EXAMPLE_";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Tool invocation settings.
    pub tools: ToolsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    ///
    /// Numeric levels (10, 20, 30, 40, 50) are accepted as well.
    pub level: String,
}

/// Tool invocation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsConfig {
    /// Per-invocation timeout in seconds. Zero disables the timeout.
    pub timeout_secs: u64,
}

impl LoggingConfig {
    /// Resolve the configured level, falling back to `INFO`.
    pub fn level(&self) -> Level {
        parse_level(&self.level).unwrap_or(Level::INFO)
    }
}

fn parse_level(raw: &str) -> Option<Level> {
    match raw.trim().to_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" | "10" => Some(Level::DEBUG),
        "info" | "20" => Some(Level::INFO),
        "warn" | "warning" | "30" => Some(Level::WARN),
        "error" | "critical" | "40" | "50" => Some(Level::ERROR),
        _ => None,
    }
}

impl ToolsConfig {
    /// The invocation timeout, if one is configured.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "MBXAI Mcp Weather Example".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            tools: ToolsConfig { timeout_secs: 30 },
        }
    }
}

impl Config {
    /// Load configuration from `.env` and the process environment.
    ///
    /// Variables are expected to be prefixed with `MBXAI_MCP_WEATHER_EXAMPLE_`,
    /// for example `MBXAI_MCP_WEATHER_EXAMPLE_LOG_LEVEL`. Returns the
    /// configuration and any warnings about ignored values.
    pub fn from_env() -> (Self, Vec<String>) {
        dotenvy::dotenv().ok();
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable lookup.
    ///
    /// `lookup` receives full variable names, prefix included.
    pub fn from_vars<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        if let Some(name) = prefixed(&lookup, "NAME") {
            config.server.name = name;
        }

        if let Some(version) = prefixed(&lookup, "VERSION") {
            config.server.version = version;
        }

        if let Some(level) = prefixed(&lookup, "LOG_LEVEL") {
            if parse_level(&level).is_none() {
                warnings.push(format!(
                    "Unknown {}LOG_LEVEL value '{}', using info",
                    ENV_PREFIX, level
                ));
            }
            config.logging.level = level;
        }

        if let Some(raw) = prefixed(&lookup, "TOOL_TIMEOUT_SECS") {
            match raw.trim().parse() {
                Ok(secs) => config.tools.timeout_secs = secs,
                Err(_) => warnings.push(format!(
                    "Ignoring invalid {}TOOL_TIMEOUT_SECS value '{}', using {}s",
                    ENV_PREFIX, raw, config.tools.timeout_secs
                )),
            }
        }

        config.transport = TransportConfig::from_vars(&lookup, &mut warnings);

        (config, warnings)
    }
}

/// Read `<ENV_PREFIX><key>`, treating empty values as unset.
pub(crate) fn prefixed<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(&format!("{}{}", ENV_PREFIX, key)).filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn from_pairs(pairs: &[(&str, &str)]) -> (Config, Vec<String>) {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let (config, warnings) = from_pairs(&[]);
        assert_eq!(config.server.name, "MBXAI Mcp Weather Example");
        assert_eq!(config.server.version, env!("CARGO_PKG_VERSION"));
        assert_eq!(config.logging.level(), Level::INFO);
        assert_eq!(config.tools.timeout(), Some(Duration::from_secs(30)));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_overrides() {
        let (config, warnings) = from_pairs(&[
            ("MBXAI_MCP_WEATHER_EXAMPLE_NAME", "Forecasts"),
            ("MBXAI_MCP_WEATHER_EXAMPLE_VERSION", "9.9.9"),
            ("MBXAI_MCP_WEATHER_EXAMPLE_LOG_LEVEL", "debug"),
            ("MBXAI_MCP_WEATHER_EXAMPLE_TOOL_TIMEOUT_SECS", "0"),
        ]);
        assert_eq!(config.server.name, "Forecasts");
        assert_eq!(config.server.version, "9.9.9");
        assert_eq!(config.logging.level(), Level::DEBUG);
        assert_eq!(config.tools.timeout(), None);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_unprefixed_vars_ignored() {
        let (config, _) = from_pairs(&[("NAME", "nope"), ("MCP_WEATHER_LOG_LEVEL", "trace")]);
        assert_eq!(config.server.name, "MBXAI Mcp Weather Example");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_timeout_keeps_default_and_warns() {
        let (config, warnings) =
            from_pairs(&[("MBXAI_MCP_WEATHER_EXAMPLE_TOOL_TIMEOUT_SECS", "soon")]);
        assert_eq!(config.tools.timeout_secs, 30);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("TOOL_TIMEOUT_SECS"));
    }

    #[test]
    fn test_unknown_log_level_warns() {
        let (config, warnings) = from_pairs(&[("MBXAI_MCP_WEATHER_EXAMPLE_LOG_LEVEL", "verbose")]);
        assert_eq!(config.logging.level(), Level::INFO);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("verbose"));
    }

    #[test]
    fn test_numeric_log_levels() {
        let level = |raw: &str| LoggingConfig { level: raw.to_string() }.level();
        assert_eq!(level("10"), Level::DEBUG);
        assert_eq!(level("20"), Level::INFO);
        assert_eq!(level("WARNING"), Level::WARN);
        assert_eq!(level("50"), Level::ERROR);
        assert_eq!(level("verbose"), Level::INFO);
    }

    #[test]
    fn test_name_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MBXAI_MCP_WEATHER_EXAMPLE_NAME", "env-weather");
        }
        let (config, _) = Config::from_env();
        assert_eq!(config.server.name, "env-weather");
        unsafe {
            std::env::remove_var("MBXAI_MCP_WEATHER_EXAMPLE_NAME");
        }
    }
}
