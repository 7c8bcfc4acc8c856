//! Transport configuration types.

use serde::{Deserialize, Serialize};

use crate::core::config::{ENV_PREFIX, prefixed};

/// Transport configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// HTTP transport: REST tool endpoints plus JSON-RPC over POST.
    #[cfg(feature = "http")]
    Http(HttpConfig),

    /// Standard input/output transport (standard MCP mode).
    #[cfg(feature = "stdio")]
    Stdio,
}

/// HTTP transport configuration.
#[cfg(feature = "http")]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path for JSON-RPC endpoint.
    #[serde(default = "default_rpc_path")]
    pub rpc_path: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(feature = "http")]
const DEFAULT_HTTP_PORT: u16 = 5000;

#[cfg(feature = "http")]
fn default_host() -> String {
    "0.0.0.0".to_string()
}

#[cfg(feature = "http")]
fn default_rpc_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "http")]
fn default_cors() -> bool {
    true
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "http")]
        {
            return Self::Http(HttpConfig::default());
        }

        #[cfg(all(not(feature = "http"), feature = "stdio"))]
        {
            return Self::Stdio;
        }

        #[cfg(not(any(feature = "http", feature = "stdio")))]
        {
            compile_error!("At least one transport feature must be enabled: http or stdio");
        }
    }
}

#[cfg(feature = "http")]
impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_HTTP_PORT,
            host: default_host(),
            rpc_path: default_rpc_path(),
            enable_cors: default_cors(),
        }
    }
}

#[cfg(feature = "http")]
impl HttpConfig {
    fn from_vars<F>(lookup: &F, warnings: &mut Vec<String>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match prefixed(lookup, "HTTP_PORT") {
            Some(raw) => match raw.trim().parse::<u16>() {
                Ok(port) if port > 0 => port,
                _ => {
                    warnings.push(format!(
                        "Ignoring invalid {}HTTP_PORT value '{}', using {}",
                        ENV_PREFIX, raw, DEFAULT_HTTP_PORT
                    ));
                    DEFAULT_HTTP_PORT
                }
            },
            None => DEFAULT_HTTP_PORT,
        };

        Self {
            port,
            host: prefixed(lookup, "HTTP_HOST").unwrap_or_else(default_host),
            rpc_path: prefixed(lookup, "HTTP_PATH").unwrap_or_else(default_rpc_path),
            enable_cors: prefixed(lookup, "HTTP_CORS")
                .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0"))
                .unwrap_or_else(default_cors),
        }
    }
}

impl TransportConfig {
    /// Load transport config from an arbitrary variable lookup.
    ///
    /// Values that cannot be used are replaced by defaults, with a message
    /// pushed onto `warnings`.
    pub fn from_vars<F>(lookup: &F, warnings: &mut Vec<String>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let Some(raw) = prefixed(lookup, "TRANSPORT") else {
            return Self::default_from_vars(lookup, warnings);
        };

        match raw.trim().to_lowercase().as_str() {
            #[cfg(feature = "stdio")]
            "stdio" => Self::Stdio,
            #[cfg(feature = "http")]
            "http" => Self::Http(HttpConfig::from_vars(lookup, warnings)),
            _ => {
                warnings.push(format!(
                    "Unknown {}TRANSPORT value '{}', using {}",
                    ENV_PREFIX,
                    raw,
                    Self::default().kind()
                ));
                Self::default_from_vars(lookup, warnings)
            }
        }
    }

    #[allow(unused_variables)]
    fn default_from_vars<F>(lookup: &F, warnings: &mut Vec<String>) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        match Self::default() {
            #[cfg(feature = "http")]
            Self::Http(_) => Self::Http(HttpConfig::from_vars(lookup, warnings)),
            #[allow(unreachable_patterns)]
            other => other,
        }
    }

    /// Short transport name, as accepted by `TRANSPORT`.
    pub fn kind(&self) -> &'static str {
        match self {
            #[cfg(feature = "http")]
            Self::Http(_) => "http",
            #[cfg(feature = "stdio")]
            Self::Stdio => "stdio",
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "http")]
            Self::Http(cfg) => format!("HTTP on {}:{}", cfg.host, cfg.port),
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> (TransportConfig, Vec<String>) {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        let mut warnings = Vec::new();
        let config = TransportConfig::from_vars(&|key: &str| vars.get(key).cloned(), &mut warnings);
        (config, warnings)
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_is_default() {
        let (config, warnings) = from_pairs(&[]);
        assert!(warnings.is_empty());
        match config {
            TransportConfig::Http(cfg) => {
                assert_eq!(cfg.host, "0.0.0.0");
                assert_eq!(cfg.port, 5000);
                assert_eq!(cfg.rpc_path, "/mcp");
                assert!(cfg.enable_cors);
            }
            #[allow(unreachable_patterns)]
            other => panic!("Expected HTTP transport, got {:?}", other),
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_http_overrides() {
        let (config, warnings) = from_pairs(&[
            ("MBXAI_MCP_WEATHER_EXAMPLE_TRANSPORT", "http"),
            ("MBXAI_MCP_WEATHER_EXAMPLE_HTTP_HOST", "127.0.0.1"),
            ("MBXAI_MCP_WEATHER_EXAMPLE_HTTP_PORT", "8081"),
            ("MBXAI_MCP_WEATHER_EXAMPLE_HTTP_CORS", "false"),
        ]);
        assert!(warnings.is_empty());
        assert_eq!(config.description(), "HTTP on 127.0.0.1:8081");
        match config {
            TransportConfig::Http(cfg) => assert!(!cfg.enable_cors),
            #[allow(unreachable_patterns)]
            other => panic!("Expected HTTP transport, got {:?}", other),
        }
    }

    #[cfg(feature = "http")]
    #[test]
    fn test_invalid_port_falls_back_with_warning() {
        for raw in ["eighty", "70000", "0"] {
            let (config, warnings) = from_pairs(&[("MBXAI_MCP_WEATHER_EXAMPLE_HTTP_PORT", raw)]);
            match config {
                TransportConfig::Http(cfg) => assert_eq!(cfg.port, 5000),
                #[allow(unreachable_patterns)]
                other => panic!("Expected HTTP transport, got {:?}", other),
            }
            assert_eq!(warnings.len(), 1, "no warning for port {:?}", raw);
            assert!(warnings[0].contains("HTTP_PORT"));
            assert!(warnings[0].contains(raw));
        }
    }

    #[test]
    fn test_unknown_transport_uses_default_with_warning() {
        let (config, warnings) = from_pairs(&[("MBXAI_MCP_WEATHER_EXAMPLE_TRANSPORT", "carrier-pigeon")]);
        assert_eq!(config.kind(), TransportConfig::default().kind());
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("carrier-pigeon"));
        assert!(warnings[0].contains("TRANSPORT"));
    }

    #[cfg(feature = "stdio")]
    #[test]
    fn test_stdio_selected() {
        let (config, warnings) = from_pairs(&[("MBXAI_MCP_WEATHER_EXAMPLE_TRANSPORT", "STDIO")]);
        assert_eq!(config.kind(), "stdio");
        assert!(warnings.is_empty());
    }
}
