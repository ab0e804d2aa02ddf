//! Server configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Environment variable checked when no Gemini key is configured
pub const GEMINI_API_KEY_VAR: &str = "GEMINI_API_KEY";

fn default_model() -> String {
    "gemini-pro".to_string()
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_mock_response() -> String {
    "Professional Summary:\nResults-driven professional with a record of measurable impact \
     across cross-functional teams."
        .to_string()
}

/// Text-generation backend
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum LlmProviderConfig {
    /// Google Gemini `generateContent` API
    Gemini {
        /// API key (falls back to `GEMINI_API_KEY`)
        #[serde(default, skip_serializing)]
        api_key: Option<String>,
        /// Model identifier
        #[serde(default = "default_model")]
        model: String,
        /// Override for the API base URL
        #[serde(default)]
        base_url: Option<String>,
        /// Per-request timeout in seconds
        #[serde(default = "default_timeout_secs")]
        timeout_secs: u64,
    },
    /// Canned responses, for local development without a key
    Mock {
        #[serde(default = "default_mock_response")]
        response: String,
        #[serde(default = "default_model")]
        model: String,
    },
}

impl Default for LlmProviderConfig {
    fn default() -> Self {
        LlmProviderConfig::Gemini {
            api_key: None,
            model: default_model(),
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl fmt::Debug for LlmProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LlmProviderConfig::Gemini {
                api_key,
                model,
                base_url,
                timeout_secs,
            } => f
                .debug_struct("Gemini")
                .field("api_key", &api_key.as_ref().map(|_| "<redacted>"))
                .field("model", model)
                .field("base_url", base_url)
                .field("timeout_secs", timeout_secs)
                .finish(),
            LlmProviderConfig::Mock { response, model } => f
                .debug_struct("Mock")
                .field("response", response)
                .field("model", model)
                .finish(),
        }
    }
}

impl LlmProviderConfig {
    pub fn model(&self) -> &str {
        match self {
            LlmProviderConfig::Gemini { model, .. } | LlmProviderConfig::Mock { model, .. } => model,
        }
    }

    pub fn provider_name(&self) -> &'static str {
        match self {
            LlmProviderConfig::Gemini { .. } => "gemini",
            LlmProviderConfig::Mock { .. } => "mock",
        }
    }

    /// Fill a missing Gemini key from `fallback`
    pub fn with_api_key_fallback(mut self, fallback: Option<String>) -> Self {
        if let LlmProviderConfig::Gemini { api_key, .. } = &mut self {
            if api_key.as_deref().map_or(true, str::is_empty) {
                *api_key = fallback.filter(|key| !key.is_empty());
            }
        }
        self
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Server host
    pub host: String,

    /// Server port (HTTP)
    pub port: u16,

    /// Log level for the workspace crates
    pub log_level: String,

    /// Text-generation backend
    pub llm: LlmProviderConfig,

    /// Number of records returned by the usage dashboard
    pub recent_activity_limit: usize,

    /// Generated text shorter than this (in characters) counts as a failure
    pub min_output_chars: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            log_level: "info".to_string(),
            llm: LlmProviderConfig::default(),
            recent_activity_limit: 5,
            min_output_chars: 50,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables and config file
    pub fn load() -> anyhow::Result<Self> {
        // Load .env file if exists
        dotenvy::dotenv().ok();
        Self::load_from(Path::new("config/server"))
    }

    /// Load configuration from `path` (extension optional) and `RESUMEAI_*`
    /// environment variables, e.g. `RESUMEAI_PORT` or `RESUMEAI_LLM__TYPE`.
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        // A missing file is fine; a file that exists but does not parse is not.
        let config: Self = config::Config::builder()
            .add_source(config::File::from(path).required(false))
            .add_source(
                config::Environment::with_prefix("RESUMEAI")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?
            .try_deserialize()
            .map_err(|e| anyhow::anyhow!("Failed to deserialize config: {}", e))?;

        Ok(config.with_env_fallbacks())
    }

    fn with_env_fallbacks(mut self) -> Self {
        self.llm = self
            .llm
            .with_api_key_fallback(std::env::var(GEMINI_API_KEY_VAR).ok());
        self
    }

    /// `host:port` to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Default `EnvFilter` directive derived from `log_level`
    pub fn log_filter(&self) -> String {
        format!(
            "resumeai_server={lvl},resumeai_core={lvl},resumeai_llm={lvl},tower_http=debug",
            lvl = self.log_level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default() {
        let config = ServerConfig::default();

        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 5000);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.recent_activity_limit, 5);
        assert_eq!(config.min_output_chars, 50);
        assert_eq!(config.llm.provider_name(), "gemini");
        assert_eq!(config.llm.model(), "gemini-pro");
    }

    #[test]
    fn test_api_key_fallback_fills_missing_key() {
        let llm = LlmProviderConfig::default().with_api_key_fallback(Some("env-key".to_string()));
        match llm {
            LlmProviderConfig::Gemini { api_key, .. } => {
                assert_eq!(api_key.as_deref(), Some("env-key"))
            }
            other => panic!("Expected Gemini provider, got {:?}", other),
        }
    }

    #[test]
    fn test_api_key_fallback_keeps_configured_key() {
        let llm = LlmProviderConfig::Gemini {
            api_key: Some("file-key".to_string()),
            model: default_model(),
            base_url: None,
            timeout_secs: 10,
        }
        .with_api_key_fallback(Some("env-key".to_string()));

        if let LlmProviderConfig::Gemini { api_key, .. } = llm {
            assert_eq!(api_key.as_deref(), Some("file-key"));
        } else {
            panic!("Expected Gemini provider");
        }
    }

    #[test]
    fn test_api_key_fallback_ignores_empty_env() {
        let llm = LlmProviderConfig::default().with_api_key_fallback(Some(String::new()));
        if let LlmProviderConfig::Gemini { api_key, .. } = llm {
            assert!(api_key.is_none());
        } else {
            panic!("Expected Gemini provider");
        }
    }

    #[test]
    fn test_mock_provider_config_from_json() {
        let llm: LlmProviderConfig =
            serde_json::from_str(r#"{"type": "mock", "response": "canned"}"#).unwrap();
        assert_eq!(llm.provider_name(), "mock");
        assert_eq!(llm.model(), "gemini-pro");
        assert!(matches!(llm, LlmProviderConfig::Mock { ref response, .. } if response == "canned"));
    }

    #[test]
    fn test_api_key_never_serialized() {
        let llm = LlmProviderConfig::Gemini {
            api_key: Some("secret".to_string()),
            model: default_model(),
            base_url: None,
            timeout_secs: 60,
        };
        let json = serde_json::to_string(&llm).unwrap();
        assert!(!json.contains("secret"));
    }

    #[test]
    fn test_api_key_redacted_in_debug_output() {
        let config = ServerConfig {
            llm: LlmProviderConfig::Gemini {
                api_key: Some("AIzaSECRET123".to_string()),
                model: default_model(),
                base_url: None,
                timeout_secs: 60,
            },
            ..Default::default()
        };

        let printed = format!("{:?}", config);
        assert!(!printed.contains("AIzaSECRET123"));
        assert!(printed.contains("<redacted>"));
        assert!(printed.contains("gemini-pro"));
    }

    #[test]
    fn test_bind_address_and_log_filter() {
        let config = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "debug".to_string(),
            ..Default::default()
        };
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert!(config.log_filter().starts_with("resumeai_server=debug"));
    }
}
