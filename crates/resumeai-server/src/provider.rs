//! LLM client initialization
//!
//! Turns the `llm` section of the server configuration into a ready client.

use crate::config::{LlmProviderConfig, ServerConfig, GEMINI_API_KEY_VAR};
use anyhow::Result;
use resumeai_llm::{GeminiProvider, LLMClient, MockProvider};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Initialize the configured LLM client
///
/// A Gemini backend without an API key is a startup error rather than a
/// per-request failure.
pub fn init_llm_client(config: &ServerConfig) -> Result<Arc<dyn LLMClient>> {
    match &config.llm {
        LlmProviderConfig::Gemini {
            api_key,
            model,
            base_url,
            timeout_secs,
        } => {
            let api_key = api_key.clone().ok_or_else(|| {
                anyhow::anyhow!(
                    "Gemini API key not configured. Set {} or RESUMEAI_LLM__API_KEY.",
                    GEMINI_API_KEY_VAR
                )
            })?;

            let mut provider =
                GeminiProvider::with_timeout(api_key, Duration::from_secs(*timeout_secs))?;
            if let Some(url) = base_url {
                provider = provider.with_base_url(url.clone());
            }

            info!(
                "✓ Gemini client configured (model: {}, timeout: {}s)",
                model, timeout_secs
            );
            Ok(Arc::new(provider))
        }
        LlmProviderConfig::Mock { response, .. } => {
            warn!("Using mock LLM provider, every generation returns canned text");
            Ok(Arc::new(MockProvider::with_response(response.clone())))
        }
    }
}
