//! Google Gemini provider implementation

use crate::client::{LLMClient, LLMRequest, LLMResponse};
use crate::error::{LLMError, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::debug;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google Gemini provider
pub struct GeminiProvider {
    api_key: String,
    base_url: String,
    client: Client,
}

impl GeminiProvider {
    /// Create a new Gemini provider
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            client: Client::new(),
        }
    }

    /// Create a provider whose HTTP client gives up after `timeout`
    pub fn with_timeout(api_key: String, timeout: Duration) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(LLMError::InvalidConfiguration(
                "Gemini API key is empty".to_string(),
            ));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            client,
        })
    }

    /// Override the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Build the `generateContent` request body: one user turn carrying the
/// whole prompt, plus `generationConfig` when any sampling option is set.
pub(crate) fn build_request_body(request: &LLMRequest) -> Value {
    let mut body = json!({
        "contents": [{
            "role": "user",
            "parts": [{"text": request.prompt}]
        }],
    });

    let mut generation_config = serde_json::Map::new();
    if let Some(max_tokens) = request.max_tokens {
        generation_config.insert("maxOutputTokens".to_string(), json!(max_tokens));
    }
    if let Some(temperature) = request.temperature {
        generation_config.insert("temperature".to_string(), json!(temperature));
    }
    if !generation_config.is_empty() {
        body["generationConfig"] = Value::Object(generation_config);
    }

    body
}

/// Extract the generated text from a `generateContent` response
pub(crate) fn parse_response(resp_json: &Value, model: &str) -> Result<LLMResponse> {
    let candidate = &resp_json["candidates"][0];
    if candidate.is_null() {
        let reason = resp_json["promptFeedback"]["blockReason"]
            .as_str()
            .unwrap_or("no candidates returned");
        return Err(LLMError::InvalidResponse(format!(
            "Gemini returned no content: {}",
            reason
        )));
    }

    let content = candidate["content"]["parts"]
        .as_array()
        .map(|parts| {
            parts
                .iter()
                .filter_map(|part| part["text"].as_str())
                .collect::<Vec<_>>()
                .join("")
        })
        .filter(|text| !text.is_empty())
        .ok_or_else(|| LLMError::InvalidResponse("No content in response".to_string()))?;

    let finish_reason = candidate["finishReason"].as_str().unwrap_or("STOP");

    let tokens_used = resp_json["usageMetadata"]["totalTokenCount"]
        .as_u64()
        .unwrap_or(0) as u32;

    Ok(LLMResponse::new(content, model)
        .with_tokens(tokens_used)
        .with_finish_reason(finish_reason))
}

#[async_trait]
impl LLMClient for GeminiProvider {
    async fn call(&self, request: LLMRequest) -> Result<LLMResponse> {
        let body = build_request_body(&request);

        let url = format!("{}/models/{}:generateContent", self.base_url, request.model);

        debug!(
            model = %request.model,
            prompt_chars = request.prompt.len(),
            "Sending Gemini generateContent request"
        );

        let resp = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| LLMError::ApiCallFailed(format!("Gemini API call failed: {}", e)))?;

        let status = resp.status();
        let resp_text = resp
            .text()
            .await
            .map_err(|e| LLMError::ApiCallFailed(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(LLMError::ApiCallFailed(format!(
                "Gemini API error ({}): {}",
                status, resp_text
            )));
        }

        let resp_json: Value = serde_json::from_str(&resp_text)?;

        parse_response(&resp_json, &request.model)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}
