//! Mock LLM provider for testing

use crate::client::{LLMClient, LLMRequest, LLMResponse};
use crate::error::{LLMError, Result};
use async_trait::async_trait;
use std::sync::Mutex;

/// Mock LLM provider for testing
///
/// Returns a fixed response (or a fixed failure) and remembers every request
/// it was given so tests can inspect the prompt and sampling parameters.
pub struct MockProvider {
    name: String,
    default_response: String,
    failure: Option<String>,
    requests: Mutex<Vec<LLMRequest>>,
}

impl MockProvider {
    /// Create a new mock provider
    pub fn new() -> Self {
        Self::with_response("Mock LLM response".to_string())
    }

    /// Create with custom default response
    pub fn with_response(response: String) -> Self {
        Self {
            name: "mock".to_string(),
            default_response: response,
            failure: None,
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Create a provider whose every call fails with `message`
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            failure: Some(message.into()),
            ..Self::new()
        }
    }

    /// Requests received so far, oldest first
    pub fn requests(&self) -> Vec<LLMRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }

    /// Most recent request, if any
    pub fn last_request(&self) -> Option<LLMRequest> {
        self.requests().pop()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LLMClient for MockProvider {
    async fn call(&self, request: LLMRequest) -> Result<LLMResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        if let Some(message) = &self.failure {
            return Err(LLMError::ApiCallFailed(message.clone()));
        }

        Ok(LLMResponse::new(self.default_response.clone(), request.model)
            .with_tokens(10)
            .with_finish_reason("stop"))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
