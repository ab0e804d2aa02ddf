//! Generation service
//!
//! Runs one remote generation per call. Failures never escape as errors: a
//! failed or too-short generation comes back as an error-description string
//! so the HTTP layer can still answer with a degraded success.

use resumeai_core::{
    compose_insights, configure, configure_optimization, ActivityRecord, CustomFragments,
    CustomInstructions, GenerationConfig, OptimizationInput, RequesterProfile,
};
use resumeai_llm::{LLMClient, LLMError, LLMRequest};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, info};

/// Generated text shorter than this many characters is rejected
pub const DEFAULT_MIN_OUTPUT_CHARS: usize = 50;

/// Why a generation produced no usable text
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error(transparent)]
    Llm(#[from] LLMError),

    /// Output shorter than the minimum; carries the subject ("Generated resume")
    #[error("{0} content is too short")]
    TooShort(&'static str),
}

/// Builds prompts, calls the model and validates the output
pub struct GenerationService {
    client: Arc<dyn LLMClient>,
    model: String,
    min_output_chars: usize,
}

impl GenerationService {
    pub fn new(client: Arc<dyn LLMClient>, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
            min_output_chars: DEFAULT_MIN_OUTPUT_CHARS,
        }
    }

    pub fn with_min_output_chars(mut self, min_output_chars: usize) -> Self {
        self.min_output_chars = min_output_chars;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Generate a resume, or an `Error generating resume: ...` string
    pub async fn generate_resume(
        &self,
        profile: &RequesterProfile,
        instructions: Option<&CustomInstructions>,
    ) -> String {
        let empty = CustomFragments::new();
        let fragments = instructions.map_or(&empty, |i| &i.fragments);
        let config = configure(profile, instructions.map(|i| &i.overrides), fragments);

        info!(
            category = %config.category,
            max_tokens = config.max_output_tokens,
            temperature = config.temperature,
            "Generating resume"
        );

        match self.generate_checked(&config, "Generated resume").await {
            Ok(text) => text,
            Err(e) => {
                error!("Resume generation error: {}", e);
                format!("Error generating resume: {}", e)
            }
        }
    }

    /// Optimize a resume, or an `Error optimizing resume: ...` string
    pub async fn optimize_resume(
        &self,
        profile: &RequesterProfile,
        instructions: Option<&CustomInstructions>,
        input: &OptimizationInput,
    ) -> String {
        let empty = CustomFragments::new();
        let fragments = instructions.map_or(&empty, |i| &i.fragments);
        let config =
            configure_optimization(profile, instructions.map(|i| &i.overrides), fragments, input);

        info!(
            context = %config.category,
            max_tokens = config.max_output_tokens,
            temperature = config.temperature,
            "Optimizing resume"
        );

        match self.generate_checked(&config, "Optimized resume").await {
            Ok(text) => text,
            Err(e) => {
                error!("Resume optimization error: {}", e);
                format!("Error optimizing resume: {}", e)
            }
        }
    }

    /// Career insights over one requester's activity history
    pub async fn generate_insights(&self, records: &[ActivityRecord]) -> String {
        let request = LLMRequest::new(compose_insights(records), self.model.clone());
        match self.client.call(request).await {
            Ok(response) => response.content,
            Err(e) => {
                error!("Insights generation error: {}", e);
                format!("Error generating insights: {}", e)
            }
        }
    }

    async fn generate_checked(
        &self,
        config: &GenerationConfig,
        subject: &'static str,
    ) -> Result<String, GenerationError> {
        let request = LLMRequest::new(config.prompt_text.clone(), self.model.clone())
            .with_max_tokens(config.max_output_tokens)
            .with_temperature(config.temperature as f32);

        let response = self.client.call(request).await?;
        if response.content.trim().is_empty()
            || response.content.chars().count() < self.min_output_chars
        {
            return Err(GenerationError::TooShort(subject));
        }
        Ok(response.content)
    }
}
