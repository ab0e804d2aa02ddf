//! Generation settings
//!
//! Normalizes caller overrides into sampling parameters and pairs them with
//! the composed prompt. Bad values are coerced to defaults, never rejected.

use crate::catalog::ResumeCategory;
use crate::composer::{compose, compose_optimization};
use crate::types::{CustomFragments, GenerationOverrides, OptimizationInput, RequesterProfile};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

/// Sampling temperature used when `creativity` is absent or unusable
pub const DEFAULT_CREATIVITY: f64 = 0.7;

/// Output cap used when `maxTokens` is absent or not an allowed option
pub const DEFAULT_MAX_TOKENS: u32 = 1000;

/// The only accepted output caps
pub const MAX_TOKEN_OPTIONS: [u32; 4] = [500, 1000, 1500, 2000];

const DEFAULT_TONE: &str = "professional";

/// Override options after validation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSettings {
    pub prompt_context: ResumeCategory,
    pub tone: String,
    pub custom_prompt: String,
    pub creativity: f64,
    pub max_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            prompt_context: ResumeCategory::Professional,
            tone: DEFAULT_TONE.to_string(),
            custom_prompt: String::new(),
            creativity: DEFAULT_CREATIVITY,
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}

impl GenerationSettings {
    /// Validate an override block; `None` yields the defaults
    pub fn from_overrides(overrides: Option<&GenerationOverrides>) -> Self {
        let Some(overrides) = overrides else {
            return Self::default();
        };

        Self {
            prompt_context: overrides
                .prompt_context
                .as_deref()
                .and_then(ResumeCategory::from_prompt_context)
                .unwrap_or_default(),
            tone: overrides.tone().unwrap_or(DEFAULT_TONE).to_string(),
            custom_prompt: overrides.custom_prompt().unwrap_or_default().to_string(),
            creativity: parse_creativity(overrides.creativity.as_ref()),
            max_tokens: parse_max_tokens(overrides.max_tokens.as_ref()),
        }
    }
}

/// Everything the remote call needs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationConfig {
    pub category: ResumeCategory,
    pub prompt_text: String,
    pub max_output_tokens: u32,
    pub temperature: f64,
    pub settings: GenerationSettings,
}

/// Build the generation parameters for a resume
pub fn configure(
    profile: &RequesterProfile,
    overrides: Option<&GenerationOverrides>,
    fragments: &CustomFragments,
) -> GenerationConfig {
    let settings = GenerationSettings::from_overrides(overrides);
    let defaults = GenerationOverrides::default();
    let composed = compose(profile, overrides.unwrap_or(&defaults), fragments);

    debug!(
        category = %composed.category,
        temperature = settings.creativity,
        max_tokens = settings.max_tokens,
        "Configured resume generation"
    );

    GenerationConfig {
        category: composed.category,
        prompt_text: composed.text,
        max_output_tokens: settings.max_tokens,
        temperature: settings.creativity,
        settings,
    }
}

/// Build the generation parameters for a resume optimization
pub fn configure_optimization(
    profile: &RequesterProfile,
    overrides: Option<&GenerationOverrides>,
    fragments: &CustomFragments,
    input: &OptimizationInput,
) -> GenerationConfig {
    let settings = GenerationSettings::from_overrides(overrides);
    let prompt_text = compose_optimization(profile, &settings, fragments, input);

    GenerationConfig {
        category: settings.prompt_context,
        prompt_text,
        max_output_tokens: settings.max_tokens,
        temperature: settings.creativity,
        settings,
    }
}

/// Numbers, numeric strings and booleans (true = 1, false = 0) are clamped
/// into [0, 1]; anything else, or a non-finite value, is 0.7
fn parse_creativity(value: Option<&Value>) -> f64 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    };

    match parsed {
        Some(v) if v.is_finite() => v.clamp(0.0, 1.0),
        _ => DEFAULT_CREATIVITY,
    }
}

/// Integers (or integral floats, or integer strings) in the allowed set pass;
/// anything else is 1000
fn parse_max_tokens(value: Option<&Value>) -> u32 {
    let parsed = match value {
        Some(Value::Number(n)) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    };

    parsed
        .and_then(|v| u32::try_from(v).ok())
        .filter(|v| MAX_TOKEN_OPTIONS.contains(v))
        .unwrap_or(DEFAULT_MAX_TOKENS)
}
