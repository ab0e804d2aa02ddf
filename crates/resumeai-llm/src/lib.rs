//! ResumeAI LLM Integration
//!
//! Thin client layer over generative-language services:
//! - `LLMClient`: the request-in, text-out contract used by the server
//! - `GeminiProvider`: Google Gemini `generateContent` REST client
//! - `MockProvider`: canned responses and failures for tests and local runs
//!
//! A call is a single round trip. Retries and backoff are deliberately absent;
//! callers decide what a failure means for them.

// Re-export core types
pub use client::{LLMClient, LLMRequest, LLMResponse};
pub use error::{LLMError, Result};

// Re-export providers
pub use provider::{GeminiProvider, MockProvider};

pub mod client;
pub mod error;
pub mod provider;
