//! LLM provider implementations

mod gemini;
mod mock;

pub use gemini::GeminiProvider;
pub use mock::MockProvider;
