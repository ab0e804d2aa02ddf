//! ResumeAI Core
//!
//! Everything between a validated request and the remote generation call:
//! - catalog: static resume templates, industry profiles and few-shot examples
//! - composer: prompt text assembly from profile, overrides and custom fragments
//! - configurator: override normalization and the final generation parameters
//! - activity: in-memory, append-only log of generation events

pub mod activity;
pub mod catalog;
pub mod composer;
pub mod configurator;
pub mod types;

pub use activity::{ActivityKind, ActivityLog, ActivityRecord, ActivitySummary};
pub use catalog::{
    lookup_industry_profile, lookup_resume_template, structured_examples, ExampleInput,
    IndustryProfile, ResumeCategory, StructuredExample, TemplateRecord,
};
pub use composer::{compose, compose_insights, compose_optimization, ComposedPrompt};
pub use configurator::{
    configure, configure_optimization, GenerationConfig, GenerationSettings,
    DEFAULT_CREATIVITY, DEFAULT_MAX_TOKENS, MAX_TOKEN_OPTIONS,
};
pub use types::{
    CustomFragments, CustomInstructions, GenerationOverrides, OptimizationInput,
    RequesterProfile, Skills, CUSTOM_FRAGMENT_PREFIX,
};
