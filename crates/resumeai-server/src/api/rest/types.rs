//! REST API type definitions
//!
//! Request and response types for the REST API endpoints.

use crate::service::GenerationService;
use resumeai_core::{
    ActivityLog, ActivityRecord, CustomInstructions, OptimizationInput, RequesterProfile,
    StructuredExample,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::Arc;

/// Requester id recorded when a request carries none
pub const UNKNOWN_REQUESTER: &str = "unknown";

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<GenerationService>,
    pub activity: Arc<ActivityLog>,
    /// How many records the usage dashboard returns
    pub recent_activity_limit: usize,
}

impl AppState {
    pub fn new(service: Arc<GenerationService>, activity: Arc<ActivityLog>) -> Self {
        Self {
            service,
            activity,
            recent_activity_limit: 5,
        }
    }

    pub fn with_recent_activity_limit(mut self, limit: usize) -> Self {
        self.recent_activity_limit = limit;
        self
    }
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// `POST /generate-resume` body.
///
/// Unrecognized fields are kept in `extra` so the activity log sees the
/// request as it was sent.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerateResumePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_instructions: Option<CustomInstructions>,

    #[serde(flatten)]
    pub profile: RequesterProfile,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl GenerateResumePayload {
    /// First required profile field that is missing or blank
    pub fn missing_field(&self) -> Option<&'static str> {
        let profile = &self.profile;
        [
            ("full_name", profile.full_name()),
            ("email", profile.email()),
            ("industry", profile.industry()),
            ("experience_level", profile.experience_level()),
        ]
        .into_iter()
        .find(|(_, value)| value.is_none())
        .map(|(field, _)| field)
    }
}

/// `POST /generate-resume` response
#[derive(Debug, Serialize, Deserialize)]
pub struct GenerateResumeResponse {
    pub resume_content: String,
    pub status: String,
}

/// `POST /optimize-resume` body
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OptimizeResumePayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume_content: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_instructions: Option<CustomInstructions>,

    /// Few-shot examples appended to the built-in ones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub additional_examples: Vec<StructuredExample>,

    #[serde(flatten)]
    pub profile: RequesterProfile,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl OptimizeResumePayload {
    /// Client error message for a missing resume or job description
    pub fn missing_input(&self) -> Option<&'static str> {
        if is_blank(self.resume_content.as_deref()) {
            Some("Missing resume content")
        } else if is_blank(self.job_description.as_deref()) {
            Some("Missing job description")
        } else {
            None
        }
    }

    pub fn optimization_input(&self) -> OptimizationInput {
        OptimizationInput {
            existing_resume: self.resume_content.clone().unwrap_or_default(),
            job_description: self.job_description.clone().unwrap_or_default(),
            additional_examples: self.additional_examples.clone(),
        }
    }
}

/// `POST /optimize-resume` response
#[derive(Debug, Serialize, Deserialize)]
pub struct OptimizeResumeResponse {
    pub optimized_resume: String,
    pub status: String,
}

/// `GET /dashboard/usage-stats` response
#[derive(Debug, Serialize)]
pub struct UsageStatsResponse {
    pub total_resumes: usize,
    pub total_optimizations: usize,
    pub recent_activities: Vec<ActivityRecord>,
}

/// `POST /dashboard/ai-insights` body
#[derive(Debug, Default, Deserialize)]
pub struct InsightsRequest {
    #[serde(default)]
    pub user_id: Option<String>,
}

/// `POST /dashboard/ai-insights` response
#[derive(Debug, Serialize)]
pub struct InsightsResponse {
    pub user_id: Option<String>,
    pub insights: String,
}

/// `POST /resume/log-*` response
#[derive(Debug, Serialize)]
pub struct LogActivityResponse {
    pub status: String,
    pub activity: ActivityRecord,
}

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}
