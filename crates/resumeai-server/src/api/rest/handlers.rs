//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints.

use super::extractors::JsonExtractor;
use super::types::*;
use crate::error::ServerError;
use axum::{extract::State, http::Uri, Json};
use resumeai_core::ActivityKind;
use serde_json::{Map, Value};
use tracing::{info, warn};

const SUCCESS: &str = "success";

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// Resume generation endpoint
#[axum::debug_handler]
pub(super) async fn generate_resume(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<GenerateResumePayload>,
) -> Result<Json<GenerateResumeResponse>, ServerError> {
    if let Some(field) = payload.missing_field() {
        warn!("Rejected resume generation request: missing {}", field);
        return Err(ServerError::InvalidRequest(format!(
            "Missing required field: {}",
            field
        )));
    }

    info!(
        "Received resume generation request (industry: {}, experience: {})",
        payload.profile.industry().unwrap_or_default(),
        payload.profile.experience_level().unwrap_or_default()
    );

    let resume_content = state
        .service
        .generate_resume(&payload.profile, payload.custom_instructions.as_ref())
        .await;

    let requester = payload
        .profile
        .email()
        .unwrap_or(UNKNOWN_REQUESTER)
        .to_string();
    let details = serde_json::to_value(&payload)?;
    state
        .activity
        .record(requester, ActivityKind::Generation, details);

    Ok(Json(GenerateResumeResponse {
        resume_content,
        status: SUCCESS.to_string(),
    }))
}

/// Resume optimization endpoint
#[axum::debug_handler]
pub(super) async fn optimize_resume(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<OptimizeResumePayload>,
) -> Result<Json<OptimizeResumeResponse>, ServerError> {
    if let Some(message) = payload.missing_input() {
        warn!("Rejected resume optimization request: {}", message);
        return Err(ServerError::InvalidRequest(message.to_string()));
    }

    info!(
        "Received resume optimization request ({} extra examples)",
        payload.additional_examples.len()
    );

    let optimized_resume = state
        .service
        .optimize_resume(
            &payload.profile,
            payload.custom_instructions.as_ref(),
            &payload.optimization_input(),
        )
        .await;

    let requester = payload
        .profile
        .email()
        .unwrap_or(UNKNOWN_REQUESTER)
        .to_string();
    let details = serde_json::to_value(&payload)?;
    state
        .activity
        .record(requester, ActivityKind::Optimization, details);

    Ok(Json(OptimizeResumeResponse {
        optimized_resume,
        status: SUCCESS.to_string(),
    }))
}

/// Usage statistics for the dashboard
pub(super) async fn usage_stats(State(state): State<AppState>) -> Json<UsageStatsResponse> {
    let summary = state.activity.summary(state.recent_activity_limit);
    Json(UsageStatsResponse {
        total_resumes: summary.total_generations,
        total_optimizations: summary.total_optimizations,
        recent_activities: summary.recent,
    })
}

/// Career insights over one user's logged activity
pub(super) async fn ai_insights(
    State(state): State<AppState>,
    JsonExtractor(request): JsonExtractor<InsightsRequest>,
) -> Json<InsightsResponse> {
    let activities = request
        .user_id
        .as_deref()
        .map(|id| state.activity.query(id))
        .unwrap_or_default();

    info!(
        "Generating insights over {} logged activities",
        activities.len()
    );

    let insights = state.service.generate_insights(&activities).await;
    Json(InsightsResponse {
        user_id: request.user_id,
        insights,
    })
}

/// Record a generation event reported by a client
pub(super) async fn log_generation(
    State(state): State<AppState>,
    JsonExtractor(details): JsonExtractor<Map<String, Value>>,
) -> Json<LogActivityResponse> {
    log_activity(&state, ActivityKind::Generation, details)
}

/// Record an optimization event reported by a client
pub(super) async fn log_optimization(
    State(state): State<AppState>,
    JsonExtractor(details): JsonExtractor<Map<String, Value>>,
) -> Json<LogActivityResponse> {
    log_activity(&state, ActivityKind::Optimization, details)
}

/// Fallback for unknown routes
pub(super) async fn not_found(uri: Uri) -> ServerError {
    ServerError::NotFound(format!("No route for {}", uri.path()))
}

fn log_activity(
    state: &AppState,
    kind: ActivityKind,
    details: Map<String, Value>,
) -> Json<LogActivityResponse> {
    let requester = details
        .get("user_id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .unwrap_or(UNKNOWN_REQUESTER)
        .to_string();

    let activity = state
        .activity
        .record(requester, kind, Value::Object(details));

    Json(LogActivityResponse {
        status: SUCCESS.to_string(),
        activity,
    })
}
