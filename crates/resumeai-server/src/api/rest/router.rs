//! Router creation and configuration
//!
//! Creates the Axum router for the REST API endpoints.

use super::handlers::*;
use super::types::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/generate-resume", post(generate_resume))
        .route("/optimize-resume", post(optimize_resume))
        .route("/dashboard/usage-stats", get(usage_stats))
        .route("/dashboard/ai-insights", post(ai_insights))
        .route("/resume/log-generation", post(log_generation))
        .route("/resume/log-optimization", post(log_optimization))
        .fallback(not_found)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
