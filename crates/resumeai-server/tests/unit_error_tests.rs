//! Unit tests for ServerError responses

use axum::{http::StatusCode, response::IntoResponse};
use http_body_util::BodyExt;
use resumeai_server::error::{ServerError, INTERNAL_ERROR_MESSAGE};
use serde_json::Value;

async fn body_json(error: ServerError) -> (StatusCode, Value) {
    let response = error.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_invalid_request_body() {
    let (status, body) =
        body_json(ServerError::InvalidRequest("Missing required field: email".to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Missing required field: email");
    assert_eq!(body["status"], 400);
}

#[tokio::test]
async fn test_not_found_body() {
    let (status, body) = body_json(ServerError::NotFound("No route for /x".to_string())).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "No route for /x");
    assert_eq!(body["status"], 404);
}

#[tokio::test]
async fn test_internal_error_body_is_generic() {
    let (status, body) = body_json(ServerError::InternalError("stack trace".to_string())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], INTERNAL_ERROR_MESSAGE);
    assert_eq!(body["status"], 500);
}

#[test]
fn test_serde_json_error_conversion() {
    let err = serde_json::from_str::<Value>("{oops").unwrap_err();
    let server_err: ServerError = err.into();

    assert!(matches!(server_err, ServerError::InternalError(_)));
    assert!(server_err.to_string().starts_with("Internal error: JSON serialization failed"));
}

#[test]
fn test_error_debug_format() {
    let err = ServerError::InvalidRequest("bad".to_string());
    assert!(format!("{:?}", err).contains("InvalidRequest"));
}
