//! JSON error responses for the HTTP API.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use skim_core::SkimError;

/// API error with status code and message.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub code: &'static str,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "bad_request",
            message: msg.into(),
        }
    }
    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            code: "internal_error",
            message: msg.into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = json!({
            "error": {
                "code": self.code,
                "message": self.message,
            }
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<SkimError> for ApiError {
    fn from(err: SkimError) -> Self {
        match &err {
            SkimError::EmptyInput
            | SkimError::InvalidRatio(_)
            | SkimError::InvalidTrimRange(_)
            | SkimError::UnsupportedFormat(_)
            | SkimError::Media(_) => ApiError::bad_request(err.to_string()),
            _ => ApiError::internal(err.to_string()),
        }
    }
}

/// `{ "success": false, "message": ... }` failure body used by the media
/// endpoints, mirroring their success shape.
pub fn media_failure(err: SkimError) -> Response {
    let status = match &err {
        SkimError::InvalidTrimRange(_)
        | SkimError::UnsupportedFormat(_)
        | SkimError::Media(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = json!({ "success": false, "message": err.to_string() });
    (status, Json(body)).into_response()
}
