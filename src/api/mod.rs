// API routes and handlers

pub mod auth;
pub mod health;
pub mod routes;
pub mod training_plan;
pub mod workouts;

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

/// Plain user-facing message body, used for both success envelopes and
/// 4xx/5xx responses
#[derive(Debug, Serialize)]
pub struct ApiMessage {
    pub message: String,
}

impl ApiMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Generic 500 response; internals are logged, never returned
pub(crate) fn internal_error() -> (StatusCode, Json<ApiMessage>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiMessage::new("Internal server error")),
    )
}
