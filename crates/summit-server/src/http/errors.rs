//! Mapping from tracker errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;
use serde_json::json;
use summit_core::TrackerError;

/// An error ready to be sent as `{"error": message}` with a status code.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<TrackerError> for ApiError {
    fn from(err: TrackerError) -> Self {
        match err {
            TrackerError::InvalidInput { reason, .. } => Self::bad_request(reason),
            TrackerError::GoalNotFound { .. } => Self::new(StatusCode::NOT_FOUND, "Goal not found"),
            TrackerError::ParentGoalNotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, "Parent goal not found")
            }
            TrackerError::SubGoalNotFound { .. } => {
                Self::new(StatusCode::NOT_FOUND, "SubGoal not found")
            }
            other => {
                error!("Request failed: {other}");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, other.to_string())
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}
