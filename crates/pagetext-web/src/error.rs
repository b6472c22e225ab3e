use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use pagetext_core::{BatchError, RangeParseError};

/// Request-level failure: a status code plus a message serialised as
/// `{"success": false, "error": "..."}`.
///
/// Only batch-wide conditions become an `ApiError`; per-document
/// failures inside a batch ride along in the 200 response body.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            success: false,
            error: self.message,
        };
        (self.status, Json(body)).into_response()
    }
}

impl From<BatchError> for ApiError {
    fn from(err: BatchError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl From<RangeParseError> for ApiError {
    fn from(_: RangeParseError) -> Self {
        Self::bad_request("Invalid page range format")
    }
}
