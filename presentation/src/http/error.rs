//! Error responses
//!
//! Every failure leaves the server as
//! `{ "success": false, "error": <code>, "message": <text> }` with the code
//! doubling as the HTTP status. Internal detail is logged, never sent.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{error, warn};
use trivia_application::TriviaError;

/// Wire shape of an error
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub success: bool,
    pub error: u16,
    pub message: &'static str,
}

impl ErrorBody {
    /// Routing-level rejection; not part of the use-case taxonomy
    pub fn method_not_allowed() -> Self {
        Self {
            success: false,
            error: StatusCode::METHOD_NOT_ALLOWED.as_u16(),
            message: "Method Not Allowed",
        }
    }
}

impl From<&TriviaError> for ErrorBody {
    fn from(e: &TriviaError) -> Self {
        Self {
            success: false,
            error: e.code(),
            message: e.message(),
        }
    }
}

/// A [`TriviaError`] on its way out of a handler
#[derive(Debug)]
pub struct ApiError(pub TriviaError);

impl ApiError {
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self(TriviaError::BadRequest(detail.into()))
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self(TriviaError::NotFound(detail.into()))
    }

    pub fn unprocessable(detail: impl Into<String>) -> Self {
        Self(TriviaError::Unprocessable(detail.into()))
    }
}

impl From<TriviaError> for ApiError {
    fn from(e: TriviaError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.0.is_internal() {
            error!("{}", self.0);
        } else {
            warn!("{}", self.0);
        }

        let status =
            StatusCode::from_u16(self.0.code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(ErrorBody::from(&self.0))).into_response()
    }
}
