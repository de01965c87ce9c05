//! Error types for the GitHub client and the HTTP boundary.
//!
//! [`GitHubError`] describes what went wrong talking to GitHub. [`ApiError`]
//! is what handlers return; it turns every failure into a JSON body of the
//! form `{"error": "..."}` with the matching status code.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const USERNAME_REQUIRED: &str = "Username is required";
pub const UNKNOWN_ERROR: &str = "An unknown error occurred";

/// Failures while calling the GitHub REST API.
#[derive(Error, Debug)]
pub enum GitHubError {
    /// Network, DNS, TLS or connection failure.
    #[error("GitHub API request failed: {source}")]
    Http {
        url: String,
        source: reqwest::Error,
    },

    /// GitHub answered with a non-2xx status.
    #[error("GitHub API error: {reason}")]
    UnexpectedStatus {
        url: String,
        status: u16,
        reason: String,
    },

    /// The response body did not match the expected shape.
    #[error("Failed to decode GitHub response from {url}: {message}")]
    Decode { url: String, message: String },

    /// A body that decoded as JSON but not as the resource the dashboard reads.
    #[error("Unexpected {resource} payload from GitHub: {message}")]
    UnexpectedPayload { resource: String, message: String },

    /// The token contains characters that cannot go into a header.
    #[error("Access token is not a valid header value")]
    InvalidToken,
}

pub type GitHubResult<T> = Result<T, GitHubError>;

/// Errors surfaced by the proxy endpoints and the dashboard.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Upstream(#[from] GitHubError),

    #[error("{}", UNKNOWN_ERROR)]
    Unknown { detail: String },
}

impl ApiError {
    pub fn username_required() -> Self {
        ApiError::Validation(USERNAME_REQUIRED.to_string())
    }

    pub fn unknown(detail: impl Into<String>) -> Self {
        ApiError::Unknown {
            detail: detail.into(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Upstream(_) | ApiError::Unknown { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        match &self {
            ApiError::Validation(message) => log::warn!("Rejected request: {}", message),
            ApiError::Upstream(err) => log::error!("Upstream failure: {:?}", err),
            ApiError::Unknown { detail } => log::error!("Unhandled failure: {}", detail),
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
#[path = "errors_tests.rs"]
mod tests;
