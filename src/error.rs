use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use crate::auth::dto::MessageResponse;

/// Outcome of a failed signup or login.
///
/// The messages are part of the wire contract: the frontend treats any
/// message starting with `❌` as a failure.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("❌ Email already registered")]
    Conflict,

    #[error("❌ No user found")]
    NotFound,

    #[error("❌ Wrong password")]
    Unauthorized,

    #[error("❌ Server error")]
    Internal(#[from] anyhow::Error),
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::Conflict => StatusCode::BAD_REQUEST,
            // Login failures are reported in the body, not the status line.
            AuthError::NotFound | AuthError::Unauthorized => StatusCode::OK,
            AuthError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        if let AuthError::Internal(e) = &self {
            error!(error = ?e, "request failed");
        }
        let status = self.status();
        let body = MessageResponse {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
