// src/error.rs
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::error;

use crate::message::ChatError;

/// The only failure text a caller ever sees.
pub const GENERIC_FAILURE: &str = "Failed to invoke Bedrock agent";

/// Everything that can go wrong between receiving a chat message and
/// returning the agent's answer.
///
/// The variants are kept for logging only. Every one of them collapses into
/// the same HTTP 500 body when turned into a response.
#[derive(Debug, Error)]
pub enum RelayError {
    /// A required agent identifier was not configured.
    #[error("missing configuration: {0} is not set")]
    MissingConfig(&'static str),

    /// The request body could not be read as a chat request.
    #[error("invalid chat request: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    /// The invoke call itself failed (transport, auth, service error).
    #[error("agent invocation failed: {0}")]
    Invoke(String),

    /// The completion stream broke while it was being read.
    #[error("completion stream failed: {0}")]
    Stream(String),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        error!(error = %self, "chat relay failed");
        let body = Json(ChatError {
            error: GENERIC_FAILURE.to_string(),
        });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
