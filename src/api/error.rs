//! Error types for the HTTP surface.
//!
//! Internal detail is logged server side; clients only ever see the
//! generic JSON bodies these endpoints have always returned.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde_json::json;

/// API error type.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No snapshot stored for the requested token.
    #[error("staking data not found")]
    NotFound,

    /// Internal server error (database, etc.).
    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound => (StatusCode::NOT_FOUND, "Staking data not found"),
            Self::Internal(err) => {
                error!("Failed to serve staking data: {:#}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch staking data",
                )
            },
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
