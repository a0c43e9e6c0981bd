//! Error types for wordpose
//!
//! Storage and parse failures surface to HTTP callers as server errors
//! with a JSON body; there is no retry or recovery path.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Common result type for wordpose operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the keypoint service
#[derive(Error, Debug)]
pub enum Error {
    /// Connection or query failure against the backing store
    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    /// Stored keypoints text is not valid JSON
    #[error("malformed keypoints data for frame {frame}: {source}")]
    MalformedData {
        frame: i64,
        #[source]
        source: serde_json::Error,
    },

    /// Configuration loading or validation error
    #[error("configuration error: {0}")]
    Config(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let status = match self {
            Error::Storage(_) | Error::MalformedData { .. } | Error::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        error!("request failed: {}", message);

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
