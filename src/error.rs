use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;
use tracing::error;

#[derive(Debug, ThisError)]
pub enum LarderError {
    #[error("secret unavailable: {0}")]
    SecretUnavailable(String),

    #[error("connection pool init failed: {0}")]
    PoolInit(#[source] SqlxError),

    #[error("schema init failed: {0}")]
    SchemaInit(#[source] SqlxError),

    #[error("storage error: {0}")]
    Storage(#[from] SqlxError),

    #[error("invalid request: {0}")]
    InvalidRequest(String),
}

/// Fixed per-request error body; driver detail never reaches the client.
#[derive(Serialize)]
pub struct ApiErrorBody {
    pub error: String,
}

impl IntoResponse for LarderError {
    fn into_response(self) -> axum::response::Response {
        let (status, body) = match &self {
            LarderError::Storage(err) => {
                error!(error = %err, "database operation failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorBody {
                        error: "Database error".to_string(),
                    },
                )
            }
            LarderError::InvalidRequest(reason) => (
                StatusCode::BAD_REQUEST,
                ApiErrorBody {
                    error: reason.clone(),
                },
            ),
            // Startup-only variants; reaching the request boundary means a bug.
            other => {
                error!(error = %other, "unexpected error at the request boundary");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorBody {
                        error: "Internal server error".to_string(),
                    },
                )
            }
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn storage_errors_map_to_generic_500() {
        let resp = LarderError::Storage(SqlxError::PoolTimedOut).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        assert_eq!(&body[..], br#"{"error":"Database error"}"#);
    }

    #[tokio::test]
    async fn invalid_request_maps_to_400_with_reason() {
        let resp = LarderError::InvalidRequest("name must be a non-empty string".to_string())
            .into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(resp.into_body(), usize::MAX)
            .await
            .expect("failed to read response body");
        assert_eq!(&body[..], br#"{"error":"name must be a non-empty string"}"#);
    }
}
