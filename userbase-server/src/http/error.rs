//! API error type with IntoResponse
//!
//! Error bodies are the plain-text message, no JSON envelope.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::db::StoreError;

/// Per-request failure
#[derive(Debug)]
pub enum ApiError {
    /// Request body could not be decoded (400)
    MalformedBody(String),

    /// Statement failed (500, logged)
    Storage(StoreError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::MalformedBody(message) => (StatusCode::BAD_REQUEST, message).into_response(),
            Self::Storage(e) => {
                tracing::error!("Database error: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
            }
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self::Storage(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use axum::http::header::CONTENT_TYPE;

    #[tokio::test]
    async fn malformed_body_is_400_with_message() {
        let response = ApiError::MalformedBody("EOF while parsing a value".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"EOF while parsing a value");
    }

    #[tokio::test]
    async fn storage_error_is_500_with_raw_driver_text() {
        let err = StoreError::Sqlx(sqlx::Error::PoolClosed);
        let expected = sqlx::Error::PoolClosed.to_string();

        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(response.headers()[CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(String::from_utf8_lossy(&body), expected);
    }
}
