use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use todos_core::storage::RepositoryError;
use todos_core::todo::ValidationError;

/// Body sent when a create fails in storage.
pub const CREATE_FAILED_MESSAGE: &str = "Error:Unable to insert todo item";

/// Error returned by the todo handlers.
///
/// Every variant is terminal: converting it into a response ends the request.
/// Storage details are logged here and never reach the client.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be read as JSON. Parser details are
    /// logged, not returned.
    #[error("Request body must be valid JSON")]
    InvalidBody(#[source] JsonRejection),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("{0}")]
    NotFound(&'static str),
    /// A read failed; the client sees `message`.
    #[error("{message}")]
    Storage {
        message: &'static str,
        #[source]
        source: RepositoryError,
    },
    /// The create write failed.
    #[error("Error:Unable to insert todo item")]
    CreateFailed(#[source] RepositoryError),
}

impl ApiError {
    /// Wraps a repository read failure with the message shown to clients.
    pub fn storage(message: &'static str) -> impl FnOnce(RepositoryError) -> Self {
        move |source| Self::Storage { message, source }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidBody(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Storage { .. } | ApiError::CreateFailed(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            ApiError::InvalidBody(rejection) => {
                tracing::warn!(status = %status, error = %rejection, "Rejected request body");
            }
            ApiError::Validation(_) => {
                tracing::warn!(status = %status, message = %self, "Rejected request");
            }
            ApiError::NotFound(_) => {
                tracing::debug!(status = %status, message = %self, "Not found");
            }
            ApiError::Storage { source, .. } | ApiError::CreateFailed(source) => {
                tracing::error!(status = %status, error = %source, "Storage error");
            }
        }

        match self {
            // Create failures answer with a bare JSON string rather than an object.
            ApiError::CreateFailed(_) => (status, Json(CREATE_FAILED_MESSAGE)).into_response(),
            other => (status, Json(json!({ "error": other.to_string() }))).into_response(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;

    async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_validation_error_is_bad_request() {
        let (status, body) = body_json(ValidationError::TitleNotString.into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "\"Title\" must be a string"}));
    }

    #[tokio::test]
    async fn test_storage_error_hides_details() {
        let error = ApiError::storage("Unable to get todo items")(RepositoryError::ReadFailed(
            "Table not found".to_string(),
        ));

        let (status, body) = body_json(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Unable to get todo items"}));
    }

    #[tokio::test]
    async fn test_create_failed_is_plain_string() {
        let error = ApiError::CreateFailed(RepositoryError::WriteFailed("boom".to_string()));

        let (status, body) = body_json(error).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!("Error:Unable to insert todo item"));
    }

    #[tokio::test]
    async fn test_not_found() {
        let (status, body) = body_json(ApiError::NotFound("Could not find todo item")).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({"error": "Could not find todo item"}));
    }
}
