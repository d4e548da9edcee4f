use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use mindmap_sdk::{SdkError, StoreError};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error(transparent)]
    Sdk(#[from] SdkError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Sdk(SdkError::Store(store)) => match store {
                StoreError::DuplicateApp(_) | StoreError::AppNotFound(_) => StatusCode::NOT_FOUND,
                StoreError::LockPoisoned(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Config(_) | Self::Io(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

pub type ServerResult<T> = Result<T, ServerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_not_found() {
        let dup = ServerError::from(SdkError::from(StoreError::DuplicateApp("a".into())));
        let missing = ServerError::from(SdkError::from(StoreError::AppNotFound("a".into())));
        assert_eq!(dup.status(), StatusCode::NOT_FOUND);
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn poisoned_lock_is_internal() {
        let err = ServerError::from(SdkError::from(StoreError::LockPoisoned("x".into())));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn detail_is_store_message() {
        let err = ServerError::from(SdkError::from(StoreError::DuplicateApp("app-0".into())));
        assert_eq!(err.to_string(), "App with id: app-0 already exists in database.");
    }
}
