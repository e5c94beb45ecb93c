use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    ValidationError,
    InvalidIdentifier,
    TaskNotFound,
    StorageReadError,
    StorageWriteError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ValidationError => "VALIDATION_ERROR",
            Self::InvalidIdentifier => "INVALID_IDENTIFIER",
            Self::TaskNotFound => "TASK_NOT_FOUND",
            Self::StorageReadError => "STORAGE_READ_ERROR",
            Self::StorageWriteError => "STORAGE_WRITE_ERROR",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError | Self::InvalidIdentifier => StatusCode::BAD_REQUEST,
            Self::TaskNotFound => StatusCode::NOT_FOUND,
            Self::StorageReadError | Self::StorageWriteError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Error)]
#[error("{message}")]
pub struct TaskdError {
    pub code: ErrorCode,
    pub message: String,
}

impl TaskdError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn validation(messages: &[String]) -> Self {
        Self::new(ErrorCode::ValidationError, messages.join("; "))
    }

    pub fn invalid_identifier(id: &str) -> Self {
        Self::new(
            ErrorCode::InvalidIdentifier,
            format!("Invalid task id: {id}"),
        )
    }

    pub fn task_not_found(id: &str) -> Self {
        Self::new(
            ErrorCode::TaskNotFound,
            format!("Task with id {id} not found"),
        )
    }

    pub fn storage_read(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageReadError, message)
    }

    pub fn storage_write(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::StorageWriteError, message)
    }
}

impl IntoResponse for TaskdError {
    fn into_response(self) -> Response {
        let status = self.code.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.code.as_str(), message = %self.message, "request failed");
        }
        let body = json!({
            "error": {
                "code": self.code.as_str(),
                "message": self.message,
            }
        });
        (status, Json(body)).into_response()
    }
}
