use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use collectify_cloud_sync::CloudSyncError;
use collectify_core::errors::{DatabaseError, Error as CoreError};
use serde::Serialize;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Upstream(String),
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            ApiError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            ApiError::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            ApiError::Core(CoreError::Validation(_)) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR")
            }
            ApiError::Core(CoreError::Database(DatabaseError::NotFound(_))) => {
                (StatusCode::NOT_FOUND, "NOT_FOUND")
            }
            ApiError::Core(CoreError::Remote(_)) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR"),
            ApiError::Core(CoreError::Timeout(_)) => {
                (StatusCode::GATEWAY_TIMEOUT, "UPSTREAM_TIMEOUT")
            }
            ApiError::Core(_) | ApiError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
            }
        }
    }
}

impl From<CloudSyncError> for ApiError {
    fn from(err: CloudSyncError) -> Self {
        match err {
            CloudSyncError::Auth(message) => ApiError::Unauthorized(message),
            CloudSyncError::Api { status: 401, message }
            | CloudSyncError::Api { status: 403, message } => ApiError::Unauthorized(message),
            CloudSyncError::InvalidRequest(message) => ApiError::BadRequest(message),
            other => ApiError::Upstream(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status_and_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected: {}", self);
        }
        let body = ErrorBody {
            code,
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
