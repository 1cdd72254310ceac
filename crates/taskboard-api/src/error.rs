// ============================================================================
// Task Board API - Error Responses
// File: crates/taskboard-api/src/error.rs
// ============================================================================
//! Maps domain and extraction failures onto HTTP statuses and the error envelope.

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use taskboard_core::error::{DomainError, ErrorKind};

use crate::response::ApiResponse;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

impl ApiError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApiError::Domain(e) => e.kind(),
            ApiError::BadRequest(_) => ErrorKind::Validation,
            ApiError::Unauthorized(_) => ErrorKind::Unauthorized,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Forbidden => StatusCode::FORBIDDEN,
            ErrorKind::Unauthorized => StatusCode::UNAUTHORIZED,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::Validation => "VALIDATION_ERROR",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Forbidden => "FORBIDDEN",
            ErrorKind::Unauthorized => "UNAUTHORIZED",
            ErrorKind::Conflict => "CONFLICT",
            ErrorKind::Internal => "INTERNAL_ERROR",
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(e: validator::ValidationErrors) -> Self {
        ApiError::Domain(e.into())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        // Store and hashing details stay in the logs.
        let message = match self.kind() {
            ErrorKind::Internal => {
                tracing::error!("Request failed: {}", self);
                "Internal server error".to_string()
            }
            ErrorKind::Unauthorized | ErrorKind::Forbidden => {
                tracing::warn!("Request denied: {}", self);
                self.to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(ApiResponse::<()>::error(self.code(), &message))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ApiError::from(DomainError::EmptyUpdate), StatusCode::BAD_REQUEST),
            (ApiError::from(DomainError::TaskNotFound(Uuid::nil())), StatusCode::NOT_FOUND),
            (ApiError::from(DomainError::Forbidden("x".into())), StatusCode::FORBIDDEN),
            (ApiError::from(DomainError::TokenExpired), StatusCode::UNAUTHORIZED),
            (ApiError::from(DomainError::GroupInUse(Uuid::nil())), StatusCode::CONFLICT),
            (ApiError::from(DomainError::DatabaseError("boom".into())), StatusCode::INTERNAL_SERVER_ERROR),
            (ApiError::BadRequest("bad json".into()), StatusCode::BAD_REQUEST),
        ];
        for (err, status) in cases {
            assert_eq!(err.status(), status, "{}", err);
        }
    }
}
