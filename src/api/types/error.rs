//! API error envelope

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::domain::user::{UserId, UserValidationError};
use crate::domain::DomainError;

/// Message returned for every unexpected failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Unexpected server error";

/// Machine readable error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiErrorCode {
    BadRequest,
    UserNotFound,
    InternalError,
}

impl std::fmt::Display for ApiErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadRequest => write!(f, "bad_request"),
            Self::UserNotFound => write!(f, "user_not_found"),
            Self::InternalError => write!(f, "internal_error"),
        }
    }
}

/// Error response body
///
/// `user_id` is wider than [`UserId`] so a well-formed id that can never be
/// assigned (negative, or past `u64::MAX`) is still echoed back.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i128>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            status,
            response: ApiErrorResponse {
                error: code,
                message: message.into(),
                user_id: None,
                request_id: None,
            },
        }
    }

    /// Attach the id of the request that failed
    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.response.request_id = Some(request_id.into());
        self
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, ApiErrorCode::BadRequest, message)
    }

    /// Unknown user error
    pub fn user_not_found(user_id: UserId) -> Self {
        Self::unknown_user_id(i128::from(user_id.value()))
    }

    /// Unknown user error for any integer id, assignable or not
    pub fn unknown_user_id(user_id: i128) -> Self {
        let mut err = Self::new(
            StatusCode::NOT_FOUND,
            ApiErrorCode::UserNotFound,
            format!("User with id={} was not found", user_id),
        );
        err.response.user_id = Some(user_id);
        err
    }

    /// Internal server error; the cause is never exposed
    pub fn internal() -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            ApiErrorCode::InternalError,
            INTERNAL_ERROR_MESSAGE,
        )
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::UserNotFound { user_id } => Self::user_not_found(user_id),
            other => {
                error!(error = %other, "Unhandled error");
                Self::internal()
            }
        }
    }
}

impl From<UserValidationError> for ApiError {
    fn from(err: UserValidationError) -> Self {
        Self::bad_request(err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.response.error, self.response.message)
    }
}

impl std::error::Error for ApiError {}
