//! API error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

pub const ACCOUNT_CREATION_FAILED: &str = "Account creation failed";
pub const USER_UPDATE_FAILED: &str = "User update failed";
pub const AUTHENTICATION_FAILED: &str = "Authentication Failed";
pub const NO_USER_FOUND: &str = "No User found";

/// Error body returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub body: ApiErrorBody,
}

impl ApiError {
    /// Create a new API error
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody {
                message: message.into(),
                cause: None,
            },
        }
    }

    /// Add cause detail
    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.body.cause = Some(cause.into());
        self
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    /// Authentication error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    /// Permission error
    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FORBIDDEN, message)
    }

    /// Not found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Malformed { message } => {
                Self::bad_request(ACCOUNT_CREATION_FAILED).with_cause(message)
            }
            DomainError::Validation { message } => {
                Self::bad_request("Validation error").with_cause(message)
            }
            DomainError::Conflict { .. } => {
                Self::bad_request(ACCOUNT_CREATION_FAILED).with_cause("already same user_id is used")
            }
            DomainError::NotFound { .. } => Self::not_found(NO_USER_FOUND),
            DomainError::Authentication => Self::unauthorized(AUTHENTICATION_FAILED),
            DomainError::Forbidden { message } => Self::forbidden(message),
            DomainError::ImmutableField { .. } => {
                Self::bad_request(USER_UPDATE_FAILED).with_cause("not updatable user_id and password")
            }
            DomainError::NoUpdatableFields => {
                Self::bad_request(USER_UPDATE_FAILED).with_cause("required nickname or comment")
            }
            DomainError::Storage { message } => Self::internal(message),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.body.cause {
            Some(cause) => write!(f, "{}: {} ({})", self.status, self.body.message, cause),
            None => write!(f, "{}: {}", self.status, self.body.message),
        }
    }
}

impl std::error::Error for ApiError {}
