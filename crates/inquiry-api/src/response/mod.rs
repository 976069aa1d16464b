//! Response types and error handling for API endpoints
//!
//! Every response, success or failure, uses the same envelope:
//! `{success, message, data?, error?, errors?}`.

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use inquiry_core::DomainError;
use inquiry_service::ServiceError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use validator::ValidationErrors;

/// Detail shown for server errors unless debug mode is on
pub const GENERIC_ERROR_DETAIL: &str = "An error occurred while processing your request";

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body failed field validation
    #[error("Validation failed")]
    Validation(#[from] ValidationErrors),

    /// Request body could be parsed but not accepted
    #[error("Validation failed: {0}")]
    Rejected(String),

    /// Request body is not JSON
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// No live inquiry with this id
    #[error("No inquiry found with ID: {0}")]
    NotFound(String),

    /// An operation failed on the server side
    #[error("{message}: {source}")]
    Failed {
        message: &'static str,
        #[source]
        source: anyhow::Error,
        expose: bool,
    },
}

impl ApiError {
    /// Translate a service failure for the operation described by `message`
    ///
    /// `expose` controls whether the underlying error text reaches the client.
    pub fn from_service(err: ServiceError, message: &'static str, expose: bool) -> Self {
        match err {
            ServiceError::NotFound { id, .. } => Self::NotFound(id),
            ServiceError::Domain(DomainError::InquiryNotFound(id)) => Self::NotFound(id.to_string()),
            ServiceError::Validation(msg) => Self::Rejected(msg),
            other => Self::Failed {
                message,
                source: anyhow::Error::new(other),
                expose,
            },
        }
    }

    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Rejected(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::InvalidBody(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Failed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for logs
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) | Self::Rejected(_) => "VALIDATION_ERROR",
            Self::InvalidBody(_) => "INVALID_BODY",
            Self::NotFound(_) => "UNKNOWN_INQUIRY",
            Self::Failed { .. } => "INTERNAL_ERROR",
        }
    }

    /// Create a not found error for a raw path id
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    /// Create an invalid body error
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Self::InvalidBody(msg.into())
    }

    fn body(&self) -> ErrorBody {
        match self {
            Self::Validation(errors) => ErrorBody {
                message: "Validation failed",
                error: None,
                errors: Some(field_messages(errors)),
            },
            Self::Rejected(msg) => ErrorBody {
                message: "Validation failed",
                error: Some(msg.clone()),
                errors: None,
            },
            Self::InvalidBody(msg) => ErrorBody {
                message: "Invalid request body",
                error: Some(msg.clone()),
                errors: None,
            },
            Self::NotFound(id) => ErrorBody {
                message: "Inquiry not found",
                error: Some(format!("No inquiry found with ID: {id}")),
                errors: None,
            },
            Self::Failed {
                message,
                source,
                expose,
            } => ErrorBody {
                message: *message,
                error: Some(if *expose {
                    source.to_string()
                } else {
                    GENERIC_ERROR_DETAIL.to_string()
                }),
                errors: None,
            },
        }
    }
}

/// Flatten validator errors into `{field: [message, ...]}`
///
/// Rules without a message fall back to their code.
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map_or_else(|| e.code.to_string(), ToString::to_string)
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// Envelope fields of an error response
#[derive(Debug)]
struct ErrorBody {
    message: &'static str,
    error: Option<String>,
    errors: Option<BTreeMap<String, Vec<String>>>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Log server errors with their full chain
        if status.is_server_error() {
            error!(code = self.error_code(), error = ?self, "Server error occurred");
        }

        let body = self.body();
        let envelope = ApiResponse::<()> {
            success: false,
            message: body.message.to_string(),
            data: None,
            error: body.error,
            errors: body.errors,
        };

        (status, Json(envelope)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;

/// Response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, Vec<String>>>,
}

impl<T> ApiResponse<T> {
    /// Successful response carrying `data`
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
            errors: None,
        }
    }
}

impl ApiResponse<()> {
    /// Successful response with no payload
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            error: None,
            errors: None,
        }
    }
}

/// Created response (201) with JSON body
pub struct Created<T>(pub T);

impl<T: IntoResponse> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = self.0.into_response();
        *response.status_mut() = StatusCode::CREATED;
        response
    }
}
