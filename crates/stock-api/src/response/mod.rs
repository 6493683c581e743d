//! Response types and error handling for API endpoints
//!
//! Every read failure collapses into a generic `FETCH_FAILED` body; the
//! underlying error is logged and never serialized.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use stock_service::ServiceError;
use thiserror::Error;
use tracing::error;

/// API error type for consistent error responses
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Failed to fetch {resource}")]
    Fetch {
        resource: &'static str,
        #[source]
        source: ServiceError,
    },
}

impl ApiError {
    /// Map a service failure while reading `resource`
    ///
    /// ```rust,ignore
    /// service.list_items(limit).await.map_err(ApiError::fetch("items"))?;
    /// ```
    pub fn fetch(resource: &'static str) -> impl FnOnce(ServiceError) -> Self {
        move |source| Self::Fetch { resource, source }
    }

    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Fetch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code for API responses
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Fetch { .. } => "FETCH_FAILED",
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail for API responses
#[derive(Debug, Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Fetch { resource, source } => {
                error!(
                    resource = *resource,
                    code = source.error_code(),
                    error = %source,
                    "Fetch failed"
                );
            }
        }

        let body = ErrorBody {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
