//! HTTP error mapping
//!
//! Catalog errors and extractor rejections become `{"detail": "..."}` bodies.
//!
//! | Error | Status |
//! |-------|--------|
//! | `NotFound`, `NoMatch` | 404 |
//! | `Conflict` | 404 (the create endpoint has always answered 404 for a taken id) |
//! | `InvalidInput`, extractor rejections | 422 |
//! | `Io`, `Serialization`, `Config` | 500 |

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use pokedex_core::Error;

/// Result type for request handlers
pub type ApiResult<T> = std::result::Result<T, ApiError>;

/// An error returned from a request handler
#[derive(Debug)]
pub struct ApiError(pub Error);

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl ApiError {
    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            Error::NotFound { .. } | Error::NoMatch | Error::Conflict { .. } => {
                StatusCode::NOT_FOUND
            }
            Error::InvalidInput { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Io { .. } | Error::Serialization { .. } | Error::Config { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        ApiError(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError(Error::invalid_input(rejection.body_text()))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError(Error::invalid_input(rejection.body_text()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::warn!(target: "pokedex::server", error = %self.0, "Request failed");
        }
        let body = ErrorBody {
            detail: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
