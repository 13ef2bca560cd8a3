//! HTTP error response mapping.

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use itech_domain::error::ItechError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

/// Maps faults to an HTTP response with appropriate status code.
pub enum ApiError {
    /// A fault raised by the application or storage layer.
    Domain(ItechError),
    /// The request could not be extracted (bad JSON, wrong types, bad path id).
    Rejected { status: StatusCode, detail: String },
}

impl From<ItechError> for ApiError {
    fn from(err: ItechError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::Rejected {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::Rejected { status, detail } => (status, detail),
            Self::Domain(ItechError::Validation(err)) => {
                (StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            Self::Domain(ItechError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            Self::Domain(ItechError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Database error: {err}"),
                )
            }
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}
