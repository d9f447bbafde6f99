use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rc_app::AppError;
use rc_snapshots::SnapshotError;
use serde::Serialize;
use thiserror::Error;

/// Errors returned by the JSON routes.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Property evaluation failed: {0}")]
    Unprocessable(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_type(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NotFound",
            ApiError::BadRequest(_) => "BadRequest",
            ApiError::Conflict(_) => "Conflict",
            ApiError::Unprocessable(_) => "PropertyError",
            ApiError::InternalError(_) => "InternalServerError",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            ApiError::InternalError(_) => {
                tracing::error!(error = %self, "API error occurred");
                "An internal error occurred".to_string()
            }
            _ => {
                tracing::debug!(error = %self, "Client error");
                self.to_string()
            }
        };
        let body = ErrorResponse {
            error: self.error_type(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        match err {
            AppError::Cycle(_) | AppError::Fluid(_) => ApiError::Unprocessable(err.to_string()),
            AppError::Snapshot(SnapshotError::NotFound { .. }) => ApiError::NotFound(err.to_string()),
            AppError::Snapshot(SnapshotError::DuplicateLabel { .. }) => {
                ApiError::Conflict(err.to_string())
            }
            AppError::NothingCalculated | AppError::InvalidInput(_) => {
                ApiError::BadRequest(err.to_string())
            }
            AppError::Config(_)
            | AppError::ConfigRead { .. }
            | AppError::ConfigWrite { .. }
            | AppError::Yaml(_) => ApiError::InternalError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_errors_map_to_status() {
        let nf: ApiError = AppError::from(SnapshotError::NotFound { label: "x".into() }).into();
        assert_eq!(nf.status_code(), StatusCode::NOT_FOUND);
        let dup: ApiError =
            AppError::from(SnapshotError::DuplicateLabel { label: "x".into() }).into();
        assert_eq!(dup.status_code(), StatusCode::CONFLICT);
    }

    #[test]
    fn property_failure_is_unprocessable() {
        let err = rc_fluids::FluidError::Backend {
            message: "no data".into(),
        };
        let api: ApiError = AppError::from(err).into();
        assert_eq!(api.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[test]
    fn nothing_calculated_is_bad_request() {
        let api: ApiError = AppError::NothingCalculated.into();
        assert_eq!(api.status_code(), StatusCode::BAD_REQUEST);
    }
}
