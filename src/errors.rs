use axum::http::StatusCode;
use axum::response::IntoResponse;
use thiserror::Error;

/// Failures of the series generator and the rolling transform.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Random source unavailable: {0}")]
    RandomSourceUnavailable(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Random source error: {0}")]
    RandomSource(String),
    #[error("Export error: {0}")]
    Export(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            AppError::RandomSource(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Random source unavailable").into_response()
            }
            AppError::Export(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
            }
        }
    }
}

impl From<SeriesError> for AppError {
    fn from(value: SeriesError) -> Self {
        match value {
            SeriesError::InvalidParameter(msg) => AppError::Validation(msg),
            SeriesError::RandomSourceUnavailable(msg) => AppError::RandomSource(msg),
        }
    }
}

impl From<String> for AppError {
    fn from(value: String) -> Self {
        AppError::Validation(value)
    }
}
