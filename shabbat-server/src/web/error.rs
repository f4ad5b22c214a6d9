//! Web-boundary error type.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::domain::UnknownCity;
use crate::hebcal::HebcalError;

use super::dto::ErrorResponse;

/// Application error type.
///
/// Each variant maps to one status code and a fixed client-facing detail.
/// The `cause` is logged but never sent to the client.
#[derive(Debug)]
pub enum AppError {
    /// Malformed request (422)
    Validation { message: String },
    /// Unknown city slug (404)
    NotFound { cause: String },
    /// Upstream provider failed or timed out (502)
    BadGateway { cause: String },
    /// Anything else (500)
    Internal { cause: String },
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::BadGateway { .. } => StatusCode::BAD_GATEWAY,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::Validation { message } => message.clone(),
            AppError::NotFound { .. } => "City not found".to_string(),
            AppError::BadGateway { .. } => "Upstream provider error".to_string(),
            AppError::Internal { .. } => "Internal server error".to_string(),
        }
    }
}

impl From<UnknownCity> for AppError {
    fn from(e: UnknownCity) -> Self {
        AppError::NotFound {
            cause: e.to_string(),
        }
    }
}

impl From<HebcalError> for AppError {
    fn from(e: HebcalError) -> Self {
        if e.is_upstream_failure() {
            AppError::BadGateway {
                cause: e.to_string(),
            }
        } else {
            AppError::Internal {
                cause: e.to_string(),
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = self.detail();

        match &self {
            AppError::Validation { message } => tracing::warn!(%status, "{message}"),
            AppError::NotFound { cause } => tracing::warn!(%status, "{cause}"),
            AppError::BadGateway { cause } | AppError::Internal { cause } => {
                tracing::error!(%status, "{cause}")
            }
        }

        (status, Json(ErrorResponse { detail })).into_response()
    }
}
