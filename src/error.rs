// src/error.rs

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use user_auth_api::ErrorResponse;

use crate::provider::{ProviderError, ProviderErrorKind};

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppError {
    // === Erreurs détectées localement ===
    #[error("Validation error: {0}")]
    Validation(String),
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
    #[error("Configuration error: {0}")]
    Configuration(String),

    // === Erreurs du fournisseur d'identité ===
    /// A provider call failed; `status` and `message` are chosen by the
    /// operation that made the call.
    #[error("Identity provider error ({}): {message}", .kind.name())]
    Provider {
        status: StatusCode,
        kind: ProviderErrorKind,
        message: String,
    },

    /// Body rejected by the request size limit.
    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            AppError::Configuration(detail) => {
                tracing::error!(error_code = self.error_code(), %status, detail, "Request failed");
            }
            AppError::Provider { kind, message, .. } if status.is_server_error() => {
                tracing::error!(error_code = kind.name(), %status, detail = %message, "Identity provider call failed");
            }
            _ => {}
        }

        let body = Json(ErrorResponse {
            error: self.error_code().to_string(),
            message: self.public_message(),
        });

        (status, body).into_response()
    }
}

impl AppError {
    /// Retourne le code de statut HTTP
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Provider { status, .. } => *status,
        }
    }

    /// Machine-readable kind carried in the `error` field of the body.
    pub fn error_code(&self) -> &str {
        match self {
            AppError::Validation(_) => "ValidationError",
            AppError::Unauthorized(_) => "AuthError",
            AppError::Configuration(_) => "ConfigurationError",
            AppError::Provider { kind, .. } => kind.name(),
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
        }
    }

    fn public_message(&self) -> String {
        match self {
            AppError::Validation(msg)
            | AppError::Unauthorized(msg)
            | AppError::PayloadTooLarge(msg) => msg.clone(),
            AppError::Provider { message, .. } => message.clone(),
            AppError::Configuration(_) => "Internal server error".to_string(),
        }
    }

    // === Constructeurs helpers ===
    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        AppError::Unauthorized(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        AppError::Configuration(msg.into())
    }

    pub fn payload_too_large(msg: impl Into<String>) -> Self {
        AppError::PayloadTooLarge(msg.into())
    }

    /// Keeps the provider's own message.
    pub fn provider(status: StatusCode, err: ProviderError) -> Self {
        AppError::Provider {
            status,
            kind: err.kind,
            message: err.message,
        }
    }

    /// Replaces the provider's message with a fixed one, keeping the kind.
    pub fn provider_with_message(
        status: StatusCode,
        err: &ProviderError,
        message: impl Into<String>,
    ) -> Self {
        AppError::Provider {
            status,
            kind: err.kind.clone(),
            message: message.into(),
        }
    }
}
