use axum::body::Bytes;
use axum::extract::{FromRequest, FromRequestParts, Request};
use axum::http::{StatusCode, header, request::Parts};
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Extracteur du jeton d'accès pour les routes protégées.
/// Lit `Authorization: <scheme> <token>` et garde le second segment tel quel;
/// le jeton est validé par le fournisseur d'identité, pas ici.
#[derive(Debug, Clone)]
pub struct BearerToken(pub String);

impl BearerToken {
    /// Returns the second whitespace-separated segment of the header value.
    pub fn parse(header_value: &str) -> Option<&str> {
        header_value.split_whitespace().nth(1)
    }
}

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(Self::parse)
            .map(|token| BearerToken(token.to_string()))
            .ok_or_else(|| AppError::unauthorized("Unauthorized: No access token provided"))
    }
}

/// JSON body extractor that answers with `AppError::Validation` instead of
/// axum's default rejections. The content type is not checked; a body over
/// the size limit still answers 413.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T> JsonBody<T>
where
    T: DeserializeOwned,
{
    pub fn parse(body: &[u8]) -> Result<Self, AppError> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Err(AppError::validation("Request body is required"));
        }

        serde_json::from_slice(body)
            .map(JsonBody)
            .map_err(|e| AppError::validation(format!("Invalid request body: {e}")))
    }
}

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| {
                if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                    AppError::payload_too_large(e.body_text())
                } else {
                    AppError::validation(format!("Unable to read request body: {e}"))
                }
            })?;

        Self::parse(&body)
    }
}
