use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Réponse de succès des handlers: un status code et un corps JSON.
///
/// ```rust,ignore
/// AppResponse::ok(message)
/// AppResponse::created(signup_response)
/// ```
pub struct AppResponse<T> {
    status: StatusCode,
    body: T,
}

impl<T> AppResponse<T>
where
    T: Serialize,
{
    pub fn new(status: StatusCode, body: T) -> Self {
        Self { status, body }
    }

    /// 200 OK
    pub fn ok(body: T) -> Self {
        Self::new(StatusCode::OK, body)
    }

    /// 201 Created
    pub fn created(body: T) -> Self {
        Self::new(StatusCode::CREATED, body)
    }
}

impl<T> IntoResponse for AppResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Type alias pour les résultats des handlers
pub type AppResult<T> = Result<AppResponse<T>, crate::error::AppError>;
