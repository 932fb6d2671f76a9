use std::sync::Arc;

use axum::extract::State;
use user_auth_api::{
    ChangeEmailRequest, ChangeEmailResponse, ChangePasswordRequest, ConfirmRequest,
    ForgotPasswordRequest, ForgotPasswordResponse, MessageResponse, SigninRequest, SigninResponse,
    SignupRequest, SignupResponse,
};

use crate::auth::extractors::{BearerToken, JsonBody};
use crate::auth::services::UserService;
use crate::response::{AppResponse, AppResult};

/// POST /user/signup
/// Inscription d'un nouvel utilisateur
pub async fn signup(
    State(service): State<Arc<UserService>>,
    JsonBody(payload): JsonBody<SignupRequest>,
) -> AppResult<SignupResponse> {
    let created = service.signup(payload).await?;
    Ok(AppResponse::created(created))
}

/// POST /user/confirm
pub async fn confirm(
    State(service): State<Arc<UserService>>,
    JsonBody(payload): JsonBody<ConfirmRequest>,
) -> AppResult<MessageResponse> {
    Ok(AppResponse::ok(service.confirm(payload).await?))
}

/// POST /user/signin
/// Connexion d'un utilisateur
pub async fn signin(
    State(service): State<Arc<UserService>>,
    JsonBody(payload): JsonBody<SigninRequest>,
) -> AppResult<SigninResponse> {
    Ok(AppResponse::ok(service.signin(payload).await?))
}

/// POST /user/email
/// Le jeton est lu avant le corps: sans jeton, 401 même si le corps manque.
pub async fn change_email(
    State(service): State<Arc<UserService>>,
    BearerToken(token): BearerToken,
    JsonBody(payload): JsonBody<ChangeEmailRequest>,
) -> AppResult<ChangeEmailResponse> {
    Ok(AppResponse::ok(service.change_email(&token, payload).await?))
}

/// PUT /user/password
pub async fn change_password(
    State(service): State<Arc<UserService>>,
    BearerToken(token): BearerToken,
    JsonBody(payload): JsonBody<ChangePasswordRequest>,
) -> AppResult<MessageResponse> {
    Ok(AppResponse::ok(
        service.change_password(&token, payload).await?,
    ))
}

/// POST /user/forgotPassword
pub async fn forgot_password(
    State(service): State<Arc<UserService>>,
    JsonBody(payload): JsonBody<ForgotPasswordRequest>,
) -> AppResult<ForgotPasswordResponse> {
    Ok(AppResponse::ok(service.forgot_password(payload).await?))
}
