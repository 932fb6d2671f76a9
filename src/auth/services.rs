// src/auth/services.rs

use std::sync::Arc;

use axum::http::StatusCode;
use user_auth_api::{
    AttributeUpdateResult, AuthTokens, ChangeEmailRequest, ChangeEmailResponse,
    ChangePasswordRequest, ConfirmRequest, ForgotPasswordRequest, ForgotPasswordResponse,
    MessageResponse, SigninRequest, SigninResponse, SignupRequest, SignupResponse, UserAttribute,
    non_empty,
};

use crate::error::AppError;
use crate::provider::{IdentityProvider, ProviderErrorKind, SignUpCommand};

/// Forwards each user operation to the identity provider and maps its outcome
/// to an API response.
pub struct UserService {
    provider: Arc<dyn IdentityProvider>,
    client_id: Option<String>,
}

impl UserService {
    pub fn new(provider: Arc<dyn IdentityProvider>, client_id: Option<String>) -> Self {
        Self {
            provider,
            client_id,
        }
    }

    fn client_id(&self) -> Result<&str, AppError> {
        self.client_id.as_deref().ok_or_else(|| {
            AppError::configuration("COGNITO_CLIENT_ID is not set in environment variables")
        })
    }

    /// Inscription d'un nouvel utilisateur
    pub async fn signup(&self, request: SignupRequest) -> Result<SignupResponse, AppError> {
        let (Some(email), Some(password)) = (non_empty(request.email), non_empty(request.password))
        else {
            return Err(AppError::validation("Email and password are required"));
        };
        let client_id = self.client_id()?;

        let mut attributes = vec![UserAttribute::new("email", email.as_str())];
        if let Some(first_name) = non_empty(request.first_name) {
            attributes.push(UserAttribute::new("given_name", first_name));
        }
        if let Some(last_name) = non_empty(request.last_name) {
            attributes.push(UserAttribute::new("family_name", last_name));
        }

        tracing::debug!(attributes = attributes.len(), "Sending SignUp command");
        let output = self
            .provider
            .sign_up(SignUpCommand {
                client_id: client_id.to_string(),
                username: email,
                password,
                attributes,
            })
            .await
            .map_err(|e| {
                tracing::warn!("Signup failed: {e}");
                AppError::provider(StatusCode::INTERNAL_SERVER_ERROR, e)
            })?;

        tracing::info!(user_sub = %output.user_sub, "User created");
        Ok(SignupResponse {
            message: "User created successfully".to_string(),
            user_sub: output.user_sub,
            user_confirmed: output.user_confirmed,
            code_delivery_details: output.code_delivery_details,
        })
    }

    /// Confirme un compte avec le code reçu par email
    pub async fn confirm(&self, request: ConfirmRequest) -> Result<MessageResponse, AppError> {
        let (Some(email), Some(code)) = (
            non_empty(request.email),
            non_empty(request.confirmation_code),
        ) else {
            return Err(AppError::validation(
                "Email and confirmation code are required",
            ));
        };
        let client_id = self.client_id()?;

        self.provider
            .confirm_sign_up(client_id, &email, &code)
            .await
            .map_err(|e| {
                tracing::warn!("Confirm failed: {e}");
                match e.kind {
                    ProviderErrorKind::ResourceNotFound => {
                        tracing::error!(
                            client_id,
                            "User pool client not found, COGNITO_CLIENT_ID is probably wrong"
                        );
                        AppError::provider_with_message(
                            StatusCode::INTERNAL_SERVER_ERROR,
                            &e,
                            "Cognito configuration error - User Pool Client not found",
                        )
                    }
                    ProviderErrorKind::CodeMismatch => AppError::provider_with_message(
                        StatusCode::BAD_REQUEST,
                        &e,
                        "Invalid confirmation code",
                    ),
                    ProviderErrorKind::ExpiredCode => AppError::provider_with_message(
                        StatusCode::BAD_REQUEST,
                        &e,
                        "Confirmation code has expired",
                    ),
                    _ => AppError::provider(StatusCode::INTERNAL_SERVER_ERROR, e),
                }
            })?;

        Ok(MessageResponse::new("Email confirmed successfully"))
    }

    /// Connexion: authentification par mot de passe puis lecture du profil
    pub async fn signin(&self, request: SigninRequest) -> Result<SigninResponse, AppError> {
        let (Some(email), Some(password)) = (non_empty(request.email), non_empty(request.password))
        else {
            return Err(AppError::validation("Email and password are required"));
        };
        let client_id = self.client_id()?;

        let result = self
            .provider
            .initiate_password_auth(client_id, &email, &password)
            .await
            .map_err(|e| {
                tracing::warn!("Signin failed: {e}");
                AppError::provider(StatusCode::UNAUTHORIZED, e)
            })?
            .unwrap_or_default();

        // Pas d'access token: on ne va pas plus loin
        let Some(access_token) = result.access_token else {
            return Err(AppError::unauthorized("Authentication failed"));
        };

        let user = self.provider.get_user(&access_token).await.map_err(|e| {
            tracing::warn!("Fetching user details failed: {e}");
            AppError::provider(StatusCode::UNAUTHORIZED, e)
        })?;

        tracing::info!(username = %user.username, "Signin successful");
        Ok(SigninResponse {
            message: "Signin successful".to_string(),
            user,
            tokens: AuthTokens {
                access_token,
                refresh_token: result.refresh_token,
                id_token: result.id_token,
            },
        })
    }

    /// Change l'email de la session courante
    pub async fn change_email(
        &self,
        access_token: &str,
        request: ChangeEmailRequest,
    ) -> Result<ChangeEmailResponse, AppError> {
        let Some(email) = non_empty(request.email) else {
            return Err(AppError::validation("Email is required"));
        };

        let code_delivery_details_list = self
            .provider
            .update_user_attributes(access_token, vec![UserAttribute::new("email", email)])
            .await
            .map_err(|e| {
                tracing::warn!("Changing email failed: {e}");
                AppError::provider(StatusCode::INTERNAL_SERVER_ERROR, e)
            })?;

        Ok(ChangeEmailResponse {
            result: AttributeUpdateResult {
                code_delivery_details_list,
            },
        })
    }

    /// Change le mot de passe de la session courante
    pub async fn change_password(
        &self,
        access_token: &str,
        request: ChangePasswordRequest,
    ) -> Result<MessageResponse, AppError> {
        let (Some(old_password), Some(new_password)) = (
            non_empty(request.old_password),
            non_empty(request.new_password),
        ) else {
            return Err(AppError::validation(
                "Old password and new password are required",
            ));
        };

        self.provider
            .change_password(access_token, &old_password, &new_password)
            .await
            .map_err(|e| {
                tracing::warn!("Changing password failed: {e}");
                AppError::provider(StatusCode::INTERNAL_SERVER_ERROR, e)
            })?;

        Ok(MessageResponse::new("Password changed successfully"))
    }

    /// Déclenche l'envoi d'un code de réinitialisation
    pub async fn forgot_password(
        &self,
        request: ForgotPasswordRequest,
    ) -> Result<ForgotPasswordResponse, AppError> {
        let Some(email) = non_empty(request.email) else {
            return Err(AppError::validation("Email is required"));
        };
        let client_id = self.client_id()?;

        let code_delivery_details = self
            .provider
            .forgot_password(client_id, &email)
            .await
            .map_err(|e| {
                tracing::warn!("Forgot password failed: {e}");
                AppError::provider(StatusCode::INTERNAL_SERVER_ERROR, e)
            })?;

        Ok(ForgotPasswordResponse {
            message: "Forgot password successfully".to_string(),
            code_delivery_details,
        })
    }
}
