//! Identity provider seam.
//!
//! Every user operation maps onto exactly one provider command. The trait keeps
//! the service independent from the AWS SDK so it can be exercised against the
//! recording mock in tests.

pub mod cognito;
#[cfg(test)]
pub mod mock;

use async_trait::async_trait;
use user_auth_api::{CodeDeliveryDetails, UserAttribute, UserDetails};

pub use cognito::CognitoProvider;

/// Failure kinds reported by the provider, named after its exceptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderErrorKind {
    CodeMismatch,
    ExpiredCode,
    ResourceNotFound,
    NotAuthorized,
    UserNotFound,
    UsernameExists,
    InvalidPassword,
    InvalidParameter,
    /// Any other exception, by name.
    Other(String),
    /// No exception name at all (transport failure, timeout...).
    Unknown,
}

impl ProviderErrorKind {
    pub fn from_code(code: &str) -> Self {
        match code {
            "CodeMismatchException" => Self::CodeMismatch,
            "ExpiredCodeException" => Self::ExpiredCode,
            "ResourceNotFoundException" => Self::ResourceNotFound,
            "NotAuthorizedException" => Self::NotAuthorized,
            "UserNotFoundException" => Self::UserNotFound,
            "UsernameExistsException" => Self::UsernameExists,
            "InvalidPasswordException" => Self::InvalidPassword,
            "InvalidParameterException" => Self::InvalidParameter,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::CodeMismatch => "CodeMismatchException",
            Self::ExpiredCode => "ExpiredCodeException",
            Self::ResourceNotFound => "ResourceNotFoundException",
            Self::NotAuthorized => "NotAuthorizedException",
            Self::UserNotFound => "UserNotFoundException",
            Self::UsernameExists => "UsernameExistsException",
            Self::InvalidPassword => "InvalidPasswordException",
            Self::InvalidParameter => "InvalidParameterException",
            Self::Other(name) => name,
            Self::Unknown => "UnknownError",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}: {message}", .kind.name())]
pub struct ProviderError {
    pub kind: ProviderErrorKind,
    pub message: String,
}

impl ProviderError {
    pub fn new(kind: ProviderErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Builds the error from what the provider reported, falling back to
    /// `fallback` when it sent no message.
    pub fn from_parts(code: Option<&str>, message: Option<&str>, fallback: &str) -> Self {
        let kind = code.map_or(ProviderErrorKind::Unknown, ProviderErrorKind::from_code);
        let message = message
            .filter(|m| !m.is_empty())
            .map_or_else(|| fallback.to_string(), str::to_string);
        Self { kind, message }
    }
}

/// Account creation command.
#[derive(Debug, Clone)]
pub struct SignUpCommand {
    pub client_id: String,
    pub username: String,
    pub password: String,
    pub attributes: Vec<UserAttribute>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpOutput {
    pub user_sub: String,
    pub user_confirmed: bool,
    pub code_delivery_details: Option<CodeDeliveryDetails>,
}

/// Result of a password authentication. Any field may be missing, e.g. when
/// the provider answers with a challenge instead of tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthenticationResult {
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
    pub id_token: Option<String>,
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn sign_up(&self, command: SignUpCommand) -> Result<SignUpOutput, ProviderError>;

    async fn confirm_sign_up(
        &self,
        client_id: &str,
        username: &str,
        confirmation_code: &str,
    ) -> Result<(), ProviderError>;

    async fn initiate_password_auth(
        &self,
        client_id: &str,
        username: &str,
        password: &str,
    ) -> Result<Option<AuthenticationResult>, ProviderError>;

    async fn get_user(&self, access_token: &str) -> Result<UserDetails, ProviderError>;

    async fn update_user_attributes(
        &self,
        access_token: &str,
        attributes: Vec<UserAttribute>,
    ) -> Result<Vec<CodeDeliveryDetails>, ProviderError>;

    async fn change_password(
        &self,
        access_token: &str,
        previous_password: &str,
        proposed_password: &str,
    ) -> Result<(), ProviderError>;

    async fn forgot_password(
        &self,
        client_id: &str,
        username: &str,
    ) -> Result<Option<CodeDeliveryDetails>, ProviderError>;
}
