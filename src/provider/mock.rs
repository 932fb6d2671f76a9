//! Recording `IdentityProvider` for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use user_auth_api::{CodeDeliveryDetails, UserAttribute, UserDetails};

use super::{
    AuthenticationResult, IdentityProvider, ProviderError, ProviderErrorKind, SignUpCommand,
    SignUpOutput,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    SignUp,
    ConfirmSignUp,
    InitiateAuth,
    GetUser,
    UpdateUserAttributes,
    ChangePassword,
    ForgotPassword,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    SignUp {
        client_id: String,
        username: String,
        attributes: Vec<UserAttribute>,
    },
    ConfirmSignUp {
        client_id: String,
        username: String,
        code: String,
    },
    InitiateAuth {
        client_id: String,
        username: String,
    },
    GetUser {
        access_token: String,
    },
    UpdateUserAttributes {
        access_token: String,
        attributes: Vec<UserAttribute>,
    },
    ChangePassword {
        access_token: String,
        previous_password: String,
        proposed_password: String,
    },
    ForgotPassword {
        client_id: String,
        username: String,
    },
}

pub const USER_SUB: &str = "6f1c8a52-0d7e-4c43-9b1f-1f5e2a7c9d10";

pub fn email_delivery() -> CodeDeliveryDetails {
    CodeDeliveryDetails {
        destination: Some("u***@e***.com".to_string()),
        delivery_medium: Some("EMAIL".to_string()),
        attribute_name: Some("email".to_string()),
    }
}

pub fn issued_tokens() -> AuthenticationResult {
    AuthenticationResult {
        access_token: Some("access-token".to_string()),
        refresh_token: Some("refresh-token".to_string()),
        id_token: Some("id-token".to_string()),
    }
}

/// Succeeds on every command unless told otherwise, and records each call.
pub struct MockProvider {
    calls: Mutex<Vec<Call>>,
    failures: HashMap<Operation, ProviderError>,
    authentication: Option<AuthenticationResult>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            failures: HashMap::new(),
            authentication: Some(issued_tokens()),
        }
    }
}

impl MockProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(mut self, operation: Operation, kind: ProviderErrorKind, message: &str) -> Self {
        self.failures
            .insert(operation, ProviderError::new(kind, message));
        self
    }

    pub fn with_authentication(mut self, result: Option<AuthenticationResult>) -> Self {
        self.authentication = result;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, operation: Operation, call: Call) -> Result<(), ProviderError> {
        self.calls.lock().unwrap().push(call);
        match self.failures.get(&operation) {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl IdentityProvider for MockProvider {
    async fn sign_up(&self, command: SignUpCommand) -> Result<SignUpOutput, ProviderError> {
        self.record(
            Operation::SignUp,
            Call::SignUp {
                client_id: command.client_id,
                username: command.username,
                attributes: command.attributes,
            },
        )?;
        Ok(SignUpOutput {
            user_sub: USER_SUB.to_string(),
            user_confirmed: false,
            code_delivery_details: Some(email_delivery()),
        })
    }

    async fn confirm_sign_up(
        &self,
        client_id: &str,
        username: &str,
        confirmation_code: &str,
    ) -> Result<(), ProviderError> {
        self.record(
            Operation::ConfirmSignUp,
            Call::ConfirmSignUp {
                client_id: client_id.to_string(),
                username: username.to_string(),
                code: confirmation_code.to_string(),
            },
        )
    }

    async fn initiate_password_auth(
        &self,
        client_id: &str,
        username: &str,
        _password: &str,
    ) -> Result<Option<AuthenticationResult>, ProviderError> {
        self.record(
            Operation::InitiateAuth,
            Call::InitiateAuth {
                client_id: client_id.to_string(),
                username: username.to_string(),
            },
        )?;
        Ok(self.authentication.clone())
    }

    async fn get_user(&self, access_token: &str) -> Result<UserDetails, ProviderError> {
        self.record(
            Operation::GetUser,
            Call::GetUser {
                access_token: access_token.to_string(),
            },
        )?;
        Ok(UserDetails {
            username: USER_SUB.to_string(),
            user_attributes: vec![
                UserAttribute::new("sub", USER_SUB),
                UserAttribute::new("email", "user@example.com"),
            ],
        })
    }

    async fn update_user_attributes(
        &self,
        access_token: &str,
        attributes: Vec<UserAttribute>,
    ) -> Result<Vec<CodeDeliveryDetails>, ProviderError> {
        self.record(
            Operation::UpdateUserAttributes,
            Call::UpdateUserAttributes {
                access_token: access_token.to_string(),
                attributes,
            },
        )?;
        Ok(vec![email_delivery()])
    }

    async fn change_password(
        &self,
        access_token: &str,
        previous_password: &str,
        proposed_password: &str,
    ) -> Result<(), ProviderError> {
        self.record(
            Operation::ChangePassword,
            Call::ChangePassword {
                access_token: access_token.to_string(),
                previous_password: previous_password.to_string(),
                proposed_password: proposed_password.to_string(),
            },
        )
    }

    async fn forgot_password(
        &self,
        client_id: &str,
        username: &str,
    ) -> Result<Option<CodeDeliveryDetails>, ProviderError> {
        self.record(
            Operation::ForgotPassword,
            Call::ForgotPassword {
                client_id: client_id.to_string(),
                username: username.to_string(),
            },
        )?;
        Ok(Some(email_delivery()))
    }
}
