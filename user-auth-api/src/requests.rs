use serde::{Deserialize, Serialize};

// -------- REQUEST DTOs --------
//
// Fields are optional on the wire: the service decides what is required and
// answers with a validation error instead of a deserialization failure.

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub email: Option<String>,
    pub password: Option<String>, // Plain text
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ConfirmRequest {
    pub email: Option<String>,
    pub confirmation_code: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct SigninRequest {
    pub email: Option<String>,
    pub password: Option<String>, // Plain text
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ChangeEmailRequest {
    pub email: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: Option<String>,
    pub new_password: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ForgotPasswordRequest {
    pub email: Option<String>,
}

/// Returns the value only when it is present and not blank.
pub fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
