use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

pub const FORGOT_PASSWORD_TRIGGER: &str = "CustomMessage_ForgotPassword";

/// Cognito "Custom message" trigger payload.
///
/// Only the fields the hook reads or writes are typed; everything else is
/// kept in `extra` and sent back untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomMessageEvent {
    pub trigger_source: String,
    pub request: CustomMessageRequest,
    pub response: CustomMessageResponse,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomMessageRequest {
    /// Outer `None`: key absent. `Some(None)`: explicit `null`, echoed back.
    #[serde(
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub user_attributes: Option<Option<Map<String, Value>>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomMessageResponse {
    #[serde(default)]
    pub sms_message: Option<String>,
    #[serde(default)]
    pub email_message: Option<String>,
    #[serde(default)]
    pub email_subject: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Runs only when the key is present, so `null` becomes `Some(None)`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl CustomMessageRequest {
    /// Absent and `null` both count as no attributes.
    pub fn user_attributes(&self) -> Option<&Map<String, Value>> {
        self.user_attributes.as_ref().and_then(Option::as_ref)
    }
}

impl CustomMessageEvent {
    pub fn is_forgot_password(&self) -> bool {
        self.trigger_source == FORGOT_PASSWORD_TRIGGER
    }
}
