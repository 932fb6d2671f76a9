use std::env;

use super::event::CustomMessageEvent;

const DEFAULT_SUBJECT: &str = "Dummy subject";
const DEFAULT_FOOTER: &str = "<p>Dummy message</p>";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CustomMessageError {
    #[error("userAttributes is required for forgot password")]
    MissingUserAttributes,
}

/// Subject and appended text applied to every outgoing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    pub subject: String,
    pub footer: String,
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self {
            subject: DEFAULT_SUBJECT.to_string(),
            footer: DEFAULT_FOOTER.to_string(),
        }
    }
}

impl MessageTemplate {
    /// `CUSTOM_MESSAGE_SUBJECT` / `CUSTOM_MESSAGE_FOOTER`, defaults otherwise.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            subject: env::var("CUSTOM_MESSAGE_SUBJECT").unwrap_or(defaults.subject),
            footer: env::var("CUSTOM_MESSAGE_FOOTER").unwrap_or(defaults.footer),
        }
    }
}

/// Rewrites the email subject and appends the footer to the email body.
///
/// # Errors
///
/// A forgot-password event without user attributes is rejected, which makes
/// Cognito abort the delivery.
pub fn customize(
    mut event: CustomMessageEvent,
    template: &MessageTemplate,
) -> Result<CustomMessageEvent, CustomMessageError> {
    tracing::info!(trigger_source = %event.trigger_source, "CustomMessage event");

    if event.is_forgot_password() && event.request.user_attributes().is_none() {
        tracing::error!(
            trigger_source = %event.trigger_source,
            "Forgot password message requested without user attributes"
        );
        return Err(CustomMessageError::MissingUserAttributes);
    }

    event.response.email_subject = Some(template.subject.clone());
    event
        .response
        .email_message
        .get_or_insert_with(String::new)
        .push_str(&template.footer);

    Ok(event)
}
