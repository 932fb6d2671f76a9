//! Cognito trigger hooks. These are invoked by the user pool itself, never
//! through the HTTP API.

pub mod custom_message;
pub mod event;

pub use custom_message::{CustomMessageError, MessageTemplate, customize};
pub use event::CustomMessageEvent;
