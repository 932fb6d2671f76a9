//! User authentication API forwarding signup, signin, confirmation and
//! credential changes to a Cognito user pool.

pub mod app;
pub mod auth;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod provider;
pub mod response;
pub mod trigger;
