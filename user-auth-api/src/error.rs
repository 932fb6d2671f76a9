use serde::{Deserialize, Serialize};

/// Public API error response format
///
/// `error` is the machine-readable kind (`ValidationError`, `AuthError`,
/// `ConfigurationError` or the identity provider exception name).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
