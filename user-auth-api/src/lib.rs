//! # user-auth-api
//!
//! Shared API types for the user-auth service.
//! These are the JSON bodies exchanged on the `/user/*` routes, kept free of
//! any server dependency so a client can reuse them as-is.
//!
//! ## Example
//!
//! ```rust
//! use user_auth_api::SigninRequest;
//!
//! let request = SigninRequest {
//!     email: Some("user@example.com".to_string()),
//!     password: Some("password123".to_string()),
//! };
//! ```

pub mod error;
pub mod requests;
pub mod responses;

// Re-exports for convenient access
pub use error::ErrorResponse;
pub use requests::*;
pub use responses::*;
