// src/app.rs

use axum::{
    Router,
    http::{Method, header},
    routing::{get, post, put},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::auth::services::UserService;
use crate::handlers::health::health;
use crate::handlers::user::{
    change_email, change_password, confirm, forgot_password, signin, signup,
};

/// Configure les routes utilisateur
pub fn user_routes(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
        .route("/confirm", post(confirm))
        .route("/email", post(change_email))
        .route("/password", put(change_password))
        .route("/forgotPassword", post(forgot_password))
        .with_state(service)
}

/// Preflight ouvert: toutes origines, avec `Content-Type` et `Authorization`.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
            Method::HEAD,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Construit l'application complète
pub fn build_router(service: Arc<UserService>) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/user", user_routes(service))
        .layer(cors_layer())
        // Middleware global de tracing
        .layer(TraceLayer::new_for_http())
}
