use std::sync::Arc;

use user_auth::app::build_router;
use user_auth::auth::services::UserService;
use user_auth::config::Config;
use user_auth::logging::setup_logging;
use user_auth::provider::CognitoProvider;

// ----------------- Main -----------------

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    // Initialize logging for all environments
    setup_logging();
    tracing::info!("Starting user-auth...");

    let config = Config::from_env()?;

    let provider = CognitoProvider::from_config(&config).await;
    let service = UserService::new(Arc::new(provider), config.client_id.clone());
    let app = build_router(Arc::new(service));

    if config.running_in_lambda {
        tracing::info!("Running in Lambda mode");
        lambda_http::run(app).await
    } else {
        tracing::info!("Running in local HTTP server mode");
        let addr = config.server_addr();
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("🚀 Server running at http://{}", addr);
        axum::serve(listener, app).await?;

        Ok(())
    }
}
