use anyhow::{Context, Result};
use std::env;

#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

impl Environment {
    /// Détecte automatiquement l'environnement
    pub fn detect() -> Self {
        Self::from_vars(&|key: &str| env::var(key).ok())
    }

    fn from_vars(get: &dyn Fn(&str) -> Option<String>) -> Self {
        // Méthode 1: Vérifier si on est dans AWS Lambda
        if get("AWS_LAMBDA_FUNCTION_NAME").is_some() {
            return Self::Production;
        }

        // Méthode 2: Vérifier la variable APP_ENV
        match get("APP_ENV").as_deref() {
            Some("production" | "prod") => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub environment: Environment,
    /// Identifiant du client du user pool. Absent: les opérations qui en ont
    /// besoin répondent 500.
    pub client_id: Option<String>,
    pub region: Option<String>,
    /// Endpoint Cognito alternatif (émulateur local).
    pub endpoint_url: Option<String>,
    pub running_in_lambda: bool,
    pub server_host: String,
    pub server_port: u16,
}

impl Config {
    /// Charge la configuration depuis les variables d'environnement
    /// avec détection automatique de l'environnement
    pub fn from_env() -> Result<Self> {
        let environment = Environment::detect();

        tracing::info!(
            "🌍 Environment detected: {}",
            environment.as_str().to_uppercase()
        );

        Self::load_env_file(&environment);

        let config = Self::from_vars(environment, &|key: &str| env::var(key).ok())?;

        tracing::info!("✅ Configuration loaded successfully");
        tracing::debug!("   Region: {}", config.region.as_deref().unwrap_or("<sdk default>"));
        tracing::debug!("   Server: {}:{}", config.server_host, config.server_port);

        Ok(config)
    }

    fn from_vars(environment: Environment, get: &dyn Fn(&str) -> Option<String>) -> Result<Self> {
        let set = |key: &str| get(key).filter(|v| !v.trim().is_empty());

        let client_id = set("COGNITO_CLIENT_ID");
        if client_id.is_none() {
            tracing::warn!("⚠️  COGNITO_CLIENT_ID not set, user operations will fail");
        }

        let server_port = match set("SERVER_PORT") {
            Some(port) => port
                .parse::<u16>()
                .with_context(|| format!("SERVER_PORT must be a port number, got {port:?}"))?,
            None => 3000,
        };

        Ok(Self {
            environment,
            client_id,
            region: set("AWS_REGION"),
            endpoint_url: set("COGNITO_ENDPOINT_URL"),
            running_in_lambda: set("AWS_LAMBDA_FUNCTION_NAME").is_some(),
            server_host: set("SERVER_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            server_port,
        })
    }

    /// Charge `.env` en développement; en production (Lambda) les variables
    /// sont déjà injectées.
    fn load_env_file(environment: &Environment) {
        if environment.is_production() {
            tracing::info!("📦 Production mode: using injected environment variables");
            return;
        }

        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!("   Loaded: {}", path.display()),
            Err(_) => tracing::warn!("   .env file not found, using environment variables"),
        }
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}
