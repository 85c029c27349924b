use secrecy::{ExposeSecret, Secret};
use std::env;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} environment variable must be set")]
    Missing(&'static str),
    #[error("JWT_SECRET must not be empty")]
    EmptySecret,
    #[error("PORT is not a valid port number: {0}")]
    InvalidPort(String),
}

/// Process-wide settings, read once at startup and never reloaded.
#[derive(Debug, Clone)]
pub struct Settings {
    pub port: u16,
    pub database_url: String,
    pub log_level: String,
    pub auth: AuthSettings,
}

/// The single admin principal and the signing secret shared by the
/// token issuer and the access guard.
#[derive(Debug, Clone)]
pub struct AuthSettings {
    pub admin_username: String,
    pub admin_password: Secret<String>,
    pub jwt_secret: Secret<String>,
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let jwt_secret = Secret::new(required("JWT_SECRET")?);
        if jwt_secret.expose_secret().is_empty() {
            return Err(ConfigError::EmptySecret);
        }
        let auth = AuthSettings {
            admin_username: required("ADMIN_USERNAME")?,
            admin_password: Secret::new(required("ADMIN_PASSWORD")?),
            jwt_secret,
        };

        let port = match lookup("PORT") {
            Some(value) => value.parse().map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            port,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            log_level: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            auth,
        })
    }
}
