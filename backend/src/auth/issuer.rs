use std::sync::Arc;

use jsonwebtoken::{encode, Algorithm, Header};
use secrecy::{ExposeSecret, Secret};
use tracing::{info, warn};

use super::{AuthError, Clock, SigningKeys};
use crate::config::AuthSettings;
use crate::models::{Credentials, TokenClaims};

/// Lifetime of an issued token.
pub const TOKEN_TTL_SECS: i64 = 60 * 60;

/// Exchanges the admin credentials for a signed, time-bound token.
pub struct TokenIssuer {
    username: String,
    password: Secret<String>,
    keys: Arc<SigningKeys>,
    clock: Arc<dyn Clock>,
}

impl TokenIssuer {
    pub fn new(auth: &AuthSettings, keys: Arc<SigningKeys>, clock: Arc<dyn Clock>) -> Self {
        Self {
            username: auth.admin_username.clone(),
            password: auth.admin_password.clone(),
            keys,
            clock,
        }
    }

    pub fn issue(&self, candidate: &Credentials) -> Result<String, AuthError> {
        let username_matches = candidate.username == self.username;
        let password_matches = candidate.password == *self.password.expose_secret();
        if !(username_matches && password_matches) {
            warn!("Rejected login attempt for '{}'", candidate.username);
            return Err(AuthError::InvalidCredentials);
        }

        let iat = self.clock.now().timestamp();
        let claims = TokenClaims {
            username: candidate.username.clone(),
            iat,
            exp: iat + TOKEN_TTL_SECS,
        };

        let token = encode(&Header::new(Algorithm::HS256), &claims, self.keys.encoding())
            .map_err(AuthError::Signing)?;
        info!("Issued token for '{}' valid until {}", claims.username, claims.exp);
        Ok(token)
    }
}
