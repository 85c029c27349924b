use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, decode_header, Algorithm, Validation};
use tracing::{debug, warn};

use super::{AuthError, Clock, SigningKeys};
use crate::models::{AppState, TokenClaims};

const EXPECTED_ALGORITHM: Algorithm = Algorithm::HS256;

/// Stateless bearer-token check placed in front of protected routes.
pub struct AccessGuard {
    keys: Arc<SigningKeys>,
    clock: Arc<dyn Clock>,
    validation: Validation,
}

impl AccessGuard {
    pub fn new(keys: Arc<SigningKeys>, clock: Arc<dyn Clock>) -> Self {
        // Expiry is checked against our own clock with no leeway.
        let mut validation = Validation::new(EXPECTED_ALGORITHM);
        validation.leeway = 0;
        validation.validate_exp = false;
        validation.set_required_spec_claims(&["exp"]);
        Self {
            keys,
            clock,
            validation,
        }
    }

    pub fn authorize(&self, headers: &HeaderMap) -> Result<TokenClaims, AuthError> {
        let token = bearer_token(headers)?;
        self.verify(token)
    }

    pub fn verify(&self, token: &str) -> Result<TokenClaims, AuthError> {
        let header = decode_header(token).map_err(|e| {
            debug!("Unreadable token header: {}", e);
            AuthError::InvalidToken
        })?;
        if header.alg != EXPECTED_ALGORITHM {
            debug!("Token signed with unexpected algorithm {:?}", header.alg);
            return Err(AuthError::InvalidToken);
        }

        let claims = decode::<TokenClaims>(token, self.keys.decoding(), &self.validation)
            .map_err(|e| {
                debug!("Token rejected: {}", e);
                AuthError::InvalidToken
            })?
            .claims;

        let now = self.clock.now().timestamp();
        if claims.exp <= now {
            debug!("Token expired at {} (now {})", claims.exp, now);
            return Err(AuthError::InvalidToken);
        }
        Ok(claims)
    }
}

/// Extracts `<token>` from an `Authorization: Bearer <token>` header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = match headers.get(header::AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AuthError::MissingHeader),
    };
    let value = value.to_str().map_err(|_| AuthError::MalformedHeader)?;

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => Err(AuthError::MalformedHeader),
    }
}

/// Middleware for protected routes. The request is forwarded untouched;
/// the verified claims are not handed to the wrapped handler.
pub async fn require_auth(
    State(app_state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let outcome = app_state.guard.authorize(request.headers());
    match outcome {
        Ok(claims) => {
            debug!("Authorized request for '{}'", claims.username);
            Ok(next.run(request).await)
        }
        Err(err) => {
            warn!("{} {} rejected: {}", request.method(), request.uri().path(), err);
            Err(err)
        }
    }
}
