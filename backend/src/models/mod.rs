use std::sync::Arc;

mod credentials;
mod error;
mod post;
mod response;
mod token_claims;

pub use credentials::Credentials;
pub use error::AppError;
pub use post::{Comment, NewComment, NewPost, Post};
pub use response::CustomResponse;
pub use token_claims::TokenClaims;

use crate::auth::{AccessGuard, Clock, SigningKeys, TokenIssuer};
use crate::config::{AuthSettings, ConfigError};
use crate::store::PostStore;

/// Shared by every handler. Built once at startup; nothing in it is
/// mutated afterwards.
pub struct AppState {
    pub store: Arc<dyn PostStore>,
    pub issuer: TokenIssuer,
    pub guard: AccessGuard,
}

impl AppState {
    pub fn new(
        auth: &AuthSettings,
        store: Arc<dyn PostStore>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, ConfigError> {
        let keys = Arc::new(SigningKeys::from_secret(&auth.jwt_secret)?);
        Ok(Self {
            store,
            issuer: TokenIssuer::new(auth, keys.clone(), clock.clone()),
            guard: AccessGuard::new(keys, clock),
        })
    }
}
