use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::models::CustomResponse;

/// Failures of the login and guard paths. The display text of each
/// variant is the plain-text body sent to the client.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Could not create token")]
    Signing(#[source] jsonwebtoken::errors::Error),
    #[error("Missing Authorization header")]
    MissingHeader,
    #[error("Invalid Authorization header format")]
    MalformedHeader,
    #[error("Invalid token")]
    InvalidToken,
}

impl AuthError {
    pub fn status(&self) -> StatusCode {
        match self {
            AuthError::Signing(_) => StatusCode::INTERNAL_SERVER_ERROR,
            _ => StatusCode::UNAUTHORIZED,
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        CustomResponse::<()>::empty(self.status(), &self.to_string()).into_response()
    }
}
