use std::sync::Arc;

use axum::{body::Bytes, extract::State, http::StatusCode, routing, Router};
use serde::Serialize;
use tracing::debug;

use crate::models::{AppError, AppState, Credentials, CustomResponse};

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/login", routing::post(login))
}

pub async fn login(
    State(app_state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<CustomResponse<TokenResponse>, AppError> {
    // Decoded regardless of Content-Type.
    let credentials: Credentials = serde_json::from_slice(&body).map_err(|e| {
        debug!("Unreadable login payload: {}", e);
        AppError::bad_request("Invalid request payload")
    })?;

    let token = app_state.issuer.issue(&credentials)?;
    Ok(CustomResponse::json(StatusCode::OK, TokenResponse { token }))
}
