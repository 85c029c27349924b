use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::auth::AuthError;
use crate::models::CustomResponse;
use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl AppError {
    pub fn bad_request(message: &str) -> Self {
        AppError::BadRequest(message.to_string())
    }

    pub fn not_found(message: &str) -> Self {
        AppError::NotFound(message.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::BadRequest(message) => {
                CustomResponse::<()>::empty(StatusCode::BAD_REQUEST, &message).into_response()
            }
            AppError::NotFound(message) => {
                CustomResponse::<()>::empty(StatusCode::NOT_FOUND, &message).into_response()
            }
            AppError::Auth(err) => err.into_response(),
            AppError::Store(err) => {
                error!("Store error: {}", err);
                CustomResponse::<()>::empty(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
                    .into_response()
            }
        }
    }
}
