use axum::{http::StatusCode, response::IntoResponse};

use crate::models::CustomResponse;

pub async fn index() -> impl IntoResponse {
    CustomResponse::<()>::empty(StatusCode::OK, "Hello, world! This is my blog API.")
}

pub async fn fallback_404() -> impl IntoResponse {
    CustomResponse::<()>::empty(StatusCode::NOT_FOUND, "Not found")
}
