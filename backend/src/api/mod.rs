use std::sync::Arc;

use axum::{
    http::{header, Method},
    routing, Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::models::AppState;

mod auth;
mod home;
mod post;

pub use auth::TokenResponse;

/// Assembles every route of the service around `state`.
pub fn app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/", routing::get(home::index))
        .nest("/admin", auth::router())
        .merge(post::router(state.clone()))
        .fallback(home::fallback_404)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
