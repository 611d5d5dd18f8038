pub mod config;
pub mod dto;
pub mod gemini;
pub mod handlers;
pub mod prompt;
pub mod service;

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use std::sync::Arc;

use service::ReplyService;

/// Full HTTP surface of the service.
pub fn app(service: Arc<ReplyService>) -> Router {
    Router::new()
        .route("/", get(handlers::health_check))
        .route("/api/email/generate", post(handlers::generate))
        .with_state(service)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        )
        .layer(TraceLayer::new_for_http())
}
