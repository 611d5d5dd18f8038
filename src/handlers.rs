use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_macros::debug_handler;

use std::sync::Arc;

use crate::{dto::GenerateReplyRequest, service::ReplyService};

// Always 200: generation failures travel in the body.
#[debug_handler]
pub async fn generate(
    State(service): State<Arc<ReplyService>>,
    Json(payload): Json<GenerateReplyRequest>,
) -> Response {
    let reply = service.generate_reply(&payload).await;
    (StatusCode::OK, reply).into_response()
}

#[debug_handler]
pub async fn health_check() -> Response {
    (StatusCode::OK, "Hello from email writer!").into_response()
}
