//! Assistant API module

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/ai", routes())
}

fn routes() -> Router<ServerState> {
    Router::new().route("/chat", post(handler::chat))
}
