//! Business API module (derived financial data)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/business", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/owner-shares", get(handler::get_owner_shares))
        .route("/expenses/predict", get(handler::predict_expenses))
        .route("/dashboard-metrics", get(handler::get_dashboard_metrics))
}
