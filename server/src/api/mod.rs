//! API route modules
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`auth`] - token verification (placeholder)
//! - [`business`] - owner shares, expense forecast, dashboard metrics
//! - [`reports`] - monthly report (placeholder)
//! - [`ai`] - keyword-matched assistant chat
//! - [`owners`] / [`sales`] / [`production`] / [`expenses`] /
//!   [`warranty`] - CRUD on the document collections

use axum::Router;
use axum::body::Body;
use serde::Serialize;
use http::{HeaderName, HeaderValue, Request, Response};
use tower::Service;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;

pub mod ai;
pub mod auth;
pub mod business;
pub mod expenses;
pub mod health;
pub mod owners;
pub mod production;
pub mod reports;
pub mod sales;
pub mod warranty;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Envelope for list/single reads and updates: `{success, data}`
#[derive(Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Envelope for creates: `{success, id}`
#[derive(Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub id: String,
}

impl CreatedResponse {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            success: true,
            id: id.into(),
        }
    }
}

/// Envelope for deletes: `{success, deleted}`
#[derive(Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: bool,
}

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(auth::router())
        .merge(business::router())
        .merge(reports::router())
        .merge(ai::router())
        .merge(health::router())
        // Collection CRUD
        .merge(owners::router())
        .merge(sales::router())
        .merge(production::router())
        .merge(expenses::router())
        .merge(warranty::router())
}

/// Build a fully configured application with all middleware.
///
/// The caller applies state (`build_app().with_state(state)`); the
/// HTTP server and in-process test calls share this.
pub fn build_app() -> Router<ServerState> {
    build_router()
        // CORS - the web frontend runs on another origin
        .layer(CorsLayer::permissive())
        // Gzip compress responses
        .layer(CompressionLayer::new())
        // Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Unique ID per request, propagated to the response
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static("x-request-id"),
            XRequestId,
        ))
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            "x-request-id",
        )))
}

/// Result type for oneshot API calls
pub type OneshotResult = anyhow::Result<Response<Body>>;

/// Extension trait to call the router directly, bypassing the network
/// stack. Tests drive the full middleware/handler pipeline with it.
#[async_trait::async_trait]
pub trait OneshotRouter {
    async fn oneshot(&mut self, state: &ServerState, request: Request<Body>) -> OneshotResult;
}

#[async_trait::async_trait]
impl OneshotRouter for Router<ServerState> {
    async fn oneshot(&mut self, state: &ServerState, request: Request<Body>) -> OneshotResult {
        let mut svc = self.clone().with_state(state.clone());
        let response = svc.call(request).await?;
        Ok(response)
    }
}
