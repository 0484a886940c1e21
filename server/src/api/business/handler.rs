//! Business API handlers
//!
//! Each request reads whole collections and aggregates in memory; a
//! failure anywhere surfaces as a tagged error, never partial data.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::core::ServerState;
use crate::services::{DashboardMetrics, ExpenseForecast, OwnerShareReport};
use crate::utils::AppResult;

#[derive(Serialize)]
pub struct OwnerSharesResponse {
    pub success: bool,
    #[serde(flatten)]
    pub report: OwnerShareReport,
}

#[derive(Serialize)]
pub struct PredictResponse {
    pub success: bool,
    #[serde(flatten)]
    pub forecast: ExpenseForecast,
}

#[derive(Serialize)]
pub struct DashboardResponse {
    pub success: bool,
    pub metrics: DashboardMetrics,
}

/// GET /api/business/owner-shares
pub async fn get_owner_shares(
    State(state): State<ServerState>,
) -> AppResult<Json<OwnerSharesResponse>> {
    let report = state.business.owner_shares().await?;
    Ok(Json(OwnerSharesResponse {
        success: true,
        report,
    }))
}

/// GET /api/business/expenses/predict
pub async fn predict_expenses(
    State(state): State<ServerState>,
) -> AppResult<Json<PredictResponse>> {
    let forecast = state.business.predict_expenses().await?;
    Ok(Json(PredictResponse {
        success: true,
        forecast,
    }))
}

/// GET /api/business/dashboard-metrics
pub async fn get_dashboard_metrics(
    State(state): State<ServerState>,
) -> AppResult<Json<DashboardResponse>> {
    let metrics = state.business.dashboard_metrics().await?;
    Ok(Json(DashboardResponse {
        success: true,
        metrics,
    }))
}
