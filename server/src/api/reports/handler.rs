//! Reports API handlers

use axum::{Json, extract::Query};
use serde::{Deserialize, Serialize};

use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct MonthlyReportQuery {
    pub month: Option<String>,
    pub year: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyReportResponse {
    pub success: bool,
    pub month: String,
    pub year: String,
    pub total_sales: f64,
    pub total_expenses: f64,
    pub total_production: f64,
    pub profit_loss: f64,
}

/// GET /api/reports/monthly?month=&year=
///
/// Placeholder totals until per-month reporting lands.
pub async fn get_monthly_report(
    Query(query): Query<MonthlyReportQuery>,
) -> AppResult<Json<MonthlyReportResponse>> {
    let month = query
        .month
        .filter(|m| !m.is_empty())
        .ok_or_else(|| AppError::validation("Month and year are required"))?;
    let year = query
        .year
        .filter(|y| !y.is_empty())
        .ok_or_else(|| AppError::validation("Month and year are required"))?;

    Ok(Json(MonthlyReportResponse {
        success: true,
        month,
        year,
        total_sales: 100_000.0,
        total_expenses: 50_000.0,
        total_production: 30_000.0,
        profit_loss: 20_000.0,
    }))
}
