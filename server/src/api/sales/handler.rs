//! Sale API handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::{CreatedResponse, DataResponse, DeletedResponse};
use crate::core::ServerState;
use crate::db::models::{Sale, SaleCreate, SaleUpdate};
use crate::utils::{AppError, AppResult};

/// GET /api/sales
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<DataResponse<Vec<Sale>>>> {
    let sales = state.sales.find_all().await?;
    Ok(Json(DataResponse::new(sales)))
}

/// GET /api/sales/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Sale>>> {
    let sale = state
        .sales
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Sale {} not found", id)))?;
    Ok(Json(DataResponse::new(sale)))
}

/// POST /api/sales
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<SaleCreate>,
) -> AppResult<Json<CreatedResponse>> {
    let sale = state.sales.create(payload).await?;
    let id = sale.id.map(|r| r.to_string()).unwrap_or_default();
    Ok(Json(CreatedResponse::new(id)))
}

/// PUT /api/sales/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<SaleUpdate>,
) -> AppResult<Json<DataResponse<Sale>>> {
    let sale = state.sales.update(&id, payload).await?;
    Ok(Json(DataResponse::new(sale)))
}

/// DELETE /api/sales/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeletedResponse>> {
    let deleted = state.sales.delete(&id).await?;
    Ok(Json(DeletedResponse {
        success: true,
        deleted,
    }))
}
