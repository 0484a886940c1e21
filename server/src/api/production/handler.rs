//! Production batch API handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::{CreatedResponse, DataResponse, DeletedResponse};
use crate::core::ServerState;
use crate::db::models::{ProductionBatch, ProductionBatchCreate, ProductionBatchUpdate};
use crate::utils::{AppError, AppResult};

/// GET /api/production
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<DataResponse<Vec<ProductionBatch>>>> {
    let batches = state.production.find_all().await?;
    Ok(Json(DataResponse::new(batches)))
}

/// GET /api/production/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<ProductionBatch>>> {
    let batch = state
        .production
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Production batch {} not found", id)))?;
    Ok(Json(DataResponse::new(batch)))
}

/// POST /api/production
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductionBatchCreate>,
) -> AppResult<Json<CreatedResponse>> {
    let batch = state.production.create(payload).await?;
    let id = batch.id.map(|r| r.to_string()).unwrap_or_default();
    Ok(Json(CreatedResponse::new(id)))
}

/// PUT /api/production/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductionBatchUpdate>,
) -> AppResult<Json<DataResponse<ProductionBatch>>> {
    let batch = state.production.update(&id, payload).await?;
    Ok(Json(DataResponse::new(batch)))
}

/// DELETE /api/production/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeletedResponse>> {
    let deleted = state.production.delete(&id).await?;
    Ok(Json(DeletedResponse {
        success: true,
        deleted,
    }))
}
