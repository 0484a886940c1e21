//! Warranty claim API handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::{CreatedResponse, DataResponse, DeletedResponse};
use crate::core::ServerState;
use crate::db::models::{WarrantyClaim, WarrantyClaimCreate, WarrantyClaimUpdate};
use crate::utils::{AppError, AppResult};

/// GET /api/warranty
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<DataResponse<Vec<WarrantyClaim>>>> {
    let claims = state.warranty.find_all().await?;
    Ok(Json(DataResponse::new(claims)))
}

/// GET /api/warranty/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<WarrantyClaim>>> {
    let claim = state
        .warranty
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Warranty claim {} not found", id)))?;
    Ok(Json(DataResponse::new(claim)))
}

/// POST /api/warranty
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<WarrantyClaimCreate>,
) -> AppResult<Json<CreatedResponse>> {
    let claim = state.warranty.create(payload).await?;
    let id = claim.id.map(|r| r.to_string()).unwrap_or_default();
    Ok(Json(CreatedResponse::new(id)))
}

/// PUT /api/warranty/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<WarrantyClaimUpdate>,
) -> AppResult<Json<DataResponse<WarrantyClaim>>> {
    let claim = state.warranty.update(&id, payload).await?;
    Ok(Json(DataResponse::new(claim)))
}

/// DELETE /api/warranty/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeletedResponse>> {
    let deleted = state.warranty.delete(&id).await?;
    Ok(Json(DeletedResponse {
        success: true,
        deleted,
    }))
}
