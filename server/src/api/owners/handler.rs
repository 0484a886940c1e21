//! Owner API handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::{CreatedResponse, DataResponse, DeletedResponse};
use crate::core::ServerState;
use crate::db::models::{Owner, OwnerCreate, OwnerUpdate};
use crate::utils::{AppError, AppResult};

/// GET /api/owners
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<DataResponse<Vec<Owner>>>> {
    let owners = state.owners.find_all().await?;
    Ok(Json(DataResponse::new(owners)))
}

/// GET /api/owners/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Owner>>> {
    let owner = state
        .owners
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Owner {} not found", id)))?;
    Ok(Json(DataResponse::new(owner)))
}

/// POST /api/owners
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<OwnerCreate>,
) -> AppResult<Json<CreatedResponse>> {
    let owner = state.owners.create(payload).await?;
    let id = owner.id.map(|r| r.to_string()).unwrap_or_default();
    Ok(Json(CreatedResponse::new(id)))
}

/// PUT /api/owners/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<OwnerUpdate>,
) -> AppResult<Json<DataResponse<Owner>>> {
    let owner = state.owners.update(&id, payload).await?;
    Ok(Json(DataResponse::new(owner)))
}

/// DELETE /api/owners/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeletedResponse>> {
    let deleted = state.owners.delete(&id).await?;
    Ok(Json(DeletedResponse {
        success: true,
        deleted,
    }))
}
