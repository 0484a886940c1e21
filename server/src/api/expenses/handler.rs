//! Expense API handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::{CreatedResponse, DataResponse, DeletedResponse};
use crate::core::ServerState;
use crate::db::models::{Expense, ExpenseCreate, ExpenseUpdate};
use crate::utils::{AppError, AppResult};

/// GET /api/expenses
pub async fn list(
    State(state): State<ServerState>,
) -> AppResult<Json<DataResponse<Vec<Expense>>>> {
    let expenses = state.expenses.find_all().await?;
    Ok(Json(DataResponse::new(expenses)))
}

/// GET /api/expenses/by-category/:category
pub async fn list_by_category(
    State(state): State<ServerState>,
    Path(category): Path<String>,
) -> AppResult<Json<DataResponse<Vec<Expense>>>> {
    let expenses = state.expenses.find_by_category(&category).await?;
    Ok(Json(DataResponse::new(expenses)))
}

/// GET /api/expenses/:id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Expense>>> {
    let expense = state
        .expenses
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Expense {} not found", id)))?;
    Ok(Json(DataResponse::new(expense)))
}

/// POST /api/expenses
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ExpenseCreate>,
) -> AppResult<Json<CreatedResponse>> {
    let expense = state.expenses.create(payload).await?;
    let id = expense.id.map(|r| r.to_string()).unwrap_or_default();
    Ok(Json(CreatedResponse::new(id)))
}

/// PUT /api/expenses/:id
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ExpenseUpdate>,
) -> AppResult<Json<DataResponse<Expense>>> {
    let expense = state.expenses.update(&id, payload).await?;
    Ok(Json(DataResponse::new(expense)))
}

/// DELETE /api/expenses/:id
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeletedResponse>> {
    let deleted = state.expenses.delete(&id).await?;
    Ok(Json(DeletedResponse {
        success: true,
        deleted,
    }))
}
