//! Assistant API handlers

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::services::assistant::{self, BusinessSnapshot, OwnerBrief};
use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub success: bool,
    pub response: String,
    pub language: &'static str,
}

/// POST /api/ai/chat
///
/// Builds the metrics snapshot, merges in owner briefs and hands both
/// to the keyword matcher. A share-calculation failure is non-fatal:
/// the assistant answers with an empty owner list instead.
pub async fn chat(
    State(state): State<ServerState>,
    Json(payload): Json<ChatRequest>,
) -> AppResult<Json<ChatResponse>> {
    if payload.message.is_empty() {
        return Err(AppError::validation("Message is required"));
    }

    let metrics = state.business.dashboard_metrics().await?;

    let owners = match state.business.owner_shares().await {
        Ok(report) => report
            .shares
            .into_iter()
            .map(|share| OwnerBrief {
                name: share.name,
                investment: share.investment_amount,
                percentage: share.ownership_percentage,
            })
            .collect(),
        Err(e) => {
            tracing::warn!("Owner shares unavailable for chat: {}", e);
            Vec::new()
        }
    };

    let snapshot = BusinessSnapshot { metrics, owners };
    let response = assistant::generate_response(&payload.message, &snapshot);
    let language = assistant::detect_language(&payload.message).as_str();

    Ok(Json(ChatResponse {
        success: true,
        response,
        language,
    }))
}
