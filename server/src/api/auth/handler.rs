//! Auth API handlers

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::utils::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct VerifyTokenRequest {
    #[serde(default)]
    pub token: String,
}

#[derive(Debug, Serialize)]
pub struct VerifyTokenResponse {
    pub success: bool,
    pub message: &'static str,
    pub uid: &'static str,
}

/// POST /api/auth/verify-token
///
/// Placeholder: real verification is out of scope, any non-empty token
/// passes.
pub async fn verify_token(
    Json(payload): Json<VerifyTokenRequest>,
) -> AppResult<Json<VerifyTokenResponse>> {
    if payload.token.is_empty() {
        return Err(AppError::validation("Token is required"));
    }

    Ok(Json(VerifyTokenResponse {
        success: true,
        message: "Token verified",
        uid: "user_id_from_token",
    }))
}
