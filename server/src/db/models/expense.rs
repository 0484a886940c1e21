//! Expense model

use super::serde_helpers;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type ExpenseId = RecordId;

/// A categorized expense entry. `created_at` drives the monthly
/// bucketing of the forecaster.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expense {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<ExpenseId>,
    #[serde(default)]
    pub amount: f64,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

fn default_category() -> String {
    "general".to_string()
}

/// Expense for creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseCreate {
    #[serde(default)]
    pub id: Option<String>,
    pub amount: f64,
    #[serde(default = "default_category")]
    pub category: String,
}

/// Expense for update
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseUpdate {
    pub amount: Option<f64>,
    pub category: Option<String>,
}
