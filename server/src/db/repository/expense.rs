//! Expense repository

use super::{BaseRepository, FETCH_LIMIT, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::{Expense, ExpenseCreate, ExpenseUpdate};
use chrono::{DateTime, Utc};
use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "expense";

#[derive(Clone)]
pub struct ExpenseRepository {
    base: BaseRepository,
}

impl ExpenseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Expense>> {
        let expenses: Vec<Expense> = self
            .base
            .db()
            .query(format!("SELECT * FROM expense LIMIT {FETCH_LIMIT}"))
            .await?
            .take(0)?;
        Ok(expenses)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Expense>> {
        let key = strip_table_prefix(TABLE, id);
        let expense: Option<Expense> = self.base.db().select((TABLE, key)).await?;
        Ok(expense)
    }

    /// All expenses in one category.
    pub async fn find_by_category(&self, category: &str) -> RepoResult<Vec<Expense>> {
        let category = category.to_string();
        let expenses: Vec<Expense> = self
            .base
            .db()
            .query(format!(
                "SELECT * FROM expense WHERE category = $category LIMIT {FETCH_LIMIT}"
            ))
            .bind(("category", category))
            .await?
            .take(0)?;
        Ok(expenses)
    }

    pub async fn create(&self, data: ExpenseCreate) -> RepoResult<Expense> {
        if data.amount < 0.0 {
            return Err(RepoError::Validation("amount must be >= 0".to_string()));
        }

        let expense = Expense {
            id: None,
            amount: data.amount,
            category: data.category,
            created_at: Some(Utc::now()),
            updated_at: None,
        };

        let created: Option<Expense> = match data.id {
            Some(key) => self.base.db().create((TABLE, key)).content(expense).await?,
            None => self.base.db().create(TABLE).content(expense).await?,
        };
        created.ok_or_else(|| RepoError::Database("Failed to create expense".to_string()))
    }

    pub async fn update(&self, id: &str, data: ExpenseUpdate) -> RepoResult<Expense> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ExpensePatch {
            #[serde(skip_serializing_if = "Option::is_none")]
            amount: Option<f64>,
            #[serde(skip_serializing_if = "Option::is_none")]
            category: Option<String>,
            updated_at: DateTime<Utc>,
        }

        let key = strip_table_prefix(TABLE, id).to_string();
        let updated: Option<Expense> = self
            .base
            .db()
            .update((TABLE, key))
            .merge(ExpensePatch {
                amount: data.amount,
                category: data.category,
                updated_at: Utc::now(),
            })
            .await?;

        updated.ok_or_else(|| RepoError::NotFound(format!("Expense {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let key = strip_table_prefix(TABLE, id).to_string();
        let deleted: Option<Expense> = self.base.db().delete((TABLE, key)).await?;
        Ok(deleted.is_some())
    }
}
