//! Production batch repository

use super::{BaseRepository, FETCH_LIMIT, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::{ProductionBatch, ProductionBatchCreate, ProductionBatchUpdate};
use chrono::{DateTime, Utc};
use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "production";

#[derive(Clone)]
pub struct ProductionRepository {
    base: BaseRepository,
}

impl ProductionRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<ProductionBatch>> {
        let batches: Vec<ProductionBatch> = self
            .base
            .db()
            .query(format!("SELECT * FROM production LIMIT {FETCH_LIMIT}"))
            .await?
            .take(0)?;
        Ok(batches)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<ProductionBatch>> {
        let key = strip_table_prefix(TABLE, id);
        let batch: Option<ProductionBatch> = self.base.db().select((TABLE, key)).await?;
        Ok(batch)
    }

    pub async fn create(&self, data: ProductionBatchCreate) -> RepoResult<ProductionBatch> {
        let batch = ProductionBatch {
            id: None,
            total_cost: data.total_cost,
            created_at: Some(Utc::now()),
            updated_at: None,
        };

        let created: Option<ProductionBatch> = match data.id {
            Some(key) => self.base.db().create((TABLE, key)).content(batch).await?,
            None => self.base.db().create(TABLE).content(batch).await?,
        };
        created.ok_or_else(|| RepoError::Database("Failed to create production batch".to_string()))
    }

    pub async fn update(&self, id: &str, data: ProductionBatchUpdate) -> RepoResult<ProductionBatch> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct BatchPatch {
            #[serde(skip_serializing_if = "Option::is_none")]
            total_cost: Option<f64>,
            updated_at: DateTime<Utc>,
        }

        let key = strip_table_prefix(TABLE, id).to_string();
        let updated: Option<ProductionBatch> = self
            .base
            .db()
            .update((TABLE, key))
            .merge(BatchPatch {
                total_cost: data.total_cost,
                updated_at: Utc::now(),
            })
            .await?;

        updated.ok_or_else(|| RepoError::NotFound(format!("Production batch {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let key = strip_table_prefix(TABLE, id).to_string();
        let deleted: Option<ProductionBatch> = self.base.db().delete((TABLE, key)).await?;
        Ok(deleted.is_some())
    }
}
