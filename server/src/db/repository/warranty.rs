//! Warranty claim repository

use super::{BaseRepository, FETCH_LIMIT, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::{WarrantyClaim, WarrantyClaimCreate, WarrantyClaimUpdate};
use chrono::{DateTime, Utc};
use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "warranty";

#[derive(Clone)]
pub struct WarrantyRepository {
    base: BaseRepository,
}

impl WarrantyRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<WarrantyClaim>> {
        let claims: Vec<WarrantyClaim> = self
            .base
            .db()
            .query(format!("SELECT * FROM warranty LIMIT {FETCH_LIMIT}"))
            .await?
            .take(0)?;
        Ok(claims)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<WarrantyClaim>> {
        let key = strip_table_prefix(TABLE, id);
        let claim: Option<WarrantyClaim> = self.base.db().select((TABLE, key)).await?;
        Ok(claim)
    }

    pub async fn create(&self, data: WarrantyClaimCreate) -> RepoResult<WarrantyClaim> {
        let claim = WarrantyClaim {
            id: None,
            replaced: data.replaced,
            created_at: Some(Utc::now()),
            updated_at: None,
        };

        let created: Option<WarrantyClaim> = match data.id {
            Some(key) => self.base.db().create((TABLE, key)).content(claim).await?,
            None => self.base.db().create(TABLE).content(claim).await?,
        };
        created.ok_or_else(|| RepoError::Database("Failed to create warranty claim".to_string()))
    }

    pub async fn update(&self, id: &str, data: WarrantyClaimUpdate) -> RepoResult<WarrantyClaim> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ClaimPatch {
            #[serde(skip_serializing_if = "Option::is_none")]
            replaced: Option<bool>,
            updated_at: DateTime<Utc>,
        }

        let key = strip_table_prefix(TABLE, id).to_string();
        let updated: Option<WarrantyClaim> = self
            .base
            .db()
            .update((TABLE, key))
            .merge(ClaimPatch {
                replaced: data.replaced,
                updated_at: Utc::now(),
            })
            .await?;

        updated.ok_or_else(|| RepoError::NotFound(format!("Warranty claim {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let key = strip_table_prefix(TABLE, id).to_string();
        let deleted: Option<WarrantyClaim> = self.base.db().delete((TABLE, key)).await?;
        Ok(deleted.is_some())
    }
}
