//! Owner repository

use super::{BaseRepository, FETCH_LIMIT, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::{Owner, OwnerCreate, OwnerUpdate};
use chrono::{DateTime, Utc};
use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "owner";

#[derive(Clone)]
pub struct OwnerRepository {
    base: BaseRepository,
}

impl OwnerRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Fetch all owners (bounded by the fixed page limit).
    pub async fn find_all(&self) -> RepoResult<Vec<Owner>> {
        let owners: Vec<Owner> = self
            .base
            .db()
            .query(format!("SELECT * FROM owner LIMIT {FETCH_LIMIT}"))
            .await?
            .take(0)?;
        Ok(owners)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Owner>> {
        let key = strip_table_prefix(TABLE, id);
        let owner: Option<Owner> = self.base.db().select((TABLE, key)).await?;
        Ok(owner)
    }

    /// Create an owner; stamps `createdAt`. The caller may supply the
    /// record key through `data.id`.
    pub async fn create(&self, data: OwnerCreate) -> RepoResult<Owner> {
        validate(&data.name, data.investment_amount)?;

        let owner = Owner {
            id: None,
            name: data.name,
            email: data.email,
            investment_amount: data.investment_amount,
            created_at: Some(Utc::now()),
            updated_at: None,
        };

        let created: Option<Owner> = match data.id {
            Some(key) => self.base.db().create((TABLE, key)).content(owner).await?,
            None => self.base.db().create(TABLE).content(owner).await?,
        };
        created.ok_or_else(|| RepoError::Database("Failed to create owner".to_string()))
    }

    /// Merge-update an owner; stamps `updatedAt`.
    pub async fn update(&self, id: &str, data: OwnerUpdate) -> RepoResult<Owner> {
        if let Some(investment) = data.investment_amount
            && investment < 0.0
        {
            return Err(RepoError::Validation(
                "investmentAmount must be >= 0".to_string(),
            ));
        }

        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct OwnerPatch {
            #[serde(skip_serializing_if = "Option::is_none")]
            name: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            email: Option<String>,
            #[serde(skip_serializing_if = "Option::is_none")]
            investment_amount: Option<f64>,
            updated_at: DateTime<Utc>,
        }

        let key = strip_table_prefix(TABLE, id).to_string();
        let updated: Option<Owner> = self
            .base
            .db()
            .update((TABLE, key))
            .merge(OwnerPatch {
                name: data.name,
                email: data.email,
                investment_amount: data.investment_amount,
                updated_at: Utc::now(),
            })
            .await?;

        updated.ok_or_else(|| RepoError::NotFound(format!("Owner {} not found", id)))
    }

    /// Delete by id; returns whether a record existed.
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let key = strip_table_prefix(TABLE, id).to_string();
        let deleted: Option<Owner> = self.base.db().delete((TABLE, key)).await?;
        Ok(deleted.is_some())
    }
}

fn validate(name: &str, investment: f64) -> RepoResult<()> {
    if name.trim().is_empty() {
        return Err(RepoError::Validation("name is required".to_string()));
    }
    if investment < 0.0 {
        return Err(RepoError::Validation(
            "investmentAmount must be >= 0".to_string(),
        ));
    }
    Ok(())
}
