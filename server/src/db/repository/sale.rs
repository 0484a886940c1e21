//! Sale repository

use super::{BaseRepository, FETCH_LIMIT, RepoError, RepoResult, strip_table_prefix};
use crate::db::models::{Sale, SaleCreate, SaleUpdate};
use chrono::{DateTime, Utc};
use serde::Serialize;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "sale";

#[derive(Clone)]
pub struct SaleRepository {
    base: BaseRepository,
}

impl SaleRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_all(&self) -> RepoResult<Vec<Sale>> {
        let sales: Vec<Sale> = self
            .base
            .db()
            .query(format!("SELECT * FROM sale LIMIT {FETCH_LIMIT}"))
            .await?
            .take(0)?;
        Ok(sales)
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Sale>> {
        let key = strip_table_prefix(TABLE, id);
        let sale: Option<Sale> = self.base.db().select((TABLE, key)).await?;
        Ok(sale)
    }

    pub async fn create(&self, data: SaleCreate) -> RepoResult<Sale> {
        let sale = Sale {
            id: None,
            total_amount: data.total_amount,
            created_at: Some(Utc::now()),
            updated_at: None,
        };

        let created: Option<Sale> = match data.id {
            Some(key) => self.base.db().create((TABLE, key)).content(sale).await?,
            None => self.base.db().create(TABLE).content(sale).await?,
        };
        created.ok_or_else(|| RepoError::Database("Failed to create sale".to_string()))
    }

    pub async fn update(&self, id: &str, data: SaleUpdate) -> RepoResult<Sale> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct SalePatch {
            #[serde(skip_serializing_if = "Option::is_none")]
            total_amount: Option<f64>,
            updated_at: DateTime<Utc>,
        }

        let key = strip_table_prefix(TABLE, id).to_string();
        let updated: Option<Sale> = self
            .base
            .db()
            .update((TABLE, key))
            .merge(SalePatch {
                total_amount: data.total_amount,
                updated_at: Utc::now(),
            })
            .await?;

        updated.ok_or_else(|| RepoError::NotFound(format!("Sale {} not found", id)))
    }

    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let key = strip_table_prefix(TABLE, id).to_string();
        let deleted: Option<Sale> = self.base.db().delete((TABLE, key)).await?;
        Ok(deleted.is_some())
    }
}
