//! Database module
//!
//! Owns the embedded SurrealDB instance. Every entity lives in its own
//! SCHEMALESS table and is treated as a flat document: there are no
//! relations and no referential-integrity rules, any joins happen in
//! memory at query time.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

use crate::utils::AppError;

const NAMESPACE: &str = "khata";
const DATABASE: &str = "business";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database under `dir` and select the
    /// application namespace.
    pub async fn new(dir: &Path) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(dir)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!("Database opened at {:?} (ns={}, db={})", dir, NAMESPACE, DATABASE);

        Ok(Self { db })
    }
}
