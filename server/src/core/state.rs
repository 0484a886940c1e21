use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{
    ExpenseRepository, OwnerRepository, ProductionRepository, SaleRepository, WarrantyRepository,
};
use crate::services::BusinessService;
use crate::utils::AppError;

/// Shared server state, one instance per process.
///
/// Holds the configuration, the database handle and every collaborator
/// built on top of it. All collaborators receive the handle at
/// construction time; nothing reaches for a global. Cloning is cheap —
/// the database handle is internally reference counted.
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded document database (SurrealDB)
    pub db: Surreal<Db>,
    /// Owner collection access
    pub owners: OwnerRepository,
    /// Sale collection access
    pub sales: SaleRepository,
    /// Production batch collection access
    pub production: ProductionRepository,
    /// Expense collection access
    pub expenses: ExpenseRepository,
    /// Warranty claim collection access
    pub warranty: WarrantyRepository,
    /// Aggregations over the collections above
    pub business: BusinessService,
}

impl ServerState {
    /// Open the database under `config.database_dir()` and wire up all
    /// collaborators.
    pub async fn initialize(config: &Config) -> Result<Self, AppError> {
        let db_dir = config.database_dir();
        std::fs::create_dir_all(&db_dir)
            .map_err(|e| AppError::Internal(format!("Failed to create {:?}: {e}", db_dir)))?;

        let db_service = DbService::new(&db_dir).await?;
        Ok(Self::with_db(config.clone(), db_service.db))
    }

    /// Build state around an already-open database handle.
    ///
    /// Tests use this with a temp-dir database.
    pub fn with_db(config: Config, db: Surreal<Db>) -> Self {
        let owners = OwnerRepository::new(db.clone());
        let sales = SaleRepository::new(db.clone());
        let production = ProductionRepository::new(db.clone());
        let expenses = ExpenseRepository::new(db.clone());
        let warranty = WarrantyRepository::new(db.clone());

        let business = BusinessService::new(
            owners.clone(),
            sales.clone(),
            production.clone(),
            expenses.clone(),
            warranty.clone(),
        );

        Self {
            config,
            db,
            owners,
            sales,
            production,
            expenses,
            warranty,
            business,
        }
    }
}
