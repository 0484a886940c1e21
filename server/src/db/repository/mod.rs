//! Repository module
//!
//! CRUD access to the document collections. One repository per
//! collection; all of them share [`BaseRepository`] and the
//! [`RepoError`] taxonomy.

pub mod expense;
pub mod owner;
pub mod production;
pub mod sale;
pub mod warranty;

pub use expense::ExpenseRepository;
pub use owner::OwnerRepository;
pub use production::ProductionRepository;
pub use sale::SaleRepository;
pub use warranty::WarrantyRepository;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Whole-collection reads are capped at this many documents.
/// Volumes are assumed small; this is a known scalability ceiling.
pub const FETCH_LIMIT: usize = 100;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Strip a `"table:"` prefix so handlers can pass either the bare key
/// or the full `table:key` form.
pub(crate) fn strip_table_prefix<'a>(table: &str, id: &'a str) -> &'a str {
    id.strip_prefix(table)
        .and_then(|rest| rest.strip_prefix(':'))
        .unwrap_or(id)
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_prefix_accepts_both_forms() {
        assert_eq!(strip_table_prefix("owner", "owner:abc"), "abc");
        assert_eq!(strip_table_prefix("owner", "abc"), "abc");
        // a different table's prefix is left alone
        assert_eq!(strip_table_prefix("owner", "sale:abc"), "sale:abc");
    }
}
