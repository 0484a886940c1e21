//! Entity documents stored in the five collections.
//!
//! Field names are camelCase both in the store and on the wire.
//! `createdAt` is stamped on insert, `updatedAt` on update; neither is
//! accepted from callers.

pub mod serde_helpers;

mod expense;
mod owner;
mod production;
mod sale;
mod warranty;

pub use expense::{Expense, ExpenseCreate, ExpenseUpdate};
pub use owner::{Owner, OwnerCreate, OwnerUpdate};
pub use production::{ProductionBatch, ProductionBatchCreate, ProductionBatchUpdate};
pub use sale::{Sale, SaleCreate, SaleUpdate};
pub use warranty::{WarrantyClaim, WarrantyClaimCreate, WarrantyClaimUpdate};
