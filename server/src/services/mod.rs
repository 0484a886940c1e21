//! Business services
//!
//! - [`business`] — owner share calculator and dashboard aggregation
//! - [`forecast`] — next-month expense forecast (one-variable OLS)
//! - [`assistant`] — keyword-matched bilingual assistant

pub mod assistant;
pub mod business;
pub mod forecast;

pub use assistant::{BusinessSnapshot, Language, OwnerBrief};
pub use business::{BusinessService, DashboardMetrics, OwnerShare, OwnerShareReport};
pub use forecast::{Confidence, ExpenseForecast};
