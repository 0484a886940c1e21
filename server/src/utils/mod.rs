//! Shared utilities: errors, results, logging, amount formatting.

pub mod error;
pub mod fmt;
pub mod logger;
pub mod result;

pub use error::AppError;
pub use fmt::{format_taka, round2};
pub use logger::{init_logger, init_logger_with_file};
pub use result::AppResult;
