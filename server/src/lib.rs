//! Khata Business Backend
//!
//! Backend for a small manufacturing business: owners, production
//! batches, sales, expenses and warranty claims live in an embedded
//! document database; everything derived (dashboard metrics, owner
//! profit shares, the expense forecast, assistant answers) is computed
//! in memory per request.
//!
//! # Module structure
//!
//! ```text
//! server/src/
//! ├── core/          # Config, Server, ServerState
//! ├── db/            # embedded SurrealDB, models, repositories
//! ├── services/      # share calculator, forecaster, assistant
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # errors, logging, formatting
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export common types
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use services::BusinessService;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Prepare the process environment: load `.env` and start the logger.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("RUST_LOG").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   __ __ __         __
  / //_// /  ___ _ / /_ ___ _
 / ,<  / _ \/ _ `// __// _ `/
/_/|_|/_//_/\_,_/ \__/ \_,_/

 Khata Business Backend v{}
"#,
        env!("CARGO_PKG_VERSION")
    );
}
