//! Bistro Server - front-of-house / back-of-house restaurant API
//!
//! # Module structure
//!
//! ```text
//! bistro-server/src/
//! ├── core/    # config, state, server, errors
//! ├── api/     # HTTP routes and handlers
//! ├── db/      # SQLite pool, migrations, repositories
//! └── utils/   # logger, validation, extractors
//! ```
//!
//! Waitlist, tables and orders are mutated through a handful of lifecycle
//! operations; everything else is a read projection over the store.

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

use tracing_appender::non_blocking::WorkerGuard;

// Re-export public types
pub use crate::core::{Config, Server, ServerState, build_app};
pub use db::DbService;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCode};

pub use utils::logger::init_logger_with_file;

/// Prepare the process: load `.env`, create the work and log directories,
/// install the global logger.
///
/// Hold the returned guard until exit so buffered file logs are flushed.
pub fn setup_environment(config: &Config) -> std::io::Result<Option<WorkerGuard>> {
    let logs_dir = config.logs_dir();
    std::fs::create_dir_all(&logs_dir)?;

    Ok(init_logger_with_file(
        &config.log_level,
        config.log_json,
        Some(&logs_dir),
    ))
}
