//! Directory Server - employee directory service
//!
//! # Architecture
//!
//! - **Directory Store** (`db`): embedded SurrealDB, employee schema, repository
//! - **Directory Service** (`services`): employee operations and manager resolution
//! - **HTTP API** (`api`): routes, CORS, request ids
//!
//! # Module layout
//!
//! ```text
//! directory-server/src/
//! ├── core/          # config, state, server, process errors
//! ├── db/            # schema, models, repository
//! ├── services/      # DirectoryService, sample data
//! ├── api/           # HTTP routes and handlers
//! ├── middleware/    # request logging
//! └── utils/         # logger, validation, error re-exports
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod middleware;
pub mod services;
pub mod utils;

pub use core::{Config, Server, ServerState};
pub use services::DirectoryService;
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{LoggerGuard, init_logger_with_file};

use anyhow::Context;

/// Prepare the process: load `.env`, read the configuration, create the
/// working directory and start logging.
///
/// Keep the returned guard alive for the lifetime of the process.
pub fn setup_environment() -> anyhow::Result<(Config, LoggerGuard)> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    std::fs::create_dir_all(&config.work_dir)
        .with_context(|| format!("Failed to create work dir {}", config.work_dir))?;

    let guard = init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref())?;
    Ok((config, guard))
}

pub fn print_banner() {
    println!(
        r#"
    ____  _                __
   / __ \(_)_______  _____/ /_____  _______  __
  / / / / / ___/ _ \/ ___/ __/ __ \/ ___/ / / /
 / /_/ / / /  /  __/ /__/ /_/ /_/ / /  / /_/ /
/_____/_/_/   \___/\___/\__/\____/_/   \__, /
                                      /____/
    "#
    );
}
