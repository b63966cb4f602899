use std::time::Instant;

use crate::core::{Config, Result};
use crate::db::DbService;

/// State shared by every request handler
///
/// Cheap to clone: the pool is reference counted.
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
    pub started_at: Instant,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        Self {
            config,
            db,
            started_at: Instant::now(),
        }
    }

    /// Create the work dir, open the configured database and apply
    /// migrations
    pub async fn initialize(config: &Config) -> Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;

        let db = DbService::new(&config.database_url, config.db_max_connections).await?;
        tracing::info!(database_url = %config.database_url, "Database ready");

        Ok(Self::new(config.clone(), db))
    }

    pub fn pool(&self) -> &sqlx::SqlitePool {
        &self.db.pool
    }

    pub fn uptime_seconds(&self) -> u64 {
        self.started_at.elapsed().as_secs()
    }
}
