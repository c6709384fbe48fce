//! Application state

use sqlx::SqlitePool;

use crate::config::Config;
use crate::db::DbService;
use crate::db::store::RepoError;
use crate::reporting::ReportArchiveService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// SQLite connection pool
    pub pool: SqlitePool,
    /// Sales report artifact store
    pub archiver: ReportArchiveService,
}

impl AppState {
    pub async fn new(config: &Config) -> Result<Self, RepoError> {
        let db = DbService::new(&config.database_path).await?;
        let archiver = ReportArchiveService::new(&config.reports_dir);
        Ok(Self {
            pool: db.pool,
            archiver,
        })
    }
}
