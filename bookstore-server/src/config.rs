//! Server configuration

use crate::reporting::aggregator::DEFAULT_TOP_N;

/// Bookstore server configuration
///
/// Every setting can be overridden through an environment variable:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | DATABASE_PATH | bookstore.db | SQLite database file |
/// | HTTP_PORT | 8080 | HTTP API port |
/// | REPORTS_DIR | reports | Sales report artifact directory |
/// | REPORT_PERIOD_SECS | 86400 | Period of the report job (seconds) |
/// | REPORT_TOP_N | 3 | Best sellers retained per report |
/// | ENVIRONMENT | development | Runtime environment |
#[derive(Debug, Clone)]
pub struct Config {
    pub database_path: String,
    pub http_port: u16,
    pub reports_dir: String,
    pub report_period_secs: u64,
    pub report_top_n: usize,
    /// Environment: development | staging | production
    pub environment: String,
}

impl Config {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        Self {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "bookstore.db".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            reports_dir: std::env::var("REPORTS_DIR").unwrap_or_else(|_| "reports".into()),
            report_period_secs: std::env::var("REPORT_PERIOD_SECS")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(86_400),
            report_top_n: std::env::var("REPORT_TOP_N")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_TOP_N),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
        }
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
