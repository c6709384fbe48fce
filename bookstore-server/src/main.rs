//! bookstore-server - order management and sales reporting service
//!
//! Long-running service that:
//! - Persists orders (header + line items, transactionally) against SQLite
//! - Serves catalog/customer/order CRUD over HTTP
//! - Periodically aggregates sales and archives a daily report artifact

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use bookstore_server::reporting::{ReportScheduler, SalesReportService};
use bookstore_server::{AppState, Config, api};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookstore_server=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env();
    tracing::info!("Starting bookstore-server (env: {})", config.environment);

    let state = AppState::new(&config).await?;

    // Background sales report job
    let shutdown = CancellationToken::new();
    let scheduler = ReportScheduler::new(
        SalesReportService::new(state.pool.clone(), config.report_top_n),
        state.archiver.clone(),
        Duration::from_secs(config.report_period_secs),
        shutdown.clone(),
    );
    let scheduler_handle = tokio::spawn(scheduler.run());

    let app = api::create_router(state);

    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = tokio::net::TcpListener::bind(&http_addr).await?;
    tracing::info!("bookstore-server HTTP listening on {http_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // Stop the report job: a cycle already in flight finishes first, a
    // sleeping scheduler exits without starting a new one
    tracing::info!("Shutting down");
    shutdown.cancel();
    let _ = scheduler_handle.await;

    tracing::info!("bookstore-server stopped cleanly");
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
