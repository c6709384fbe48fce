//! Report Scheduler
//!
//! Single long-lived background task: sleeps for a fixed period, then runs
//! the aggregator over the elapsed window and archives the result. A failed
//! cycle is logged and never stops the next one. Cancellation is observed
//! while sleeping; a cycle already in flight runs to completion first.

use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::{ReportArchiveService, SalesReportService};
use crate::utils::now_millis;

pub struct ReportScheduler {
    service: SalesReportService,
    archiver: ReportArchiveService,
    period: Duration,
    shutdown: CancellationToken,
}

impl ReportScheduler {
    pub fn new(
        service: SalesReportService,
        archiver: ReportArchiveService,
        period: Duration,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            service,
            archiver,
            period,
            shutdown,
        }
    }

    /// Main loop: wait one period or shutdown, whichever comes first.
    pub async fn run(self) {
        tracing::info!(
            period_secs = self.period.as_secs(),
            "Sales report scheduler started"
        );

        loop {
            tokio::select! {
                _ = tokio::time::sleep(self.period) => {}
                _ = self.shutdown.cancelled() => {
                    tracing::info!("Sales report scheduler received shutdown signal");
                    return;
                }
            }

            self.run_cycle().await;
        }
    }

    /// One aggregation + archive cycle. Errors are logged and suppressed so
    /// a bad cycle never takes down the process or the next cycle.
    async fn run_cycle(&self) {
        tracing::info!("Starting sales report generation");

        // Window: one period back from the cycle trigger time
        let to = now_millis();
        let from = to - self.period.as_millis() as i64;

        let report = match self.service.generate_sales_report(from, to).await {
            Ok(report) => report,
            Err(e) => {
                tracing::error!(error = %e, "Failed to generate sales report");
                return;
            }
        };

        match self.archiver.save_report(&report).await {
            Ok(path) => {
                tracing::info!(
                    orders = report.total_orders,
                    revenue = report.total_revenue,
                    path = %path.display(),
                    "Sales report saved"
                );
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to save sales report");
            }
        }
    }
}
