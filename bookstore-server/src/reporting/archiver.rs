//! Report Archiver
//!
//! Serializes sales reports to pretty-printed JSON artifacts, one per
//! calendar day of generation (`sales_report_YYYY-MM-DD.json`). A second
//! save on the same day overwrites the first. Artifacts are immutable once
//! written and retrieved read-only.

use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use thiserror::Error;
use tokio::fs;

use super::SalesReport;
use crate::utils::date_of_millis;

const REPORT_FILE_PREFIX: &str = "sales_report_";
const REPORT_FILE_EXT: &str = ".json";

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Report for {0} not found")]
    NotFound(NaiveDate),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Corrupt report artifact: {0}")]
    Corrupt(String),
}

/// Report artifact store rooted at a reports directory
#[derive(Clone)]
pub struct ReportArchiveService {
    reports_dir: PathBuf,
}

impl ReportArchiveService {
    pub fn new(reports_dir: impl Into<PathBuf>) -> Self {
        Self {
            reports_dir: reports_dir.into(),
        }
    }

    pub fn reports_dir(&self) -> &Path {
        &self.reports_dir
    }

    fn artifact_path(&self, date: NaiveDate) -> PathBuf {
        self.reports_dir
            .join(format!("{REPORT_FILE_PREFIX}{date}{REPORT_FILE_EXT}"))
    }

    /// Write a report artifact, creating the reports directory if absent.
    ///
    /// The artifact date is the UTC calendar day of `generated_at`; a save
    /// for an already-archived day overwrites it (last-write-wins).
    pub async fn save_report(&self, report: &SalesReport) -> Result<PathBuf, ReportError> {
        fs::create_dir_all(&self.reports_dir).await?;

        let date = date_of_millis(report.generated_at);
        let path = self.artifact_path(date);

        let bytes = serde_json::to_vec_pretty(report).map_err(io::Error::other)?;
        fs::write(&path, bytes).await?;

        Ok(path)
    }

    /// Dates that have an archived report, ascending.
    ///
    /// A missing reports directory means no reports yet, not an error.
    pub async fn list_reports(&self) -> Result<Vec<NaiveDate>, ReportError> {
        let mut entries = match fs::read_dir(&self.reports_dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut dates = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let name = entry.file_name().to_string_lossy().into_owned();
            let date = name
                .strip_prefix(REPORT_FILE_PREFIX)
                .and_then(|rest| rest.strip_suffix(REPORT_FILE_EXT))
                .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());
            if let Some(date) = date {
                dates.push(date);
            }
        }

        dates.sort();
        Ok(dates)
    }

    /// Read back the artifact for one generation date.
    pub async fn get_report_by_date(&self, date: NaiveDate) -> Result<SalesReport, ReportError> {
        let path = self.artifact_path(date);

        let raw = match fs::read(&path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(ReportError::NotFound(date));
            }
            Err(e) => return Err(e.into()),
        };

        serde_json::from_slice(&raw).map_err(|e| ReportError::Corrupt(e.to_string()))
    }
}
