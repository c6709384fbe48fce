use axum::{
    Json,
    extract::{Path, State},
};
use chrono::NaiveDate;

use crate::error::AppError;
use crate::reporting::SalesReport;
use crate::state::AppState;
use crate::utils::parse_date;

type ApiResult<T> = Result<Json<T>, AppError>;

/// GET /reports - dates that have an archived report
pub async fn list_reports(State(state): State<AppState>) -> ApiResult<Vec<NaiveDate>> {
    Ok(Json(state.archiver.list_reports().await?))
}

/// GET /reports/{date} - one archived report (YYYY-MM-DD)
pub async fn get_report_by_date(
    State(state): State<AppState>,
    Path(date): Path<String>,
) -> ApiResult<SalesReport> {
    let date = parse_date(&date)?;
    Ok(Json(state.archiver.get_report_by_date(date).await?))
}
