use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

use crate::db::models::{Order, OrderCreate, OrderStatusUpdate};
use crate::db::store;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::{day_end_millis, day_start_millis, parse_date};

type ApiResult<T> = Result<Json<T>, AppError>;

/// Optional inclusive date bounds (YYYY-MM-DD) for order listing
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub from: Option<String>,
    pub to: Option<String>,
}

/// GET /orders - all orders, or the ones inside `?from=..&to=..`
pub async fn list_orders(
    State(state): State<AppState>,
    Query(range): Query<DateRangeQuery>,
) -> ApiResult<Vec<Order>> {
    let orders = match (range.from, range.to) {
        (Some(from), Some(to)) => {
            let from = day_start_millis(parse_date(&from)?);
            let to = day_end_millis(parse_date(&to)?);
            store::order::find_by_date_range(&state.pool, from, to).await?
        }
        (None, None) => store::order::find_all(&state.pool).await?,
        _ => {
            return Err(AppError::Validation(
                "Date range requires both from and to".into(),
            ));
        }
    };
    Ok(Json(orders))
}

pub async fn create_order(
    State(state): State<AppState>,
    Json(data): Json<OrderCreate>,
) -> ApiResult<Order> {
    let order = store::order::create(&state.pool, data).await?;
    Ok(Json(order))
}

pub async fn get_order(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Order> {
    Ok(Json(store::order::get(&state.pool, id).await?))
}

pub async fn update_order_status(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<OrderStatusUpdate>,
) -> ApiResult<Order> {
    Ok(Json(
        store::order::update_status(&state.pool, id, &data.status).await?,
    ))
}

pub async fn delete_order(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    store::order::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
