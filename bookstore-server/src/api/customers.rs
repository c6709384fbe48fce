use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::db::models::{Customer, CustomerCreate};
use crate::db::store;
use crate::error::AppError;
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, AppError>;

pub async fn list_customers(State(state): State<AppState>) -> ApiResult<Vec<Customer>> {
    Ok(Json(store::customer::find_all(&state.pool).await?))
}

pub async fn create_customer(
    State(state): State<AppState>,
    Json(data): Json<CustomerCreate>,
) -> ApiResult<Customer> {
    Ok(Json(store::customer::create(&state.pool, &data).await?))
}

pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Customer> {
    Ok(Json(store::customer::find_by_id(&state.pool, id).await?))
}

pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<CustomerCreate>,
) -> ApiResult<Customer> {
    Ok(Json(store::customer::update(&state.pool, id, &data).await?))
}

pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    store::customer::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
