use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::db::models::{Book, BookCreate};
use crate::db::store;
use crate::error::AppError;
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, AppError>;

pub async fn list_books(State(state): State<AppState>) -> ApiResult<Vec<Book>> {
    Ok(Json(store::book::find_all(&state.pool).await?))
}

pub async fn create_book(
    State(state): State<AppState>,
    Json(data): Json<BookCreate>,
) -> ApiResult<Book> {
    Ok(Json(store::book::create(&state.pool, &data).await?))
}

pub async fn get_book(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Book> {
    Ok(Json(store::book::find_by_id(&state.pool, id).await?))
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<BookCreate>,
) -> ApiResult<Book> {
    Ok(Json(store::book::update(&state.pool, id, &data).await?))
}

pub async fn delete_book(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    store::book::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
