use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::db::models::{Author, AuthorCreate};
use crate::db::store;
use crate::error::AppError;
use crate::state::AppState;

type ApiResult<T> = Result<Json<T>, AppError>;

pub async fn list_authors(State(state): State<AppState>) -> ApiResult<Vec<Author>> {
    Ok(Json(store::author::find_all(&state.pool).await?))
}

pub async fn create_author(
    State(state): State<AppState>,
    Json(data): Json<AuthorCreate>,
) -> ApiResult<Author> {
    Ok(Json(store::author::create(&state.pool, &data).await?))
}

pub async fn get_author(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Author> {
    Ok(Json(store::author::find_by_id(&state.pool, id).await?))
}

pub async fn update_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(data): Json<AuthorCreate>,
) -> ApiResult<Author> {
    Ok(Json(store::author::update(&state.pool, id, &data).await?))
}

pub async fn delete_author(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    store::author::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
