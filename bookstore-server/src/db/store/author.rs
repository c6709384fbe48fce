//! Author Store

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{Author, AuthorCreate};

pub async fn create(pool: &SqlitePool, data: &AuthorCreate) -> RepoResult<Author> {
    let id: i64 = sqlx::query_scalar(
        "INSERT INTO authors (first_name, last_name, bio) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(&data.first_name)
    .bind(&data.last_name)
    .bind(&data.bio)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id).await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Author> {
    let author: Option<Author> =
        sqlx::query_as("SELECT id, first_name, last_name, bio FROM authors WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    author.ok_or_else(|| RepoError::NotFound(format!("Author {id} not found")))
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Author>> {
    let authors =
        sqlx::query_as("SELECT id, first_name, last_name, bio FROM authors ORDER BY id")
            .fetch_all(pool)
            .await?;
    Ok(authors)
}

pub async fn update(pool: &SqlitePool, id: i64, data: &AuthorCreate) -> RepoResult<Author> {
    let rows =
        sqlx::query("UPDATE authors SET first_name = ?, last_name = ?, bio = ? WHERE id = ?")
            .bind(&data.first_name)
            .bind(&data.last_name)
            .bind(&data.bio)
            .bind(id)
            .execute(pool)
            .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Author {id} not found")));
    }

    find_by_id(pool, id).await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM authors WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Author {id} not found")));
    }
    Ok(())
}
