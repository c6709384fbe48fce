//! Book Store

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{Book, BookCreate};

/// Raw row with genres still JSON-encoded
#[derive(sqlx::FromRow)]
struct BookRow {
    id: i64,
    title: String,
    genres: String,
    published_at: Option<i64>,
    price: f64,
    stock: i64,
    author_id: Option<i64>,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Book {
            id: row.id,
            title: row.title,
            genres: serde_json::from_str(&row.genres).unwrap_or_default(),
            published_at: row.published_at,
            price: row.price,
            stock: row.stock,
            author_id: row.author_id,
        }
    }
}

fn encode_genres(genres: &[String]) -> RepoResult<String> {
    serde_json::to_string(genres)
        .map_err(|e| RepoError::Validation(format!("Invalid genres: {e}")))
}

pub async fn create(pool: &SqlitePool, data: &BookCreate) -> RepoResult<Book> {
    let genres = encode_genres(&data.genres)?;

    let id: i64 = sqlx::query_scalar(
        "INSERT INTO books (title, genres, published_at, price, stock, author_id) VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
    )
    .bind(&data.title)
    .bind(&genres)
    .bind(data.published_at)
    .bind(data.price)
    .bind(data.stock)
    .bind(data.author_id)
    .fetch_one(pool)
    .await?;

    find_by_id(pool, id).await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Book> {
    let row: Option<BookRow> = sqlx::query_as(
        "SELECT id, title, genres, published_at, price, stock, author_id FROM books WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    row.map(Book::from)
        .ok_or_else(|| RepoError::NotFound(format!("Book {id} not found")))
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Book>> {
    let rows: Vec<BookRow> = sqlx::query_as(
        "SELECT id, title, genres, published_at, price, stock, author_id FROM books ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows.into_iter().map(Book::from).collect())
}

pub async fn update(pool: &SqlitePool, id: i64, data: &BookCreate) -> RepoResult<Book> {
    let genres = encode_genres(&data.genres)?;

    let rows = sqlx::query(
        "UPDATE books SET title = ?, genres = ?, published_at = ?, price = ?, stock = ?, author_id = ? WHERE id = ?",
    )
    .bind(&data.title)
    .bind(&genres)
    .bind(data.published_at)
    .bind(data.price)
    .bind(data.stock)
    .bind(data.author_id)
    .bind(id)
    .execute(pool)
    .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Book {id} not found")));
    }

    find_by_id(pool, id).await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM books WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Book {id} not found")));
    }
    Ok(())
}
