//! Customer Store

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{Customer, CustomerCreate};

pub async fn create(pool: &SqlitePool, data: &CustomerCreate) -> RepoResult<Customer> {
    let id: i64 =
        sqlx::query_scalar("INSERT INTO customers (name, email) VALUES (?, ?) RETURNING id")
            .bind(&data.name)
            .bind(&data.email)
            .fetch_one(pool)
            .await?;

    find_by_id(pool, id).await
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Customer> {
    let customer: Option<Customer> =
        sqlx::query_as("SELECT id, name, email FROM customers WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;

    customer.ok_or_else(|| RepoError::NotFound(format!("Customer {id} not found")))
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Customer>> {
    let customers = sqlx::query_as("SELECT id, name, email FROM customers ORDER BY id")
        .fetch_all(pool)
        .await?;
    Ok(customers)
}

pub async fn update(pool: &SqlitePool, id: i64, data: &CustomerCreate) -> RepoResult<Customer> {
    let rows = sqlx::query("UPDATE customers SET name = ?, email = ? WHERE id = ?")
        .bind(&data.name)
        .bind(&data.email)
        .bind(id)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Customer {id} not found")));
    }

    find_by_id(pool, id).await
}

pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let rows = sqlx::query("DELETE FROM customers WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Customer {id} not found")));
    }
    Ok(())
}
