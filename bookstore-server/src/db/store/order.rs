//! Order Store
//!
//! Sole owner of order and order_item rows. An order header and its line
//! items are written and deleted inside one transaction: readers never
//! observe a header without its items or items without their header.

use sqlx::SqlitePool;

use super::{RepoError, RepoResult};
use crate::db::models::{Order, OrderCreate, OrderItem};
use crate::utils::now_millis;

/// Create an order header and all of its line items atomically.
///
/// Any failed insert drops the transaction, rolling back the header and the
/// items written so far; no partial order ever becomes visible. Unknown
/// book/customer references surface as [`RepoError::Constraint`].
pub async fn create(pool: &SqlitePool, data: OrderCreate) -> RepoResult<Order> {
    if data.items.is_empty() {
        return Err(RepoError::Validation(
            "Order must contain at least one item".into(),
        ));
    }
    for item in &data.items {
        if item.quantity < 1 {
            return Err(RepoError::Validation(format!(
                "Item quantity must be >= 1, got {} for book {}",
                item.quantity, item.book_id
            )));
        }
    }

    let created_at = now_millis();
    let status = data.status.unwrap_or_else(|| "pending".to_string());

    let mut tx = pool.begin().await?;

    let order_id: i64 = sqlx::query_scalar(
        "INSERT INTO orders (customer_id, total_price, created_at, status) VALUES (?, ?, ?, ?) RETURNING id",
    )
    .bind(data.customer_id)
    .bind(data.total_price)
    .bind(created_at)
    .bind(&status)
    .fetch_one(&mut *tx)
    .await?;

    let mut items = Vec::with_capacity(data.items.len());
    for item in &data.items {
        let item_id: i64 = sqlx::query_scalar(
            "INSERT INTO order_items (order_id, book_id, quantity) VALUES (?, ?, ?) RETURNING id",
        )
        .bind(order_id)
        .bind(item.book_id)
        .bind(item.quantity)
        .fetch_one(&mut *tx)
        .await?;

        items.push(OrderItem {
            id: item_id,
            order_id,
            book_id: item.book_id,
            quantity: item.quantity,
        });
    }

    tx.commit().await?;

    Ok(Order {
        id: order_id,
        customer_id: data.customer_id,
        total_price: data.total_price,
        created_at,
        status,
        items,
    })
}

/// Fetch a single order with its line items.
///
/// Both reads run inside one transaction, so the header and the items come
/// from the same snapshot even while a concurrent create/delete is in flight.
pub async fn get(pool: &SqlitePool, id: i64) -> RepoResult<Order> {
    let mut tx = pool.begin().await?;

    let order: Option<Order> = sqlx::query_as(
        "SELECT id, customer_id, total_price, created_at, status FROM orders WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(&mut *tx)
    .await?;

    let Some(mut order) = order else {
        return Err(RepoError::NotFound(format!("Order {id} not found")));
    };

    order.items = sqlx::query_as(
        "SELECT id, order_id, book_id, quantity FROM order_items WHERE order_id = ? ORDER BY id",
    )
    .bind(id)
    .fetch_all(&mut *tx)
    .await?;

    tx.commit().await?;
    Ok(order)
}

/// Update only the status field; line items are untouched.
///
/// Status is an opaque label: stored and returned verbatim, no transition
/// graph is enforced here.
pub async fn update_status(pool: &SqlitePool, id: i64, status: &str) -> RepoResult<Order> {
    let rows = sqlx::query("UPDATE orders SET status = ? WHERE id = ?")
        .bind(status)
        .bind(id)
        .execute(pool)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order {id} not found")));
    }

    get(pool, id).await
}

/// Delete an order and its line items in one transaction.
pub async fn delete(pool: &SqlitePool, id: i64) -> RepoResult<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM order_items WHERE order_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    let rows = sqlx::query("DELETE FROM orders WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?;

    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Order {id} not found")));
    }

    tx.commit().await?;
    Ok(())
}

/// Order headers with `created_at` in `[from, to]` inclusive, ascending.
///
/// Items are not loaded; callers that need them (the aggregation path)
/// follow up with [`find_items_by_order_ids`].
pub async fn find_by_date_range(pool: &SqlitePool, from: i64, to: i64) -> RepoResult<Vec<Order>> {
    let orders = sqlx::query_as(
        "SELECT id, customer_id, total_price, created_at, status FROM orders WHERE created_at BETWEEN ? AND ? ORDER BY created_at ASC",
    )
    .bind(from)
    .bind(to)
    .fetch_all(pool)
    .await?;
    Ok(orders)
}

/// Bulk-load line items for a set of orders.
pub async fn find_items_by_order_ids(
    pool: &SqlitePool,
    order_ids: &[i64],
) -> RepoResult<Vec<OrderItem>> {
    if order_ids.is_empty() {
        return Ok(Vec::new());
    }

    // Dynamic query: variable number of IN placeholders
    let placeholders = order_ids.iter().map(|_| "?").collect::<Vec<_>>().join(",");
    let sql = format!(
        "SELECT id, order_id, book_id, quantity FROM order_items WHERE order_id IN ({placeholders}) ORDER BY order_id, id"
    );
    let mut query = sqlx::query_as::<_, OrderItem>(&sql);
    for order_id in order_ids {
        query = query.bind(*order_id);
    }
    Ok(query.fetch_all(pool).await?)
}

/// Unbounded header listing; callers paginate externally.
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Order>> {
    let orders = sqlx::query_as(
        "SELECT id, customer_id, total_price, created_at, status FROM orders ORDER BY id",
    )
    .fetch_all(pool)
    .await?;
    Ok(orders)
}
