//! Order store integration tests: transactional create/read/delete against
//! a scratch SQLite database.

use bookstore_server::db::DbService;
use bookstore_server::db::models::{BookCreate, CustomerCreate, OrderCreate, OrderItemCreate};
use bookstore_server::db::store::{self, RepoError};
use sqlx::SqlitePool;
use tempfile::TempDir;

async fn setup() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().expect("tempdir");
    let db_path = dir.path().join("test.db");
    let db = DbService::new(db_path.to_str().unwrap())
        .await
        .expect("db init");
    (dir, db.pool)
}

/// Seed one customer and two books; returns (customer_id, book_x, book_y)
async fn seed(pool: &SqlitePool) -> (i64, i64, i64) {
    let customer = store::customer::create(
        pool,
        &CustomerCreate {
            name: "Ada Lovelace".into(),
            email: "ada@example.com".into(),
        },
    )
    .await
    .expect("customer");

    let book_x = store::book::create(
        pool,
        &BookCreate {
            title: "Book X".into(),
            genres: vec!["fiction".into()],
            published_at: None,
            price: 5.0,
            stock: 10,
            author_id: None,
        },
    )
    .await
    .expect("book x");

    let book_y = store::book::create(
        pool,
        &BookCreate {
            title: "Book Y".into(),
            genres: vec![],
            published_at: None,
            price: 10.0,
            stock: 10,
            author_id: None,
        },
    )
    .await
    .expect("book y");

    (customer.id, book_x.id, book_y.id)
}

fn order_input(customer_id: i64, total: f64, items: Vec<(i64, i64)>) -> OrderCreate {
    OrderCreate {
        customer_id,
        total_price: total,
        status: None,
        items: items
            .into_iter()
            .map(|(book_id, quantity)| OrderItemCreate { book_id, quantity })
            .collect(),
    }
}

async fn item_row_count(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM order_items")
        .fetch_one(pool)
        .await
        .expect("count")
}

#[tokio::test]
async fn create_then_get_returns_same_order() {
    let (_dir, pool) = setup().await;
    let (customer_id, book_x, book_y) = seed(&pool).await;

    let created = store::order::create(&pool, order_input(customer_id, 25.0, vec![(book_x, 2), (book_y, 1)]))
        .await
        .expect("create");

    let fetched = store::order::get(&pool, created.id).await.expect("get");

    assert_eq!(fetched.id, created.id);
    assert_eq!(fetched.customer_id, customer_id);
    assert_eq!(fetched.total_price, 25.0);
    assert_eq!(fetched.created_at, created.created_at);
    assert_eq!(fetched.status, "pending");

    // Order-insensitive item comparison
    let mut expected: Vec<(i64, i64)> = created.items.iter().map(|i| (i.book_id, i.quantity)).collect();
    let mut actual: Vec<(i64, i64)> = fetched.items.iter().map(|i| (i.book_id, i.quantity)).collect();
    expected.sort();
    actual.sort();
    assert_eq!(actual, expected);
    assert_eq!(actual, vec![(book_x, 2), (book_y, 1)]);
}

#[tokio::test]
async fn get_missing_order_is_not_found() {
    let (_dir, pool) = setup().await;
    seed(&pool).await;

    let err = store::order::get(&pool, 9999).await.unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn create_rejects_empty_item_list() {
    let (_dir, pool) = setup().await;
    let (customer_id, _, _) = seed(&pool).await;

    let err = store::order::create(&pool, order_input(customer_id, 10.0, vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(store::order::find_all(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn create_rejects_non_positive_quantity() {
    let (_dir, pool) = setup().await;
    let (customer_id, book_x, _) = seed(&pool).await;

    let err = store::order::create(&pool, order_input(customer_id, 10.0, vec![(book_x, 0)]))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
    assert!(store::order::find_all(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn failed_item_insert_rolls_back_header() {
    let (_dir, pool) = setup().await;
    let (customer_id, book_x, _) = seed(&pool).await;

    // Second item references a book that does not exist: the FK violation
    // must roll back the header and the first item as well
    let err = store::order::create(
        &pool,
        order_input(customer_id, 10.0, vec![(book_x, 1), (9999, 1)]),
    )
    .await
    .unwrap_err();

    assert!(matches!(err, RepoError::Constraint(_)));
    assert!(store::order::find_all(&pool).await.unwrap().is_empty());
    assert_eq!(item_row_count(&pool).await, 0);
}

#[tokio::test]
async fn unknown_customer_is_constraint_violation() {
    let (_dir, pool) = setup().await;
    let (_, book_x, _) = seed(&pool).await;

    let err = store::order::create(&pool, order_input(4242, 10.0, vec![(book_x, 1)]))
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::Constraint(_)));
    assert!(store::order::find_all(&pool).await.unwrap().is_empty());
}

#[tokio::test]
async fn update_status_touches_only_the_status_field() {
    let (_dir, pool) = setup().await;
    let (customer_id, book_x, _) = seed(&pool).await;

    let created = store::order::create(&pool, order_input(customer_id, 5.0, vec![(book_x, 1)]))
        .await
        .expect("create");

    let updated = store::order::update_status(&pool, created.id, "shipped")
        .await
        .expect("update");

    assert_eq!(updated.status, "shipped");
    assert_eq!(updated.total_price, created.total_price);
    assert_eq!(updated.created_at, created.created_at);
    assert_eq!(updated.items, created.items);
}

#[tokio::test]
async fn update_status_on_missing_order_is_not_found() {
    let (_dir, pool) = setup().await;
    seed(&pool).await;

    let err = store::order::update_status(&pool, 9999, "shipped")
        .await
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

#[tokio::test]
async fn delete_removes_header_and_items() {
    let (_dir, pool) = setup().await;
    let (customer_id, book_x, book_y) = seed(&pool).await;

    let created = store::order::create(&pool, order_input(customer_id, 15.0, vec![(book_x, 1), (book_y, 2)]))
        .await
        .expect("create");
    assert_eq!(item_row_count(&pool).await, 2);

    store::order::delete(&pool, created.id).await.expect("delete");

    assert_eq!(item_row_count(&pool).await, 0);
    assert!(matches!(
        store::order::get(&pool, created.id).await.unwrap_err(),
        RepoError::NotFound(_)
    ));
    assert!(matches!(
        store::order::delete(&pool, created.id).await.unwrap_err(),
        RepoError::NotFound(_)
    ));
}

#[tokio::test]
async fn date_range_is_inclusive_and_ascending() {
    let (_dir, pool) = setup().await;
    let (customer_id, book_x, _) = seed(&pool).await;

    let mut ids = Vec::new();
    for _ in 0..3 {
        let order = store::order::create(&pool, order_input(customer_id, 1.0, vec![(book_x, 1)]))
            .await
            .expect("create");
        ids.push(order.id);
    }

    // Pin creation times so the boundaries are exact
    for (i, id) in ids.iter().enumerate() {
        sqlx::query("UPDATE orders SET created_at = ? WHERE id = ?")
            .bind(1000 + i as i64 * 1000)
            .bind(id)
            .execute(&pool)
            .await
            .expect("pin created_at");
    }

    // [1000, 2000] includes both boundary orders, excludes the one at 3000
    let in_range = store::order::find_by_date_range(&pool, 1000, 2000)
        .await
        .expect("range");
    let range_ids: Vec<i64> = in_range.iter().map(|o| o.id).collect();
    assert_eq!(range_ids, vec![ids[0], ids[1]]);

    let created: Vec<i64> = in_range.iter().map(|o| o.created_at).collect();
    assert_eq!(created, vec![1000, 2000]);

    // Headers only: line items are not loaded on the listing path
    assert!(in_range.iter().all(|o| o.items.is_empty()));
}

#[tokio::test]
async fn bulk_item_load_covers_all_requested_orders() {
    let (_dir, pool) = setup().await;
    let (customer_id, book_x, book_y) = seed(&pool).await;

    let a = store::order::create(&pool, order_input(customer_id, 10.0, vec![(book_x, 2)]))
        .await
        .expect("order a");
    let b = store::order::create(&pool, order_input(customer_id, 20.0, vec![(book_x, 1), (book_y, 3)]))
        .await
        .expect("order b");

    let items = store::order::find_items_by_order_ids(&pool, &[a.id, b.id])
        .await
        .expect("items");
    assert_eq!(items.len(), 3);
    assert!(items.iter().filter(|i| i.order_id == a.id).count() == 1);
    assert!(items.iter().filter(|i| i.order_id == b.id).count() == 2);

    let none = store::order::find_items_by_order_ids(&pool, &[])
        .await
        .expect("empty");
    assert!(none.is_empty());
}
