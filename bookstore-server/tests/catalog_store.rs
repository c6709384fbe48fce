//! Catalog and customer store integration tests

use bookstore_server::db::DbService;
use bookstore_server::db::models::{AuthorCreate, BookCreate, CustomerCreate};
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

#[tokio::test]
async fn book_round_trips_with_genres() {
    let (_dir, pool) = setup().await;

    let author = store::author::create(
        &pool,
        &AuthorCreate {
            first_name: "Ursula".into(),
            last_name: "Le Guin".into(),
            bio: None,
        },
    )
    .await
    .expect("author");

    let created = store::book::create(
        &pool,
        &BookCreate {
            title: "The Dispossessed".into(),
            genres: vec!["sci-fi".into(), "utopian".into()],
            published_at: Some(157766400000),
            price: 12.99,
            stock: 3,
            author_id: Some(author.id),
        },
    )
    .await
    .expect("book");

    let fetched = store::book::find_by_id(&pool, created.id).await.expect("get");
    assert_eq!(fetched, created);
    assert_eq!(fetched.genres, vec!["sci-fi", "utopian"]);
    assert_eq!(fetched.author_id, Some(author.id));
}

#[tokio::test]
async fn book_update_and_delete() {
    let (_dir, pool) = setup().await;

    let created = store::book::create(
        &pool,
        &BookCreate {
            title: "Draft Title".into(),
            genres: vec![],
            published_at: None,
            price: 10.0,
            stock: 1,
            author_id: None,
        },
    )
    .await
    .expect("book");

    let updated = store::book::update(
        &pool,
        created.id,
        &BookCreate {
            title: "Final Title".into(),
            genres: vec!["fiction".into()],
            published_at: None,
            price: 11.0,
            stock: 5,
            author_id: None,
        },
    )
    .await
    .expect("update");
    assert_eq!(updated.title, "Final Title");
    assert_eq!(updated.stock, 5);

    store::book::delete(&pool, created.id).await.expect("delete");
    assert!(matches!(
        store::book::find_by_id(&pool, created.id).await.unwrap_err(),
        RepoError::NotFound(_)
    ));
    assert!(matches!(
        store::book::update(&pool, created.id, &BookCreate {
            title: "Gone".into(),
            genres: vec![],
            published_at: None,
            price: 1.0,
            stock: 0,
            author_id: None,
        })
        .await
        .unwrap_err(),
        RepoError::NotFound(_)
    ));
}

#[tokio::test]
async fn duplicate_customer_email_is_constraint_violation() {
    let (_dir, pool) = setup().await;

    store::customer::create(
        &pool,
        &CustomerCreate {
            name: "Ada".into(),
            email: "ada@example.com".into(),
        },
    )
    .await
    .expect("first");

    let err = store::customer::create(
        &pool,
        &CustomerCreate {
            name: "Other Ada".into(),
            email: "ada@example.com".into(),
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, RepoError::Constraint(_)));
}

#[tokio::test]
async fn customer_crud_round_trip() {
    let (_dir, pool) = setup().await;

    let created = store::customer::create(
        &pool,
        &CustomerCreate {
            name: "Grace".into(),
            email: "grace@example.com".into(),
        },
    )
    .await
    .expect("create");

    let fetched = store::customer::find_by_id(&pool, created.id)
        .await
        .expect("get");
    assert_eq!(fetched, created);

    let updated = store::customer::update(
        &pool,
        created.id,
        &CustomerCreate {
            name: "Grace Hopper".into(),
            email: "grace@example.com".into(),
        },
    )
    .await
    .expect("update");
    assert_eq!(updated.name, "Grace Hopper");

    store::customer::delete(&pool, created.id)
        .await
        .expect("delete");
    assert!(matches!(
        store::customer::find_by_id(&pool, created.id).await.unwrap_err(),
        RepoError::NotFound(_)
    ));
}

#[tokio::test]
async fn author_crud_round_trip() {
    let (_dir, pool) = setup().await;

    let created = store::author::create(
        &pool,
        &AuthorCreate {
            first_name: "Italo".into(),
            last_name: "Calvino".into(),
            bio: Some("Fabulist".into()),
        },
    )
    .await
    .expect("create");

    let all = store::author::find_all(&pool).await.expect("list");
    assert_eq!(all, vec![created.clone()]);

    store::author::delete(&pool, created.id).await.expect("delete");
    assert!(matches!(
        store::author::delete(&pool, created.id).await.unwrap_err(),
        RepoError::NotFound(_)
    ));
}
