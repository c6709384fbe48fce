//! API routes
//!
//! Thin marshaling layer: handlers parse paths/payloads, call into the
//! stores and services, and translate errors via [`crate::error::AppError`].

mod authors;
mod books;
mod customers;
mod health;
mod orders;
mod reports;

use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Create the combined router
pub fn create_router(state: AppState) -> Router {
    let catalog = Router::new()
        .route("/authors", get(authors::list_authors).post(authors::create_author))
        .route(
            "/authors/{id}",
            get(authors::get_author)
                .put(authors::update_author)
                .delete(authors::delete_author),
        )
        .route("/books", get(books::list_books).post(books::create_book))
        .route(
            "/books/{id}",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book),
        )
        .route(
            "/customers",
            get(customers::list_customers).post(customers::create_customer),
        )
        .route(
            "/customers/{id}",
            get(customers::get_customer)
                .put(customers::update_customer)
                .delete(customers::delete_customer),
        );

    let orders = Router::new()
        .route("/orders", get(orders::list_orders).post(orders::create_order))
        .route(
            "/orders/{id}",
            get(orders::get_order)
                .put(orders::update_order_status)
                .delete(orders::delete_order),
        );

    let reports = Router::new()
        .route("/reports", get(reports::list_reports))
        .route("/reports/{date}", get(reports::get_report_by_date));

    Router::new()
        .route("/health", get(health::health_check))
        .merge(catalog)
        .merge(orders)
        .merge(reports)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
