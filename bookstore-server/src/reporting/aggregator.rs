//! Sales Aggregator
//!
//! Pure read + compute step: fetches the orders of a time window through the
//! order store and derives total revenue, order count and best sellers. Owns
//! no persistent state.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use super::money;
use crate::db::store::{self, RepoResult};
use crate::utils::now_millis;

/// Number of best sellers retained in a report by default
pub const DEFAULT_TOP_N: usize = 3;

/// Aggregate quantity sold for one book within a report window
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSales {
    pub book_id: i64,
    pub quantity: i64,
}

/// Windowed sales aggregation result
///
/// Immutable once archived; a new window produces a new report keyed by its
/// generation date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesReport {
    /// When the report was generated (Unix millis)
    pub generated_at: i64,
    /// Sum of order totals in the window
    pub total_revenue: f64,
    pub total_orders: i64,
    /// Best sellers, descending quantity, ties by ascending book id
    pub top_selling_books: Vec<BookSales>,
}

#[derive(Clone)]
pub struct SalesReportService {
    pool: SqlitePool,
    top_n: usize,
}

impl SalesReportService {
    pub fn new(pool: SqlitePool, top_n: usize) -> Self {
        Self { pool, top_n }
    }

    /// Aggregate all orders with creation time in `[from, to]` inclusive.
    ///
    /// Zero orders in range is a valid, empty report. Store errors propagate
    /// unchanged; no partial report is ever returned.
    pub async fn generate_sales_report(&self, from: i64, to: i64) -> RepoResult<SalesReport> {
        let orders = store::order::find_by_date_range(&self.pool, from, to).await?;
        let order_ids: Vec<i64> = orders.iter().map(|o| o.id).collect();
        let items = store::order::find_items_by_order_ids(&self.pool, &order_ids).await?;

        // Revenue accumulates as Decimal; summing raw f64 drifts
        let mut revenue = Decimal::ZERO;
        for order in &orders {
            revenue += money::to_decimal(order.total_price);
        }

        // Quantity sold per book, local to this aggregation call
        let mut sold: HashMap<i64, i64> = HashMap::new();
        for item in &items {
            *sold.entry(item.book_id).or_insert(0) += item.quantity;
        }

        let mut sales: Vec<BookSales> = sold
            .into_iter()
            .map(|(book_id, quantity)| BookSales { book_id, quantity })
            .collect();

        // Descending by quantity; equal quantities ordered by ascending book
        // id so the result is reproducible across runs
        sales.sort_by(|a, b| b.quantity.cmp(&a.quantity).then(a.book_id.cmp(&b.book_id)));
        sales.truncate(self.top_n);

        Ok(SalesReport {
            generated_at: now_millis(),
            total_revenue: money::to_f64(revenue),
            total_orders: orders.len() as i64,
            top_selling_books: sales,
        })
    }
}
