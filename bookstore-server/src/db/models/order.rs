//! Order Model

use serde::{Deserialize, Serialize};

/// Order header plus its line items
///
/// The header and the items are written and deleted as one transactional
/// unit; readers never see one without the other.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub total_price: f64,
    /// When the order was created (Unix millis), set by the store on insert
    pub created_at: i64,
    /// Free-form status label ("pending", "shipped", ...), stored verbatim
    pub status: String,

    // -- Line items (populated by application code, skipped by FromRow) --
    #[sqlx(skip)]
    #[serde(default)]
    pub items: Vec<OrderItem>,
}

/// One (book, quantity) entry within an order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub book_id: i64,
    pub quantity: i64,
}

/// Create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub customer_id: i64,
    pub total_price: f64,
    /// Initial status; defaults to "pending" when omitted
    #[serde(default)]
    pub status: Option<String>,
    pub items: Vec<OrderItemCreate>,
}

/// One line item of a create order payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    pub book_id: i64,
    pub quantity: i64,
}

/// Status update payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: String,
}
