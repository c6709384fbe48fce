//! Book Model

use serde::{Deserialize, Serialize};

/// Catalog book - what order line items reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    /// Genre labels, stored as a JSON array in a TEXT column
    #[serde(default)]
    pub genres: Vec<String>,
    /// Publication date (Unix millis)
    pub published_at: Option<i64>,
    pub price: f64,
    pub stock: i64,
    pub author_id: Option<i64>,
}

/// Create/update book payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookCreate {
    pub title: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub published_at: Option<i64>,
    pub price: f64,
    #[serde(default)]
    pub stock: i64,
    pub author_id: Option<i64>,
}
