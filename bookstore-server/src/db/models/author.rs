//! Author Model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Author {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
}

/// Create/update author payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorCreate {
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
}
