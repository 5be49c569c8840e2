use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, FromRow)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Validated request body for item creation. The boundary rejects bodies
/// with a missing or empty `name` before this reaches the store.
#[derive(Debug, Clone, Deserialize)]
pub struct NewItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Create response: the assigned id echoing the input. `created_at` stays
/// server-side; the list endpoint exposes it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CreatedItem {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}
