use serde::Serialize;
use sqlx::FromRow;
use sportasso_core::types::{DbId, Timestamp};

/// A row from the `locations` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Location {
    pub id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
