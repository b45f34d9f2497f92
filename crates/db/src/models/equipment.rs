use serde::Serialize;
use sqlx::FromRow;
use sportasso_core::types::{Date, DbId, Timestamp};

/// A row from the `equipment` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Equipment {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub quantity: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `lendings` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Lending {
    pub id: DbId,
    pub equipment_id: DbId,
    pub borrower_id: DbId,
    pub quantity: i32,
    pub deposit: i32,
    pub start_date: Date,
    pub end_date: Date,
    pub returned: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
