use serde::Serialize;
use sqlx::FromRow;
use sportasso_core::types::{Cents, Date, DbId, Timestamp};

/// A row from the `financial_operations` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct FinancialOperation {
    pub id: DbId,
    pub name: String,
    pub description: String,
    pub amount_cents: Cents,
    pub registered_user_id: Option<DbId>,
    pub unregistered_user: Option<String>,
    pub related_activity_id: Option<DbId>,
    pub processed_date: Option<Date>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
