//! Users and memberships.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sportasso_core::types::{Date, DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct User {
    pub id: DbId,
    pub full_name: String,
    pub email: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a user.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUser {
    pub full_name: String,
    pub email: String,
}

/// A row from the `memberships` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Membership {
    pub id: DbId,
    pub member_id: DbId,
    pub membership_type_id: Option<DbId>,
    pub expiration_date: Date,
    pub certificate_date: Date,
    pub payment_mean: String,
    pub cheque_bank: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
