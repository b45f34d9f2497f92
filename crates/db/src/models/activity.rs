//! Activities, their parameters, items and participants.

use serde::Serialize;
use sqlx::FromRow;
use sportasso_core::publication::Dated;
use sportasso_core::types::{Cents, DbId, Timestamp};

/// A row from the `activities` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Activity {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub summary: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub publication_date: Option<Timestamp>,
    pub is_member_only: bool,
    pub is_frontpage: bool,
    pub is_big_activity: bool,
    pub location_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Dated for Activity {
    fn dated_at(&self) -> Option<Timestamp> {
        self.publication_date
    }
}

/// A row from the `parameters` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Parameter {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub activity_id: Option<DbId>,
    pub parent_parameter_id: Option<DbId>,
    pub is_member_only: bool,
    pub is_mandatory: bool,
    pub is_published: bool,
    pub max_bought_items: Option<i32>,
    pub default_price_cents: Cents,
    pub member_price_cents: Cents,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `items` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Item {
    pub id: DbId,
    pub parameter_id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub max_bought_items: Option<i32>,
    pub default_price_cents: Cents,
    pub member_price_cents: Cents,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `participants` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Participant {
    pub id: DbId,
    pub item_id: DbId,
    pub registered_user_id: Option<DbId>,
    pub unregistered_user: Option<String>,
    pub payment_mean: String,
    pub cheque_bank: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
