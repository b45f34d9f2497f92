//! Sports, their sessions and matches, and office permanences.

use serde::Serialize;
use sqlx::FromRow;
use sportasso_core::types::{Date, DbId, TimeOfDay, Timestamp};

/// A row from the `sports` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Sport {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub is_open: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `permanences` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Permanence {
    pub id: DbId,
    pub weekday: Option<i16>,
    pub date: Option<Date>,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub location_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `sessions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Session {
    pub id: DbId,
    pub sport_id: DbId,
    pub location_id: Option<DbId>,
    pub manager_id: Option<DbId>,
    pub weekday: Option<i16>,
    pub date: Option<Date>,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A weekly session joined with its sport, for agenda listings.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct SessionListing {
    pub id: DbId,
    pub sport_id: DbId,
    pub sport_name: String,
    pub location_id: Option<DbId>,
    pub weekday: Option<i16>,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

/// A row from the `cancelled_sessions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CancelledSession {
    pub id: DbId,
    pub session_id: DbId,
    pub cancellation_date: Date,
    pub title: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `matches` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Match {
    pub id: DbId,
    pub sport_id: DbId,
    pub opponent: String,
    pub date: Timestamp,
    pub location_id: Option<DbId>,
    pub score: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for scheduling a match.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreateMatch {
    pub sport_id: DbId,
    pub opponent: String,
    pub date: Timestamp,
    pub location_id: Option<DbId>,
}

/// Input for creating a sport.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct CreateSport {
    pub name: String,
    pub slug: String,
    pub is_open: Option<bool>,
}
