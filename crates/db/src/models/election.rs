//! Elections, vacant positions, candidatures and votes.

use serde::Serialize;
use sqlx::FromRow;
use sportasso_core::types::{DbId, Timestamp};

/// A row from the `positions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Position {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `elections` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Election {
    pub id: DbId,
    pub title: String,
    pub slug: String,
    pub description: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `vacant_positions` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct VacantPosition {
    pub id: DbId,
    pub election_id: DbId,
    pub position_id: DbId,
    pub elected_number: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `candidatures` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Candidature {
    pub id: DbId,
    pub vacant_position_id: DbId,
    pub candidate_id: DbId,
    pub speech: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `votes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Vote {
    pub id: DbId,
    pub candidature_id: DbId,
    pub voter_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
