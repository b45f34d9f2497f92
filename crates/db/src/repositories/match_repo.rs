//! Repository for the `matches` table.

use sqlx::PgExecutor;
use sportasso_core::types::Timestamp;

use crate::models::schedule::{CreateMatch, Match};

const COLUMNS: &str =
    "id, sport_id, opponent, date, location_id, score, created_at, updated_at";

pub struct MatchRepo;

impl MatchRepo {
    pub async fn create<'e>(db: impl PgExecutor<'e>, input: &CreateMatch) -> Result<Match, sqlx::Error> {
        let query = format!(
            "INSERT INTO matches (sport_id, opponent, date, location_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Match>(&query)
            .bind(input.sport_id)
            .bind(&input.opponent)
            .bind(input.date)
            .bind(input.location_id)
            .fetch_one(db)
            .await
    }

    /// Earliest match strictly after `now`.
    pub async fn next_upcoming<'e>(
        db: impl PgExecutor<'e>,
        now: Timestamp,
    ) -> Result<Option<Match>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM matches WHERE date > $1 ORDER BY date ASC, id ASC LIMIT 1"
        );
        sqlx::query_as::<_, Match>(&query)
            .bind(now)
            .fetch_optional(db)
            .await
    }

    /// Latest match strictly before `now`.
    pub async fn last_past<'e>(
        db: impl PgExecutor<'e>,
        now: Timestamp,
    ) -> Result<Option<Match>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM matches WHERE date < $1 ORDER BY date DESC, id DESC LIMIT 1"
        );
        sqlx::query_as::<_, Match>(&query)
            .bind(now)
            .fetch_optional(db)
            .await
    }
}
