//! Repository for the `sessions` table.

use sqlx::PgExecutor;
use sportasso_core::types::DbId;
use sportasso_core::validation::records::SessionRecord;

use crate::models::schedule::{Session, SessionListing};

const COLUMNS: &str = "id, sport_id, location_id, manager_id, weekday, date, start_time, \
    end_time, created_at, updated_at";

pub struct SessionRepo;

impl SessionRepo {
    pub async fn create<'e>(
        db: impl PgExecutor<'e>,
        input: &SessionRecord,
    ) -> Result<Session, sqlx::Error> {
        let query = format!(
            "INSERT INTO sessions
                (sport_id, location_id, manager_id, weekday, date, start_time, end_time)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(input.sport_id)
            .bind(input.location_id)
            .bind(input.manager_id)
            .bind(input.weekday)
            .bind(input.date)
            .bind(input.start_time)
            .bind(input.end_time)
            .fetch_one(db)
            .await
    }

    pub async fn find_by_id<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sessions WHERE id = $1");
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn update<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
        input: &SessionRecord,
    ) -> Result<Option<Session>, sqlx::Error> {
        let query = format!(
            "UPDATE sessions SET
                sport_id = $2, location_id = $3, manager_id = $4, weekday = $5, date = $6,
                start_time = $7, end_time = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Session>(&query)
            .bind(id)
            .bind(input.sport_id)
            .bind(input.location_id)
            .bind(input.manager_id)
            .bind(input.weekday)
            .bind(input.date)
            .bind(input.start_time)
            .bind(input.end_time)
            .fetch_optional(db)
            .await
    }

    /// Weekly sessions of open sports held on any of the given stored weekdays,
    /// ordered by start time.
    pub async fn list_weekly_for_open_sports<'e>(
        db: impl PgExecutor<'e>,
        weekdays: &[i16],
    ) -> Result<Vec<SessionListing>, sqlx::Error> {
        sqlx::query_as::<_, SessionListing>(
            "SELECT s.id, s.sport_id, sp.name AS sport_name, s.location_id, s.weekday,
                    s.start_time, s.end_time
             FROM sessions s
             JOIN sports sp ON sp.id = s.sport_id
             WHERE sp.is_open = true AND s.weekday = ANY($1)
             ORDER BY s.start_time, s.id",
        )
        .bind(weekdays)
        .fetch_all(db)
        .await
    }
}
