//! Repository for the `permanences` table.

use sqlx::PgExecutor;
use sportasso_core::types::DbId;
use sportasso_core::validation::records::PermanenceRecord;

use crate::models::schedule::Permanence;

const COLUMNS: &str =
    "id, weekday, date, start_time, end_time, location_id, created_at, updated_at";

pub struct PermanenceRepo;

impl PermanenceRepo {
    pub async fn create<'e>(
        db: impl PgExecutor<'e>,
        input: &PermanenceRecord,
    ) -> Result<Permanence, sqlx::Error> {
        let query = format!(
            "INSERT INTO permanences (weekday, date, start_time, end_time, location_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Permanence>(&query)
            .bind(input.weekday)
            .bind(input.date)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(input.location_id)
            .fetch_one(db)
            .await
    }

    pub async fn find_by_id<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Permanence>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM permanences WHERE id = $1");
        sqlx::query_as::<_, Permanence>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn update<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
        input: &PermanenceRecord,
    ) -> Result<Option<Permanence>, sqlx::Error> {
        let query = format!(
            "UPDATE permanences SET
                weekday = $2, date = $3, start_time = $4, end_time = $5, location_id = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Permanence>(&query)
            .bind(id)
            .bind(input.weekday)
            .bind(input.date)
            .bind(input.start_time)
            .bind(input.end_time)
            .bind(input.location_id)
            .fetch_optional(db)
            .await
    }
}
