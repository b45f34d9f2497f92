//! Repository for the `cancelled_sessions` table.

use sqlx::PgExecutor;
use sportasso_core::types::{Date, DbId};
use sportasso_core::validation::records::CancelledSessionRecord;

use crate::models::schedule::CancelledSession;

const COLUMNS: &str =
    "id, session_id, cancellation_date, title, description, created_at, updated_at";

pub struct CancelledSessionRepo;

impl CancelledSessionRepo {
    pub async fn create<'e>(
        db: impl PgExecutor<'e>,
        input: &CancelledSessionRecord,
    ) -> Result<CancelledSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO cancelled_sessions (session_id, cancellation_date, title, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CancelledSession>(&query)
            .bind(input.session_id)
            .bind(input.cancellation_date)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_one(db)
            .await
    }

    pub async fn find_by_id<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<CancelledSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cancelled_sessions WHERE id = $1");
        sqlx::query_as::<_, CancelledSession>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn update<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
        input: &CancelledSessionRecord,
    ) -> Result<Option<CancelledSession>, sqlx::Error> {
        let query = format!(
            "UPDATE cancelled_sessions SET
                session_id = $2, cancellation_date = $3, title = $4, description = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CancelledSession>(&query)
            .bind(id)
            .bind(input.session_id)
            .bind(input.cancellation_date)
            .bind(&input.title)
            .bind(&input.description)
            .fetch_optional(db)
            .await
    }

    /// Cancellations falling between `from` and `to`, both inclusive.
    pub async fn list_between<'e>(
        db: impl PgExecutor<'e>,
        from: Date,
        to: Date,
    ) -> Result<Vec<CancelledSession>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM cancelled_sessions
             WHERE cancellation_date BETWEEN $1 AND $2
             ORDER BY cancellation_date, id"
        );
        sqlx::query_as::<_, CancelledSession>(&query)
            .bind(from)
            .bind(to)
            .fetch_all(db)
            .await
    }
}
