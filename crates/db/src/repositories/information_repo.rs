//! Repository for the `informations` table.

use sqlx::PgExecutor;
use sportasso_core::types::DbId;
use sportasso_core::validation::records::InformationRecord;

use crate::models::communication::Information;

const COLUMNS: &str = "id, title, content, start_date, end_date, is_important, is_published, \
    created_at, updated_at";

pub struct InformationRepo;

impl InformationRepo {
    pub async fn create<'e>(
        db: impl PgExecutor<'e>,
        input: &InformationRecord,
    ) -> Result<Information, sqlx::Error> {
        let query = format!(
            "INSERT INTO informations
                (title, content, start_date, end_date, is_important, is_published)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Information>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_important)
            .bind(input.is_published)
            .fetch_one(db)
            .await
    }

    pub async fn find_by_id<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Information>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM informations WHERE id = $1");
        sqlx::query_as::<_, Information>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn update<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
        input: &InformationRecord,
    ) -> Result<Option<Information>, sqlx::Error> {
        let query = format!(
            "UPDATE informations SET
                title = $2, content = $3, start_date = $4, end_date = $5,
                is_important = $6, is_published = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Information>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_important)
            .bind(input.is_published)
            .fetch_optional(db)
            .await
    }

    /// Important published informations, latest ending first. Display windows
    /// are resolved by the caller.
    pub async fn list_important<'e>(db: impl PgExecutor<'e>) -> Result<Vec<Information>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM informations
             WHERE is_important = true AND is_published = true
             ORDER BY end_date DESC NULLS FIRST, id DESC"
        );
        sqlx::query_as::<_, Information>(&query).fetch_all(db).await
    }
}
