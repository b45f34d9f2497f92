//! Repository for the `elections` table.

use sqlx::PgExecutor;
use sportasso_core::types::DbId;
use sportasso_core::validation::records::ElectionRecord;

use crate::models::election::Election;

const COLUMNS: &str =
    "id, title, slug, description, start_date, end_date, is_published, created_at, updated_at";

pub struct ElectionRepo;

impl ElectionRepo {
    pub async fn create<'e>(
        db: impl PgExecutor<'e>,
        input: &ElectionRecord,
    ) -> Result<Election, sqlx::Error> {
        let query = format!(
            "INSERT INTO elections (title, slug, description, start_date, end_date, is_published)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Election>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_published)
            .fetch_one(db)
            .await
    }

    pub async fn find_by_id<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Election>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM elections WHERE id = $1");
        sqlx::query_as::<_, Election>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn update<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
        input: &ElectionRecord,
    ) -> Result<Option<Election>, sqlx::Error> {
        let query = format!(
            "UPDATE elections SET
                title = $2, slug = $3, description = $4, start_date = $5, end_date = $6,
                is_published = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Election>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.is_published)
            .fetch_optional(db)
            .await
    }
}
