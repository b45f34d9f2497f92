//! Repository for the `activities` table.

use sqlx::PgExecutor;
use sportasso_core::types::{DbId, Timestamp};
use sportasso_core::validation::records::ActivityRecord;

use crate::models::activity::Activity;

const COLUMNS: &str = "id, title, slug, content, summary, start_date, end_date, \
    publication_date, is_member_only, is_frontpage, is_big_activity, location_id, \
    created_at, updated_at";

pub struct ActivityRepo;

impl ActivityRepo {
    pub async fn create<'e>(
        db: impl PgExecutor<'e>,
        input: &ActivityRecord,
    ) -> Result<Activity, sqlx::Error> {
        let query = format!(
            "INSERT INTO activities
                (title, slug, content, summary, start_date, end_date, publication_date,
                 is_member_only, is_frontpage, is_big_activity, location_id)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.content)
            .bind(&input.summary)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.publication_date)
            .bind(input.is_member_only)
            .bind(input.is_frontpage)
            .bind(input.is_big_activity)
            .bind(input.location_id)
            .fetch_one(db)
            .await
    }

    pub async fn find_by_id<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM activities WHERE id = $1");
        sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    /// Replace every editable column. Returns `None` if the row does not exist.
    pub async fn update<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
        input: &ActivityRecord,
    ) -> Result<Option<Activity>, sqlx::Error> {
        let query = format!(
            "UPDATE activities SET
                title = $2, slug = $3, content = $4, summary = $5, start_date = $6,
                end_date = $7, publication_date = $8, is_member_only = $9,
                is_frontpage = $10, is_big_activity = $11, location_id = $12
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.slug)
            .bind(&input.content)
            .bind(&input.summary)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.publication_date)
            .bind(input.is_member_only)
            .bind(input.is_frontpage)
            .bind(input.is_big_activity)
            .bind(input.location_id)
            .fetch_optional(db)
            .await
    }

    /// Published front-page activities, newest first. Finished ones are
    /// included; the caller drops them against its own clock.
    pub async fn list_frontpage<'e>(
        db: impl PgExecutor<'e>,
        now: Timestamp,
    ) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activities
             WHERE publication_date <= $1 AND is_frontpage = true
             ORDER BY publication_date DESC, id DESC"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(now)
            .fetch_all(db)
            .await
    }

    /// Published activities, newest first. `big` keeps only big (`Some(true)`)
    /// or regular (`Some(false)`) activities; `None` keeps both.
    pub async fn list_published<'e>(
        db: impl PgExecutor<'e>,
        now: Timestamp,
        big: Option<bool>,
    ) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activities
             WHERE publication_date <= $1 AND ($2::boolean IS NULL OR is_big_activity = $2)
             ORDER BY publication_date DESC, id DESC"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(now)
            .bind(big)
            .fetch_all(db)
            .await
    }
}
