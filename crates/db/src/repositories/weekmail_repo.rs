//! Repository for the `weekmails` table.

use sqlx::PgExecutor;
use sportasso_core::types::{DbId, Timestamp};

use crate::models::communication::{CreateWeekmail, Weekmail};

const COLUMNS: &str = "id, subject, introduction, conclusion, sent_date, created_at, updated_at";

pub struct WeekmailRepo;

impl WeekmailRepo {
    pub async fn create<'e>(db: impl PgExecutor<'e>, input: &CreateWeekmail) -> Result<Weekmail, sqlx::Error> {
        let query = format!(
            "INSERT INTO weekmails (subject, introduction, conclusion, sent_date)
             VALUES ($1, COALESCE($2, ''), COALESCE($3, ''), $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Weekmail>(&query)
            .bind(&input.subject)
            .bind(&input.introduction)
            .bind(&input.conclusion)
            .bind(input.sent_date)
            .fetch_one(db)
            .await
    }

    pub async fn find_by_id<'e>(db: impl PgExecutor<'e>, id: DbId) -> Result<Option<Weekmail>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM weekmails WHERE id = $1");
        sqlx::query_as::<_, Weekmail>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    /// Weekmails already sent, latest first.
    pub async fn list_sent<'e>(db: impl PgExecutor<'e>, now: Timestamp) -> Result<Vec<Weekmail>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM weekmails WHERE sent_date <= $1 ORDER BY sent_date DESC, id DESC"
        );
        sqlx::query_as::<_, Weekmail>(&query)
            .bind(now)
            .fetch_all(db)
            .await
    }
}
