//! Repository for the `articles` table.

use sqlx::PgExecutor;
use sportasso_core::types::{DbId, Timestamp};

use crate::models::communication::{Article, CreateArticle};

const COLUMNS: &str = "id, title, content, publication_date, is_frontpage, created_at, updated_at";

pub struct ArticleRepo;

impl ArticleRepo {
    /// Insert an article. `is_frontpage` defaults to `false`.
    pub async fn create<'e>(db: impl PgExecutor<'e>, input: &CreateArticle) -> Result<Article, sqlx::Error> {
        let query = format!(
            "INSERT INTO articles (title, content, publication_date, is_frontpage)
             VALUES ($1, $2, $3, COALESCE($4, false))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(&input.title)
            .bind(&input.content)
            .bind(input.publication_date)
            .bind(input.is_frontpage)
            .fetch_one(db)
            .await
    }

    pub async fn find_by_id<'e>(db: impl PgExecutor<'e>, id: DbId) -> Result<Option<Article>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM articles WHERE id = $1");
        sqlx::query_as::<_, Article>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    /// Published articles, newest first; only front-page ones when `frontpage_only`.
    pub async fn list_published<'e>(
        db: impl PgExecutor<'e>,
        now: Timestamp,
        frontpage_only: bool,
    ) -> Result<Vec<Article>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM articles
             WHERE publication_date <= $1 AND (is_frontpage = true OR NOT $2)
             ORDER BY publication_date DESC, id DESC"
        );
        sqlx::query_as::<_, Article>(&query)
            .bind(now)
            .bind(frontpage_only)
            .fetch_all(db)
            .await
    }
}
