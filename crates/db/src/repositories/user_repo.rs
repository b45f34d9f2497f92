//! Repository for the `users` table.

use sqlx::PgExecutor;
use sportasso_core::types::DbId;

use crate::models::membership::{CreateUser, User};

const COLUMNS: &str = "id, full_name, email, created_at, updated_at";

pub struct UserRepo;

impl UserRepo {
    pub async fn create<'e>(db: impl PgExecutor<'e>, input: &CreateUser) -> Result<User, sqlx::Error> {
        let query = format!(
            "INSERT INTO users (full_name, email) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, User>(&query)
            .bind(&input.full_name)
            .bind(&input.email)
            .fetch_one(db)
            .await
    }

    pub async fn exists<'e>(db: impl PgExecutor<'e>, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)")
            .bind(id)
            .fetch_one(db)
            .await
    }
}
