//! Repository for the `sports` and `sport_managers` tables.

use sqlx::PgExecutor;
use sportasso_core::types::DbId;

use crate::models::schedule::{CreateSport, Sport};

const COLUMNS: &str = "id, name, slug, is_open, created_at, updated_at";

pub struct SportRepo;

impl SportRepo {
    /// Insert a sport. `is_open` defaults to `true`.
    pub async fn create<'e>(db: impl PgExecutor<'e>, input: &CreateSport) -> Result<Sport, sqlx::Error> {
        let query = format!(
            "INSERT INTO sports (name, slug, is_open)
             VALUES ($1, $2, COALESCE($3, true))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sport>(&query)
            .bind(&input.name)
            .bind(&input.slug)
            .bind(input.is_open)
            .fetch_one(db)
            .await
    }

    /// Every sport, open or not, by name.
    pub async fn list<'e>(db: impl PgExecutor<'e>) -> Result<Vec<Sport>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sports ORDER BY name, id");
        sqlx::query_as::<_, Sport>(&query).fetch_all(db).await
    }

    /// Make `user_id` a manager of the sport. Adding an existing manager is a no-op.
    pub async fn add_manager<'e>(
        db: impl PgExecutor<'e>,
        sport_id: DbId,
        user_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO sport_managers (sport_id, user_id) VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_sport_managers_sport_user DO NOTHING",
        )
        .bind(sport_id)
        .bind(user_id)
        .execute(db)
        .await?;
        Ok(())
    }

    pub async fn is_manager<'e>(
        db: impl PgExecutor<'e>,
        sport_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM sport_managers WHERE sport_id = $1 AND user_id = $2)",
        )
        .bind(sport_id)
        .bind(user_id)
        .fetch_one(db)
        .await
    }
}
