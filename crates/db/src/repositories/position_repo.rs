//! Repository for the `positions` table.

use sqlx::PgExecutor;

use crate::models::election::Position;

const COLUMNS: &str = "id, name, description, created_at, updated_at";

pub struct PositionRepo;

impl PositionRepo {
    pub async fn create<'e>(
        db: impl PgExecutor<'e>,
        name: &str,
        description: Option<&str>,
    ) -> Result<Position, sqlx::Error> {
        let query = format!(
            "INSERT INTO positions (name, description) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Position>(&query)
            .bind(name)
            .bind(description)
            .fetch_one(db)
            .await
    }
}
