//! Repository for the `locations` table.

use sqlx::PgExecutor;
use sportasso_core::types::DbId;
use sportasso_core::validation::records::LocationRecord;

use crate::models::location::Location;

const COLUMNS: &str = "id, name, address, city, latitude, longitude, created_at, updated_at";

pub struct LocationRepo;

impl LocationRepo {
    pub async fn create<'e>(
        db: impl PgExecutor<'e>,
        input: &LocationRecord,
    ) -> Result<Location, sqlx::Error> {
        let query = format!(
            "INSERT INTO locations (name, address, city, latitude, longitude)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.city)
            .bind(input.latitude)
            .bind(input.longitude)
            .fetch_one(db)
            .await
    }

    pub async fn find_by_id<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Location>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM locations WHERE id = $1");
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn update<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
        input: &LocationRecord,
    ) -> Result<Option<Location>, sqlx::Error> {
        let query = format!(
            "UPDATE locations SET
                name = $2, address = $3, city = $4, latitude = $5, longitude = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Location>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.address)
            .bind(&input.city)
            .bind(input.latitude)
            .bind(input.longitude)
            .fetch_optional(db)
            .await
    }
}
