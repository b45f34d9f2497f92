//! Repository for the `equipment` table.

use sqlx::PgExecutor;
use sportasso_core::types::DbId;
use sportasso_core::validation::records::EquipmentRecord;

use crate::models::equipment::Equipment;

const COLUMNS: &str = "id, name, description, quantity, created_at, updated_at";

pub struct EquipmentRepo;

impl EquipmentRepo {
    pub async fn create<'e>(
        db: impl PgExecutor<'e>,
        input: &EquipmentRecord,
    ) -> Result<Equipment, sqlx::Error> {
        let query = format!(
            "INSERT INTO equipment (name, description, quantity)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Equipment>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.quantity)
            .fetch_one(db)
            .await
    }

    pub async fn find_by_id<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Equipment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM equipment WHERE id = $1");
        sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn update<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
        input: &EquipmentRecord,
    ) -> Result<Option<Equipment>, sqlx::Error> {
        let query = format!(
            "UPDATE equipment SET name = $2, description = $3, quantity = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.quantity)
            .fetch_optional(db)
            .await
    }
}
