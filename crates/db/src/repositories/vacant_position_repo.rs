//! Repository for the `vacant_positions` table.

use sqlx::PgExecutor;
use sportasso_core::types::DbId;
use sportasso_core::validation::records::VacantPositionRecord;

use crate::models::election::VacantPosition;

const COLUMNS: &str = "id, election_id, position_id, elected_number, created_at, updated_at";

pub struct VacantPositionRepo;

impl VacantPositionRepo {
    pub async fn create<'e>(
        db: impl PgExecutor<'e>,
        input: &VacantPositionRecord,
    ) -> Result<VacantPosition, sqlx::Error> {
        let query = format!(
            "INSERT INTO vacant_positions (election_id, position_id, elected_number)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VacantPosition>(&query)
            .bind(input.election_id)
            .bind(input.position_id)
            .bind(input.elected_number)
            .fetch_one(db)
            .await
    }

    pub async fn find_by_id<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<VacantPosition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM vacant_positions WHERE id = $1");
        sqlx::query_as::<_, VacantPosition>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn update<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
        input: &VacantPositionRecord,
    ) -> Result<Option<VacantPosition>, sqlx::Error> {
        let query = format!(
            "UPDATE vacant_positions SET election_id = $2, position_id = $3, elected_number = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, VacantPosition>(&query)
            .bind(id)
            .bind(input.election_id)
            .bind(input.position_id)
            .bind(input.elected_number)
            .fetch_optional(db)
            .await
    }
}
