//! Repository for the `candidatures` table.

use sqlx::PgExecutor;
use sportasso_core::types::DbId;
use sportasso_core::validation::records::CandidatureRecord;

use crate::models::election::Candidature;

const COLUMNS: &str = "id, vacant_position_id, candidate_id, speech, created_at, updated_at";

pub struct CandidatureRepo;

impl CandidatureRepo {
    pub async fn create<'e>(
        db: impl PgExecutor<'e>,
        input: &CandidatureRecord,
    ) -> Result<Candidature, sqlx::Error> {
        let query = format!(
            "INSERT INTO candidatures (vacant_position_id, candidate_id, speech)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Candidature>(&query)
            .bind(input.vacant_position_id)
            .bind(input.candidate_id)
            .bind(&input.speech)
            .fetch_one(db)
            .await
    }

    pub async fn find_by_id<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Candidature>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM candidatures WHERE id = $1");
        sqlx::query_as::<_, Candidature>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn update<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
        input: &CandidatureRecord,
    ) -> Result<Option<Candidature>, sqlx::Error> {
        let query = format!(
            "UPDATE candidatures SET vacant_position_id = $2, candidate_id = $3, speech = $4
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Candidature>(&query)
            .bind(id)
            .bind(input.vacant_position_id)
            .bind(input.candidate_id)
            .bind(&input.speech)
            .fetch_optional(db)
            .await
    }
}
