//! Repository for the `votes` table.

use sqlx::PgExecutor;
use sportasso_core::types::DbId;
use sportasso_core::validation::records::VoteRecord;

use crate::models::election::Vote;

const COLUMNS: &str = "id, candidature_id, voter_id, created_at, updated_at";

pub struct VoteRepo;

impl VoteRepo {
    pub async fn create<'e>(db: impl PgExecutor<'e>, input: &VoteRecord) -> Result<Vote, sqlx::Error> {
        let query = format!(
            "INSERT INTO votes (candidature_id, voter_id) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(input.candidature_id)
            .bind(input.voter_id)
            .fetch_one(db)
            .await
    }

    pub async fn find_by_id<'e>(db: impl PgExecutor<'e>, id: DbId) -> Result<Option<Vote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM votes WHERE id = $1");
        sqlx::query_as::<_, Vote>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn update<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
        input: &VoteRecord,
    ) -> Result<Option<Vote>, sqlx::Error> {
        let query = format!(
            "UPDATE votes SET candidature_id = $2, voter_id = $3 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(id)
            .bind(input.candidature_id)
            .bind(input.voter_id)
            .fetch_optional(db)
            .await
    }

    /// Ids of the voter's votes on any candidature of the vacant position.
    pub async fn ids_for_voter_and_position<'e>(
        db: impl PgExecutor<'e>,
        voter_id: DbId,
        vacant_position_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT v.id
             FROM votes v
             JOIN candidatures c ON c.id = v.candidature_id
             WHERE v.voter_id = $1 AND c.vacant_position_id = $2",
        )
        .bind(voter_id)
        .bind(vacant_position_id)
        .fetch_all(db)
        .await
    }
}
