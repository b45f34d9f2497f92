//! Repository for the `participants` table.

use sqlx::PgExecutor;
use sportasso_core::types::DbId;
use sportasso_core::validation::records::ParticipantRecord;

use crate::models::activity::Participant;

const COLUMNS: &str = "id, item_id, registered_user_id, unregistered_user, payment_mean, \
    cheque_bank, created_at, updated_at";

/// Id, item and parameter of one purchase, used by the capacity rules.
#[derive(Debug, Clone, Copy, sqlx::FromRow)]
pub struct PurchaseRef {
    pub id: DbId,
    pub item_id: DbId,
    pub parameter_id: DbId,
}

pub struct ParticipantRepo;

impl ParticipantRepo {
    pub async fn create<'e>(
        db: impl PgExecutor<'e>,
        input: &ParticipantRecord,
    ) -> Result<Participant, sqlx::Error> {
        let query = format!(
            "INSERT INTO participants
                (item_id, registered_user_id, unregistered_user, payment_mean, cheque_bank)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Participant>(&query)
            .bind(input.item_id)
            .bind(input.registered_user_id)
            .bind(&input.unregistered_user)
            .bind(input.payment_mean.as_str())
            .bind(&input.cheque_bank)
            .fetch_one(db)
            .await
    }

    pub async fn find_by_id<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Participant>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM participants WHERE id = $1");
        sqlx::query_as::<_, Participant>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn update<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
        input: &ParticipantRecord,
    ) -> Result<Option<Participant>, sqlx::Error> {
        let query = format!(
            "UPDATE participants SET
                item_id = $2, registered_user_id = $3, unregistered_user = $4,
                payment_mean = $5, cheque_bank = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Participant>(&query)
            .bind(id)
            .bind(input.item_id)
            .bind(input.registered_user_id)
            .bind(&input.unregistered_user)
            .bind(input.payment_mean.as_str())
            .bind(&input.cheque_bank)
            .fetch_optional(db)
            .await
    }

    /// Every purchase of an item of the given parameter.
    pub async fn list_for_parameter<'e>(
        db: impl PgExecutor<'e>,
        parameter_id: DbId,
    ) -> Result<Vec<PurchaseRef>, sqlx::Error> {
        sqlx::query_as::<_, PurchaseRef>(
            "SELECT p.id, p.item_id, i.parameter_id
             FROM participants p
             JOIN items i ON i.id = p.item_id
             WHERE i.parameter_id = $1",
        )
        .bind(parameter_id)
        .fetch_all(db)
        .await
    }
}
