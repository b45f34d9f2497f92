//! Repository for the `financial_operations` table.

use sqlx::PgExecutor;
use sportasso_core::types::{Cents, DbId};
use sportasso_core::validation::records::FinancialOperationRecord;

use crate::models::treasury::FinancialOperation;

const COLUMNS: &str = "id, name, description, amount_cents, registered_user_id, \
    unregistered_user, related_activity_id, processed_date, created_at, updated_at";

pub struct FinancialOperationRepo;

impl FinancialOperationRepo {
    pub async fn create<'e>(
        db: impl PgExecutor<'e>,
        input: &FinancialOperationRecord,
    ) -> Result<FinancialOperation, sqlx::Error> {
        let query = format!(
            "INSERT INTO financial_operations
                (name, description, amount_cents, registered_user_id, unregistered_user,
                 related_activity_id, processed_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FinancialOperation>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.amount_cents)
            .bind(input.registered_user_id)
            .bind(&input.unregistered_user)
            .bind(input.related_activity_id)
            .bind(input.processed_date)
            .fetch_one(db)
            .await
    }

    pub async fn find_by_id<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<FinancialOperation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM financial_operations WHERE id = $1");
        sqlx::query_as::<_, FinancialOperation>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn update<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
        input: &FinancialOperationRecord,
    ) -> Result<Option<FinancialOperation>, sqlx::Error> {
        let query = format!(
            "UPDATE financial_operations SET
                name = $2, description = $3, amount_cents = $4, registered_user_id = $5,
                unregistered_user = $6, related_activity_id = $7, processed_date = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FinancialOperation>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.amount_cents)
            .bind(input.registered_user_id)
            .bind(&input.unregistered_user)
            .bind(input.related_activity_id)
            .bind(input.processed_date)
            .fetch_optional(db)
            .await
    }

    /// Signed amounts of every operation related to an activity.
    pub async fn amounts_for_activity<'e>(
        db: impl PgExecutor<'e>,
        activity_id: DbId,
    ) -> Result<Vec<Cents>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT amount_cents FROM financial_operations WHERE related_activity_id = $1 ORDER BY id",
        )
        .bind(activity_id)
        .fetch_all(db)
        .await
    }
}
