//! Repository for the `lendings` table.

use sqlx::PgExecutor;
use sportasso_core::types::DbId;
use sportasso_core::validation::records::LendingRecord;

use crate::models::equipment::Lending;

const COLUMNS: &str = "id, equipment_id, borrower_id, quantity, deposit, start_date, end_date, \
    returned, created_at, updated_at";

pub struct LendingRepo;

impl LendingRepo {
    pub async fn create<'e>(db: impl PgExecutor<'e>, input: &LendingRecord) -> Result<Lending, sqlx::Error> {
        let query = format!(
            "INSERT INTO lendings
                (equipment_id, borrower_id, quantity, deposit, start_date, end_date, returned)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lending>(&query)
            .bind(input.equipment_id)
            .bind(input.borrower_id)
            .bind(input.quantity)
            .bind(input.deposit)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.returned)
            .fetch_one(db)
            .await
    }

    pub async fn find_by_id<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Lending>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lendings WHERE id = $1");
        sqlx::query_as::<_, Lending>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn update<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
        input: &LendingRecord,
    ) -> Result<Option<Lending>, sqlx::Error> {
        let query = format!(
            "UPDATE lendings SET
                equipment_id = $2, borrower_id = $3, quantity = $4, deposit = $5,
                start_date = $6, end_date = $7, returned = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lending>(&query)
            .bind(id)
            .bind(input.equipment_id)
            .bind(input.borrower_id)
            .bind(input.quantity)
            .bind(input.deposit)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(input.returned)
            .fetch_optional(db)
            .await
    }

    /// Mark a lending as returned, freeing its quantity.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn mark_returned<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Lending>, sqlx::Error> {
        let query = format!("UPDATE lendings SET returned = true WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Lending>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    /// Unreturned lendings of the equipment.
    pub async fn list_outstanding<'e>(
        db: impl PgExecutor<'e>,
        equipment_id: DbId,
    ) -> Result<Vec<Lending>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM lendings
             WHERE equipment_id = $1 AND returned = false
             ORDER BY start_date, id"
        );
        sqlx::query_as::<_, Lending>(&query)
            .bind(equipment_id)
            .fetch_all(db)
            .await
    }
}
