//! Repository for the `memberships` table.

use sqlx::PgExecutor;
use sportasso_core::types::{Date, DbId};
use sportasso_core::validation::records::MembershipRecord;

use crate::models::membership::Membership;

const COLUMNS: &str = "id, member_id, membership_type_id, expiration_date, certificate_date, \
    payment_mean, cheque_bank, created_at, updated_at";

pub struct MembershipRepo;

impl MembershipRepo {
    pub async fn create<'e>(
        db: impl PgExecutor<'e>,
        input: &MembershipRecord,
    ) -> Result<Membership, sqlx::Error> {
        let query = format!(
            "INSERT INTO memberships
                (member_id, membership_type_id, expiration_date, certificate_date,
                 payment_mean, cheque_bank)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Membership>(&query)
            .bind(input.member_id)
            .bind(input.membership_type_id)
            .bind(input.expiration_date)
            .bind(input.certificate_date)
            .bind(input.payment_mean.as_str())
            .bind(&input.cheque_bank)
            .fetch_one(db)
            .await
    }

    pub async fn find_by_id<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Membership>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM memberships WHERE id = $1");
        sqlx::query_as::<_, Membership>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    /// Replace the editable columns. `created_at` is never rewritten.
    pub async fn update<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
        input: &MembershipRecord,
    ) -> Result<Option<Membership>, sqlx::Error> {
        let query = format!(
            "UPDATE memberships SET
                member_id = $2, membership_type_id = $3, expiration_date = $4,
                certificate_date = $5, payment_mean = $6, cheque_bank = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Membership>(&query)
            .bind(id)
            .bind(input.member_id)
            .bind(input.membership_type_id)
            .bind(input.expiration_date)
            .bind(input.certificate_date)
            .bind(input.payment_mean.as_str())
            .bind(&input.cheque_bank)
            .fetch_optional(db)
            .await
    }

    /// Greatest expiration date across the user's memberships.
    pub async fn latest_expiration<'e>(
        db: impl PgExecutor<'e>,
        member_id: DbId,
    ) -> Result<Option<Date>, sqlx::Error> {
        sqlx::query_scalar("SELECT MAX(expiration_date) FROM memberships WHERE member_id = $1")
            .bind(member_id)
            .fetch_one(db)
            .await
    }
}
