//! Repository for the `parameters` table.

use sqlx::PgExecutor;
use sportasso_core::types::DbId;
use sportasso_core::validation::records::ParameterRecord;

use crate::models::activity::Parameter;

const COLUMNS: &str = "id, name, description, activity_id, parent_parameter_id, \
    is_member_only, is_mandatory, is_published, max_bought_items, \
    default_price_cents, member_price_cents, created_at, updated_at";

pub struct ParameterRepo;

impl ParameterRepo {
    pub async fn create<'e>(
        db: impl PgExecutor<'e>,
        input: &ParameterRecord,
    ) -> Result<Parameter, sqlx::Error> {
        let query = format!(
            "INSERT INTO parameters
                (name, description, activity_id, parent_parameter_id, is_member_only,
                 is_mandatory, is_published, max_bought_items, default_price_cents,
                 member_price_cents)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Parameter>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.activity_id)
            .bind(input.parent_parameter_id)
            .bind(input.is_member_only)
            .bind(input.is_mandatory)
            .bind(input.is_published)
            .bind(input.max_bought_items)
            .bind(input.default_price_cents)
            .bind(input.member_price_cents)
            .fetch_one(db)
            .await
    }

    pub async fn find_by_id<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
    ) -> Result<Option<Parameter>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM parameters WHERE id = $1");
        sqlx::query_as::<_, Parameter>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn update<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
        input: &ParameterRecord,
    ) -> Result<Option<Parameter>, sqlx::Error> {
        let query = format!(
            "UPDATE parameters SET
                name = $2, description = $3, activity_id = $4, parent_parameter_id = $5,
                is_member_only = $6, is_mandatory = $7, is_published = $8,
                max_bought_items = $9, default_price_cents = $10, member_price_cents = $11
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Parameter>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.activity_id)
            .bind(input.parent_parameter_id)
            .bind(input.is_member_only)
            .bind(input.is_mandatory)
            .bind(input.is_published)
            .bind(input.max_bought_items)
            .bind(input.default_price_cents)
            .bind(input.member_price_cents)
            .fetch_optional(db)
            .await
    }
}
