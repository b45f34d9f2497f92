//! Repository for the `items` table.

use sqlx::PgExecutor;
use sportasso_core::types::DbId;
use sportasso_core::validation::records::ItemRecord;

use crate::models::activity::Item;

const COLUMNS: &str = "id, parameter_id, name, description, max_bought_items, \
    default_price_cents, member_price_cents, created_at, updated_at";

pub struct ItemRepo;

impl ItemRepo {
    pub async fn create<'e>(db: impl PgExecutor<'e>, input: &ItemRecord) -> Result<Item, sqlx::Error> {
        let query = format!(
            "INSERT INTO items
                (parameter_id, name, description, max_bought_items,
                 default_price_cents, member_price_cents)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(input.parameter_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.max_bought_items)
            .bind(input.default_price_cents)
            .bind(input.member_price_cents)
            .fetch_one(db)
            .await
    }

    pub async fn find_by_id<'e>(db: impl PgExecutor<'e>, id: DbId) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
    }

    pub async fn update<'e>(
        db: impl PgExecutor<'e>,
        id: DbId,
        input: &ItemRecord,
    ) -> Result<Option<Item>, sqlx::Error> {
        let query = format!(
            "UPDATE items SET
                parameter_id = $2, name = $3, description = $4, max_bought_items = $5,
                default_price_cents = $6, member_price_cents = $7
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Item>(&query)
            .bind(id)
            .bind(input.parameter_id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.max_bought_items)
            .bind(input.default_price_cents)
            .bind(input.member_price_cents)
            .fetch_optional(db)
            .await
    }
}
