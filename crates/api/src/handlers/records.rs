//! Create, update and fetch handlers shared by every validated entity.
//!
//! Bodies are parsed into the entity's candidate record, checked against the
//! business rules and written in one guarded transaction.

use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde_json::Value;
use sportasso_core::error::CoreError;
use sportasso_core::types::DbId;
use sportasso_core::validation::records::Candidate;
use sportasso_core::validation::rules::EntityKind;
use sportasso_db::guarded;
use sportasso_db::store::{self, Stored};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/{entities}
///
/// Returns the created row with HTTP 201, or 422 with the violations.
pub async fn create(
    state: AppState,
    kind: EntityKind,
    body: Value,
) -> AppResult<(StatusCode, Json<DataResponse<Stored>>)> {
    let candidate = parse_candidate(kind, body, None)?;
    let today = Utc::now().date_naive();

    let stored = guarded::create(&state.pool, &candidate, today).await?;
    tracing::info!(entity = %kind, id = stored.id(), "Created record");

    Ok((StatusCode::CREATED, Json(DataResponse { data: stored })))
}

/// PUT /api/v1/{entities}/{id}
///
/// The row is replaced as a whole. Returns 404 if it does not exist.
pub async fn update(
    state: AppState,
    kind: EntityKind,
    id: DbId,
    body: Value,
) -> AppResult<Json<DataResponse<Stored>>> {
    let candidate = parse_candidate(kind, body, Some(id))?;
    let today = Utc::now().date_naive();

    let stored = guarded::update(&state.pool, &candidate, today).await?;
    tracing::info!(entity = %kind, id, "Updated record");

    Ok(Json(DataResponse { data: stored }))
}

/// GET /api/v1/{entities}/{id}
pub async fn get(
    state: AppState,
    kind: EntityKind,
    id: DbId,
) -> AppResult<Json<DataResponse<Stored>>> {
    let stored = store::find(&state.pool, kind, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: kind.as_str(),
            id,
        }))?;
    Ok(Json(DataResponse { data: stored }))
}

/// Parse a JSON body into a candidate of `kind`.
///
/// The row id comes from the path only: any `id` in the body is replaced by
/// `id` (or dropped on creation).
pub fn parse_candidate(kind: EntityKind, body: Value, id: Option<DbId>) -> AppResult<Candidate> {
    let Value::Object(mut fields) = body else {
        return Err(AppError::BadRequest(format!(
            "A {kind} record must be a JSON object"
        )));
    };

    match id {
        Some(id) => {
            fields.insert("id".into(), Value::from(id));
        }
        None => {
            fields.remove("id");
        }
    }

    Candidate::from_json(kind, Value::Object(fields))
        .map_err(|e| AppError::BadRequest(format!("Invalid {kind} record: {e}")))
}
