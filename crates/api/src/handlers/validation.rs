//! Dry-run validation: evaluate a candidate without writing it.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde_json::Value;
use sportasso_core::validation::rules::{EntityKind, ValidationReport};
use sportasso_db::guarded;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::records::parse_candidate;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/validation/{entity}
///
/// `entity` is the entity kind in snake or kebab case (`vacant_position`,
/// `vacant-position`). A record carrying an `id` is checked as an update of
/// that row. Always answers 200 with the report; nothing is written.
pub async fn validate(
    State(state): State<AppState>,
    Path(entity): Path<String>,
    AppJson(body): AppJson<Value>,
) -> AppResult<Json<DataResponse<ValidationReport>>> {
    let kind: EntityKind = entity
        .replace('-', "_")
        .parse()
        .map_err(|e: sportasso_core::error::CoreError| AppError::BadRequest(e.to_string()))?;

    let id = body.get("id").and_then(Value::as_i64);
    let candidate = parse_candidate(kind, body, id)?;
    let report = guarded::check(&state.pool, &candidate, Utc::now().date_naive()).await?;

    tracing::debug!(
        entity = %kind,
        is_valid = report.is_valid,
        violations = report.violations.len(),
        "Dry-run validation"
    );

    Ok(Json(DataResponse { data: report }))
}
