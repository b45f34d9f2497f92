//! Lending actions beyond plain create/update.

use axum::extract::{Path, State};
use axum::Json;
use sportasso_core::error::CoreError;
use sportasso_core::types::DbId;
use sportasso_db::models::equipment::Lending;
use sportasso_db::repositories::LendingRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/lendings/{id}/return
///
/// Marks the lending returned, which frees its quantity for new lendings.
/// Returning twice is a no-op.
pub async fn mark_returned(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Lending>>> {
    let lending = LendingRepo::mark_returned(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "lending",
            id,
        }))?;

    tracing::info!(lending_id = id, equipment_id = lending.equipment_id, "Lending returned");
    Ok(Json(DataResponse { data: lending }))
}
