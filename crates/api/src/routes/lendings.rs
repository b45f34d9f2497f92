//! Route definitions for the `/lendings` resource.

use axum::routing::post;
use axum::Router;
use sportasso_core::validation::rules::EntityKind;

use crate::handlers::lendings;
use crate::routes::records;
use crate::state::AppState;

/// Routes mounted at `/lendings`.
///
/// ```text
/// POST   /               -> create
/// GET    /{id}           -> get
/// PUT    /{id}           -> update
/// POST   /{id}/return    -> mark_returned
/// ```
pub fn router() -> Router<AppState> {
    records::router(EntityKind::Lending).route("/{id}/return", post(lendings::mark_returned))
}
