//! Route definitions for the `/activities` resource.

use axum::routing::get;
use axum::Router;
use sportasso_core::validation::rules::EntityKind;

use crate::handlers::public;
use crate::routes::records::{create_route, update_route};
use crate::state::AppState;

/// Routes mounted at `/activities`.
///
/// ```text
/// GET    /                -> list_activities   (?kind=big|regular, ?page)
/// POST   /                -> create
/// GET    /{id}            -> activity_detail   (published only)
/// PUT    /{id}            -> update
/// GET    /{id}/balance    -> activity_balance
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            create_route(EntityKind::Activity).get(public::list_activities),
        )
        .route(
            "/{id}",
            get(public::activity_detail).merge(update_route(EntityKind::Activity)),
        )
        .route("/{id}/balance", get(public::activity_balance))
}
