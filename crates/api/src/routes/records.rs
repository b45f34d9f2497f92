//! Route builders shared by every validated entity.

use axum::extract::{Path, State};
use axum::routing::{get, post, put, MethodRouter};
use axum::Router;
use serde_json::Value;
use sportasso_core::types::DbId;
use sportasso_core::validation::rules::EntityKind;

use crate::extract::AppJson;
use crate::handlers::records;
use crate::state::AppState;

/// Routes mounted at `/{entities}`.
///
/// ```text
/// POST   /       -> create
/// GET    /{id}   -> get
/// PUT    /{id}   -> update
/// ```
pub fn router(kind: EntityKind) -> Router<AppState> {
    Router::new()
        .route("/", create_route(kind))
        .route("/{id}", member_route(kind))
}

/// `POST` handler creating a record of `kind`.
pub fn create_route(kind: EntityKind) -> MethodRouter<AppState> {
    post(move |State(state): State<AppState>, AppJson(body): AppJson<Value>| {
        records::create(state, kind, body)
    })
}

/// `GET` and `PUT` handlers on one record of `kind`.
fn member_route(kind: EntityKind) -> MethodRouter<AppState> {
    fetch_route(kind).merge(update_route(kind))
}

/// `GET` handler returning one stored record of `kind`.
fn fetch_route(kind: EntityKind) -> MethodRouter<AppState> {
    get(move |State(state): State<AppState>, Path(id): Path<DbId>| {
        records::get(state, kind, id)
    })
}

/// `PUT` handler replacing one record of `kind`.
pub fn update_route(kind: EntityKind) -> MethodRouter<AppState> {
    put(
        move |State(state): State<AppState>, Path(id): Path<DbId>, AppJson(body): AppJson<Value>| {
            records::update(state, kind, id, body)
        },
    )
}
