pub mod activities;
pub mod health;
pub mod lendings;
pub mod records;

use axum::routing::{get, post};
use axum::Router;
use sportasso_core::validation::rules::EntityKind;

use crate::handlers::{public, validation};
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /front-page                                      home page listings (GET)
/// /news                                            articles and weekmails (GET, ?page)
/// /articles, /weekmails                            published list (GET, ?page)
///   .../{id}                                       published detail (GET)
/// /sports                                          open and closed sports (GET)
///
/// /validation/{entity}                             dry-run validation (POST)
///
/// /activities                                      list (?kind, ?page), create
/// /activities/{id}                                 published detail, update
/// /activities/{id}/balance                         treasury balance (GET)
///
/// /lendings                                        create
/// /lendings/{id}                                   get, update
/// /lendings/{id}/return                            mark returned (POST)
///
/// /parameters, /items, /participants,
/// /elections, /vacant-positions, /candidatures,
/// /votes, /locations, /permanences, /sessions,
/// /cancelled-sessions, /equipment, /memberships,
/// /financial-operations, /informations             create
///   .../{id}                                       get, update
/// ```
pub fn api_routes() -> Router<AppState> {
    let mut router = Router::new()
        .route("/front-page", get(public::front_page))
        .route("/news", get(public::news))
        .route("/articles", get(public::list_articles))
        .route("/articles/{id}", get(public::article_detail))
        .route("/weekmails", get(public::list_weekmails))
        .route("/weekmails/{id}", get(public::weekmail_detail))
        .route("/sports", get(public::sports_overview))
        .route("/validation/{entity}", post(validation::validate))
        .nest("/activities", activities::router())
        .nest("/lendings", lendings::router());

    for (path, kind) in RECORD_ROUTES {
        router = router.nest(path, records::router(kind));
    }

    router
}

/// Validated entities served by the plain record routes.
const RECORD_ROUTES: [(&str, EntityKind); 15] = [
    ("/parameters", EntityKind::Parameter),
    ("/items", EntityKind::Item),
    ("/participants", EntityKind::Participant),
    ("/elections", EntityKind::Election),
    ("/vacant-positions", EntityKind::VacantPosition),
    ("/candidatures", EntityKind::Candidature),
    ("/votes", EntityKind::Vote),
    ("/locations", EntityKind::Location),
    ("/permanences", EntityKind::Permanence),
    ("/sessions", EntityKind::Session),
    ("/cancelled-sessions", EntityKind::CancelledSession),
    ("/equipment", EntityKind::Equipment),
    ("/memberships", EntityKind::Membership),
    ("/financial-operations", EntityKind::FinancialOperation),
    ("/informations", EntityKind::Information),
];
