//! Shared helpers for HTTP-level tests.
//!
//! Requests go straight to the router through `tower::ServiceExt::oneshot`,
//! without a TCP listener.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use sportasso_api::config::ServerConfig;
use sportasso_api::router::build_app_router;
use sportasso_api::state::AppState;
use sportasso_core::types::DbId;
use sportasso_core::validation::records::EquipmentRecord;
use sportasso_db::models::membership::CreateUser;
use sportasso_db::repositories::{EquipmentRepo, UserRepo};
use tower::ServiceExt;

/// Test configuration: local CORS origin, 30 second timeouts.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..ServerConfig::default()
    }
}

/// The production router and middleware stack over the given pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

pub async fn send(app: Router, method: Method, uri: &str, body: Option<serde_json::Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

/// POST a body that is sent as is, declared as JSON.
pub async fn post_raw(app: Router, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn new_user(pool: &PgPool, email: &str) -> DbId {
    let input = CreateUser {
        full_name: format!("User {email}"),
        email: email.to_string(),
    };
    UserRepo::create(pool, &input).await.unwrap().id
}

pub async fn new_equipment(pool: &PgPool, quantity: i32) -> DbId {
    let record = EquipmentRecord {
        id: None,
        name: "Shuttlecocks".into(),
        description: None,
        quantity,
    };
    EquipmentRepo::create(pool, &record).await.unwrap().id
}
