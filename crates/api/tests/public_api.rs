//! Public views: front page, news feed, articles, weekmails, sports,
//! activities and balances.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, get, post_json};
use serde_json::{json, Value};
use sqlx::PgPool;
use sportasso_core::types::Timestamp;
use sportasso_db::models::communication::{CreateArticle, CreateWeekmail};
use sportasso_db::models::schedule::CreateSport;
use sportasso_db::repositories::{ArticleRepo, SportRepo, WeekmailRepo};

fn activity(slug: &str, publication: Option<Timestamp>, big: bool) -> Value {
    let now = Utc::now();
    json!({
        "title": format!("Activity {slug}"),
        "slug": slug,
        "content": "",
        "start_date": now - Duration::days(1),
        "end_date": now + Duration::days(30),
        "publication_date": publication,
        "is_frontpage": true,
        "is_big_activity": big
    })
}

async fn create(pool: &PgPool, uri: &str, body: Value) -> i64 {
    let app = common::build_test_app(pool.clone());
    let response = post_json(app, uri, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn new_article(pool: &PgPool, title: &str, publication: Option<Timestamp>) -> i64 {
    let input = CreateArticle {
        title: title.to_string(),
        content: String::new(),
        publication_date: publication,
        is_frontpage: Some(true),
    };
    ArticleRepo::create(pool, &input).await.unwrap().id
}

async fn new_weekmail(pool: &PgPool, subject: &str, sent: Option<Timestamp>) -> i64 {
    let input = CreateWeekmail {
        subject: subject.to_string(),
        introduction: None,
        conclusion: None,
        sent_date: sent,
    };
    WeekmailRepo::create(pool, &input).await.unwrap().id
}

#[sqlx::test(migrations = "../db/migrations")]
async fn front_page_lists_current_items_and_agenda(pool: PgPool) {
    let now = Utc::now();
    create(&pool, "/api/v1/activities", activity("live", Some(now - Duration::days(2)), false)).await;
    create(&pool, "/api/v1/activities", activity("draft", None, false)).await;
    let mut finished = activity("finished", Some(now - Duration::days(20)), false);
    finished["start_date"] = json!(now - Duration::days(10));
    finished["end_date"] = json!(now - Duration::days(1));
    create(&pool, "/api/v1/activities", finished).await;
    create(
        &pool,
        "/api/v1/informations",
        json!({ "title": "Gym closed", "is_important": true, "is_published": true }),
    )
    .await;
    create(
        &pool,
        "/api/v1/informations",
        json!({
            "title": "Old news",
            "end_date": now - Duration::days(1),
            "is_important": true,
            "is_published": true
        }),
    )
    .await;
    new_article(&pool, "Welcome", Some(now - Duration::hours(1))).await;

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/front-page").await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();

    let slugs: Vec<&str> = data["activities"]
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["live"]);
    assert_eq!(data["articles"][0]["title"], "Welcome");
    assert_eq!(data["informations"].as_array().unwrap().len(), 1);
    assert_eq!(data["informations"][0]["title"], "Gym closed");
    assert_eq!(data["agenda"].as_array().unwrap().len(), 3);
    assert_eq!(data["agenda"][0]["date"], json!(now.date_naive()));
    assert!(data["featured_match"].is_null());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn news_is_paginated_by_nine(pool: PgPool) {
    let now = Utc::now();
    for i in 0..10 {
        new_article(&pool, &format!("Article {i}"), Some(now - Duration::hours(i + 1))).await;
    }
    new_article(&pool, "Scheduled", Some(now + Duration::days(1))).await;

    let app = common::build_test_app(pool.clone());
    let page = body_json(get(app, "/api/v1/news").await).await["data"].clone();
    assert_eq!(page["number"], 1);
    assert_eq!(page["num_pages"], 2);
    assert_eq!(page["total_count"], 10);
    assert_eq!(page["items"].as_array().unwrap().len(), 9);
    assert_eq!(page["items"][0]["kind"], "article");
    assert_eq!(page["items"][0]["item"]["title"], "Article 0");

    let app = common::build_test_app(pool.clone());
    let page = body_json(get(app, "/api/v1/news?page=2").await).await["data"].clone();
    assert_eq!(page["items"].as_array().unwrap().len(), 1);
    assert_eq!(page["items"][0]["item"]["title"], "Article 9");

    let app = common::build_test_app(pool.clone());
    let page = body_json(get(app, "/api/v1/news?page=abc").await).await["data"].clone();
    assert_eq!(page["number"], 1);

    let app = common::build_test_app(pool);
    let page = body_json(get(app, "/api/v1/news?page=99").await).await["data"].clone();
    assert_eq!(page["number"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn activities_listing_splits_big_and_regular(pool: PgPool) {
    let now = Utc::now();
    create(&pool, "/api/v1/activities", activity("gala", Some(now - Duration::days(1)), true)).await;
    create(&pool, "/api/v1/activities", activity("tournament", Some(now - Duration::days(2)), false)).await;

    let app = common::build_test_app(pool.clone());
    let page = body_json(get(app, "/api/v1/activities?kind=big").await).await["data"].clone();
    assert_eq!(page["total_count"], 1);
    assert_eq!(page["items"][0]["slug"], "gala");

    let app = common::build_test_app(pool.clone());
    let page = body_json(get(app, "/api/v1/activities?kind=regular").await).await["data"].clone();
    assert_eq!(page["total_count"], 1);
    assert_eq!(page["items"][0]["slug"], "tournament");

    let app = common::build_test_app(pool);
    let page = body_json(get(app, "/api/v1/activities").await).await["data"].clone();
    assert_eq!(page["total_count"], 2);
    assert_eq!(page["items"][0]["slug"], "gala");
    assert_eq!(page["items"][1]["slug"], "tournament");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn activity_detail_hides_drafts_and_future(pool: PgPool) {
    let now = Utc::now();
    let live = create(&pool, "/api/v1/activities", activity("live", Some(now - Duration::days(1)), false)).await;
    let draft = create(&pool, "/api/v1/activities", activity("draft", None, false)).await;
    let future = create(&pool, "/api/v1/activities", activity("soon", Some(now + Duration::days(3)), false)).await;

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/activities/{live}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["slug"], "live");

    for id in [draft, future, 999_999] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/api/v1/activities/{id}")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await["code"], "NOT_FOUND");
    }
}

#[sqlx::test(migrations = "../db/migrations")]
async fn articles_and_weekmails_show_published_only(pool: PgPool) {
    let now = Utc::now();
    for i in 0..10 {
        new_article(&pool, &format!("Article {i}"), Some(now - Duration::hours(i + 1))).await;
    }
    let draft = new_article(&pool, "Draft", None).await;
    let scheduled = new_article(&pool, "Scheduled", Some(now + Duration::days(1))).await;
    let sent = new_weekmail(&pool, "Week 1", Some(now - Duration::days(1))).await;
    let unsent = new_weekmail(&pool, "Week 2", None).await;

    let app = common::build_test_app(pool.clone());
    let page = body_json(get(app, "/api/v1/articles").await).await["data"].clone();
    assert_eq!(page["total_count"], 10);
    assert_eq!(page["items"].as_array().unwrap().len(), 9);
    assert_eq!(page["items"][0]["title"], "Article 0");

    let app = common::build_test_app(pool.clone());
    let page = body_json(get(app, "/api/v1/articles?page=2").await).await["data"].clone();
    assert_eq!(page["items"][0]["title"], "Article 9");

    for id in [draft, scheduled] {
        let app = common::build_test_app(pool.clone());
        let response = get(app, &format!("/api/v1/articles/{id}")).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    let app = common::build_test_app(pool.clone());
    let page = body_json(get(app, "/api/v1/weekmails").await).await["data"].clone();
    assert_eq!(page["total_count"], 1);
    assert_eq!(page["items"][0]["subject"], "Week 1");

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/weekmails/{sent}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["subject"], "Week 1");

    let app = common::build_test_app(pool);
    let response = get(app, &format!("/api/v1/weekmails/{unsent}")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn sports_overview_splits_open_and_closed(pool: PgPool) {
    for (name, is_open) in [("Volley", true), ("Aviron", false), ("Badminton", true)] {
        let input = CreateSport {
            name: name.to_string(),
            slug: name.to_lowercase(),
            is_open: Some(is_open),
        };
        SportRepo::create(&pool, &input).await.unwrap();
    }

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/sports").await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    let names = |list: &Value| -> Vec<String> {
        list.as_array()
            .unwrap()
            .iter()
            .map(|s| s["name"].as_str().unwrap().to_string())
            .collect()
    };
    assert_eq!(names(&data["open"]), vec!["Badminton", "Volley"]);
    assert_eq!(names(&data["closed"]), vec!["Aviron"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn activity_balance_sums_fees_and_subventions(pool: PgPool) {
    let published = Some(Utc::now() - Duration::days(1));
    let activity_id = create(&pool, "/api/v1/activities", activity("party", published, false)).await;

    for (name, amount) in [("Hall", -30_000), ("City grant", 50_000), ("Drinks", -5_000)] {
        create(
            &pool,
            "/api/v1/financial-operations",
            json!({
                "name": name,
                "description": "",
                "amount_cents": amount,
                "unregistered_user": "Treasurer",
                "related_activity_id": activity_id
            }),
        )
        .await;
    }

    let app = common::build_test_app(pool.clone());
    let response = get(app, &format!("/api/v1/activities/{activity_id}/balance")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["activity_id"], activity_id);
    assert_eq!(data["fees"], -35_000);
    assert_eq!(data["subventions"], 50_000);
    assert_eq!(data["net"], 15_000);

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/activities/999999/balance").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
