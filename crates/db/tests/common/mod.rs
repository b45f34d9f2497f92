//! Shared fixtures for record-store tests.
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};
use sqlx::PgPool;
use sportasso_core::membership::PaymentMean;
use sportasso_core::types::{Date, DbId, TimeOfDay, Timestamp};
use sportasso_core::validation::records::*;
use sportasso_db::models::membership::CreateUser;
use sportasso_db::models::schedule::CreateSport;
use sportasso_db::repositories::{
    ActivityRepo, EquipmentRepo, ItemRepo, MembershipRepo, ParameterRepo, SportRepo, UserRepo,
};

pub fn date(y: i32, m: u32, d: u32) -> Date {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn at(y: i32, m: u32, d: u32, h: u32) -> Timestamp {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
}

pub fn time(h: u32) -> TimeOfDay {
    NaiveTime::from_hms_opt(h, 0, 0).unwrap()
}

pub async fn new_user(pool: &PgPool, email: &str) -> DbId {
    let input = CreateUser {
        full_name: format!("User {email}"),
        email: email.to_string(),
    };
    UserRepo::create(pool, &input).await.unwrap().id
}

/// A user whose membership runs until `expiration`.
pub async fn new_member(pool: &PgPool, email: &str, expiration: Date) -> DbId {
    let id = new_user(pool, email).await;
    let record = MembershipRecord {
        id: None,
        member_id: id,
        membership_type_id: None,
        created_at: None,
        expiration_date: expiration,
        certificate_date: expiration - chrono::Duration::weeks(26),
        payment_mean: PaymentMean::Cash,
        cheque_bank: None,
    };
    MembershipRepo::create(pool, &record).await.unwrap();
    id
}

pub async fn new_sport(pool: &PgPool, slug: &str, is_open: bool) -> DbId {
    let input = CreateSport {
        name: slug.to_uppercase(),
        slug: slug.to_string(),
        is_open: Some(is_open),
    };
    SportRepo::create(pool, &input).await.unwrap().id
}

pub async fn new_equipment(pool: &PgPool, quantity: i32) -> DbId {
    let record = EquipmentRecord {
        id: None,
        name: "Racket".into(),
        description: None,
        quantity,
    };
    EquipmentRepo::create(pool, &record).await.unwrap().id
}

pub fn activity(slug: &str, publication: Option<Timestamp>, end: Timestamp) -> ActivityRecord {
    ActivityRecord {
        id: None,
        title: format!("Activity {slug}"),
        slug: slug.to_string(),
        content: String::new(),
        summary: None,
        start_date: end - chrono::Duration::days(1),
        end_date: end,
        publication_date: publication,
        is_member_only: false,
        is_frontpage: true,
        is_big_activity: false,
        location_id: None,
    }
}

/// Activity -> parameter -> item, with optional limits. Returns the item id.
pub async fn new_item(
    pool: &PgPool,
    slug: &str,
    member_only: bool,
    parameter_max: Option<i32>,
    item_max: Option<i32>,
) -> DbId {
    let mut record = activity(slug, Some(at(2024, 1, 1, 0)), at(2030, 1, 1, 0));
    record.is_member_only = member_only;
    let activity = ActivityRepo::create(pool, &record).await.unwrap();

    let parameter = ParameterRepo::create(
        pool,
        &ParameterRecord {
            id: None,
            name: "Menu".into(),
            description: None,
            activity_id: Some(activity.id),
            parent_parameter_id: None,
            is_member_only: false,
            is_mandatory: false,
            is_published: true,
            max_bought_items: parameter_max,
            default_price_cents: 1000,
            member_price_cents: 800,
        },
    )
    .await
    .unwrap();

    ItemRepo::create(
        pool,
        &ItemRecord {
            id: None,
            parameter_id: parameter.id,
            name: "Standard".into(),
            description: None,
            max_bought_items: item_max,
            default_price_cents: 1000,
            member_price_cents: 800,
        },
    )
    .await
    .unwrap()
    .id
}
