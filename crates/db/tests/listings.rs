//! Current-period listings used by the public pages.

mod common;

use sqlx::PgPool;
use sportasso_core::validation::records::{InformationRecord, SessionRecord};
use sportasso_db::models::communication::{CreateArticle, CreateWeekmail};
use sportasso_db::models::schedule::CreateMatch;
use sportasso_db::repositories::{
    ActivityRepo, ArticleRepo, InformationRepo, MatchRepo, SessionRepo, SportRepo, WeekmailRepo,
};

use common::*;

#[sqlx::test(migrations = "./migrations")]
async fn test_frontpage_activities_hide_drafts_and_future(pool: PgPool) {
    let now = at(2024, 6, 1, 12);

    ActivityRepo::create(&pool, &activity("current", Some(at(2024, 5, 1, 0)), at(2024, 7, 1, 0)))
        .await
        .unwrap();
    ActivityRepo::create(&pool, &activity("draft", None, at(2024, 7, 1, 0)))
        .await
        .unwrap();
    ActivityRepo::create(&pool, &activity("scheduled", Some(at(2024, 6, 2, 0)), at(2024, 7, 1, 0)))
        .await
        .unwrap();
    ActivityRepo::create(&pool, &activity("finished", Some(at(2024, 4, 1, 0)), at(2024, 5, 1, 0)))
        .await
        .unwrap();

    // Finished activities are dropped by the front page, not by the query.
    let listed = ActivityRepo::list_frontpage(&pool, now).await.unwrap();
    let slugs: Vec<_> = listed.iter().map(|a| a.slug.as_str()).collect();
    assert_eq!(slugs, vec!["current", "finished"]);

    let regular = ActivityRepo::list_published(&pool, now, Some(false)).await.unwrap();
    let slugs: Vec<_> = regular.iter().map(|a| a.slug.as_str()).collect();
    assert_eq!(slugs, vec!["current", "finished"]);
    assert!(ActivityRepo::list_published(&pool, now, Some(true)).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_published_activities_without_kind_keep_both(pool: PgPool) {
    let now = at(2024, 6, 1, 12);
    let mut big = activity("gala", Some(at(2024, 5, 2, 0)), at(2024, 7, 1, 0));
    big.is_big_activity = true;
    ActivityRepo::create(&pool, &big).await.unwrap();
    ActivityRepo::create(&pool, &activity("training", Some(at(2024, 5, 1, 0)), at(2024, 7, 1, 0)))
        .await
        .unwrap();

    let all = ActivityRepo::list_published(&pool, now, None).await.unwrap();
    let slugs: Vec<_> = all.iter().map(|a| a.slug.as_str()).collect();
    assert_eq!(slugs, vec!["gala", "training"]);

    let big_only = ActivityRepo::list_published(&pool, now, Some(true)).await.unwrap();
    assert_eq!(big_only.len(), 1);
    assert!(big_only[0].is_big_activity);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_sports_are_listed_by_name(pool: PgPool) {
    new_sport(&pool, "volley", true).await;
    new_sport(&pool, "aviron", false).await;

    let sports = SportRepo::list(&pool).await.unwrap();
    let names: Vec<_> = sports.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["AVIRON", "VOLLEY"]);
    assert!(!sports[0].is_open);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_articles_and_weekmails_respect_publication(pool: PgPool) {
    let now = at(2024, 6, 1, 12);
    for (title, published, frontpage) in [
        ("old", Some(at(2024, 5, 1, 0)), true),
        ("inner", Some(at(2024, 5, 15, 0)), false),
        ("future", Some(at(2024, 7, 1, 0)), true),
        ("draft", None, true),
    ] {
        ArticleRepo::create(
            &pool,
            &CreateArticle {
                title: title.into(),
                content: String::new(),
                publication_date: published,
                is_frontpage: Some(frontpage),
            },
        )
        .await
        .unwrap();
    }
    WeekmailRepo::create(
        &pool,
        &CreateWeekmail {
            subject: "Week 22".into(),
            introduction: None,
            conclusion: None,
            sent_date: Some(at(2024, 5, 27, 8)),
        },
    )
    .await
    .unwrap();
    WeekmailRepo::create(
        &pool,
        &CreateWeekmail {
            subject: "Unsent".into(),
            introduction: None,
            conclusion: None,
            sent_date: None,
        },
    )
    .await
    .unwrap();

    let all: Vec<_> = ArticleRepo::list_published(&pool, now, false)
        .await
        .unwrap()
        .into_iter()
        .map(|a| a.title)
        .collect();
    assert_eq!(all, vec!["inner", "old"]);

    let front = ArticleRepo::list_published(&pool, now, true).await.unwrap();
    let front_ids: Vec<_> = front.iter().map(|a| a.id).collect();
    let titles: Vec<_> = front.iter().map(|a| a.title.as_str()).collect();
    assert_eq!(titles, vec!["old"]);

    let sent = WeekmailRepo::list_sent(&pool, now).await.unwrap();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Week 22");

    let found = WeekmailRepo::find_by_id(&pool, sent[0].id).await.unwrap().unwrap();
    assert_eq!(found.subject, "Week 22");
    let article = ArticleRepo::find_by_id(&pool, front_ids[0]).await.unwrap().unwrap();
    assert_eq!(article.title, "old");
    assert!(ArticleRepo::find_by_id(&pool, 999_999).await.unwrap().is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_important_informations_are_published_only(pool: PgPool) {
    for (title, important, published) in [("shown", true, true), ("hidden", true, false), ("minor", false, true)] {
        InformationRepo::create(
            &pool,
            &InformationRecord {
                id: None,
                title: Some(title.into()),
                content: None,
                start_date: None,
                end_date: None,
                is_important: important,
                is_published: published,
            },
        )
        .await
        .unwrap();
    }

    let listed = InformationRepo::list_important(&pool).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].title.as_deref(), Some("shown"));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_next_and_last_match(pool: PgPool) {
    let sport = new_sport(&pool, "rugby", true).await;
    let now = at(2024, 6, 1, 12);
    assert!(MatchRepo::next_upcoming(&pool, now).await.unwrap().is_none());

    for (opponent, when) in [
        ("Lyon", at(2024, 5, 1, 15)),
        ("Paris", at(2024, 5, 20, 15)),
        ("Nantes", at(2024, 6, 10, 15)),
        ("Lille", at(2024, 6, 20, 15)),
    ] {
        MatchRepo::create(
            &pool,
            &CreateMatch {
                sport_id: sport,
                opponent: opponent.into(),
                date: when,
                location_id: None,
            },
        )
        .await
        .unwrap();
    }

    let next = MatchRepo::next_upcoming(&pool, now).await.unwrap().unwrap();
    assert_eq!(next.opponent, "Nantes");
    let last = MatchRepo::last_past(&pool, now).await.unwrap().unwrap();
    assert_eq!(last.opponent, "Paris");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_weekly_sessions_of_open_sports(pool: PgPool) {
    let open = new_sport(&pool, "volley", true).await;
    let closed = new_sport(&pool, "polo", false).await;

    let session = |sport_id, weekday, start| SessionRecord {
        id: None,
        sport_id,
        location_id: None,
        manager_id: None,
        weekday: Some(weekday),
        date: None,
        start_time: time(start),
        end_time: time(start + 2),
    };

    for record in [
        session(open, 2, 20),
        session(open, 2, 18),
        session(open, 4, 18),
        session(closed, 2, 18),
    ] {
        SessionRepo::create(&pool, &record).await.unwrap();
    }

    let monday = SessionRepo::list_weekly_for_open_sports(&pool, &[2]).await.unwrap();
    assert_eq!(monday.len(), 2);
    assert!(monday.iter().all(|s| s.sport_name == "VOLLEY"));
    assert!(monday[0].start_time < monday[1].start_time);

    let both = SessionRepo::list_weekly_for_open_sports(&pool, &[2, 4]).await.unwrap();
    assert_eq!(both.len(), 3);
}
