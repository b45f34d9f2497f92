//! Public views: front page, news feed, articles, weekmails, sports,
//! activities and their balance.
//!
//! Every listing resolves publication windows against a single `now` taken
//! when the request arrives.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use serde::Serialize;
use sportasso_core::error::CoreError;
use sportasso_core::publication::{
    self, featured_match, merge_news, paginate, upcoming_days, Dated, FeaturedMatch, NewsEntry,
    Page, UpcomingDay, PAGE_SIZE, UPCOMING_DAYS,
};
use sportasso_core::treasury::{self, Balance};
use sportasso_core::types::{Date, DbId, Timestamp};
use sportasso_core::weekday::weekday_name;
use sportasso_db::models::activity::Activity;
use sportasso_db::models::communication::{Article, Information, Weekmail};
use sportasso_db::models::schedule::{CancelledSession, Match, SessionListing, Sport};
use sportasso_db::repositories::{
    ActivityRepo, ArticleRepo, CancelledSessionRepo, FinancialOperationRepo, InformationRepo,
    MatchRepo, SessionRepo, SportRepo, WeekmailRepo,
};

use crate::error::{AppError, AppResult};
use crate::query::{ActivityListParams, PageParams};
use crate::response::DataResponse;
use crate::state::AppState;

// ── Front page ───────────────────────────────────────────────────────

/// Everything the home page shows.
#[derive(Debug, Serialize)]
pub struct FrontPage {
    pub activities: Vec<Activity>,
    pub articles: Vec<Article>,
    pub informations: Vec<Information>,
    pub agenda: Vec<AgendaDay>,
    pub featured_match: Option<FeaturedMatch<Match>>,
}

/// One day of the session agenda.
#[derive(Debug, Serialize)]
pub struct AgendaDay {
    pub date: Date,
    pub weekday: i16,
    pub weekday_name: Option<&'static str>,
    pub sessions: Vec<AgendaSession>,
}

/// A weekly session on a given day, with its cancellation if any.
#[derive(Debug, Serialize)]
pub struct AgendaSession {
    #[serde(flatten)]
    pub session: SessionListing,
    pub cancellation: Option<String>,
}

/// GET /api/v1/front-page
pub async fn front_page(State(state): State<AppState>) -> AppResult<Json<DataResponse<FrontPage>>> {
    let now = Utc::now();
    let today = now.date_naive();

    let activities = ActivityRepo::list_frontpage(&state.pool, now)
        .await?
        .into_iter()
        .filter(|a| publication::is_current_activity(a.publication_date, a.end_date, now))
        .collect();
    let articles = ArticleRepo::list_published(&state.pool, now, true).await?;
    let informations = InformationRepo::list_important(&state.pool)
        .await?
        .into_iter()
        .filter(|info| publication::is_information_active(info.start_date, info.end_date, now))
        .collect();

    let days = upcoming_days(today, UPCOMING_DAYS);
    let weekdays: Vec<i16> = days.iter().map(|day| day.weekday).collect();
    let sessions = SessionRepo::list_weekly_for_open_sports(&state.pool, &weekdays).await?;
    let cancellations = match (days.first(), days.last()) {
        (Some(first), Some(last)) => {
            CancelledSessionRepo::list_between(&state.pool, first.date, last.date).await?
        }
        _ => Vec::new(),
    };
    let agenda = build_agenda(&days, sessions, &cancellations);

    let featured = featured_match(
        MatchRepo::next_upcoming(&state.pool, now).await?,
        MatchRepo::last_past(&state.pool, now).await?,
    );

    Ok(Json(DataResponse {
        data: FrontPage {
            activities,
            articles,
            informations,
            agenda,
            featured_match: featured,
        },
    }))
}

/// Place each weekly session under every agenda day sharing its weekday.
///
/// `sessions` arrive ordered by start time and keep that order per day.
pub fn build_agenda(
    days: &[UpcomingDay],
    sessions: Vec<SessionListing>,
    cancellations: &[CancelledSession],
) -> Vec<AgendaDay> {
    let cancelled: HashMap<(DbId, Date), &str> = cancellations
        .iter()
        .map(|c| ((c.session_id, c.cancellation_date), c.title.as_str()))
        .collect();

    days.iter()
        .map(|day| AgendaDay {
            date: day.date,
            weekday: day.weekday,
            weekday_name: weekday_name(day.weekday),
            sessions: sessions
                .iter()
                .filter(|s| s.weekday == Some(day.weekday))
                .map(|s| AgendaSession {
                    session: s.clone(),
                    cancellation: cancelled.get(&(s.id, day.date)).map(|t| t.to_string()),
                })
                .collect(),
        })
        .collect()
}

// ── News ─────────────────────────────────────────────────────────────

/// GET /api/v1/news?page=
///
/// Published articles and sent weekmails, newest first.
pub async fn news(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<DataResponse<Page<NewsEntry<Article, Weekmail>>>>> {
    let now = Utc::now();
    let articles = ArticleRepo::list_published(&state.pool, now, false).await?;
    let weekmails = WeekmailRepo::list_sent(&state.pool, now).await?;

    let entries = merge_news(articles, weekmails, now);
    Ok(Json(DataResponse {
        data: paginate(entries, params.page.as_deref(), PAGE_SIZE),
    }))
}

/// GET /api/v1/articles?page=
pub async fn list_articles(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<DataResponse<Page<Article>>>> {
    let articles = ArticleRepo::list_published(&state.pool, Utc::now(), false).await?;
    Ok(Json(DataResponse {
        data: paginate(articles, params.page.as_deref(), PAGE_SIZE),
    }))
}

/// GET /api/v1/articles/{id}
///
/// Drafts and future publications answer 404.
pub async fn article_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Article>>> {
    let article = ArticleRepo::find_by_id(&state.pool, id).await?;
    let data = published_or_not_found(article, "article", id, Utc::now())?;
    Ok(Json(DataResponse { data }))
}

/// GET /api/v1/weekmails?page=
pub async fn list_weekmails(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<Json<DataResponse<Page<Weekmail>>>> {
    let weekmails = WeekmailRepo::list_sent(&state.pool, Utc::now()).await?;
    Ok(Json(DataResponse {
        data: paginate(weekmails, params.page.as_deref(), PAGE_SIZE),
    }))
}

/// GET /api/v1/weekmails/{id}
///
/// Unsent weekmails answer 404.
pub async fn weekmail_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Weekmail>>> {
    let weekmail = WeekmailRepo::find_by_id(&state.pool, id).await?;
    let data = published_or_not_found(weekmail, "weekmail", id, Utc::now())?;
    Ok(Json(DataResponse { data }))
}

/// `item` if it exists and is published at `now`.
fn published_or_not_found<T: Dated>(
    item: Option<T>,
    entity: &'static str,
    id: DbId,
    now: Timestamp,
) -> AppResult<T> {
    item.filter(|i| publication::is_published(i.dated_at(), now))
        .ok_or(AppError::Core(CoreError::NotFound { entity, id }))
}

// ── Sports ───────────────────────────────────────────────────────────

/// Sports page: open sports first, then the closed ones.
#[derive(Debug, Serialize)]
pub struct SportsOverview {
    pub open: Vec<Sport>,
    pub closed: Vec<Sport>,
}

/// GET /api/v1/sports
pub async fn sports_overview(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<SportsOverview>>> {
    let (open, closed): (Vec<Sport>, Vec<Sport>) = SportRepo::list(&state.pool)
        .await?
        .into_iter()
        .partition(|sport| sport.is_open);
    Ok(Json(DataResponse {
        data: SportsOverview { open, closed },
    }))
}

// ── Activities ───────────────────────────────────────────────────────

/// GET /api/v1/activities?kind=big|regular&page=
///
/// Without `kind`, big and regular activities are listed together.
pub async fn list_activities(
    State(state): State<AppState>,
    Query(params): Query<ActivityListParams>,
) -> AppResult<Json<DataResponse<Page<Activity>>>> {
    let big = params.kind.map(|kind| kind.is_big());
    let activities = ActivityRepo::list_published(&state.pool, Utc::now(), big).await?;

    Ok(Json(DataResponse {
        data: paginate(activities, params.page.as_deref(), PAGE_SIZE),
    }))
}

/// GET /api/v1/activities/{id}
///
/// Drafts and future publications answer 404.
pub async fn activity_detail(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Activity>>> {
    let activity = ActivityRepo::find_by_id(&state.pool, id).await?;
    let data = published_or_not_found(activity, "activity", id, Utc::now())?;
    Ok(Json(DataResponse { data }))
}

/// Treasury balance of one activity.
#[derive(Debug, Serialize)]
pub struct ActivityBalance {
    pub activity_id: DbId,
    #[serde(flatten)]
    pub balance: Balance,
}

/// GET /api/v1/activities/{id}/balance
///
/// Fees, subventions and net result of the operations tied to the activity.
pub async fn activity_balance(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ActivityBalance>>> {
    if ActivityRepo::find_by_id(&state.pool, id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "activity",
            id,
        }));
    }

    let amounts = FinancialOperationRepo::amounts_for_activity(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: ActivityBalance {
            activity_id: id,
            balance: treasury::balance(amounts),
        },
    }))
}
