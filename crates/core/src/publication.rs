//! "Current period" resolution for public listings.
//!
//! Drafts (no publication date) and items scheduled in the future are never
//! listed. These helpers take `now` / `today` explicitly so every listing
//! resolves against the same instant.

use chrono::Duration;
use serde::Serialize;

use crate::types::{Date, Timestamp};
use crate::weekday::stored_weekday_of;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Items per page on every paginated public listing.
pub const PAGE_SIZE: usize = 9;

/// Number of days (today included) shown in the front-page session agenda.
pub const UPCOMING_DAYS: usize = 3;

// ---------------------------------------------------------------------------
// Publication windows
// ---------------------------------------------------------------------------

/// Something with an optional publication instant (articles, activities,
/// weekmails by sent date).
pub trait Dated {
    fn dated_at(&self) -> Option<Timestamp>;
}

/// Published means a publication date is set and already reached.
pub fn is_published(publication: Option<Timestamp>, now: Timestamp) -> bool {
    publication.is_some_and(|at| at <= now)
}

/// Front-page activities must be published and not finished yet.
pub fn is_current_activity(
    publication: Option<Timestamp>,
    end_date: Timestamp,
    now: Timestamp,
) -> bool {
    is_published(publication, now) && end_date >= now
}

/// An information is shown between its (optional) start and end instants,
/// both bounds exclusive.
pub fn is_information_active(
    start: Option<Timestamp>,
    end: Option<Timestamp>,
    now: Timestamp,
) -> bool {
    start.is_none_or(|s| s < now) && end.is_none_or(|e| e > now)
}

/// Keep the published items, newest first.
pub fn published<T: Dated>(items: Vec<T>, now: Timestamp) -> Vec<T> {
    let mut kept: Vec<T> = items
        .into_iter()
        .filter(|item| is_published(item.dated_at(), now))
        .collect();
    kept.sort_by(|a, b| b.dated_at().cmp(&a.dated_at()));
    kept
}

// ---------------------------------------------------------------------------
// News feed
// ---------------------------------------------------------------------------

/// One entry of the merged news feed.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", content = "item", rename_all = "lowercase")]
pub enum NewsEntry<A, W> {
    Article(A),
    Weekmail(W),
}

impl<A: Dated, W: Dated> Dated for NewsEntry<A, W> {
    fn dated_at(&self) -> Option<Timestamp> {
        match self {
            NewsEntry::Article(a) => a.dated_at(),
            NewsEntry::Weekmail(w) => w.dated_at(),
        }
    }
}

/// Merge published articles and sent weekmails, newest first.
pub fn merge_news<A: Dated, W: Dated>(
    articles: Vec<A>,
    weekmails: Vec<W>,
    now: Timestamp,
) -> Vec<NewsEntry<A, W>> {
    let entries = articles
        .into_iter()
        .map(NewsEntry::Article)
        .chain(weekmails.into_iter().map(NewsEntry::Weekmail))
        .collect();
    published(entries, now)
}

// ---------------------------------------------------------------------------
// Front-page agenda
// ---------------------------------------------------------------------------

/// A calendar day of the agenda together with its stored weekday number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UpcomingDay {
    pub date: Date,
    pub weekday: i16,
}

/// `today` and the following days, `count` in total.
pub fn upcoming_days(today: Date, count: usize) -> Vec<UpcomingDay> {
    (0..count)
        .map(|offset| {
            let date = today + Duration::days(offset as i64);
            UpcomingDay {
                date,
                weekday: stored_weekday_of(date),
            }
        })
        .collect()
}

/// Match highlighted on the front page.
#[derive(Debug, Clone, Serialize)]
pub struct FeaturedMatch<M> {
    pub is_past: bool,
    #[serde(rename = "match")]
    pub item: M,
}

/// Prefer the next upcoming match; fall back to the most recent past one.
pub fn featured_match<M>(next_upcoming: Option<M>, last_past: Option<M>) -> Option<FeaturedMatch<M>> {
    match next_upcoming {
        Some(item) => Some(FeaturedMatch {
            is_past: false,
            item,
        }),
        None => last_past.map(|item| FeaturedMatch {
            is_past: true,
            item,
        }),
    }
}

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// One page of a listing.
#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page number actually served.
    pub number: usize,
    pub num_pages: usize,
    pub total_count: usize,
}

/// Cut `items` into pages of `per_page` and serve the requested one.
///
/// A missing or non-numeric page serves page 1. A page number past the end
/// (or below 1) serves the last page. An empty listing has a single empty page.
pub fn paginate<T>(items: Vec<T>, requested: Option<&str>, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_count = items.len();
    let num_pages = total_count.div_ceil(per_page).max(1);

    let number = match requested.map(|p| p.trim().parse::<i64>()) {
        None | Some(Err(_)) => 1,
        Some(Ok(n)) if n >= 1 && (n as usize) <= num_pages => n as usize,
        Some(Ok(_)) => num_pages,
    };

    let items = items
        .into_iter()
        .skip((number - 1) * per_page)
        .take(per_page)
        .collect();

    Page {
        items,
        number,
        num_pages,
        total_count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::{FRIDAY, SATURDAY, SUNDAY};
    use chrono::{NaiveDate, TimeZone, Utc};

    #[derive(Debug, Clone, PartialEq)]
    struct Post(&'static str, Option<Timestamp>);

    impl Dated for Post {
        fn dated_at(&self) -> Option<Timestamp> {
            self.1
        }
    }

    fn at(day: u32, hour: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2024, 3, day, hour, 0, 0).unwrap()
    }

    #[test]
    fn drafts_are_not_published() {
        assert!(!is_published(None, at(10, 12)));
    }

    #[test]
    fn future_publication_is_hidden() {
        assert!(!is_published(Some(at(11, 0)), at(10, 12)));
        assert!(is_published(Some(at(10, 12)), at(10, 12)));
    }

    #[test]
    fn finished_activity_leaves_front_page() {
        let now = at(10, 12);
        assert!(is_current_activity(Some(at(1, 0)), at(10, 12), now));
        assert!(!is_current_activity(Some(at(1, 0)), at(10, 11), now));
        assert!(!is_current_activity(None, at(20, 0), now));
    }

    #[test]
    fn information_window_bounds_are_exclusive() {
        let now = at(10, 12);
        assert!(is_information_active(None, None, now));
        assert!(is_information_active(Some(at(10, 11)), Some(at(10, 13)), now));
        assert!(!is_information_active(Some(now), None, now));
        assert!(!is_information_active(None, Some(now), now));
    }

    #[test]
    fn published_sorts_newest_first_and_drops_drafts() {
        let items = vec![
            Post("old", Some(at(1, 0))),
            Post("draft", None),
            Post("new", Some(at(5, 0))),
            Post("future", Some(at(20, 0))),
        ];
        let kept = published(items, at(10, 0));
        let names: Vec<_> = kept.iter().map(|p| p.0).collect();
        assert_eq!(names, vec!["new", "old"]);
    }

    #[test]
    fn news_feed_interleaves_by_date() {
        let articles = vec![Post("a1", Some(at(1, 0))), Post("a2", Some(at(4, 0)))];
        let weekmails = vec![Post("w1", Some(at(3, 0))), Post("unsent", None)];
        let feed = merge_news(articles, weekmails, at(10, 0));
        let kinds: Vec<_> = feed
            .iter()
            .map(|e| match e {
                NewsEntry::Article(p) | NewsEntry::Weekmail(p) => p.0,
            })
            .collect();
        assert_eq!(kinds, vec!["a2", "w1", "a1"]);
    }

    #[test]
    fn upcoming_days_wrap_over_the_weekend() {
        // 2024-03-08 was a Friday.
        let today = NaiveDate::from_ymd_opt(2024, 3, 8).unwrap();
        let days = upcoming_days(today, UPCOMING_DAYS);
        let weekdays: Vec<_> = days.iter().map(|d| d.weekday).collect();
        assert_eq!(weekdays, vec![FRIDAY, SATURDAY, SUNDAY]);
        assert_eq!(days[2].date, NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
    }

    #[test]
    fn featured_match_prefers_upcoming() {
        let featured = featured_match(Some("next"), Some("last")).unwrap();
        assert!(!featured.is_past);
        assert_eq!(featured.item, "next");
    }

    #[test]
    fn featured_match_falls_back_to_past() {
        let featured = featured_match(None, Some("last")).unwrap();
        assert!(featured.is_past);
        assert!(featured_match::<&str>(None, None).is_none());
    }

    #[test]
    fn paginate_defaults_to_first_page() {
        let page = paginate((1..=20).collect(), None, PAGE_SIZE);
        assert_eq!(page.number, 1);
        assert_eq!(page.num_pages, 3);
        assert_eq!(page.items, (1..=9).collect::<Vec<_>>());

        let page = paginate((1..=20).collect::<Vec<i32>>(), Some("abc"), PAGE_SIZE);
        assert_eq!(page.number, 1);
    }

    #[test]
    fn paginate_past_end_serves_last_page() {
        let page = paginate((1..=20).collect::<Vec<i32>>(), Some("7"), PAGE_SIZE);
        assert_eq!(page.number, 3);
        assert_eq!(page.items, vec![19, 20]);

        let page = paginate((1..=20).collect::<Vec<i32>>(), Some("0"), PAGE_SIZE);
        assert_eq!(page.number, 3);
    }

    #[test]
    fn paginate_empty_listing_has_one_page() {
        let page = paginate(Vec::<i32>::new(), Some("2"), PAGE_SIZE);
        assert_eq!(page.number, 1);
        assert_eq!(page.num_pages, 1);
        assert_eq!(page.total_count, 0);
        assert!(page.items.is_empty());
    }
}
