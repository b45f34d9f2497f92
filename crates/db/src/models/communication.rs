//! Informations, articles and weekmails.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sportasso_core::publication::Dated;
use sportasso_core::types::{DbId, Timestamp};

/// A row from the `informations` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Information {
    pub id: DbId,
    pub title: Option<String>,
    pub content: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub is_important: bool,
    pub is_published: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `articles` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Article {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub publication_date: Option<Timestamp>,
    pub is_frontpage: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Dated for Article {
    fn dated_at(&self) -> Option<Timestamp> {
        self.publication_date
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateArticle {
    pub title: String,
    pub content: String,
    pub publication_date: Option<Timestamp>,
    pub is_frontpage: Option<bool>,
}

/// A row from the `weekmails` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Weekmail {
    pub id: DbId,
    pub subject: String,
    pub introduction: String,
    pub conclusion: String,
    pub sent_date: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Dated for Weekmail {
    fn dated_at(&self) -> Option<Timestamp> {
        self.sent_date
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateWeekmail {
    pub subject: String,
    pub introduction: Option<String>,
    pub conclusion: Option<String>,
    pub sent_date: Option<Timestamp>,
}
