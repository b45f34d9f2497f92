//! Query-string parameters shared by the public listings.

use serde::Deserialize;

/// `?page=` on a paginated listing.
///
/// Kept as raw text: a non-numeric page is served as page 1 rather than
/// rejected.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

/// Which activities a listing shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityListKind {
    Big,
    Regular,
}

impl ActivityListKind {
    pub fn is_big(self) -> bool {
        self == ActivityListKind::Big
    }
}

/// `?kind=big|regular&page=` on the activities listing. Without `kind`
/// every published activity is listed.
#[derive(Debug, Default, Deserialize)]
pub struct ActivityListParams {
    pub kind: Option<ActivityListKind>,
    pub page: Option<String>,
}
