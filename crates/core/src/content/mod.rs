//! Record types of the site's listing pages.

mod activity;
mod chronicle;
mod news;
mod search;

pub use activity::{Activity, ACTIVITY_ALL_LABEL, ACTIVITY_FILTERS};
pub use chronicle::{
    chronicle_issue_number, decade_filters, decades, Chronicle, CHRONICLE_ALL_LABEL,
};
pub use news::{sort_newest_first, NewsArticle, NewsCategory, NEWS_ALL_LABEL, NEWS_FILTERS};
pub use search::{global_search, site_index, SearchEntry, SearchKind};
