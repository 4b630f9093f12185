use std::borrow::Cow;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::listing::{ListingConfig, Record};

/// Filter buttons of the news page, after the "all" option.
pub const NEWS_FILTERS: &[(&str, &str)] = &[
    ("news", "Novosti"),
    ("events", "Događaji"),
    ("announcement", "Obavijesti"),
];

pub const NEWS_ALL_LABEL: &str = "Sve vijesti";

/// Category of a news article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NewsCategory {
    News,
    Events,
    Announcement,
    #[serde(other)]
    Other,
}

impl NewsCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            NewsCategory::News => "news",
            NewsCategory::Events => "events",
            NewsCategory::Announcement => "announcement",
            NewsCategory::Other => "other",
        }
    }

    /// Singular Croatian label shown on the article badge.
    pub fn label(&self) -> &'static str {
        match self {
            NewsCategory::News => "Novost",
            NewsCategory::Events => "Događaj",
            NewsCategory::Announcement => "Obavijest",
            NewsCategory::Other => "Vijest",
        }
    }
}

/// A news article from the CMS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsArticle {
    #[serde(deserialize_with = "crate::serde::deserialize_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(deserialize_with = "crate::serde::deserialize_calendar_date")]
    pub date: NaiveDate,
    #[serde(default)]
    pub excerpt: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde::deserialize_optional_string"
    )]
    pub author: Option<String>,
    pub category: NewsCategory,
}

impl NewsArticle {
    /// Listing setup of the news page: filter by category, search title and excerpt.
    pub fn listing_config(page_size: usize) -> ListingConfig {
        ListingConfig::new("category", ["title", "excerpt"]).with_page_size(page_size)
    }

    pub fn url(&self) -> String {
        format!("/vijesti/{}", self.slug)
    }
}

impl Record for NewsArticle {
    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.id.as_str())
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "id" => Some(Cow::Borrowed(self.id.as_str())),
            "title" => Some(Cow::Borrowed(self.title.as_str())),
            "slug" => Some(Cow::Borrowed(self.slug.as_str())),
            "date" => Some(Cow::Owned(self.date.to_string())),
            "excerpt" => Some(Cow::Borrowed(self.excerpt.as_str())),
            "author" => self.author.as_deref().map(Cow::Borrowed),
            "category" => Some(Cow::Borrowed(self.category.as_str())),
            _ => None,
        }
    }
}

/// Sorts articles newest first.
pub fn sort_newest_first(articles: &mut [NewsArticle]) {
    articles.sort_by(|a, b| b.date.cmp(&a.date));
}
