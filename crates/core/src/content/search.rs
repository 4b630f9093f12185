//! Site-wide search over pages, news, chronicles and activities.

use std::borrow::Cow;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::chronicle::Chronicle;
use super::news::NewsArticle;
use crate::listing::{filter_records, FilterSelection, ListingConfig, Record};

/// What a search result points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchKind {
    Page,
    News,
    Chronicle,
    Gallery,
    Activity,
}

impl SearchKind {
    pub const ALL: [SearchKind; 5] = [
        SearchKind::Page,
        SearchKind::News,
        SearchKind::Chronicle,
        SearchKind::Gallery,
        SearchKind::Activity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SearchKind::Page => "page",
            SearchKind::News => "news",
            SearchKind::Chronicle => "chronicle",
            SearchKind::Gallery => "gallery",
            SearchKind::Activity => "activity",
        }
    }

    /// Croatian badge text.
    pub fn label(&self) -> &'static str {
        match self {
            SearchKind::Page => "Stranica",
            SearchKind::News => "Vijesti",
            SearchKind::Chronicle => "Kronika",
            SearchKind::Gallery => "Galerija",
            SearchKind::Activity => "Aktivnost",
        }
    }
}

impl fmt::Display for SearchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One searchable item of the site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchEntry {
    #[serde(deserialize_with = "crate::serde::deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde::deserialize_optional_string"
    )]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: SearchKind,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

impl SearchEntry {
    pub fn page(id: &str, title: &str, description: &str, url: &str) -> Self {
        Self::new(id, title, description, SearchKind::Page, url)
    }

    fn new(id: &str, title: &str, description: &str, kind: SearchKind, url: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: Some(description.to_string()),
            kind,
            url: url.to_string(),
            date: None,
        }
    }

    /// Filter field `type`, search over title and description.
    pub fn listing_config() -> ListingConfig {
        ListingConfig::new("type", ["title", "description"])
    }
}

impl From<&NewsArticle> for SearchEntry {
    fn from(article: &NewsArticle) -> Self {
        Self {
            id: format!("news-{}", article.id),
            title: article.title.clone(),
            description: Some(article.excerpt.clone()).filter(|s| !s.trim().is_empty()),
            kind: SearchKind::News,
            url: article.url(),
            date: Some(article.date),
        }
    }
}

impl From<&Chronicle> for SearchEntry {
    fn from(chronicle: &Chronicle) -> Self {
        Self {
            id: format!("chronicle-{}", chronicle.id),
            title: chronicle.display_title(),
            description: chronicle.description.clone(),
            kind: SearchKind::Chronicle,
            url: chronicle.url(),
            date: Some(chronicle.date),
        }
    }
}

impl Record for SearchEntry {
    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.id.as_str())
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "id" => Some(Cow::Borrowed(self.id.as_str())),
            "title" => Some(Cow::Borrowed(self.title.as_str())),
            "description" => self.description.as_deref().map(Cow::Borrowed),
            "type" => Some(Cow::Borrowed(self.kind.as_str())),
            "url" => Some(Cow::Borrowed(self.url.as_str())),
            "date" => self.date.map(|d| Cow::Owned(d.to_string())),
            _ => None,
        }
    }
}

/// The site's built-in search entries: top-level pages and standing activities.
pub fn site_index() -> Vec<SearchEntry> {
    let activity = |id, title, description| {
        SearchEntry::new(id, title, description, SearchKind::Activity, "/aktivnosti")
    };

    vec![
        SearchEntry::page("1", "O nama", "Saznajte više o Hrvatsko-njemačkom društvu Split", "/o-nama"),
        SearchEntry::page("2", "Aktivnosti", "Naše aktivnosti i programi", "/aktivnosti"),
        SearchEntry::page("3", "Vijesti", "Najnovije vijesti iz društva", "/vijesti"),
        SearchEntry::page("4", "Galerija", "Fotografije s naših događanja", "/galerija"),
        SearchEntry::page("5", "Kontakt", "Kontaktirajte nas", "/kontakt"),
        SearchEntry::page("6", "Članstvo", "Postanite član društva", "/membership"),
        SearchEntry::page("7", "Kronike", "Povijesni zapisi društva", "/kronike"),
        activity("8", "Tečajevi njemačkog jezika", "Učite njemački jezik s nama"),
        activity("9", "Kulturni događaji", "Izložbe, koncerti i predavanja"),
        activity("10", "Izleti i putovanja", "Organizirani izleti i putovanja"),
    ]
}

/// Searches entries by title and description.
///
/// A blank query returns nothing (the search box is empty, not "show all").
/// `kind` narrows the results to one [`SearchKind`].
pub fn global_search<'a>(
    entries: &'a [SearchEntry],
    query: &str,
    kind: &FilterSelection,
) -> Vec<&'a SearchEntry> {
    if query.trim().is_empty() {
        return Vec::new();
    }
    filter_records(entries, &SearchEntry::listing_config(), kind, query)
}
