use std::borrow::Cow;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::listing::{ListingConfig, Record};

/// Label of the "all decades" filter button.
pub const CHRONICLE_ALL_LABEL: &str = "Sve";

/// An issue of the association's printed chronicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chronicle {
    #[serde(deserialize_with = "crate::serde::deserialize_id")]
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(deserialize_with = "crate::serde::deserialize_calendar_date")]
    pub date: NaiveDate,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde::deserialize_optional_string"
    )]
    pub formatted_date: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde::deserialize_optional_string"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde::deserialize_optional_string"
    )]
    pub pdf_url: Option<String>,
}

impl Chronicle {
    /// Listing setup of the chronicles archive.
    pub fn listing_config() -> ListingConfig {
        ListingConfig::new("decade", ["title", "description"])
    }

    /// The decade of the issue date, e.g. 1998 -> 1990.
    pub fn decade(&self) -> i32 {
        self.date.year().div_euclid(10) * 10
    }

    /// Issue number taken from a `#N` marker in the title.
    pub fn issue_number(&self) -> Option<u32> {
        chronicle_issue_number(&self.title)
    }

    /// Title with the HTML entities the CMS export leaves behind decoded.
    pub fn display_title(&self) -> String {
        self.title.replace("&#8211;", "–").replace("&amp;", "&")
    }

    pub fn url(&self) -> String {
        format!("/kronike/{}", self.slug)
    }
}

impl Record for Chronicle {
    fn record_id(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.id.as_str())
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match name {
            "id" => Some(Cow::Borrowed(self.id.as_str())),
            "title" => Some(Cow::Borrowed(self.title.as_str())),
            "slug" => Some(Cow::Borrowed(self.slug.as_str())),
            "date" => Some(Cow::Owned(self.date.to_string())),
            "decade" => Some(Cow::Owned(self.decade().to_string())),
            "description" => self.description.as_deref().map(Cow::Borrowed),
            "pdfUrl" => self.pdf_url.as_deref().map(Cow::Borrowed),
            _ => None,
        }
    }
}

/// Extracts the digits following the first `#` that is followed by a digit.
///
/// `"Kronika #12 – 1998"` gives `Some(12)`; a title without a number gives None.
pub fn chronicle_issue_number(title: &str) -> Option<u32> {
    title.match_indices('#').find_map(|(at, _)| {
        let rest = &title[at + 1..];
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        rest[..end].parse().ok()
    })
}

/// Distinct decades present in the archive, newest first.
pub fn decades(chronicles: &[Chronicle]) -> Vec<i32> {
    let mut decades: Vec<i32> = chronicles.iter().map(Chronicle::decade).collect();
    decades.sort_unstable_by(|a, b| b.cmp(a));
    decades.dedup();
    decades
}

/// Decade filter buttons: `(value, label)` pairs such as `("1990", "1990e")`.
pub fn decade_filters(chronicles: &[Chronicle]) -> Vec<(String, String)> {
    decades(chronicles)
        .into_iter()
        .map(|decade| (decade.to_string(), format!("{decade}e")))
        .collect()
}
