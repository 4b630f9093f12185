use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::num::NonZeroUsize;
use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ListingError;

/// Filter value meaning "no category filter".
///
/// Reserved: a record whose filter field is literally `"all"` cannot be
/// selected on its own and only counts toward [`FacetCounts::all`].
pub const ALL: &str = "all";

/// A record that can be listed, filtered and searched.
///
/// Fields are looked up by name so a [`ListingConfig`] can name the filter
/// and search fields declaratively, the same way for typed content and for
/// raw JSON fixtures.
pub trait Record {
    /// Stable identifier used as the list key.
    fn record_id(&self) -> Cow<'_, str>;

    /// Returns the text value of a field, or None if the record has no such field.
    fn field(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl<T: Record + ?Sized> Record for &T {
    fn record_id(&self) -> Cow<'_, str> {
        (**self).record_id()
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).field(name)
    }
}

/// JSON objects expose their scalar members as fields.
///
/// Strings are borrowed, numbers and booleans are rendered as text. Arrays,
/// objects and nulls are treated as missing.
impl Record for Value {
    fn record_id(&self) -> Cow<'_, str> {
        self.field("id").unwrap_or(Cow::Borrowed(""))
    }

    fn field(&self, name: &str) -> Option<Cow<'_, str>> {
        match self.get(name)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            _ => None,
        }
    }
}

/// The selected category filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FilterSelection {
    /// No filter: every record passes.
    #[default]
    All,
    /// Keep records whose filter field equals this value (case-sensitive).
    Value(String),
}

impl FilterSelection {
    /// Parses a filter parameter, mapping the `"all"` sentinel to [`FilterSelection::All`].
    pub fn from_param(value: impl Into<String>) -> Self {
        let value = value.into();
        if value == ALL {
            FilterSelection::All
        } else {
            FilterSelection::Value(value)
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            FilterSelection::All => ALL,
            FilterSelection::Value(value) => value,
        }
    }

    /// Returns true if a record with this filter field value passes.
    pub fn matches(&self, value: Option<&str>) -> bool {
        match self {
            FilterSelection::All => true,
            FilterSelection::Value(selected) => value == Some(selected.as_str()),
        }
    }
}

impl From<String> for FilterSelection {
    fn from(value: String) -> Self {
        FilterSelection::from_param(value)
    }
}

impl From<&str> for FilterSelection {
    fn from(value: &str) -> Self {
        FilterSelection::from_param(value)
    }
}

impl From<FilterSelection> for String {
    fn from(selection: FilterSelection) -> Self {
        match selection {
            FilterSelection::All => ALL.to_string(),
            FilterSelection::Value(value) => value,
        }
    }
}

impl fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn first_page() -> usize {
    1
}

/// View-owned state of a listing: selected filter, search text and page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    #[serde(default)]
    pub selected: FilterSelection,
    #[serde(default)]
    pub search_query: String,
    /// 1-based page number.
    #[serde(default = "first_page")]
    pub page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            selected: FilterSelection::All,
            search_query: String::new(),
            page: 1,
        }
    }
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a category filter and goes back to the first page.
    pub fn select(mut self, selection: impl Into<FilterSelection>) -> Self {
        self.selected = selection.into();
        self.page = 1;
        self
    }

    /// Sets the search text and goes back to the first page.
    pub fn search(mut self, query: impl Into<String>) -> Self {
        self.search_query = query.into();
        self.page = 1;
        self
    }

    /// Moves to a page. Out-of-range pages are clamped when the query runs.
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Clears filter and search.
    pub fn reset(self) -> Self {
        Self::default()
    }

    /// Returns true if the search text is not blank.
    pub fn is_searching(&self) -> bool {
        !self.search_query.trim().is_empty()
    }
}

/// Declares which fields drive filtering and search for a record type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingConfig {
    pub filter_field: String,
    pub search_fields: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<NonZeroUsize>,
}

impl ListingConfig {
    /// Creates a configuration without pagination.
    pub fn new<I, S>(filter_field: impl Into<String>, search_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            filter_field: filter_field.into(),
            search_fields: search_fields.into_iter().map(Into::into).collect(),
            page_size: None,
        }
    }

    /// Sets the page size. Zero disables pagination.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = NonZeroUsize::new(page_size);
        self
    }

    /// Checks the configuration names a filter field and at least one search field.
    pub fn validate(&self) -> Result<(), ListingError> {
        if self.filter_field.trim().is_empty() {
            return Err(ListingError::EmptyFilterField);
        }
        if self.search_fields.is_empty() {
            return Err(ListingError::NoSearchFields);
        }
        if self.search_fields.iter().any(|f| f.trim().is_empty()) {
            return Err(ListingError::EmptySearchField);
        }
        Ok(())
    }
}

/// Number of records per filter value, plus the synthetic `all` bucket.
///
/// Serializes as a flat map: `{"all": 10, "a": 4, "b": 3, "c": 3}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacetCounts {
    pub all: usize,
    #[serde(flatten)]
    pub values: BTreeMap<String, usize>,
}

impl FacetCounts {
    /// Returns the count for a filter value; `"all"` returns the total.
    pub fn get(&self, value: &str) -> usize {
        if value == ALL {
            self.all
        } else {
            self.values.get(value).copied().unwrap_or(0)
        }
    }

    /// Returns the count shown next to a filter selection.
    pub fn count(&self, selection: &FilterSelection) -> usize {
        self.get(selection.as_str())
    }

    /// Iterates over per-value counts in value order, excluding `all`.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.values.iter().map(|(value, count)| (value.as_str(), *count))
    }
}

/// A labelled filter button with its facet count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
    pub count: usize,
}

/// One page of a filtered listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingPage<'a, R> {
    pub visible: Vec<&'a R>,
    /// Number of records that passed filter and search, across all pages.
    pub total_matched: usize,
    /// At least 1, even when nothing matched.
    pub total_pages: usize,
    /// The page actually shown, after clamping.
    pub page: usize,
    /// Counts over the full record set, independent of filter and search.
    pub facets: FacetCounts,
}

impl<R> ListingPage<'_, R> {
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Page numbers for a pager, 1-based.
    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        1..=self.total_pages
    }
}
