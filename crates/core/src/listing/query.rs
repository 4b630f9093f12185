//! Filter, search and paginate.
//!
//! [`query`] is a pure function from `(records, config, state)` to one page of
//! results. The stages run in a fixed order:
//!
//! 1. facet counts over the full record set,
//! 2. category filter (strict equality),
//! 3. case-insensitive substring search over the configured fields,
//! 4. pagination with the requested page clamped into range.

use std::collections::BTreeMap;
use std::num::NonZeroUsize;

use super::types::{
    FacetCounts, FilterOption, FilterSelection, FilterState, ListingConfig, ListingPage, Record,
    ALL,
};

/// Counts records per value of `filter_field`.
///
/// `all` is the total number of records. Records without the field, or
/// whose value is the reserved [`ALL`], only count toward `all`.
pub fn facet_counts<R: Record>(records: &[R], filter_field: &str) -> FacetCounts {
    let mut values: BTreeMap<String, usize> = BTreeMap::new();

    for record in records {
        if let Some(value) = record.field(filter_field).filter(|value| *value != ALL) {
            *values.entry(value.into_owned()).or_default() += 1;
        }
    }

    FacetCounts {
        all: records.len(),
        values,
    }
}

/// Builds filter buttons: "all" first, then the given `(value, label)` pairs in order.
pub fn filter_options(
    facets: &FacetCounts,
    all_label: &str,
    options: &[(&str, &str)],
) -> Vec<FilterOption> {
    std::iter::once((ALL, all_label))
        .chain(options.iter().copied())
        .map(|(value, label)| FilterOption {
            value: value.to_string(),
            label: label.to_string(),
            count: facets.get(value),
        })
        .collect()
}

/// Returns true if any search field contains `needle`.
///
/// `needle` must already be lower-cased.
pub fn matches_search<R: Record>(record: &R, search_fields: &[String], needle: &str) -> bool {
    search_fields.iter().any(|name| {
        record
            .field(name)
            .is_some_and(|value| value.to_lowercase().contains(needle))
    })
}

/// Applies the category filter and the search text, preserving input order.
pub fn filter_records<'a, R: Record>(
    records: &'a [R],
    config: &ListingConfig,
    selected: &FilterSelection,
    search_query: &str,
) -> Vec<&'a R> {
    let needle = (!search_query.trim().is_empty()).then(|| search_query.to_lowercase());

    records
        .iter()
        .filter(|record| selected.matches(record.field(&config.filter_field).as_deref()))
        .filter(|record| {
            needle
                .as_deref()
                .is_none_or(|needle| matches_search(*record, &config.search_fields, needle))
        })
        .collect()
}

/// Number of pages for a result count. Never less than 1.
pub fn total_pages(total_matched: usize, page_size: Option<NonZeroUsize>) -> usize {
    match page_size {
        Some(size) => total_matched.div_ceil(size.get()).max(1),
        None => 1,
    }
}

/// Clamps a requested page into `[1, total_pages]`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages.max(1))
}

/// Runs the full listing pipeline and returns the requested page.
pub fn query<'a, R: Record>(
    records: &'a [R],
    config: &ListingConfig,
    state: &FilterState,
) -> ListingPage<'a, R> {
    let facets = facet_counts(records, &config.filter_field);
    let matched = filter_records(records, config, &state.selected, &state.search_query);

    let total_matched = matched.len();
    let total_pages = total_pages(total_matched, config.page_size);
    let page = clamp_page(state.page, total_pages);

    let visible = match config.page_size {
        Some(size) => matched
            .into_iter()
            .skip((page - 1) * size.get())
            .take(size.get())
            .collect(),
        None => matched,
    };

    ListingPage {
        visible,
        total_matched,
        total_pages,
        page,
        facets,
    }
}
