mod error;
mod query;
mod types;

pub use error::ListingError;
pub use query::{
    clamp_page, facet_counts, filter_options, filter_records, matches_search, query, total_pages,
};
pub use types::{
    FacetCounts, FilterOption, FilterSelection, FilterState, ListingConfig, ListingPage, Record,
    ALL,
};
