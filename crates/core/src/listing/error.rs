use thiserror::Error;

/// Errors in a listing configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ListingError {
    #[error("Filter field cannot be empty")]
    EmptyFilterField,
    #[error("At least one search field is required")]
    NoSearchFields,
    #[error("Search field names cannot be empty")]
    EmptySearchField,
}
