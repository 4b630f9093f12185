//! hnds_core - pure data functions behind the HNDS website.
//!
//! Everything in this crate is synchronous and free of I/O. Content is
//! handed in by the caller (a CMS response or a JSON fixture) and the
//! functions return display-ready structures:
//!
//! - [`calendar`]: the 6x7 month grid with events bucketed onto days.
//! - [`listing`]: category filter, substring search, facet counts and
//!   pagination over any [`listing::Record`].
//! - [`content`]: the site's record types (news, activities, chronicles,
//!   global search entries).

pub mod calendar;
pub mod content;
pub mod listing;
pub mod serde;
