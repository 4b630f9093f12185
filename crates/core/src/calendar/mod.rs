mod cache;
mod error;
mod grid;
mod mock_data;
mod operations;
mod types;

pub use cache::{CacheStats, MonthGridCache};
pub use error::CalendarError;
pub use grid::{
    build_grid, build_month_grid, group_events_by_date, leading_filler_days, month_dates,
    DAYS_PER_WEEK, GRID_CELLS, WEEKS_PER_GRID,
};
pub use mock_data::seed_events;
pub use operations::{
    events_in_month, find_event, sort_events, upcoming_events, validate_event, validate_events,
};
pub use types::{month_name, DayCell, Event, EventCategory, Language, MonthGrid, YearMonth};
