//! Month grid construction.
//!
//! A month is always shown as 6 weeks of 7 days starting on Monday. Days of
//! the neighbouring months fill the first and last rows so every grid has
//! exactly 42 cells, whatever the month length or starting weekday.

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate};

use super::error::CalendarError;
use super::types::{DayCell, Event, MonthGrid, YearMonth};

pub const DAYS_PER_WEEK: usize = 7;
pub const WEEKS_PER_GRID: usize = 6;
pub const GRID_CELLS: usize = DAYS_PER_WEEK * WEEKS_PER_GRID;

/// Number of filler days from the previous month before day 1 (Monday = 0).
pub fn leading_filler_days(month: YearMonth) -> usize {
    month.first_day().weekday().num_days_from_monday() as usize
}

/// Returns the 42 dates shown for a month, Monday of the first week first.
pub fn month_dates(month: YearMonth) -> Vec<NaiveDate> {
    // YearMonth guarantees the whole window is representable.
    let start = month.first_day() - Days::new(leading_filler_days(month) as u64);
    start.iter_days().take(GRID_CELLS).collect()
}

/// Groups events by calendar day.
pub fn group_events_by_date(events: &[Event]) -> HashMap<NaiveDate, Vec<&Event>> {
    let mut grouped: HashMap<NaiveDate, Vec<&Event>> = HashMap::new();

    for event in events {
        grouped.entry(event.date).or_default().push(event);
    }

    grouped
}

/// Builds the grid for a validated month.
///
/// Events are matched on full (year, month, day) equality, so filler days
/// spilling into the previous or next year pick up their own events.
/// `today` marks the highlighted cell; pass None to highlight nothing.
pub fn build_grid(month: YearMonth, events: &[Event], today: Option<NaiveDate>) -> MonthGrid {
    let grouped = group_events_by_date(events);

    let cells: Vec<DayCell> = month_dates(month)
        .into_iter()
        .map(|date| {
            let mut cell = DayCell::new(date, month.contains(date));
            cell.is_today = today == Some(date);
            if let Some(day_events) = grouped.get(&date) {
                cell.events = day_events.iter().map(|e| (*e).clone()).collect();
            }
            cell
        })
        .collect();

    let weeks = cells
        .chunks(DAYS_PER_WEEK)
        .map(<[DayCell]>::to_vec)
        .collect();

    MonthGrid { month, weeks }
}

/// Builds the month grid for a year and a 1-based month.
pub fn build_month_grid(
    year: i32,
    month: u32,
    events: &[Event],
    today: Option<NaiveDate>,
) -> Result<MonthGrid, CalendarError> {
    let month = YearMonth::new(year, month)?;
    Ok(build_grid(month, events, today))
}
