use chrono::NaiveDate;

use super::error::CalendarError;
use super::types::{Event, YearMonth};

/// Filters events that fall within a month.
pub fn events_in_month(events: &[Event], month: YearMonth) -> Vec<&Event> {
    events
        .iter()
        .filter(|event| month.contains(event.date))
        .collect()
}

/// Returns events dated strictly after `now`, earliest first.
///
/// Events on the same day keep their input order. `limit` caps the result.
pub fn upcoming_events(events: &[Event], now: NaiveDate, limit: Option<usize>) -> Vec<&Event> {
    let mut upcoming: Vec<&Event> = events.iter().filter(|event| event.date > now).collect();
    upcoming.sort_by_key(|event| event.date);

    if let Some(limit) = limit {
        upcoming.truncate(limit);
    }
    upcoming
}

/// Finds an event by its ID.
pub fn find_event<'a>(events: &'a [Event], id: &str) -> Option<&'a Event> {
    events.iter().find(|event| event.id == id)
}

/// Sorts events by date, then by ID for a stable display order.
pub fn sort_events(events: &mut [Event]) {
    events.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
}

/// Validates an event at ingestion time.
pub fn validate_event(event: &Event) -> Result<(), CalendarError> {
    if event.id.trim().is_empty() {
        return Err(CalendarError::EmptyId);
    }
    if event.title.trim().is_empty() {
        return Err(CalendarError::EmptyTitle);
    }
    if let (Some(capacity), Some(registered)) = (event.capacity, event.registered) {
        if registered > capacity {
            return Err(CalendarError::RegisteredExceedsCapacity {
                registered,
                capacity,
            });
        }
    }
    Ok(())
}

/// Validates a batch of events, returning the first failure with its event ID.
pub fn validate_events(events: &[Event]) -> Result<(), (String, CalendarError)> {
    events
        .iter()
        .try_for_each(|event| validate_event(event).map_err(|e| (event.id.clone(), e)))
}
