use thiserror::Error;

/// Errors that can occur when building calendar views or validating events.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarError {
    #[error("Invalid month {year}-{month:02} (month must be 1-12 within the supported year range)")]
    InvalidMonth { year: i32, month: u32 },
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    #[error("Event ID cannot be empty")]
    EmptyId,
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Registered count ({registered}) exceeds capacity ({capacity})")]
    RegisteredExceedsCapacity { registered: u32, capacity: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_error_display() {
        assert_eq!(
            CalendarError::InvalidMonth {
                year: 2026,
                month: 13
            }
            .to_string(),
            "Invalid month 2026-13 (month must be 1-12 within the supported year range)"
        );
        assert_eq!(
            CalendarError::EmptyTitle.to_string(),
            "Event title cannot be empty"
        );
        assert_eq!(
            CalendarError::RegisteredExceedsCapacity {
                registered: 21,
                capacity: 20
            }
            .to_string(),
            "Registered count (21) exceeds capacity (20)"
        );
    }
}
