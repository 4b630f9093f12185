use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::CalendarError;

/// Display language of the site.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    /// Croatian.
    #[default]
    Hr,
    /// German.
    De,
}

impl Language {
    /// Returns the BCP 47 locale tag used for date formatting.
    pub fn locale(&self) -> &'static str {
        match self {
            Language::Hr => "hr-HR",
            Language::De => "de-DE",
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hr" => Ok(Language::Hr),
            "de" => Ok(Language::De),
            other => Err(format!("unsupported language: {other}")),
        }
    }
}

const MONTHS_HR: [&str; 12] = [
    "siječanj", "veljača", "ožujak", "travanj", "svibanj", "lipanj", "srpanj", "kolovoz", "rujan",
    "listopad", "studeni", "prosinac",
];

const MONTHS_DE: [&str; 12] = [
    "Januar", "Februar", "März", "April", "Mai", "Juni", "Juli", "August", "September", "Oktober",
    "November", "Dezember",
];

/// Returns the month name for a 1-based month, or None when out of range.
pub fn month_name(month: u32, language: Language) -> Option<&'static str> {
    let index = usize::try_from(month.checked_sub(1)?).ok()?;
    match language {
        Language::Hr => MONTHS_HR.get(index).copied(),
        Language::De => MONTHS_DE.get(index).copied(),
    }
}

/// The kind of activity an event belongs to. Drives display styling only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventCategory {
    Course,
    Cultural,
    Trip,
    Social,
}

impl EventCategory {
    pub const ALL: [EventCategory; 4] = [
        EventCategory::Course,
        EventCategory::Cultural,
        EventCategory::Trip,
        EventCategory::Social,
    ];

    /// Returns the wire name of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Course => "course",
            EventCategory::Cultural => "cultural",
            EventCategory::Trip => "trip",
            EventCategory::Social => "social",
        }
    }

    /// Returns the human-readable label in the given language.
    pub fn label(&self, language: Language) -> &'static str {
        match (self, language) {
            (EventCategory::Course, Language::Hr) => "Tečaj",
            (EventCategory::Course, Language::De) => "Kurs",
            (EventCategory::Cultural, Language::Hr) => "Kulturni događaj",
            (EventCategory::Cultural, Language::De) => "Kulturveranstaltung",
            (EventCategory::Trip, Language::Hr) => "Izlet",
            (EventCategory::Trip, Language::De) => "Ausflug",
            (EventCategory::Social, Language::Hr) => "Društveni",
            (EventCategory::Social, Language::De) => "Gesellschaftlich",
        }
    }

    /// Returns the accent color name used for badges of this category.
    pub fn accent(&self) -> &'static str {
        match self {
            EventCategory::Course => "blue",
            EventCategory::Cultural => "purple",
            EventCategory::Trip => "emerald",
            EventCategory::Social => "pink",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dated activity of the association shown on the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(deserialize_with = "crate::serde::deserialize_id")]
    pub id: String,
    /// Calendar day of the event. Time of day lives in `time` and is display-only.
    #[serde(deserialize_with = "crate::serde::deserialize_calendar_date")]
    pub date: NaiveDate,
    pub title: String,
    #[serde(default)]
    pub title_de: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub description_de: String,
    #[serde(default)]
    pub location: String,
    pub category: EventCategory,
    /// Free-form time of day, e.g. "19:00 - 21:00" or "Cijeli dan".
    #[serde(default)]
    pub time: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registered: Option<u32>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "crate::serde::deserialize_optional_string"
    )]
    pub link: Option<String>,
}

impl Event {
    /// Creates a new event with the required fields.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: NaiveDate,
        category: EventCategory,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            title: title.into(),
            title_de: String::new(),
            description: String::new(),
            description_de: String::new(),
            location: String::new(),
            category,
            time: String::new(),
            capacity: None,
            registered: None,
            link: None,
        }
    }

    /// Sets the German title.
    pub fn with_title_de(mut self, title: impl Into<String>) -> Self {
        self.title_de = title.into();
        self
    }

    /// Sets the Croatian and German descriptions.
    pub fn with_description(mut self, hr: impl Into<String>, de: impl Into<String>) -> Self {
        self.description = hr.into();
        self.description_de = de.into();
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the display time.
    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.time = time.into();
        self
    }

    /// Sets capacity and the number of registered participants.
    pub fn with_capacity(mut self, capacity: u32, registered: u32) -> Self {
        self.capacity = Some(capacity);
        self.registered = Some(registered);
        self
    }

    /// Title in the given language, falling back to Croatian when no translation exists.
    pub fn title_in(&self, language: Language) -> &str {
        match language {
            Language::De if !self.title_de.is_empty() => &self.title_de,
            _ => &self.title,
        }
    }

    /// Description in the given language, falling back to Croatian.
    pub fn description_in(&self, language: Language) -> &str {
        match language {
            Language::De if !self.description_de.is_empty() => &self.description_de,
            _ => &self.description,
        }
    }

    /// Remaining places, if the event has a capacity.
    pub fn spots_left(&self) -> Option<u32> {
        self.capacity
            .map(|capacity| capacity.saturating_sub(self.registered.unwrap_or(0)))
    }
}

/// A calendar month. Always holds the first day of that month.
///
/// Months are 1-based (January = 1). Construction rejects months whose
/// 42-day grid window would fall outside the range chrono can represent,
/// so every grid operation on a `YearMonth` is infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "YearMonthRepr", into = "YearMonthRepr")]
pub struct YearMonth {
    first: NaiveDate,
}

#[derive(Serialize, Deserialize)]
struct YearMonthRepr {
    year: i32,
    month: u32,
}

impl TryFrom<YearMonthRepr> for YearMonth {
    type Error = CalendarError;

    fn try_from(repr: YearMonthRepr) -> Result<Self, Self::Error> {
        YearMonth::new(repr.year, repr.month)
    }
}

impl From<YearMonth> for YearMonthRepr {
    fn from(month: YearMonth) -> Self {
        Self {
            year: month.year(),
            month: month.month(),
        }
    }
}

impl YearMonth {
    /// Creates a month from a year and a 1-based month number.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarError> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(Self::checked_from_first)
            .ok_or(CalendarError::InvalidMonth { year, month })
    }

    /// Returns the month containing the given date.
    ///
    /// Returns None only for dates at the edge of chrono's supported range.
    pub fn containing(date: NaiveDate) -> Option<Self> {
        date.with_day(1).and_then(Self::checked_from_first)
    }

    fn checked_from_first(first: NaiveDate) -> Option<Self> {
        // The grid reaches at most 6 days back and 41 days forward.
        first.checked_sub_days(Days::new(6))?;
        first.checked_add_days(Days::new(42))?;
        Some(Self { first })
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// Returns the 1-based month number.
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    /// Returns the first day of the month.
    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    /// Returns the number of days in the month (28-31).
    pub fn days_in_month(&self) -> u32 {
        let days = self
            .first
            .iter_days()
            .take_while(|d| d.month() == self.first.month())
            .count();
        days as u32
    }

    /// Returns the last day of the month.
    pub fn last_day(&self) -> NaiveDate {
        self.first + Days::new(u64::from(self.days_in_month()) - 1)
    }

    /// Returns true if the date falls within this month.
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// The previous month. Year boundaries are carried by the calendar arithmetic.
    pub fn prev(&self) -> Option<Self> {
        self.first
            .checked_sub_months(Months::new(1))
            .and_then(Self::checked_from_first)
    }

    /// The next month. Year boundaries are carried by the calendar arithmetic.
    pub fn next(&self) -> Option<Self> {
        self.first
            .checked_add_months(Months::new(1))
            .and_then(Self::checked_from_first)
    }

    /// Month heading such as "ožujak 2026" or "März 2026".
    pub fn heading(&self, language: Language) -> String {
        let name = month_name(self.month(), language).unwrap_or_default();
        format!("{} {}", name, self.year())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for YearMonth {
    type Err = CalendarError;

    /// Parses `YYYY-MM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CalendarError::InvalidDate(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        YearMonth::new(year, month)
    }
}

/// A single day in the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayCell {
    pub date: NaiveDate,
    /// False for filler days borrowed from the previous or next month.
    pub in_current_month: bool,
    pub is_today: bool,
    /// Events whose date equals `date`, in input order.
    pub events: Vec<Event>,
}

impl DayCell {
    /// Creates an empty cell.
    pub fn new(date: NaiveDate, in_current_month: bool) -> Self {
        Self {
            date,
            in_current_month,
            is_today: false,
            events: Vec::new(),
        }
    }

    /// Returns true if no events fall on this day.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

/// Six weeks of seven days, Monday first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub weeks: Vec<Vec<DayCell>>,
}

impl MonthGrid {
    /// Iterates over all cells in display order.
    pub fn cells(&self) -> impl Iterator<Item = &DayCell> {
        self.weeks.iter().flatten()
    }

    /// Returns the cell for the given date, if the date is on the grid.
    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells().find(|cell| cell.date == date)
    }

    /// Returns the total number of events placed on the grid.
    pub fn event_count(&self) -> usize {
        self.cells().map(|cell| cell.events.len()).sum()
    }

    /// Returns the events of the displayed month in grid order.
    pub fn month_events(&self) -> Vec<&Event> {
        self.cells()
            .filter(|cell| cell.in_current_month)
            .flat_map(|cell| cell.events.iter())
            .collect()
    }
}
