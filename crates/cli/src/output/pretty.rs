//! Pretty output formatting.

use chrono::Datelike;
use hnds_core::calendar::{DayCell, Event, Language, MonthGrid};
use hnds_core::content::{Chronicle, SearchEntry};
use hnds_core::listing::{FilterOption, ListingConfig, ListingPage, Record};

const WEEKDAYS_HR: [&str; 7] = ["Pon", "Uto", "Sri", "Čet", "Pet", "Sub", "Ned"];
const WEEKDAYS_DE: [&str; 7] = ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"];

fn weekdays(language: Language) -> [&'static str; 7] {
    match language {
        Language::Hr => WEEKDAYS_HR,
        Language::De => WEEKDAYS_DE,
    }
}

/// Day cell as five columns: the day number, bracketed when it is today,
/// followed by `*` when events fall on it. Filler days are blank.
fn format_day_cell(cell: &DayCell) -> String {
    if !cell.in_current_month {
        return " ".repeat(5);
    }
    let day = cell.date.day();
    let number = if cell.is_today {
        format!("[{day:>2}]")
    } else {
        format!(" {day:>2} ")
    };
    let marker = if cell.is_empty() { ' ' } else { '*' };
    format!("{number}{marker}")
}

/// Format a month grid, followed by the events of that month.
pub fn format_month_grid(grid: &MonthGrid, language: Language) -> String {
    let mut output = grid.month.heading(language).to_uppercase();
    output.push('\n');
    output.push_str(
        &weekdays(language)
            .iter()
            .map(|name| format!("{name:^5}"))
            .collect::<Vec<_>>()
            .join(" "),
    );
    for week in &grid.weeks {
        let row: Vec<String> = week.iter().map(format_day_cell).collect();
        output.push('\n');
        output.push_str(row.join(" ").trim_end());
    }

    let events = grid.month_events();
    if !events.is_empty() {
        output.push('\n');
        for event in events {
            output.push_str(&format!("\n{}", format_event_line(event, language)));
        }
    }
    output
}

/// Format month grids separated by blank lines.
pub fn format_month_grids(grids: &[MonthGrid], language: Language) -> String {
    grids
        .iter()
        .map(|grid| format_month_grid(grid, language))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// One-line event summary: date, title and category.
pub fn format_event_line(event: &Event, language: Language) -> String {
    format!(
        "{} {} [{}]",
        event.date.format("%d.%m.%Y."),
        event.title_in(language),
        event.category.label(language)
    )
}

/// Format an event for display.
pub fn format_event(event: &Event, language: Language) -> String {
    let mut output = format!(
        "{} [{}]\n  ID: {}\n  Date: {}",
        event.title_in(language),
        event.category.label(language),
        event.id,
        event.date
    );
    if !event.time.is_empty() {
        output.push_str(&format!("\n  Time: {}", event.time));
    }
    if !event.location.is_empty() {
        output.push_str(&format!("\n  Location: {}", event.location));
    }
    let description = event.description_in(language);
    if !description.is_empty() {
        output.push_str(&format!("\n  Description: {description}"));
    }
    if let (Some(capacity), Some(left)) = (event.capacity, event.spots_left()) {
        output.push_str(&format!("\n  Spots: {left} of {capacity} left"));
    }
    if let Some(link) = &event.link {
        output.push_str(&format!("\n  Link: {link}"));
    }
    output
}

/// Format events for display.
pub fn format_events(events: &[&Event], language: Language) -> String {
    if events.is_empty() {
        return "No events found.".to_string();
    }
    let mut output = format!("EVENTS ({})\n", events.len());
    output.push_str(&"-".repeat(40));
    for event in events {
        output.push_str(&format!("\n{}", format_event(event, language)));
        output.push('\n');
    }
    output
}

/// Filter buttons on one line: `Sve (10) | Novosti (4) | ...`.
pub fn format_filter_options(options: &[FilterOption]) -> String {
    options
        .iter()
        .map(|option| format!("{} ({})", option.label, option.count))
        .collect::<Vec<_>>()
        .join(" | ")
}

fn format_pager<R>(page: &ListingPage<'_, R>) -> String {
    format!(
        "Page {}/{} ({} matching)",
        page.page, page.total_pages, page.total_matched
    )
}

/// Format a page of any record type.
///
/// Each record shows `title_field` as its heading, then its ID, filter
/// value and search fields.
pub fn format_listing<R: Record>(
    page: &ListingPage<'_, R>,
    config: &ListingConfig,
    title_field: &str,
    quiet: bool,
) -> String {
    let mut output = if page.is_empty() {
        "No records found.".to_string()
    } else {
        let mut output = format!("RECORDS ({})\n", page.visible.len());
        output.push_str(&"-".repeat(40));
        for record in &page.visible {
            let title = record.field(title_field).unwrap_or_default();
            output.push_str(&format!("\n{}\n  ID: {}", title, record.record_id()));
            if let Some(value) = record.field(&config.filter_field) {
                output.push_str(&format!("\n  {}: {}", config.filter_field, value));
            }
            for name in config.search_fields.iter().filter(|name| *name != title_field) {
                if let Some(value) = record.field(name).filter(|v| !v.is_empty()) {
                    output.push_str(&format!("\n  {name}: {value}"));
                }
            }
            output.push('\n');
        }
        output
    };

    if !quiet {
        let facets: Vec<String> = std::iter::once(("all", page.facets.all))
            .chain(page.facets.iter())
            .map(|(value, count)| format!("{value}: {count}"))
            .collect();
        output.push_str(&format!("\n{}\n{}", format_pager(page), facets.join(" | ")));
    }
    output
}

/// Format one chronicle.
pub fn format_chronicle(chronicle: &Chronicle) -> String {
    let number = chronicle
        .issue_number()
        .map(|n| format!("#{n}"))
        .unwrap_or_else(|| "?".to_string());
    let date = chronicle
        .formatted_date
        .clone()
        .unwrap_or_else(|| chronicle.date.format("%d.%m.%Y.").to_string());

    let mut output = format!(
        "{} ({})\n  Issue: {}\n  Date: {}",
        chronicle.display_title(),
        chronicle.decade(),
        number,
        date
    );
    if let Some(description) = &chronicle.description {
        output.push_str(&format!("\n  Description: {description}"));
    }
    if let Some(pdf_url) = &chronicle.pdf_url {
        output.push_str(&format!("\n  PDF: {pdf_url}"));
    }
    output
}

/// Format the chronicles archive: decade filters, then the matching issues.
pub fn format_chronicles(
    page: &ListingPage<'_, Chronicle>,
    options: &[FilterOption],
    quiet: bool,
) -> String {
    let mut output = String::new();
    if !quiet {
        output.push_str(&format_filter_options(options));
        output.push_str("\n\n");
    }
    if page.is_empty() {
        output.push_str("No chronicles found.");
        return output;
    }
    output.push_str(&format!("CHRONICLES ({})\n", page.total_matched));
    output.push_str(&"-".repeat(40));
    for chronicle in &page.visible {
        output.push_str(&format!("\n{}", format_chronicle(chronicle)));
        output.push('\n');
    }
    output
}

/// Format global search results.
pub fn format_search_results(results: &[&SearchEntry]) -> String {
    if results.is_empty() {
        return "No results found.".to_string();
    }
    let mut output = format!("RESULTS ({})\n", results.len());
    output.push_str(&"-".repeat(40));
    for entry in results {
        output.push_str(&format!("\n{} [{}]\n  URL: {}", entry.title, entry.kind.label(), entry.url));
        if let Some(description) = &entry.description {
            output.push_str(&format!("\n  {description}"));
        }
        if let Some(date) = entry.date {
            output.push_str(&format!("\n  Date: {date}"));
        }
        output.push('\n');
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use hnds_core::calendar::{build_month_grid, find_event, seed_events};
    use hnds_core::content::{global_search, site_index};
    use hnds_core::listing::{query, FilterSelection, FilterState};
    use serde_json::json;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_format_month_grid() {
        let events = seed_events();
        let grid = build_month_grid(2026, 3, &events, Some(make_date(2026, 3, 18))).unwrap();
        let output = format_month_grid(&grid, Language::Hr);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "OŽUJAK 2026");
        assert!(lines[1].starts_with(" Pon "));
        // 1 March 2026 is a Sunday: the first row holds only that day.
        assert_eq!(lines[2].trim(), "1");
        assert!(lines[3].contains("  7*"));
        assert!(lines[5].contains("[18]"));
        assert!(lines[7].trim_end().ends_with("31"));
        assert_eq!(lines[8], "");
        assert_eq!(
            lines[9],
            "07.03.2026. Koncert - Njemačka klasična glazba [Kulturni događaj]"
        );
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_format_month_grid_german() {
        let grid = build_month_grid(2026, 3, &seed_events(), None).unwrap();
        let output = format_month_grid(&grid, Language::De);

        assert!(output.starts_with("MÄRZ 2026\n"));
        assert!(output.contains("Konzert - Deutsche klassische Musik [Kulturveranstaltung]"));
    }

    #[test]
    fn test_format_event() {
        let events = seed_events();
        let event = find_event(&events, "izlet-berlin").unwrap();
        let output = format_event(event, Language::Hr);

        assert!(output.contains("  ID: izlet-berlin"));
        assert!(output.contains("  Date: 2026-02-15"));
        assert!(output.contains("  Location: Berlin"));
        assert!(output.contains("  Spots: 12 of 30 left"));
    }

    #[test]
    fn test_format_events_empty() {
        assert_eq!(format_events(&[], Language::Hr), "No events found.");
    }

    #[test]
    fn test_format_listing() {
        let records = vec![
            json!({"id": 1, "category": "news", "title": "Novi tečajevi", "excerpt": "Upisi"}),
            json!({"id": 2, "category": "events", "title": "Koncert", "excerpt": ""}),
        ];
        let config = ListingConfig::new("category", ["title", "excerpt"]).with_page_size(1);
        let page = query(&records, &config, &FilterState::new());

        let output = format_listing(&page, &config, "title", false);
        assert!(output.starts_with("RECORDS (1)\n"));
        assert!(output.contains("\nNovi tečajevi\n  ID: 1\n  category: news\n  excerpt: Upisi\n"));
        assert!(output.contains("Page 1/2 (2 matching)"));
        assert!(output.ends_with("all: 2 | events: 1 | news: 1"));

        let quiet = format_listing(&page, &config, "title", true);
        assert!(!quiet.contains("Page 1/2"));
    }

    #[test]
    fn test_format_empty_listing() {
        let records = vec![json!({"id": 1, "category": "news", "title": "x"})];
        let config = ListingConfig::new("category", ["title"]);
        let page = query(&records, &config, &FilterState::new().select("events"));

        let output = format_listing(&page, &config, "title", true);
        assert_eq!(output, "No records found.");
    }

    #[test]
    fn test_format_filter_options() {
        let options = vec![
            FilterOption {
                value: "all".to_string(),
                label: "Sve".to_string(),
                count: 3,
            },
            FilterOption {
                value: "1990".to_string(),
                label: "1990e".to_string(),
                count: 3,
            },
        ];
        assert_eq!(format_filter_options(&options), "Sve (3) | 1990e (3)");
    }

    #[test]
    fn test_format_search_results() {
        let index = site_index();
        let results = global_search(&index, "galerija", &FilterSelection::All);
        let output = format_search_results(&results);

        assert!(output.starts_with("RESULTS (1)\n"));
        assert!(output.contains("Galerija [Stranica]\n  URL: /galerija"));
        assert_eq!(format_search_results(&[]), "No results found.");
    }
}
