//! Command execution.
//!
//! Each command loads its fixtures, calls into `hnds_core` and returns the
//! text to print, so `main` only has to write it to stdout.

use std::path::{Path, PathBuf};

use chrono::{Datelike, Local, NaiveDate};
use hnds_core::calendar::{
    find_event, upcoming_events, Event, Language, MonthGridCache, YearMonth,
};
use hnds_core::content::{
    decade_filters, global_search, site_index, Chronicle, NewsArticle, SearchEntry,
    CHRONICLE_ALL_LABEL,
};
use hnds_core::listing::{filter_options, query, FilterSelection, FilterState, ListingConfig};
use serde_json::Value;

use crate::cli::calendar::CalendarAction;
use crate::cli::chronicles::ChroniclesCommand;
use crate::cli::listing::ListCommand;
use crate::cli::search::SearchCommand;
use crate::cli::{Cli, Commands, OutputFormat};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::fixtures::{load_events, load_json, load_json_if_exists};
use crate::output::{format_output, pretty};

const CHRONICLES_FILE: &str = "chronicles.json";
const NEWS_FILE: &str = "news.json";

/// Output settings shared by every command.
#[derive(Debug, Clone, Copy)]
struct Output {
    format: OutputFormat,
    quiet: bool,
}

/// Runs a parsed command line. `--fixtures-dir` overrides the configured directory.
pub fn run(cli: Cli, mut config: Config) -> Result<String> {
    if let Some(dir) = cli.fixtures_dir {
        config.fixtures_dir = dir;
    }
    let out = Output {
        format: cli.format,
        quiet: cli.quiet,
    };

    tracing::debug!(?config, "Running command");

    match cli.command {
        Commands::Calendar(cmd) => run_calendar(cmd.action, &config, out),
        Commands::List(cmd) => run_list(cmd, &config, out),
        Commands::Chronicles(cmd) => run_chronicles(cmd, &config, out),
        Commands::Search(cmd) => run_search(cmd, &config, out),
    }
}

fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Loads `--events` through the fixture directory, or the seed events without it.
fn load_calendar_events(events: Option<PathBuf>, config: &Config) -> Result<Vec<Event>> {
    let path = events.map(|file| config.fixture_path(file));
    load_events(path.as_deref())
}

fn run_calendar(action: CalendarAction, config: &Config, out: Output) -> Result<String> {
    match action {
        CalendarAction::Month {
            year,
            month,
            count,
            today,
            lang,
            events,
        } => {
            let today = today.unwrap_or_else(local_today);
            let start = YearMonth::new(
                year.unwrap_or_else(|| today.year()),
                month.unwrap_or_else(|| today.month()),
            )?;
            let events = load_calendar_events(events, config)?;
            month_grids(start, count, today, events, config, lang, out)
        }
        CalendarAction::Upcoming {
            limit,
            now,
            lang,
            events,
        } => {
            let events = load_calendar_events(events, config)?;
            let now = now.unwrap_or_else(local_today);
            let upcoming = upcoming_events(&events, now, limit);
            tracing::debug!(%now, count = upcoming.len(), "Upcoming events");

            Ok(match out.format {
                OutputFormat::Json => format_output(&upcoming, out.format),
                OutputFormat::Pretty => pretty::format_events(&upcoming, lang),
            })
        }
        CalendarAction::Show { id, lang, events } => {
            let events = load_calendar_events(events, config)?;
            let event = find_event(&events, &id).ok_or_else(|| CliError::NotFound {
                resource: format!("event {id}"),
            })?;

            Ok(match out.format {
                OutputFormat::Json => format_output(event, out.format),
                OutputFormat::Pretty => pretty::format_event(event, lang),
            })
        }
    }
}

/// Builds `count` consecutive month grids starting at `start` through a grid cache.
fn month_grids(
    start: YearMonth,
    count: u32,
    today: NaiveDate,
    events: Vec<Event>,
    config: &Config,
    lang: Language,
    out: Output,
) -> Result<String> {
    let mut cache = MonthGridCache::new(events, config.grid_cache_size);
    let mut grids = Vec::new();
    let mut current = Some(start);

    for _ in 0..count {
        let month = current.ok_or_else(|| {
            CliError::InvalidInput(format!("cannot show {count} months starting at {start}"))
        })?;
        grids.push(cache.grid(month, Some(today)).clone());
        current = month.next();
    }

    let stats = cache.stats();
    tracing::debug!(hits = stats.hits, misses = stats.misses, len = stats.len, "Grid cache");

    Ok(match out.format {
        OutputFormat::Json => format_output(&grids, out.format),
        OutputFormat::Pretty => pretty::format_month_grids(&grids, lang),
    })
}

fn run_list(cmd: ListCommand, config: &Config, out: Output) -> Result<String> {
    let listing = ListingConfig::new(cmd.filter_field, cmd.search_fields)
        .with_page_size(cmd.page_size.unwrap_or(config.page_size));
    listing.validate()?;

    let path = config.fixture_path(&cmd.file);
    let records: Vec<Value> = load_json(&path)?;
    tracing::info!(path = %path.display(), count = records.len(), "Loaded records");

    let state = FilterState::new()
        .select(cmd.filter)
        .search(cmd.search)
        .with_page(cmd.page);
    let page = query(&records, &listing, &state);

    if page.page != state.page {
        tracing::warn!(requested = state.page, shown = page.page, "Page out of range, clamped");
    }

    Ok(match out.format {
        OutputFormat::Json => format_output(&page, out.format),
        OutputFormat::Pretty => pretty::format_listing(&page, &listing, &cmd.title_field, out.quiet),
    })
}

fn run_chronicles(cmd: ChroniclesCommand, config: &Config, out: Output) -> Result<String> {
    let path = config.fixture_path(cmd.file.as_deref().unwrap_or(Path::new(CHRONICLES_FILE)));
    let chronicles: Vec<Chronicle> = load_json(&path)?;
    tracing::info!(path = %path.display(), count = chronicles.len(), "Loaded chronicles");

    let selected = cmd
        .decade
        .map(|decade| FilterSelection::Value(decade.to_string()))
        .unwrap_or_default();
    let state = FilterState::new().select(selected).search(cmd.search);
    let page = query(&chronicles, &Chronicle::listing_config(), &state);

    Ok(match out.format {
        OutputFormat::Json => format_output(&page, out.format),
        OutputFormat::Pretty => {
            let filters = decade_filters(&chronicles);
            let pairs: Vec<(&str, &str)> = filters
                .iter()
                .map(|(value, label)| (value.as_str(), label.as_str()))
                .collect();
            let options = filter_options(&page.facets, CHRONICLE_ALL_LABEL, &pairs);
            pretty::format_chronicles(&page, &options, out.quiet)
        }
    })
}

/// The site index plus whatever news and chronicles the fixture directory holds.
fn search_index(config: &Config, extra: Option<&Path>) -> Result<Vec<SearchEntry>> {
    let mut entries = site_index();

    if let Some(news) =
        load_json_if_exists::<Vec<NewsArticle>>(&config.fixtures_dir.join(NEWS_FILE))?
    {
        entries.extend(news.iter().map(SearchEntry::from));
    }
    if let Some(chronicles) =
        load_json_if_exists::<Vec<Chronicle>>(&config.fixtures_dir.join(CHRONICLES_FILE))?
    {
        entries.extend(chronicles.iter().map(SearchEntry::from));
    }
    if let Some(path) = extra {
        let more: Vec<SearchEntry> = load_json(&config.fixture_path(path))?;
        entries.extend(more);
    }

    tracing::debug!(count = entries.len(), "Search index ready");
    Ok(entries)
}

fn run_search(cmd: SearchCommand, config: &Config, out: Output) -> Result<String> {
    let entries = search_index(config, cmd.file.as_deref())?;
    let kind = FilterSelection::from_param(cmd.kind);
    let results = global_search(&entries, &cmd.query, &kind);
    tracing::info!(query = %cmd.query, count = results.len(), "Search finished");

    Ok(match out.format {
        OutputFormat::Json => format_output(&results, out.format),
        OutputFormat::Pretty => pretty::format_search_results(&results),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;

    fn run_args(args: &[&str], config: Config) -> Result<String> {
        run(Cli::try_parse_from(args).unwrap(), config)
    }

    fn config_in(dir: &Path) -> Config {
        Config {
            fixtures_dir: dir.to_path_buf(),
            page_size: 2,
            grid_cache_size: std::num::NonZeroUsize::new(4).unwrap(),
        }
    }

    fn write_fixtures(dir: &Path) {
        fs::write(
            dir.join(CHRONICLES_FILE),
            r#"[
                {"id": 1, "title": "Kronika #1", "slug": "kronika-1", "date": "1993-05-20", "description": "Osnivanje"},
                {"id": 2, "title": "Kronika #7", "slug": "kronika-7", "date": "1999-12-01"},
                {"id": 3, "title": "Kronika #15", "slug": "kronika-15", "date": "2004-03-10", "description": "Posjet Berlinu"}
            ]"#,
        )
        .unwrap();
        fs::write(
            dir.join(NEWS_FILE),
            r#"[
                {"id": 1, "title": "Izlet u Berlin", "excerpt": "Prijave su otvorene", "date": "2026-01-14", "category": "events", "slug": "izlet-berlin"},
                {"id": 2, "title": "Novi tečajevi", "excerpt": "", "date": "2026-01-10", "category": "news", "slug": "tecajevi"},
                {"id": 3, "title": "Skupština", "excerpt": "Poziv", "date": "2026-01-05", "category": "announcement", "slug": "skupstina"}
            ]"#,
        )
        .unwrap();
    }

    #[test]
    fn test_calendar_month_json() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_args(
            &[
                "hnds", "--format", "json", "calendar", "month", "--year", "2025", "--month",
                "12", "--count", "3", "--today", "2026-01-18",
            ],
            config_in(dir.path()),
        )
        .unwrap();

        let grids: Vec<Value> = serde_json::from_str(&output).unwrap();
        let months: Vec<&Value> = grids.iter().map(|g| &g["month"]).collect();
        assert_eq!(
            months,
            vec![
                &serde_json::json!({"year": 2025, "month": 12}),
                &serde_json::json!({"year": 2026, "month": 1}),
                &serde_json::json!({"year": 2026, "month": 2}),
            ]
        );
        assert!(grids.iter().all(|g| g["weeks"].as_array().unwrap().len() == 6));
    }

    #[test]
    fn test_calendar_month_rejects_grid_outside_range() {
        let dir = tempfile::tempdir().unwrap();
        let err = run_args(
            &["hnds", "calendar", "month", "--year", "300000", "--month", "1"],
            config_in(dir.path()),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Calendar(_)));
    }

    #[test]
    fn test_calendar_upcoming_and_show() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_args(
            &["hnds", "calendar", "upcoming", "--now", "2026-02-01", "--limit", "2"],
            config_in(dir.path()),
        )
        .unwrap();
        assert!(output.starts_with("EVENTS (2)\n"));
        assert!(output.contains("ID: izlet-berlin"));
        assert!(output.contains("ID: kulturni-2"));

        let err = run_args(&["hnds", "calendar", "show", "nema"], config_in(dir.path())).unwrap_err();
        assert!(matches!(err, CliError::NotFound { .. }));
    }

    #[test]
    fn test_calendar_events_resolved_in_fixtures_dir() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("my_events.json"),
            r#"[{"id": "x", "date": "2026-04-11", "title": "Uskrsni sajam", "category": "social"}]"#,
        )
        .unwrap();

        let output = run_args(
            &["hnds", "calendar", "show", "x", "--events", "my_events.json"],
            config_in(dir.path()),
        )
        .unwrap();
        assert!(output.starts_with("Uskrsni sajam [Društveni]\n  ID: x"));

        let output = run_args(
            &[
                "hnds", "--format", "json", "calendar", "upcoming", "--now", "2026-04-01",
                "--events", "my_events.json",
            ],
            config_in(dir.path()),
        )
        .unwrap();
        let events: Vec<Value> = serde_json::from_str(&output).unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0]["id"], "x");
    }

    #[test]
    fn test_calendar_with_shipped_events_fixture() {
        let fixtures = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../fixtures");
        let output = run_args(
            &["hnds", "calendar", "show", "koncert", "--events", "events.json"],
            config_in(&fixtures),
        )
        .unwrap();
        assert!(output.contains("  Location: Split - Narodno kazalište"));
    }

    #[test]
    fn test_list_command() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());

        let output = run_args(
            &[
                "hnds", "--format", "json", "list", NEWS_FILE, "--filter-field", "category",
                "--search-field", "title", "--search-field", "excerpt", "--page", "9",
            ],
            config_in(dir.path()),
        )
        .unwrap();

        let page: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(page["page"], 2);
        assert_eq!(page["totalPages"], 2);
        assert_eq!(page["totalMatched"], 3);
        assert_eq!(page["visible"][0]["id"], 3);
        assert_eq!(page["facets"]["all"], 3);
    }

    #[test]
    fn test_list_rejects_blank_filter_field() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());

        let err = run_args(
            &["hnds", "list", NEWS_FILE, "--filter-field", " ", "--search-field", "title"],
            config_in(dir.path()),
        )
        .unwrap_err();
        assert!(matches!(err, CliError::Listing(_)));
    }

    #[test]
    fn test_chronicles_command() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());

        let output = run_args(&["hnds", "chronicles", "--decade", "1990"], config_in(dir.path()))
            .unwrap();
        assert!(output.starts_with("Sve (3) | 2000e (1) | 1990e (2)\n\nCHRONICLES (2)\n"));
        assert!(output.contains("Kronika #7 (1990)"));
        assert!(!output.contains("Kronika #15"));

        let output = run_args(
            &["hnds", "--quiet", "chronicles", "--search", "BERLIN"],
            config_in(dir.path()),
        )
        .unwrap();
        assert!(output.starts_with("CHRONICLES (1)\n"));
    }

    #[test]
    fn test_search_includes_fixture_content() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());

        let output = run_args(
            &["hnds", "--format", "json", "search", "berlin"],
            config_in(dir.path()),
        )
        .unwrap();
        let results: Vec<Value> = serde_json::from_str(&output).unwrap();
        let ids: Vec<&str> = results.iter().filter_map(|r| r["id"].as_str()).collect();
        assert_eq!(ids, vec!["news-1", "chronicle-3"]);

        let output = run_args(
            &["hnds", "--format", "json", "search", "berlin", "--kind", "news"],
            config_in(dir.path()),
        )
        .unwrap();
        let results: Vec<Value> = serde_json::from_str(&output).unwrap();
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn test_search_without_fixtures_uses_site_index() {
        let dir = tempfile::tempdir().unwrap();
        let output = run_args(&["hnds", "search", "kontakt"], config_in(dir.path())).unwrap();
        assert!(output.contains("Kontakt [Stranica]"));
    }

    #[test]
    fn test_fixtures_dir_flag_overrides_config() {
        let dir = tempfile::tempdir().unwrap();
        write_fixtures(dir.path());
        let dir_arg = dir.path().to_str().unwrap();

        let output = run_args(
            &["hnds", "--fixtures-dir", dir_arg, "--quiet", "chronicles"],
            config_in(Path::new("/nonexistent")),
        )
        .unwrap();
        assert!(output.starts_with("CHRONICLES (3)\n"));
    }
}
