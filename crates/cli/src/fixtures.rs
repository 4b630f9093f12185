//! Loading JSON fixtures from disk.

use std::fs;
use std::path::Path;

use hnds_core::calendar::{seed_events, sort_events, validate_events, Event};
use serde::de::DeserializeOwned;

use crate::error::{CliError, Result};

/// Parses JSON text. `source_name` only appears in error messages.
pub fn parse_json<T: DeserializeOwned>(text: &str, source_name: &str) -> Result<T> {
    serde_json::from_str(text).map_err(|source| CliError::Parse {
        source_name: source_name.to_string(),
        source,
    })
}

/// Reads and parses a JSON file.
pub fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    tracing::debug!(path = %path.display(), "Loading fixture");

    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(&text, &path.display().to_string())
}

/// Like [`load_json`], but a missing file yields `None`.
pub fn load_json_if_exists<T: DeserializeOwned>(path: &Path) -> Result<Option<T>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "Fixture not present, skipping");
        return Ok(None);
    }
    load_json(path).map(Some)
}

/// Validates and sorts ingested events.
pub fn prepare_events(mut events: Vec<Event>) -> Result<Vec<Event>> {
    validate_events(&events).map_err(|(id, source)| CliError::InvalidEvent { id, source })?;
    sort_events(&mut events);
    Ok(events)
}

/// Loads events from `path`, or the built-in seed events when no path is given.
pub fn load_events(path: Option<&Path>) -> Result<Vec<Event>> {
    let events = match path {
        Some(path) => load_json(path)?,
        None => {
            tracing::debug!("Using built-in seed events");
            seed_events()
        }
    };
    let events = prepare_events(events)?;
    tracing::info!(count = events.len(), "Loaded events");
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    use hnds_core::calendar::CalendarError;
    use hnds_core::content::Chronicle;

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_events_from_file() {
        let file = write_temp(
            r#"[
                {"id": "b", "date": "2026-03-10", "title": "Predavanje", "category": "cultural"},
                {"id": "a", "date": "2026-03-02T18:00:00", "title": "Tečaj", "category": "course", "capacity": 12, "registered": 4}
            ]"#,
        );

        let events = load_events(Some(file.path())).unwrap();
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(events[0].spots_left(), Some(8));
    }

    #[test]
    fn test_load_events_defaults_to_seed() {
        let events = load_events(None).unwrap();
        assert_eq!(events.len(), seed_events().len());
    }

    #[test]
    fn test_invalid_event_is_rejected() {
        let file = write_temp(
            r#"[{"id": "full", "date": "2026-03-10", "title": "Izlet", "category": "trip", "capacity": 10, "registered": 11}]"#,
        );

        let err = load_events(Some(file.path())).unwrap_err();
        assert!(matches!(
            err,
            CliError::InvalidEvent {
                ref id,
                source: CalendarError::RegisteredExceedsCapacity { .. }
            } if id == "full"
        ));
    }

    #[test]
    fn test_bad_date_fails_to_load() {
        let file = write_temp(
            r#"[{"id": "x", "date": "10.03.2026.", "title": "Izlet", "category": "trip"}]"#,
        );

        let err = load_events(Some(file.path())).unwrap_err();
        assert!(matches!(err, CliError::Parse { .. }));
        assert!(err.to_string().contains("invalid date"));
    }

    #[test]
    fn test_missing_file() {
        let path = Path::new("/definitely/not/here.json");
        let err = load_json::<Vec<Chronicle>>(path).unwrap_err();
        assert!(matches!(err, CliError::Read { .. }));

        let missing: Option<Vec<Chronicle>> = load_json_if_exists(path).unwrap();
        assert!(missing.is_none());
    }
}
