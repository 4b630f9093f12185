use std::{env, num::NonZeroUsize, path::PathBuf};

/// Page size of the news listing.
pub const DEFAULT_PAGE_SIZE: usize = 9;

/// One year of month grids.
pub const DEFAULT_GRID_CACHE_SIZE: usize = 12;

/// CLI configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding the JSON fixtures (default: "fixtures")
    pub fixtures_dir: PathBuf,
    /// Records per page for `list` when `--page-size` is not given (default: 9)
    pub page_size: usize,
    /// Maximum number of month grids kept in memory (default: 12)
    pub grid_cache_size: NonZeroUsize,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `HNDS_FIXTURES_DIR` - Fixture directory (default: "fixtures")
    /// - `HNDS_PAGE_SIZE` - Listing page size, 0 disables paging (default: 9)
    /// - `HNDS_GRID_CACHE_SIZE` - Month grid cache capacity (default: 12)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Unparsable values fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            fixtures_dir: lookup("HNDS_FIXTURES_DIR")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("fixtures")),
            page_size: lookup("HNDS_PAGE_SIZE")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_PAGE_SIZE),
            grid_cache_size: lookup("HNDS_GRID_CACHE_SIZE")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or_else(default_grid_cache_size),
        }
    }

    /// Resolves a fixture path: existing paths are used as given, anything
    /// else is looked up inside the fixture directory.
    pub fn fixture_path(&self, file: impl Into<PathBuf>) -> PathBuf {
        let file = file.into();
        if file.is_absolute() || file.exists() {
            file
        } else {
            self.fixtures_dir.join(file)
        }
    }
}

fn default_grid_cache_size() -> NonZeroUsize {
    NonZeroUsize::new(DEFAULT_GRID_CACHE_SIZE).unwrap_or(NonZeroUsize::MIN)
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_values() {
        let config = Config::from_lookup(lookup(&[]));

        assert_eq!(config.fixtures_dir, PathBuf::from("fixtures"));
        assert_eq!(config.page_size, 9);
        assert_eq!(config.grid_cache_size.get(), 12);
    }

    #[test]
    fn test_values_from_environment() {
        let config = Config::from_lookup(lookup(&[
            ("HNDS_FIXTURES_DIR", "/srv/hnds"),
            ("HNDS_PAGE_SIZE", "6"),
            ("HNDS_GRID_CACHE_SIZE", "3"),
        ]));

        assert_eq!(config.fixtures_dir, PathBuf::from("/srv/hnds"));
        assert_eq!(config.page_size, 6);
        assert_eq!(config.grid_cache_size.get(), 3);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup(&[
            ("HNDS_FIXTURES_DIR", ""),
            ("HNDS_PAGE_SIZE", "nine"),
            ("HNDS_GRID_CACHE_SIZE", "0"),
        ]));

        assert_eq!(config.fixtures_dir, PathBuf::from("fixtures"));
        assert_eq!(config.page_size, 9);
        assert_eq!(config.grid_cache_size.get(), 12);
    }

    #[test]
    fn test_fixture_path() {
        let config = Config::from_lookup(lookup(&[("HNDS_FIXTURES_DIR", "data")]));

        assert_eq!(
            config.fixture_path("no-such-file.json"),
            PathBuf::from("data/no-such-file.json")
        );
        assert_eq!(
            config.fixture_path("/tmp/news.json"),
            PathBuf::from("/tmp/news.json")
        );
    }
}
