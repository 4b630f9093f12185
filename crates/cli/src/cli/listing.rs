//! Generic listing command.

use std::path::PathBuf;

use clap::Parser;

/// Filter, search and paginate a JSON array of records.
#[derive(Debug, Parser)]
pub struct ListCommand {
    /// JSON file holding an array of objects.
    pub file: PathBuf,
    /// Field used for the category filter.
    #[arg(long)]
    pub filter_field: String,
    /// Field searched by `--search`. Repeat for several fields.
    #[arg(long = "search-field", required = true)]
    pub search_fields: Vec<String>,
    /// Records per page; 0 shows everything (defaults to `HNDS_PAGE_SIZE`).
    #[arg(long)]
    pub page_size: Option<usize>,
    /// Filter value, or "all".
    #[arg(long, default_value = "all")]
    pub filter: String,
    /// Case-insensitive search text.
    #[arg(long, default_value = "")]
    pub search: String,
    /// 1-based page number.
    #[arg(long, default_value_t = 1)]
    pub page: usize,
    /// Field printed as the record heading.
    #[arg(long, default_value = "title")]
    pub title_field: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};

    #[test]
    fn test_list_arguments() {
        let cli = Cli::try_parse_from([
            "hnds",
            "list",
            "news.json",
            "--filter-field",
            "category",
            "--search-field",
            "title",
            "--search-field",
            "excerpt",
            "--filter",
            "events",
            "--page",
            "2",
        ])
        .unwrap();

        let Commands::List(cmd) = cli.command else {
            panic!("expected list command");
        };
        assert_eq!(cmd.file, PathBuf::from("news.json"));
        assert_eq!(cmd.filter_field, "category");
        assert_eq!(cmd.search_fields, vec!["title", "excerpt"]);
        assert_eq!(cmd.filter, "events");
        assert_eq!(cmd.search, "");
        assert_eq!(cmd.page, 2);
        assert_eq!(cmd.title_field, "title");
    }

    #[test]
    fn test_search_field_is_required() {
        assert!(
            Cli::try_parse_from(["hnds", "list", "news.json", "--filter-field", "category"])
                .is_err()
        );
    }
}
