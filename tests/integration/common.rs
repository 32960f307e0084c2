//! Shared helpers for integration tests

use std::path::PathBuf;

use chrono::NaiveDate;
use libscrape::{Capture, ItemStatus, LibraryItem, LibraryParser};

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_capture(name: &str) -> Capture {
    Capture::from_file(fixture_path(name))
        .unwrap_or_else(|e| panic!("Failed to load fixture {}: {}", name, e))
}

/// Parse a fixture with the built-in rule tables and its own retrieval date
pub fn parse_fixture(name: &str) -> (Capture, Vec<LibraryItem>) {
    let capture = load_capture(name);
    let date = capture.date_retrieved.expect("fixture has a retrieval date");
    let items = LibraryParser::new(date).parse_batch(&capture.items, capture.kind, capture.system);
    (capture, items)
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// (title, format, contributors, status, item_date, branch)
pub type Expected<'a> = (&'a str, &'a str, &'a str, ItemStatus, &'a str, &'a str);

pub fn assert_item(item: &LibraryItem, expected: &Expected<'_>) {
    let (title, format, contributors, status, item_date, branch) = expected;
    assert_eq!(item.title, *title);
    assert_eq!(item.item_format, *format, "format of {}", title);
    assert_eq!(item.contributors, *contributors, "contributors of {}", title);
    assert_eq!(item.status, *status, "status of {}", title);
    assert_eq!(item.item_date, *item_date, "date of {}", title);
    assert_eq!(item.branch, *branch, "branch of {}", title);
}
