//! Plain-text hold/checkout reports
//!
//! The message body sent to patrons: a header naming the library and the
//! report date, followed by either a numbered item listing or a link to the
//! shared summary document.

use std::fmt::Write;

use chrono::NaiveDate;

use crate::models::enums::{LibrarySystem, RecordKind};
use crate::models::item::LibraryItem;

const DOC_URL_PREFIX: &str = "https://docs.google.com/document/d/";

/// How the report body lists its items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportStyle {
    /// Numbered one-line-per-item listing
    Plain,
    /// Single link to the summary document with this id
    Doc(String),
}

/// One-line summary of an item.
///
/// `"<title> (<format>) [<contributors> ]| [<status> | ]<date>[ | <branch>]"`;
/// the branch is only shown for holds. A blank title yields an empty line.
pub fn item_line(item: &LibraryItem) -> String {
    if item.title.is_empty() {
        return String::new();
    }

    let mut line = format!("{} ({}) ", item.title, item.item_format);
    if !item.contributors.is_empty() {
        line.push_str(&item.contributors);
        line.push(' ');
    }
    line.push_str("| ");

    let status = item.status.as_str();
    if !status.is_empty() {
        line.push_str(status);
        line.push_str(" | ");
    }
    line.push_str(&item.item_date);

    if item.is_hold {
        line.push_str(" | ");
        line.push_str(&item.branch);
    }
    line
}

/// Report body without the header
pub fn listing(items: &[LibraryItem], style: &ReportStyle) -> String {
    match style {
        ReportStyle::Plain => {
            let mut body = String::new();
            for (position, item) in items.iter().enumerate() {
                // Writing to a String cannot fail
                let _ = writeln!(body, "{}. {}", position + 1, item_line(item));
            }
            body
        }
        ReportStyle::Doc(doc_id) => {
            format!("Click here to view your updated report: {}{}", DOC_URL_PREFIX, doc_id)
        }
    }
}

/// Header line introducing a listing, e.g. `"\nToronto Public Library HOLDS (2022-01-05):\n"`
pub fn header(system: LibrarySystem, kind: RecordKind, date: NaiveDate) -> String {
    let label = match kind {
        RecordKind::Hold => "HOLDS",
        RecordKind::Checkout => "CHECKOUTS",
    };
    format!("\n{} {} ({}):\n", system.display_name(), label, date.format("%Y-%m-%d"))
}

pub fn holds_report(
    system: LibrarySystem,
    date: NaiveDate,
    holds: &[LibraryItem],
    style: &ReportStyle,
) -> String {
    report(system, RecordKind::Hold, date, holds, style)
}

pub fn checkouts_report(
    system: LibrarySystem,
    date: NaiveDate,
    checkouts: &[LibraryItem],
    style: &ReportStyle,
) -> String {
    report(system, RecordKind::Checkout, date, checkouts, style)
}

pub fn report(
    system: LibrarySystem,
    kind: RecordKind,
    date: NaiveDate,
    items: &[LibraryItem],
    style: &ReportStyle,
) -> String {
    let mut text = header(system, kind, date);
    text.push_str(&listing(items, style));
    text
}
