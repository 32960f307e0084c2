//! Field extraction
//!
//! Pulls each logical field out of a scraped item once its line indices are
//! known, and strips the boilerplate the portals wrap around the values.

use once_cell::sync::Lazy;
use regex::Regex;

use super::rules::FieldIndexMap;
use crate::error::{ParseError, ParseResult};
use crate::models::enums::{CoarseFormat, ItemField, RecordKind};
use crate::models::item::ItemStatus;

static RENEW_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)renew").unwrap());
static DUE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)due").unwrap());
/// Bibliographic role appended by Toronto's catalogue, e.g. ", author."
static ROLE_SUFFIX_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^\s(author|editor|illustrator|translator|narrator|director|composer|performer|compiler|creator|artist|photographer|contributor|writer)\.$",
    )
    .unwrap()
});

/// Prefixes removed from date lines; at most one is stripped
const DATE_PREFIXES: [&str; 3] = ["Expires on ", "Pick up by ", "Due by "];
const BRANCH_PREFIXES: [&str; 2] = ["Pick up by ", "Pick up at "];

/// Bounds-checked view over one scraped item's lines
#[derive(Debug, Clone, Copy)]
pub struct ItemLines<'a, S> {
    lines: &'a [S],
}

impl<'a, S: AsRef<str>> ItemLines<'a, S> {
    pub fn new(lines: &'a [S]) -> Self {
        Self { lines }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Line `index`, or `LineOutOfRange` naming the field that wanted it
    pub fn get(&self, index: usize, field: ItemField) -> ParseResult<&'a str> {
        self.lines
            .get(index)
            .map(|line| line.as_ref())
            .ok_or(ParseError::LineOutOfRange {
                field,
                index,
                len: self.lines.len(),
            })
    }

    pub fn last(&self) -> Option<&'a str> {
        self.lines.last().map(|line| line.as_ref())
    }
}

/// Field values as read from the page, before contributor formatting and the
/// empty-title check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFields {
    pub title: String,
    pub item_format: String,
    pub contributors: String,
    pub status: ItemStatus,
    pub item_date: String,
    pub branch: String,
}

/// Split a `"<Title>, <Format>"` line on its last `", "`.
///
/// Titles may contain commas themselves ("Disciple, Part One, Book"); the
/// format never does.
pub fn split_listing(line: &str) -> ParseResult<(&str, &str)> {
    line.rsplit_once(", ")
        .ok_or_else(|| ParseError::MissingFormat(line.to_string()))
}

/// Remove one known date prefix; lines without one pass through unchanged
pub fn strip_date_prefix(raw: &str) -> &str {
    strip_first_prefix(raw, &DATE_PREFIXES)
}

pub fn strip_branch_prefix(raw: &str) -> &str {
    strip_first_prefix(raw, &BRANCH_PREFIXES)
}

fn strip_first_prefix<'a>(raw: &'a str, prefixes: &[&str]) -> &'a str {
    prefixes
        .iter()
        .find_map(|prefix| raw.strip_prefix(prefix))
        .unwrap_or(raw)
}

pub fn durham_hold_status(raw: &str) -> ItemStatus {
    if raw.contains("Not ready") {
        ItemStatus::NotReady
    } else {
        ItemStatus::Ready
    }
}

pub fn durham_checkout_status(raw: &str) -> ItemStatus {
    if raw.contains("Due soon") {
        ItemStatus::DueSoon
    } else if raw.contains("Due later") {
        ItemStatus::DueLater
    } else {
        ItemStatus::Overdue
    }
}

/// Toronto shows its own due phrase ("Due Tomorrow", "Overdue", ...) next to
/// the date; anything without "due" in it means the item is not due yet.
pub fn toronto_checkout_status(raw: &str) -> ItemStatus {
    if DUE_RE.is_match(raw) {
        ItemStatus::from_label(raw)
    } else {
        ItemStatus::DueLater
    }
}

/// Toronto catalogue names read "Urma, Raoul-Gabriel, author.": drop the
/// trailing role and prefix the by-line marker the Durham pages already carry.
pub fn toronto_contributors(raw: &str) -> String {
    let name = match raw.rsplit_once(',') {
        Some((head, tail)) if ROLE_SUFFIX_RE.is_match(tail) => head,
        _ => raw,
    };

    if name.trim().is_empty() {
        String::new()
    } else {
        format!("by {}", name)
    }
}

/// Whether a Toronto row ends with a renew control
pub fn ends_with_renew<S: AsRef<str>>(lines: &ItemLines<'_, S>) -> bool {
    lines.last().map(|line| RENEW_RE.is_match(line)).unwrap_or(false)
}

/// Extract a Durham (Pickering/Whitby) item
pub fn durham_fields<S: AsRef<str>>(
    lines: &ItemLines<'_, S>,
    map: &FieldIndexMap,
    format: CoarseFormat,
    kind: RecordKind,
) -> ParseResult<RawFields> {
    let (title, _) = split_listing(lines.get(map.title, ItemField::Title)?)?;
    let (_, item_format) = split_listing(lines.get(map.format, ItemField::Format)?)?;

    // DVD listings carry no by-line
    let contributors = match (format, map.contributors) {
        (CoarseFormat::Dvd, _) | (_, None) => String::new(),
        (_, Some(index)) => lines.get(index, ItemField::Contributors)?.to_string(),
    };

    let status_line = lines.get(
        map.status.ok_or(ParseError::UnmappedField(ItemField::Status))?,
        ItemField::Status,
    )?;
    let item_date = strip_date_prefix(lines.get(map.item_date, ItemField::ItemDate)?);

    let (status, branch) = match kind {
        RecordKind::Hold => {
            let branch_line = lines.get(
                map.branch.ok_or(ParseError::UnmappedField(ItemField::Branch))?,
                ItemField::Branch,
            )?;
            (
                durham_hold_status(status_line),
                strip_branch_prefix(branch_line).to_string(),
            )
        }
        RecordKind::Checkout => (durham_checkout_status(status_line), String::new()),
    };

    Ok(RawFields {
        title: title.to_string(),
        item_format: item_format.to_string(),
        contributors,
        status,
        item_date: item_date.to_string(),
        branch,
    })
}

/// Extract a Toronto item. Contributors are returned raw; the normalizer owns
/// Toronto's by-line formatting.
pub fn toronto_fields<S: AsRef<str>>(
    lines: &ItemLines<'_, S>,
    map: &FieldIndexMap,
    kind: RecordKind,
    renew_offset: usize,
) -> ParseResult<RawFields> {
    let title = lines.get(map.title, ItemField::Title)?;
    let item_format = lines.get(map.format, ItemField::Format)?;
    let contributors = match map.contributors {
        Some(index) => lines.get(index, ItemField::Contributors)?,
        None => "",
    };

    let fields = match kind {
        RecordKind::Hold => {
            let branch_line = lines.get(
                map.branch.ok_or(ParseError::UnmappedField(ItemField::Branch))?,
                ItemField::Branch,
            )?;
            let item_date = lines.get(map.item_date, ItemField::ItemDate)?;
            // Only the ready-for-pickup table is scraped
            (
                ItemStatus::Ready,
                strip_date_prefix(item_date),
                strip_branch_prefix(branch_line),
            )
        }
        RecordKind::Checkout => {
            let status_line = lines.get(
                map.status.ok_or(ParseError::UnmappedField(ItemField::Status))?,
                ItemField::Status,
            )?;
            let date_index = if ends_with_renew(lines) {
                map.item_date
                    .checked_sub(renew_offset)
                    .ok_or(ParseError::LineOutOfRange {
                        field: ItemField::ItemDate,
                        index: map.item_date,
                        len: lines.len(),
                    })?
            } else {
                map.item_date
            };
            let item_date = lines.get(date_index, ItemField::ItemDate)?;
            (toronto_checkout_status(status_line), strip_date_prefix(item_date), "")
        }
    };
    let (status, item_date, branch) = fields;

    Ok(RawFields {
        title: title.to_string(),
        item_format: item_format.to_string(),
        contributors: contributors.to_string(),
        status,
        item_date: item_date.to_string(),
        branch: branch.to_string(),
    })
}
