//! Captured scrape of one hold or checkout listing

use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::enums::{LibrarySystem, RecordKind};
use crate::error::AppResult;

/// Raw per-item text blocks from one listing page, as handed over by the
/// page-scraping collaborator.
///
/// Stored as JSON so real pages can be replayed against the rule tables:
///
/// ```json
/// { "system": "TORONTO", "kind": "CHECKOUT", "date_retrieved": "2022-01-05",
///   "items": [[" ", "Hinduism", " ", "Hinduism", "Sen, Kshitimohan, author."]] }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Capture {
    pub system: LibrarySystem,
    pub kind: RecordKind,
    #[serde(default)]
    pub date_retrieved: Option<NaiveDate>,
    pub items: Vec<Vec<String>>,
}

impl Capture {
    /// Read a capture from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }
}
