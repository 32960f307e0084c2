//! Library item (hold or checkout) model and related types.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::enums::LibrarySystem;

/// Normalized hold/checkout status.
///
/// Serialized and displayed as the exact labels shown to patrons ("Not Ready",
/// "Due Soon", ...). `Phrase` carries a portal's own due phrase through
/// unchanged (e.g. Toronto's "Due Tomorrow").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemStatus {
    Ready,
    NotReady,
    DueSoon,
    DueLater,
    Overdue,
    Phrase(String),
}

impl ItemStatus {
    /// Map a label back to its variant; anything unknown is kept as a phrase
    pub fn from_label(label: &str) -> Self {
        match label {
            "Ready" => ItemStatus::Ready,
            "Not Ready" => ItemStatus::NotReady,
            "Due Soon" => ItemStatus::DueSoon,
            "Due Later" => ItemStatus::DueLater,
            "Overdue" => ItemStatus::Overdue,
            other => ItemStatus::Phrase(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ItemStatus::Ready => "Ready",
            ItemStatus::NotReady => "Not Ready",
            ItemStatus::DueSoon => "Due Soon",
            ItemStatus::DueLater => "Due Later",
            ItemStatus::Overdue => "Overdue",
            ItemStatus::Phrase(phrase) => phrase,
        }
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for ItemStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ItemStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(ItemStatus::from_label(&label))
    }
}

/// Canonical hold/checkout record.
///
/// A value object: two records are equal iff every field matches. Records are
/// only built by the normalizer and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibraryItem {
    /// Date the source page was scraped (supplied by the caller)
    pub date_retrieved: NaiveDate,
    pub title: String,
    pub contributors: String,
    /// Literal format string, e.g. "Music CD" or "Book Set"
    pub item_format: String,
    pub is_hold: bool,
    pub status: ItemStatus,
    /// Pickup-by, expiry or due date with the boilerplate prefix removed
    pub item_date: String,
    /// Pickup branch; empty for checkouts
    pub branch: String,
    pub system: LibrarySystem,
}
