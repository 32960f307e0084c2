//! Raw fields to LibraryItem normalizer
//!
//! Applies each portal's contributor convention and the empty-title filter,
//! then freezes the result into a `LibraryItem`.

use chrono::NaiveDate;

use super::extract::{toronto_contributors, RawFields};
use crate::models::enums::{LibrarySystem, RecordKind, RuleEngine};
use crate::models::item::LibraryItem;

/// Record normalizer for one scrape cycle
#[derive(Debug, Clone, Copy)]
pub struct ItemNormalizer {
    date_retrieved: NaiveDate,
}

impl ItemNormalizer {
    pub fn new(date_retrieved: NaiveDate) -> Self {
        Self { date_retrieved }
    }

    /// Build the canonical record.
    ///
    /// Returns `None` when the title is blank: the scraper also captures
    /// decorative DOM fragments, and those are dropped here.
    pub fn normalize(
        &self,
        fields: RawFields,
        kind: RecordKind,
        system: LibrarySystem,
    ) -> Option<LibraryItem> {
        if fields.title.trim().is_empty() {
            return None;
        }

        let contributors = match system.engine() {
            RuleEngine::Toronto => toronto_contributors(&fields.contributors),
            RuleEngine::Durham => fields.contributors,
        };

        Some(LibraryItem {
            date_retrieved: self.date_retrieved,
            title: fields.title,
            contributors,
            item_format: fields.item_format,
            is_hold: kind.is_hold(),
            status: fields.status,
            item_date: fields.item_date,
            branch: fields.branch,
            system,
        })
    }
}
