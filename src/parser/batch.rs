//! Batch parser for hold and checkout listings

use std::sync::Arc;

use chrono::NaiveDate;

use super::classify::{coarse_format, has_subtitle};
use super::extract::{durham_fields, split_listing, toronto_fields, ItemLines};
use super::normalize::ItemNormalizer;
use super::rules::RuleTables;
use crate::error::ParseResult;
use crate::models::enums::{ItemField, LibrarySystem, RecordKind, RuleEngine};
use crate::models::item::LibraryItem;

/// Turns raw scraped items into `LibraryItem`s.
///
/// Holds no mutable state; clone it or share it behind a reference across
/// threads freely.
#[derive(Debug, Clone)]
pub struct LibraryParser {
    rules: Arc<RuleTables>,
    normalizer: ItemNormalizer,
}

impl LibraryParser {
    /// Parser using the built-in rule tables
    pub fn new(date_retrieved: NaiveDate) -> Self {
        Self::with_rules(Arc::new(RuleTables::default()), date_retrieved)
    }

    pub fn with_rules(rules: Arc<RuleTables>, date_retrieved: NaiveDate) -> Self {
        Self {
            rules,
            normalizer: ItemNormalizer::new(date_retrieved),
        }
    }

    pub fn rules(&self) -> &RuleTables {
        &self.rules
    }

    /// Parse a holds listing; every returned record has `is_hold == true`
    pub fn parse_holds<S: AsRef<str>>(
        &self,
        raw_items: &[Vec<S>],
        system: LibrarySystem,
    ) -> Vec<LibraryItem> {
        self.parse_batch(raw_items, RecordKind::Hold, system)
    }

    /// Parse a checkouts listing; every returned record has `is_hold == false`
    pub fn parse_checkouts<S: AsRef<str>>(
        &self,
        raw_items: &[Vec<S>],
        system: LibrarySystem,
    ) -> Vec<LibraryItem> {
        self.parse_batch(raw_items, RecordKind::Checkout, system)
    }

    /// Parse every item, keeping input order.
    ///
    /// Items that fail to parse are logged and skipped; one bad item never
    /// costs the rest of the listing. Identical items are not deduplicated.
    pub fn parse_batch<S: AsRef<str>>(
        &self,
        raw_items: &[Vec<S>],
        kind: RecordKind,
        system: LibrarySystem,
    ) -> Vec<LibraryItem> {
        let mut items = Vec::with_capacity(raw_items.len());
        let mut skipped = 0usize;

        for (position, lines) in raw_items.iter().enumerate() {
            match self.parse_item(lines, kind, system) {
                Ok(Some(item)) => {
                    tracing::debug!("{} {} #{}: {:?}", system, kind, position + 1, item.title);
                    items.push(item);
                }
                Ok(None) => {
                    tracing::debug!("{} {} #{}: blank title, dropped", system, kind, position + 1);
                }
                Err(e) => {
                    skipped += 1;
                    tracing::warn!(
                        "Skipping {} {} #{} ({} lines): {}",
                        system,
                        kind,
                        position + 1,
                        lines.len(),
                        e
                    );
                }
            }
        }

        tracing::info!(
            "Parsed {} {} records from {} scraped items ({} skipped)",
            items.len(),
            kind,
            raw_items.len(),
            skipped
        );
        items
    }

    /// Parse one scraped item.
    ///
    /// `Ok(None)` means the item had a blank title and was filtered out.
    pub fn parse_item<S: AsRef<str>>(
        &self,
        raw_lines: &[S],
        kind: RecordKind,
        system: LibrarySystem,
    ) -> ParseResult<Option<LibraryItem>> {
        let lines = ItemLines::new(raw_lines);

        let fields = match system.engine() {
            RuleEngine::Durham => {
                let durham = &self.rules.durham;
                let listing = lines.get(durham.layout.listing_line, ItemField::Format)?;
                let (_, raw_format) = split_listing(listing)?;
                let format = coarse_format(raw_format)?;
                let shifted = has_subtitle(&lines, system, kind, format, &durham.layout)?;
                let map = self
                    .rules
                    .resolve_indices(system, Some(format), kind, shifted)?;
                durham_fields(&lines, &map, format, kind)?
            }
            RuleEngine::Toronto => {
                let map = self.rules.resolve_indices(system, None, kind, false)?;
                toronto_fields(&lines, &map, kind, self.rules.toronto.renew_offset)?
            }
        };

        Ok(self.normalizer.normalize(fields, kind, system))
    }
}
