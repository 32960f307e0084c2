//! Format-rule tables
//!
//! Every line offset the parser relies on lives here as data. A portal layout
//! change should only ever need an edit to these tables (or to the matching
//! section of `config/default.toml`), never to the extractors.

use serde::{Deserialize, Serialize};

use crate::error::{ParseError, ParseResult};
use crate::models::enums::{CoarseFormat, LibrarySystem, RecordKind, RuleEngine};

/// Position of one logical field within a scraped item's lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LineIndex {
    /// Same line whatever the layout
    Fixed(usize),
    /// Line depends on whether a subtitle line was detected
    Shifted {
        with_subtitle: usize,
        without_subtitle: usize,
    },
}

impl LineIndex {
    pub const fn shifted(with_subtitle: usize, without_subtitle: usize) -> Self {
        LineIndex::Shifted {
            with_subtitle,
            without_subtitle,
        }
    }

    pub fn resolve(self, has_subtitle: bool) -> usize {
        match self {
            LineIndex::Fixed(index) => index,
            LineIndex::Shifted {
                with_subtitle,
                without_subtitle,
            } => {
                if has_subtitle {
                    with_subtitle
                } else {
                    without_subtitle
                }
            }
        }
    }
}

/// Index map for one (system, coarse format, record kind) combination.
///
/// Fields a layout does not carry are `None`: Durham DVDs have no by-line,
/// checkouts have no branch, Toronto holds have no status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseRule {
    pub title: LineIndex,
    pub format: LineIndex,
    #[serde(default)]
    pub contributors: Option<LineIndex>,
    #[serde(default)]
    pub status: Option<LineIndex>,
    pub item_date: LineIndex,
    #[serde(default)]
    pub branch: Option<LineIndex>,
}

impl ParseRule {
    /// Fix every field to a concrete line for the detected layout
    pub fn resolve(&self, has_subtitle: bool) -> FieldIndexMap {
        FieldIndexMap {
            title: self.title.resolve(has_subtitle),
            format: self.format.resolve(has_subtitle),
            contributors: self.contributors.map(|i| i.resolve(has_subtitle)),
            status: self.status.map(|i| i.resolve(has_subtitle)),
            item_date: self.item_date.resolve(has_subtitle),
            branch: self.branch.map(|i| i.resolve(has_subtitle)),
        }
    }
}

/// Concrete line index per logical field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldIndexMap {
    pub title: usize,
    pub format: usize,
    pub contributors: Option<usize>,
    pub status: Option<usize>,
    pub item_date: usize,
    pub branch: Option<usize>,
}

/// Line-count thresholds for Durham checkout subtitle detection.
///
/// Checkout pages give no content marker for a subtitle, so its presence is
/// inferred from the item having more lines than these limits. Tuned against
/// captured pages; expect to retune when BiblioCommons changes its markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckoutThresholds {
    /// CD whose marker line starts with the contributor marker
    pub cd_with_marker: usize,
    pub cd_without_marker: usize,
    pub book: usize,
    pub dvd: usize,
}

impl Default for CheckoutThresholds {
    fn default() -> Self {
        Self {
            cd_with_marker: 15,
            cd_without_marker: 14,
            book: 15,
            dvd: 14,
        }
    }
}

/// Fixed reference points of the Durham (BiblioCommons) layout
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurhamLayout {
    /// Line holding `"<Title>, <Format>"`
    pub listing_line: usize,
    /// Line expected to hold the contributor marker on hold pages
    pub reference_line: usize,
    /// Line checked for the contributor marker on CD checkouts
    pub checkout_marker_line: usize,
    pub contributor_marker: String,
    /// Format restatement DVD holds show where books show a by-line
    pub dvd_restatement: String,
    pub checkout_thresholds: CheckoutThresholds,
}

impl Default for DurhamLayout {
    fn default() -> Self {
        Self {
            listing_line: 2,
            reference_line: 4,
            checkout_marker_line: 3,
            contributor_marker: "by".to_string(),
            dvd_restatement: "DVD - ".to_string(),
            checkout_thresholds: CheckoutThresholds::default(),
        }
    }
}

/// Rules shared by Pickering and Whitby
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DurhamRules {
    pub layout: DurhamLayout,
    pub hold_dvd: ParseRule,
    pub hold_cd_and_book: ParseRule,
    pub checkout_dvd: ParseRule,
    pub checkout_cd_and_book: ParseRule,
}

impl DurhamRules {
    pub fn rule(&self, format: CoarseFormat, kind: RecordKind) -> &ParseRule {
        match (kind, format) {
            (RecordKind::Hold, CoarseFormat::Dvd) => &self.hold_dvd,
            (RecordKind::Hold, CoarseFormat::Cd | CoarseFormat::Book) => &self.hold_cd_and_book,
            (RecordKind::Checkout, CoarseFormat::Dvd) => &self.checkout_dvd,
            (RecordKind::Checkout, CoarseFormat::Cd | CoarseFormat::Book) => {
                &self.checkout_cd_and_book
            }
        }
    }
}

impl Default for DurhamRules {
    fn default() -> Self {
        let listing = LineIndex::Fixed(2);
        Self {
            layout: DurhamLayout::default(),
            hold_dvd: ParseRule {
                title: listing,
                format: listing,
                contributors: None,
                status: Some(LineIndex::shifted(8, 7)),
                item_date: LineIndex::shifted(10, 9),
                branch: Some(LineIndex::shifted(9, 8)),
            },
            hold_cd_and_book: ParseRule {
                title: listing,
                format: listing,
                contributors: Some(LineIndex::shifted(6, 5)),
                status: Some(LineIndex::shifted(14, 13)),
                item_date: LineIndex::shifted(20, 19),
                branch: Some(LineIndex::shifted(18, 17)),
            },
            checkout_dvd: ParseRule {
                title: listing,
                format: listing,
                contributors: None,
                status: Some(LineIndex::shifted(7, 6)),
                item_date: LineIndex::shifted(9, 7),
                branch: None,
            },
            checkout_cd_and_book: ParseRule {
                title: listing,
                format: listing,
                contributors: Some(LineIndex::shifted(4, 3)),
                status: Some(LineIndex::shifted(8, 7)),
                item_date: LineIndex::shifted(9, 8),
                branch: None,
            },
        }
    }
}

/// Toronto Public Library table layout; format-agnostic fixed offsets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TorontoRules {
    pub hold: ParseRule,
    pub checkout: ParseRule,
    /// How far the checkout date moves up when the row ends in a renew control
    pub renew_offset: usize,
}

impl TorontoRules {
    pub fn rule(&self, kind: RecordKind) -> &ParseRule {
        match kind {
            RecordKind::Hold => &self.hold,
            RecordKind::Checkout => &self.checkout,
        }
    }
}

impl Default for TorontoRules {
    fn default() -> Self {
        Self {
            hold: ParseRule {
                title: LineIndex::Fixed(2),
                format: LineIndex::Fixed(4),
                contributors: Some(LineIndex::Fixed(3)),
                status: None,
                item_date: LineIndex::Fixed(7),
                branch: Some(LineIndex::Fixed(5)),
            },
            checkout: ParseRule {
                title: LineIndex::Fixed(1),
                format: LineIndex::Fixed(5),
                contributors: Some(LineIndex::Fixed(4)),
                status: Some(LineIndex::Fixed(8)),
                item_date: LineIndex::Fixed(9),
                branch: None,
            },
            renew_offset: 2,
        }
    }
}

/// All rule tables, loaded once and shared read-only
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleTables {
    pub durham: DurhamRules,
    pub toronto: TorontoRules,
}

impl RuleTables {
    /// Rule for one item. Durham layouts need the item's coarse format;
    /// Toronto ignores it.
    pub fn rule(
        &self,
        system: LibrarySystem,
        format: Option<CoarseFormat>,
        kind: RecordKind,
    ) -> ParseResult<&ParseRule> {
        match system.engine() {
            RuleEngine::Durham => format
                .map(|f| self.durham.rule(f, kind))
                .ok_or(ParseError::NoRule { system, kind }),
            RuleEngine::Toronto => Ok(self.toronto.rule(kind)),
        }
    }

    /// Resolve every field to a concrete line index
    pub fn resolve_indices(
        &self,
        system: LibrarySystem,
        format: Option<CoarseFormat>,
        kind: RecordKind,
        has_subtitle: bool,
    ) -> ParseResult<FieldIndexMap> {
        Ok(self.rule(system, format, kind)?.resolve(has_subtitle))
    }
}
