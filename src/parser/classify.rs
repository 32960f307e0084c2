//! Line classification
//!
//! Decides which layout variant a scraped item uses before any field is read:
//! the item's coarse format, and whether an extra subtitle line pushed the
//! later fields down.

use super::extract::ItemLines;
use super::rules::DurhamLayout;
use crate::error::{ParseError, ParseResult};
use crate::models::enums::{CoarseFormat, ItemField, LibrarySystem, RecordKind, RuleEngine};

/// Coarse format of a raw format string, or `UnsupportedFormat`
pub fn coarse_format(raw: &str) -> ParseResult<CoarseFormat> {
    CoarseFormat::classify(raw).ok_or_else(|| ParseError::UnsupportedFormat(raw.to_string()))
}

/// Whether the item's lines carry a subtitle that shifts later offsets.
///
/// Toronto rows are table cells at fixed offsets and never shift.
pub fn has_subtitle<S: AsRef<str>>(
    lines: &ItemLines<'_, S>,
    system: LibrarySystem,
    kind: RecordKind,
    format: CoarseFormat,
    layout: &DurhamLayout,
) -> ParseResult<bool> {
    match (system.engine(), kind) {
        (RuleEngine::Toronto, _) => Ok(false),
        (RuleEngine::Durham, RecordKind::Hold) => durham_hold_has_subtitle(lines, format, layout),
        (RuleEngine::Durham, RecordKind::Checkout) => {
            durham_checkout_has_subtitle(lines, format, layout)
        }
    }
}

/// Durham hold pages put the by-line (or, for DVDs, a format restatement) at
/// the reference line. Anything else there means a subtitle line was
/// inserted ahead of it.
pub fn durham_hold_has_subtitle<S: AsRef<str>>(
    lines: &ItemLines<'_, S>,
    format: CoarseFormat,
    layout: &DurhamLayout,
) -> ParseResult<bool> {
    let reference = lines.get(layout.reference_line, ItemField::SubtitleMarker)?;
    let has_by_line = reference.starts_with(layout.contributor_marker.as_str());

    Ok(match format {
        CoarseFormat::Dvd => {
            !has_by_line && !reference.starts_with(layout.dvd_restatement.as_str())
        }
        CoarseFormat::Cd | CoarseFormat::Book => !has_by_line,
    })
}

/// Durham checkout pages have no reliable content marker, so subtitle
/// presence is guessed from the number of lines.
pub fn durham_checkout_has_subtitle<S: AsRef<str>>(
    lines: &ItemLines<'_, S>,
    format: CoarseFormat,
    layout: &DurhamLayout,
) -> ParseResult<bool> {
    let thresholds = &layout.checkout_thresholds;
    let limit = match format {
        CoarseFormat::Cd => {
            let marker = lines.get(layout.checkout_marker_line, ItemField::SubtitleMarker)?;
            if marker.starts_with(layout.contributor_marker.as_str()) {
                thresholds.cd_with_marker
            } else {
                thresholds.cd_without_marker
            }
        }
        CoarseFormat::Book => thresholds.book,
        CoarseFormat::Dvd => thresholds.dvd,
    };

    Ok(lines.len() > limit)
}
