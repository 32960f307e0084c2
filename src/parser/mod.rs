//! Scraped text layout parsing
//!
//! Turns the line-split text of one rendered hold/checkout entry into a
//! `LibraryItem`:
//!
//! ```text
//! raw lines → classify (coarse format, subtitle shift)
//!           → rules (field → line index)
//!           → extract (pull + clean each field)
//!           → normalize (contributor policy, empty-title filter)
//! ```
//!
//! `batch::LibraryParser` runs that pipeline over a whole listing.

pub mod batch;
pub mod classify;
pub mod extract;
pub mod normalize;
pub mod rules;

pub use batch::LibraryParser;
pub use extract::ItemLines;
pub use normalize::ItemNormalizer;
pub use rules::{FieldIndexMap, LineIndex, ParseRule, RuleTables};

/// Split one item's visible text into lines, keeping blank lines and order.
///
/// Matches what the page-scraping side hands over: text joined with `'\n'`
/// between DOM text nodes.
pub fn split_item_text(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}
