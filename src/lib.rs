//! Libscrape
//!
//! Checkout and hold extraction for public library patron portals: turns the
//! text scraped from Pickering, Whitby and Toronto account pages into uniform
//! `LibraryItem` records, and renders them as plain-text reports.

pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod report;

pub use config::AppConfig;
pub use error::{AppError, AppResult, ParseError, ParseResult};
pub use models::{Capture, ItemStatus, LibraryItem, LibrarySystem, RecordKind};
pub use parser::{split_item_text, LibraryParser, RuleTables};
