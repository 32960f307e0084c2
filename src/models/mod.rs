//! Data models for Libscrape

pub mod capture;
pub mod enums;
pub mod item;

// Re-export commonly used types
pub use capture::Capture;
pub use enums::{CoarseFormat, ItemField, LibrarySystem, RecordKind, RuleEngine};
pub use item::{ItemStatus, LibraryItem};
