//! Shared domain enums

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// LibrarySystem
// ---------------------------------------------------------------------------

/// Library portal an item was scraped from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LibrarySystem {
    /// Pickering Public Library
    #[serde(rename = "DURHAM_PPL")]
    DurhamPpl,
    /// Whitby Public Library
    #[serde(rename = "DURHAM_WPL")]
    DurhamWpl,
    /// Toronto Public Library
    #[serde(rename = "TORONTO")]
    Toronto,
}

impl LibrarySystem {
    /// Rule engine shared by every portal with the same page layout
    pub fn engine(self) -> RuleEngine {
        match self {
            LibrarySystem::DurhamPpl | LibrarySystem::DurhamWpl => RuleEngine::Durham,
            LibrarySystem::Toronto => RuleEngine::Toronto,
        }
    }

    /// Full library name used in report headers
    pub fn display_name(self) -> &'static str {
        match self {
            LibrarySystem::DurhamPpl => "Pickering Public Library",
            LibrarySystem::DurhamWpl => "Whitby Public Library",
            LibrarySystem::Toronto => "Toronto Public Library",
        }
    }
}

impl std::fmt::Display for LibrarySystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LibrarySystem::DurhamPpl => "DURHAM_PPL",
            LibrarySystem::DurhamWpl => "DURHAM_WPL",
            LibrarySystem::Toronto => "TORONTO",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// RuleEngine
// ---------------------------------------------------------------------------

/// Layout family. Pickering and Whitby both run BiblioCommons pages and share
/// the free-text Durham rules; Toronto renders fixed-offset tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleEngine {
    Durham,
    Toronto,
}

// ---------------------------------------------------------------------------
// RecordKind
// ---------------------------------------------------------------------------

/// Hold (awaiting pickup) or checkout (currently borrowed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordKind {
    Hold,
    Checkout,
}

impl RecordKind {
    pub fn is_hold(self) -> bool {
        matches!(self, RecordKind::Hold)
    }
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            RecordKind::Hold => "hold",
            RecordKind::Checkout => "checkout",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// CoarseFormat
// ---------------------------------------------------------------------------

/// Generic format category used only to select parsing rules.
///
/// The literal format string ("Music CD", "Book Set", ...) is what ends up on
/// the record; this only decides which line offsets apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoarseFormat {
    #[serde(rename = "DVD")]
    Dvd,
    #[serde(rename = "CD")]
    Cd,
    #[serde(rename = "Book")]
    Book,
}

impl CoarseFormat {
    /// Classify a raw format string by substring containment.
    ///
    /// Checked in the order DVD, CD, Book; the first match wins.
    pub fn classify(raw: &str) -> Option<Self> {
        if raw.contains("DVD") {
            Some(CoarseFormat::Dvd)
        } else if raw.contains("CD") {
            Some(CoarseFormat::Cd)
        } else if raw.contains("Book") {
            Some(CoarseFormat::Book)
        } else {
            None
        }
    }
}

impl std::fmt::Display for CoarseFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            CoarseFormat::Dvd => "DVD",
            CoarseFormat::Cd => "CD",
            CoarseFormat::Book => "Book",
        };
        write!(f, "{}", label)
    }
}

// ---------------------------------------------------------------------------
// ItemField
// ---------------------------------------------------------------------------

/// Logical field of a scraped item, named in parse errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemField {
    Title,
    Format,
    Contributors,
    Status,
    ItemDate,
    Branch,
    /// The line inspected to decide whether a subtitle shifted the layout
    SubtitleMarker,
}

impl std::fmt::Display for ItemField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ItemField::Title => "title",
            ItemField::Format => "format",
            ItemField::Contributors => "contributors",
            ItemField::Status => "status",
            ItemField::ItemDate => "item date",
            ItemField::Branch => "branch",
            ItemField::SubtitleMarker => "subtitle marker",
        };
        write!(f, "{}", label)
    }
}
