//! Card catalog and deck list loaders
//!
//! Parsers for the tab-separated card database, the tab-delimited deck
//! list format (.txt) and the structured container format (.dek)

pub mod catalog;
pub mod deck;
pub mod dek;

pub use catalog::CardCatalog;
pub use deck::{DeckLoader, RawEntry, Zone};
pub use dek::DekLoader;

use crate::Result;
use std::path::Path;

/// The two supported deck list encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckFileFormat {
    /// Line-oriented `<quantity>\t<name>` with zone markers.
    TabDelimited,
    /// XML-like container of `superzone` groups (.dek).
    Structured,
}

impl DeckFileFormat {
    /// Choose a format from the file extension (.dek is structured,
    /// everything else is tab-delimited).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("dek") => DeckFileFormat::Structured,
            _ => DeckFileFormat::TabDelimited,
        }
    }

    /// Sniff a format from the content itself, for callers that receive
    /// raw deck data without a file name.
    pub fn detect(content: &str) -> Self {
        if content.trim_start().starts_with('<') {
            DeckFileFormat::Structured
        } else {
            DeckFileFormat::TabDelimited
        }
    }
}

/// Parse deck list content in the given format into raw entries.
pub fn parse_deck(content: &str, format: DeckFileFormat) -> Result<Vec<RawEntry>> {
    match format {
        DeckFileFormat::TabDelimited => DeckLoader::parse(content),
        DeckFileFormat::Structured => DekLoader::parse(content),
    }
}

/// Replace the typographic right single quote with a plain apostrophe.
///
/// Applied to every stored catalog key and every parsed card name so the
/// two sides agree on an exact-match lookup.
pub fn normalize_apostrophes(text: &str) -> String {
    text.replace('\u{2019}', "'")
}
