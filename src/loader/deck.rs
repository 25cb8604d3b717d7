//! Tab-delimited deck list parser (.txt format)

use super::{normalize_apostrophes, DeckFileFormat};
use crate::{DeckError, Result};
use std::fs;
use std::path::Path;

/// Deck zone a raw entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Main,
    Reserve,
}

/// One line of a deck list before catalog resolution.
#[derive(Debug, Clone)]
pub struct RawEntry {
    pub quantity: u32,
    /// Card name as written in the source, apostrophe-normalized.
    pub name: String,
    pub zone: Zone,
}

/// Deck list loader for the tab-delimited format
pub struct DeckLoader;

impl DeckLoader {
    /// Load a deck list from a file, choosing the parser by extension.
    pub fn load_from_file(path: &Path) -> Result<Vec<RawEntry>> {
        let content = fs::read_to_string(path).map_err(DeckError::IoError)?;
        super::parse_deck(&content, DeckFileFormat::from_path(path))
    }

    /// Parse tab-delimited deck list content.
    ///
    /// A `Reserve:` line switches subsequent entries into the reserve
    /// zone; a `Tokens:` line terminates parsing. Lines that do not split
    /// into a positive integer quantity and a name are skipped silently.
    pub fn parse(content: &str) -> Result<Vec<RawEntry>> {
        let mut entries = Vec::new();
        let mut in_reserve = false;

        for line in content.lines() {
            let line = line.trim();

            if line.starts_with("Tokens:") {
                break;
            }
            if line.starts_with("Reserve:") {
                in_reserve = true;
                continue;
            }

            let Some((count, name)) = line.split_once('\t') else {
                continue;
            };
            let Ok(quantity) = count.trim().parse::<u32>() else {
                continue;
            };
            if quantity == 0 {
                continue;
            }

            entries.push(RawEntry {
                quantity,
                name: normalize_apostrophes(name.trim()),
                zone: if in_reserve { Zone::Reserve } else { Zone::Main },
            });
        }

        if !entries.iter().any(|e| e.zone == Zone::Main) {
            return Err(DeckError::EmptyMainDeck);
        }

        Ok(entries)
    }
}
