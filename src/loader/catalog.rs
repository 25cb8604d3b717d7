//! Card catalog loaded from the external tab-separated card database
//!
//! The catalog is read-only after load and may be shared across any number
//! of concurrent resolutions without locking.

use super::normalize_apostrophes;
use crate::card::{Alignment, CardRecord, CardType};
use crate::{DeckError, Result};
use rustc_hash::FxHashMap;
use std::path::Path;

/// Catalog of card records keyed by apostrophe-normalized name.
pub struct CardCatalog {
    cards: FxHashMap<String, CardRecord>,
}

impl CardCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        CardCatalog {
            cards: FxHashMap::default(),
        }
    }

    /// Load the catalog from a tab-separated card database file.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            DeckError::CatalogLoad(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::parse(&content)
    }

    /// Parse tab-separated card data with a header row.
    ///
    /// Header names are matched case-insensitively. Only the `name` column
    /// is mandatory; the other columns default to empty when absent.
    pub fn parse(content: &str) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .flexible(true)
            .from_reader(content.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| DeckError::CatalogLoad(e.to_string()))?
            .iter()
            .map(|h| h.to_lowercase())
            .collect();
        let column = |key: &str| headers.iter().position(|h| h == key);

        let name_idx = column("name")
            .ok_or_else(|| DeckError::CatalogLoad("missing 'name' column".to_string()))?;
        let type_idx = column("type");
        let alignment_idx = column("alignment");
        let brigade_idx = column("brigade");
        let reference_idx = column("reference");
        let image_idx = column("imagefile");

        let mut catalog = CardCatalog::new();
        for record in reader.records() {
            let record = record.map_err(|e| DeckError::CatalogLoad(e.to_string()))?;
            let field = |idx: Option<usize>| {
                idx.and_then(|i| record.get(i)).unwrap_or("").to_string()
            };

            let raw_name = record.get(name_idx).unwrap_or("");
            if raw_name.is_empty() {
                continue;
            }

            catalog.add_card(CardRecord {
                name: normalize_apostrophes(raw_name),
                card_type: CardType::parse(&field(type_idx)),
                alignment: Alignment::parse(&field(alignment_idx)),
                brigade: field(brigade_idx),
                reference: field(reference_idx),
                image_file: field(image_idx),
            });
        }

        Ok(catalog)
    }

    /// Add a single record, keyed by its apostrophe-normalized name.
    pub fn add_card(&mut self, record: CardRecord) {
        let key = normalize_apostrophes(&record.name);
        self.cards.insert(key, record);
    }

    /// Look up a card by exact name after apostrophe normalization.
    /// Case-sensitive, whitespace-exact; no fuzzy matching.
    pub fn lookup(&self, name: &str) -> Option<&CardRecord> {
        self.cards.get(&normalize_apostrophes(name))
    }

    /// Total number of records in the catalog
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

impl Default for CardCatalog {
    fn default() -> Self {
        Self::new()
    }
}
