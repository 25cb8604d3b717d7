//! Deck resolution: joining raw deck entries against the card catalog
//!
//! Resolution is best-effort by design: a single unknown or misspelled
//! card name is recorded as a diagnostic and dropped, never aborting the
//! rest of the deck. A brigade normalization failure, by contrast, means
//! the catalog itself is inconsistent and rejects the whole deck.

use crate::brigade::{normalize_brigades, BrigadeList};
use crate::card::{Alignment, CardType};
use crate::loader::{CardCatalog, RawEntry, Zone};
use crate::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// A resolved deck entry: one unique card with its aggregated quantity and
/// the full catalog metadata attached. Created once per unique name;
/// mutated only by quantity accumulation during resolution.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedCardEntry {
    pub name: String,
    pub quantity: u32,
    #[serde(rename = "type")]
    pub card_type: CardType,
    pub alignment: Alignment,
    /// Normalized brigade list, sorted.
    #[serde(rename = "brigade")]
    pub brigades: BrigadeList,
    /// Brigade text as printed, kept for brigade-keyed sorting.
    pub raw_brigade: String,
    pub reference: String,
    #[serde(rename = "imagefile")]
    pub image_file: String,
}

/// A fully resolved deck: canonical name to entry, per zone.
///
/// `BTreeMap` keeps iteration deterministic, which downstream sorting and
/// the statistics pools rely on for reproducibility. Sizes are always
/// recomputed from the maps so they cannot drift.
#[derive(Debug, Clone, Default)]
pub struct ResolvedDeck {
    pub main: BTreeMap<String, ResolvedCardEntry>,
    pub reserve: BTreeMap<String, ResolvedCardEntry>,
    /// Names that did not resolve against the catalog, in input order.
    pub skipped: Vec<String>,
}

impl ResolvedDeck {
    /// Total number of physical cards in the main deck.
    pub fn main_size(&self) -> u32 {
        self.main.values().map(|e| e.quantity).sum()
    }

    /// Total number of physical cards in the reserve.
    pub fn reserve_size(&self) -> u32 {
        self.reserve.values().map(|e| e.quantity).sum()
    }

    /// Build the serializable report consumed by external renderers.
    pub fn report(&self, m_count: Option<f64>, aod_count: Option<f64>) -> DeckReport<'_> {
        DeckReport {
            main_deck: &self.main,
            deck_size: self.main_size(),
            reserve: &self.reserve,
            reserve_size: self.reserve_size(),
            m_count,
            aod_count,
        }
    }
}

/// Output contract for renderers: the two zone mappings, their derived
/// sizes, and the optional draw statistics.
#[derive(Debug, Serialize)]
pub struct DeckReport<'a> {
    pub main_deck: &'a BTreeMap<String, ResolvedCardEntry>,
    pub deck_size: u32,
    pub reserve: &'a BTreeMap<String, ResolvedCardEntry>,
    pub reserve_size: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub m_count: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aod_count: Option<f64>,
}

/// Resolves raw deck entries against a shared read-only catalog.
pub struct DeckResolver<'a> {
    catalog: &'a CardCatalog,
}

impl<'a> DeckResolver<'a> {
    pub fn new(catalog: &'a CardCatalog) -> Self {
        DeckResolver { catalog }
    }

    /// Resolve raw entries into a deck model.
    ///
    /// Duplicate names accumulate quantity into one entry; the brigade
    /// list is computed once when the entry is created, never on
    /// accumulation.
    pub fn resolve(&self, entries: &[RawEntry]) -> Result<ResolvedDeck> {
        let mut deck = ResolvedDeck::default();

        for entry in entries {
            let clean = clean_name(&entry.name);
            let Some(record) = self.catalog.lookup(&clean) else {
                deck.skipped.push(entry.name.clone());
                continue;
            };

            let zone = match entry.zone {
                Zone::Main => &mut deck.main,
                Zone::Reserve => &mut deck.reserve,
            };

            if let Some(existing) = zone.get_mut(&clean) {
                existing.quantity += entry.quantity;
                continue;
            }

            // The normalizer sees the name as written in the deck list;
            // the exception tables are keyed on printed names.
            let brigades = normalize_brigades(&record.brigade, record.alignment, &entry.name)?;
            zone.insert(
                clean,
                ResolvedCardEntry {
                    name: record.name.clone(),
                    quantity: entry.quantity,
                    card_type: record.card_type.clone(),
                    alignment: record.alignment,
                    brigades,
                    raw_brigade: record.brigade.clone(),
                    reference: record.reference.clone(),
                    image_file: record.image_file.clone(),
                },
            );
        }

        Ok(deck)
    }
}

/// Strip doubled-quote artifacts and stray surrounding quotes left over
/// from spreadsheet exports.
fn clean_name(name: &str) -> String {
    name.replace("\"\"", "\"").trim_matches('"').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::CardRecord;

    fn test_catalog() -> CardCatalog {
        let mut catalog = CardCatalog::new();
        catalog.add_card(CardRecord {
            name: "Son of God".to_string(),
            card_type: CardType::Dominant,
            alignment: Alignment::Good,
            brigade: String::new(),
            reference: "Philippians 2:9-11".to_string(),
            image_file: "sonofgod.jpg".to_string(),
        });
        catalog.add_card(CardRecord {
            name: "Moses".to_string(),
            card_type: CardType::Hero,
            alignment: Alignment::Good,
            brigade: "Blue/Silver".to_string(),
            reference: "Exodus 3:10".to_string(),
            image_file: "moses.jpg".to_string(),
        });
        catalog
    }

    fn raw(quantity: u32, name: &str, zone: Zone) -> RawEntry {
        RawEntry {
            quantity,
            name: name.to_string(),
            zone,
        }
    }

    #[test]
    fn test_resolve_attaches_metadata() {
        let catalog = test_catalog();
        let deck = DeckResolver::new(&catalog)
            .resolve(&[raw(2, "Moses", Zone::Main)])
            .unwrap();

        let entry = deck.main.get("Moses").unwrap();
        assert_eq!(entry.quantity, 2);
        assert_eq!(entry.card_type, CardType::Hero);
        assert_eq!(entry.raw_brigade, "Blue/Silver");
        let brigades: Vec<_> = entry.brigades.iter().map(|b| b.as_str()).collect();
        assert_eq!(brigades, vec!["Blue", "Silver"]);
        assert_eq!(deck.main_size(), 2);
    }

    #[test]
    fn test_duplicates_aggregate() {
        let catalog = test_catalog();
        let deck = DeckResolver::new(&catalog)
            .resolve(&[
                raw(1, "Son of God", Zone::Main),
                raw(1, "Moses", Zone::Main),
                raw(2, "Son of God", Zone::Main),
            ])
            .unwrap();

        assert_eq!(deck.main.len(), 2);
        assert_eq!(deck.main.get("Son of God").unwrap().quantity, 3);
        assert_eq!(deck.main_size(), 4);
    }

    #[test]
    fn test_unknown_names_skipped_without_error() {
        let catalog = test_catalog();
        let deck = DeckResolver::new(&catalog)
            .resolve(&[
                raw(1, "Moses", Zone::Main),
                raw(4, "Not A Card", Zone::Main),
            ])
            .unwrap();

        assert_eq!(deck.main.len(), 1);
        assert_eq!(deck.main_size(), 1);
        assert_eq!(deck.skipped, vec!["Not A Card".to_string()]);
    }

    #[test]
    fn test_zones_stay_separate() {
        let catalog = test_catalog();
        let deck = DeckResolver::new(&catalog)
            .resolve(&[
                raw(1, "Moses", Zone::Main),
                raw(1, "Son of God", Zone::Reserve),
            ])
            .unwrap();

        assert!(deck.main.contains_key("Moses"));
        assert!(!deck.main.contains_key("Son of God"));
        assert!(deck.reserve.contains_key("Son of God"));
        assert_eq!(deck.reserve_size(), 1);
    }

    #[test]
    fn test_quote_artifacts_cleaned() {
        let catalog = test_catalog();
        let deck = DeckResolver::new(&catalog)
            .resolve(&[raw(1, "\"Moses\"", Zone::Main)])
            .unwrap();
        assert!(deck.main.contains_key("Moses"));
    }
}
