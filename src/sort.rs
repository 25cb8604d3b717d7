//! Deterministic multi-key ordering for resolved deck entries
//!
//! Exists purely so downstream renderers get a reproducible iteration
//! order; it never mutates the deck. The sort is stable and the base
//! order is the zone map's name order, so equal keys fall back to
//! name-ascending.

use crate::resolver::ResolvedCardEntry;
use crate::{DeckError, Result};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::str::FromStr;

/// A sort key selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    /// Alignment priority: Good, Evil, Neutral, everything else.
    Alignment,
    /// Raw (pre-normalization) brigade text, lexicographic.
    Brigade,
    /// Card type, lexicographic.
    Type,
    /// Case-insensitive card name.
    Name,
}

impl FromStr for SortField {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "alignment" => Ok(SortField::Alignment),
            "brigade" => Ok(SortField::Brigade),
            "type" => Ok(SortField::Type),
            "name" => Ok(SortField::Name),
            other => Err(DeckError::UnknownSortField(other.to_string())),
        }
    }
}

/// Parse a comma separated field list, e.g. "alignment,brigade,name".
pub fn parse_sort_fields(spec: &str) -> Result<Vec<SortField>> {
    spec.split(',').map(|f| f.trim().parse()).collect()
}

/// Sort a zone's entries by the given keys, in key order.
pub fn sort_entries<'a>(
    cards: &'a BTreeMap<String, ResolvedCardEntry>,
    fields: &[SortField],
) -> Vec<(&'a str, &'a ResolvedCardEntry)> {
    let mut items: Vec<(&str, &ResolvedCardEntry)> =
        cards.iter().map(|(name, entry)| (name.as_str(), entry)).collect();

    items.sort_by(|a, b| {
        for field in fields {
            let ord = match field {
                SortField::Alignment => a
                    .1
                    .alignment
                    .sort_priority()
                    .cmp(&b.1.alignment.sort_priority()),
                SortField::Brigade => a.1.raw_brigade.cmp(&b.1.raw_brigade),
                SortField::Type => a.1.card_type.as_str().cmp(b.1.card_type.as_str()),
                SortField::Name => a.0.to_lowercase().cmp(&b.0.to_lowercase()),
            };
            if ord != Ordering::Equal {
                return ord;
            }
        }
        Ordering::Equal
    });

    items
}
