//! Per-card brigade exception tables
//!
//! Each entry reproduces a printed-card irregularity whose brigade text
//! does not follow the generic grammar. The entries are literal data; do
//! not try to derive them from alignment or card type.

use super::{EVIL_BRIGADES, GOOD_BRIGADES};
use crate::card::Alignment;

fn good_names() -> impl Iterator<Item = &'static str> {
    GOOD_BRIGADES.iter().map(|b| b.as_str())
}

fn evil_names() -> impl Iterator<Item = &'static str> {
    EVIL_BRIGADES.iter().map(|b| b.as_str())
}

/// Cards whose brigade list is fixed by name, bypassing the generic parse.
pub(super) fn complex_brigades(card_name: &str) -> Option<Vec<&'static str>> {
    let tokens = match card_name {
        "Delivered" => vec!["Green", "Teal", "Evil Gold", "Pale Green"],
        "Eternal Judgment" => vec!["Green", "White", "Brown", "Crimson"],
        "Scapegoat (PoC)" => vec!["Teal", "Green", "Crimson"],
        "Zion" => vec!["Purple"],
        "Ashkelon" => vec!["Good Gold"],
        "Raamses" => vec!["White"],
        "Babel (FoM)" => vec!["Blue"],
        "Sodom & Gomorrah" => vec!["Silver"],
        "City of Enoch" => vec!["Blue"],
        "Hebron" => vec!["Red"],
        "Damascus (LoC)" => vec!["Red"],
        "Damascus (Promo)" => vec!["Red"],
        "Bethlehem (Promo)" => vec!["White"],
        "Samaria" => vec!["Green"],
        "Nineveh" => vec!["Green"],
        "City of Refuge" => vec!["Teal"],
        "Jerusalem (GoC)" => vec!["Purple", "Good Gold", "White"],
        "Sychar (GoC)" => vec!["Good Gold", "Purple"],
        "Fire Foxes" => vec!["Good Gold", "Crimson", "Black"],
        "Bethlehem (LoC)" => vec!["Good Gold", "White"],
        "New Jerusalem (Bride of Christ) (RoJ AB)" => good_names().collect(),
        "Doubt (LoC Plus)" => vec![],
        "Doubt (LoC)" => vec![],
        "Angel of God [2023 - National]" => vec![],
        "City of Refuge (PoC)" => vec!["Teal"],
        "Fullness of Time" => vec![],
        "Melchizedek (CoW AB)" => vec!["Purple", "Teal"],
        "Philistine Outpost" => vec![],
        "Philosophy" | "Unified Language" => good_names().chain(evil_names()).collect(),
        "Saul/Paul" => std::iter::once("Gray").chain(good_names()).collect(),
        "Coat of Many Colors (FoM)" => std::iter::once("Brown").chain(good_names()).collect(),
        _ => return None,
    };
    Some(tokens)
}

/// Replacement for the "Multi" wildcard. The card-name lookup shares its
/// keys with the alignment fallback and takes precedence over it.
pub(super) fn multi_replacement(card_name: &str, alignment: Alignment) -> &'static str {
    match card_name {
        "Good" | "Neutral" => "Good Multi",
        "Evil" => "Evil Multi",
        _ => match alignment {
            Alignment::Evil => "Evil Multi",
            Alignment::Good | Alignment::Neutral | Alignment::None => "Good Multi",
        },
    }
}

/// Neutral-aligned cards whose "Gold" resolves to Good Gold even when it
/// is not the leading token.
const GOLD_NEUTRAL_EXCEPTIONS: [&str; 2] = [
    "First Bowl of Wrath (RoJ)",
    "Banks of the Nile/Pharaoh's Court",
];

/// Replacement for the "Gold" wildcard.
pub(super) fn gold_replacement(
    card_name: &str,
    alignment: Alignment,
    tokens: &[&str],
) -> &'static str {
    match alignment {
        Alignment::Good => "Good Gold",
        Alignment::Evil => "Evil Gold",
        Alignment::Neutral => {
            if tokens.first() == Some(&"Gold") || GOLD_NEUTRAL_EXCEPTIONS.contains(&card_name) {
                "Good Gold"
            } else {
                "Evil Gold"
            }
        }
        Alignment::None => "Good Gold",
    }
}
