//! Brigade normalization
//!
//! Turns a card's printed brigade text plus its alignment and name into a
//! canonical, sorted list of brigade identifiers. The pipeline is a cascade
//! of special cases that mirror printed-card irregularities: a per-card
//! exception table, a generic text grammar, and two wildcard expansions
//! ("Multi" and "Gold"). Step order is load-bearing: Multi resolution runs
//! before Gold resolution, and the Good/Evil Multi sweep runs last because
//! the exception table can itself introduce those wildcard tokens.

mod tables;

use crate::card::Alignment;
use crate::{DeckError, Result};
use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use std::fmt;

/// A canonical brigade identifier.
///
/// Variants are declared in lexicographic order of their printed names;
/// the derived `Ord` relies on this to sort lists without string compares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Brigade {
    Black,
    Blue,
    Brown,
    Clay,
    Crimson,
    EvilGold,
    GoodGold,
    Gray,
    Green,
    Orange,
    PaleGreen,
    Purple,
    Red,
    Silver,
    Teal,
    White,
}

impl Brigade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Brigade::Black => "Black",
            Brigade::Blue => "Blue",
            Brigade::Brown => "Brown",
            Brigade::Clay => "Clay",
            Brigade::Crimson => "Crimson",
            Brigade::EvilGold => "Evil Gold",
            Brigade::GoodGold => "Good Gold",
            Brigade::Gray => "Gray",
            Brigade::Green => "Green",
            Brigade::Orange => "Orange",
            Brigade::PaleGreen => "Pale Green",
            Brigade::Purple => "Purple",
            Brigade::Red => "Red",
            Brigade::Silver => "Silver",
            Brigade::Teal => "Teal",
            Brigade::White => "White",
        }
    }

    /// Look up a brigade by its printed name.
    pub fn from_name(name: &str) -> Option<Brigade> {
        match name {
            "Black" => Some(Brigade::Black),
            "Blue" => Some(Brigade::Blue),
            "Brown" => Some(Brigade::Brown),
            "Clay" => Some(Brigade::Clay),
            "Crimson" => Some(Brigade::Crimson),
            "Evil Gold" => Some(Brigade::EvilGold),
            "Good Gold" => Some(Brigade::GoodGold),
            "Gray" => Some(Brigade::Gray),
            "Green" => Some(Brigade::Green),
            "Orange" => Some(Brigade::Orange),
            "Pale Green" => Some(Brigade::PaleGreen),
            "Purple" => Some(Brigade::Purple),
            "Red" => Some(Brigade::Red),
            "Silver" => Some(Brigade::Silver),
            "Teal" => Some(Brigade::Teal),
            "White" => Some(Brigade::White),
            _ => None,
        }
    }
}

impl fmt::Display for Brigade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Brigade {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// All Good-aligned brigades, in sorted order.
pub const GOOD_BRIGADES: [Brigade; 9] = [
    Brigade::Blue,
    Brigade::Clay,
    Brigade::GoodGold,
    Brigade::Green,
    Brigade::Purple,
    Brigade::Red,
    Brigade::Silver,
    Brigade::Teal,
    Brigade::White,
];

/// All Evil-aligned brigades, in sorted order.
pub const EVIL_BRIGADES: [Brigade; 7] = [
    Brigade::Black,
    Brigade::Brown,
    Brigade::Crimson,
    Brigade::EvilGold,
    Brigade::Gray,
    Brigade::Orange,
    Brigade::PaleGreen,
];

/// Normalized brigade list; most cards carry zero to four brigades.
pub type BrigadeList = SmallVec<[Brigade; 8]>;

/// Normalize a card's printed brigade text into a sorted list of brigade
/// identifiers.
///
/// Fails with [`DeckError::InvalidBrigade`] if any resulting token falls
/// outside the fixed Good/Evil vocabulary, which indicates inconsistent
/// catalog data rather than a bad deck list.
pub fn normalize_brigades(raw: &str, alignment: Alignment, card_name: &str) -> Result<BrigadeList> {
    if raw.is_empty() {
        return Ok(BrigadeList::new());
    }

    let mut tokens: Vec<&str> = match tables::complex_brigades(card_name) {
        Some(tokens) => tokens,
        None => split_simple(raw),
    };

    if tokens.contains(&"Multi") {
        let replacement = tables::multi_replacement(card_name, alignment);
        replace(&mut tokens, "Multi", replacement);
    }

    if tokens.contains(&"Gold") {
        let replacement = tables::gold_replacement(card_name, alignment, &tokens);
        replace(&mut tokens, "Gold", replacement);
    }

    expand_multi_wildcards(&mut tokens);

    let mut brigades = BrigadeList::new();
    for token in tokens {
        let brigade = Brigade::from_name(token).ok_or_else(|| DeckError::InvalidBrigade {
            card: card_name.to_string(),
            brigade: token.to_string(),
        })?;
        brigades.push(brigade);
    }
    brigades.sort_unstable();
    Ok(brigades)
}

/// Generic parse of brigade text, in priority order: an "and" conjunction,
/// a parenthesized sub-brigade clause, a plain slash list, a single token.
fn split_simple(raw: &str) -> Vec<&str> {
    if let Some(idx) = raw.find("and") {
        return raw[..idx].trim().split('/').collect();
    }
    if raw.contains('(') {
        if let Some((head, sub)) = raw.split_once(" (") {
            let mut tokens: Vec<&str> = head.trim().split('/').collect();
            tokens.extend(sub.trim_end_matches(')').split('/'));
            return tokens;
        }
    }
    raw.split('/').collect()
}

fn replace(tokens: &mut [&str], target: &str, replacement: &'static str) {
    for token in tokens.iter_mut() {
        if *token == target {
            *token = replacement;
        }
    }
}

/// Expand literal "Good Multi" / "Evil Multi" tokens into the full
/// corresponding vocabulary. Runs after the Multi and Gold steps because
/// the exception table can reintroduce these wildcards.
fn expand_multi_wildcards(tokens: &mut Vec<&str>) {
    if tokens.contains(&"Good Multi") {
        tokens.retain(|t| *t != "Good Multi");
        tokens.extend(GOOD_BRIGADES.iter().map(|b| b.as_str()));
    }
    if tokens.contains(&"Evil Multi") {
        tokens.retain(|t| *t != "Evil Multi");
        tokens.extend(EVIL_BRIGADES.iter().map(|b| b.as_str()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalize(raw: &str, alignment: Alignment, name: &str) -> Vec<&'static str> {
        normalize_brigades(raw, alignment, name)
            .unwrap()
            .iter()
            .map(|b| b.as_str())
            .collect()
    }

    #[test]
    fn test_empty_brigade() {
        assert!(normalize("", Alignment::Good, "X").is_empty());
    }

    #[test]
    fn test_single_brigade() {
        assert_eq!(normalize("Red", Alignment::Good, "X"), vec!["Red"]);
    }

    #[test]
    fn test_slash_split_sorted() {
        assert_eq!(normalize("Red/Blue", Alignment::Good, "X"), vec!["Blue", "Red"]);
    }

    #[test]
    fn test_and_conjunction_keeps_head_only() {
        assert_eq!(
            normalize("Green/White and Brown", Alignment::Good, "X"),
            vec!["Green", "White"]
        );
    }

    #[test]
    fn test_parenthesized_sub_brigades() {
        assert_eq!(
            normalize("Purple (Teal/White)", Alignment::Good, "X"),
            vec!["Purple", "Teal", "White"]
        );
    }

    #[test]
    fn test_multi_expands_by_alignment() {
        let good: Vec<_> = GOOD_BRIGADES.iter().map(|b| b.as_str()).collect();
        assert_eq!(normalize("Multi", Alignment::Good, "X"), good);
        assert_eq!(normalize("Multi", Alignment::Neutral, "X"), good);

        let evil: Vec<_> = EVIL_BRIGADES.iter().map(|b| b.as_str()).collect();
        assert_eq!(normalize("Multi", Alignment::Evil, "X"), evil);
    }

    #[test]
    fn test_gold_by_alignment() {
        assert_eq!(normalize("Gold", Alignment::Good, "X"), vec!["Good Gold"]);
        assert_eq!(normalize("Gold", Alignment::Evil, "X"), vec!["Evil Gold"]);
        // Neutral resolves to Good Gold when the first token is the Gold
        // wildcard itself.
        assert_eq!(normalize("Gold", Alignment::Neutral, "X"), vec!["Good Gold"]);
        assert_eq!(normalize("Gold", Alignment::None, "X"), vec!["Good Gold"]);
    }

    #[test]
    fn test_gold_neutral_non_leading_defaults_evil() {
        assert_eq!(
            normalize("Black/Gold", Alignment::Neutral, "X"),
            vec!["Black", "Evil Gold"]
        );
    }

    #[test]
    fn test_gold_neutral_exception_cards() {
        assert_eq!(
            normalize("Black/Gold", Alignment::Neutral, "First Bowl of Wrath (RoJ)"),
            vec!["Black", "Good Gold"]
        );
        assert_eq!(
            normalize(
                "Black/Gold",
                Alignment::Neutral,
                "Banks of the Nile/Pharaoh's Court"
            ),
            vec!["Black", "Good Gold"]
        );
    }

    #[test]
    fn test_exception_table_overrides_raw_text() {
        assert_eq!(
            normalize("whatever is printed", Alignment::Evil, "Delivered"),
            vec!["Evil Gold", "Green", "Pale Green", "Teal"]
        );
        assert_eq!(normalize("Gold", Alignment::None, "Ashkelon"), vec!["Good Gold"]);
        assert_eq!(
            normalize("Purple/Gold/White", Alignment::Good, "Jerusalem (GoC)"),
            vec!["Good Gold", "Purple", "White"]
        );
    }

    #[test]
    fn test_exception_table_empty_entries() {
        assert!(normalize("Blue", Alignment::Good, "Doubt (LoC)").is_empty());
        assert!(normalize("Blue", Alignment::Good, "Fullness of Time").is_empty());
    }

    #[test]
    fn test_exception_table_full_unions() {
        assert_eq!(normalize("x", Alignment::None, "Philosophy").len(), 16);
        assert_eq!(normalize("x", Alignment::None, "Unified Language").len(), 16);
        // Gray plus every Good brigade.
        let saul = normalize("x", Alignment::Good, "Saul/Paul");
        assert_eq!(saul.len(), 10);
        assert!(saul.contains(&"Gray"));
        assert!(saul.contains(&"Good Gold"));
    }

    #[test]
    fn test_invalid_brigade_rejected() {
        let err = normalize_brigades("Chartreuse", Alignment::Good, "X").unwrap_err();
        match err {
            DeckError::InvalidBrigade { card, brigade } => {
                assert_eq!(card, "X");
                assert_eq!(brigade, "Chartreuse");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_normalization_idempotent() {
        // Re-normalizing a normalized list (joined back with slashes)
        // yields the same list.
        let first = normalize("Teal/Green/Crimson", Alignment::Good, "X");
        let joined = first.join("/");
        assert_eq!(normalize(&joined, Alignment::Good, "X"), first);
    }

    #[test]
    fn test_brigade_ord_matches_name_order() {
        let mut by_variant = [Brigade::White, Brigade::EvilGold, Brigade::Gray, Brigade::Blue];
        by_variant.sort_unstable();
        let names: Vec<_> = by_variant.iter().map(|b| b.as_str()).collect();
        let mut sorted_names = names.clone();
        sorted_names.sort_unstable();
        assert_eq!(names, sorted_names);
    }
}
