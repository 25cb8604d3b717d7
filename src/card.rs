//! Card record types shared by the catalog and the resolver
//!
//! A `CardRecord` is one row of the external card database. Records are
//! immutable after load; consumers get read-only references and copy the
//! fields they keep.

use serde::{Serialize, Serializer};
use std::fmt;

/// Card type as printed in the card database.
///
/// The database uses short forms for the enhancement types ("GE", "EE").
/// Types outside the known set are preserved verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardType {
    Dominant,
    Hero,
    GoodEnhancement,
    LostSoul,
    EvilCharacter,
    EvilEnhancement,
    Artifact,
    Fortress,
    Site,
    Curse,
    Covenant,
    City,
    Other(String),
}

impl CardType {
    pub fn parse(s: &str) -> Self {
        match s {
            "Dominant" => CardType::Dominant,
            "Hero" => CardType::Hero,
            "GE" => CardType::GoodEnhancement,
            "Lost Soul" => CardType::LostSoul,
            "Evil Character" => CardType::EvilCharacter,
            "EE" => CardType::EvilEnhancement,
            "Artifact" => CardType::Artifact,
            "Fortress" => CardType::Fortress,
            "Site" => CardType::Site,
            "Curse" => CardType::Curse,
            "Covenant" => CardType::Covenant,
            "City" => CardType::City,
            other => CardType::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CardType::Dominant => "Dominant",
            CardType::Hero => "Hero",
            CardType::GoodEnhancement => "GE",
            CardType::LostSoul => "Lost Soul",
            CardType::EvilCharacter => "Evil Character",
            CardType::EvilEnhancement => "EE",
            CardType::Artifact => "Artifact",
            CardType::Fortress => "Fortress",
            CardType::Site => "Site",
            CardType::Curse => "Curse",
            CardType::Covenant => "Covenant",
            CardType::City => "City",
            CardType::Other(s) => s,
        }
    }
}

impl fmt::Display for CardType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for CardType {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Card alignment; `None` covers records with an empty alignment field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alignment {
    Good,
    Evil,
    Neutral,
    None,
}

impl Alignment {
    pub fn parse(s: &str) -> Self {
        match s {
            "Good" => Alignment::Good,
            "Evil" => Alignment::Evil,
            "Neutral" => Alignment::Neutral,
            _ => Alignment::None,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Alignment::Good => "Good",
            Alignment::Evil => "Evil",
            Alignment::Neutral => "Neutral",
            Alignment::None => "",
        }
    }

    /// Sorting priority used by the sort engine: Good before Evil before
    /// Neutral, everything else last.
    pub fn sort_priority(&self) -> u8 {
        match self {
            Alignment::Good => 0,
            Alignment::Evil => 1,
            Alignment::Neutral => 2,
            Alignment::None => 3,
        }
    }
}

impl fmt::Display for Alignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Serialize for Alignment {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// One record of the external card database.
#[derive(Debug, Clone)]
pub struct CardRecord {
    /// Canonical card name (unique key, apostrophe-normalized).
    pub name: String,
    pub card_type: CardType,
    pub alignment: Alignment,
    /// Brigade text as printed on the card, before normalization.
    pub brigade: String,
    /// Scripture reference text.
    pub reference: String,
    /// Image asset identifier.
    pub image_file: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_type_round_trip() {
        assert_eq!(CardType::parse("GE"), CardType::GoodEnhancement);
        assert_eq!(CardType::parse("Lost Soul"), CardType::LostSoul);
        assert_eq!(CardType::parse("Lost Soul").as_str(), "Lost Soul");
        assert_eq!(
            CardType::parse("Territory"),
            CardType::Other("Territory".to_string())
        );
        assert_eq!(CardType::parse("Territory").as_str(), "Territory");
    }

    #[test]
    fn test_alignment_priority() {
        assert_eq!(Alignment::parse("Good").sort_priority(), 0);
        assert_eq!(Alignment::parse("Evil").sort_priority(), 1);
        assert_eq!(Alignment::parse("Neutral").sort_priority(), 2);
        assert_eq!(Alignment::parse("").sort_priority(), 3);
        assert_eq!(Alignment::parse("weird").sort_priority(), 3);
    }
}
