//! Deck construction-legality validation
//!
//! Strict mode enforces the tournament thresholds for the chosen format;
//! lenient mode is used for preview generation and only applies loose
//! fixed caps. Checks run in a fixed order and the first violation wins.

use crate::resolver::ResolvedDeck;
use crate::{DeckError, Result};
use std::fmt;
use std::str::FromStr;

/// Minimum main deck size in strict mode, independent of format.
pub const MIN_MAIN_DECK: u32 = 50;

/// Loose caps applied in lenient mode.
pub const LENIENT_MAX_MAIN: u32 = 252;
pub const LENIENT_MAX_RESERVE: u32 = 20;

/// Tournament deck format, fixed for the lifetime of one validation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckFormat {
    Type1,
    Type2,
}

impl DeckFormat {
    pub fn max_main(&self) -> u32 {
        match self {
            DeckFormat::Type1 => 154,
            DeckFormat::Type2 => 252,
        }
    }

    pub fn max_reserve(&self) -> u32 {
        match self {
            DeckFormat::Type1 => 10,
            DeckFormat::Type2 => 15,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeckFormat::Type1 => "type_1",
            DeckFormat::Type2 => "type_2",
        }
    }
}

impl fmt::Display for DeckFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DeckFormat {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "type_1" => Ok(DeckFormat::Type1),
            "type_2" => Ok(DeckFormat::Type2),
            other => Err(DeckError::UnknownDeckFormat(other.to_string())),
        }
    }
}

/// Validation strictness.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationMode {
    /// Tournament thresholds for the given format.
    Strict,
    /// Preview thresholds: loose caps, no minimum size.
    Lenient,
}

/// Validate a resolved deck against the format's construction rules.
///
/// Checks run in order: minimum main size, maximum main size, maximum
/// reserve size. The first violated rule is returned as a typed error.
pub fn validate(deck: &ResolvedDeck, format: DeckFormat, mode: ValidationMode) -> Result<()> {
    let main = deck.main_size();
    let reserve = deck.reserve_size();

    match mode {
        ValidationMode::Strict => {
            if main < MIN_MAIN_DECK {
                return Err(DeckError::MainDeckTooSmall {
                    size: main,
                    min: MIN_MAIN_DECK,
                });
            }
            if main > format.max_main() {
                return Err(DeckError::MainDeckTooLarge {
                    size: main,
                    max: format.max_main(),
                });
            }
            if reserve > format.max_reserve() {
                return Err(DeckError::ReserveTooLarge {
                    size: reserve,
                    max: format.max_reserve(),
                });
            }
        }
        ValidationMode::Lenient => {
            if main > LENIENT_MAX_MAIN {
                return Err(DeckError::MainDeckTooLarge {
                    size: main,
                    max: LENIENT_MAX_MAIN,
                });
            }
            if reserve > LENIENT_MAX_RESERVE {
                return Err(DeckError::ReserveTooLarge {
                    size: reserve,
                    max: LENIENT_MAX_RESERVE,
                });
            }
        }
    }

    Ok(())
}
