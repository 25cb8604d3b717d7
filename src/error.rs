//! Error types for deck resolution

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("Failed to load card catalog: {0}")]
    CatalogLoad(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Deck file must contain at least one card in the main deck")]
    EmptyMainDeck,

    #[error("Card {card} has an invalid brigade: {brigade}")]
    InvalidBrigade { card: String, brigade: String },

    #[error("Main deck has {size} cards; at least {min} are required")]
    MainDeckTooSmall { size: u32, min: u32 },

    #[error("Main deck has {size} cards; at most {max} are allowed")]
    MainDeckTooLarge { size: u32, max: u32 },

    #[error("Reserve has {size} cards; at most {max} are allowed")]
    ReserveTooLarge { size: u32, max: u32 },

    #[error("Unknown sort field: {0}")]
    UnknownSortField(String),

    #[error("Unknown deck format: {0} (expected type_1 or type_2)")]
    UnknownDeckFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DeckError>;
