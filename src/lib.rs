//! Redemption deck list resolver
//!
//! Resolves raw deck list text against the external card database into a
//! validated, fully annotated deck model, and derives two Monte Carlo
//! draw statistics from it. Parsing, brigade normalization, validation
//! and the statistics are synchronous and share nothing mutable; the
//! loaded catalog is read-only and can back concurrent resolutions.

pub mod brigade;
pub mod card;
pub mod error;
pub mod loader;
pub mod resolver;
pub mod sort;
pub mod stats;
pub mod validator;

pub use error::{DeckError, Result};
