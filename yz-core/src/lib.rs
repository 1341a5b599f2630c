//! yz-core: Yatzy hand validation and category scoring.

pub mod category;
pub mod config;
pub mod hand;
pub mod scoring;

pub use category::{Category, Face, InvalidFace, Kind, UnknownCategory, NUM_CATS, NUM_FACES};
pub use config::{ConfigError, ScoringConfig};
pub use hand::{DiceOccurrences, Hand, HandError, NUM_DICE};
pub use scoring::{scores_for_dice, ScoreCalculator, ScoreCard};

#[cfg(test)]
mod hand_tests;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
