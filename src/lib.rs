//! Player rating cards: a deterministic 0-100 rating engine and a read-only
//! query layer over published cards.

pub mod cards;
pub mod config;
pub mod engine;
pub mod error;
pub mod report;
pub mod types;

pub use engine::{score_overall, score_statistic, RatingEngine, ScoringOptions};
pub use error::{RatingError, Result};
pub use types::scoring::{
    Direction, PlayerRecord, PlayerStatValue, Profile, ProfileWeights, RatingResult,
    StatDefinition,
};
