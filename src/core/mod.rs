//! Core engine types: players, RNG, configuration.
//!
//! These are the building blocks shared by every other module. None of
//! them know anything about cards or piles.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{CardSize, DealMode, PalaceConfig, DECK_SIZE, HAND_SIZE, PALACE_SIZE};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use rng::GameRng;
