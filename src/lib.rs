//! # palace-engine
//!
//! Rules engine for Palace, a two-player shedding card game.
//!
//! Each player holds a hand, a face-down lower palace and a face-up upper
//! palace. Cards are played onto a shared discard pile at equal or higher
//! rank. Twos and tens are wild, a seven caps the next play at seven, and
//! a ten or four of a kind bombs the pile. The first player to shed every
//! card wins.
//!
//! ## Design Principles
//!
//! 1. **Rules Only**: No rendering, input or networking. A view layer
//!    drives the engine through `GameState`'s query and mutator methods.
//!
//! 2. **Soft Failure**: Illegal requests return `false` and leave the
//!    state untouched. Errors are reserved for broken invariants and bad
//!    snapshots.
//!
//! 3. **Cheap Snapshots**: `GameState` is a plain value. The discard
//!    stack uses `im-rs` so clones stay cheap for lookahead.
//!
//! ## Modules
//!
//! - `core`: Players, RNG, configuration
//! - `cards`: Ranks, suits and located cards
//! - `zones`: Locations and the 52-card partition
//! - `stack`: Discard pile play order
//! - `rules`: Legality, bombing and draw rules
//! - `game`: Dealing, palace exchange and `GameState`
//! - `error`: Integrity and snapshot errors

pub mod core;
pub mod cards;
pub mod zones;
pub mod stack;
pub mod rules;
pub mod game;
pub mod error;

// Re-export commonly used types
pub use crate::core::{
    CardSize, DealMode, GameRng, PalaceConfig, PlayerId, PlayerMap,
    DECK_SIZE, HAND_SIZE, PALACE_SIZE, PLAYER_COUNT,
};

pub use crate::cards::{Card, CardRef, LocatedCard, Rank, Suit};

pub use crate::zones::{Location, Partition, Pile};

pub use crate::stack::{DiscardEntry, DiscardStack, BOMB_RUN};

pub use crate::game::{GameState, PalaceBuilder, PalacePhase};

pub use crate::error::{IntegrityError, PalaceError, Result};
