//! Rules of Palace as pure functions.
//!
//! `GameState` owns all mutation. This module only answers questions:
//! - Is a candidate play legal?
//! - Does the discard pile bomb?
//! - How many cards does a hand draw?

pub mod legality;

pub use legality::{
    cards_to_draw, is_legal, rank_allows, should_bomb, structurally_playable, OwnerPiles,
};
