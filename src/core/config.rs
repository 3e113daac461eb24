//! Game configuration types.
//!
//! Palace has almost no tunables: the hand size, palace size and deck are
//! fixed by the rules. What remains configurable is:
//! - `seed`: drives the deterministic shuffle
//! - `DealMode`: the standard deal, or the fixed lower-palace debug deal
//! - `CardSize`: the on-screen card footprint used by hit-testing

use serde::{Deserialize, Serialize};

/// Cards a player's hand is refilled to from the draw pile.
pub const HAND_SIZE: usize = 5;

/// Cards in each lower and upper palace after the deal.
pub const PALACE_SIZE: usize = 3;

/// Cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// How the shuffled deck is dealt.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DealMode {
    /// Five cards to each hand, three to each lower and upper palace,
    /// alternating between players. The remaining 30 form the draw pile.
    #[default]
    Standard,

    /// Debug deal that puts player one straight into the lower-palace-only
    /// state: three cards in each lower palace, three in player two's
    /// upper palace, and the other 43 in player two's hand.
    PlayerOneLowerPalace,
}

/// On-screen card dimensions supplied by the view layer.
///
/// The engine never interprets coordinates itself; it only uses this
/// footprint to answer `find_card_at`. With the default zero size no card
/// is ever hit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSize {
    pub width: i32,
    pub height: i32,
}

impl CardSize {
    /// Create a card footprint.
    #[must_use]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Does a card drawn at `(left, top)` contain the point `(x, y)`?
    ///
    /// Edges are exclusive, so a tap exactly on a border hits nothing.
    #[must_use]
    pub const fn contains(self, left: i32, top: i32, x: i32, y: i32) -> bool {
        x > left && x < left + self.width && y > top && y < top + self.height
    }
}

/// Complete configuration for one game of Palace.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PalaceConfig {
    /// Seed for the shuffle.
    pub seed: u64,

    /// Which deal to perform after shuffling.
    pub deal_mode: DealMode,

    /// Card footprint used by hit-testing.
    pub card_size: CardSize,
}

impl PalaceConfig {
    /// Configuration with the given seed and defaults otherwise.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }
}
