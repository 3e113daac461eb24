//! Located cards - a card plus where it is right now.
//!
//! Exactly 52 `LocatedCard`s exist per game. They are stored in a flat
//! arena and addressed by `CardRef`, so a card keeps the same reference
//! for the whole game while only its `location` changes.
//!
//! ## Display coordinates
//!
//! `x`/`y` belong to the view layer. The engine stores them so hit-testing
//! can answer "which card is under this point", and otherwise ignores them.

use serde::{Deserialize, Serialize};

use super::card::Card;
use crate::zones::Location;

/// Stable reference to one of the 52 located cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardRef(pub u8);

impl CardRef {
    /// Create a card reference from an arena index.
    #[must_use]
    pub const fn new(index: u8) -> Self {
        Self(index)
    }

    /// Arena index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for CardRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}

/// A card, its current location and its display coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LocatedCard {
    pub card: Card,
    pub location: Location,
    pub x: i32,
    pub y: i32,
}

impl LocatedCard {
    /// Create a located card at the origin.
    #[must_use]
    pub const fn new(card: Card, location: Location) -> Self {
        Self {
            card,
            location,
            x: 0,
            y: 0,
        }
    }
}

impl std::fmt::Display for LocatedCard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in {} at ({}, {})", self.card, self.location, self.x, self.y)
    }
}
