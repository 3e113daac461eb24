//! Cards: identity and location.
//!
//! - `Card`: immutable rank/suit pair
//! - `CardRef`: arena index of a located card
//! - `LocatedCard`: a card plus its current `Location`

pub mod card;
pub mod located;

pub use card::{Card, Rank, Suit};
pub use located::{CardRef, LocatedCard};
