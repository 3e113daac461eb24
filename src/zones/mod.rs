//! Zone system for card locations.
//!
//! Palace has a fixed set of nine locations. Every card is in exactly one
//! of them at all times.
//!
//! ## Key Types
//!
//! - `Location`: the nine locations
//! - `Pile`: a player's hand, lower palace or upper palace
//! - `Partition`: the 52-card arena with cached location counts

pub mod location;
pub mod partition;

pub use location::{Location, Pile};
pub use partition::Partition;
