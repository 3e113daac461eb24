//! The discard stack.
//!
//! Played cards are pushed here in play order. The stack is cleared when
//! the pile is bombed into the dead pile or picked up as a penalty.

pub mod discard;

pub use discard::{DiscardEntry, DiscardStack, BOMB_RUN};
