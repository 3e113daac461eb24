//! Error types for the Palace engine.
//!
//! Rule violations are not errors: mutators report them with `false`.
//! These types cover structural faults only, a state whose card partition
//! or discard mirror is broken, and snapshots that fail to decode.

use thiserror::Error;

use crate::cards::{Card, CardRef};
use crate::core::PlayerId;
use crate::zones::Location;

/// A broken game-state invariant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntegrityError {
    #[error("expected {expected} cards, found {found}")]
    WrongCardCount { expected: usize, found: usize },

    #[error("card appears more than once: {0}")]
    DuplicateCard(Card),

    #[error("cached count for {location} is {cached}, but {actual} cards are there")]
    CountDrift {
        location: Location,
        cached: usize,
        actual: usize,
    },

    #[error("discard stack holds {stack} cards, but {pile} cards are in the discard pile")]
    DiscardSizeMismatch { stack: usize, pile: usize },

    #[error("discard stack entry {0} is not in the discard pile")]
    DiscardEntryMisplaced(CardRef),

    #[error("discard stack entry {0} does not match the card it refers to")]
    DiscardEntryStale(CardRef),

    #[error("unknown card reference: {0}")]
    UnknownCardRef(CardRef),

    #[error("card selected more than once: {0}")]
    DuplicateSelection(CardRef),

    #[error("turn belongs to unseated {0}")]
    UnseatedTurn(PlayerId),

    #[error("palace exchange held by unseated {0}")]
    UnseatedExchange(PlayerId),

    #[error("expected {expected} palace-exchange flags, found {found}")]
    WrongFlagCount { expected: usize, found: usize },
}

/// Errors from building or restoring a game state.
#[derive(Error, Debug)]
pub enum PalaceError {
    #[error("integrity violation: {0}")]
    Integrity(#[from] IntegrityError),

    #[error("snapshot encoding error: {0}")]
    Snapshot(#[from] bincode::Error),
}

pub type Result<T> = std::result::Result<T, PalaceError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn test_messages() {
        let err = IntegrityError::WrongCardCount {
            expected: 52,
            found: 51,
        };
        assert_eq!(err.to_string(), "expected 52 cards, found 51");

        let err = IntegrityError::DuplicateCard(Card::new(Rank::Ace, Suit::Spades));
        assert_eq!(err.to_string(), "card appears more than once: Ace of Spades");

        let err = IntegrityError::CountDrift {
            location: Location::DeadPile,
            cached: 4,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "cached count for dead pile is 4, but 3 cards are there"
        );
    }

    #[test]
    fn test_wraps_integrity() {
        let err: PalaceError = IntegrityError::UnknownCardRef(CardRef(60)).into();
        assert_eq!(err.to_string(), "integrity violation: unknown card reference: Card#60");
    }

    #[test]
    fn test_seat_messages() {
        let err = IntegrityError::UnseatedExchange(PlayerId::new(9));
        assert_eq!(err.to_string(), "palace exchange held by unseated Player 10");

        let err = IntegrityError::WrongFlagCount {
            expected: 2,
            found: 0,
        };
        assert_eq!(err.to_string(), "expected 2 palace-exchange flags, found 0");
    }
}
