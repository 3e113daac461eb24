//! The nine mutually exclusive card locations.
//!
//! Three are shared (draw, discard, dead). The other six are a player's
//! hand, lower palace (face-down) and upper palace (face-up).

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Which of a player's own piles a location is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Pile {
    Hand,
    LowerPalace,
    UpperPalace,
}

/// Where a card currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Location {
    DrawPile,
    DiscardPile,
    /// Bombed cards. Nothing ever leaves.
    DeadPile,
    PlayerOneHand,
    PlayerOneLowerPalace,
    PlayerOneUpperPalace,
    PlayerTwoHand,
    PlayerTwoLowerPalace,
    PlayerTwoUpperPalace,
}

impl Location {
    /// Number of locations.
    pub const COUNT: usize = 9;

    /// Every location, in declaration order.
    pub const ALL: [Location; Location::COUNT] = [
        Location::DrawPile,
        Location::DiscardPile,
        Location::DeadPile,
        Location::PlayerOneHand,
        Location::PlayerOneLowerPalace,
        Location::PlayerOneUpperPalace,
        Location::PlayerTwoHand,
        Location::PlayerTwoLowerPalace,
        Location::PlayerTwoUpperPalace,
    ];

    /// Dense index in `0..COUNT`, matching [`Location::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The location of `player`'s `pile`, or `None` for an unseated player.
    #[must_use]
    pub const fn owned(player: PlayerId, pile: Pile) -> Option<Location> {
        let location = match (player.0, pile) {
            (0, Pile::Hand) => Location::PlayerOneHand,
            (0, Pile::LowerPalace) => Location::PlayerOneLowerPalace,
            (0, Pile::UpperPalace) => Location::PlayerOneUpperPalace,
            (1, Pile::Hand) => Location::PlayerTwoHand,
            (1, Pile::LowerPalace) => Location::PlayerTwoLowerPalace,
            (1, Pile::UpperPalace) => Location::PlayerTwoUpperPalace,
            _ => return None,
        };
        Some(location)
    }

    /// Owning player, or `None` for the shared piles.
    #[must_use]
    pub const fn owner(self) -> Option<PlayerId> {
        match self {
            Location::PlayerOneHand
            | Location::PlayerOneLowerPalace
            | Location::PlayerOneUpperPalace => Some(PlayerId::ONE),
            Location::PlayerTwoHand
            | Location::PlayerTwoLowerPalace
            | Location::PlayerTwoUpperPalace => Some(PlayerId::TWO),
            Location::DrawPile | Location::DiscardPile | Location::DeadPile => None,
        }
    }

    /// Which personal pile this is, or `None` for the shared piles.
    #[must_use]
    pub const fn pile(self) -> Option<Pile> {
        match self {
            Location::PlayerOneHand | Location::PlayerTwoHand => Some(Pile::Hand),
            Location::PlayerOneLowerPalace | Location::PlayerTwoLowerPalace => {
                Some(Pile::LowerPalace)
            }
            Location::PlayerOneUpperPalace | Location::PlayerTwoUpperPalace => {
                Some(Pile::UpperPalace)
            }
            Location::DrawPile | Location::DiscardPile | Location::DeadPile => None,
        }
    }

    /// Is this one of `player`'s own piles?
    #[must_use]
    pub fn is_held_by(self, player: PlayerId) -> bool {
        self.owner() == Some(player)
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Location::DrawPile => "draw pile",
            Location::DiscardPile => "discard pile",
            Location::DeadPile => "dead pile",
            Location::PlayerOneHand => "player one's hand",
            Location::PlayerOneLowerPalace => "player one's lower palace",
            Location::PlayerOneUpperPalace => "player one's upper palace",
            Location::PlayerTwoHand => "player two's hand",
            Location::PlayerTwoLowerPalace => "player two's lower palace",
            Location::PlayerTwoUpperPalace => "player two's upper palace",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all() {
        for (i, location) in Location::ALL.iter().enumerate() {
            assert_eq!(location.index(), i);
        }
    }

    #[test]
    fn test_owned_round_trip() {
        for player in PlayerId::all() {
            for pile in [Pile::Hand, Pile::LowerPalace, Pile::UpperPalace] {
                let location = Location::owned(player, pile).unwrap();
                assert_eq!(location.owner(), Some(player));
                assert_eq!(location.pile(), Some(pile));
                assert!(location.is_held_by(player));
                assert!(!location.is_held_by(player.opponent()));
            }
        }
    }

    #[test]
    fn test_unseated_player_owns_nothing() {
        assert_eq!(Location::owned(PlayerId::new(2), Pile::Hand), None);
    }

    #[test]
    fn test_shared_piles() {
        for location in [Location::DrawPile, Location::DiscardPile, Location::DeadPile] {
            assert_eq!(location.owner(), None);
            assert_eq!(location.pile(), None);
            assert!(!location.is_held_by(PlayerId::ONE));
        }
    }
}
