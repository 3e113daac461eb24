//! Palace-exchange sub-phase.
//!
//! ```text
//! Normal --change_palace(p)--> ExchangingPalace(p) --confirm_palace(p)--> Normal
//! ```
//!
//! While any player is exchanging, no cards can be played by either player.

use serde::{Deserialize, Serialize};

use crate::core::PlayerId;

/// Whether a palace exchange is open, and for whom.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PalacePhase {
    #[default]
    Normal,
    /// The player has moved their upper palace into their hand and is
    /// choosing three cards to put back.
    ExchangingPalace(PlayerId),
}

impl PalacePhase {
    #[must_use]
    pub fn is_exchanging(self) -> bool {
        matches!(self, PalacePhase::ExchangingPalace(_))
    }

    /// The player currently exchanging, if any.
    #[must_use]
    pub fn exchanging_player(self) -> Option<PlayerId> {
        match self {
            PalacePhase::ExchangingPalace(player) => Some(player),
            PalacePhase::Normal => None,
        }
    }

    /// Cards may only be played outside an exchange.
    #[must_use]
    pub fn allows_play(self) -> bool {
        self == PalacePhase::Normal
    }
}

impl std::fmt::Display for PalacePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PalacePhase::Normal => f.write_str("normal play"),
            PalacePhase::ExchangingPalace(player) => write!(f, "{player} exchanging palace"),
        }
    }
}
