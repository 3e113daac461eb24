//! Pure decision logic: play legality, bomb trigger, replenishment.
//!
//! Nothing here touches a game state. `GameState` gathers the inputs
//! (discard top, candidate card, owner's pile emptiness) and asks these
//! functions, so every play-initiating operation shares one source of
//! truth.

use crate::cards::Rank;
use crate::stack::DiscardStack;
use crate::zones::{Location, Pile};

/// What the structural check needs to know about the candidate's owner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct OwnerPiles {
    pub hand_empty: bool,
    pub upper_palace_empty: bool,
}

/// Can a card in `location` be played at all, given its owner's piles?
///
/// - Upper palace cards need an empty hand.
/// - Lower palace cards need an empty hand and an empty upper palace.
///
/// Any other location passes; rank legality decides.
#[must_use]
pub fn structurally_playable(location: Location, owner: OwnerPiles) -> bool {
    match location.pile() {
        Some(Pile::UpperPalace) => owner.hand_empty,
        Some(Pile::LowerPalace) => owner.hand_empty && owner.upper_palace_empty,
        Some(Pile::Hand) | None => true,
    }
}

/// Can `candidate` go on a discard pile whose top rank is `top`?
///
/// ```
/// use palace_engine::cards::Rank;
/// use palace_engine::rules::rank_allows;
///
/// assert!(rank_allows(None, Rank::Three));
/// assert!(rank_allows(Some(Rank::Seven), Rank::Two));
/// assert!(rank_allows(Some(Rank::Seven), Rank::Four));
/// assert!(!rank_allows(Some(Rank::Seven), Rank::Eight));
/// assert!(!rank_allows(Some(Rank::Nine), Rank::Three));
/// ```
#[must_use]
pub fn rank_allows(top: Option<Rank>, candidate: Rank) -> bool {
    let Some(top) = top else {
        return true;
    };

    if top == Rank::Two || candidate.is_wild() {
        return true;
    }

    // Sevens are gone under, not over
    if top == Rank::Seven {
        return candidate <= Rank::Seven;
    }

    top <= candidate
}

/// Full legality: structural ban first, then rank.
#[must_use]
pub fn is_legal(location: Location, owner: OwnerPiles, top: Option<Rank>, candidate: Rank) -> bool {
    structurally_playable(location, owner) && rank_allows(top, candidate)
}

/// Should the discard pile be bombed after a play?
///
/// True when the top four cards share a rank or the top card is a ten.
#[must_use]
pub fn should_bomb(discard: &DiscardStack) -> bool {
    discard.are_next_four_equal() || discard.top_rank() == Some(Rank::Ten)
}

/// How many cards to draw to refill a hand of `hand_size` toward `target`
/// from a draw pile of `available` cards.
#[must_use]
pub fn cards_to_draw(hand_size: usize, available: usize, target: usize) -> usize {
    target.saturating_sub(hand_size).min(available)
}
