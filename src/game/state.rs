//! Game state: the authoritative model of one game of Palace.
//!
//! ## Ownership
//!
//! `GameState` owns everything:
//! - `Partition`: the 52 located cards and cached per-location counts
//! - `DiscardStack`: play order of the cards in the discard pile
//! - the selection set, turn, palace phase and per-player flags
//!
//! ## Mutation
//!
//! Every mutator returns `bool`. `false` means the request broke a rule or
//! had nothing to do, and the state is unchanged. Structural invariants
//! (52 cards, discard mirror) are re-checked with `debug_assert!` after
//! every successful mutation.
//!
//! ## Snapshots
//!
//! `Clone` is a full value copy sharing no mutable storage with the
//! source, cheap enough for speculative lookahead. `to_bytes` and
//! `from_bytes` give a validated binary snapshot.

use log::{debug, info};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::builder::PalaceBuilder;
use super::phase::PalacePhase;
use crate::cards::{Card, CardRef, LocatedCard};
use crate::core::{
    PalaceConfig, PlayerId, PlayerMap, DECK_SIZE, HAND_SIZE, PALACE_SIZE, PLAYER_COUNT,
};
use crate::error::{IntegrityError, Result};
use crate::rules::{self, OwnerPiles};
use crate::stack::DiscardStack;
use crate::zones::{Location, Partition, Pile};

/// Selected cards, in selection order.
pub type Selection = SmallVec<[CardRef; 4]>;

/// Complete state of one game.
///
/// Deserializing runs `check_integrity`, so a decoded state always upholds
/// the same invariants as one built by `PalaceBuilder`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "UncheckedState")]
pub struct GameState {
    config: PalaceConfig,
    partition: Partition,
    selected: Selection,
    discard: DiscardStack,
    turn: PlayerId,
    phase: PalacePhase,
    can_change_palace: PlayerMap<bool>,
    was_bombed: bool,
}

/// Wire form of `GameState`, before validation.
#[derive(Deserialize)]
struct UncheckedState {
    config: PalaceConfig,
    partition: Partition,
    selected: Selection,
    discard: DiscardStack,
    turn: PlayerId,
    phase: PalacePhase,
    can_change_palace: PlayerMap<bool>,
    was_bombed: bool,
}

impl TryFrom<UncheckedState> for GameState {
    type Error = IntegrityError;

    fn try_from(raw: UncheckedState) -> std::result::Result<Self, Self::Error> {
        let state = Self {
            config: raw.config,
            partition: raw.partition,
            selected: raw.selected,
            discard: raw.discard,
            turn: raw.turn,
            phase: raw.phase,
            can_change_palace: raw.can_change_palace,
            was_bombed: raw.was_bombed,
        };
        state.check_integrity()?;
        Ok(state)
    }
}

impl GameState {
    /// Shuffle with `seed` and deal a standard game.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        PalaceBuilder::new().config(PalaceConfig::with_seed(seed)).build()
    }

    /// Start configuring a game.
    #[must_use]
    pub fn builder() -> PalaceBuilder {
        PalaceBuilder::new()
    }

    pub(crate) fn from_parts(config: PalaceConfig, partition: Partition, discard: DiscardStack) -> Self {
        let state = Self {
            config,
            partition,
            selected: Selection::new(),
            discard,
            turn: PlayerId::ONE,
            phase: PalacePhase::Normal,
            can_change_palace: PlayerMap::with_value(true),
            was_bombed: false,
        };
        state.debug_assert_consistent();
        state
    }

    // === Queries ===

    #[must_use]
    pub fn config(&self) -> &PalaceConfig {
        &self.config
    }

    /// Whose turn it is.
    #[must_use]
    pub fn turn(&self) -> PlayerId {
        self.turn
    }

    #[must_use]
    pub fn palace_phase(&self) -> PalacePhase {
        self.phase
    }

    /// Is a palace exchange in progress?
    #[must_use]
    pub fn is_changing_palace(&self) -> bool {
        self.phase.is_exchanging()
    }

    /// May `player` still exchange their palace?
    #[must_use]
    pub fn can_change_palace(&self, player: PlayerId) -> bool {
        self.can_change_palace.get(player).copied().unwrap_or(false)
    }

    /// Has the discard pile been bombed at least once?
    #[must_use]
    pub fn was_bombed(&self) -> bool {
        self.was_bombed
    }

    /// Currently selected cards, in selection order.
    #[must_use]
    pub fn selected_cards(&self) -> &[CardRef] {
        &self.selected
    }

    /// Number of cards in a location.
    #[must_use]
    pub fn count(&self, location: Location) -> usize {
        self.partition.count(location)
    }

    /// Is a location empty?
    #[must_use]
    pub fn is_empty(&self, location: Location) -> bool {
        self.partition.is_location_empty(location)
    }

    #[must_use]
    pub fn is_draw_pile_empty(&self) -> bool {
        self.is_empty(Location::DrawPile)
    }

    #[must_use]
    pub fn draw_pile_size(&self) -> usize {
        self.count(Location::DrawPile)
    }

    #[must_use]
    pub fn discard_pile_size(&self) -> usize {
        self.count(Location::DiscardPile)
    }

    #[must_use]
    pub fn dead_pile_size(&self) -> usize {
        self.count(Location::DeadPile)
    }

    /// Size of one of a player's piles. Zero for an unseated player.
    #[must_use]
    pub fn pile_size(&self, player: PlayerId, pile: Pile) -> usize {
        Location::owned(player, pile).map_or(0, |location| self.count(location))
    }

    #[must_use]
    pub fn hand_size(&self, player: PlayerId) -> usize {
        self.pile_size(player, Pile::Hand)
    }

    #[must_use]
    pub fn lower_palace_size(&self, player: PlayerId) -> usize {
        self.pile_size(player, Pile::LowerPalace)
    }

    #[must_use]
    pub fn upper_palace_size(&self, player: PlayerId) -> usize {
        self.pile_size(player, Pile::UpperPalace)
    }

    /// Get a located card.
    #[must_use]
    pub fn card(&self, card: CardRef) -> Option<&LocatedCard> {
        self.partition.get(card)
    }

    /// Cards in a location, in arena order.
    pub fn cards_in(&self, location: Location) -> impl Iterator<Item = CardRef> + '_ {
        self.partition.cards_in(location)
    }

    /// Every located card, in arena order.
    pub fn cards(&self) -> impl Iterator<Item = (CardRef, &LocatedCard)> {
        self.partition.iter()
    }

    /// Reference of a specific card.
    #[must_use]
    pub fn find(&self, card: Card) -> Option<CardRef> {
        self.partition.find(card)
    }

    /// The discard stack, top last.
    #[must_use]
    pub fn discard(&self) -> &DiscardStack {
        &self.discard
    }

    /// The most recently played card still on the discard pile.
    #[must_use]
    pub fn discard_top(&self) -> Option<CardRef> {
        self.discard.peek().map(|entry| entry.card_ref)
    }

    /// Has `player` emptied their hand and upper palace?
    #[must_use]
    pub fn is_lower_palace_only(&self, player: PlayerId) -> bool {
        player.is_seated() && self.hand_size(player) == 0 && self.upper_palace_size(player) == 0
    }

    fn owner_piles(&self, player: PlayerId) -> OwnerPiles {
        OwnerPiles {
            hand_empty: self.hand_size(player) == 0,
            upper_palace_empty: self.upper_palace_size(player) == 0,
        }
    }

    /// Could this card be played right now?
    ///
    /// Checks the owner's structural ban (upper palace only from an empty
    /// hand, lower palace only once hand and upper palace are empty), then
    /// rank against the discard top. Unknown references are never legal.
    #[must_use]
    pub fn is_legal(&self, card: CardRef) -> bool {
        let Some(located) = self.partition.get(card) else {
            return false;
        };
        let owner = located
            .location
            .owner()
            .map(|player| self.owner_piles(player))
            .unwrap_or_default();

        rules::is_legal(located.location, owner, self.discard.top_rank(), located.card.rank())
    }

    /// Every card `player` holds that could be played right now.
    #[must_use]
    pub fn playable_cards(&self, player: PlayerId) -> Vec<CardRef> {
        self.partition
            .iter()
            .filter(|(_, c)| c.location.is_held_by(player))
            .map(|(r, _)| r)
            .filter(|&r| self.is_legal(r))
            .collect()
    }

    /// The player who has shed every card, if any.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        PlayerId::all().find(|&player| {
            self.is_lower_palace_only(player) && self.lower_palace_size(player) == 0
        })
    }

    /// Hit-test a point against card positions.
    ///
    /// Prefers any card not in `own_lower_palace`, so a face-up upper
    /// palace card drawn over its face-down partner wins. Falls back to a
    /// lower palace card, then to the discard top.
    #[must_use]
    pub fn find_card_at(&self, x: i32, y: i32, own_lower_palace: Location) -> Option<CardRef> {
        let size = self.config.card_size;
        let hit = |c: &LocatedCard| size.contains(c.x, c.y, x, y);

        self.partition
            .iter()
            .find(|(_, c)| c.location != own_lower_palace && hit(*c))
            .or_else(|| {
                self.partition
                    .iter()
                    .find(|(_, c)| c.location == own_lower_palace && hit(*c))
            })
            .map(|(r, _)| r)
            .or_else(|| {
                self.discard_top()
                    .filter(|&top| self.partition.get(top).is_some_and(hit))
            })
    }

    // === Selection ===

    /// Toggle a card in the play selection.
    ///
    /// An already-selected card is deselected. Otherwise the card must be
    /// held by `player`, be legal, and match the rank of the most recently
    /// selected card.
    pub fn select_cards(&mut self, player: PlayerId, card: CardRef) -> bool {
        let Some(&located) = self.partition.get(card) else {
            return false;
        };
        if !located.location.is_held_by(player) {
            return false;
        }

        if let Some(pos) = self.selected.iter().position(|&c| c == card) {
            self.selected.remove(pos);
            return true;
        }

        if !self.is_legal(card) {
            return false;
        }

        let same_rank = match self.selected.last() {
            None => true,
            Some(&last) => self
                .partition
                .get(last)
                .is_some_and(|c| c.card.same_rank(located.card)),
        };
        if !same_rank {
            return false;
        }

        self.selected.push(card);
        true
    }

    /// Toggle a hand card in the palace selection.
    ///
    /// Only during `player`'s own exchange. Any rank may be chosen; at most
    /// three cards can be selected.
    pub fn select_palace_cards(&mut self, player: PlayerId, card: CardRef) -> bool {
        if self.phase.exchanging_player() != Some(player) {
            return false;
        }
        let Some(hand) = Location::owned(player, Pile::Hand) else {
            return false;
        };
        if self.partition.location(card) != Some(hand) {
            return false;
        }

        if let Some(pos) = self.selected.iter().position(|&c| c == card) {
            self.selected.remove(pos);
            return true;
        }

        if self.selected.len() < PALACE_SIZE {
            self.selected.push(card);
            return true;
        }

        false
    }

    // === Play ===

    /// Play every selected card onto the discard pile.
    ///
    /// Fails during a palace exchange, with nothing selected, or when a
    /// selected card is not held by `player`. After the cards land the
    /// pile may bomb, the hand is refilled from the draw pile, and `player`
    /// loses the right to exchange their palace.
    pub fn play_cards(&mut self, player: PlayerId) -> bool {
        if !self.phase.allows_play() || self.selected.is_empty() || !player.is_seated() {
            return false;
        }
        let all_held = self
            .selected
            .iter()
            .all(|&c| self.partition.location(c).is_some_and(|l| l.is_held_by(player)));
        if !all_held {
            return false;
        }

        let played = std::mem::take(&mut self.selected);
        for &card_ref in &played {
            if let Some(&located) = self.partition.get(card_ref) {
                self.discard.push(card_ref, located.card);
                self.partition.move_card(card_ref, Location::DiscardPile);
            }
        }
        debug!("{player} played {} card(s)", played.len());

        if rules::should_bomb(&self.discard) {
            self.bomb_discard_pile();
        }

        self.take_from_draw_pile(player);
        if let Some(eligible) = self.can_change_palace.get_mut(player) {
            *eligible = false;
        }

        self.debug_assert_consistent();
        true
    }

    /// Play a face-down lower palace card blind.
    ///
    /// `player` must be in the lower-palace-only state and `card` must be
    /// in their lower palace. Any stale selection is dropped and the card
    /// is played alone. If it turned out to be illegal it still lands on
    /// the pile, and `player` then picks up the whole pile as a penalty.
    pub fn play_lower_palace_card(&mut self, player: PlayerId, card: CardRef) -> bool {
        let Some(lower) = Location::owned(player, Pile::LowerPalace) else {
            return false;
        };
        if !self.phase.allows_play()
            || self.partition.location(card) != Some(lower)
            || !self.is_lower_palace_only(player)
        {
            return false;
        }

        let legal = self.is_legal(card);
        self.selected.clear();
        self.selected.push(card);
        if !self.play_cards(player) {
            self.selected.clear();
            return false;
        }

        if !legal {
            debug!("{player} played an illegal lower palace card");
            self.take_discard_pile(player);
        }
        true
    }

    /// Pick up the whole discard pile into `player`'s hand.
    ///
    /// No-op returning false when the pile is empty. There is no cap on the
    /// resulting hand size.
    pub fn take_discard_pile(&mut self, player: PlayerId) -> bool {
        let Some(hand) = Location::owned(player, Pile::Hand) else {
            return false;
        };
        if self.discard.is_empty() {
            return false;
        }

        let taken = self.partition.move_all(Location::DiscardPile, hand);
        self.discard.clear();
        debug!("{player} picked up {taken} card(s) from the discard pile");

        self.debug_assert_consistent();
        true
    }

    fn bomb_discard_pile(&mut self) {
        for entry in self.discard.iter_top_down() {
            info!(target: "discard", "card {} was bombed", entry.card);
        }
        self.partition.move_all(Location::DiscardPile, Location::DeadPile);
        self.discard.clear();
        self.was_bombed = true;
    }

    /// Refill `player`'s hand to five from the draw pile, in draw order.
    fn take_from_draw_pile(&mut self, player: PlayerId) {
        let Some(hand) = Location::owned(player, Pile::Hand) else {
            return;
        };
        let draws = rules::cards_to_draw(self.count(hand), self.draw_pile_size(), HAND_SIZE);
        let drawn: Vec<_> = self.partition.cards_in(Location::DrawPile).take(draws).collect();
        for card in drawn {
            self.partition.move_card(card, hand);
        }
    }

    // === Palace exchange ===

    /// Open a palace exchange: move `player`'s upper palace into their hand.
    ///
    /// Rejected once `player` has played a card, and while any exchange is
    /// already open. The selection set is left alone.
    pub fn change_palace(&mut self, player: PlayerId) -> bool {
        if self.phase.is_exchanging() || !self.can_change_palace(player) {
            return false;
        }
        let (Some(hand), Some(upper)) = (
            Location::owned(player, Pile::Hand),
            Location::owned(player, Pile::UpperPalace),
        ) else {
            return false;
        };

        let moved = self.partition.move_all(upper, hand);
        self.phase = PalacePhase::ExchangingPalace(player);
        debug!("{player} opened a palace exchange ({moved} card(s) to hand)");

        self.debug_assert_consistent();
        true
    }

    /// Close `player`'s exchange: the three selected hand cards become the
    /// new upper palace.
    pub fn confirm_palace(&mut self, player: PlayerId) -> bool {
        if self.phase.exchanging_player() != Some(player) {
            return false;
        }
        let (Some(hand), Some(upper)) = (
            Location::owned(player, Pile::Hand),
            Location::owned(player, Pile::UpperPalace),
        ) else {
            return false;
        };
        let all_in_hand = self
            .selected
            .iter()
            .all(|&c| self.partition.location(c) == Some(hand));
        if self.selected.len() != PALACE_SIZE || !all_in_hand {
            return false;
        }

        for card in std::mem::take(&mut self.selected) {
            self.partition.move_card(card, upper);
        }
        self.phase = PalacePhase::Normal;
        debug!("{player} confirmed a new upper palace");

        self.debug_assert_consistent();
        true
    }

    // === Bookkeeping ===

    /// Hand the turn to `player`. False for an unseated player.
    pub fn set_turn(&mut self, player: PlayerId) -> bool {
        if !player.is_seated() {
            return false;
        }
        self.turn = player;
        true
    }

    /// Overwrite the bombed flag. Always succeeds.
    pub fn set_was_bombed(&mut self, was_bombed: bool) -> bool {
        self.was_bombed = was_bombed;
        true
    }

    /// Record where the view drew a card. False for an unknown card.
    pub fn set_card_position(&mut self, card: CardRef, x: i32, y: i32) -> bool {
        self.partition.set_position(card, x, y)
    }

    // === Integrity ===

    /// Verify card conservation, the count cache, the discard mirror, the
    /// selection set and that every player reference names a seat.
    pub fn check_integrity(&self) -> std::result::Result<(), IntegrityError> {
        if self.partition.len() != DECK_SIZE {
            return Err(IntegrityError::WrongCardCount {
                expected: DECK_SIZE,
                found: self.partition.len(),
            });
        }

        let mut seen = FxHashSet::default();
        for (_, located) in self.partition.iter() {
            if !seen.insert(located.card) {
                return Err(IntegrityError::DuplicateCard(located.card));
            }
        }

        for location in Location::ALL {
            let cached = self.partition.count(location);
            let actual = self.partition.recount(location);
            if cached != actual {
                return Err(IntegrityError::CountDrift {
                    location,
                    cached,
                    actual,
                });
            }
        }

        let pile = self.discard_pile_size();
        if self.discard.len() != pile {
            return Err(IntegrityError::DiscardSizeMismatch {
                stack: self.discard.len(),
                pile,
            });
        }
        let mut stacked = FxHashSet::default();
        for entry in self.discard.iter_bottom_up() {
            let located = self
                .partition
                .get(entry.card_ref)
                .ok_or(IntegrityError::UnknownCardRef(entry.card_ref))?;
            if located.location != Location::DiscardPile || !stacked.insert(entry.card_ref) {
                return Err(IntegrityError::DiscardEntryMisplaced(entry.card_ref));
            }
            if located.card != entry.card {
                return Err(IntegrityError::DiscardEntryStale(entry.card_ref));
            }
        }

        let mut selected = FxHashSet::default();
        for &card in &self.selected {
            if self.partition.get(card).is_none() {
                return Err(IntegrityError::UnknownCardRef(card));
            }
            if !selected.insert(card) {
                return Err(IntegrityError::DuplicateSelection(card));
            }
        }

        if !self.turn.is_seated() {
            return Err(IntegrityError::UnseatedTurn(self.turn));
        }
        if let Some(player) = self.phase.exchanging_player() {
            if !player.is_seated() {
                return Err(IntegrityError::UnseatedExchange(player));
            }
        }
        if self.can_change_palace.len() != PLAYER_COUNT {
            return Err(IntegrityError::WrongFlagCount {
                expected: PLAYER_COUNT,
                found: self.can_change_palace.len(),
            });
        }

        Ok(())
    }

    fn debug_assert_consistent(&self) {
        debug_assert_eq!(self.check_integrity(), Ok(()));
    }

    // === Snapshots ===

    /// Encode the full state with bincode.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode a snapshot and verify its integrity.
    ///
    /// Malformed bytes give `PalaceError::Snapshot`; a well-formed state
    /// that breaks an invariant gives `PalaceError::Integrity`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let raw: UncheckedState = bincode::deserialize(bytes)?;
        Ok(Self::try_from(raw)?)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Turn is: {}", self.turn)?;
        writeln!(f, "Phase is: {}", self.phase)?;
        writeln!(f, "Deck contains:")?;
        for (_, located) in self.partition.iter() {
            writeln!(f, "{located}")?;
        }
        writeln!(f, "Discard pile contains:")?;
        write!(f, "{}", self.discard)?;
        writeln!(f, "Selected cards contains:")?;
        for &card in &self.selected {
            if let Some(located) = self.partition.get(card) {
                writeln!(f, "{located}")?;
            }
        }
        Ok(())
    }
}
