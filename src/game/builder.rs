//! Builder for new games.

use rustc_hash::FxHashSet;

use super::deal::deal;
use super::state::GameState;
use crate::cards::{Card, CardRef};
use crate::core::{CardSize, DealMode, GameRng, PalaceConfig};
use crate::error::{IntegrityError, Result};
use crate::stack::DiscardStack;
use crate::zones::{Location, Partition};

/// Builder for creating a `GameState`.
#[derive(Clone, Debug, Default)]
pub struct PalaceBuilder {
    config: PalaceConfig,
}

impl PalaceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn deal_mode(mut self, mode: DealMode) -> Self {
        self.config.deal_mode = mode;
        self
    }

    pub fn card_size(mut self, width: i32, height: i32) -> Self {
        self.config.card_size = CardSize::new(width, height);
        self
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: PalaceConfig) -> Self {
        self.config = config;
        self
    }

    /// Shuffle a standard deck with the configured seed and deal it.
    pub fn build(self) -> GameState {
        let mut deck = Card::standard_deck();
        GameRng::new(self.config.seed).shuffle(&mut deck);

        let mut partition = Partition::new(deck);
        deal(&mut partition, self.config.deal_mode);

        GameState::from_parts(self.config, partition, DiscardStack::new())
    }

    /// Build a game with specific cards in specific places, skipping the
    /// shuffle and deal.
    ///
    /// Placed cards come first in arena order, in the order given. Every
    /// other card follows in standard deck order, in the draw pile. Cards
    /// placed in the discard pile are played in the order given, so the
    /// last one is the top.
    pub fn build_arranged(self, placements: &[(Card, Location)]) -> Result<GameState> {
        let mut seen = FxHashSet::default();
        for &(card, _) in placements {
            if !seen.insert(card) {
                return Err(IntegrityError::DuplicateCard(card).into());
            }
        }

        let deck: Vec<Card> = placements
            .iter()
            .map(|&(card, _)| card)
            .chain(Card::standard_deck().into_iter().filter(|c| !seen.contains(c)))
            .collect();

        let mut partition = Partition::new(deck);
        let mut discard = DiscardStack::new();
        for (index, &(card, location)) in placements.iter().enumerate() {
            let card_ref = CardRef(index as u8);
            partition.move_card(card_ref, location);
            if location == Location::DiscardPile {
                discard.push(card_ref, card);
            }
        }

        let state = GameState::from_parts(self.config, partition, discard);
        state.check_integrity()?;
        Ok(state)
    }
}
