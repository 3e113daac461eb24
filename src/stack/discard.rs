//! Discard stack: the ordered record of played cards.
//!
//! The stack mirrors the cards whose location is `DiscardPile`, in play
//! order. The partition says *which* cards are in the discard pile; the
//! stack says in what order they arrived, which is what "top card" and
//! four-of-a-kind detection need.
//!
//! Backed by `im::Vector` so cloning a game state for lookahead does not
//! copy the pile.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardRef, Rank};

/// Cards of one rank on top of the pile that bomb it.
pub const BOMB_RUN: usize = 4;

/// One played card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiscardEntry {
    pub card_ref: CardRef,
    pub card: Card,
}

/// Last-in-first-out pile of played cards. The back of the vector is the top.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiscardStack {
    entries: Vector<DiscardEntry>,
}

impl DiscardStack {
    /// Create an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a played card on top.
    pub fn push(&mut self, card_ref: CardRef, card: Card) {
        self.entries.push_back(DiscardEntry { card_ref, card });
    }

    /// The top entry, if any.
    #[must_use]
    pub fn peek(&self) -> Option<&DiscardEntry> {
        self.entries.back()
    }

    /// Rank of the top card, if any.
    #[must_use]
    pub fn top_rank(&self) -> Option<Rank> {
        self.peek().map(|e| e.card.rank())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Do the top `n` entries all share one rank?
    ///
    /// False when fewer than `n` cards are on the pile.
    #[must_use]
    pub fn top_n_same_rank(&self, n: usize) -> bool {
        if n == 0 || self.entries.len() < n {
            return false;
        }
        let mut top = self.iter_top_down().take(n);
        let first = match top.next() {
            Some(entry) => entry.card.rank(),
            None => return false,
        };
        top.all(|entry| entry.card.rank() == first)
    }

    /// Are the top four cards the same rank?
    #[must_use]
    pub fn are_next_four_equal(&self) -> bool {
        self.top_n_same_rank(BOMB_RUN)
    }

    /// Entries from the most recent play down to the oldest.
    pub fn iter_top_down(&self) -> impl Iterator<Item = &DiscardEntry> {
        self.entries.iter().rev()
    }

    /// Entries in the order they were played.
    pub fn iter_bottom_up(&self) -> impl Iterator<Item = &DiscardEntry> {
        self.entries.iter()
    }
}

impl std::fmt::Display for DiscardStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in self.iter_top_down() {
            writeln!(f, "{}", entry.card)?;
        }
        Ok(())
    }
}
