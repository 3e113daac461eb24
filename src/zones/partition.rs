//! The card partition: all 52 located cards and where they are.
//!
//! `Partition` is the single authoritative record of card locations. It
//! stores the cards in a flat arena (the shuffled deck order) and keeps a
//! per-location count cache that is updated at the one place a location
//! changes, [`Partition::move_card`]. Nothing else may write a location.
//!
//! Arena order matters: the draw pile is drawn in arena order, and hit
//! tests scan in arena order.

use serde::{Deserialize, Serialize};

use super::location::Location;
use crate::cards::{Card, CardRef, LocatedCard};
use crate::core::DECK_SIZE;

/// Flat arena of located cards with cached per-location counts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition {
    cards: Vec<LocatedCard>,
    counts: [u8; Location::COUNT],
}

impl Partition {
    /// Place every card of `deck` in the draw pile, in the given order.
    ///
    /// `deck` holds at most `DECK_SIZE` cards; counts are cached as `u8`.
    ///
    /// ```
    /// use palace_engine::cards::Card;
    /// use palace_engine::zones::{Location, Partition};
    ///
    /// let partition = Partition::new(Card::standard_deck());
    /// assert_eq!(partition.count(Location::DrawPile), 52);
    /// ```
    #[must_use]
    pub fn new(deck: Vec<Card>) -> Self {
        debug_assert!(
            deck.len() <= DECK_SIZE,
            "deck of {} cards exceeds {DECK_SIZE}",
            deck.len()
        );
        let mut counts = [0u8; Location::COUNT];
        counts[Location::DrawPile.index()] = deck.len() as u8;
        let cards = deck
            .into_iter()
            .map(|card| LocatedCard::new(card, Location::DrawPile))
            .collect();
        Self { cards, counts }
    }

    /// Total number of cards tracked.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a located card.
    #[must_use]
    pub fn get(&self, card: CardRef) -> Option<&LocatedCard> {
        self.cards.get(card.index())
    }

    /// Current location of a card.
    #[must_use]
    pub fn location(&self, card: CardRef) -> Option<Location> {
        self.get(card).map(|c| c.location)
    }

    /// Move a card to a new location.
    ///
    /// Returns the old location, or `None` if the reference is unknown.
    pub fn move_card(&mut self, card: CardRef, to: Location) -> Option<Location> {
        let entry = self.cards.get_mut(card.index())?;
        let from = entry.location;
        if from != to {
            entry.location = to;
            self.counts[from.index()] -= 1;
            self.counts[to.index()] += 1;
        }
        Some(from)
    }

    /// Move every card in `from` to `to`, returning how many moved.
    pub fn move_all(&mut self, from: Location, to: Location) -> usize {
        let moving: Vec<_> = self.cards_in(from).collect();
        for &card in &moving {
            self.move_card(card, to);
        }
        moving.len()
    }

    /// Set a card's display coordinates. Returns false for an unknown card.
    pub fn set_position(&mut self, card: CardRef, x: i32, y: i32) -> bool {
        match self.cards.get_mut(card.index()) {
            Some(entry) => {
                entry.x = x;
                entry.y = y;
                true
            }
            None => false,
        }
    }

    /// Number of cards in a location.
    #[must_use]
    pub fn count(&self, location: Location) -> usize {
        usize::from(self.counts[location.index()])
    }

    /// Is a location empty?
    #[must_use]
    pub fn is_location_empty(&self, location: Location) -> bool {
        self.count(location) == 0
    }

    /// Cards in a location, in arena order.
    pub fn cards_in(&self, location: Location) -> impl Iterator<Item = CardRef> + '_ {
        self.iter()
            .filter(move |(_, c)| c.location == location)
            .map(|(r, _)| r)
    }

    /// Iterate over every (CardRef, &LocatedCard) in arena order.
    pub fn iter(&self) -> impl Iterator<Item = (CardRef, &LocatedCard)> {
        self.cards
            .iter()
            .enumerate()
            .map(|(i, c)| (CardRef(i as u8), c))
    }

    /// Find the reference of a specific card.
    #[must_use]
    pub fn find(&self, card: Card) -> Option<CardRef> {
        self.iter().find(|(_, c)| c.card == card).map(|(r, _)| r)
    }

    /// Count a location by scanning the arena, ignoring the cache.
    #[must_use]
    pub fn recount(&self, location: Location) -> usize {
        self.cards.iter().filter(|c| c.location == location).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "exceeds 52")]
    fn test_oversized_deck_rejected() {
        let mut deck = Card::standard_deck();
        deck.extend(Card::standard_deck());
        let _ = Partition::new(deck);
    }

    fn small_deck() -> Vec<Card> {
        vec![
            Card::new(Rank::Three, Suit::Spades),
            Card::new(Rank::Four, Suit::Hearts),
            Card::new(Rank::Five, Suit::Clubs),
        ]
    }

    #[test]
    fn test_new_all_in_draw_pile() {
        let partition = Partition::new(small_deck());

        assert_eq!(partition.len(), 3);
        assert_eq!(partition.count(Location::DrawPile), 3);
        assert!(partition.is_location_empty(Location::DiscardPile));
        assert_eq!(partition.location(CardRef(1)), Some(Location::DrawPile));
    }

    #[test]
    fn test_move_card_updates_counts() {
        let mut partition = Partition::new(small_deck());

        let old = partition.move_card(CardRef(0), Location::PlayerOneHand);

        assert_eq!(old, Some(Location::DrawPile));
        assert_eq!(partition.count(Location::DrawPile), 2);
        assert_eq!(partition.count(Location::PlayerOneHand), 1);
        assert_eq!(partition.recount(Location::PlayerOneHand), 1);
    }

    #[test]
    fn test_move_to_same_location_is_noop() {
        let mut partition = Partition::new(small_deck());

        partition.move_card(CardRef(2), Location::DrawPile);

        assert_eq!(partition.count(Location::DrawPile), 3);
    }

    #[test]
    fn test_move_unknown_card() {
        let mut partition = Partition::new(small_deck());
        assert_eq!(partition.move_card(CardRef(9), Location::DeadPile), None);
        assert_eq!(partition.count(Location::DeadPile), 0);
    }

    #[test]
    fn test_move_all() {
        let mut partition = Partition::new(small_deck());
        partition.move_card(CardRef(0), Location::DiscardPile);
        partition.move_card(CardRef(2), Location::DiscardPile);

        let moved = partition.move_all(Location::DiscardPile, Location::DeadPile);

        assert_eq!(moved, 2);
        assert_eq!(partition.count(Location::DeadPile), 2);
        assert_eq!(partition.count(Location::DiscardPile), 0);
    }

    #[test]
    fn test_cards_in_arena_order() {
        let mut partition = Partition::new(small_deck());
        partition.move_card(CardRef(2), Location::PlayerTwoHand);
        partition.move_card(CardRef(0), Location::PlayerTwoHand);

        let hand: Vec<_> = partition.cards_in(Location::PlayerTwoHand).collect();
        assert_eq!(hand, vec![CardRef(0), CardRef(2)]);
    }

    #[test]
    fn test_find_and_position() {
        let mut partition = Partition::new(small_deck());
        let four = Card::new(Rank::Four, Suit::Hearts);

        assert_eq!(partition.find(four), Some(CardRef(1)));
        assert_eq!(partition.find(Card::new(Rank::Ace, Suit::Hearts)), None);

        assert!(partition.set_position(CardRef(1), 40, 80));
        let located = partition.get(CardRef(1)).unwrap();
        assert_eq!((located.x, located.y), (40, 80));
        assert!(!partition.set_position(CardRef(42), 0, 0));
    }
}
