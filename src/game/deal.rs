//! Dealing a shuffled deck.
//!
//! Slots are assigned by arena index, so the deal is a pure function of
//! the shuffled order.

use crate::cards::CardRef;
use crate::core::{DealMode, PlayerId};
use crate::zones::{Location, Partition, Pile};

/// Deal every card of a freshly shuffled partition. Cards that receive no
/// slot stay in the draw pile.
pub fn deal(partition: &mut Partition, mode: DealMode) {
    for index in 0..partition.len() {
        let slot = match mode {
            DealMode::Standard => standard_slot(index),
            DealMode::PlayerOneLowerPalace => lower_palace_slot(index),
        };
        if let Some(location) = slot {
            partition.move_card(CardRef(index as u8), location);
        }
    }
}

/// Indices 0-9 go to the hands, 10-15 to the lower palaces and 16-21 to
/// the upper palaces, even indices to player one and odd to player two.
fn standard_slot(index: usize) -> Option<Location> {
    let pile = match index {
        0..=9 => Pile::Hand,
        10..=15 => Pile::LowerPalace,
        16..=21 => Pile::UpperPalace,
        _ => return None,
    };
    let player = if index % 2 == 0 { PlayerId::ONE } else { PlayerId::TWO };
    Location::owned(player, pile)
}

fn lower_palace_slot(index: usize) -> Option<Location> {
    let location = match index {
        0..=2 => Location::PlayerOneLowerPalace,
        3..=5 => Location::PlayerTwoLowerPalace,
        6..=8 => Location::PlayerTwoUpperPalace,
        _ => Location::PlayerTwoHand,
    };
    Some(location)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Card;

    fn dealt(mode: DealMode) -> Partition {
        let mut partition = Partition::new(Card::standard_deck());
        deal(&mut partition, mode);
        partition
    }

    #[test]
    fn test_standard_deal_counts() {
        let partition = dealt(DealMode::Standard);

        assert_eq!(partition.count(Location::PlayerOneHand), 5);
        assert_eq!(partition.count(Location::PlayerTwoHand), 5);
        assert_eq!(partition.count(Location::PlayerOneLowerPalace), 3);
        assert_eq!(partition.count(Location::PlayerTwoLowerPalace), 3);
        assert_eq!(partition.count(Location::PlayerOneUpperPalace), 3);
        assert_eq!(partition.count(Location::PlayerTwoUpperPalace), 3);
        assert_eq!(partition.count(Location::DrawPile), 30);
    }

    #[test]
    fn test_standard_deal_slots() {
        let partition = dealt(DealMode::Standard);

        assert_eq!(partition.location(CardRef(0)), Some(Location::PlayerOneHand));
        assert_eq!(partition.location(CardRef(9)), Some(Location::PlayerTwoHand));
        assert_eq!(partition.location(CardRef(10)), Some(Location::PlayerOneLowerPalace));
        assert_eq!(partition.location(CardRef(15)), Some(Location::PlayerTwoLowerPalace));
        assert_eq!(partition.location(CardRef(16)), Some(Location::PlayerOneUpperPalace));
        assert_eq!(partition.location(CardRef(21)), Some(Location::PlayerTwoUpperPalace));
        assert_eq!(partition.location(CardRef(22)), Some(Location::DrawPile));
        assert_eq!(partition.location(CardRef(51)), Some(Location::DrawPile));
    }

    #[test]
    fn test_lower_palace_deal() {
        let partition = dealt(DealMode::PlayerOneLowerPalace);

        assert_eq!(partition.count(Location::PlayerOneLowerPalace), 3);
        assert_eq!(partition.count(Location::PlayerOneHand), 0);
        assert_eq!(partition.count(Location::PlayerOneUpperPalace), 0);
        assert_eq!(partition.count(Location::PlayerTwoLowerPalace), 3);
        assert_eq!(partition.count(Location::PlayerTwoUpperPalace), 3);
        assert_eq!(partition.count(Location::PlayerTwoHand), 43);
        assert_eq!(partition.count(Location::DrawPile), 0);
    }
}
