//! Property tests: invariants that hold across random operation sequences.

use palace_engine::{CardRef, GameState, Location, Pile, PlayerId, DECK_SIZE, HAND_SIZE};
use proptest::prelude::*;

/// One request a view layer might send. Card operands are indices into the
/// relevant pile, wrapped to its size.
#[derive(Clone, Debug)]
enum Op {
    Select(u8, usize),
    SelectPalace(u8, usize),
    Play(u8),
    PlayLower(u8, usize),
    TakeDiscard(u8),
    ChangePalace(u8),
    ConfirmPalace(u8),
}

fn op() -> impl Strategy<Value = Op> {
    let player = 0u8..2;
    prop_oneof![
        6 => (player.clone(), any::<usize>()).prop_map(|(p, i)| Op::Select(p, i)),
        2 => (player.clone(), any::<usize>()).prop_map(|(p, i)| Op::SelectPalace(p, i)),
        5 => player.clone().prop_map(Op::Play),
        2 => (player.clone(), any::<usize>()).prop_map(|(p, i)| Op::PlayLower(p, i)),
        1 => player.clone().prop_map(Op::TakeDiscard),
        1 => player.clone().prop_map(Op::ChangePalace),
        1 => player.prop_map(Op::ConfirmPalace),
    ]
}

/// The `index`-th card (wrapped) `player` holds, across all three piles.
fn held(state: &GameState, player: PlayerId, index: usize) -> Option<CardRef> {
    let cards: Vec<_> = state
        .cards()
        .filter(|(_, c)| c.location.is_held_by(player))
        .map(|(r, _)| r)
        .collect();
    (!cards.is_empty()).then(|| cards[index % cards.len()])
}

fn in_pile(state: &GameState, player: PlayerId, pile: Pile, index: usize) -> Option<CardRef> {
    let location = Location::owned(player, pile)?;
    let cards: Vec<_> = state.cards_in(location).collect();
    (!cards.is_empty()).then(|| cards[index % cards.len()])
}

fn apply(state: &mut GameState, op: &Op) {
    match *op {
        Op::Select(p, i) => {
            let player = PlayerId::new(p);
            if let Some(c) = held(state, player, i) {
                state.select_cards(player, c);
            }
        }
        Op::SelectPalace(p, i) => {
            let player = PlayerId::new(p);
            if let Some(c) = in_pile(state, player, Pile::Hand, i) {
                state.select_palace_cards(player, c);
            }
        }
        Op::Play(p) => {
            state.play_cards(PlayerId::new(p));
        }
        Op::PlayLower(p, i) => {
            let player = PlayerId::new(p);
            if let Some(c) = in_pile(state, player, Pile::LowerPalace, i) {
                state.play_lower_palace_card(player, c);
            }
        }
        Op::TakeDiscard(p) => {
            state.take_discard_pile(PlayerId::new(p));
        }
        Op::ChangePalace(p) => {
            state.change_palace(PlayerId::new(p));
        }
        Op::ConfirmPalace(p) => {
            state.confirm_palace(PlayerId::new(p));
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn prop_cards_are_conserved(seed in any::<u64>(), ops in prop::collection::vec(op(), 0..120)) {
        let mut state = GameState::new(seed);
        for op in &ops {
            apply(&mut state, op);

            let total: usize = Location::ALL.iter().map(|&l| state.count(l)).sum();
            prop_assert_eq!(total, DECK_SIZE);
            prop_assert_eq!(state.check_integrity(), Ok(()));
        }
    }

    #[test]
    fn prop_discard_stack_mirrors_pile(seed in any::<u64>(), ops in prop::collection::vec(op(), 0..120)) {
        let mut state = GameState::new(seed);
        for op in &ops {
            apply(&mut state, op);

            let mut on_pile: Vec<_> = state.cards_in(Location::DiscardPile).collect();
            let mut stacked: Vec<_> = state.discard().iter_top_down().map(|e| e.card_ref).collect();
            prop_assert_eq!(state.discard_top(), stacked.first().copied());
            on_pile.sort();
            stacked.sort();
            prop_assert_eq!(on_pile, stacked);
        }
    }

    #[test]
    fn prop_exchange_blocks_play(seed in any::<u64>(), ops in prop::collection::vec(op(), 0..120)) {
        let mut state = GameState::new(seed);
        for op in &ops {
            if state.is_changing_palace() {
                let mut probe = state.clone();
                for player in PlayerId::all() {
                    prop_assert!(!probe.play_cards(player));
                }
                prop_assert_eq!(&probe, &state);
            }
            apply(&mut state, op);
        }
    }

    #[test]
    fn prop_legality_is_deterministic(seed in any::<u64>(), ops in prop::collection::vec(op(), 0..80)) {
        let mut state = GameState::new(seed);
        for op in &ops {
            apply(&mut state, op);
        }

        let snapshot = state.clone();
        for (card, _) in snapshot.cards() {
            prop_assert_eq!(state.is_legal(card), state.is_legal(card));
            prop_assert_eq!(state.is_legal(card), snapshot.is_legal(card));
        }
        prop_assert_eq!(&state, &snapshot);
    }

    #[test]
    fn prop_play_replenishes_to_hand_size(seed in any::<u64>(), ops in prop::collection::vec(op(), 0..120)) {
        let mut state = GameState::new(seed);
        for op in &ops {
            let Op::Play(p) = *op else {
                apply(&mut state, op);
                continue;
            };
            let player = PlayerId::new(p);
            let hand = Location::owned(player, Pile::Hand).unwrap();
            let from_hand = state
                .selected_cards()
                .iter()
                .filter(|&&c| state.card(c).map(|l| l.location) == Some(hand))
                .count();
            let remaining = state.hand_size(player).saturating_sub(from_hand);
            let available = state.draw_pile_size();

            if state.play_cards(player) {
                let draws = HAND_SIZE.saturating_sub(remaining).min(available);
                prop_assert_eq!(state.hand_size(player), remaining + draws);
                prop_assert_eq!(state.draw_pile_size(), available - draws);
                prop_assert!(!state.can_change_palace(player));
            }
        }
    }

    #[test]
    fn prop_snapshot_round_trip(seed in any::<u64>(), ops in prop::collection::vec(op(), 0..60)) {
        let mut state = GameState::new(seed);
        for op in &ops {
            apply(&mut state, op);
        }

        let bytes = state.to_bytes().unwrap();
        prop_assert_eq!(GameState::from_bytes(&bytes).unwrap(), state);
    }
}
