use proptest::prelude::*;

use crate::domain::cards::{catalog, Card, CardKind};
use crate::domain::state::{RoundPhase, RoundState, Seat, TrickState};
use crate::domain::tricks::{is_legal_turn, resolve_trick_winner};
use crate::domain::turn_order::ordered_seats;

/// A complete trick: 2-7 distinct catalog cards played in rotation order
/// from an arbitrary leader.
fn complete_trick() -> impl Strategy<Value = Vec<(Seat, Card)>> {
    (2usize..=7).prop_flat_map(|count| {
        (
            proptest::sample::subsequence(catalog().to_vec(), count).prop_shuffle(),
            0..count as Seat,
        )
            .prop_map(move |(cards, leader)| {
                ordered_seats(leader, count).into_iter().zip(cards).collect()
            })
    })
}

proptest! {
    // The skull-king property assumes a rare deal (~5% of draws), so it
    // needs a far larger reject budget than the default 1024.
    #![proptest_config(ProptestConfig {
        max_global_rejects: 65536,
        ..ProptestConfig::default()
    })]

    #[test]
    fn winner_is_always_a_participating_seat(trick in complete_trick()) {
        let winner = resolve_trick_winner(&trick, trick.len()).unwrap();
        prop_assert!(trick.iter().any(|(seat, _)| *seat == winner));
    }

    #[test]
    fn resolution_is_a_pure_function(trick in complete_trick()) {
        let first = resolve_trick_winner(&trick, trick.len()).unwrap();
        let second = resolve_trick_winner(&trick, trick.len()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn skull_king_wins_unless_a_siren_is_present(trick in complete_trick()) {
        let skull_king = trick
            .iter()
            .find(|(_, c)| c.kind == CardKind::SkullKing)
            .map(|(seat, _)| *seat);
        let has_siren = trick.iter().any(|(_, c)| c.kind == CardKind::Siren);
        prop_assume!(skull_king.is_some() && !has_siren);

        let winner = resolve_trick_winner(&trick, trick.len()).unwrap();
        prop_assert_eq!(Some(winner), skull_king);
    }

    #[test]
    fn truncated_tricks_never_resolve(trick in complete_trick()) {
        prop_assume!(trick.len() > 2);
        let partial = &trick[..trick.len() - 1];
        prop_assert!(resolve_trick_winner(partial, trick.len()).is_err());
    }

    #[test]
    fn exactly_one_seat_is_legal_at_every_stage(trick in complete_trick()) {
        let count = trick.len();
        let leader = trick[0].0;
        let ordered = ordered_seats(leader, count);

        let mut round = RoundState::new(1, count);
        round.phase = RoundPhase::Playing;
        round.trick = Some(TrickState::default());

        for step in 0..count {
            let legal: Vec<Seat> = (0..count as Seat)
                .filter(|seat| is_legal_turn(&round, &ordered, *seat))
                .collect();
            prop_assert_eq!(&legal, &vec![ordered[step]]);

            let play = trick[step];
            round.trick.as_mut().unwrap().plays.push(play);
        }

        // A finished trick admits no further plays.
        for seat in 0..count as Seat {
            prop_assert!(!is_legal_turn(&round, &ordered, seat));
        }
    }
}
