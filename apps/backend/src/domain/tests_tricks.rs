use crate::domain::cards::Card;
use crate::domain::state::{RoundPhase, RoundState, Seat, TrickState};
use crate::domain::tricks::{is_legal_turn, resolve_trick_winner};
use crate::errors::domain::{DomainError, InvariantKind};

fn card(token: &str) -> Card {
    token.parse().expect("hardcoded valid card token")
}

fn plays(tokens: &[(Seat, &str)]) -> Vec<(Seat, Card)> {
    tokens.iter().map(|(s, t)| (*s, card(t))).collect()
}

#[test]
fn skull_king_beats_suits_and_pirates() {
    let trick = plays(&[
        (0, "green_14"),
        (1, "skull_king"),
        (2, "pirate_1"),
        (3, "black_14"),
    ]);
    assert_eq!(resolve_trick_winner(&trick, 4).unwrap(), 1);
}

#[test]
fn earliest_siren_takes_the_skull_king() {
    // Leader-first order P1..P4 (seats 0..3): skull king by seat 1, siren by
    // seat 3. The siren wins even though it was played later.
    let trick = plays(&[
        (0, "green_3"),
        (1, "skull_king"),
        (2, "yellow_9"),
        (3, "siren_1"),
    ]);
    assert_eq!(resolve_trick_winner(&trick, 4).unwrap(), 3);
}

#[test]
fn first_siren_wins_over_a_later_siren() {
    let trick = plays(&[
        (0, "siren_2"),
        (1, "skull_king"),
        (2, "siren_1"),
        (3, "green_3"),
    ]);
    assert_eq!(resolve_trick_winner(&trick, 4).unwrap(), 0);
}

#[test]
fn siren_without_skull_king_does_not_win() {
    // No skull king: sirens have no prey, ordinary rules apply.
    let trick = plays(&[(0, "green_3"), (1, "siren_1"), (2, "green_7")]);
    assert_eq!(resolve_trick_winner(&trick, 3).unwrap(), 2);
}

#[test]
fn earliest_pirate_wins_without_skull_king() {
    let trick = plays(&[
        (0, "yellow_14"),
        (1, "pirate_4"),
        (2, "pirate_1"),
        (3, "black_14"),
    ]);
    assert_eq!(resolve_trick_winner(&trick, 4).unwrap(), 1);
}

#[test]
fn highest_of_asked_color_wins() {
    let trick = plays(&[
        (0, "green_3"),
        (1, "green_7"),
        (2, "yellow_14"),
        (3, "green_5"),
    ]);
    // Asked color is green; yellow 14 does not compete.
    assert_eq!(resolve_trick_winner(&trick, 4).unwrap(), 1);
}

#[test]
fn trump_beats_asked_color_regardless_of_value() {
    let trick = plays(&[(0, "green_3"), (1, "green_7"), (2, "black_2")]);
    assert_eq!(resolve_trick_winner(&trick, 3).unwrap(), 2);
}

#[test]
fn highest_trump_wins_among_several() {
    let trick = plays(&[
        (0, "green_3"),
        (1, "black_2"),
        (2, "black_9"),
        (3, "green_14"),
    ]);
    assert_eq!(resolve_trick_winner(&trick, 4).unwrap(), 2);
}

#[test]
fn escape_sets_no_asked_color() {
    // First suited card is seat 1's purple; seat 0's escape does not lead.
    let trick = plays(&[(0, "escape_1"), (1, "purple_4"), (2, "purple_9")]);
    assert_eq!(resolve_trick_winner(&trick, 3).unwrap(), 2);
}

#[test]
fn all_escapes_fall_to_the_leader() {
    let trick = plays(&[(2, "escape_1"), (0, "escape_2"), (1, "escape_3")]);
    assert_eq!(resolve_trick_winner(&trick, 3).unwrap(), 2);
}

#[test]
fn incomplete_trick_is_an_invariant_violation() {
    let trick = plays(&[(0, "green_3"), (1, "green_7")]);
    let err = resolve_trick_winner(&trick, 4).unwrap_err();
    assert!(matches!(
        err,
        DomainError::Invariant(InvariantKind::IncompleteTrick, _)
    ));
}

#[test]
fn resolution_is_deterministic() {
    let trick = plays(&[
        (0, "green_3"),
        (1, "pirate_2"),
        (2, "siren_1"),
        (3, "skull_king"),
    ]);
    let first = resolve_trick_winner(&trick, 4).unwrap();
    for _ in 0..10 {
        assert_eq!(resolve_trick_winner(&trick, 4).unwrap(), first);
    }
}

fn playing_round(player_count: usize) -> RoundState {
    let mut round = RoundState::new(1, player_count);
    round.phase = RoundPhase::Playing;
    round.trick = Some(TrickState::default());
    round
}

#[test]
fn only_the_leader_may_open_a_trick() {
    let round = playing_round(4);
    let ordered = vec![2, 3, 0, 1];
    for seat in 0..4u8 {
        assert_eq!(is_legal_turn(&round, &ordered, seat), seat == 2);
    }
}

#[test]
fn exactly_one_seat_is_legal_mid_trick() {
    let mut round = playing_round(4);
    let ordered = vec![2, 3, 0, 1];
    round
        .trick
        .as_mut()
        .unwrap()
        .plays
        .push((2, card("green_3")));
    for seat in 0..4u8 {
        assert_eq!(is_legal_turn(&round, &ordered, seat), seat == 3);
    }
}

#[test]
fn a_seat_that_already_played_is_never_legal() {
    let mut round = playing_round(3);
    let ordered = vec![0, 1, 2];
    {
        let trick = round.trick.as_mut().unwrap();
        trick.plays.push((0, card("green_3")));
        trick.plays.push((1, card("green_7")));
    }
    assert!(!is_legal_turn(&round, &ordered, 0));
    assert!(!is_legal_turn(&round, &ordered, 1));
    assert!(is_legal_turn(&round, &ordered, 2));
}

#[test]
fn no_trick_means_no_legal_turn() {
    let mut round = RoundState::new(1, 3);
    round.phase = RoundPhase::Betting;
    assert!(!is_legal_turn(&round, &[0, 1, 2], 0));
}
