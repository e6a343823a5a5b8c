use std::collections::HashSet;

use crate::domain::cards::{catalog, Card, CardKind, Suit, TRUMP_SUIT};
use crate::errors::domain::{DomainError, ValidationKind};

#[test]
fn catalog_holds_sixty_nine_distinct_cards() {
    let cards = catalog();
    assert_eq!(cards.len(), 69);
    let names: HashSet<String> = cards.iter().map(Card::to_string).collect();
    assert_eq!(names.len(), cards.len());
}

#[test]
fn catalog_composition_matches_the_deck() {
    let count = |pred: fn(&Card) -> bool| catalog().iter().filter(|c| pred(c)).count();
    assert_eq!(count(|c| c.suit().is_some()), 56);
    assert_eq!(count(|c| c.kind == CardKind::Pirate), 5);
    assert_eq!(count(|c| c.kind == CardKind::Siren), 2);
    assert_eq!(count(|c| c.kind == CardKind::SkullKing), 1);
    assert_eq!(count(|c| c.kind == CardKind::Escape), 5);
}

#[test]
fn names_round_trip_through_parsing() {
    for card in catalog() {
        let parsed: Card = card.to_string().parse().unwrap();
        assert_eq!(parsed, *card);
    }
}

#[test]
fn well_known_names_parse() {
    let sk: Card = "skull_king".parse().unwrap();
    assert_eq!(sk.kind, CardKind::SkullKing);

    let green: Card = "green_7".parse().unwrap();
    assert_eq!(green, Card::suited(Suit::Green, 7));

    let pirate: Card = "pirate_3".parse().unwrap();
    assert_eq!(pirate.kind, CardKind::Pirate);
    assert_eq!(pirate.value, 3);
}

#[test]
fn malformed_names_are_rejected() {
    for bad in [
        "", "green", "green_0", "green_15", "green_x", "pirate_6", "siren_3", "escape_0",
        "skull_king_2", "red_4", "GREEN_7",
    ] {
        let err = bad.parse::<Card>().unwrap_err();
        assert!(
            matches!(err, DomainError::Validation(ValidationKind::ParseCard, _)),
            "{bad} should not parse"
        );
    }
}

#[test]
fn trump_is_black_and_only_black() {
    assert_eq!(TRUMP_SUIT, Suit::Black);
    assert!(Card::suited(Suit::Black, 2).is_trump());
    assert!(!Card::suited(Suit::Green, 14).is_trump());
    assert!(!"pirate_1".parse::<Card>().unwrap().is_trump());
}

#[test]
fn serde_uses_canonical_names() {
    let card = Card::suited(Suit::Purple, 11);
    let json = serde_json::to_string(&card).unwrap();
    assert_eq!(json, "\"purple_11\"");
    let back: Card = serde_json::from_str(&json).unwrap();
    assert_eq!(back, card);

    assert!(serde_json::from_str::<Card>("\"purple_99\"").is_err());
}

#[test]
fn ordering_groups_by_kind_then_value() {
    let mut hand = vec![
        "pirate_2".parse::<Card>().unwrap(),
        "yellow_9".parse().unwrap(),
        "yellow_2".parse().unwrap(),
        "escape_1".parse().unwrap(),
        "black_5".parse().unwrap(),
    ];
    hand.sort();
    let names: Vec<String> = hand.iter().map(Card::to_string).collect();
    assert_eq!(
        names,
        ["yellow_2", "yellow_9", "black_5", "escape_1", "pirate_2"]
    );
}
