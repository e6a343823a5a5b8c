//! Card catalog: suits, special cards, canonical names.
//!
//! The catalog is static and immutable. Each round builds its deck from it,
//! so every card identity exists exactly once per round.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::domain::{DomainError, ValidationKind};

/// Number of ranked values per suit (1..=14).
pub const SUIT_VALUES: u8 = 14;
/// Copies of each special card in the catalog.
pub const PIRATE_COUNT: u8 = 5;
pub const SIREN_COUNT: u8 = 2;
pub const ESCAPE_COUNT: u8 = 5;

/// Black outranks the other suits when no special card decides a trick.
pub const TRUMP_SUIT: Suit = Suit::Black;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Suit {
    Yellow,
    Green,
    Purple,
    Black,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Yellow, Suit::Green, Suit::Purple, Suit::Black];

    pub fn is_trump(self) -> bool {
        self == TRUMP_SUIT
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Suit::Yellow => "yellow",
            Suit::Green => "green",
            Suit::Purple => "purple",
            Suit::Black => "black",
        }
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum CardKind {
    Suited(Suit),
    Escape,
    Pirate,
    Siren,
    SkullKing,
}

/// A catalog entry. `value` is the rank within a suit; for specials it is
/// the 1-based copy index (always 1 for the skull king).
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Card {
    pub kind: CardKind,
    pub value: u8,
}

impl Card {
    pub fn suited(suit: Suit, value: u8) -> Self {
        Self {
            kind: CardKind::Suited(suit),
            value,
        }
    }

    /// The card's suit, if it is an ordinary suited card.
    pub fn suit(self) -> Option<Suit> {
        match self.kind {
            CardKind::Suited(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_special(self) -> bool {
        !matches!(self.kind, CardKind::Suited(_))
    }

    pub fn is_trump(self) -> bool {
        self.suit().is_some_and(Suit::is_trump)
    }
}

// Note: Ord on Card is only for stable hand sorting: kind order then value.
// Do not use for trick resolution, which depends on asked color and trump.
impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        match self.kind.cmp(&other.kind) {
            std::cmp::Ordering::Equal => self.value.cmp(&other.value),
            ord => ord,
        }
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            CardKind::Suited(suit) => write!(f, "{}_{}", suit.as_str(), self.value),
            CardKind::Escape => write!(f, "escape_{}", self.value),
            CardKind::Pirate => write!(f, "pirate_{}", self.value),
            CardKind::Siren => write!(f, "siren_{}", self.value),
            CardKind::SkullKing => write!(f, "skull_king"),
        }
    }
}

impl FromStr for Card {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse_err = || {
            DomainError::validation(ValidationKind::ParseCard, format!("unknown card name: {s}"))
        };

        if s == "skull_king" {
            return Ok(Card {
                kind: CardKind::SkullKing,
                value: 1,
            });
        }

        let (prefix, value) = s.rsplit_once('_').ok_or_else(parse_err)?;
        let value: u8 = value.parse().map_err(|_| parse_err())?;

        let (kind, max) = match prefix {
            "yellow" => (CardKind::Suited(Suit::Yellow), SUIT_VALUES),
            "green" => (CardKind::Suited(Suit::Green), SUIT_VALUES),
            "purple" => (CardKind::Suited(Suit::Purple), SUIT_VALUES),
            "black" => (CardKind::Suited(Suit::Black), SUIT_VALUES),
            "pirate" => (CardKind::Pirate, PIRATE_COUNT),
            "siren" => (CardKind::Siren, SIREN_COUNT),
            "escape" => (CardKind::Escape, ESCAPE_COUNT),
            _ => return Err(parse_err()),
        };

        if value == 0 || value > max {
            return Err(parse_err());
        }

        Ok(Card { kind, value })
    }
}

// Cards travel over the wire as their canonical names.
impl Serialize for Card {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Card {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|e: DomainError| D::Error::custom(e))
    }
}

static CATALOG: Lazy<Vec<Card>> = Lazy::new(|| {
    let mut cards = Vec::with_capacity(
        Suit::ALL.len() * SUIT_VALUES as usize
            + (PIRATE_COUNT + SIREN_COUNT + ESCAPE_COUNT + 1) as usize,
    );
    for suit in Suit::ALL {
        for value in 1..=SUIT_VALUES {
            cards.push(Card::suited(suit, value));
        }
    }
    for value in 1..=PIRATE_COUNT {
        cards.push(Card {
            kind: CardKind::Pirate,
            value,
        });
    }
    for value in 1..=SIREN_COUNT {
        cards.push(Card {
            kind: CardKind::Siren,
            value,
        });
    }
    cards.push(Card {
        kind: CardKind::SkullKing,
        value: 1,
    });
    for value in 1..=ESCAPE_COUNT {
        cards.push(Card {
            kind: CardKind::Escape,
            value,
        });
    }
    cards
});

/// The full static deck: 4 suits of 14, five pirates, two sirens, one skull
/// king, five escapes.
pub fn catalog() -> &'static [Card] {
    &CATALOG
}
