use crate::Suit;
use std::fmt::Display;
use std::fmt::Formatter;

/// An immutable playing card. Ranks run 2..=14 with 14 meaning Ace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    suit: Suit,
    rank: i32,
}

impl Card {
    pub fn new(suit: Suit, rank: i32) -> Self {
        debug_assert!((2..=14).contains(&rank), "rank out of range: {rank}");
        Self { suit, rank }
    }

    pub fn suit(&self) -> Suit {
        self.suit
    }

    pub fn rank(&self) -> i32 {
        self.rank
    }

    /// Wire encoding: `suit*13 + (rank-2)`, range 13..=64. Hidden cards are
    /// encoded as -1 by the caller, never by `Card` itself.
    pub fn wire_index(&self) -> i32 {
        self.suit.index() * 13 + (self.rank - 2)
    }

    pub fn from_wire_index(i: i32) -> Option<Self> {
        if !(13..=64).contains(&i) {
            return None;
        }
        // i = suit*13 + (rank-2), rank-2 in 0..=12, suit in 1..=4.
        let offset = i - 13;
        let suit_idx = offset / 13 + 1;
        let rank = offset % 13 + 2;
        let suit = Suit::try_from(suit_idx).ok()?;
        Some(Card::new(suit, rank))
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let face = match self.rank {
            11 => "J".to_string(),
            12 => "Q".to_string(),
            13 => "K".to_string(),
            14 => "A".to_string(),
            r => r.to_string(),
        };
        write!(f, "{}{}", face, self.suit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_index_roundtrips_every_card() {
        for suit in Suit::ALL {
            for rank in 2..=14 {
                let card = Card::new(suit, rank);
                let back = Card::from_wire_index(card.wire_index()).unwrap();
                assert_eq!(card, back);
            }
        }
    }

    #[test]
    fn wire_index_range_is_13_to_64() {
        for suit in Suit::ALL {
            for rank in 2..=14 {
                let idx = Card::new(suit, rank).wire_index();
                assert!((13..=64).contains(&idx));
            }
        }
    }
}
