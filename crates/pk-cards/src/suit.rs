use std::fmt::Display;
use std::fmt::Formatter;

/// One of the four suits. Ordered arbitrarily; only used for enumeration and
/// display, never for hand strength (suit has no ranking in hold'em).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Suit {
    Spades,
    Hearts,
    Diamonds,
    Clubs,
}

impl Suit {
    pub const ALL: [Suit; 4] = [Suit::Spades, Suit::Hearts, Suit::Diamonds, Suit::Clubs];

    /// Index used by the wire card encoding (`suit*13 + rank-2`). 1-based so
    /// the encoded range is 13..=64, matching the wire contract.
    pub fn index(&self) -> i32 {
        match self {
            Suit::Spades => 1,
            Suit::Hearts => 2,
            Suit::Diamonds => 3,
            Suit::Clubs => 4,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Suit::Spades => '♠',
            Suit::Hearts => '♥',
            Suit::Diamonds => '♦',
            Suit::Clubs => '♣',
        }
    }
}

impl Display for Suit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl TryFrom<i32> for Suit {
    type Error = ();
    fn try_from(i: i32) -> Result<Self, Self::Error> {
        match i {
            1 => Ok(Suit::Spades),
            2 => Ok(Suit::Hearts),
            3 => Ok(Suit::Diamonds),
            4 => Ok(Suit::Clubs),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_roundtrips() {
        for s in Suit::ALL {
            assert_eq!(Suit::try_from(s.index()), Ok(s));
        }
    }
}
