use std::fmt::Display;
use std::fmt::Formatter;

/// The betting-round phase of a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BettingRound {
    Preflop,
    Flop,
    Turn,
    River,
    Showdown,
    Complete,
}

impl BettingRound {
    /// Wire representation: these remain strings on the wire so clients are
    /// unaffected by the internal enum.
    pub fn as_str(&self) -> &'static str {
        match self {
            BettingRound::Preflop => "preflop",
            BettingRound::Flop => "flop",
            BettingRound::Turn => "turn",
            BettingRound::River => "river",
            BettingRound::Showdown => "showdown",
            BettingRound::Complete => "complete",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "preflop" => Some(BettingRound::Preflop),
            "flop" => Some(BettingRound::Flop),
            "turn" => Some(BettingRound::Turn),
            "river" => Some(BettingRound::River),
            "showdown" => Some(BettingRound::Showdown),
            "complete" => Some(BettingRound::Complete),
            _ => None,
        }
    }
}

impl Display for BettingRound {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
