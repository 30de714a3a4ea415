use pk_core::Chips;
use std::fmt::Display;
use std::fmt::Formatter;

/// A player decision. Bet/Raise carry the absolute target bet for the round,
/// not a delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fold,
    Check,
    Call,
    Bet(Chips),
    Raise(Chips),
    AllIn,
}

impl Action {
    pub fn is_aggressive(&self) -> bool {
        matches!(self, Action::Bet(_) | Action::Raise(_))
    }

    /// Short wire-facing label, matching the string-typed action field
    /// clients already speak.
    pub fn label(&self) -> &'static str {
        match self {
            Action::Fold => "fold",
            Action::Check => "check",
            Action::Call => "call",
            Action::Bet(_) => "bet",
            Action::Raise(_) => "raise",
            Action::AllIn => "all_in",
        }
    }

    pub fn amount(&self) -> Chips {
        match self {
            Action::Bet(a) | Action::Raise(a) => *a,
            _ => 0,
        }
    }

    /// Parses the wire's `{type, amount}` pair into an `Action`.
    pub fn from_label(label: &str, amount: Chips) -> Option<Action> {
        match label {
            "fold" => Some(Action::Fold),
            "check" => Some(Action::Check),
            "call" => Some(Action::Call),
            "bet" => Some(Action::Bet(amount)),
            "raise" => Some(Action::Raise(amount)),
            "all_in" | "allin" => Some(Action::AllIn),
            _ => None,
        }
    }
}

impl Display for Action {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Bet(a) | Action::Raise(a) => write!(f, "{} {}", self.label(), a),
            _ => write!(f, "{}", self.label()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_roundtrips_through_from_label() {
        for (a, amt) in [
            (Action::Fold, 0),
            (Action::Check, 0),
            (Action::Call, 0),
            (Action::Bet(40), 40),
            (Action::Raise(100), 100),
            (Action::AllIn, 0),
        ] {
            let parsed = Action::from_label(a.label(), amt).unwrap();
            assert_eq!(parsed, a);
        }
    }
}
