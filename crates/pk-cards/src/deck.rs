use crate::Card;
use crate::Suit;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// A 52-card deck with a `top` cursor: cards at indices `< top` have been
/// drawn, cards at `>= top` remain. `shuffle` permutes only the undrawn
/// region, so cards already in players' hands are never disturbed.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
    top: usize,
}

/// Failure returned by [`Deck::draw`] once all 52 cards are out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeckExhausted;

impl Deck {
    /// A deck with all 52 distinct cards in identity order and `top = 0`.
    pub fn new() -> Self {
        let mut cards = Vec::with_capacity(52);
        for suit in Suit::ALL {
            for rank in 2..=14 {
                cards.push(Card::new(suit, rank));
            }
        }
        Self { cards, top: 0 }
    }

    pub fn top(&self) -> usize {
        self.top
    }

    /// Performs `n` Fisher-Yates swaps within the undrawn region `top..52`,
    /// seeded from wall clock and the current hand id so repeated shuffles
    /// within a process never replay the same sequence.
    pub fn shuffle(&mut self, n: usize, hand_id: u64) {
        let seed = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0)
            ^ hand_id;
        let mut rng = SmallRng::seed_from_u64(seed);
        let lo = self.top;
        let hi = self.cards.len();
        if hi <= lo + 1 {
            return;
        }
        for _ in 0..n {
            let i = rng.random_range(lo..hi);
            let j = rng.random_range(lo..hi);
            self.cards.swap(i, j);
        }
    }

    /// Draws the card at `top` and advances the cursor.
    pub fn draw(&mut self) -> Result<Card, DeckExhausted> {
        if self.top >= self.cards.len() {
            return Err(DeckExhausted);
        }
        let card = self.cards[self.top];
        self.top += 1;
        Ok(card)
    }

    /// Returns the cursor to 0 and rebuilds the identity-ordered 52-card
    /// multiset, ready for the next shuffle.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_deck_has_52_distinct_cards() {
        let deck = Deck::new();
        assert_eq!(deck.cards.len(), 52);
        let mut seen = std::collections::HashSet::new();
        for c in &deck.cards {
            assert!(seen.insert(*c));
        }
    }

    #[test]
    fn draw_advances_top_and_exhausts_at_52() {
        let mut deck = Deck::new();
        for _ in 0..52 {
            assert!(deck.draw().is_ok());
        }
        assert_eq!(deck.draw(), Err(DeckExhausted));
    }

    #[test]
    fn reset_restores_fresh_identity_deck() {
        let mut deck = Deck::new();
        deck.shuffle(1000, 1);
        let _ = deck.draw();
        deck.reset();
        assert_eq!(deck.top(), 0);
        assert_eq!(deck.cards.len(), 52);
    }

    #[test]
    fn shuffle_does_not_touch_already_drawn_cards() {
        let mut deck = Deck::new();
        let drawn = deck.draw().unwrap();
        deck.shuffle(1000, 42);
        assert_eq!(deck.cards[0], drawn);
    }
}
