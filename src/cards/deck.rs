use super::card::Card;
use super::hand::Hand;
use rand::Rng;

/// The undealt cards. Random selection is driven by a caller-provided `Rng`
/// so that seeded dealers stay reproducible.
#[derive(Debug, Clone, Copy)]
pub struct Deck(Hand);

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0
    }
}
impl From<Hand> for Deck {
    fn from(hand: Hand) -> Self {
        Self(hand)
    }
}

impl Deck {
    pub fn new() -> Self {
        Self(Hand::full())
    }

    /// A full deck minus every card in `excluded`.
    pub fn without(excluded: Hand) -> Self {
        Self(excluded.complement())
    }

    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// remove a specific card from the deck
    pub fn remove(&mut self, card: Card) {
        self.0.remove(card);
    }

    /// remove a random card from the deck
    pub fn draw<R: Rng>(&mut self, rng: &mut R) -> Option<Card> {
        let n = self.0.size();
        if n == 0 {
            return None;
        }
        let i = rng.random_range(0..n);
        let card = self.0.into_iter().nth(i)?;
        self.remove(card);
        Some(card)
    }

    /// remove `n` random cards at once. None if the deck runs dry.
    pub fn deal<R: Rng>(&mut self, n: usize, rng: &mut R) -> Option<Hand> {
        (0..n)
            .map(|_| self.draw(rng))
            .collect::<Option<Vec<Card>>>()
            .map(Hand::from)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
