use super::card::Card;
use super::hand::Hand;
use super::street::Street;

/// Community cards, between zero and five of them.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Hand", into = "Hand")
)]
pub struct Board(Hand);

impl Board {
    pub const fn empty() -> Self {
        Self(Hand::empty())
    }
    pub fn size(&self) -> usize {
        self.0.size()
    }
    /// Number of cards still to come before `street` is fully dealt.
    pub fn missing(&self, street: Street) -> usize {
        street.n_board().saturating_sub(self.size())
    }
    /// Adds freshly dealt cards. They must not already be on the board.
    pub fn add(&mut self, cards: Hand) {
        self.0 = Hand::add(self.0, cards);
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0.contains(card)
    }
}

impl From<Board> for Hand {
    fn from(board: Board) -> Self {
        board.0
    }
}

impl TryFrom<Hand> for Board {
    type Error = String;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            0 | 3 | 4 | 5 => Ok(Self(hand)),
            n => Err(format!("a board cannot hold {} cards", n)),
        }
    }
}

impl TryFrom<&str> for Board {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Hand::try_from(s)?)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.size() {
            0 => write!(f, "-"),
            _ => write!(f, "{}", self.0),
        }
    }
}
