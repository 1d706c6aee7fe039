use super::card::Card;
use super::hand::Hand;
use super::rank::Rank;

/// Two private cards. Always exactly two distinct cards.
///
/// Ordering falls out of the underlying bit mask, which is stable but not a
/// strength order; ranges that need strength order sort by [`Hole::class`].
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Hand", into = "Hand")
)]
pub struct Hole(Hand);

impl Hole {
    pub fn high(&self) -> Card {
        self.cards().1
    }
    pub fn low(&self) -> Card {
        self.cards().0
    }
    pub fn is_pair(&self) -> bool {
        self.high().rank() == self.low().rank()
    }
    pub fn is_suited(&self) -> bool {
        self.high().suit() == self.low().suit()
    }
    /// (high rank, low rank, suited) identifies the strategic class of the
    /// combo, e.g. AKs or 72o. Pairs are never suited.
    pub fn class(&self) -> (Rank, Rank, bool) {
        (self.high().rank(), self.low().rank(), self.is_suited())
    }
    /// True if either card of the combo is in `hand`.
    pub fn collides(&self, hand: &Hand) -> bool {
        self.0.intersects(hand)
    }
    /// All 1,326 two-card combos.
    pub fn all() -> impl Iterator<Item = Self> {
        Card::all().flat_map(|hi| {
            Card::all()
                .take_while(move |lo| *lo < hi)
                .map(move |lo| Self::from((hi, lo)))
        })
    }
    fn cards(&self) -> (Card, Card) {
        let mut iter = self.0;
        match (iter.next(), iter.next()) {
            (Some(lo), Some(hi)) => (lo, hi),
            _ => unreachable!("hole always holds two cards"),
        }
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        assert!(a != b, "hole cards must differ");
        Self(Hand::add(Hand::from(a), Hand::from(b)))
    }
}

impl TryFrom<Hand> for Hole {
    type Error = String;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            2 => Ok(Self(hand)),
            n => Err(format!("hole needs 2 cards, got {}", n)),
        }
    }
}

/// "AsKd"; order of the two cards is irrelevant
impl TryFrom<&str> for Hole {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let hand = Hand::try_from(s)?;
        if s.trim().len() != 4 {
            return Err(format!("'{}' is not a two-card combo", s));
        }
        Self::try_from(hand)
    }
}

/// high card first, e.g. "AsKd"
impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.high(), self.low())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerates_every_combo() {
        assert_eq!(Hole::all().count(), crate::N_COMBOS);
        assert_eq!(Hole::all().filter(|h| h.is_pair()).count(), 78);
        assert_eq!(Hole::all().filter(|h| h.is_suited()).count(), 312);
    }

    #[test]
    fn high_card_prints_first() {
        let hole = Hole::try_from("2cAh").unwrap();
        assert_eq!(hole.to_string(), "Ah2c");
        assert_eq!(hole, Hole::try_from("Ah2c").unwrap());
    }

    #[cfg(feature = "server")]
    #[test]
    fn snapshots_must_hold_two_cards() {
        let hole = Hole::try_from("AsKd").unwrap();
        let json = serde_json::to_string(&hole).unwrap();
        assert_eq!(serde_json::from_str::<Hole>(&json).unwrap(), hole);
        assert!(serde_json::from_str::<Hole>("1").is_err());
        assert!(serde_json::from_str::<Hole>("7").is_err());
    }

    #[test]
    fn rejects_duplicates() {
        assert!(Hole::try_from("AhAh").is_err());
        assert!(Hole::try_from("AhKhQh").is_err());
    }
}
