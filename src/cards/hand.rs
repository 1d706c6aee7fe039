use super::card::Card;

/// An unordered set of cards stored as a 52-bit mask.
///
/// Each bit is one card in [`Card`] byte order. Set algebra is plain bitwise
/// arithmetic, which is what board removal and conflict checks lean on.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u64", into = "u64")
)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    /// All 52 cards.
    pub const fn full() -> Self {
        Self(Self::mask())
    }
    /// Disjoint union. Panics in debug builds if the sets overlap.
    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(lhs.0 & rhs.0 == 0, "overlapping {} and {}", lhs, rhs);
        Self(lhs.0 | rhs.0)
    }
    pub fn or(lhs: Self, rhs: Self) -> Self {
        Self(lhs.0 | rhs.0)
    }
    pub fn and(lhs: Self, rhs: Self) -> Self {
        Self(lhs.0 & rhs.0)
    }
    /// Cards of `lhs` that are not in `rhs`.
    pub fn minus(lhs: Self, rhs: Self) -> Self {
        Self(lhs.0 & !rhs.0)
    }
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    /// True if the two sets share at least one card.
    pub fn intersects(&self, other: &Self) -> bool {
        self.0 & other.0 != 0
    }
    pub fn insert(&mut self, card: Card) {
        self.0 |= u64::from(card);
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
    const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
}

/// we can empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_empty() {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to permutation, this always comes out sorted)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        cards.into_iter().map(Hand::from).fold(Hand::empty(), Hand::or)
    }
}

/// str parsing, whitespace optional: "AsKd" or "As Kd"
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars = s.replace(char::is_whitespace, "").chars().collect::<Vec<_>>();
        if chars.len() % 2 != 0 {
            return Err(format!("'{}' is not a sequence of cards", s));
        }
        chars
            .chunks(2)
            .map(|pair| pair.iter().collect::<String>())
            .map(|pair| Card::try_from(pair.as_str()))
            .collect::<Result<Vec<Card>, _>>()
            .map(Hand::from)
    }
}

impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in *self {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("Jc Ts 2c Js").unwrap().into_iter();
        assert_eq!(iter.next(), Card::try_from("2c").ok());
        assert_eq!(iter.next(), Card::try_from("Ts").ok());
        assert_eq!(iter.next(), Card::try_from("Jc").ok());
        assert_eq!(iter.next(), Card::try_from("Js").ok());
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn set_algebra() {
        let a = Hand::try_from("AsKs").unwrap();
        let b = Hand::try_from("KsQs").unwrap();
        assert!(a.intersects(&b));
        assert_eq!(Hand::and(a, b).size(), 1);
        assert_eq!(Hand::or(a, b).size(), 3);
        assert_eq!(Hand::minus(a, b), Hand::try_from("As").unwrap());
        assert_eq!(Hand::full().size(), 52);
        assert_eq!(a.complement().size(), 50);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Hand::try_from("AsK").is_err());
        assert!(Hand::try_from("Zz").is_err());
        assert_eq!(Hand::try_from(""), Ok(Hand::empty()));
    }
}
