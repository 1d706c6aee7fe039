use super::rank::Rank;
use super::suit::Suit;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` with `rank * 4 + suit`, so
/// cards sort first by rank, then by suit within each rank. The higher card of
/// a combo is therefore simply the larger byte.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card(u8);

impl Card {
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// All 52 cards, deuce of clubs first.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..52u8).map(Self)
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << c.0
    }
}

/// str isomorphism, e.g. "As" or "Tc"
impl TryFrom<&str> for Card {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(r), Some(s), None) => Ok(Self::from((Rank::try_from(r)?, Suit::try_from(s)?))),
            _ => Err(format!("card '{}' must be 2 characters", s)),
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bijective_rank_suit() {
        for card in Card::all() {
            assert_eq!(card, Card::from((card.rank(), card.suit())));
        }
    }

    #[test]
    fn bijective_str() {
        for card in Card::all() {
            assert_eq!(Ok(card), Card::try_from(card.to_string().as_str()));
        }
    }

    #[test]
    fn ordering_is_rank_major() {
        let ace = Card::try_from("Ac").unwrap();
        let king = Card::try_from("Ks").unwrap();
        assert!(ace > king);
        assert!(Card::try_from("Xs").is_err());
        assert!(Card::try_from("Asd").is_err());
    }
}
