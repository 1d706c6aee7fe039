use crate::Weight;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use rand::Rng;
use std::collections::BTreeMap;

/// A weighted set of two-card combos.
///
/// Weights are relative frequencies. A combo is either in the range with a
/// positive weight or absent; zero weights are never stored. Ranges are
/// values: every operation returns a new range.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Range(BTreeMap<Hole, Weight>);

impl Range {
    /// every combo, weight 1
    pub fn anything() -> Self {
        Hole::all().map(|hole| (hole, 1)).collect()
    }
    pub fn nothing() -> Self {
        Self::default()
    }
    /// Parses range notation, e.g. `"88-22,AJs-A2s,KTo+"`.
    pub fn parse(s: &str) -> crate::Result<Self> {
        super::notation::parse(s)
    }
    /// The canonical description. Equal ranges always describe identically.
    pub fn description(&self) -> String {
        super::notation::describe(self)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// number of distinct combos
    pub fn len(&self) -> usize {
        self.0.len()
    }
    /// sum of weights
    pub fn weight(&self) -> u64 {
        self.0.values().map(|w| *w as u64).sum()
    }
    pub fn weight_of(&self, hole: &Hole) -> Option<Weight> {
        self.0.get(hole).copied()
    }
    pub fn contains(&self, hole: &Hole) -> bool {
        self.0.contains_key(hole)
    }
    pub fn iter(&self) -> impl Iterator<Item = (&Hole, &Weight)> {
        self.0.iter()
    }
    pub fn holes(&self) -> impl Iterator<Item = Hole> + '_ {
        self.0.keys().copied()
    }

    /// Combos in either range. A combo in both keeps the larger weight.
    pub fn union(&self, other: &Self) -> Self {
        let mut union = self.0.clone();
        for (hole, weight) in other.iter() {
            let entry = union.entry(*hole).or_insert(*weight);
            *entry = (*entry).max(*weight);
        }
        Self(union)
    }
    /// Combos in both ranges, at the smaller of the two weights.
    pub fn intersect(&self, other: &Self) -> Self {
        self.iter()
            .filter_map(|(hole, w)| other.weight_of(hole).map(|v| (*hole, (*w).min(v))))
            .collect()
    }
    /// Drops every combo that uses a card from `cards`.
    pub fn without(&self, cards: Hand) -> Self {
        self.iter()
            .filter(|(hole, _)| !hole.collides(&cards))
            .map(|(hole, w)| (*hole, *w))
            .collect()
    }
    /// True if some combo is in both ranges.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.holes().any(|hole| other.contains(&hole))
    }
    /// True if some combo avoids every card of `cards`.
    pub fn survives(&self, cards: Hand) -> bool {
        self.holes().any(|hole| !hole.collides(&cards))
    }

    /// Draws one combo proportionally to its weight among the combos that
    /// avoid `excluded`. None if no combo survives.
    pub fn sample<R: Rng>(&self, excluded: Hand, rng: &mut R) -> Option<Hole> {
        let live = self
            .iter()
            .filter(|(hole, _)| !hole.collides(&excluded))
            .collect::<Vec<_>>();
        let total = live.iter().map(|(_, w)| **w as u64).sum::<u64>();
        if total == 0 {
            return None;
        }
        let mut pick = rng.random_range(0..total);
        for (hole, weight) in live {
            match pick.checked_sub(*weight as u64) {
                Some(rest) => pick = rest,
                None => return Some(*hole),
            }
        }
        None
    }
}

impl FromIterator<(Hole, Weight)> for Range {
    fn from_iter<I: IntoIterator<Item = (Hole, Weight)>>(iter: I) -> Self {
        Self(iter.into_iter().filter(|(_, w)| *w > 0).collect())
    }
}

impl From<Hole> for Range {
    fn from(hole: Hole) -> Self {
        std::iter::once((hole, 1)).collect()
    }
}

impl TryFrom<&str> for Range {
    type Error = crate::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}
impl TryFrom<String> for Range {
    type Error = crate::Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}
impl From<Range> for String {
    fn from(range: Range) -> Self {
        range.description()
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn anything_is_every_combo() {
        assert_eq!(Range::anything().len(), crate::N_COMBOS);
        assert_eq!(Range::anything().weight(), crate::N_COMBOS as u64);
        assert!(Range::nothing().is_empty());
    }

    #[test]
    fn board_removal() {
        let board = Hand::try_from("AsKdQh").unwrap();
        let range = Range::anything().without(board);
        assert_eq!(range.len(), 49 * 48 / 2);
        assert!(!range.survives(Hand::full()));
        assert!(range.holes().all(|hole| !hole.collides(&board)));
    }

    #[test]
    fn set_algebra() {
        let aces = Range::parse("AA").unwrap();
        let big = Range::parse("AA,KK(3)").unwrap();
        assert_eq!(aces.intersect(&big), aces);
        assert_eq!(aces.union(&big), big);
        assert!(aces.overlaps(&big));
        assert!(!aces.overlaps(&Range::parse("KK").unwrap()));
        assert_eq!(big.weight(), 6 + 18);
    }

    #[test]
    fn sampling_respects_exclusions() {
        let mut rng = SmallRng::seed_from_u64(42);
        let range = Range::parse("AA,KK").unwrap();
        let blocked = Hand::try_from("AsAhAdAc").unwrap();
        for _ in 0..64 {
            let hole = range.sample(blocked, &mut rng).unwrap();
            assert!(!hole.collides(&blocked));
        }
        let everything = Hand::try_from("AsAhAdAcKsKhKdKc").unwrap();
        assert_eq!(range.sample(everything, &mut rng), None);
    }
}
