use crate::Chips;
use crate::ranges::Range;

/// A decision made with a whole range: every combo goes to exactly one of
/// the three branches. `raise_total` is the total contribution the
/// aggressive branch bets or raises to, 0 when that branch is empty.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RangeAction {
    pub fold: Range,
    pub passive: Range,
    pub aggressive: Range,
    pub raise_total: Chips,
}

impl RangeAction {
    pub fn new(fold: Range, passive: Range, aggressive: Range, raise_total: Chips) -> Self {
        Self {
            fold,
            passive,
            aggressive,
            raise_total,
        }
    }
    /// give up on every combo
    pub fn fold_all(range: &Range) -> Self {
        Self::new(range.clone(), Range::nothing(), Range::nothing(), 0)
    }
    /// check or call with every combo
    pub fn pass_all(range: &Range) -> Self {
        Self::new(Range::nothing(), range.clone(), Range::nothing(), 0)
    }
    /// bet or raise to `total` with every combo
    pub fn raise_all(range: &Range, total: Chips) -> Self {
        Self::new(Range::nothing(), Range::nothing(), range.clone(), total)
    }
    /// the branches paired with the outcome they lead to, most committal first
    pub fn branches(&self) -> [(Branch, &Range); 3] {
        [
            (Branch::Aggressive, &self.aggressive),
            (Branch::Passive, &self.passive),
            (Branch::Fold, &self.fold),
        ]
    }
    pub fn branch(&self, branch: Branch) -> &Range {
        match branch {
            Branch::Fold => &self.fold,
            Branch::Passive => &self.passive,
            Branch::Aggressive => &self.aggressive,
        }
    }
}

impl std::fmt::Display for RangeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "fold [{}] passive [{}] aggressive [{}]",
            self.fold, self.passive, self.aggressive
        )?;
        if self.raise_total > 0 {
            write!(f, " to {}", self.raise_total)?;
        }
        Ok(())
    }
}

/// One of the three parts of a range-action.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Branch {
    Fold,
    Passive,
    Aggressive,
}

/// The single concrete action enacted for a range-action.
///
/// `Terminate` is internal: it tells the engine the hand ends in a
/// range-based showdown and is never applied as a betting action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    Fold,
    Passive { call_cost: Chips },
    Aggressive { raise_total: Chips, is_raise: bool },
    Terminate,
}

impl ActionResult {
    pub fn is_terminate(&self) -> bool {
        matches!(self, Self::Terminate)
    }
}

impl std::fmt::Display for ActionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "FOLD"),
            Self::Passive { call_cost: 0 } => write!(f, "CHECK"),
            Self::Passive { call_cost } => write!(f, "CALL  {}", call_cost),
            Self::Aggressive { raise_total, is_raise: true } => write!(f, "RAISE {}", raise_total),
            Self::Aggressive { raise_total, is_raise: false } => write!(f, "BET   {}", raise_total),
            Self::Terminate => write!(f, "TERMINATE"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(ActionResult::Passive { call_cost: 0 }.to_string(), "CHECK");
        assert_eq!(ActionResult::Passive { call_cost: 4 }.to_string(), "CALL  4");
        let raise = ActionResult::Aggressive { raise_total: 6, is_raise: true };
        assert_eq!(raise.to_string(), "RAISE 6");
        assert!(ActionResult::Terminate.is_terminate());
    }

    #[test]
    fn whole_range_constructors() {
        let range = Range::parse("AA,KK").unwrap();
        let action = RangeAction::raise_all(&range, 10);
        assert_eq!(action.branch(Branch::Aggressive), &range);
        assert!(action.fold.is_empty() && action.passive.is_empty());
        assert_eq!(RangeAction::fold_all(&range).fold, range);
    }
}
