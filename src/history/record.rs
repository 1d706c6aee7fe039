use crate::GameId;
use crate::Position;
use crate::UserId;
use crate::cards::board::Board;
use crate::cards::street::Street;
use crate::play::ActionResult;
use crate::play::RangeAction;
use crate::ranges::Range;

/// Which seat, and which user in it, a record belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Owner {
    pub seat: Position,
    pub user: UserId,
}

/// The things that can happen in a hand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Record {
    /// the seat's range after its action was resolved
    UserRange(Range),
    /// the partition as submitted, with the options it was made under
    RangeAction {
        action: RangeAction,
        is_check: bool,
        is_raise: bool,
    },
    /// the concrete action enacted
    ActionResult(ActionResult),
    /// community cards dealt at the start of a street
    Board { street: Street, board: Board },
    /// the seat on turn ran out of time
    Timeout,
}

impl Record {
    /// Ranges and partitions reveal a player's holdings.
    pub fn is_private(&self) -> bool {
        matches!(self, Self::UserRange(_) | Self::RangeAction { .. })
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::UserRange(range) => write!(f, "range   {}", range),
            Self::RangeAction { action, .. } => write!(f, "action  {}", action),
            Self::ActionResult(result) => write!(f, "result  {}", result),
            Self::Board { street, board } => write!(f, "{:<7} {}", street, board),
            Self::Timeout => write!(f, "timeout"),
        }
    }
}

/// One line of hand history.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry {
    pub game: GameId,
    pub order: u64,
    pub owner: Option<Owner>,
    pub record: Record,
}

impl Entry {
    /// Private records of other users stay hidden until the hand is over.
    pub fn is_visible_to(&self, viewer: UserId, running: bool) -> bool {
        match (&self.owner, self.record.is_private()) {
            (Some(owner), true) => !running || owner.user == viewer,
            _ => true,
        }
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.owner {
            Some(owner) => write!(f, "{:>3} seat {} | {}", self.order, owner.seat, self.record),
            None => write!(f, "{:>3}        | {}", self.order, self.record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(record: Record) -> Entry {
        Entry {
            game: 1,
            order: 0,
            owner: Some(Owner { seat: 0, user: 7 }),
            record,
        }
    }

    #[test]
    fn ranges_hidden_while_running() {
        let range = entry(Record::UserRange(Range::anything()));
        assert!(range.is_visible_to(7, true));
        assert!(!range.is_visible_to(8, true));
        assert!(range.is_visible_to(8, false));
    }

    #[test]
    fn results_are_public() {
        let result = entry(Record::ActionResult(ActionResult::Fold));
        assert!(result.is_visible_to(8, true));
        assert!(entry(Record::Timeout).is_visible_to(8, true));
    }
}
