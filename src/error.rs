use crate::Chips;
use crate::Position;

/// Errors surfaced by the betting engine.
///
/// Validation failures (`NotOnTurn`, `InvalidPartition`, `InvalidRaiseTotal`,
/// `BadRange`) leave the game untouched and the caller is expected to
/// re-prompt. `IllegalTerminate` and `ChipsNotConserved` are defects: the
/// transition is aborted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("seat {0} is not on turn")]
    NotOnTurn(Position),

    #[error("invalid partition: {0}")]
    InvalidPartition(String),

    #[error("invalid raise total {total}, must be within [{min}, {max}]")]
    InvalidRaiseTotal { total: Chips, min: Chips, max: Chips },

    #[error("terminate is an internal signal and cannot be applied")]
    IllegalTerminate,

    #[error("chips not conserved: {before} before, {after} after")]
    ChipsNotConserved { before: Chips, after: Chips },

    #[error("situation has {expected} seats but {found} participants were given")]
    SeatMismatch { expected: usize, found: usize },

    #[error("invalid situation: {0}")]
    InvalidSituation(String),

    #[error("no conflict-free deal exists for these ranges")]
    NoLegalDeal,

    #[error("bad range: {0}")]
    BadRange(String),
}

pub type Result<T> = std::result::Result<T, Error>;
