use super::action::ActionResult;
use super::dealer::Dealer;
use super::state::GameState;
use crate::Position;
use crate::cards::hand::Hand;
use crate::history::Entry;
use crate::history::Record;
use crate::history::Recorder;

/// The outcome of an accepted step: the history it produced and the state
/// that follows.
#[derive(Debug, Clone, PartialEq)]
pub struct StateTransition {
    pub records: Vec<Entry>,
    pub next: GameState,
}

impl StateTransition {
    /// Appends every record in order, then yields the next state.
    pub fn commit<R>(self, recorder: &mut R) -> anyhow::Result<GameState>
    where
        R: Recorder + ?Sized,
    {
        for entry in self.records.iter() {
            recorder.append(entry)?;
        }
        Ok(self.next)
    }
}

/// Where the hand goes after an action has been enacted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Progress {
    Finished,
    NextStreet,
    Turn(Position),
}

/// Applies a concrete action for the seat on turn and moves the hand on:
/// next seat, next street (dealing the board), or the end of the hand.
pub fn apply_result<D>(state: &GameState, seat: Position, result: ActionResult, dealer: &mut D) -> crate::Result<StateTransition>
where
    D: Dealer + ?Sized,
{
    if result.is_terminate() {
        return Err(crate::Error::IllegalTerminate);
    }
    if state.current() != Some(seat) {
        return Err(crate::Error::NotOnTurn(seat));
    }
    let before = state.chips();
    let mut next = state.clone();
    enact(&mut next, seat, result);
    let mut records = vec![next.entry(Some(seat), Record::ActionResult(result))];
    let range = next.seats[seat].range().clone();
    records.push(next.entry(Some(seat), Record::UserRange(range)));
    match progress(&next, seat) {
        Progress::Finished => finish(&mut next),
        Progress::NextStreet => records.extend(next_street(&mut next, dealer)?),
        Progress::Turn(position) => next.current = Some(position),
    }
    let after = next.chips();
    if before != after {
        log::error!("seat {} {} moved chips from {} to {}", seat, result, before, after);
        return Err(crate::Error::ChipsNotConserved { before, after });
    }
    log::debug!("seat {} {} -> {:?}", seat, result, next.current);
    Ok(StateTransition { records, next })
}

/// True if `result` by `seat` would end the hand. Nothing is dealt.
pub(crate) fn ends_hand(state: &GameState, seat: Position, result: ActionResult) -> bool {
    let mut next = state.clone();
    enact(&mut next, seat, result);
    progress(&next, seat) == Progress::Finished
}

/// Moves chips and flags for a betting action. Turn order is untouched.
pub(crate) fn enact(state: &mut GameState, seat: Position, result: ActionResult) {
    let raised_to = state.raised_to();
    match result {
        ActionResult::Fold => state.seat_mut(seat).fold(),
        ActionResult::Passive { call_cost } => {
            let actor = state.seat_mut(seat);
            actor.bet(call_cost);
            actor.set_left_to_act(false);
        }
        ActionResult::Aggressive { raise_total, .. } => {
            let actor = state.seat_mut(seat);
            let chips = raise_total - actor.contributed();
            actor.bet(chips);
            actor.set_left_to_act(false);
            state.increment = state.increment.max(raise_total - raised_to);
            state.bet_count += 1;
            for (i, other) in state.seats.iter_mut().enumerate() {
                if i != seat && !other.is_folded() {
                    other.set_left_to_act(true);
                }
            }
        }
        ActionResult::Terminate => {}
    }
}

pub(crate) fn progress(state: &GameState, actor: Position) -> Progress {
    let waiting = state
        .seats
        .iter()
        .enumerate()
        .filter(|(_, s)| s.is_left_to_act())
        .map(|(i, _)| i)
        .collect::<Vec<_>>();
    let acted = state
        .seats
        .iter()
        .filter(|s| !s.is_folded() && !s.is_left_to_act())
        .count();
    match waiting.as_slice() {
        [_] if acted == 0 => Progress::Finished,
        [] if acted <= 1 || state.street.is_last() => Progress::Finished,
        [] => Progress::NextStreet,
        _ => Progress::Turn(
            waiting
                .iter()
                .copied()
                .find(|i| *i > actor)
                .unwrap_or(waiting[0]),
        ),
    }
}

/// Ends the hand: contributions go to the pot and nobody is on turn.
pub(crate) fn finish(state: &mut GameState) {
    sweep(state);
    for seat in state.seats.iter_mut() {
        seat.set_left_to_act(false);
    }
    state.current = None;
    log::debug!("game {} finished, pot {}", state.game, state.pot_pre);
}

fn sweep(state: &mut GameState) {
    let swept = state.seats.iter_mut().map(|s| s.sweep()).sum::<crate::Chips>();
    state.pot_pre += swept;
}

fn next_street<D>(state: &mut GameState, dealer: &mut D) -> crate::Result<Option<Entry>>
where
    D: Dealer + ?Sized,
{
    sweep(state);
    state.street = state.street.next();
    state.increment = state.big_blind;
    state.bet_count = 0;
    for seat in state.seats.iter_mut().filter(|s| !s.is_folded()) {
        seat.set_left_to_act(true);
    }
    let first = state.live().next();
    state.current = first;
    log::debug!("game {} moves to the {}", state.game, state.street);
    deal_board(state, dealer)
}

/// Brings the board up to the current street. Every range, folded or not,
/// loses the combos that touch the board.
pub(crate) fn deal_board<D>(state: &mut GameState, dealer: &mut D) -> crate::Result<Option<Entry>>
where
    D: Dealer + ?Sized,
{
    let missing = state.board.missing(state.street);
    let dealt = match missing {
        0 => None,
        n => Some(dealer.board(n, state.dealt())?),
    };
    if let Some(cards) = dealt {
        state.board.add(cards);
    }
    let board = Hand::from(state.board);
    for seat in state.seats.iter_mut() {
        let range = seat.range().without(board);
        seat.set_range(range);
    }
    Ok(dealt.map(|_| {
        log::debug!("{} {}", state.street, state.board);
        let record = Record::Board {
            street: state.street,
            board: state.board,
        };
        state.entry(None, record)
    }))
}
