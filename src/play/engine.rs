use super::action::RangeAction;
use super::dealer::Dealer;
use super::dealer::deal_from_ranges;
use super::options::CurrentOptions;
use super::options::compute_options;
use super::partition::validate_partition;
use super::resolver::resolve_action;
use super::situation::Situation;
use super::state::GameState;
use super::transition;
use super::transition::StateTransition;
use super::transition::apply_result;
use crate::GameId;
use crate::Position;
use crate::UserId;
use crate::cards::hand::Hand;
use crate::history::Record;
use crate::ranges::Range;
use std::time::Duration;
use std::time::SystemTime;

/// Engine parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// bets and raises allowed per round in limit games
    pub bet_cap: usize,
    /// idle time before the seat on turn is folded
    pub timeout: Duration,
    /// retries when dealing hole cards from ranges
    pub deal_attempts: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bet_cap: crate::MAX_BETS_PER_ROUND,
            timeout: crate::ACTION_TIMEOUT,
            deal_attempts: crate::DEAL_ATTEMPTS,
        }
    }
}

impl Config {
    /// Defaults, with the timeout overridden by `RVR_TIMEOUT` (e.g. `30m`).
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Ok(value) = std::env::var("RVR_TIMEOUT") {
            match crate::parse_duration(&value) {
                Some(timeout) => config.timeout = timeout,
                None => log::warn!("ignoring unparseable RVR_TIMEOUT {:?}", value),
            }
        }
        config
    }
}

/// Runs hands: options, validation, resolution and state transition as one
/// atomic step. Holds no game state of its own.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: Config,
}

impl Engine {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Spawns a hand from `situation`, one user per seat. Hole cards are
    /// dealt from each seat's range and the board is brought up to the
    /// starting street.
    pub fn start<D>(
        &self,
        game: GameId,
        situation: &Situation,
        users: &[UserId],
        dealer: &mut D,
        now: SystemTime,
    ) -> crate::Result<StateTransition>
    where
        D: Dealer + ?Sized,
    {
        let mut state = GameState::new(game, situation, users, self.config.bet_cap, now)?;
        let holes = {
            let ranges = state.seats().iter().map(|s| s.range()).collect::<Vec<_>>();
            let board = Hand::from(state.board());
            deal_from_ranges(dealer, &ranges, board, self.config.deal_attempts)?
        };
        for (position, hole) in holes.into_iter().enumerate() {
            state.seat_mut(position).set_cards(hole);
        }
        let records = transition::deal_board(&mut state, dealer)?.into_iter().collect();
        log::info!("game {} starts: {}", game, situation);
        Ok(StateTransition { records, next: state })
    }

    pub fn options(&self, state: &GameState, seat: Position) -> crate::Result<CurrentOptions> {
        compute_options(state, seat)
    }

    /// Takes a range-action from the seat on turn. Invalid input leaves
    /// `state` as it was and returns the validation error.
    pub fn act<D>(
        &self,
        state: &GameState,
        seat: Position,
        action: &RangeAction,
        dealer: &mut D,
        now: SystemTime,
    ) -> crate::Result<StateTransition>
    where
        D: Dealer + ?Sized,
    {
        let options = compute_options(state, seat)?;
        validate_partition(action, &options, state.seats()[seat].range())?;
        let mut next = state.clone();
        next.last_action = now;
        let record = Record::RangeAction {
            action: action.clone(),
            is_check: options.can_check,
            is_raise: options.is_raise,
        };
        let mut records = vec![next.entry(Some(seat), record)];
        let resolution = resolve_action(state, seat, action, &options);
        if resolution.result.is_terminate() {
            next.seat_mut(seat).set_left_to_act(false);
            transition::finish(&mut next);
            log::info!("game {} ends in a range showdown", next.game());
            return Ok(StateTransition { records, next });
        }
        next.factor *= resolution.share;
        Self::redeal(&mut next, seat, &resolution.range, dealer);
        next.seat_mut(seat).set_range(resolution.range);
        let transition = apply_result(&next, seat, resolution.result, dealer)?;
        records.extend(transition.records);
        if transition.next.is_finished() {
            log::info!("game {} is over, factor {:.6}", next.game(), transition.next.factor());
        }
        Ok(StateTransition {
            records,
            next: transition.next,
        })
    }

    /// Folds the whole range of a seat that has been idle too long.
    /// None if the hand is over or the seat still has time.
    pub fn timeout<D>(&self, state: &GameState, dealer: &mut D, now: SystemTime) -> crate::Result<Option<StateTransition>>
    where
        D: Dealer + ?Sized,
    {
        let Some(seat) = state.current() else {
            return Ok(None);
        };
        let idle = now.duration_since(state.last_action()).unwrap_or_default();
        if idle <= self.config.timeout {
            return Ok(None);
        }
        log::info!("game {} seat {} timed out after {:?}", state.game(), seat, idle);
        let mut next = state.clone();
        let timeout = next.entry(Some(seat), Record::Timeout);
        let fold = RangeAction::fold_all(next.seats()[seat].range());
        let mut transition = self.act(&next, seat, &fold, dealer, now)?;
        transition.records.insert(0, timeout);
        Ok(Some(transition))
    }

    /// Keeps the seat's dealt cards inside its new range. If no combo of
    /// the range fits around the other seats' cards the old cards stay.
    fn redeal<D>(state: &mut GameState, seat: Position, range: &Range, dealer: &mut D)
    where
        D: Dealer + ?Sized,
    {
        let Some(cards) = state.seats()[seat].cards() else {
            return;
        };
        if range.contains(&cards) {
            return;
        }
        let excluded = Hand::minus(state.dealt(), Hand::from(cards));
        match dealer.hole(range, excluded) {
            Some(hole) => {
                log::trace!("seat {} redealt {} -> {}", seat, cards, hole);
                state.seat_mut(seat).set_cards(hole);
            }
            None => log::warn!("seat {} keeps {} outside its range", seat, cards),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = Config::default();
        assert_eq!(config.bet_cap, 4);
        assert_eq!(config.timeout, Duration::from_secs(7 * 24 * 3600));
    }
}
