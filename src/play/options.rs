use super::state::GameState;
use crate::Chips;
use crate::Position;

/// The legal envelope for the seat on turn. Derived, never cached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurrentOptions {
    pub can_check: bool,
    /// a bet (blinds included) has already been made this round
    pub is_raise: bool,
    pub can_raise: bool,
    pub call_cost: Chips,
    pub min_raise_total: Chips,
    pub max_raise_total: Chips,
}

impl CurrentOptions {
    pub fn allows(&self, raise_total: Chips) -> bool {
        self.can_raise && (self.min_raise_total..=self.max_raise_total).contains(&raise_total)
    }
}

/// Computes the options of `seat`, which must be on turn.
pub fn compute_options(state: &GameState, seat: Position) -> crate::Result<CurrentOptions> {
    if state.current() != Some(seat) {
        return Err(crate::Error::NotOnTurn(seat));
    }
    let actor = &state.seats()[seat];
    let raised_to = state.raised_to();
    let call_cost = (raised_to - actor.contributed()).min(actor.stack());
    let all_in = actor.chips();
    let (mut min_raise_total, max_raise_total) = match state.is_limit() {
        true => {
            let total = (raised_to + state.increment()).min(all_in);
            (total, total)
        }
        false => (raised_to + state.increment(), all_in),
    };
    let can_raise = max_raise_total > raised_to && (!state.is_limit() || state.bet_count() < state.bet_cap());
    if can_raise && min_raise_total > max_raise_total {
        min_raise_total = max_raise_total;
    }
    let options = CurrentOptions {
        can_check: call_cost == 0,
        is_raise: state.bet_count() > 0,
        can_raise,
        call_cost,
        min_raise_total,
        max_raise_total,
    };
    log::trace!("options for seat {}: {:?}", seat, options);
    Ok(options)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::situation::Situation;
    use std::time::SystemTime;

    fn state(situation: &Situation) -> GameState {
        GameState::new(1, situation, &[10, 20, 30][..situation.seats.len()], 4, SystemTime::UNIX_EPOCH).unwrap()
    }

    #[test]
    fn heads_up_button() {
        let state = state(&Situation::heads_up());
        let options = compute_options(&state, 1).unwrap();
        assert_eq!(
            options,
            CurrentOptions {
                can_check: false,
                is_raise: true,
                can_raise: true,
                call_cost: 1,
                min_raise_total: 4,
                max_raise_total: 200,
            }
        );
        assert_eq!(compute_options(&state, 0), Err(crate::Error::NotOnTurn(0)));
    }

    #[test]
    fn unopened_flop() {
        let state = state(&Situation::three_way().unwrap());
        let options = compute_options(&state, 0).unwrap();
        assert!(options.can_check && !options.is_raise && options.can_raise);
        assert_eq!((options.min_raise_total, options.max_raise_total), (2, 195));
        assert_eq!(options, compute_options(&state, 0).unwrap());
    }

    #[test]
    fn limit_sizes_are_fixed() {
        let state = state(&Situation::heads_up().limit());
        let options = compute_options(&state, 1).unwrap();
        assert_eq!((options.min_raise_total, options.max_raise_total), (4, 4));
        assert!(options.allows(4) && !options.allows(6));
    }

    #[test]
    fn limit_cap_stops_raising() {
        let mut state = state(&Situation::heads_up().limit());
        state.bet_count = 4;
        assert!(!compute_options(&state, 1).unwrap().can_raise);
    }

    #[test]
    fn short_stack_all_in_for_less() {
        let mut state = state(&Situation::heads_up());
        state.seat_mut(1).bet(196);
        state.seat_mut(0).bet(196);
        state.increment = 10;
        let options = compute_options(&state, 1).unwrap();
        assert_eq!(options.call_cost, 1);
        assert!(options.can_raise);
        assert_eq!((options.min_raise_total, options.max_raise_total), (200, 200));
    }
}
