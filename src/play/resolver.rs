use super::action::ActionResult;
use super::action::Branch;
use super::action::RangeAction;
use super::options::CurrentOptions;
use super::state::GameState;
use super::transition;
use crate::Position;
use crate::Probability;
use crate::cards::hand::Hand;
use crate::ranges::Range;

/// What a range-action comes down to.
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    pub result: ActionResult,
    /// the seat's range from here on
    pub range: Range,
    /// weight of the chosen branch over the weight of the whole range
    pub share: Probability,
}

/// Decides the one concrete action that stands for every combo of a range.
///
/// A lone non-empty branch is simply enacted. With several branches, only
/// those that some deal of the other live ranges allows are kept. A single
/// survivor is enacted. If every survivor would end the hand, the hand ends
/// as a range-based showdown ([`ActionResult::Terminate`]). Otherwise the
/// most committal survivor is enacted: aggressive, then passive, then fold.
///
/// Assumes `action` already passed [`super::validate_partition`].
pub fn resolve_action(state: &GameState, seat: Position, action: &RangeAction, options: &CurrentOptions) -> Resolution {
    let candidates = action
        .branches()
        .into_iter()
        .filter(|(_, part)| !part.is_empty())
        .collect::<Vec<_>>();
    let chosen = match candidates.as_slice() {
        [] => Branch::Fold,
        [(branch, _)] => *branch,
        _ => {
            let feasible = candidates
                .iter()
                .filter(|(_, part)| feasible(state, seat, part))
                .map(|(branch, _)| *branch)
                .collect::<Vec<_>>();
            let pool = match feasible.is_empty() {
                true => {
                    log::warn!("seat {} has no feasible branch, keeping all", seat);
                    candidates.iter().map(|(branch, _)| *branch).collect()
                }
                false => feasible,
            };
            let terminal = pool.len() > 1
                && pool
                    .iter()
                    .all(|branch| transition::ends_hand(state, seat, outcome(*branch, action, options)));
            if terminal {
                log::debug!("seat {} ends the hand with {} live branches", seat, pool.len());
                return Resolution {
                    result: ActionResult::Terminate,
                    range: state.seats()[seat].range().clone(),
                    share: 1.0,
                };
            }
            pool[0]
        }
    };
    let range = action.branch(chosen).clone();
    let total = action.branches().iter().map(|(_, part)| part.weight()).sum::<u64>();
    let share = match total {
        0 => 1.0,
        total => range.weight() as Probability / total as Probability,
    };
    let result = outcome(chosen, action, options);
    log::debug!("seat {} resolves to {} with share {:.4}", seat, result, share);
    Resolution { result, range, share }
}

fn outcome(branch: Branch, action: &RangeAction, options: &CurrentOptions) -> ActionResult {
    match branch {
        Branch::Fold => ActionResult::Fold,
        Branch::Passive => ActionResult::Passive {
            call_cost: options.call_cost,
        },
        Branch::Aggressive => ActionResult::Aggressive {
            raise_total: action.raise_total,
            is_raise: options.is_raise,
        },
    }
}

/// Could the seat hold a combo of `part` given everyone else's range?
fn feasible(state: &GameState, seat: Position, part: &Range) -> bool {
    let others = state
        .live()
        .filter(|p| *p != seat)
        .map(|p| state.seats()[p].range())
        .collect::<Vec<_>>();
    let board = Hand::from(state.board());
    part.holes()
        .filter(|hole| !hole.collides(&board))
        .any(|hole| coexists(&others, Hand::or(board, Hand::from(hole))))
}

/// Backtracking search for one combo per range avoiding `used` and each other.
fn coexists(ranges: &[&Range], used: Hand) -> bool {
    match ranges.split_first() {
        None => true,
        Some((range, [])) => range.survives(used),
        Some((range, rest)) => range
            .holes()
            .filter(|hole| !hole.collides(&used))
            .any(|hole| coexists(rest, Hand::or(used, Hand::from(hole)))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::play::options::compute_options;
    use crate::play::situation::Situation;
    use std::time::SystemTime;

    fn heads_up() -> GameState {
        GameState::new(1, &Situation::heads_up(), &[10, 20], 4, SystemTime::UNIX_EPOCH).unwrap()
    }

    #[test]
    fn single_branch_wins() {
        let state = heads_up();
        let options = compute_options(&state, 1).unwrap();
        let range = Range::anything();
        let fold = resolve_action(&state, 1, &RangeAction::fold_all(&range), &options);
        assert_eq!(fold.result, ActionResult::Fold);
        assert_eq!(fold.share, 1.0);
        let raise = resolve_action(&state, 1, &RangeAction::raise_all(&range, 6), &options);
        assert_eq!(
            raise.result,
            ActionResult::Aggressive {
                raise_total: 6,
                is_raise: true
            }
        );
    }

    #[test]
    fn most_committal_branch_preflop() {
        let state = heads_up();
        let options = compute_options(&state, 1).unwrap();
        let aces = Range::parse("AA").unwrap();
        let rest = Range::anything()
            .iter()
            .filter(|(h, _)| !aces.contains(h))
            .map(|(h, w)| (*h, *w))
            .collect::<Range>();
        let action = RangeAction::new(Range::nothing(), rest, aces.clone(), 6);
        let resolution = resolve_action(&state, 1, &action, &options);
        assert!(matches!(resolution.result, ActionResult::Aggressive { raise_total: 6, .. }));
        assert_eq!(resolution.range, aces);
        assert!((resolution.share - 6.0 / 1326.0).abs() < 1e-12);
    }

    #[test]
    fn infeasible_branch_is_dropped() {
        let mut state = heads_up();
        state.seat_mut(0).set_range(Range::parse("AsAh").unwrap());
        let options = compute_options(&state, 1).unwrap();
        // every aggressive combo takes a card the big blind must hold
        let blocked = Range::parse("AsKs,AhKh").unwrap();
        let action = RangeAction::new(Range::nothing(), Range::parse("KK").unwrap(), blocked, 6);
        let resolution = resolve_action(&state, 1, &action, &options);
        assert!(matches!(resolution.result, ActionResult::Passive { call_cost: 1 }));
        assert_eq!(resolution.range, Range::parse("KK").unwrap());
    }

    #[test]
    fn fold_and_call_that_closes_the_river_terminates() {
        let mut state = heads_up();
        state.street = crate::cards::street::Street::Rive;
        state.seat_mut(0).set_left_to_act(false);
        let options = compute_options(&state, 1).unwrap();
        let action = RangeAction::new(Range::parse("22").unwrap(), Range::parse("AA").unwrap(), Range::nothing(), 0);
        let resolution = resolve_action(&state, 1, &action, &options);
        assert_eq!(resolution.result, ActionResult::Terminate);
        assert_eq!(resolution.range, *state.seats()[1].range());
        assert_eq!(resolution.share, 1.0);
    }
}
