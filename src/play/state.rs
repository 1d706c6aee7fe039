use super::seat::Seat;
use super::situation::Situation;
use crate::Chips;
use crate::GameId;
use crate::Position;
use crate::Probability;
use crate::UserId;
use crate::cards::board::Board;
use crate::cards::hand::Hand;
use crate::cards::street::Street;
use crate::history::Entry;
use crate::history::Owner;
use crate::history::Record;
use std::time::SystemTime;

/// GameState is the full snapshot of one hand in between range-actions.
///
/// It holds both public data (board, pot, stacks) and private data (ranges,
/// dealt cards). Transitions never mutate a state in place from the outside:
/// they clone, apply, and hand back the successor, so a rejected action
/// leaves the caller's value untouched.
///
/// Chips are conserved: `pot_pre` plus every seat's stack and contribution is
/// the same in every state of a hand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub(crate) game: GameId,
    pub(crate) seats: Vec<Seat>,
    pub(crate) board: Board,
    pub(crate) street: Street,
    pub(crate) pot_pre: Chips,
    pub(crate) increment: Chips,
    pub(crate) bet_count: usize,
    pub(crate) is_limit: bool,
    pub(crate) big_blind: Chips,
    pub(crate) bet_cap: usize,
    pub(crate) current: Option<Position>,
    pub(crate) last_action: SystemTime,
    pub(crate) next_order: u64,
    pub(crate) factor: Probability,
}

impl GameState {
    /// Seats one user per template. Cards are not dealt yet. The situation
    /// needs at least one seat and a first actor among them.
    pub fn new(
        game: GameId,
        situation: &Situation,
        users: &[UserId],
        bet_cap: usize,
        now: SystemTime,
    ) -> crate::Result<Self> {
        if users.len() != situation.seats.len() {
            return Err(crate::Error::SeatMismatch {
                expected: situation.seats.len(),
                found: users.len(),
            });
        }
        if situation.seats.is_empty() {
            return Err(crate::Error::InvalidSituation("no seats".to_string()));
        }
        if situation.current >= situation.seats.len() {
            return Err(crate::Error::InvalidSituation(format!(
                "seat {} acts first but there are {} seats",
                situation.current,
                situation.seats.len()
            )));
        }
        Ok(Self {
            game,
            seats: users
                .iter()
                .zip(situation.seats.iter())
                .map(|(user, template)| Seat::new(*user, template))
                .collect(),
            board: situation.board,
            street: situation.street,
            pot_pre: situation.pot_pre,
            increment: situation.increment,
            bet_count: situation.bet_count,
            is_limit: situation.is_limit,
            big_blind: situation.big_blind,
            bet_cap,
            current: Some(situation.current),
            last_action: now,
            next_order: 0,
            factor: 1.0,
        })
    }

    pub fn game(&self) -> GameId {
        self.game
    }
    pub fn seats(&self) -> &[Seat] {
        &self.seats
    }
    pub fn seat(&self, position: Position) -> Option<&Seat> {
        self.seats.get(position)
    }
    pub fn board(&self) -> Board {
        self.board
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn pot_pre(&self) -> Chips {
        self.pot_pre
    }
    pub fn increment(&self) -> Chips {
        self.increment
    }
    pub fn bet_count(&self) -> usize {
        self.bet_count
    }
    pub fn is_limit(&self) -> bool {
        self.is_limit
    }
    pub fn big_blind(&self) -> Chips {
        self.big_blind
    }
    pub fn bet_cap(&self) -> usize {
        self.bet_cap
    }
    /// seat on turn, None once the hand is over
    pub fn current(&self) -> Option<Position> {
        self.current
    }
    pub fn last_action(&self) -> SystemTime {
        self.last_action
    }
    /// sequence number the next history entry will carry
    pub fn next_order(&self) -> u64 {
        self.next_order
    }
    /// probability mass of the line actually played out
    pub fn factor(&self) -> Probability {
        self.factor
    }

    pub fn is_finished(&self) -> bool {
        self.current.is_none()
    }
    /// largest contribution this round
    pub fn raised_to(&self) -> Chips {
        self.seats.iter().map(Seat::contributed).max().unwrap_or(0)
    }
    /// pot including this round's contributions
    pub fn pot(&self) -> Chips {
        self.pot_pre + self.seats.iter().map(Seat::contributed).sum::<Chips>()
    }
    /// total chips on the table, the conserved quantity
    pub fn chips(&self) -> Chips {
        self.pot_pre + self.seats.iter().map(Seat::chips).sum::<Chips>()
    }
    /// positions that have not folded, in seating order
    pub fn live(&self) -> impl Iterator<Item = Position> + '_ {
        self.seats
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_folded())
            .map(|(i, _)| i)
    }
    /// every card out of the deck: the board and all dealt hole cards
    pub fn dealt(&self) -> Hand {
        self.seats
            .iter()
            .filter_map(Seat::cards)
            .map(Hand::from)
            .fold(Hand::from(self.board), Hand::or)
    }
    pub fn owner(&self, position: Position) -> Owner {
        Owner {
            seat: position,
            user: self.seats[position].user(),
        }
    }

    pub(crate) fn seat_mut(&mut self, position: Position) -> &mut Seat {
        &mut self.seats[position]
    }
    /// Stamps a record with this game and the next sequence number.
    pub(crate) fn entry(&mut self, owner: Option<Position>, record: Record) -> Entry {
        let entry = Entry {
            game: self.game,
            order: self.next_order,
            owner: owner.map(|position| self.owner(position)),
            record,
        };
        self.next_order += 1;
        entry
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{:<8} board {}  pot {}", self.street, self.board, self.pot())?;
        for (i, seat) in self.seats.iter().enumerate() {
            let marker = if self.current == Some(i) { ">" } else { " " };
            writeln!(f, "{}{} {}", marker, i, seat)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_actor_must_be_seated() {
        let mut situation = Situation::heads_up();
        situation.current = 5;
        assert!(matches!(
            GameState::new(1, &situation, &[1, 2], 4, SystemTime::UNIX_EPOCH),
            Err(crate::Error::InvalidSituation(_))
        ));
    }

    #[test]
    fn situation_needs_seats() {
        let mut situation = Situation::heads_up();
        situation.seats.clear();
        situation.current = 0;
        assert!(matches!(
            GameState::new(1, &situation, &[], 4, SystemTime::UNIX_EPOCH),
            Err(crate::Error::InvalidSituation(_))
        ));
    }
}
