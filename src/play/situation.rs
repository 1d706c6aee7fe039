use super::seat::SeatTemplate;
use crate::Chips;
use crate::Position;
use crate::cards::board::Board;
use crate::cards::street::Street;
use crate::ranges::Range;

/// A reusable starting point: stacks, ranges, street, pot and who acts.
///
/// Many games are spawned from one situation, so it is never mutated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Situation {
    pub description: String,
    pub seats: Vec<SeatTemplate>,
    pub big_blind: Chips,
    pub street: Street,
    pub board: Board,
    pub pot_pre: Chips,
    pub increment: Chips,
    pub bet_count: usize,
    pub is_limit: bool,
    pub current: Position,
}

impl Situation {
    /// Heads-up preflop, 100 big blinds deep. The button has posted the small
    /// blind and is first to act.
    pub fn heads_up() -> Self {
        Self {
            description: "Heads-up preflop, 100 BB. BTN to act.".to_string(),
            seats: vec![
                SeatTemplate::new(198, 2, Range::anything()),
                SeatTemplate::new(199, 1, Range::anything()),
            ],
            big_blind: 2,
            street: Street::Pref,
            board: Board::empty(),
            pot_pre: 0,
            increment: 2,
            bet_count: 1,
            is_limit: false,
            current: 1,
        }
    }

    /// Three-way single-raised flop: BB, CO and BTN with realistic ranges.
    pub fn three_way() -> crate::Result<Self> {
        let bb = "88-22,AJs-A2s,K7s+,Q9s+,J8s+,T7s+,96s+,86s+,75s+,64s+,54s,A8o+,KTo+,QTo+,J9o+,T9o,98o,87o";
        let co = "22+,A2s+,K7s+,Q9s+,J8s+,T8s+,97s+,87s,76s,65s,A8o+,KTo+,QTo+,JTo,T9o";
        let bn = "88-22,AJs-A2s,KTs-K7s,Q9s,J9s,T8s+,97s+,86s+,75s+,64s+,54s,A8o+,KTo+,QJo";
        Ok(Self {
            description: "Three-way flop. CO minraised, BTN cold called, BB called. BB to act first on the flop."
                .to_string(),
            seats: [bb, co, bn]
                .into_iter()
                .map(|r| Range::parse(r).map(|range| SeatTemplate::new(195, 0, range)))
                .collect::<crate::Result<Vec<_>>>()?,
            big_blind: 2,
            street: Street::Flop,
            board: Board::empty(),
            pot_pre: 16,
            increment: 2,
            bet_count: 0,
            is_limit: false,
            current: 0,
        })
    }

    /// Same situation played as fixed limit.
    pub fn limit(self) -> Self {
        Self { is_limit: true, ..self }
    }

    /// Every chip in play: stacks, this round's contributions and the pot.
    pub fn chips(&self) -> Chips {
        self.pot_pre + self.seats.iter().map(|s| s.stack + s.contributed).sum::<Chips>()
    }
}

impl std::fmt::Display for Situation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_situations() {
        let hu = Situation::heads_up();
        assert_eq!(hu.seats.len(), 2);
        assert_eq!(hu.chips(), 400);
        let three = Situation::three_way().unwrap();
        assert_eq!(three.seats.len(), 3);
        assert_eq!(three.chips(), 16 + 3 * 195);
        assert!(three.seats.iter().all(|s| !s.range.is_empty() && s.left_to_act));
    }
}
