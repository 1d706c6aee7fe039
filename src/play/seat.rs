use crate::Chips;
use crate::UserId;
use crate::cards::hole::Hole;
use crate::ranges::Range;

/// One participant's state within a running hand.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seat {
    user: UserId,
    stack: Chips,
    contributed: Chips,
    range: Range,
    folded: bool,
    left_to_act: bool,
    cards: Option<Hole>,
}

impl Seat {
    pub fn new(user: UserId, template: &SeatTemplate) -> Self {
        Self {
            user,
            stack: template.stack,
            contributed: template.contributed,
            range: template.range.clone(),
            folded: false,
            left_to_act: template.left_to_act,
            cards: None,
        }
    }

    pub fn user(&self) -> UserId {
        self.user
    }
    pub fn stack(&self) -> Chips {
        self.stack
    }
    /// chips put in during the current betting round
    pub fn contributed(&self) -> Chips {
        self.contributed
    }
    pub fn range(&self) -> &Range {
        &self.range
    }
    pub fn is_folded(&self) -> bool {
        self.folded
    }
    pub fn is_left_to_act(&self) -> bool {
        self.left_to_act
    }
    /// the concrete cards dealt at the start of the hand
    pub fn cards(&self) -> Option<Hole> {
        self.cards
    }
    /// stack plus this round's contribution
    pub fn chips(&self) -> Chips {
        self.stack + self.contributed
    }

    pub(crate) fn bet(&mut self, chips: Chips) {
        self.stack -= chips;
        self.contributed += chips;
    }
    pub(crate) fn fold(&mut self) {
        self.folded = true;
        self.left_to_act = false;
    }
    /// Moves this round's contribution out, returning it for the pot.
    pub(crate) fn sweep(&mut self) -> Chips {
        std::mem::take(&mut self.contributed)
    }
    pub(crate) fn set_left_to_act(&mut self, left_to_act: bool) {
        self.left_to_act = left_to_act;
    }
    pub(crate) fn set_range(&mut self, range: Range) {
        self.range = range;
    }
    pub(crate) fn set_cards(&mut self, cards: Hole) {
        self.cards = Some(cards);
    }
}

impl std::fmt::Display for Seat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.cards.map(|c| c.to_string()).unwrap_or_else(|| "----".to_string());
        let state = match (self.folded, self.left_to_act) {
            (true, _) => "F",
            (false, true) => "P",
            (false, false) => "-",
        };
        write!(f, "{:>5} {:>4} {} {}", self.stack, self.contributed, cards, state)
    }
}

/// How a seat looks when a hand is spawned from a [`super::Situation`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatTemplate {
    pub stack: Chips,
    pub contributed: Chips,
    pub range: Range,
    pub left_to_act: bool,
}

impl SeatTemplate {
    pub fn new(stack: Chips, contributed: Chips, range: Range) -> Self {
        Self {
            stack,
            contributed,
            range,
            left_to_act: true,
        }
    }
}
