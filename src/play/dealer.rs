use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::ranges::Range;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Source of cards. Deterministic given its seed, unpredictable to players.
pub trait Dealer {
    /// Deals `n` community cards, none of them in `excluded`.
    fn board(&mut self, n: usize, excluded: Hand) -> crate::Result<Hand>;
    /// Draws one combo of `range` by weight, avoiding `excluded`.
    fn hole(&mut self, range: &Range, excluded: Hand) -> Option<Hole>;
}

/// [`Dealer`] backed by a small fast RNG.
#[derive(Debug, Clone)]
pub struct RandomDealer(SmallRng);

impl RandomDealer {
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

impl Default for RandomDealer {
    fn default() -> Self {
        Self(SmallRng::from_rng(&mut rand::rng()))
    }
}

impl Dealer for RandomDealer {
    fn board(&mut self, n: usize, excluded: Hand) -> crate::Result<Hand> {
        Deck::without(excluded)
            .deal(n, &mut self.0)
            .ok_or(crate::Error::NoLegalDeal)
    }
    fn hole(&mut self, range: &Range, excluded: Hand) -> Option<Hole> {
        range.sample(excluded, &mut self.0)
    }
}

/// Deals one combo per range so that no two combos share a card and none
/// touches `board`. Seats are dealt in order and the whole deal is retried
/// from scratch when a later seat has nothing left, up to `attempts` times.
pub fn deal_from_ranges<D>(dealer: &mut D, ranges: &[&Range], board: Hand, attempts: usize) -> crate::Result<Vec<Hole>>
where
    D: Dealer + ?Sized,
{
    'attempt: for attempt in 0..attempts {
        let mut used = board;
        let mut holes = Vec::with_capacity(ranges.len());
        for range in ranges {
            match dealer.hole(range, used) {
                Some(hole) => {
                    used = Hand::or(used, Hand::from(hole));
                    holes.push(hole);
                }
                None => continue 'attempt,
            }
        }
        log::trace!("dealt {} seats after {} retries", holes.len(), attempt);
        return Ok(holes);
    }
    log::warn!("no conflict-free deal after {} attempts", attempts);
    Err(crate::Error::NoLegalDeal)
}
