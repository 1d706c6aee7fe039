//! Range notation.
//!
//! A range string is a comma-separated list of tokens:
//!
//! | token         | combos                                  |
//! |---------------|-----------------------------------------|
//! | `ANYTHING`    | all 1,326                               |
//! | `NOTHING`     | none                                    |
//! | `AsKd`        | exactly that combo                      |
//! | `QQ`          | the 6 combos of a pair                  |
//! | `AKs` / `AKo` | the 4 suited / 12 offsuit combos        |
//! | `AK`          | all 16                                  |
//! | `22+`         | every pair from 22 up                   |
//! | `A2s+`        | A2s, A3s, .. AKs                        |
//! | `88-22`       | pairs from 88 down to 22                |
//! | `AJs-A2s`     | AJs down to A2s                         |
//!
//! Any token may carry a `(w)` suffix giving its combos weight `w`.
//! Later tokens overwrite the weight of earlier ones.
use super::range::Range;
use crate::Weight;
use crate::cards::card::Card;
use crate::cards::hole::Hole;
use crate::cards::rank::Rank;
use crate::cards::suit::Suit;
use std::cmp::Reverse;
use std::collections::BTreeMap;

pub const ANYTHING: &str = "ANYTHING";
pub const NOTHING: &str = "NOTHING";

pub fn parse(s: &str) -> crate::Result<Range> {
    let mut combos = BTreeMap::new();
    for token in s.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let (body, weight) = split_weight(token).map_err(crate::Error::BadRange)?;
        for hole in expand(body).map_err(crate::Error::BadRange)? {
            combos.insert(hole, weight);
        }
    }
    Ok(combos.into_iter().collect())
}

/// Pairs first from AA down, then unpaired classes by high card and kicker,
/// suited ahead of offsuit. Complete classes collapse to their class token,
/// everything else is spelled out combo by combo.
pub fn describe(range: &Range) -> String {
    if range.is_empty() {
        return NOTHING.to_string();
    }
    if *range == Range::anything() {
        return ANYTHING.to_string();
    }
    let mut groups = BTreeMap::<Reverse<(bool, Rank, Rank, bool)>, Vec<(Hole, Weight)>>::new();
    for (hole, weight) in range.iter() {
        let (hi, lo, suited) = hole.class();
        groups
            .entry(Reverse((hole.is_pair(), hi, lo, suited)))
            .or_default()
            .push((*hole, *weight));
    }
    let mut pieces = Vec::<(String, Weight)>::new();
    let mut pending = None::<(Class, Weight)>;
    for (Reverse((_, hi, lo, suited)), mut combos) in groups {
        let class = Class::from((hi, lo, suited));
        let weight = combos[0].1;
        let complete = combos.len() == class.size() && combos.iter().all(|(_, w)| *w == weight);
        match (pending.take(), complete) {
            (Some((prev, w)), true) if prev.pairs_with(&class) && w == weight => {
                pieces.push((class.merged().to_string(), weight));
                continue;
            }
            (Some((prev, w)), _) => pieces.push((prev.to_string(), w)),
            (None, _) => {}
        }
        if complete {
            pending = Some((class, weight));
        } else {
            combos.sort_by_key(|(hole, _)| Reverse((hole.high(), hole.low())));
            pieces.extend(combos.into_iter().map(|(h, w)| (h.to_string(), w)));
        }
    }
    if let Some((class, weight)) = pending {
        pieces.push((class.to_string(), weight));
    }
    pieces
        .into_iter()
        .map(|(token, weight)| match weight {
            1 => token,
            w => format!("{}({})", token, w),
        })
        .collect::<Vec<_>>()
        .join(",")
}

fn split_weight(token: &str) -> Result<(&str, Weight), String> {
    match token.strip_suffix(')') {
        None => Ok((token, 1)),
        Some(inner) => {
            let open = inner
                .rfind('(')
                .ok_or_else(|| format!("unbalanced weight in '{}'", token))?;
            let weight = inner[open + 1..]
                .trim()
                .parse::<Weight>()
                .map_err(|e| format!("weight in '{}': {}", token, e))?;
            match weight {
                0 => Err(format!("zero weight in '{}'", token)),
                w => Ok((inner[..open].trim(), w)),
            }
        }
    }
}

fn expand(body: &str) -> Result<Vec<Hole>, String> {
    match body {
        ANYTHING => return Ok(Hole::all().collect()),
        NOTHING => return Ok(vec![]),
        _ => {}
    }
    if let Ok(hole) = Hole::try_from(body) {
        return Ok(vec![hole]);
    }
    if let Some(base) = body.strip_suffix('+') {
        let class = Class::try_from(base)?;
        let top = match class.kind {
            Kind::Pair => Rank::Ace,
            _ => Rank::from(u8::from(class.hi) - 1),
        };
        return Ok(class.climb(class.lo, top));
    }
    if let Some((a, b)) = body.split_once('-') {
        let a = Class::try_from(a)?;
        let b = Class::try_from(b)?;
        let same = match a.kind {
            Kind::Pair => b.kind == Kind::Pair,
            _ => a.hi == b.hi && a.kind == b.kind,
        };
        if !same {
            return Err(format!("'{}' does not span one kind of hand", body));
        }
        return Ok(a.climb(a.lo.min(b.lo), a.lo.max(b.lo)));
    }
    Class::try_from(body).map(|class| class.holes())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Pair,
    Suited,
    Offsuit,
    Either,
}

/// A starting-hand class such as QQ, AKs, T9o or KQ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Class {
    hi: Rank,
    lo: Rank,
    kind: Kind,
}

impl Class {
    fn size(&self) -> usize {
        match self.kind {
            Kind::Pair => 6,
            Kind::Suited => 4,
            Kind::Offsuit => 12,
            Kind::Either => 16,
        }
    }
    fn holes(&self) -> Vec<Hole> {
        let card = |rank: Rank, suit: Suit| Card::from((rank, suit));
        let suits = Suit::all();
        match self.kind {
            Kind::Pair => suits
                .iter()
                .enumerate()
                .flat_map(|(i, a)| suits[i + 1..].iter().map(move |b| (*a, *b)))
                .map(|(a, b)| Hole::from((card(self.hi, b), card(self.lo, a))))
                .collect(),
            Kind::Suited => suits
                .iter()
                .map(|s| Hole::from((card(self.hi, *s), card(self.lo, *s))))
                .collect(),
            Kind::Offsuit => suits
                .iter()
                .flat_map(|a| suits.iter().filter(move |b| *b != a).map(move |b| (*a, *b)))
                .map(|(a, b)| Hole::from((card(self.hi, a), card(self.lo, b))))
                .collect(),
            Kind::Either => [Kind::Suited, Kind::Offsuit]
                .into_iter()
                .flat_map(|kind| Self { kind, ..*self }.holes())
                .collect(),
        }
    }
    /// Every class of this shape with the low rank between `from` and `to`.
    /// Pairs move both ranks, unpaired classes keep their high card.
    fn climb(&self, from: Rank, to: Rank) -> Vec<Hole> {
        (u8::from(from)..=u8::from(to))
            .map(Rank::from)
            .map(|rank| match self.kind {
                Kind::Pair => Self { hi: rank, lo: rank, ..*self },
                _ => Self { lo: rank, ..*self },
            })
            .flat_map(|class| class.holes())
            .collect()
    }
    fn pairs_with(&self, other: &Self) -> bool {
        self.kind == Kind::Suited && other.kind == Kind::Offsuit && (self.hi, self.lo) == (other.hi, other.lo)
    }
    fn merged(&self) -> Self {
        Self { kind: Kind::Either, ..*self }
    }
}

impl From<(Rank, Rank, bool)> for Class {
    fn from((hi, lo, suited): (Rank, Rank, bool)) -> Self {
        let kind = match (hi == lo, suited) {
            (true, _) => Kind::Pair,
            (false, true) => Kind::Suited,
            (false, false) => Kind::Offsuit,
        };
        Self { hi, lo, kind }
    }
}

impl TryFrom<&str> for Class {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let chars = s.trim().chars().collect::<Vec<_>>();
        let (a, b, suffix) = match chars.as_slice() {
            [a, b] => (*a, *b, None),
            [a, b, c] => (*a, *b, Some(*c)),
            _ => return Err(format!("'{}' is not a hand class", s)),
        };
        let a = Rank::try_from(a)?;
        let b = Rank::try_from(b)?;
        let (hi, lo) = (a.max(b), a.min(b));
        let kind = match (hi == lo, suffix) {
            (true, None) => Kind::Pair,
            (false, None) => Kind::Either,
            (false, Some('s')) => Kind::Suited,
            (false, Some('o')) => Kind::Offsuit,
            _ => return Err(format!("'{}' is not a hand class", s)),
        };
        Ok(Self { hi, lo, kind })
    }
}

impl std::fmt::Display for Class {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.hi, self.lo)?;
        match self.kind {
            Kind::Suited => write!(f, "s"),
            Kind::Offsuit => write!(f, "o"),
            Kind::Pair | Kind::Either => Ok(()),
        }
    }
}
