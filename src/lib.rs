//! Range vs. Range betting engine.
//!
//! Players act with a *range* of holdings instead of a single hand. Each
//! decision is a partition of that range into fold, passive and aggressive
//! parts, and the engine resolves which single concrete action is enacted,
//! then advances the betting round, street, board and pot.
//!
//! ## Modules
//!
//! - [`cards`] bit-set card primitives (card, hand, hole, board, deck, street)
//! - [`ranges`] weighted sets of hole-card combos and their notation
//! - [`play`] situations, game state, options, validation, resolution, transitions
//! - [`history`] ordered hand history records and the recorder sink
//!
//! The host-facing entry point is [`play::Engine`].
pub mod cards;
pub mod history;
pub mod play;
pub mod ranges;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, contributions and bet totals.
pub type Chips = i32;
/// Seat index in seating order (0 acts first postflop).
pub type Position = usize;
/// Relative frequency of a combo inside a range.
pub type Weight = u32;
/// Share of probability mass carried by the realised line.
pub type Probability = f64;
/// Identifier of a participant, assigned by the host.
pub type UserId = u64;
/// Identifier of a running game, assigned by the host.
pub type GameId = u64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// ENGINE PARAMETERS
// ============================================================================
/// Maximum bets and raises per betting round in limit games.
pub const MAX_BETS_PER_ROUND: usize = 4;
/// Idle time after which the player on turn folds their whole range.
pub const ACTION_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(7 * 86400);
/// Rejection-sampling attempts when dealing hole cards from ranges.
pub const DEAL_ATTEMPTS: usize = 1_000;
/// Number of distinct two-card combos in a 52-card deck.
pub const N_COMBOS: usize = 1_326;

mod error;
pub use error::*;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging. DEBUG goes to the terminal when
/// `RUST_LOG=debug` is set, INFO otherwise.
#[cfg(feature = "server")]
pub fn log() {
    let level = match std::env::var("RUST_LOG").as_deref() {
        Ok("trace") => log::LevelFilter::Trace,
        Ok("debug") => log::LevelFilter::Debug,
        Ok("warn") => log::LevelFilter::Warn,
        _ => log::LevelFilter::Info,
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}

/// Parse duration string like "30s", "5m", "2h", "1d" into Duration.
/// None for unknown units or values that overflow.
pub fn parse_duration(s: &str) -> Option<std::time::Duration> {
    let s = s.trim();
    let (split, unit) = s.char_indices().last()?;
    let value: u64 = s[..split].parse().ok()?;
    let seconds = match unit {
        's' => Some(value),
        'm' => value.checked_mul(60),
        'h' => value.checked_mul(3600),
        'd' => value.checked_mul(86400),
        _ => None,
    }?;
    Some(std::time::Duration::from_secs(seconds))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn durations() {
        assert_eq!(parse_duration("30s"), Some(std::time::Duration::from_secs(30)));
        assert_eq!(parse_duration("7d"), Some(ACTION_TIMEOUT));
        assert_eq!(parse_duration(" 2h "), Some(std::time::Duration::from_secs(7200)));
        assert_eq!(parse_duration("7w"), None);
        assert_eq!(parse_duration(""), None);
        assert_eq!(parse_duration("d"), None);
        assert_eq!(parse_duration("5µ"), None);
        assert_eq!(parse_duration("999999999999999999d"), None);
    }
}
