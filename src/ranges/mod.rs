//! Weighted sets of hole-card combos.
//!
//! - [`Range`] the set itself, with the set algebra the engine needs
//! - [`notation`] parsing `"22+,AJs-A2s,KTo+"` style strings and producing
//!   the canonical description that identifies a range
pub mod notation;

pub mod range;
pub use range::*;
