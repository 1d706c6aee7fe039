//! The betting engine.
//!
//! A range-action flows leaf to root through these modules:
//! [`compute_options`] gives the legal envelope, [`validate_partition`]
//! checks the split, [`resolve_action`] picks the concrete action and
//! [`apply_result`] moves the hand on. [`Engine`] strings them together.
pub mod action;
pub use action::*;

pub mod dealer;
pub use dealer::*;

pub mod engine;
pub use engine::*;

pub mod options;
pub use options::*;

pub mod partition;
pub use partition::*;

pub mod resolver;
pub use resolver::*;

pub mod seat;
pub use seat::*;

pub mod situation;
pub use situation::*;

pub mod state;
pub use state::*;

pub mod transition;
pub use transition::*;
