//! Hand history.
//!
//! Every accepted transition emits [`Entry`] values stamped with the game and
//! a strictly increasing sequence number. Storage is the host's business; the
//! engine only hands entries to a [`Recorder`].
pub mod record;
pub use record::*;

pub mod recorder;
pub use recorder::*;
