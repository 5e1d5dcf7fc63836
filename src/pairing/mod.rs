//! Next-round pairing: the decision half of the core.
//!
//! [`next_round`] consumes an immutable snapshot of a tournament's roster,
//! match history, and bye history, and emits the next round's pairings. It
//! never repeats a matchup, assigns at most one bye per round, and rotates
//! the bye away from players who already sat out. Short results (fewer
//! pairings than the field supports) signal that no further rematch-free
//! pairing exists; they are returned, not raised.

pub mod engine;
pub mod errors;

pub use engine::{bye_recipients, next_round};
pub use errors::{PairingError, PairingResult};
