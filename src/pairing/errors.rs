//! Pairing error types.

use thiserror::Error;

use crate::tournament::TournamentId;

/// Pairing errors
#[derive(Debug, Error)]
pub enum PairingError {
    /// A first round was requested for a tournament with no registrations
    #[error("No players registered for tournament {0}; cannot pair a first round")]
    NoPlayers(TournamentId),
}

/// Result type for pairing operations
pub type PairingResult<T> = Result<T, PairingError>;
