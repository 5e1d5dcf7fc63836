//! Tournament orchestration error types.

use thiserror::Error;

use crate::db::StoreError;
use crate::pairing::PairingError;

/// Tournament errors
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Storage collaborator failure
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Pairing failure
    #[error("Pairing error: {0}")]
    Pairing(#[from] PairingError),
}

/// Result type for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;
