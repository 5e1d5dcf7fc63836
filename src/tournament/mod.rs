//! Tournament record-keeping and round orchestration.
//!
//! This module provides everything around the pairing core:
//! - Data models for players, registrations, matches, standings, and
//!   pairings
//! - The point conventions applied to reported results
//! - The [`TournamentManager`] that reads storage snapshots and runs the
//!   ranking and pairing operations over them
//!
//! ## Example
//!
//! ```no_run
//! use swiss_tournament::db::MemoryRepository;
//! use swiss_tournament::tournament::TournamentManager;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let manager = TournamentManager::new(MemoryRepository::new());
//!
//!     let tournament_id = 1;
//!     for name in ["Bruno", "Boots", "Cathy", "Diane"] {
//!         let player_id = manager.register_player(name).await?;
//!         manager.enroll(tournament_id, player_id).await?;
//!     }
//!
//!     let round = manager.next_round(tournament_id).await?;
//!     println!("round 1: {} pairings", round.pairings.len());
//!
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod manager;
pub mod models;
pub mod scoring;

pub use errors::{TournamentError, TournamentResult};
pub use manager::{RoundPairings, TournamentManager};
pub use models::{Match, Pairing, Player, PlayerId, Registration, StandingRow, TournamentId};
pub use scoring::MatchScoring;
