//! # Swiss Tournament
//!
//! A Swiss-system tournament pairing and standings library.
//!
//! The core is a pair of pure operations over immutable snapshots of a
//! tournament's roster and match history. They hold no state between calls
//! and perform no I/O of their own:
//!
//! - [`standings::rank`]: derives the current ranking (points descending,
//!   points conceded ascending, registration order for remaining ties).
//! - [`pairing::next_round`]: produces the next round's pairings, the first
//!   round in roster order and later rounds over the standings with rematch
//!   avoidance and single-bye rotation.
//!
//! ## Architecture
//!
//! Everything around the core is record-keeping:
//!
//! - **Tournament**: data models (players, registrations, matches, pairings,
//!   standings), point conventions, and the [`TournamentManager`] that feeds
//!   storage snapshots into the core
//! - **Standings**: the ranking computation
//! - **Pairing**: the next-round pairing engine
//! - **Db**: the storage collaborator, a repository trait with PostgreSQL
//!   and in-memory implementations
//!
//! ## Example
//!
//! ```
//! use chrono::Utc;
//! use swiss_tournament::{Registration, pairing};
//!
//! let roster: Vec<Registration> = ["Ada", "Grace", "Edsger", "Barbara"]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, name)| Registration {
//!         player_id: i as i64 + 1,
//!         name: name.to_string(),
//!         registered_at: Utc::now(),
//!     })
//!     .collect();
//!
//! // No matches reported yet, so round 1 pairs the roster in order.
//! let pairings = pairing::next_round(1, &roster, &[], &[]).unwrap();
//! assert_eq!(pairings.len(), 2);
//! ```

/// Storage collaborator: repositories, connection pooling, configuration.
pub mod db;
pub use db::{Database, DatabaseConfig, MemoryRepository, StoreError, StoreResult};

/// Next-round pairing engine.
pub mod pairing;
pub use pairing::{PairingError, PairingResult};

/// Standings computation.
pub mod standings;

/// Tournament models, scoring, and orchestration.
pub mod tournament;
pub use tournament::{
    Match, MatchScoring, Pairing, Player, PlayerId, Registration, RoundPairings, StandingRow,
    TournamentError, TournamentId, TournamentManager, TournamentResult,
};
