//! Tournament data models: players, registrations, matches, and the derived
//! standings and pairing records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Player ID type
pub type PlayerId = i64;

/// Tournament ID type
pub type TournamentId = i64;

/// A player record. Owned by the storage collaborator; the core treats it as
/// an opaque immutable record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Unique player ID (assigned by storage)
    pub id: PlayerId,
    /// Display name (need not be unique)
    pub name: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// One row of a tournament's roster: a player registered for that
/// tournament.
///
/// Roster order is registration order. Round-1 pairing and standings
/// tie-breaks depend on it staying stable, so snapshots must preserve it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Registration {
    /// Registered player ID
    pub player_id: PlayerId,
    /// Display name at registration time
    pub name: String,
    /// Registration timestamp
    pub registered_at: DateTime<Utc>,
}

/// One completed round result. Immutable once recorded: results are only
/// ever appended, never edited.
///
/// `away == None` denotes a bye: the home player had no opponent and earned
/// `home_points` without playing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Tournament the result belongs to
    pub tournament_id: TournamentId,
    /// Round number within the tournament (1-indexed)
    pub round: u32,
    /// First participant
    pub home: PlayerId,
    /// Second participant, absent for a bye
    pub away: Option<PlayerId>,
    /// Points earned by the home side
    pub home_points: u32,
    /// Points earned by the away side (0 for a bye)
    pub away_points: u32,
    /// When the result was reported
    pub reported_at: DateTime<Utc>,
}

impl Match {
    /// Record a head-to-head result
    pub fn new(
        tournament_id: TournamentId,
        round: u32,
        home: PlayerId,
        away: PlayerId,
        home_points: u32,
        away_points: u32,
    ) -> Self {
        Self {
            tournament_id,
            round,
            home,
            away: Some(away),
            home_points,
            away_points,
            reported_at: Utc::now(),
        }
    }

    /// Record a bye for `player`, awarding it `points`
    pub fn bye(tournament_id: TournamentId, round: u32, player: PlayerId, points: u32) -> Self {
        Self {
            tournament_id,
            round,
            home: player,
            away: None,
            home_points: points,
            away_points: 0,
            reported_at: Utc::now(),
        }
    }

    /// Whether this result is a bye
    pub fn is_bye(&self) -> bool {
        self.away.is_none()
    }
}

/// A player's derived standing: recomputed from the match set on demand,
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StandingRow {
    /// Player ID
    pub player_id: PlayerId,
    /// Display name
    pub name: String,
    /// Total points earned across both sides of all matches
    pub points: u32,
    /// Total points conceded to opponents; the ranking tie-break key
    pub points_against: u32,
    /// Matches played, byes included
    pub matches: u32,
}

/// A proposed next-round matchup. An absent second player denotes a bye.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    /// First player ID
    pub player1_id: PlayerId,
    /// First player name
    pub player1_name: String,
    /// Second player ID, absent for a bye
    pub player2_id: Option<PlayerId>,
    /// Second player name, absent for a bye
    pub player2_name: Option<String>,
}

impl Pairing {
    /// Create a head-to-head pairing
    pub fn new(
        player1_id: PlayerId,
        player1_name: String,
        player2_id: PlayerId,
        player2_name: String,
    ) -> Self {
        Self {
            player1_id,
            player1_name,
            player2_id: Some(player2_id),
            player2_name: Some(player2_name),
        }
    }

    /// Create a bye pairing
    pub fn bye(player_id: PlayerId, player_name: String) -> Self {
        Self {
            player1_id: player_id,
            player1_name: player_name,
            player2_id: None,
            player2_name: None,
        }
    }

    /// Whether this pairing is a bye
    pub fn is_bye(&self) -> bool {
        self.player2_id.is_none()
    }

    /// Whether `player` takes part in this pairing
    pub fn involves(&self, player: PlayerId) -> bool {
        self.player1_id == player || self.player2_id == Some(player)
    }
}
