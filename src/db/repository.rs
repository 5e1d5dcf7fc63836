//! Repository trait definitions for testability and dependency injection.
//!
//! The core never touches storage: managers read immutable snapshots
//! through this trait and hand them to the pure ranking and pairing
//! operations. The trait boundary is what allows the in-memory
//! implementation used throughout the test suites.

use async_trait::async_trait;
use sqlx::{PgPool, Row};
use thiserror::Error;

use crate::tournament::{Match, PlayerId, Registration, TournamentId};

/// Storage errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A registration referenced a player that does not exist
    #[error("Unknown player {0}")]
    UnknownPlayer(PlayerId),
}

/// Result type for storage operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Trait for tournament storage operations
#[async_trait]
pub trait TournamentRepository: Send + Sync {
    /// Create a player record, returning the assigned id
    async fn create_player(&self, name: &str) -> StoreResult<PlayerId>;

    /// Delete every player record; registrations cascade with their players
    async fn delete_players(&self) -> StoreResult<()>;

    /// Count the registrations for a tournament
    async fn count_players(&self, tournament_id: TournamentId) -> StoreResult<u64>;

    /// Register a player for a tournament
    async fn create_registration(
        &self,
        tournament_id: TournamentId,
        player_id: PlayerId,
    ) -> StoreResult<()>;

    /// Delete registrations for one tournament, or all when `scope` is `None`
    async fn delete_registrations(&self, scope: Option<TournamentId>) -> StoreResult<()>;

    /// Append a completed match result
    async fn append_match(&self, result: &Match) -> StoreResult<()>;

    /// Delete match records for one tournament, or all when `scope` is `None`
    async fn delete_matches(&self, scope: Option<TournamentId>) -> StoreResult<()>;

    /// All registrations for a tournament, in registration order
    async fn registrations_for(
        &self,
        tournament_id: TournamentId,
    ) -> StoreResult<Vec<Registration>>;

    /// All completed matches for a tournament, in the order reported
    async fn matches_for(&self, tournament_id: TournamentId) -> StoreResult<Vec<Match>>;
}

/// Default PostgreSQL implementation of `TournamentRepository`
///
/// Expects the three-table schema: `players (id, name, created_at)`,
/// `registrations (id, tournament_id, player_id, registered_at)` with
/// `player_id` cascading on player deletion, and `matches (id,
/// tournament_id, round, home_player_id, away_player_id, home_points,
/// away_points, reported_at)` with a nullable `away_player_id` for byes.
pub struct PgTournamentRepository {
    pool: PgPool,
}

impl PgTournamentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TournamentRepository for PgTournamentRepository {
    async fn create_player(&self, name: &str) -> StoreResult<PlayerId> {
        let row = sqlx::query("INSERT INTO players (name) VALUES ($1) RETURNING id")
            .bind(name)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get("id"))
    }

    async fn delete_players(&self) -> StoreResult<()> {
        sqlx::query("DELETE FROM players").execute(&self.pool).await?;
        Ok(())
    }

    async fn count_players(&self, tournament_id: TournamentId) -> StoreResult<u64> {
        let row = sqlx::query("SELECT COUNT(*) AS count FROM registrations WHERE tournament_id = $1")
            .bind(tournament_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(row.get::<i64, _>("count") as u64)
    }

    async fn create_registration(
        &self,
        tournament_id: TournamentId,
        player_id: PlayerId,
    ) -> StoreResult<()> {
        sqlx::query("INSERT INTO registrations (tournament_id, player_id) VALUES ($1, $2)")
            .bind(tournament_id)
            .bind(player_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete_registrations(&self, scope: Option<TournamentId>) -> StoreResult<()> {
        match scope {
            Some(tournament_id) => {
                sqlx::query("DELETE FROM registrations WHERE tournament_id = $1")
                    .bind(tournament_id)
                    .execute(&self.pool)
                    .await?;
            }
            None => {
                sqlx::query("DELETE FROM registrations")
                    .execute(&self.pool)
                    .await?;
            }
        }
        Ok(())
    }

    async fn append_match(&self, result: &Match) -> StoreResult<()> {
        sqlx::query(
            r#"
            INSERT INTO matches (tournament_id, round, home_player_id, away_player_id, home_points, away_points)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(result.tournament_id)
        .bind(result.round as i32)
        .bind(result.home)
        .bind(result.away)
        .bind(result.home_points as i32)
        .bind(result.away_points as i32)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn delete_matches(&self, scope: Option<TournamentId>) -> StoreResult<()> {
        match scope {
            Some(tournament_id) => {
                sqlx::query("DELETE FROM matches WHERE tournament_id = $1")
                    .bind(tournament_id)
                    .execute(&self.pool)
                    .await?;
            }
            None => {
                sqlx::query("DELETE FROM matches").execute(&self.pool).await?;
            }
        }
        Ok(())
    }

    async fn registrations_for(
        &self,
        tournament_id: TournamentId,
    ) -> StoreResult<Vec<Registration>> {
        let rows = sqlx::query(
            r#"
            SELECT r.player_id, p.name, r.registered_at
            FROM registrations r
            JOIN players p ON p.id = r.player_id
            WHERE r.tournament_id = $1
            ORDER BY r.id
            "#,
        )
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Registration {
                player_id: row.get("player_id"),
                name: row.get("name"),
                registered_at: row
                    .get::<chrono::NaiveDateTime, _>("registered_at")
                    .and_utc(),
            })
            .collect())
    }

    async fn matches_for(&self, tournament_id: TournamentId) -> StoreResult<Vec<Match>> {
        let rows = sqlx::query(
            r#"
            SELECT tournament_id, round, home_player_id, away_player_id,
                   home_points, away_points, reported_at
            FROM matches
            WHERE tournament_id = $1
            ORDER BY id
            "#,
        )
        .bind(tournament_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Match {
                tournament_id: row.get("tournament_id"),
                round: row.get::<i32, _>("round") as u32,
                home: row.get("home_player_id"),
                away: row.get("away_player_id"),
                home_points: row.get::<i32, _>("home_points") as u32,
                away_points: row.get::<i32, _>("away_points") as u32,
                reported_at: row.get::<chrono::NaiveDateTime, _>("reported_at").and_utc(),
            })
            .collect())
    }
}
