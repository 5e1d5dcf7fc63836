//! In-memory storage for tests and embedded callers.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Mutex;

use super::repository::{StoreError, StoreResult, TournamentRepository};
use crate::tournament::{Match, Player, PlayerId, Registration, TournamentId};

/// In-process `TournamentRepository` backed by plain vectors.
///
/// Mirrors the PostgreSQL three-table layout, including the registration
/// cascade on player deletion. Intended for tests and single-process
/// embedding; every operation succeeds unless a registration references an
/// unknown player.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    inner: Mutex<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    next_player_id: PlayerId,
    players: Vec<Player>,
    registrations: Vec<(TournamentId, Registration)>,
    matches: Vec<Match>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TournamentRepository for MemoryRepository {
    async fn create_player(&self, name: &str) -> StoreResult<PlayerId> {
        let mut tables = self.inner.lock().await;
        tables.next_player_id += 1;
        let id = tables.next_player_id;
        tables.players.push(Player {
            id,
            name: name.to_string(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn delete_players(&self) -> StoreResult<()> {
        let mut tables = self.inner.lock().await;
        tables.players.clear();
        tables.registrations.clear();
        Ok(())
    }

    async fn count_players(&self, tournament_id: TournamentId) -> StoreResult<u64> {
        let tables = self.inner.lock().await;
        Ok(tables
            .registrations
            .iter()
            .filter(|(t, _)| *t == tournament_id)
            .count() as u64)
    }

    async fn create_registration(
        &self,
        tournament_id: TournamentId,
        player_id: PlayerId,
    ) -> StoreResult<()> {
        let mut tables = self.inner.lock().await;
        let name = tables
            .players
            .iter()
            .find(|player| player.id == player_id)
            .map(|player| player.name.clone())
            .ok_or(StoreError::UnknownPlayer(player_id))?;
        tables.registrations.push((
            tournament_id,
            Registration {
                player_id,
                name,
                registered_at: Utc::now(),
            },
        ));
        Ok(())
    }

    async fn delete_registrations(&self, scope: Option<TournamentId>) -> StoreResult<()> {
        let mut tables = self.inner.lock().await;
        match scope {
            Some(tournament_id) => tables.registrations.retain(|(t, _)| *t != tournament_id),
            None => tables.registrations.clear(),
        }
        Ok(())
    }

    async fn append_match(&self, result: &Match) -> StoreResult<()> {
        let mut tables = self.inner.lock().await;
        tables.matches.push(result.clone());
        Ok(())
    }

    async fn delete_matches(&self, scope: Option<TournamentId>) -> StoreResult<()> {
        let mut tables = self.inner.lock().await;
        match scope {
            Some(tournament_id) => tables
                .matches
                .retain(|m| m.tournament_id != tournament_id),
            None => tables.matches.clear(),
        }
        Ok(())
    }

    async fn registrations_for(
        &self,
        tournament_id: TournamentId,
    ) -> StoreResult<Vec<Registration>> {
        let tables = self.inner.lock().await;
        Ok(tables
            .registrations
            .iter()
            .filter(|(t, _)| *t == tournament_id)
            .map(|(_, registration)| registration.clone())
            .collect())
    }

    async fn matches_for(&self, tournament_id: TournamentId) -> StoreResult<Vec<Match>> {
        let tables = self.inner.lock().await;
        Ok(tables
            .matches
            .iter()
            .filter(|m| m.tournament_id == tournament_id)
            .cloned()
            .collect())
    }
}
