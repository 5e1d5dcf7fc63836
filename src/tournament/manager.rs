//! Tournament manager: the thin orchestration layer that owns persistence
//! and feeds immutable snapshots into the pure ranking and pairing core.

use serde::{Deserialize, Serialize};

use super::errors::TournamentResult;
use super::models::{Match, Pairing, PlayerId, StandingRow, TournamentId};
use super::scoring::MatchScoring;
use crate::db::TournamentRepository;
use crate::{pairing, standings};

/// The pairings produced for one round, together with the count a fully
/// covered round would have.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundPairings {
    /// Pairings in ranking order; the bye pairing, if any, comes last
    pub pairings: Vec<Pairing>,
    /// Pairings a full round needs to cover every registered player
    pub expected: usize,
}

impl RoundPairings {
    /// Whether every registered player was paired.
    ///
    /// A short round means the engine ran out of rematch-free opponents;
    /// callers decide whether to accept it, intervene, or abort the round.
    pub fn is_complete(&self) -> bool {
        self.pairings.len() >= self.expected
    }
}

/// Tournament manager
///
/// Wraps a [`TournamentRepository`] and a [`MatchScoring`] convention. All
/// reads are snapshots: standings and pairings are recomputed from scratch
/// per call, so results reported in between are always picked up. Callers
/// running concurrent round generation for one tournament must serialize it
/// at the storage layer; the manager assumes each call sees a consistent
/// snapshot.
pub struct TournamentManager<R> {
    repo: R,
    scoring: MatchScoring,
}

impl<R: TournamentRepository> TournamentManager<R> {
    /// Create a manager with the standard 2/1/0 scoring convention
    pub fn new(repo: R) -> Self {
        Self {
            repo,
            scoring: MatchScoring::standard(),
        }
    }

    /// Create a manager with a caller-supplied scoring convention
    pub fn with_scoring(repo: R, scoring: MatchScoring) -> Self {
        Self { repo, scoring }
    }

    /// The scoring convention applied to reported results
    pub fn scoring(&self) -> MatchScoring {
        self.scoring
    }

    /// Create a player record, returning the assigned id
    pub async fn register_player(&self, name: &str) -> TournamentResult<PlayerId> {
        let id = self.repo.create_player(name).await?;
        log::debug!("registered player {} ({})", name, id);
        Ok(id)
    }

    /// Register an existing player for a tournament
    pub async fn enroll(
        &self,
        tournament_id: TournamentId,
        player_id: PlayerId,
    ) -> TournamentResult<()> {
        self.repo
            .create_registration(tournament_id, player_id)
            .await?;
        Ok(())
    }

    /// Number of players registered for a tournament
    pub async fn count_players(&self, tournament_id: TournamentId) -> TournamentResult<u64> {
        Ok(self.repo.count_players(tournament_id).await?)
    }

    /// Delete every player record (registrations go with them)
    pub async fn reset_players(&self) -> TournamentResult<()> {
        Ok(self.repo.delete_players().await?)
    }

    /// Delete registrations for one tournament, or all of them
    pub async fn reset_registrations(
        &self,
        scope: Option<TournamentId>,
    ) -> TournamentResult<()> {
        Ok(self.repo.delete_registrations(scope).await?)
    }

    /// Delete match records for one tournament, or all of them
    pub async fn reset_matches(&self, scope: Option<TournamentId>) -> TournamentResult<()> {
        Ok(self.repo.delete_matches(scope).await?)
    }

    /// Report a decisive result, scoring it by the manager's convention
    pub async fn report_win(
        &self,
        tournament_id: TournamentId,
        round: u32,
        winner: PlayerId,
        loser: PlayerId,
    ) -> TournamentResult<()> {
        let result = Match::new(
            tournament_id,
            round,
            winner,
            loser,
            self.scoring.win,
            self.scoring.loss,
        );
        self.record_result(result).await
    }

    /// Report a drawn result, scoring it by the manager's convention
    pub async fn report_draw(
        &self,
        tournament_id: TournamentId,
        round: u32,
        home: PlayerId,
        away: PlayerId,
    ) -> TournamentResult<()> {
        let result = Match::new(
            tournament_id,
            round,
            home,
            away,
            self.scoring.draw,
            self.scoring.draw,
        );
        self.record_result(result).await
    }

    /// Report a bye, awarding the convention's bye points
    pub async fn report_bye(
        &self,
        tournament_id: TournamentId,
        round: u32,
        player: PlayerId,
    ) -> TournamentResult<()> {
        let result = Match::bye(tournament_id, round, player, self.scoring.bye);
        self.record_result(result).await
    }

    /// Append a caller-built, points-based result as-is
    pub async fn record_result(&self, result: Match) -> TournamentResult<()> {
        self.repo.append_match(&result).await?;
        Ok(())
    }

    /// Current standings, recomputed from the full match history
    pub async fn standings(&self, tournament_id: TournamentId) -> TournamentResult<Vec<StandingRow>> {
        let registrations = self.repo.registrations_for(tournament_id).await?;
        let matches = self.repo.matches_for(tournament_id).await?;
        Ok(standings::rank(tournament_id, &registrations, &matches))
    }

    /// Generate the next round's pairings from the current snapshots
    pub async fn next_round(&self, tournament_id: TournamentId) -> TournamentResult<RoundPairings> {
        let registrations = self.repo.registrations_for(tournament_id).await?;
        let matches = self.repo.matches_for(tournament_id).await?;
        let bye_history = pairing::bye_recipients(&matches);

        let pairings =
            pairing::next_round(tournament_id, &registrations, &matches, &bye_history)?;
        let expected = registrations.len().div_ceil(2);
        log::info!(
            "tournament {}: generated {} of {} expected pairings",
            tournament_id,
            pairings.len(),
            expected
        );
        Ok(RoundPairings { pairings, expected })
    }
}
