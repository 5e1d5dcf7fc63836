//! Standings computation over a tournament's match history.

use crate::tournament::{Match, Registration, StandingRow, TournamentId};

/// Rank the registered players of a tournament by accumulated points.
///
/// Every registration yields a row, so players with no matches appear with
/// zero points and zero matches played. A bye counts as a played match for
/// its recipient, contributing whatever points were recorded on it.
///
/// Ordering is total points descending, then points conceded ascending, with
/// remaining ties left in roster order. The sort is stable, which keeps
/// pairing reproducible across identical inputs.
pub fn rank(
    tournament_id: TournamentId,
    registrations: &[Registration],
    matches: &[Match],
) -> Vec<StandingRow> {
    let mut rows: Vec<StandingRow> = registrations
        .iter()
        .map(|reg| {
            let mut points = 0;
            let mut points_against = 0;
            let mut played = 0;
            for result in matches.iter().filter(|m| m.tournament_id == tournament_id) {
                if result.home == reg.player_id {
                    points += result.home_points;
                    points_against += result.away_points;
                    played += 1;
                } else if result.away == Some(reg.player_id) {
                    points += result.away_points;
                    points_against += result.home_points;
                    played += 1;
                }
            }
            StandingRow {
                player_id: reg.player_id,
                name: reg.name.clone(),
                points,
                points_against,
                matches: played,
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(a.points_against.cmp(&b.points_against))
    });
    rows
}
