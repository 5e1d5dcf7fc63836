//! Next-round pairing: sequential pairing for the first round, then
//! rematch-avoiding adjacent pairing over the standings with single-bye
//! rotation.

use super::errors::{PairingError, PairingResult};
use crate::standings;
use crate::tournament::{Match, Pairing, PlayerId, Registration, StandingRow, TournamentId};

/// Produce the pairings for a tournament's next round.
///
/// With no completed matches for the tournament, the roster is paired
/// sequentially in registration order; an odd roster gives the final
/// unpaired player the bye. Once matches exist, pairing runs over the
/// current standings instead: with an odd field the best-ranked player
/// without a prior bye sits out, then each remaining list head is paired
/// with the nearest-ranked player it has not faced, scanning outward past
/// previous opponents.
///
/// Two players who share a completed match are never paired again. When the
/// list head has faced every remaining player, the engine stops and returns
/// the pairings found so far. A short result is not an error, so callers
/// compare the returned length against the expected pairing count. The
/// greedy outward scan is not guaranteed to find a complete rematch-free
/// pairing even when one exists.
///
/// `bye_history` lists prior bye recipients in the order the byes were
/// recorded; [`bye_recipients`] derives it from a match snapshot.
///
/// # Errors
///
/// [`PairingError::NoPlayers`] when a first round is requested for an empty
/// roster.
pub fn next_round(
    tournament_id: TournamentId,
    registrations: &[Registration],
    matches: &[Match],
    bye_history: &[PlayerId],
) -> PairingResult<Vec<Pairing>> {
    let played: Vec<&Match> = matches
        .iter()
        .filter(|m| m.tournament_id == tournament_id)
        .collect();

    if played.is_empty() {
        return first_round(tournament_id, registrations);
    }

    let mut working = standings::rank(tournament_id, registrations, matches);
    let mut pairings = Vec::with_capacity(working.len().div_ceil(2));

    // The bye must be settled before pairing so the sit-out never steals a
    // legal opponent from the field.
    let mut bye = None;
    if working.len() % 2 == 1 {
        let row = working.remove(select_bye(&working, bye_history));
        log::debug!(
            "tournament {}: bye goes to {} ({})",
            tournament_id,
            row.name,
            row.player_id
        );
        bye = Some(Pairing::bye(row.player_id, row.name));
    }

    while working.len() > 1 {
        let opponent = (1..working.len())
            .find(|&i| !have_played(working[0].player_id, working[i].player_id, &played));
        match opponent {
            Some(i) => {
                let away = working.remove(i);
                let home = working.remove(0);
                pairings.push(Pairing::new(home.player_id, home.name, away.player_id, away.name));
            }
            None => {
                log::warn!(
                    "tournament {}: {} remaining players have all faced each other, \
                     returning {} pairings",
                    tournament_id,
                    working.len(),
                    pairings.len() + usize::from(bye.is_some())
                );
                break;
            }
        }
    }

    if let Some(pairing) = bye {
        pairings.push(pairing);
    }
    Ok(pairings)
}

/// Prior bye recipients, in the order the byes were recorded. Derived from
/// matches with an absent opponent.
pub fn bye_recipients(matches: &[Match]) -> Vec<PlayerId> {
    matches
        .iter()
        .filter(|m| m.is_bye())
        .map(|m| m.home)
        .collect()
}

/// Round 1: no results to rank by yet, so pairing is sequential over the
/// roster in registration order.
fn first_round(
    tournament_id: TournamentId,
    registrations: &[Registration],
) -> PairingResult<Vec<Pairing>> {
    if registrations.is_empty() {
        return Err(PairingError::NoPlayers(tournament_id));
    }

    log::debug!(
        "tournament {}: no matches yet, pairing round 1 over {} registrations",
        tournament_id,
        registrations.len()
    );

    let mut pairings = Vec::with_capacity(registrations.len().div_ceil(2));
    for pair in registrations.chunks(2) {
        match pair {
            [first, second] => pairings.push(Pairing::new(
                first.player_id,
                first.name.clone(),
                second.player_id,
                second.name.clone(),
            )),
            [last] => pairings.push(Pairing::bye(last.player_id, last.name.clone())),
            _ => unreachable!("chunks(2) yields one or two registrations"),
        }
    }
    Ok(pairings)
}

/// Index of the player who sits out this round: the best-ranked player with
/// no prior bye.
///
/// When every remaining player has already had a bye (more rounds than
/// players), fairness can no longer be satisfied; the fallback is the
/// lowest-ranked player, skipping the most recent bye recipient when any
/// alternative exists so the same player does not sit out twice in a row.
fn select_bye(working: &[StandingRow], bye_history: &[PlayerId]) -> usize {
    if let Some(idx) = working
        .iter()
        .position(|row| !bye_history.contains(&row.player_id))
    {
        return idx;
    }

    let most_recent = bye_history.last().copied();
    working
        .iter()
        .rposition(|row| Some(row.player_id) != most_recent)
        .unwrap_or(working.len() - 1)
}

/// Whether the two players share a completed match, in either orientation.
fn have_played(a: PlayerId, b: PlayerId, matches: &[&Match]) -> bool {
    matches
        .iter()
        .any(|m| (m.home == a && m.away == Some(b)) || (m.home == b && m.away == Some(a)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn reg(player_id: i64, name: &str) -> Registration {
        Registration {
            player_id,
            name: name.to_string(),
            registered_at: Utc::now(),
        }
    }

    fn roster(n: i64) -> Vec<Registration> {
        (1..=n).map(|id| reg(id, &format!("player{id}"))).collect()
    }

    #[test]
    fn test_first_round_pairs_roster_in_order() {
        let pairings = next_round(1, &roster(4), &[], &[]).unwrap();

        assert_eq!(pairings.len(), 2);
        assert_eq!(pairings[0].player1_id, 1);
        assert_eq!(pairings[0].player2_id, Some(2));
        assert_eq!(pairings[1].player1_id, 3);
        assert_eq!(pairings[1].player2_id, Some(4));
    }

    #[test]
    fn test_first_round_odd_roster_gets_trailing_bye() {
        let pairings = next_round(1, &roster(5), &[], &[]).unwrap();

        assert_eq!(pairings.len(), 3);
        assert!(pairings[2].is_bye());
        assert_eq!(pairings[2].player1_id, 5);
    }

    #[test]
    fn test_first_round_empty_roster_is_an_error() {
        let result = next_round(1, &[], &[], &[]);
        assert!(matches!(result, Err(PairingError::NoPlayers(1))));
    }

    #[test]
    fn test_single_registrant_first_round_is_one_bye() {
        let pairings = next_round(1, &roster(1), &[], &[]).unwrap();
        assert_eq!(pairings.len(), 1);
        assert!(pairings[0].is_bye());
    }

    #[test]
    fn test_second_round_pairs_winners_together() {
        // Round 1: 1 beat 2, 3 beat 4. Round 2 must pair 1-3 and 2-4.
        let matches = vec![Match::new(1, 1, 1, 2, 2, 0), Match::new(1, 1, 3, 4, 2, 0)];

        let pairings = next_round(1, &roster(4), &matches, &[]).unwrap();

        assert_eq!(pairings.len(), 2);
        assert_eq!(pairings[0].player1_id, 1);
        assert_eq!(pairings[0].player2_id, Some(3));
        assert_eq!(pairings[1].player1_id, 2);
        assert_eq!(pairings[1].player2_id, Some(4));
    }

    #[test]
    fn test_two_players_who_met_yield_short_result() {
        let matches = vec![Match::new(1, 1, 1, 2, 2, 0)];

        let pairings = next_round(1, &roster(2), &matches, &[]).unwrap();

        assert!(pairings.is_empty());
    }

    #[test]
    fn test_bye_goes_to_best_ranked_without_prior_bye() {
        // Round 1 over three players: (1,2) played, 3 sat out.
        let matches = vec![Match::new(1, 1, 1, 2, 2, 0), Match::bye(1, 1, 3, 2)];
        let bye_history = bye_recipients(&matches);

        let pairings = next_round(1, &roster(3), &matches, &bye_history).unwrap();

        assert_eq!(pairings.len(), 2);
        // Player 1 tops the standings and has not sat out, so the bye is
        // theirs; the bye pairing is emitted last.
        assert!(pairings[1].is_bye());
        assert_eq!(pairings[1].player1_id, 1);
        assert_eq!(pairings[0].player1_id, 3);
        assert_eq!(pairings[0].player2_id, Some(2));
    }

    #[test]
    fn test_bye_never_repeats_while_someone_is_bye_free() {
        // Rounds 1 and 2 gave byes to 3 and 1; round 3 must give 2 the bye.
        let matches = vec![
            Match::new(1, 1, 1, 2, 2, 0),
            Match::bye(1, 1, 3, 2),
            Match::new(1, 2, 3, 2, 2, 0),
            Match::bye(1, 2, 1, 2),
        ];
        let bye_history = bye_recipients(&matches);
        assert_eq!(bye_history, vec![3, 1]);

        let pairings = next_round(1, &roster(3), &matches, &bye_history).unwrap();

        let bye = pairings.iter().find(|p| p.is_bye()).unwrap();
        assert_eq!(bye.player1_id, 2);
        // 1 and 3 have not met, so the round is complete.
        assert_eq!(pairings.len(), 2);
    }

    #[test]
    fn test_exhausted_bye_rotation_skips_most_recent_recipient() {
        // Everyone has sat out once, most recently player 2. The fallback
        // picks the lowest-ranked player other than 2.
        let matches = vec![
            Match::new(1, 1, 1, 2, 2, 0),
            Match::bye(1, 1, 3, 2),
            Match::new(1, 2, 3, 2, 2, 0),
            Match::bye(1, 2, 1, 2),
            Match::new(1, 3, 1, 3, 2, 0),
            Match::bye(1, 3, 2, 2),
        ];
        let bye_history = bye_recipients(&matches);
        assert_eq!(bye_history, vec![3, 1, 2]);

        let pairings = next_round(1, &roster(3), &matches, &bye_history).unwrap();

        let bye = pairings.iter().find(|p| p.is_bye()).unwrap();
        assert_ne!(bye.player1_id, 2);
    }

    #[test]
    fn test_short_result_still_includes_the_bye() {
        // All head-to-head combinations among 1, 2, 3 are used up, so only
        // the bye pairing can be produced.
        let matches = vec![
            Match::new(1, 1, 1, 2, 2, 0),
            Match::bye(1, 1, 3, 2),
            Match::new(1, 2, 1, 3, 2, 0),
            Match::bye(1, 2, 2, 2),
            Match::new(1, 3, 2, 3, 2, 0),
            Match::bye(1, 3, 1, 2),
        ];
        let bye_history = bye_recipients(&matches);

        let pairings = next_round(1, &roster(3), &matches, &bye_history).unwrap();

        assert_eq!(pairings.len(), 1);
        assert!(pairings[0].is_bye());
    }

    #[test]
    fn test_rematch_scan_reaches_past_previous_opponents() {
        // 1 already faced 2 and 3, so the head scan must reach down to 4.
        let matches = vec![
            Match::new(1, 1, 1, 2, 2, 0),
            Match::new(1, 1, 3, 4, 2, 0),
            Match::new(1, 2, 1, 3, 2, 0),
            Match::new(1, 2, 2, 4, 2, 0),
        ];

        let pairings = next_round(1, &roster(4), &matches, &[]).unwrap();

        assert_eq!(pairings.len(), 2);
        assert_eq!(pairings[0].player1_id, 1);
        assert_eq!(pairings[0].player2_id, Some(4));
        assert_eq!(pairings[1].player1_id, 2);
        assert_eq!(pairings[1].player2_id, Some(3));
    }

    #[test]
    fn test_matches_of_other_tournaments_do_not_force_round_one() {
        // A completed match in tournament 2 must not push tournament 1 out
        // of round-1 mode, nor count as a rematch there.
        let matches = vec![Match::new(2, 1, 1, 2, 2, 0)];

        let pairings = next_round(1, &roster(2), &matches, &[]).unwrap();

        assert_eq!(pairings.len(), 1);
        assert_eq!(pairings[0].player1_id, 1);
        assert_eq!(pairings[0].player2_id, Some(2));
    }

    #[test]
    fn test_next_round_is_idempotent() {
        let matches = vec![Match::new(1, 1, 1, 2, 2, 0), Match::new(1, 1, 3, 4, 2, 0)];
        let first = next_round(1, &roster(4), &matches, &[]).unwrap();
        let second = next_round(1, &roster(4), &matches, &[]).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_bye_recipients_preserves_order() {
        let matches = vec![
            Match::bye(1, 1, 5, 2),
            Match::new(1, 1, 1, 2, 2, 0),
            Match::bye(1, 2, 3, 2),
        ];
        assert_eq!(bye_recipients(&matches), vec![5, 3]);
    }
}
