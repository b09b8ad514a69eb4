//! Match entry: add fixtures by hand, record or clear scores, remove matches.

use crate::models::{Match, MatchId, Stage, TeamId, Tournament, TournamentError};
use log::debug;

/// Add a match between two participants.
///
/// In a cup every hand-added match is a knockout match (without a stage label);
/// in a league it is a league match.
pub fn add_match(
    tournament: &mut Tournament,
    round: Option<u32>,
    home: TeamId,
    away: TeamId,
) -> Result<MatchId, TournamentError> {
    if home == away {
        return Err(TournamentError::SameTeamTwice);
    }
    for id in [home, away] {
        if !tournament.has_team(id) {
            return Err(TournamentError::TeamNotInTournament(id));
        }
    }
    let stage = if tournament.is_group_cup() {
        Stage::Knockout {
            knockout_round: None,
        }
    } else {
        Stage::League
    };
    // A round of 0 means "unscheduled".
    let m = Match::new(round.filter(|&r| r > 0), home, away, stage);
    let id = m.id;
    tournament.matches.push(m);
    Ok(id)
}

/// Set the final score of a match (overwrites an earlier result).
pub fn record_result(
    tournament: &mut Tournament,
    match_id: MatchId,
    home_goals: u32,
    away_goals: u32,
) -> Result<(), TournamentError> {
    let m = tournament
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    m.home_goals = Some(home_goals);
    m.away_goals = Some(away_goals);
    debug!("Match {}: {}:{}", match_id, home_goals, away_goals);
    Ok(())
}

/// Mark a match as not played again.
pub fn clear_result(tournament: &mut Tournament, match_id: MatchId) -> Result<(), TournamentError> {
    let m = tournament
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    m.home_goals = None;
    m.away_goals = None;
    Ok(())
}

/// Remove a match by id.
pub fn remove_match(tournament: &mut Tournament, match_id: MatchId) -> Result<(), TournamentError> {
    let idx = tournament
        .matches
        .iter()
        .position(|m| m.id == match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    tournament.matches.remove(idx);
    Ok(())
}
