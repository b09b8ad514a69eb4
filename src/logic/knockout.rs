//! Knockout stage: qualify group winners and runners-up, pair them across groups.

use crate::logic::round_name::round_name;
use crate::logic::standings::group_standings;
use crate::models::{
    Ineligibility, Match, Stage, TeamId, Tournament, TournamentError, TournamentKind,
};
use log::{info, warn};

/// A team advancing from the group stage.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Qualifier {
    pub group: String,
    /// 1 = group winner, 2 = runner-up.
    pub position: u8,
    pub team_id: TeamId,
}

/// Winners and runners-up of every group, ordered by group label.
pub fn qualifiers(tournament: &Tournament) -> Vec<Qualifier> {
    let mut tables = group_standings(tournament);
    tables.sort_by(|(a, _), (b, _)| a.cmp(b));
    tables
        .into_iter()
        .flat_map(|(label, rows)| {
            rows.into_iter()
                .take(2)
                .zip(1u8..)
                .map(move |(row, position)| Qualifier {
                    group: label.clone(),
                    position,
                    team_id: row.team_id,
                })
        })
        .collect()
}

fn find(qualified: &[Qualifier], group: &str, position: u8) -> Option<TeamId> {
    qualified
        .iter()
        .find(|q| q.group == group && q.position == position)
        .map(|q| q.team_id)
}

/// Compute the next-round fixtures from the current group tables, without touching the tournament.
///
/// Groups are sorted by label and taken two at a time (A with B, C with D, ...).
/// For each pair the winner of the first meets the runner-up of the second and
/// vice versa. A trailing unpaired group produces nothing.
pub fn knockout_fixtures(tournament: &Tournament) -> Result<Vec<Match>, TournamentError> {
    let groups = match &tournament.kind {
        TournamentKind::GroupCup { groups } if !groups.is_empty() => groups,
        _ => {
            return Err(TournamentError::NotEligible(
                Ineligibility::WrongTournamentShape,
            ))
        }
    };

    let qualified = qualifiers(tournament);
    if qualified.len() < 2 {
        return Err(TournamentError::NotEligible(
            Ineligibility::InsufficientQualifiers,
        ));
    }

    let label = round_name(qualified.len());
    let stage = Stage::Knockout {
        knockout_round: Some(label.to_string()),
    };

    let mut labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
    labels.sort_unstable();

    let mut fixtures = Vec::new();
    for pair in labels.chunks_exact(2) {
        let (a, b) = (pair[0], pair[1]);
        if let (Some(home), Some(away)) = (find(&qualified, a, 1), find(&qualified, b, 2)) {
            fixtures.push(Match::new(None, home, away, stage.clone()));
        }
        if let (Some(home), Some(away)) = (find(&qualified, b, 1), find(&qualified, a, 2)) {
            fixtures.push(Match::new(None, home, away, stage.clone()));
        }
    }

    if fixtures.is_empty() {
        return Err(TournamentError::NotEligible(
            Ineligibility::NoPairingsProduced,
        ));
    }
    Ok(fixtures)
}

/// Rebuild the knockout stage from the group tables.
///
/// On success every existing knockout match is removed and replaced by the new
/// fixtures. On error the tournament is left unchanged.
pub fn build_knockout_stage(tournament: &mut Tournament) -> Result<(), TournamentError> {
    let fixtures = knockout_fixtures(tournament).map_err(|e| {
        warn!("Tournament {}: {}", tournament.id, e);
        e
    })?;

    let before = tournament.matches.len();
    tournament.matches.retain(|m| !m.stage.is_knockout());
    let removed = before - tournament.matches.len();

    info!(
        "Tournament {}: replaced {} knockout match(es) with {} new fixture(s)",
        tournament.id,
        removed,
        fixtures.len()
    );
    tournament.matches.extend(fixtures);
    Ok(())
}
