//! Standings tables: aggregate decided matches into ranked rows.

use crate::models::{Match, StandingsRow, TeamId, Tournament, TournamentKind};
use log::debug;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Compute the ranked table for `team_ids` from `matches`.
///
/// Every team gets a row, even without matches. A match is skipped when either
/// score is missing, or when its home or away team is not in `team_ids` (so
/// knockout or foreign matches never leak into a group table).
///
/// Ranking: points, then goal difference, both descending. Remaining ties keep
/// the order of `team_ids` (the sort is stable); there is no head-to-head rule.
pub fn compute_standings<'a, I>(team_ids: &[TeamId], matches: I) -> Vec<StandingsRow>
where
    I: IntoIterator<Item = &'a Match>,
{
    let mut rows: Vec<StandingsRow> = Vec::with_capacity(team_ids.len());
    let mut index: HashMap<TeamId, usize> = HashMap::with_capacity(team_ids.len());
    for &id in team_ids {
        if !index.contains_key(&id) {
            index.insert(id, rows.len());
            rows.push(StandingsRow::new(id));
        }
    }

    let mut counted = 0usize;
    for m in matches {
        let Some((home_goals, away_goals)) = m.score() else {
            continue;
        };
        let (Some(&home), Some(&away)) = (index.get(&m.home), index.get(&m.away)) else {
            continue;
        };
        rows[home].record(home_goals, away_goals);
        rows[away].record(away_goals, home_goals);
        counted += 1;
    }

    rows.sort_by_key(|r| (Reverse(r.points), Reverse(r.goal_difference())));
    debug!("Standings for {} teams from {} decided matches", rows.len(), counted);
    rows
}

/// One table per group of a cup, built only from that group's group-stage matches.
/// Empty for a league.
pub fn group_standings(tournament: &Tournament) -> Vec<(String, Vec<StandingsRow>)> {
    tournament
        .kind
        .groups()
        .iter()
        .map(|group| {
            let group_matches = tournament
                .matches
                .iter()
                .filter(|m| m.stage.is_group(&group.label));
            (
                group.label.clone(),
                compute_standings(&group.team_ids, group_matches),
            )
        })
        .collect()
}

/// Tables to display for a tournament.
///
/// League: one unlabelled table over all participants and all matches.
/// Cup with groups: the per-group tables. A cup without groups falls back to the league table.
pub fn tournament_standings(tournament: &Tournament) -> Vec<(Option<String>, Vec<StandingsRow>)> {
    match &tournament.kind {
        TournamentKind::GroupCup { groups } if !groups.is_empty() => group_standings(tournament)
            .into_iter()
            .map(|(label, rows)| (Some(label), rows))
            .collect(),
        _ => vec![(
            None,
            compute_standings(&tournament.team_ids, &tournament.matches),
        )],
    }
}
