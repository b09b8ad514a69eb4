//! Setup: create a league or a cup with groups, optionally with a generated schedule.

use crate::logic::schedule::{generate_group_schedule, generate_schedule};
use crate::models::{Group, TeamId, Tournament, TournamentError, TournamentKind};
use log::info;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Format requested when creating a tournament.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TournamentFormat {
    League,
    /// `group_count` is clamped to `1..=team count`.
    GroupCup { group_count: usize },
}

/// Whether fixtures are generated at creation or entered by hand later.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleMode {
    #[default]
    Auto,
    Manual,
}

/// Label for the group at `index`: "A" to "Z", then "AA" to "ZZ", then "AAA", ...
/// Distinct indices always give distinct labels.
pub fn group_label(index: usize) -> String {
    let mut label = Vec::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        label.push(char::from(b'A' + (n % 26) as u8));
        n /= 26;
    }
    label.iter().rev().collect()
}

/// Split teams into `group_count` groups by dealing them out in order
/// (team 0 to A, team 1 to B, ...). The count is clamped to `1..=teams.len()`.
pub fn distribute_into_groups(team_ids: &[TeamId], group_count: usize) -> Vec<Group> {
    let count = group_count.clamp(1, team_ids.len().max(1));
    let mut members: Vec<Vec<TeamId>> = vec![Vec::new(); count];
    for (i, &id) in team_ids.iter().enumerate() {
        members[i % count].push(id);
    }
    members
        .into_iter()
        .enumerate()
        .map(|(i, ids)| Group::new(group_label(i), ids))
        .collect()
}

/// Create a tournament over `team_ids`.
///
/// Requires a non-blank name and at least two distinct teams. With
/// [`ScheduleMode::Auto`] a league gets a full round-robin schedule and a cup gets
/// one round-robin per group.
pub fn create_tournament(
    name: &str,
    format: TournamentFormat,
    team_ids: Vec<TeamId>,
    schedule: ScheduleMode,
) -> Result<Tournament, TournamentError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(TournamentError::EmptyName);
    }
    let mut seen = HashSet::with_capacity(team_ids.len());
    for &id in &team_ids {
        if !seen.insert(id) {
            return Err(TournamentError::DuplicateTeam(id));
        }
    }
    if team_ids.len() < 2 {
        return Err(TournamentError::NotEnoughTeams);
    }

    let kind = match format {
        TournamentFormat::League => TournamentKind::League,
        TournamentFormat::GroupCup { group_count } => TournamentKind::GroupCup {
            groups: distribute_into_groups(&team_ids, group_count),
        },
    };

    let mut tournament = Tournament::new(name, kind, team_ids);
    if schedule == ScheduleMode::Auto {
        tournament.matches = match &tournament.kind {
            TournamentKind::League => generate_schedule(&tournament.team_ids),
            TournamentKind::GroupCup { groups } => {
                groups.iter().flat_map(generate_group_schedule).collect()
            }
        };
    }

    info!(
        "Created tournament {} ({:?}) with {} teams and {} matches",
        tournament.name,
        format,
        tournament.team_ids.len(),
        tournament.matches.len()
    );
    Ok(tournament)
}
