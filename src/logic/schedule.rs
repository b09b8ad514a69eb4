//! Round-robin fixture generation (circle method).

use crate::models::{Group, Match, Stage, TeamId};
use log::debug;

/// A position in the rotation: a real team or the bye that pads odd fields.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Slot {
    Team(TeamId),
    Bye,
}

/// Generate a single round-robin schedule: every pair of teams meets exactly once.
///
/// 1. Fewer than 2 teams: no matches.
/// 2. Odd count: a bye is appended; whoever is paired with it sits that round out.
/// 3. For N slots, play N-1 rounds. In each round slot `i` hosts slot `N-1-i`.
/// 4. After each round slot 0 stays put and the others rotate one step
///    (the last slot moves to position 1).
///
/// Home/away is whatever side of the pairing a team lands on; it is not balanced.
/// Team ids must be distinct.
pub fn generate_schedule(team_ids: &[TeamId]) -> Vec<Match> {
    if team_ids.len() < 2 {
        return Vec::new();
    }

    let mut slots: Vec<Slot> = team_ids.iter().copied().map(Slot::Team).collect();
    if slots.len() % 2 == 1 {
        slots.push(Slot::Bye);
    }

    let n = slots.len();
    let half = n / 2;
    let mut matches = Vec::with_capacity(team_ids.len() * (team_ids.len() - 1) / 2);

    for round in 1..n {
        for i in 0..half {
            if let (Slot::Team(home), Slot::Team(away)) = (slots[i], slots[n - 1 - i]) {
                matches.push(Match::new(Some(round as u32), home, away, Stage::League));
            }
        }
        slots[1..].rotate_right(1);
    }

    debug!(
        "Generated {} matches over {} rounds for {} teams",
        matches.len(),
        n - 1,
        team_ids.len()
    );
    matches
}

/// Round-robin schedule for one group; every match is tagged with the group label.
pub fn generate_group_schedule(group: &Group) -> Vec<Match> {
    generate_schedule(&group.team_ids)
        .into_iter()
        .map(|mut m| {
            m.stage = Stage::Group {
                group: group.label.clone(),
            };
            m
        })
        .collect()
}
