//! Standings row: derived per query from match results, never stored.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

/// Points for a win.
pub const POINTS_FOR_WIN: u32 = 3;
/// Points for each side of a draw.
pub const POINTS_FOR_DRAW: u32 = 1;

/// One team's line in a standings table.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct StandingsRow {
    pub team_id: TeamId,
    pub points: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    /// Goal totals are `u64` so summing any number of `u32` scores cannot overflow.
    pub goals_for: u64,
    pub goals_against: u64,
}

impl StandingsRow {
    /// Zeroed row for a team that has not played yet.
    pub fn new(team_id: TeamId) -> Self {
        Self {
            team_id,
            ..Self::default()
        }
    }

    pub fn goal_difference(&self) -> i64 {
        let goals_for = i64::try_from(self.goals_for).unwrap_or(i64::MAX);
        let goals_against = i64::try_from(self.goals_against).unwrap_or(i64::MAX);
        goals_for.saturating_sub(goals_against)
    }

    pub fn played(&self) -> u32 {
        self.wins + self.draws + self.losses
    }

    /// Record a match from this team's point of view.
    pub(crate) fn record(&mut self, scored: u32, conceded: u32) {
        self.goals_for += u64::from(scored);
        self.goals_against += u64::from(conceded);
        if scored > conceded {
            self.wins += 1;
            self.points += POINTS_FOR_WIN;
        } else if scored < conceded {
            self.losses += 1;
        } else {
            self.draws += 1;
            self.points += POINTS_FOR_DRAW;
        }
    }
}
