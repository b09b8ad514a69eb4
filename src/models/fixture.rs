//! Match (fixture) and the stage it belongs to.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Which part of the competition a match belongs to.
///
/// The group label only exists on group matches and the knockout label only
/// on knockout matches.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(tag = "stage", rename_all = "snake_case")]
pub enum Stage {
    League,
    Group {
        group: String,
    },
    Knockout {
        /// Stage label such as "semifinal". `None` for manually added knockout matches.
        knockout_round: Option<String>,
    },
}

impl Stage {
    pub fn is_knockout(&self) -> bool {
        matches!(self, Stage::Knockout { .. })
    }

    /// True for group-stage matches of the group labelled `label`.
    pub fn is_group(&self, label: &str) -> bool {
        matches!(self, Stage::Group { group } if group == label)
    }
}

/// A single match between a home and an away team.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    /// 1-based round; `None` for unscheduled and knockout matches.
    pub round: Option<u32>,
    pub home: TeamId,
    pub away: TeamId,
    /// None if not yet played.
    pub home_goals: Option<u32>,
    pub away_goals: Option<u32>,
    #[serde(flatten)]
    pub stage: Stage,
}

impl Match {
    /// New unplayed match with a fresh id.
    pub fn new(round: Option<u32>, home: TeamId, away: TeamId, stage: Stage) -> Self {
        Self {
            id: Uuid::new_v4(),
            round,
            home,
            away,
            home_goals: None,
            away_goals: None,
            stage,
        }
    }

    /// `(home_goals, away_goals)` once both scores are known.
    pub fn score(&self) -> Option<(u32, u32)> {
        self.home_goals.zip(self.away_goals)
    }

    pub fn is_decided(&self) -> bool {
        self.score().is_some()
    }
}
