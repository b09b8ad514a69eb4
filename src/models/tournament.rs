//! Tournament, its kind (league or cup with groups), and TournamentError.

use crate::models::fixture::{Match, MatchId};
use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Why a knockout stage cannot be built from the current tournament.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Ineligibility {
    /// Not a cup with groups, or no groups defined.
    WrongTournamentShape,
    /// Fewer than two winners/runners-up across all groups.
    InsufficientQualifiers,
    /// Cross pairing produced no fixture (e.g. a single group).
    NoPairingsProduced,
}

impl std::fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Ineligibility::WrongTournamentShape => write!(f, "wrong tournament shape"),
            Ineligibility::InsufficientQualifiers => write!(f, "insufficient qualifiers"),
            Ineligibility::NoPairingsProduced => write!(f, "no pairings produced"),
        }
    }
}

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Knockout stage cannot be built; existing knockout matches are kept.
    NotEligible(Ineligibility),
    /// Tournament name is empty after trimming.
    EmptyName,
    /// Need at least 2 teams to create a tournament.
    NotEnoughTeams,
    /// The same team was selected twice.
    DuplicateTeam(TeamId),
    /// Home and away team are the same.
    SameTeamTwice,
    /// Team is not a participant of this tournament.
    TeamNotInTournament(TeamId),
    /// No match with this id in the tournament.
    MatchNotFound(MatchId),
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::NotEligible(reason) => {
                write!(f, "Knockout stage not possible: {}", reason)
            }
            TournamentError::EmptyName => write!(f, "Tournament name must not be empty"),
            TournamentError::NotEnoughTeams => write!(f, "Select at least two teams"),
            TournamentError::DuplicateTeam(_) => write!(f, "A team was selected more than once"),
            TournamentError::SameTeamTwice => {
                write!(f, "Home and away team must be different")
            }
            TournamentError::TeamNotInTournament(_) => {
                write!(f, "Team does not take part in this tournament")
            }
            TournamentError::MatchNotFound(_) => write!(f, "Match not found"),
        }
    }
}

impl std::error::Error for TournamentError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// A group of a cup tournament.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Short unique label, e.g. "A".
    pub label: String,
    /// Members in insertion order.
    pub team_ids: Vec<TeamId>,
}

impl Group {
    pub fn new(label: impl Into<String>, team_ids: Vec<TeamId>) -> Self {
        Self {
            label: label.into(),
            team_ids,
        }
    }
}

/// League (everyone plays everyone) or cup with a group stage followed by knockouts.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TournamentKind {
    League,
    GroupCup { groups: Vec<Group> },
}

impl TournamentKind {
    /// Groups of a cup; empty for a league.
    pub fn groups(&self) -> &[Group] {
        match self {
            TournamentKind::League => &[],
            TournamentKind::GroupCup { groups } => groups,
        }
    }
}

/// Full tournament: participants and all matches of every stage.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    #[serde(flatten)]
    pub kind: TournamentKind,
    /// Participants in selection order.
    pub team_ids: Vec<TeamId>,
    pub matches: Vec<Match>,
}

impl Tournament {
    /// Create a tournament with no matches.
    pub fn new(name: impl Into<String>, kind: TournamentKind, team_ids: Vec<TeamId>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            team_ids,
            matches: Vec::new(),
        }
    }

    pub fn is_group_cup(&self) -> bool {
        matches!(self.kind, TournamentKind::GroupCup { .. })
    }

    pub fn has_team(&self, id: TeamId) -> bool {
        self.team_ids.contains(&id)
    }

    /// Mutable reference to a match by id.
    pub fn get_match_mut(&mut self, id: MatchId) -> Option<&mut Match> {
        self.matches.iter_mut().find(|m| m.id == id)
    }

    /// Matches ordered by round; unscheduled matches (no round) sort as round 0. Stable.
    pub fn matches_by_round(&self) -> Vec<&Match> {
        let mut sorted: Vec<&Match> = self.matches.iter().collect();
        sorted.sort_by_key(|m| m.round.unwrap_or(0));
        sorted
    }

    /// All knockout-stage matches.
    pub fn knockout_matches(&self) -> impl Iterator<Item = &Match> {
        self.matches.iter().filter(|m| m.stage.is_knockout())
    }
}
