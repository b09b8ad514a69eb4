//! Data structures for league and cup tournaments: teams, matches, groups, standings.

mod fixture;
mod standings;
mod team;
mod tournament;

pub use fixture::{Match, MatchId, Stage};
pub use standings::{StandingsRow, POINTS_FOR_DRAW, POINTS_FOR_WIN};
pub use team::{team_display_name, Team, TeamId, DELETED_TEAM_LABEL};
pub use tournament::{
    Group, Ineligibility, Tournament, TournamentError, TournamentId, TournamentKind,
};
