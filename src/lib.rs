//! League and cup tournament organizer: library with models and business logic.
//!
//! The logic is stateless: every function takes the tournament (or plain ids and
//! matches) from the caller and returns new values or updates the value it was given.

pub mod logic;
pub mod models;

pub use logic::{
    add_match, build_knockout_stage, clear_result, compute_standings, create_tournament,
    distribute_into_groups, generate_group_schedule, generate_schedule, group_label,
    group_standings, knockout_fixtures, qualifiers, record_result, remove_match, round_name,
    tournament_standings, Qualifier, ScheduleMode, TournamentFormat,
};
pub use models::{
    team_display_name, Group, Ineligibility, Match, MatchId, Stage, StandingsRow, Team, TeamId,
    Tournament, TournamentError, TournamentId, TournamentKind, DELETED_TEAM_LABEL,
    POINTS_FOR_DRAW, POINTS_FOR_WIN,
};
