//! Tournament business logic: schedules, standings, knockout stage, setup and results.

mod knockout;
mod results;
mod round_name;
mod schedule;
mod setup;
mod standings;

pub use knockout::{build_knockout_stage, knockout_fixtures, qualifiers, Qualifier};
pub use results::{add_match, clear_result, record_result, remove_match};
pub use round_name::round_name;
pub use schedule::{generate_group_schedule, generate_schedule};
pub use setup::{
    create_tournament, distribute_into_groups, group_label, ScheduleMode, TournamentFormat,
};
pub use standings::{compute_standings, group_standings, tournament_standings};
