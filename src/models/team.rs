//! Team data structure and display-name lookup.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in matches, groups and standings).
pub type TeamId = Uuid;

/// Shown in place of a team name when the referenced team no longer exists.
pub const DELETED_TEAM_LABEL: &str = "(deleted team)";

/// A team that can take part in tournaments.
///
/// Matches and groups only ever hold the [`TeamId`], so renaming a team never
/// touches fixtures and deleting one leaves dangling ids behind.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    /// Optional abbreviation, e.g. "FCB".
    pub short_name: Option<String>,
}

impl Team {
    /// Create a team with a fresh id. Blank short names are stored as `None`.
    pub fn new(name: impl Into<String>, short_name: Option<String>) -> Self {
        let name: String = name.into();
        let short_name = short_name
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());
        Self {
            id: Uuid::new_v4(),
            name: name.trim().to_string(),
            short_name,
        }
    }
}

/// Name of the team with `id`, or [`DELETED_TEAM_LABEL`] if it is not in `teams`.
pub fn team_display_name(teams: &[Team], id: TeamId) -> &str {
    teams
        .iter()
        .find(|t| t.id == id)
        .map(|t| t.name.as_str())
        .unwrap_or(DELETED_TEAM_LABEL)
}
