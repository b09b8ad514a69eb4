//! Knockout stage labels.

/// Label for a knockout round with `team_count` teams left.
pub fn round_name(team_count: usize) -> &'static str {
    match team_count {
        2 => "final",
        4 => "semifinal",
        8 => "quarterfinal",
        16 => "round of 16",
        _ => "knockout round",
    }
}
