//! Integration tests for standings: scoring, ordering and which matches count.

use league_cup_web::{
    compute_standings, generate_schedule, group_standings, tournament_standings, Group, Match,
    Stage, TeamId, Tournament, TournamentKind,
};
use uuid::Uuid;

fn teams(n: usize) -> Vec<TeamId> {
    (0..n).map(|_| Uuid::new_v4()).collect()
}

fn played(home: TeamId, away: TeamId, home_goals: u32, away_goals: u32) -> Match {
    let mut m = Match::new(None, home, away, Stage::League);
    m.home_goals = Some(home_goals);
    m.away_goals = Some(away_goals);
    m
}

#[test]
fn three_team_group_scenario() {
    let ids = teams(3);
    let (a, b, c) = (ids[0], ids[1], ids[2]);
    let matches = vec![played(a, b, 2, 1), played(a, c, 0, 0), played(b, c, 1, 1)];

    let table = compute_standings(&ids, &matches);
    let order: Vec<_> = table.iter().map(|r| r.team_id).collect();
    assert_eq!(order, vec![a, c, b]);

    assert_eq!((table[0].points, table[0].wins, table[0].draws), (4, 1, 1));
    assert_eq!(table[0].goal_difference(), 1);
    assert_eq!((table[1].points, table[1].draws), (2, 2));
    assert_eq!(table[1].goal_difference(), 0);
    assert_eq!((table[2].points, table[2].draws, table[2].losses), (1, 1, 1));
    assert_eq!(table[2].goal_difference(), -1);
}

#[test]
fn teams_without_matches_get_zeroed_rows_in_input_order() {
    let ids = teams(4);
    let none: Vec<Match> = Vec::new();
    let table = compute_standings(&ids, &none);
    assert_eq!(table.iter().map(|r| r.team_id).collect::<Vec<_>>(), ids);
    assert!(table.iter().all(|r| r.points == 0 && r.played() == 0 && r.goals_for == 0));
}

#[test]
fn undecided_matches_never_count() {
    let ids = teams(2);
    let mut half = Match::new(Some(1), ids[0], ids[1], Stage::League);
    half.home_goals = Some(5);
    let unplayed = Match::new(Some(2), ids[1], ids[0], Stage::League);
    let matches = vec![half, unplayed];

    for _ in 0..3 {
        let table = compute_standings(&ids, &matches);
        assert!(table.iter().all(|r| r.points == 0 && r.goals_for == 0 && r.goals_against == 0));
    }
}

#[test]
fn matches_with_teams_outside_the_set_are_excluded() {
    let ids = teams(2);
    let outsider = Uuid::new_v4();
    let matches = vec![played(ids[0], outsider, 3, 0), played(outsider, ids[1], 0, 4)];
    let table = compute_standings(&ids, &matches);
    assert!(table.iter().all(|r| r.played() == 0));
}

#[test]
fn goal_difference_breaks_points_ties() {
    let ids = teams(4);
    let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
    // a and b both win once; b by a wider margin.
    let matches = vec![played(a, c, 1, 0), played(b, d, 4, 0)];
    let table = compute_standings(&ids, &matches);
    assert_eq!(table[0].team_id, b);
    assert_eq!(table[1].team_id, a);
    assert_eq!(table[2].team_id, c);
    assert_eq!(table[3].team_id, d);
}

#[test]
fn full_ties_keep_input_order() {
    let ids = teams(4);
    let matches = vec![played(ids[3], ids[2], 1, 1), played(ids[1], ids[0], 2, 2)];
    let table = compute_standings(&ids, &matches);
    assert_eq!(table.iter().map(|r| r.team_id).collect::<Vec<_>>(), ids);
}

#[test]
fn points_and_goals_are_conserved() {
    let ids = teams(6);
    let mut matches = generate_schedule(&ids);
    let (mut decisive, mut drawn) = (0, 0);
    for (i, m) in matches.iter_mut().enumerate() {
        let (h, a) = ((i % 4) as u32, (i % 3) as u32);
        if h == a {
            drawn += 1;
        } else {
            decisive += 1;
        }
        m.home_goals = Some(h);
        m.away_goals = Some(a);
    }

    let table = compute_standings(&ids, &matches);
    let points: u32 = table.iter().map(|r| r.points).sum();
    assert_eq!(points, 3 * decisive + 2 * drawn);
    let goals_for: u64 = table.iter().map(|r| r.goals_for).sum();
    let goals_against: u64 = table.iter().map(|r| r.goals_against).sum();
    assert_eq!(goals_for, goals_against);

    for w in table.windows(2) {
        assert!(
            w[0].points > w[1].points
                || (w[0].points == w[1].points && w[0].goal_difference() >= w[1].goal_difference())
        );
    }
}

#[test]
fn group_tables_only_use_that_groups_matches() {
    let ids = teams(4);
    let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
    let groups = vec![Group::new("A", vec![a, b]), Group::new("B", vec![c, d])];
    let mut t = Tournament::new("Cup", TournamentKind::GroupCup { groups }, ids.clone());

    let mut group_a = played(a, b, 0, 1);
    group_a.stage = Stage::Group { group: "A".into() };
    // Same teams, but a knockout match: must not leak into the group table.
    let mut knockout = played(a, b, 5, 0);
    knockout.stage = Stage::Knockout { knockout_round: None };
    // Group-tagged with the wrong label.
    let mut mislabelled = played(c, d, 3, 0);
    mislabelled.stage = Stage::Group { group: "A".into() };
    t.matches = vec![group_a, knockout, mislabelled];

    let tables = group_standings(&t);
    assert_eq!(tables.len(), 2);
    let (label_a, rows_a) = &tables[0];
    assert_eq!(label_a, "A");
    assert_eq!(rows_a[0].team_id, b);
    assert_eq!(rows_a[0].points, 3);
    assert_eq!(rows_a[0].goals_for, 1);
    let (_, rows_b) = &tables[1];
    assert!(rows_b.iter().all(|r| r.played() == 0));
}

#[test]
fn league_shows_a_single_table_over_all_matches() {
    let ids = teams(3);
    let mut t = Tournament::new("League", TournamentKind::League, ids.clone());
    t.matches = vec![played(ids[2], ids[0], 1, 0)];
    let tables = tournament_standings(&t);
    assert_eq!(tables.len(), 1);
    assert_eq!(tables[0].0, None);
    assert_eq!(tables[0].1[0].team_id, ids[2]);
}

#[test]
fn huge_scores_do_not_overflow_goal_totals() {
    let ids = teams(2);
    let (a, b) = (ids[0], ids[1]);
    let big = 3_000_000_000;
    let matches = vec![played(a, b, big, 0), played(a, b, big, 0)];

    let table = compute_standings(&ids, &matches);
    assert_eq!(table[0].team_id, a);
    assert_eq!(table[0].goals_for, 6_000_000_000);
    assert_eq!(table[0].goal_difference(), 6_000_000_000);
    assert_eq!(table[1].goals_against, 6_000_000_000);
    assert_eq!(table[1].goal_difference(), -6_000_000_000);
    let goals_for: u64 = table.iter().map(|r| r.goals_for).sum();
    let goals_against: u64 = table.iter().map(|r| r.goals_against).sum();
    assert_eq!(goals_for, goals_against);
}
