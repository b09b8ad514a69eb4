//! Integration tests for round-robin schedule generation.

use league_cup_web::{generate_group_schedule, generate_schedule, Group, Stage, TeamId};
use std::collections::HashSet;
use uuid::Uuid;

fn teams(n: usize) -> Vec<TeamId> {
    (0..n).map(|_| Uuid::new_v4()).collect()
}

fn pair(a: TeamId, b: TeamId) -> (TeamId, TeamId) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

#[test]
fn fewer_than_two_teams_gives_empty_schedule() {
    assert!(generate_schedule(&[]).is_empty());
    assert!(generate_schedule(&teams(1)).is_empty());
}

#[test]
fn four_teams_give_six_matches_in_three_rounds() {
    let ids = teams(4);
    let matches = generate_schedule(&ids);
    assert_eq!(matches.len(), 6);
    for round in 1..=3 {
        assert_eq!(matches.iter().filter(|m| m.round == Some(round)).count(), 2);
    }
    let pairs: HashSet<_> = matches.iter().map(|m| pair(m.home, m.away)).collect();
    assert_eq!(pairs.len(), 6);
}

#[test]
fn circle_method_keeps_first_team_fixed_and_rotates_the_rest() {
    let ids = teams(4);
    let (a, b, c, d) = (ids[0], ids[1], ids[2], ids[3]);
    let got: Vec<_> = generate_schedule(&ids)
        .iter()
        .map(|m| (m.round, m.home, m.away))
        .collect();
    assert_eq!(
        got,
        vec![
            (Some(1), a, d),
            (Some(1), b, c),
            (Some(2), a, c),
            (Some(2), d, b),
            (Some(3), a, b),
            (Some(3), c, d),
        ]
    );
}

#[test]
fn three_teams_drop_bye_pairings() {
    let ids = teams(3);
    let (a, b, c) = (ids[0], ids[1], ids[2]);
    let got: Vec<_> = generate_schedule(&ids)
        .iter()
        .map(|m| (m.round, m.home, m.away))
        .collect();
    assert_eq!(got, vec![(Some(1), b, c), (Some(2), a, c), (Some(3), a, b)]);
}

#[test]
fn every_pair_meets_exactly_once() {
    for n in 2..=11 {
        let ids = teams(n);
        let matches = generate_schedule(&ids);
        assert_eq!(matches.len(), n * (n - 1) / 2, "n = {n}");
        assert!(matches.iter().all(|m| m.home != m.away));
        let pairs: HashSet<_> = matches.iter().map(|m| pair(m.home, m.away)).collect();
        assert_eq!(pairs.len(), matches.len(), "n = {n}");
    }
}

#[test]
fn each_round_is_a_perfect_matching() {
    for n in 2..=10 {
        let ids = teams(n);
        let matches = generate_schedule(&ids);
        let rounds = if n % 2 == 0 { n - 1 } else { n };
        for round in 1..=rounds as u32 {
            let in_round: Vec<_> = matches.iter().filter(|m| m.round == Some(round)).collect();
            let playing: HashSet<_> = in_round.iter().flat_map(|m| [m.home, m.away]).collect();
            assert_eq!(playing.len(), in_round.len() * 2, "n = {n}, round {round}");
            if n % 2 == 0 {
                assert_eq!(in_round.len(), n / 2);
            } else {
                assert_eq!(in_round.len(), (n - 1) / 2);
                assert_eq!(n - playing.len(), 1, "exactly one team sits out");
            }
        }
    }
}

#[test]
fn generated_matches_are_unplayed_league_matches_with_unique_ids() {
    let matches = generate_schedule(&teams(6));
    assert!(matches.iter().all(|m| m.stage == Stage::League));
    assert!(matches.iter().all(|m| !m.is_decided()));
    let ids: HashSet<_> = matches.iter().map(|m| m.id).collect();
    assert_eq!(ids.len(), matches.len());
}

#[test]
fn group_schedule_tags_matches_with_group_label() {
    let group = Group::new("B", teams(4));
    let matches = generate_group_schedule(&group);
    assert_eq!(matches.len(), 6);
    assert!(matches.iter().all(|m| m.stage.is_group("B")));
    assert!(matches.iter().all(|m| m.round.is_some()));
}
