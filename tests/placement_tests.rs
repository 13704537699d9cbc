use std::collections::HashMap;

use chrono::NaiveDateTime;
use crewshift::algorithm::{
    apply_placements, mark_placed_people, optimize_placements, place_groups,
};
use crewshift::models::{BASIC_COURSE_LEVEL, Group, Person};

fn person(n: u64, name: &str, slots: &[i32], date: Option<&str>) -> Person {
    Person {
        std_number: n,
        fullname: name.to_string(),
        phone_number: String::new(),
        apply_date: date.and_then(|d| NaiveDateTime::parse_from_str(d, "%d.%m.%Y %H:%M:%S").ok()),
        is_member: true,
        course_level: BASIC_COURSE_LEVEL.to_string(),
        course_slots: slots.to_vec(),
        friends: Vec::new(),
        is_placed: false,
        last_completed_course: BASIC_COURSE_LEVEL.to_string(),
    }
}

fn group_of(names: &[&str], first_id: u64, slots: &[i32]) -> Group {
    let members: Vec<Person> = names
        .iter()
        .enumerate()
        .map(|(i, name)| person(first_id + i as u64, name, slots, None))
        .collect();
    let mut g = Group::new(members);
    g.course_level = BASIC_COURSE_LEVEL.to_string();
    g
}

fn caps(pairs: &[(i32, i32)]) -> HashMap<i32, i32> {
    pairs.iter().copied().collect()
}

#[test]
fn test_zero_capacity_sole_preference_unplaced_in_both_rounds() {
    let groups = vec![group_of(&["Ali Kaya"], 1, &[11])];
    let mut slots = caps(&[(11, 0)]);
    let capacity = caps(&[(11, 0)]);

    let (first, second) = place_groups(&groups, &mut slots, &capacity);
    assert!(first.is_empty());
    // Round 2 only scans preferences past the first; a one-entry list has
    // nothing left to try.
    assert!(second.is_empty());
    assert_eq!(slots[&11], 0);
}

#[test]
fn test_first_fit_honors_input_order() {
    // Two groups of five both want slot 11 (quota 8): the earlier group
    // wins it, the later one falls through to its next preference.
    let g1 = group_of(&["Ali", "Buse", "Cem", "Derya", "Efe"], 1, &[11]);
    let g2 = group_of(&["Fatma", "Gül", "Hakan", "İrem", "Kerem"], 10, &[11, 12]);
    let groups = vec![g1, g2];

    let mut slots = caps(&[(11, 0), (12, 0)]);
    let capacity = caps(&[(11, 8), (12, 10)]);

    let (first, second) = place_groups(&groups, &mut slots, &capacity);
    assert_eq!(first.len(), 2);
    assert_eq!(first[0].slot, 11);
    assert_eq!(first[1].slot, 12);
    assert!(second.is_empty());
    assert_eq!(slots[&11], 5);
    assert_eq!(slots[&12], 5);
}

#[test]
fn test_oversized_group_stays_unplaced_silently() {
    let groups = vec![group_of(&["Ali", "Buse", "Cem", "Derya", "Efe"], 1, &[11])];
    let mut slots = caps(&[(11, 0)]);
    let capacity = caps(&[(11, 4)]);

    let (first, second) = place_groups(&groups, &mut slots, &capacity);
    assert!(first.is_empty() && second.is_empty());
}

#[test]
fn test_slot_missing_from_quota_map_is_skipped() {
    let groups = vec![group_of(&["Ali Kaya"], 1, &[99, 11])];
    let mut slots = caps(&[(11, 0)]);
    let capacity = caps(&[(11, 10)]);

    let (first, _) = place_groups(&groups, &mut slots, &capacity);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].slot, 11);
}

#[test]
fn test_occupancy_accumulates_across_groups() {
    let groups = vec![
        group_of(&["Ali Kaya"], 1, &[11]),
        group_of(&["Buse Demir"], 2, &[11]),
        group_of(&["Cem Arslan"], 3, &[11]),
    ];
    let mut slots = caps(&[(11, 0)]);
    let capacity = caps(&[(11, 2)]);

    let (first, second) = place_groups(&groups, &mut slots, &capacity);
    assert_eq!(first.len(), 2);
    assert!(second.is_empty());
    assert_eq!(slots[&11], 2);
}

#[test]
fn test_record_carries_names_slot_and_apply_date() {
    let members = vec![
        person(1, "Ali Kaya", &[52], Some("02.10.2024 09:00:00")),
        person(2, "Buse Demir", &[52], Some("01.10.2024 18:30:00")),
    ];
    let mut g = Group::new(members);
    g.course_level = BASIC_COURSE_LEVEL.to_string();

    let mut slots = caps(&[(52, 0)]);
    let capacity = caps(&[(52, 16)]);
    let (first, _) = place_groups(&[g], &mut slots, &capacity);

    assert_eq!(first[0].group, vec!["Ali Kaya", "Buse Demir"]);
    assert_eq!(first[0].slot, 52);
    assert_eq!(
        first[0].apply_date,
        NaiveDateTime::parse_from_str("01.10.2024 18:30:00", "%d.%m.%Y %H:%M:%S").ok()
    );
}

#[test]
fn test_optimize_never_mutates_the_supplied_occupancy() {
    let groups = vec![group_of(&["Ali Kaya"], 1, &[11]), group_of(&["Buse Demir"], 2, &[11])];
    let slots = caps(&[(11, 0), (12, 0)]);
    let capacity = caps(&[(11, 5), (12, 5)]);

    let best = optimize_placements(&groups, &slots, &capacity);
    assert_eq!(best.len(), 2);
    assert_eq!(slots[&11], 0, "optimization must work on copies");
    assert_eq!(slots[&12], 0);
}

#[test]
fn test_optimize_returns_empty_when_nothing_ever_fits() {
    let groups = vec![group_of(&["Ali Kaya"], 1, &[11])];
    let slots = caps(&[(11, 0)]);
    let capacity = caps(&[(11, 0)]);

    let best = optimize_placements(&groups, &slots, &capacity);
    assert!(best.is_empty());
}

#[test]
fn test_placement_flags_propagate_to_groups_and_people() {
    let mut groups = vec![group_of(&["Ali Kaya", "Buse Demir"], 1, &[11]), group_of(&["Cem Arslan"], 3, &[99])];
    let slots = caps(&[(11, 0)]);
    let capacity = caps(&[(11, 10)]);

    let best = optimize_placements(&groups, &slots, &capacity);
    apply_placements(&mut groups, &best);
    assert!(groups[0].is_placed);
    assert_eq!(groups[0].placed_slots, vec![11]);
    assert!(!groups[1].is_placed);

    let mut people: HashMap<u64, Person> = groups
        .iter()
        .flat_map(|g| g.members.iter().cloned())
        .map(|p| (p.std_number, p))
        .collect();
    mark_placed_people(&mut people, &best);
    assert!(people[&1].is_placed);
    assert!(people[&2].is_placed);
    assert!(!people[&3].is_placed);
}
