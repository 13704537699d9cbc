// Greedy slot placement: two preference rounds plus a keep-best search.

use std::collections::HashMap;

use crate::models::{Group, Person, PlacementRecord};

/// Place groups into slots over two rounds.
///
/// Round 1 walks every group in input order and seats it in the first
/// preferred slot with room (occupied + group size ≤ quota). Round 2
/// retries the leftovers from their *second* preference onward, against the
/// occupancy round 1 left behind. Groups still unseated are simply absent
/// from the output.
///
/// `slots` is the running occupancy and is mutated in place; `slot_capacity`
/// is read-only. A slot missing from the quota map never fits; a slot
/// missing from the occupancy map counts as empty.
pub fn place_groups(
    groups: &[Group],
    slots: &mut HashMap<i32, i32>,
    slot_capacity: &HashMap<i32, i32>,
) -> (Vec<PlacementRecord>, Vec<PlacementRecord>) {
    let mut first_round: Vec<PlacementRecord> = Vec::new();
    let mut unplaced: Vec<&Group> = Vec::new();

    for group in groups {
        if !try_place(group, &group.course_slots, slots, slot_capacity, &mut first_round) {
            unplaced.push(group);
        }
    }

    let mut second_round: Vec<PlacementRecord> = Vec::new();
    for group in unplaced {
        // The first preference already failed in round 1.
        let rest = group.course_slots.get(1..).unwrap_or(&[]);
        try_place(group, rest, slots, slot_capacity, &mut second_round);
    }

    (first_round, second_round)
}

fn try_place(
    group: &Group,
    preferences: &[i32],
    slots: &mut HashMap<i32, i32>,
    slot_capacity: &HashMap<i32, i32>,
    placements: &mut Vec<PlacementRecord>,
) -> bool {
    let size = group.size() as i32;
    for &slot in preferences {
        let quota = match slot_capacity.get(&slot) {
            Some(q) => *q,
            None => continue,
        };
        let occupied = slots.get(&slot).copied().unwrap_or(0);
        if occupied + size <= quota {
            placements.push(PlacementRecord {
                group: group.member_names(),
                slot,
                apply_date: group.apply_date,
            });
            *slots.entry(slot).or_insert(0) += size;
            return true;
        }
    }
    false
}

/// Run the two-round placement once per configured slot and keep the
/// attempt that seats the most groups (strictly more; ties keep the
/// earliest best). Every attempt works on its own copy of the occupancy
/// map; the quota map is never copied.
///
/// Attempts are deterministic today: nothing perturbs the group or
/// preference order between them, so repeats only pay off once a caller
/// varies the input ordering.
pub fn optimize_placements(
    groups: &[Group],
    slots: &HashMap<i32, i32>,
    slot_capacity: &HashMap<i32, i32>,
) -> Vec<PlacementRecord> {
    let mut best: Vec<PlacementRecord> = Vec::new();
    let mut max_placed = 0usize;

    for _ in 0..slot_capacity.len() {
        let mut attempt_slots = slots.clone();
        let (first, second) = place_groups(groups, &mut attempt_slots, slot_capacity);
        let total = first.len() + second.len();
        if total > max_placed {
            max_placed = total;
            best = first;
            best.extend(second);
        }
    }

    best
}

/// Stamp the groups named by `records` as placed (informational only).
pub fn apply_placements(groups: &mut [Group], records: &[PlacementRecord]) {
    for record in records {
        if let Some(group) = groups.iter_mut().find(|g| g.member_names() == record.group) {
            group.is_placed = true;
            if !group.placed_slots.contains(&record.slot) {
                group.placed_slots.push(record.slot);
            }
        }
    }
}

/// Mirror the chosen placement back onto the person map.
pub fn mark_placed_people(people: &mut HashMap<u64, Person>, records: &[PlacementRecord]) {
    for record in records {
        for person in people.values_mut() {
            if record.group.iter().any(|name| name == &person.fullname) {
                person.is_placed = true;
            }
        }
    }
}
