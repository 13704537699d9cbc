// Candidate group construction from self-reported friend lists.

use std::collections::HashMap;

use crate::models::{Group, Person};

/// One candidate group per eligible person: the person plus whichever of
/// their declared friends survived the background check. Friend numbers
/// that resolve to nobody are dropped without complaint; duplicate and
/// self references never produce duplicate members.
///
/// The candidate's course level is the seed person's. A candidate whose
/// members disagree on level is discarded whole: reported, not repaired.
pub fn initial_grouping(people: &HashMap<u64, Person>) -> Vec<Group> {
    // Walk students in number order so output does not depend on map layout.
    let mut std_numbers: Vec<u64> = people.keys().copied().collect();
    std_numbers.sort_unstable();

    let mut groups = Vec::new();
    for std_number in std_numbers {
        let person = &people[&std_number];

        let mut members = vec![person.clone()];
        for friend in &person.friends {
            if members.iter().any(|m| m.std_number == *friend) {
                continue;
            }
            if let Some(friend_person) = people.get(friend) {
                members.push(friend_person.clone());
            }
        }

        let mut group = Group::new(members);
        match group.uniform_course_level().map(str::to_string) {
            Some(level) => {
                group.course_level = level;
                groups.push(group);
            }
            None => {
                eprintln!(
                    "WARN: discarding candidate group of {}: members span course levels",
                    person.fullname
                );
            }
        }
    }

    groups
}
