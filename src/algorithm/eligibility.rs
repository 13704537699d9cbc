// Membership and prerequisite screening.

use std::collections::HashMap;

use crate::models::{ADVANCED_COURSE_LEVEL, Person};

/// Keep only registrants who are club members, and who have a completed
/// course on record if they applied for the advanced tier. This is a
/// filter, not a validator: failing entries are dropped silently.
pub fn person_background_check(people: &HashMap<u64, Person>) -> HashMap<u64, Person> {
    let mut filtered = HashMap::new();

    for (std_number, person) in people {
        if !person.is_member {
            continue;
        }
        if person.course_level == ADVANCED_COURSE_LEVEL
            && person.last_completed_course.is_empty()
        {
            continue;
        }
        filtered.insert(*std_number, person.clone());
    }

    filtered
}
