// High-level pipeline for crew grouping and slot placement.
pub mod eligibility;
pub mod grouping;
pub mod merge;
pub mod placement;
pub mod reduce;

pub use eligibility::person_background_check;
pub use grouping::initial_grouping;
pub use merge::merge_groups_by_members;
pub use placement::{apply_placements, mark_placed_people, optimize_placements, place_groups};
pub use reduce::remove_subset_groups;

use std::collections::HashMap;

use crate::models::{Group, Person};

/// Full grouping pipeline: background check, friend grouping, subset
/// reduction, transitive merge. Returns the final group list ordered by
/// earliest application date.
pub fn build_final_groups(people: &HashMap<u64, Person>) -> Vec<Group> {
    let eligible = person_background_check(people);
    eprintln!(
        "🧩 [pipeline] {} of {} registrants passed the background check",
        eligible.len(),
        people.len()
    );

    let groups = initial_grouping(&eligible);
    eprintln!("🧩 [pipeline] {} candidate groups", groups.len());

    let groups = remove_subset_groups(groups);
    eprintln!("🧩 [pipeline] {} groups after subset reduction", groups.len());

    let groups = merge_groups_by_members(groups);
    eprintln!("🧩 [pipeline] {} groups after merging", groups.len());

    groups
}
