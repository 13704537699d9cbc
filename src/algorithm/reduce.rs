// Subset removal and duplicate elimination over candidate groups.

use std::collections::HashSet;

use crate::models::Group;

/// Drop every group whose member set is a strict subset of another group's,
/// then eliminate duplicates.
///
/// Containment is decided on student-number sets; two groups with equal
/// sets do not knock each other out here. Duplicates are instead caught by
/// comparing (size, name-sorted member sequence), which is why each
/// survivor has its member list sorted by full name before the check.
/// The result is ordered by earliest apply date, groups without one last.
pub fn remove_subset_groups(groups: Vec<Group>) -> Vec<Group> {
    let member_sets: Vec<HashSet<u64>> = groups.iter().map(|g| g.member_std_numbers()).collect();

    let mut final_groups: Vec<Group> = Vec::new();
    let mut accepted_keys: HashSet<(usize, Vec<String>)> = HashSet::new();

    for (i, mut group) in groups.into_iter().enumerate() {
        let set = &member_sets[i];
        let is_strict_subset = member_sets
            .iter()
            .enumerate()
            .any(|(j, other)| j != i && other.len() > set.len() && set.is_subset(other));
        if is_strict_subset {
            continue;
        }

        group.sort_members_by_name();
        let key = (group.size(), group.member_names());
        if accepted_keys.contains(&key) {
            continue;
        }
        accepted_keys.insert(key);
        final_groups.push(group);
    }

    final_groups.sort_by_key(|g| (g.apply_date.is_none(), g.apply_date));
    final_groups
}
