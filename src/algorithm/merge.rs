// Transitive merge of groups that share members.

use petgraph::unionfind::UnionFind;
use std::collections::HashMap;

use crate::models::{Group, Person};

/// Merge groups connected by shared membership into single groups: the
/// connected components of the "appears in some group together" relation,
/// joined by full name.
///
/// Each component is rebuilt as one group and must pass the course-level
/// check again; a merged component spanning levels is discarded entirely,
/// valid subgroups included. Members of surviving groups are ordered by
/// apply date, as is the output.
pub fn merge_groups_by_members(groups: Vec<Group>) -> Vec<Group> {
    if groups.is_empty() {
        return groups;
    }

    // Index every distinct member by full name.
    let mut name_index: HashMap<String, usize> = HashMap::new();
    let mut persons: Vec<Person> = Vec::new();
    for group in &groups {
        for member in &group.members {
            if !name_index.contains_key(&member.fullname) {
                name_index.insert(member.fullname.clone(), persons.len());
                persons.push(member.clone());
            }
        }
    }

    // Union all members of each group through its first member.
    let mut union_find: UnionFind<usize> = UnionFind::new(persons.len());
    for group in &groups {
        if let Some(first) = group.members.first() {
            let root = name_index[&first.fullname];
            for member in &group.members[1..] {
                union_find.union(root, name_index[&member.fullname]);
            }
        }
    }

    // Collect the distinct components.
    let mut components: HashMap<usize, Vec<Person>> = HashMap::new();
    for (index, person) in persons.iter().enumerate() {
        components
            .entry(union_find.find(index))
            .or_default()
            .push(person.clone());
    }

    let mut merged: Vec<Group> = Vec::new();
    for (_, members) in components {
        let mut group = Group::new(members);
        match group.uniform_course_level().map(str::to_string) {
            Some(level) => {
                group.course_level = level;
                group.sort_members_by_apply_date();
                merged.push(group);
            }
            None => {
                eprintln!(
                    "WARN: discarding merged group of {} people: members span course levels",
                    group.size()
                );
            }
        }
    }

    merged.sort_by_key(|g| (g.apply_date.is_none(), g.apply_date));
    merged
}
