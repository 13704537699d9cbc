// Core data structures

use chrono::NaiveDateTime;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Course level tag for the introductory tier.
pub const BASIC_COURSE_LEVEL: &str = "1* Temel Yelken Eğitimi";
/// Course level tag for the advanced tier; applicants must have a completed
/// course on record to request it.
pub const ADVANCED_COURSE_LEVEL: &str = "2* İleri Yelken Eğitimi";

/// Weekly slot catalogue as it appears on the registration form.
/// Codes are day*10 + period (Monday=1 .. Sunday=7, three periods per day).
pub const SLOT_LABELS: [(&str, i32); 21] = [
    ("Pazartesi - 1.Slot - 9.00 - 12.00", 11),
    ("Pazartesi - 2.Slot - 12.00 - 15.00", 12),
    ("Pazartesi - 3.Slot - 15.00 - 18.00", 13),
    ("Salı - 1.Slot - 9.00 - 12.00", 21),
    ("Salı - 2.Slot - 12.00 - 15.00", 22),
    ("Salı - 3.Slot - 15.00 - 18.00", 23),
    ("Çarşamba - 1.Slot - 9.00 - 12.00", 31),
    ("Çarşamba - 2.Slot - 12.00 - 15.00", 32),
    ("Çarşamba - 3.Slot - 15.00 - 18.00", 33),
    ("Perşembe - 1.Slot - 9.00 - 12.00", 41),
    ("Perşembe - 2.Slot - 12.00 - 15.00", 42),
    ("Perşembe - 3.Slot - 15.00 - 18.00", 43),
    ("Cuma - 1.Slot - 9.00 - 12.00", 51),
    ("Cuma - 2.Slot - 12.00 - 15.00", 52),
    ("Cuma - 3.Slot - 15.00 - 18.00", 53),
    ("Cumartesi - 1.Slot - 9.00 - 12.00", 61),
    ("Cumartesi - 2.Slot - 12.00 - 15.00", 62),
    ("Cumartesi - 3.Slot - 15.00 - 18.00", 63),
    ("Pazar - 1.Slot - 9.00 - 12.00", 71),
    ("Pazar - 2.Slot - 12.00 - 15.00", 72),
    ("Pazar - 3.Slot - 15.00 - 18.00", 73),
];

/// Form label -> slot code.
pub fn slot_map() -> HashMap<&'static str, i32> {
    SLOT_LABELS.iter().copied().collect()
}

/// Every slot code in the catalogue.
pub fn all_slot_ids() -> Vec<i32> {
    SLOT_LABELS.iter().map(|(_, id)| *id).collect()
}

/// One registrant, built once at ingestion. Read-only afterwards except for
/// `is_placed`, which the placement stage stamps for information.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Person {
    pub std_number: u64,
    pub fullname: String,
    pub phone_number: String,
    pub apply_date: Option<NaiveDateTime>,
    pub is_member: bool,
    pub course_level: String,
    pub course_slots: Vec<i32>,
    pub friends: Vec<u64>,
    pub is_placed: bool,
    pub last_completed_course: String,
}

/// A set of people meant to attend the same slot together. Members are
/// snapshots of the person map; placement flags flow back through
/// `algorithm::placement::mark_placed_people`, never through shared
/// mutation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Group {
    pub members: Vec<Person>,
    /// Earliest application date among members, `None` if nobody has one.
    pub apply_date: Option<NaiveDateTime>,
    /// Slots acceptable to every member, in the first member's declared order.
    pub course_slots: Vec<i32>,
    pub is_placed: bool,
    pub placed_slots: Vec<i32>,
    /// Stamped once homogeneity is established; empty until then.
    pub course_level: String,
}

impl Group {
    pub fn new(members: Vec<Person>) -> Self {
        let apply_date = earliest_apply_date(&members);
        let course_slots = course_slots_intersection(&members);
        Group {
            members,
            apply_date,
            course_slots,
            is_placed: false,
            placed_slots: Vec::new(),
            course_level: String::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    /// Student numbers of all members.
    pub fn member_std_numbers(&self) -> HashSet<u64> {
        self.members.iter().map(|m| m.std_number).collect()
    }

    /// Member full names in current member order.
    pub fn member_names(&self) -> Vec<String> {
        self.members.iter().map(|m| m.fullname.clone()).collect()
    }

    /// The course level shared by every member, or `None` on disagreement.
    /// The first member sets the expectation.
    pub fn uniform_course_level(&self) -> Option<&str> {
        let first = self.members.first()?;
        if self
            .members
            .iter()
            .all(|m| m.course_level == first.course_level)
        {
            Some(&first.course_level)
        } else {
            None
        }
    }

    pub fn sort_members_by_name(&mut self) {
        self.members.sort_by(|a, b| a.fullname.cmp(&b.fullname));
    }

    /// Ascending by apply date, members without one last.
    pub fn sort_members_by_apply_date(&mut self) {
        self.members
            .sort_by_key(|m| (m.apply_date.is_none(), m.apply_date));
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.members.iter().map(|m| m.fullname.as_str()).collect();
        match self.apply_date {
            Some(date) => write!(
                f,
                "Group with members {:?} and earliest apply date {}",
                names, date
            ),
            None => write!(f, "Group with members {:?} and no apply date", names),
        }
    }
}

fn earliest_apply_date(members: &[Person]) -> Option<NaiveDateTime> {
    members.iter().filter_map(|m| m.apply_date).min()
}

fn course_slots_intersection(members: &[Person]) -> Vec<i32> {
    match members.first() {
        Some(first) => first
            .course_slots
            .iter()
            .copied()
            .filter(|slot| members[1..].iter().all(|m| m.course_slots.contains(slot)))
            .collect(),
        None => Vec::new(),
    }
}

/// One placed group: who, where, and the group's earliest apply date.
#[derive(Debug, Clone, serde::Serialize)]
pub struct PlacementRecord {
    pub group: Vec<String>,
    pub slot: i32,
    pub apply_date: Option<NaiveDateTime>,
}
