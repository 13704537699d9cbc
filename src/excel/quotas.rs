// Slot quota tables: how many seats each weekly slot offers.

use std::collections::HashMap;
use std::error::Error;
use std::fs;

use crate::models::all_slot_ids;

/// Built-in per-slot quotas (the autumn '24 season configuration).
/// A quota of 0 keeps the slot in the calendar but closed for the term.
pub fn default_slot_quotas() -> HashMap<i32, i32> {
    HashMap::from([
        (11, 0),
        (12, 11),
        (13, 12),
        (21, 0),
        (22, 0),
        (23, 0),
        (31, 0),
        (32, 11),
        (33, 12),
        (41, 0),
        (42, 13),
        (43, 12),
        (51, 11),
        (52, 16),
        (53, 17),
        (61, 20),
        (62, 20),
        (63, 20),
        (71, 20),
        (72, 20),
        (73, 20),
    ])
}

/// Fresh occupancy map: every catalogue slot starts empty.
pub fn default_occupancy() -> HashMap<i32, i32> {
    all_slot_ids().into_iter().map(|slot| (slot, 0)).collect()
}

/// Load quotas from a JSON object mapping slot id to quota, e.g.
/// `{"12": 11, "52": 16}`. Slots the file does not mention get quota 0;
/// keys outside the catalogue are ignored with a notice.
pub fn load_slot_quotas(path: &str) -> Result<HashMap<i32, i32>, Box<dyn Error>> {
    let raw = fs::read_to_string(path)?;
    let parsed: HashMap<String, i32> = serde_json::from_str(&raw)?;

    let mut quotas: HashMap<i32, i32> = all_slot_ids().into_iter().map(|s| (s, 0)).collect();
    for (key, quota) in parsed {
        match key.trim().parse::<i32>() {
            Ok(slot) if quotas.contains_key(&slot) => {
                quotas.insert(slot, quota);
            }
            _ => eprintln!("WARN: ignoring unknown slot '{}' in quota file", key),
        }
    }
    Ok(quotas)
}
