// Root library of the `crewshift` crate.
// Re-exports the main modules and provides a convenience function
// `run_placement` that drives the full flow from a roster file.
pub mod algorithm;
pub mod display;
pub mod excel;
pub mod models;

pub use algorithm::build_final_groups;
pub use models::{Group, Person, PlacementRecord};

use std::collections::HashMap;
use std::error::Error;

/// Load a roster, build the final groups, and search for the best
/// placement under the given quotas (the built-in season defaults when no
/// quota file is supplied). Returns the person map with placement flags
/// stamped, the final groups, and the chosen placement records.
pub fn run_placement(
    roster_path: &str,
    quotas_path: Option<&str>,
) -> Result<(HashMap<u64, Person>, Vec<Group>, Vec<PlacementRecord>), Box<dyn Error>> {
    let rows = excel::read_roster_rows(roster_path)?;
    let mut people = excel::identify_people(&rows)?;

    let mut final_groups = algorithm::build_final_groups(&people);

    let slot_capacity = match quotas_path {
        Some(path) => excel::load_slot_quotas(path)?,
        None => excel::default_slot_quotas(),
    };
    let occupancy = excel::default_occupancy();

    let best_placement = algorithm::optimize_placements(&final_groups, &occupancy, &slot_capacity);
    algorithm::apply_placements(&mut final_groups, &best_placement);
    algorithm::mark_placed_people(&mut people, &best_placement);

    Ok((people, final_groups, best_placement))
}
