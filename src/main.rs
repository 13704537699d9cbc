// --- Crew grouping and slot placement - entry point ---

use crewshift::{display, run_placement};

fn main() {
    println!("=== Crew Grouping & Slot Placement ===");

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("usage: crewshift <roster.csv|roster.xlsx> [quotas.json]");
        std::process::exit(2);
    }
    let roster_path = &args[1];
    let quotas_path = args.get(2).map(|s| s.as_str());

    match run_placement(roster_path, quotas_path) {
        Ok((_people, final_groups, best_placement)) => {
            display::print_results(&final_groups, &best_placement);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
