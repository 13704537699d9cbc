// Datafile access: registration roster (CSV/XLSX) and slot quota tables.
pub mod io;
pub mod quotas;
pub mod roster;

pub use quotas::{default_occupancy, default_slot_quotas, load_slot_quotas};
pub use roster::{identify_people, parse_apply_date};

use std::error::Error;
use std::path::Path;

/// Normalize headers: lowercase, whitespace stripped.
pub fn normalize_header(s: &str) -> String {
    s.to_lowercase().chars().filter(|c| !c.is_whitespace()).collect()
}

/// Read a roster file into raw rows (header row first). CSV is the form
/// backend's export format; XLSX is accepted for rosters saved back out of a
/// spreadsheet.
pub fn read_roster_rows(path: &str) -> Result<Vec<Vec<String>>, Box<dyn Error>> {
    let ext = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();
    match ext.as_str() {
        "csv" => io::read_csv_rows(path),
        "xlsx" | "xls" | "xlsm" => io::read_xlsx_rows(path, ""),
        other => Err(format!(
            "unsupported roster format '{}': expected .csv or .xlsx",
            other
        )
        .into()),
    }
}
