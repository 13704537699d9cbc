// Result presentation: slot table, group summaries, JSON export.

use std::collections::BTreeMap;

use crate::models::{Group, PlacementRecord};

/// Render placements as a text table with one column per slot, rows padded
/// to the tallest column. Each cell is one placed group.
pub fn render_slot_table(records: &[PlacementRecord]) -> String {
    let mut by_slot: BTreeMap<i32, Vec<String>> = BTreeMap::new();
    for record in records {
        by_slot
            .entry(record.slot)
            .or_default()
            .push(record.group.join(", "));
    }
    if by_slot.is_empty() {
        return "(no placements)".to_string();
    }

    let height = by_slot.values().map(|cells| cells.len()).max().unwrap_or(0);
    let columns: Vec<(i32, Vec<String>)> = by_slot
        .into_iter()
        .map(|(slot, mut cells)| {
            cells.resize(height, String::new());
            (slot, cells)
        })
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .map(|(slot, cells)| {
            cells
                .iter()
                .map(|c| c.chars().count())
                .chain([slot.to_string().len()])
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for (i, (slot, _)) in columns.iter().enumerate() {
        out.push_str(&format!("{:<width$}  ", slot, width = widths[i]));
    }
    out.push('\n');
    for row in 0..height {
        for (i, (_, cells)) in columns.iter().enumerate() {
            out.push_str(&format!("{:<width$}  ", cells[row], width = widths[i]));
        }
        out.push('\n');
    }
    out
}

/// Placement records as a JSON array string.
pub fn placements_to_json(records: &[PlacementRecord]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}

/// Print the slot table and one summary line per final group.
pub fn print_results(final_groups: &[Group], best_placement: &[PlacementRecord]) {
    println!("{}", render_slot_table(best_placement));
    for group in final_groups {
        println!("{}", group);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(names: &[&str], slot: i32) -> PlacementRecord {
        PlacementRecord {
            group: names.iter().map(|n| n.to_string()).collect(),
            slot,
            apply_date: None,
        }
    }

    #[test]
    fn test_table_groups_by_slot_and_pads_columns() {
        let records = vec![
            record(&["Ali"], 52),
            record(&["Buse", "Cem"], 52),
            record(&["Derya"], 12),
        ];
        let table = render_slot_table(&records);
        let lines: Vec<&str> = table.lines().collect();
        // header + two rows (slot 52 has two groups, slot 12 is padded)
        assert_eq!(lines.len(), 3);
        assert!(lines[0].contains("12"));
        assert!(lines[0].contains("52"));
        assert!(lines[1].contains("Derya"));
        assert!(lines[1].contains("Ali"));
        assert!(lines[2].contains("Buse, Cem"));
    }

    #[test]
    fn test_empty_placement_renders_placeholder() {
        assert_eq!(render_slot_table(&[]), "(no placements)");
    }
}
