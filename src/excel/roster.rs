// Turns raw roster rows into the person map keyed by student number.

use chrono::NaiveDateTime;
use std::collections::HashMap;
use std::error::Error;

use super::normalize_header;
use crate::models::{BASIC_COURSE_LEVEL, Person, slot_map};

// Column headers as they appear on the registration form export.
const COL_TIMESTAMP: &str = "Zaman damgası";
const COL_STD_NUMBER: &str = "Öğrenci Numarası";
const COL_FULLNAME: &str = "Ad Soyad";
const COL_PHONE: &str = "Telefon Numarası";
const COL_COURSE_LEVEL: &str = "Başvurduğunuz Eğitim";
const COL_COURSE_SLOTS: &str = "Eğitime Katılabileceğiniz Slotlar";
const FRIEND_COLS: [&str; 4] = [
    "1. Arkadaşınızın Öğrenci Numarası",
    "2. Arkadaşınızın Öğrenci Numarası",
    "3. Arkadaşınızın Öğrenci Numarası",
    "4. Arkadaşınızın Öğrenci Numarası",
];

/// Parse a form timestamp ("DD.MM.YYYY HH:MM:SS"). Missing or malformed
/// values yield `None` with a notice; they sort after every real date.
pub fn parse_apply_date(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match NaiveDateTime::parse_from_str(raw, "%d.%m.%Y %H:%M:%S") {
        Ok(date) => Some(date),
        Err(_) => {
            eprintln!("WARN: invalid date format or value: {}", raw);
            None
        }
    }
}

fn find_column(headers: &[String], wanted: &str) -> Option<usize> {
    let key = normalize_header(wanted);
    headers.iter().position(|h| normalize_header(h) == key)
}

fn cell<'a>(row: &'a [String], idx: Option<usize>) -> &'a str {
    idx.and_then(|i| row.get(i)).map(|s| s.trim()).unwrap_or("")
}

/// Build the person map from raw rows (header row first). Rows without a
/// parseable student number are skipped with a notice; everything else
/// degrades to defaults rather than failing.
pub fn identify_people(rows: &[Vec<String>]) -> Result<HashMap<u64, Person>, Box<dyn Error>> {
    let headers = rows.first().ok_or("roster is empty: no header row")?;

    let col_std = find_column(headers, COL_STD_NUMBER)
        .ok_or_else(|| format!("roster is missing column '{}'", COL_STD_NUMBER))?;
    let col_name = find_column(headers, COL_FULLNAME)
        .ok_or_else(|| format!("roster is missing column '{}'", COL_FULLNAME))?;
    let col_timestamp = find_column(headers, COL_TIMESTAMP);
    let col_phone = find_column(headers, COL_PHONE);
    let col_level = find_column(headers, COL_COURSE_LEVEL);
    let col_slots = find_column(headers, COL_COURSE_SLOTS);
    let friend_cols: Vec<Option<usize>> =
        FRIEND_COLS.iter().map(|c| find_column(headers, c)).collect();

    let labels = slot_map();
    let mut people: HashMap<u64, Person> = HashMap::new();

    for row in &rows[1..] {
        let raw_number = cell(row, Some(col_std));
        let std_number = match raw_number.parse::<u64>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("WARN: skipping row with invalid student number '{}'", raw_number);
                continue;
            }
        };

        let friends: Vec<u64> = friend_cols
            .iter()
            .filter_map(|col| cell(row, *col).parse::<u64>().ok())
            .collect();

        // Only labels present in the catalogue map to slot codes.
        let course_slots: Vec<i32> = cell(row, col_slots)
            .split(',')
            .filter_map(|label| labels.get(label.trim()).copied())
            .collect();

        let person = Person {
            std_number,
            fullname: cell(row, Some(col_name)).to_string(),
            phone_number: cell(row, col_phone).to_string(),
            apply_date: parse_apply_date(cell(row, col_timestamp)),
            // TODO: look membership up in the club roster once it is exported alongside the form.
            is_member: true,
            course_level: cell(row, col_level).to_string(),
            course_slots,
            friends,
            is_placed: false,
            last_completed_course: BASIC_COURSE_LEVEL.to_string(),
        };
        people.insert(std_number, person);
    }

    Ok(people)
}
