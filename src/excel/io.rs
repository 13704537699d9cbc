use calamine::{Data, open_workbook_auto};
use std::error::Error;
use std::path::Path;

/// Convert a calamine `Data` cell to String. Floats holding whole numbers
/// render without the trailing `.0` so student numbers survive the trip
/// through a spreadsheet.
pub fn cell_to_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) => {
            if (f.floor() - f).abs() < f64::EPSILON {
                format!("{}", *f as i64)
            } else {
                format!("{}", f)
            }
        }
        Data::Int(i) => format!("{}", i),
        Data::Bool(b) => format!("{}", b),
        Data::Empty => String::new(),
        Data::Error(_) => String::new(),
        Data::DateTime(s) => s.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
    }
}

/// Read one sheet of an Excel file as Vec<Vec<String>>. Prefers the sheet
/// with the requested name, falls back to the first one.
pub fn read_xlsx_rows<P: AsRef<Path>>(
    path: P,
    sheet_name: &str,
) -> Result<Vec<Vec<String>>, Box<dyn Error>> {
    use calamine::Reader;
    let mut workbook = open_workbook_auto(path)?;

    let names = workbook.sheet_names().to_owned();
    let sheet_to_use = if sheet_name.is_empty() {
        names.first().cloned().unwrap_or_default()
    } else {
        names
            .iter()
            .find(|s| *s == sheet_name)
            .cloned()
            .unwrap_or_else(|| names.first().cloned().unwrap_or_default())
    };

    if sheet_to_use.is_empty() {
        return Ok(Vec::new());
    }

    match workbook.worksheet_range(&sheet_to_use) {
        Ok(range) => {
            let mut rows: Vec<Vec<String>> = Vec::new();
            for r in range.rows() {
                rows.push(r.iter().map(cell_to_string).collect());
            }
            Ok(rows)
        }
        Err(_) => Ok(Vec::new()),
    }
}

/// Read a CSV file as Vec<Vec<String>>, header row included. Rows may have
/// ragged lengths (the form backend drops trailing empty cells).
pub fn read_csv_rows<P: AsRef<Path>>(path: P) -> Result<Vec<Vec<String>>, Box<dyn Error>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|field| field.trim().to_string()).collect());
    }
    Ok(rows)
}
