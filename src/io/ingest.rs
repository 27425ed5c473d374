//! CSV ingest.
//!
//! Turns the quartet CSV into a [`Table`] of numeric columns.
//!
//! Design goals:
//! - **Strict schema**: all of `x1,y1,...,x4,y4` must be present
//! - **Strict cells**: every cell must parse as a number; the first bad cell
//!   aborts the load with its line and column in the message
//! - **Separation of concerns**: no fitting logic here

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;

use crate::domain::{SeriesId, Table};
use crate::error::{AnscombeError, Result};

/// Column names the loader insists on, in series order (`x1, y1, x2, ...`).
pub fn required_columns() -> Vec<String> {
    SeriesId::ALL
        .iter()
        .flat_map(|s| [s.x_column(), s.y_column()])
        .collect()
}

/// Load the table from a CSV file on disk.
pub fn load_table(path: &Path) -> Result<Table> {
    let file = File::open(path)
        .map_err(|e| AnscombeError::DataFormat(format!("failed to open CSV '{}': {e}", path.display())))?;
    let table = read_table(file).map_err(|e| e.context(path.display()))?;

    tracing::info!(
        path = %path.display(),
        rows = table.n_rows(),
        columns = table.n_columns(),
        "loaded table"
    );
    Ok(table)
}

/// Parse a table from any CSV reader (header row + numeric rows).
pub fn read_table<R: Read>(input: R) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| AnscombeError::DataFormat(format!("failed to read CSV headers: {e}")))?
        .clone();

    let names = header_names(&headers)?;
    ensure_required_columns_exist(&names)?;

    let mut columns: Vec<Vec<f64>> = vec![Vec::new(); names.len()];

    for (idx, result) in reader.records().enumerate() {
        // +2 because:
        // - records() starts at line 1 after headers
        // - CSV is 1-based line numbers
        let line = idx + 2;

        let record = result.map_err(|e| AnscombeError::DataFormat(format!("line {line}: {e}")))?;
        for (col, raw) in record.iter().enumerate() {
            let value = parse_cell(raw).ok_or_else(|| {
                AnscombeError::DataFormat(format!(
                    "line {line}, column '{}': invalid number '{raw}'",
                    names[col]
                ))
            })?;
            columns[col].push(value);
        }
    }

    Table::from_columns(names.into_iter().zip(columns).collect())
}

fn header_names(headers: &StringRecord) -> Result<Vec<String>> {
    let names: Vec<String> = headers.iter().map(normalize_header_name).collect();

    let mut seen: HashMap<&str, usize> = HashMap::new();
    for (idx, name) in names.iter().enumerate() {
        if let Some(first) = seen.insert(name.as_str(), idx) {
            return Err(AnscombeError::DataFormat(format!(
                "duplicate column '{name}' (positions {} and {})",
                first + 1,
                idx + 1
            )));
        }
    }
    Ok(names)
}

fn normalize_header_name(name: &str) -> String {
    // Spreadsheet exports sometimes prefix the first header with a UTF-8 BOM;
    // left in place it would make `x1` look missing.
    name.trim().trim_start_matches('\u{feff}').to_string()
}

fn ensure_required_columns_exist(names: &[String]) -> Result<()> {
    let missing: Vec<String> = required_columns()
        .into_iter()
        .filter(|req| !names.iter().any(|n| n == req))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(AnscombeError::DataFormat(format!(
            "missing required column(s): {}",
            missing.join(", ")
        )))
    }
}

fn parse_cell(raw: &str) -> Option<f64> {
    if raw.is_empty() {
        return None;
    }
    raw.parse::<f64>().ok()
}
