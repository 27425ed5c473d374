//! In-memory column table.
//!
//! A `Table` is a list of named `f64` columns of equal length. Loaded columns
//! are never modified; fitting only appends new derived columns.

use crate::error::{AnscombeError, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Vec<f64>>,
    n_rows: usize,
}

impl Table {
    /// Build a table from `(name, values)` pairs.
    pub fn from_columns(columns: Vec<(String, Vec<f64>)>) -> Result<Self> {
        let mut table = Table::default();
        for (name, values) in columns {
            table.insert_column(name, values)?;
        }
        Ok(table)
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_columns(&self) -> usize {
        self.names.len()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Result<&[f64]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|idx| self.columns[idx].as_slice())
            .ok_or_else(|| AnscombeError::DataFormat(format!("missing column '{name}'")))
    }

    /// Append a column. Names are unique and lengths must match existing rows.
    pub fn insert_column(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<()> {
        let name = name.into();
        if self.has_column(&name) {
            return Err(AnscombeError::DataFormat(format!("duplicate column '{name}'")));
        }
        if self.names.is_empty() {
            self.n_rows = values.len();
        } else if values.len() != self.n_rows {
            return Err(AnscombeError::DataFormat(format!(
                "column '{name}' has {} rows, table has {}",
                values.len(),
                self.n_rows
            )));
        }
        self.names.push(name);
        self.columns.push(values);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Table {
        Table::from_columns(vec![
            ("x1".to_string(), vec![1.0, 2.0, 3.0]),
            ("y1".to_string(), vec![2.0, 4.0, 6.0]),
        ])
        .unwrap()
    }

    #[test]
    fn lookup_by_name() {
        let table = small();
        assert_eq!(table.n_rows(), 3);
        assert_eq!(table.column("y1").unwrap(), &[2.0, 4.0, 6.0]);
        assert_eq!(table.column_names().collect::<Vec<_>>(), vec!["x1", "y1"]);
    }

    #[test]
    fn missing_column_is_data_format_error() {
        let err = small().column("x9").unwrap_err();
        assert!(matches!(err, AnscombeError::DataFormat(ref m) if m.contains("x9")));
    }

    #[test]
    fn loaded_columns_cannot_be_overwritten() {
        let mut table = small();
        let err = table.insert_column("x1", vec![0.0; 3]).unwrap_err();
        assert!(matches!(err, AnscombeError::DataFormat(_)));
        assert_eq!(table.column("x1").unwrap(), &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn derived_column_must_match_row_count() {
        let mut table = small();
        assert!(table.insert_column("y1line", vec![1.0]).is_err());
        table.insert_column("y1line", vec![2.0, 4.0, 6.0]).unwrap();
        assert_eq!(table.n_columns(), 3);
    }
}
