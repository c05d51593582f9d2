// src/data_input/table_data.rs

/// A parsed CSV table: the header row plus every record as raw strings.
/// Cells keep their original text; numeric interpretation happens on demand
/// so a stray non-numeric cell cannot poison the whole column.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DataTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Position of a column in the header, `None` when absent.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// All cell values of one column in row order. Short rows contribute an
    /// empty cell rather than being skipped, keeping row alignment intact.
    pub fn column_values(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).map(String::as_str).unwrap_or(""))
                .collect(),
        )
    }

    /// One column parsed as `f64`, cell by cell; unparseable cells are `None`.
    pub fn numeric_column(&self, name: &str) -> Option<Vec<Option<f64>>> {
        let idx = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(idx).and_then(|v| v.trim().parse::<f64>().ok()))
                .collect(),
        )
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}


// src/data_input/table_data.rs
