// src/data_input/table_parser.rs

use csv::ReaderBuilder;
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::data_input::table_data::DataTable;

/// Parses the reactor CSV file, capturing the header row and all records.
///
/// Rows that fail to read are skipped with a warning rather than aborting,
/// so one corrupt line cannot take down the whole load.
pub fn parse_table_file(input_file_path: &Path) -> Result<DataTable, Box<dyn Error>> {
    let file = File::open(input_file_path)?;
    parse_table(file)
}

/// Parses CSV content from any reader. See [`parse_table_file`].
pub fn parse_table<R: Read>(input: R) -> Result<DataTable, Box<dyn Error>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(input);

    let header_record = reader.headers()?.clone();
    let columns: Vec<String> = header_record.iter().map(|h| h.trim().to_string()).collect();
    if columns.is_empty() || (columns.len() == 1 && columns[0].is_empty()) {
        return Err("Could not find CSV headers in the input".into());
    }
    println!("Headers found in CSV: {:?}", columns);

    let mut rows: Vec<Vec<String>> = Vec::new();
    for (row_index, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                rows.push(record.iter().map(|v| v.to_string()).collect());
            }
            Err(e) => {
                eprintln!(
                    "Warning: Skipping row {} due to CSV read error: {}",
                    row_index + 1,
                    e
                );
            }
        }
    }
    println!("Finished reading {} data rows.", rows.len());

    Ok(DataTable { columns, rows })
}


// src/data_input/table_parser.rs
