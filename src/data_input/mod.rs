// src/data_input/mod.rs

pub mod table_data;
pub mod table_parser;

// src/data_input/mod.rs
