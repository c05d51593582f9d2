// src/data_analysis/mod.rs

pub mod mode_segments;

// src/data_analysis/mod.rs
