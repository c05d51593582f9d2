// src/lib.rs - Library interface for internal module access

pub mod column_descriptions;
pub mod column_discovery;
pub mod constants;
pub mod data_analysis;
pub mod data_input;
pub mod mode_colors;
pub mod time_format;

pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
