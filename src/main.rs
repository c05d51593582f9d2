// src/main.rs

use std::env;
use std::error::Error;
use std::path::Path;

use reactor_csv_modes::column_discovery::{discover_columns, unmatched_setpoint_columns};
use reactor_csv_modes::data_analysis::mode_segments::{
    extract_segments, mode_statistics, transition_count,
};
use reactor_csv_modes::data_input::table_parser::parse_table_file;
use reactor_csv_modes::mode_colors::{assign_mode_colors, mode_solid_color};
use reactor_csv_modes::time_format::format_duration;

fn main() -> Result<(), Box<dyn Error>> {
    // --- Argument Parsing ---
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <input_file.csv>", args[0]);
        std::process::exit(1);
    }
    let input_path = Path::new(&args[1]);
    let root_name = input_path.file_stem().unwrap_or_default().to_string_lossy();

    println!("reactor_csv_modes v{}", reactor_csv_modes::crate_version());
    println!("Loading '{}'...", input_path.display());
    let table = parse_table_file(input_path)?;

    // --- Column Discovery Report ---
    let discovered = discover_columns(&table.columns);
    println!("\n--- Column Discovery ({}) ---", root_name);
    println!("SP/PV pairs found: {}", discovered.sp_pv_pairs.len());
    for pair in &discovered.sp_pv_pairs {
        println!(
            "  '{}' / '{}' ({})",
            pair.sp_column, pair.pv_column, pair.description
        );
    }
    for sp_column in unmatched_setpoint_columns(&table.columns) {
        println!(
            "  Warning: '{}' has no matching process-variable column and was dropped.",
            sp_column
        );
    }
    println!("Output variables found: {}", discovered.output_variables.len());
    for output in &discovered.output_variables {
        println!("  '{}' ({})", output.name, output.description);
    }

    // --- Mode Timeline Report ---
    // Only produced when the dataset carries a regime label column; the labels
    // normally come from an external detection engine.
    match table.column_values("operating_regime") {
        Some(labels) => {
            let timestamps = table.column_values("timestamp");
            let segments = extract_segments(&labels, timestamps.as_deref());
            let stats = mode_statistics(&segments, table.row_count());
            let mode_ids: Vec<&str> = stats.iter().map(|s| s.mode.as_str()).collect();
            let colors = assign_mode_colors(&mode_ids);

            println!("\n--- Mode Timeline ---");
            println!(
                "{} segments, {} transitions, {} distinct modes",
                segments.len(),
                transition_count(&segments),
                stats.len()
            );
            for segment in &segments {
                let solid = colors
                    .get(&segment.mode)
                    .map(|c| c.solid.clone())
                    .unwrap_or_else(|| mode_solid_color(&segment.mode, &mode_ids));
                println!(
                    "  rows {:>6}..{:<6} mode {:<10} {:<12} {}",
                    segment.start_index,
                    segment.end_index,
                    segment.mode,
                    format_duration(segment.duration_ms()),
                    solid
                );
            }

            println!("\n--- Mode Statistics ---");
            for stat in &stats {
                println!(
                    "  mode {:<10} segments {:<4} rows {:<8} ({:>5.1}%) total {}",
                    stat.mode,
                    stat.segment_count,
                    stat.total_rows,
                    stat.row_share * 100.0,
                    format_duration(stat.total_duration_ms)
                );
            }
        }
        None => {
            println!("\nNo 'operating_regime' column present; skipping mode timeline report.");
        }
    }

    Ok(())
}

// src/main.rs
