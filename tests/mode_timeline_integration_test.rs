// tests/mode_timeline_integration_test.rs

use reactor_csv_modes::data_analysis::mode_segments::{
    extract_segments, mode_statistics, transition_count,
};
use reactor_csv_modes::data_input::table_parser::parse_table;
use reactor_csv_modes::mode_colors::assign_mode_colors;
use reactor_csv_modes::time_format::format_duration;

const LABELED_CSV: &str = "\
timestamp,TT_101,operating_regime
2024-03-01 00:00:00,351.2,0
2024-03-01 00:30:00,350.7,0
2024-03-01 01:00:00,358.9,2
2024-03-01 01:30:00,359.1,2
2024-03-01 02:00:00,352.3,10
2024-03-01 02:30:00,351.8,0
";

#[test]
fn test_timeline_pipeline_from_csv_to_colored_segments() {
    let table = parse_table(LABELED_CSV.as_bytes()).unwrap();
    let labels = table.column_values("operating_regime").unwrap();
    let timestamps = table.column_values("timestamp").unwrap();

    let segments = extract_segments(&labels, Some(&timestamps[..]));
    assert_eq!(segments.len(), 4);
    assert_eq!(transition_count(&segments), 3);
    assert_eq!(format_duration(segments[0].duration_ms()), "30m");

    let stats = mode_statistics(&segments, table.row_count());
    let mode_ids: Vec<&str> = stats.iter().map(|s| s.mode.as_str()).collect();
    // Numeric-aware order: 0, 2, 10.
    assert_eq!(mode_ids, vec!["0", "2", "10"]);
    assert_eq!(stats[0].segment_count, 2);
    assert_eq!(stats[0].total_rows, 3);

    let colors = assign_mode_colors(&mode_ids);
    assert_eq!(colors.len(), 3);
    // Sorted positions 0/1/2 take the purple, cyan, and green palette entries.
    assert_eq!(colors["0"].solid, "rgb(167, 139, 250)");
    assert_eq!(colors["2"].solid, "rgb(103, 232, 249)");
    assert_eq!(colors["10"].solid, "rgb(134, 239, 172)");
    assert_eq!(colors["10"].timeline, "rgba(134, 239, 172, 0.7)");
}

#[test]
fn test_color_assignment_stable_across_row_orderings() {
    // The assigner keys colors to the canonical sort, so feeding modes in
    // timeline order or reversed must not change the mapping.
    let forward = assign_mode_colors(&["0", "2", "10"]);
    let reversed = assign_mode_colors(&["10", "2", "0"]);
    assert_eq!(forward, reversed);
}
