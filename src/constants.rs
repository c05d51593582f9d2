// src/constants.rs

use plotters::style::{RGBAColor, RGBColor};

// Prefix that marks a setpoint column in the table header.
pub const SETPOINT_PREFIX: &str = "SP_";

// Reserved name fragments. Any column containing one of these (case-sensitive,
// anywhere in the name) is excluded from output-variable discovery.
pub const RESERVED_COLUMN_SUBSTRINGS: [&str; 3] = ["timestamp", "operating_regime", "_is_outlier"];

// --- Mode Color Assignments ---

// Base RGB values for mode visualization. The same eight hues back every
// rendering surface (overlay fills, timeline bars, badges) so a mode keeps
// one recognizable color everywhere.
pub const MODE_BASE_COLORS: [RGBColor; 8] = [
    RGBColor(167, 139, 250), // Purple
    RGBColor(103, 232, 249), // Cyan
    RGBColor(134, 239, 172), // Green
    RGBColor(252, 211, 77),  // Amber
    RGBColor(196, 181, 253), // Violet
    RGBColor(165, 243, 252), // Sky
    RGBColor(190, 242, 100), // Lime
    RGBColor(253, 230, 138), // Yellow
];

// Opacity tiers per rendering surface.
pub const MODE_FILL_ALPHA: f64 = 0.25;
pub const MODE_TIMELINE_ALPHA: f64 = 0.7;

// Neutral gray returned when a requested mode is absent from the supplied set.
pub const MODE_DEFAULT_GRAY: RGBColor = RGBColor(128, 128, 128);
pub const MODE_DEFAULT_FILL: RGBAColor = RGBAColor(128, 128, 128, 0.2);

// src/constants.rs
