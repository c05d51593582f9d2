// src/mode_colors.rs
//
// Consistent mode color system. Every surface that draws a mode (overlay
// fill, timeline bar, solid badge) gets its color from here so a mode looks
// the same across the whole report.

use std::cmp::Ordering;
use std::collections::HashMap;

use plotters::style::{RGBAColor, RGBColor};

use crate::constants::{
    MODE_BASE_COLORS, MODE_DEFAULT_FILL, MODE_DEFAULT_GRAY, MODE_FILL_ALPHA, MODE_TIMELINE_ALPHA,
};

/// Color triple assigned to one operating mode, one entry per rendering
/// surface. The string forms are CSS-style `rgb(...)`/`rgba(...)` encodings
/// at the fixed opacity tiers; `base` keeps the underlying palette color for
/// plotting consumers.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeColorSet {
    pub base: RGBColor,
    /// Soft overlay fill, alpha 0.25.
    pub fill: String,
    /// Full-opacity color for badges and indicators.
    pub solid: String,
    /// Timeline bar color, alpha 0.7.
    pub timeline: String,
}

impl ModeColorSet {
    fn from_base(base: RGBColor) -> Self {
        ModeColorSet {
            base,
            fill: rgba_string(&base, MODE_FILL_ALPHA),
            solid: rgb_string(&base),
            timeline: rgba_string(&base, MODE_TIMELINE_ALPHA),
        }
    }

    /// Overlay fill as a plotters color.
    pub fn fill_color(&self) -> RGBAColor {
        RGBAColor(self.base.0, self.base.1, self.base.2, MODE_FILL_ALPHA)
    }

    /// Timeline bar as a plotters color.
    pub fn timeline_color(&self) -> RGBAColor {
        RGBAColor(self.base.0, self.base.1, self.base.2, MODE_TIMELINE_ALPHA)
    }
}

fn rgb_string(color: &RGBColor) -> String {
    format!("rgb({}, {}, {})", color.0, color.1, color.2)
}

fn rgba_string(color: &RGBColor, alpha: f64) -> String {
    format!("rgba({}, {}, {}, {})", color.0, color.1, color.2, alpha)
}

/// Numeric-aware mode ordering: identifiers that parse as base-10 integers
/// compare numerically and sort ahead of all non-numeric identifiers, which
/// compare as plain strings among themselves. Keeps `"2"` ahead of `"10"`
/// while staying a total order on mixed sets.
///
/// Only fully numeric identifiers count as numbers; `"3.5"` and `"10abc"`
/// are treated as plain strings.
pub fn compare_mode_ids(a: &str, b: &str) -> Ordering {
    match (a.parse::<i64>(), b.parse::<i64>()) {
        (Ok(num_a), Ok(num_b)) => num_a.cmp(&num_b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Assign each distinct mode identifier a color triple from the fixed
/// 8-entry base palette, cycling when there are more than eight modes.
///
/// Assignment is keyed to the canonical sorted position, not supplied order,
/// so identical mode sets always produce identical colors. Nothing is cached
/// between calls; color identity across runs requires passing the same
/// complete mode set each time.
pub fn assign_mode_colors<S: AsRef<str>>(modes: &[S]) -> HashMap<String, ModeColorSet> {
    let mut sorted: Vec<&str> = modes.iter().map(|m| m.as_ref()).collect();
    sorted.sort_by(|a, b| compare_mode_ids(a, b));
    sorted.dedup();

    sorted
        .into_iter()
        .enumerate()
        .map(|(idx, mode)| {
            let base = MODE_BASE_COLORS[idx % MODE_BASE_COLORS.len()];
            (mode.to_string(), ModeColorSet::from_base(base))
        })
        .collect()
}

/// Solid color for one mode, recomputed from the full mode set.
/// Falls back to neutral gray when the mode is absent from `all_modes`.
pub fn mode_solid_color<S: AsRef<str>>(mode: &str, all_modes: &[S]) -> String {
    assign_mode_colors(all_modes)
        .remove(mode)
        .map(|colors| colors.solid)
        .unwrap_or_else(|| rgb_string(&MODE_DEFAULT_GRAY))
}

/// Overlay fill color for one mode, recomputed from the full mode set.
/// Falls back to a translucent neutral gray when the mode is absent.
pub fn mode_fill_color<S: AsRef<str>>(mode: &str, all_modes: &[S]) -> String {
    assign_mode_colors(all_modes)
        .remove(mode)
        .map(|colors| colors.fill)
        .unwrap_or_else(|| {
            format!(
                "rgba({}, {}, {}, {})",
                MODE_DEFAULT_FILL.0, MODE_DEFAULT_FILL.1, MODE_DEFAULT_FILL.2, MODE_DEFAULT_FILL.3
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_entry_per_distinct_mode() {
        let colors = assign_mode_colors(&["1", "0", "2", "1", "0"]);
        assert_eq!(colors.len(), 3);
        assert!(colors.contains_key("0"));
        assert!(colors.contains_key("1"));
        assert!(colors.contains_key("2"));
    }

    #[test]
    fn test_assignment_is_permutation_invariant() {
        let a = assign_mode_colors(&["2", "0", "1"]);
        let b = assign_mode_colors(&["1", "2", "0"]);
        assert_eq!(a, b);
    }

    #[test]
    fn test_numeric_strings_sort_numerically() {
        let colors = assign_mode_colors(&["10", "2", "1"]);
        // Sorted order 1, 2, 10 maps onto palette indices 0, 1, 2.
        assert_eq!(colors["1"].base, MODE_BASE_COLORS[0]);
        assert_eq!(colors["2"].base, MODE_BASE_COLORS[1]);
        assert_eq!(colors["10"].base, MODE_BASE_COLORS[2]);
    }

    #[test]
    fn test_non_numeric_modes_fall_back_to_string_order() {
        let colors = assign_mode_colors(&["startup", "idle", "shutdown"]);
        assert_eq!(colors["idle"].base, MODE_BASE_COLORS[0]);
        assert_eq!(colors["shutdown"].base, MODE_BASE_COLORS[1]);
        assert_eq!(colors["startup"].base, MODE_BASE_COLORS[2]);
    }

    #[test]
    fn test_mixed_numeric_and_string_modes_order_totally() {
        // Numeric identifiers sort numerically ahead of every non-numeric
        // one; assignment stays permutation-invariant for mixed sets.
        let a = assign_mode_colors(&["2", "10", "1z"]);
        let b = assign_mode_colors(&["1z", "10", "2"]);
        assert_eq!(a, b);
        assert_eq!(a["2"].base, MODE_BASE_COLORS[0]);
        assert_eq!(a["10"].base, MODE_BASE_COLORS[1]);
        assert_eq!(a["1z"].base, MODE_BASE_COLORS[2]);
    }

    #[test]
    fn test_large_mixed_mode_set_assigns_without_panicking() {
        // Interleaves numeric and non-numeric identifiers; a comparator that
        // is not a total order makes the sort reject sets of this size.
        let modes: Vec<String> = (0..30)
            .flat_map(|i| [i.to_string(), format!("{}z", i)])
            .collect();
        let colors = assign_mode_colors(&modes);
        assert_eq!(colors.len(), 60);
        // All 30 numeric ids precede the non-numeric block.
        assert_eq!(colors["29"].base, MODE_BASE_COLORS[29 % 8]);
        assert_eq!(colors["0z"].base, MODE_BASE_COLORS[30 % 8]);
    }

    #[test]
    fn test_palette_wraps_after_eight_modes() {
        let modes: Vec<String> = (0..9).map(|m| m.to_string()).collect();
        let colors = assign_mode_colors(&modes);
        assert_eq!(colors["8"].base, colors["0"].base);
        assert_ne!(colors["7"].base, colors["0"].base);
    }

    #[test]
    fn test_palette_families_by_sorted_position() {
        let colors = assign_mode_colors(&["0", "1", "2"]);
        assert_eq!(colors["0"].solid, "rgb(167, 139, 250)"); // purple family
        assert_eq!(colors["2"].solid, "rgb(134, 239, 172)"); // green family
    }

    #[test]
    fn test_opacity_tiers_in_string_forms() {
        let colors = assign_mode_colors(&["0"]);
        let entry = &colors["0"];
        assert_eq!(entry.fill, "rgba(167, 139, 250, 0.25)");
        assert_eq!(entry.solid, "rgb(167, 139, 250)");
        assert_eq!(entry.timeline, "rgba(167, 139, 250, 0.7)");
    }

    #[test]
    fn test_accessors_default_to_gray_for_unknown_mode() {
        let all_modes = ["0", "1"];
        assert_eq!(mode_solid_color("7", &all_modes), "rgb(128, 128, 128)");
        assert_eq!(
            mode_fill_color("7", &all_modes),
            "rgba(128, 128, 128, 0.2)"
        );
        // Known modes still resolve through the same accessors.
        assert_eq!(mode_solid_color("0", &all_modes), "rgb(167, 139, 250)");
    }

    #[test]
    fn test_plotters_color_accessors_carry_alpha() {
        let colors = assign_mode_colors(&["0"]);
        let entry = &colors["0"];
        assert_eq!(entry.fill_color(), RGBAColor(167, 139, 250, 0.25));
        assert_eq!(entry.timeline_color(), RGBAColor(167, 139, 250, 0.7));
    }

    #[test]
    fn test_empty_mode_set() {
        let empty: [&str; 0] = [];
        assert!(assign_mode_colors(&empty).is_empty());
        assert_eq!(mode_solid_color("0", &empty), "rgb(128, 128, 128)");
    }
}

// src/mode_colors.rs
