// src/data_analysis/mode_segments.rs
//
// Shapes per-row operating-mode labels into the contiguous segments the
// timeline surfaces consume. The labels themselves come from an external
// detection engine (or the dataset's regime column); nothing here decides
// what a mode is.

use chrono::{DateTime, Utc};
use std::collections::HashMap;

use crate::mode_colors::compare_mode_ids;
use crate::time_format::parse_timestamp;

/// One contiguous run of rows sharing the same mode label.
/// `end_index` is inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeSegment {
    pub mode: String,
    pub start_index: usize,
    pub end_index: usize,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl ModeSegment {
    pub fn row_count(&self) -> usize {
        self.end_index - self.start_index + 1
    }

    /// Wall-clock length of the segment, when both endpoints have timestamps.
    pub fn duration_ms(&self) -> Option<i64> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) => Some(end.signed_duration_since(start).num_milliseconds()),
            _ => None,
        }
    }
}

/// Aggregate statistics for one mode across all of its segments.
#[derive(Debug, Clone, PartialEq)]
pub struct ModeStatistics {
    pub mode: String,
    pub segment_count: usize,
    pub total_rows: usize,
    /// Summed segment durations; `None` as soon as any segment lacks timestamps.
    pub total_duration_ms: Option<i64>,
    /// Fraction of all table rows spent in this mode.
    pub row_share: f64,
}

fn make_segment<T: AsRef<str>>(
    mode: String,
    start: usize,
    end: usize,
    timestamps: Option<&[T]>,
) -> ModeSegment {
    let time_at = |idx: usize| {
        timestamps
            .and_then(|ts| ts.get(idx))
            .and_then(|t| parse_timestamp(t.as_ref()))
    };
    ModeSegment {
        mode,
        start_index: start,
        end_index: end,
        start_time: time_at(start),
        end_time: time_at(end),
    }
}

/// Collapse per-row mode labels into contiguous segments.
///
/// `timestamps`, when provided, must be row-aligned with `labels`. Rows with
/// an empty (or whitespace-only) label break the current run without forming
/// a segment of their own.
pub fn extract_segments<S: AsRef<str>, T: AsRef<str>>(
    labels: &[S],
    timestamps: Option<&[T]>,
) -> Vec<ModeSegment> {
    let mut segments: Vec<ModeSegment> = Vec::new();
    let mut current: Option<(String, usize)> = None;

    for (idx, label) in labels.iter().enumerate() {
        let label = label.as_ref().trim();
        let continues = matches!(&current, Some((mode, _)) if mode == label);
        if continues {
            continue;
        }
        if let Some((mode, start)) = current.take() {
            segments.push(make_segment(mode, start, idx - 1, timestamps));
        }
        if !label.is_empty() {
            current = Some((label.to_string(), idx));
        }
    }
    if let Some((mode, start)) = current {
        segments.push(make_segment(mode, start, labels.len() - 1, timestamps));
    }

    segments
}

/// Number of mode changes between consecutive segments.
pub fn transition_count(segments: &[ModeSegment]) -> usize {
    segments.windows(2).filter(|w| w[0].mode != w[1].mode).count()
}

/// Per-mode totals across all segments, in canonical mode order.
pub fn mode_statistics(segments: &[ModeSegment], table_row_count: usize) -> Vec<ModeStatistics> {
    let mut by_mode: HashMap<&str, (usize, usize, Option<i64>)> = HashMap::new();
    for segment in segments {
        let entry = by_mode
            .entry(segment.mode.as_str())
            .or_insert((0, 0, Some(0)));
        entry.0 += 1;
        entry.1 += segment.row_count();
        entry.2 = match (entry.2, segment.duration_ms()) {
            (Some(acc), Some(d)) => Some(acc + d),
            _ => None,
        };
    }

    let mut modes: Vec<&str> = by_mode.keys().copied().collect();
    modes.sort_by(|a, b| compare_mode_ids(a, b));

    modes
        .into_iter()
        .map(|mode| {
            let (segment_count, total_rows, total_duration_ms) = by_mode[mode];
            ModeStatistics {
                mode: mode.to_string(),
                segment_count,
                total_rows,
                total_duration_ms,
                row_share: if table_row_count > 0 {
                    total_rows as f64 / table_row_count as f64
                } else {
                    0.0
                },
            }
        })
        .collect()
}


// src/data_analysis/mode_segments.rs
