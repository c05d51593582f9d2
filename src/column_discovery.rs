// src/column_discovery.rs
//
// Auto-detection of SP/PV column pairs and free-standing output variables
// from a parsed table header. This is the contract layer between the raw
// CSV header and every downstream selection/visualization surface.

use crate::column_descriptions::column_description;
use crate::constants::{RESERVED_COLUMN_SUBSTRINGS, SETPOINT_PREFIX};

/// A setpoint column paired with the process-variable column that measures
/// the same physical quantity. `sp_column` is always `"SP_" + base_name`;
/// `pv_column` is the column literally equal to `base_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpPvPair {
    pub base_name: String,
    pub sp_column: String,
    pub pv_column: String,
    pub description: String,
}

/// A table column that is neither part of an SP/PV pair nor a reserved
/// column (timestamp, regime label, outlier flag).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputVariable {
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiscoveredColumns {
    pub sp_pv_pairs: Vec<SpPvPair>,
    pub output_variables: Vec<OutputVariable>,
}

/// Classify table header names into SP/PV pairs and output variables.
///
/// Pairing requires an exact base-name match: `SP_TT_101` pairs only with a
/// column named exactly `TT_101`. A setpoint column with no match is dropped
/// entirely (it appears in neither pairs nor outputs). Remaining columns
/// containing a reserved substring are excluded; everything else becomes an
/// output variable in original column order.
///
/// Total over any input, including the empty header.
pub fn discover_columns<S: AsRef<str>>(columns: &[S]) -> DiscoveredColumns {
    let mut sp_pv_pairs: Vec<SpPvPair> = Vec::new();

    for col in columns {
        let col = col.as_ref();
        if let Some(base_name) = col.strip_prefix(SETPOINT_PREFIX) {
            if columns.iter().any(|c| c.as_ref() == base_name) {
                sp_pv_pairs.push(SpPvPair {
                    base_name: base_name.to_string(),
                    sp_column: col.to_string(),
                    pv_column: base_name.to_string(),
                    description: column_description(base_name),
                });
            }
        }
    }

    let consumed: Vec<&str> = sp_pv_pairs
        .iter()
        .flat_map(|pair| [pair.sp_column.as_str(), pair.pv_column.as_str()])
        .collect();

    let mut output_variables: Vec<OutputVariable> = Vec::new();
    for col in columns {
        let col = col.as_ref();
        let is_reserved = RESERVED_COLUMN_SUBSTRINGS
            .iter()
            .any(|pattern| col.contains(pattern));
        if !is_reserved && !consumed.contains(&col) {
            output_variables.push(OutputVariable {
                name: col.to_string(),
                description: column_description(col),
            });
        }
    }

    DiscoveredColumns {
        sp_pv_pairs,
        output_variables,
    }
}

/// Setpoint columns that found no matching process-variable column.
///
/// Discovery drops these silently; callers that want to surface the gap
/// (the CLI report does) can list them here.
pub fn unmatched_setpoint_columns<S: AsRef<str>>(columns: &[S]) -> Vec<String> {
    columns
        .iter()
        .filter_map(|col| {
            let col = col.as_ref();
            let base_name = col.strip_prefix(SETPOINT_PREFIX)?;
            if columns.iter().any(|c| c.as_ref() == base_name) {
                None
            } else {
                Some(col.to_string())
            }
        })
        .collect()
}


// src/column_discovery.rs
