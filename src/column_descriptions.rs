// src/column_descriptions.rs
//
// Descriptive labels for the cascaded-reactor instrument tags.
// Used to decode raw column names into human-readable descriptions
// for the selection and reporting surfaces.

use std::collections::HashMap;

/// Instrument tag descriptions for the cascaded CSTR dataset.
fn reactor_tag_descriptions() -> HashMap<&'static str, &'static str> {
    let mut map = HashMap::new();
    map.insert("TT_101", "Temperature Tank 1");
    map.insert("TT_102", "Temperature Tank 2");
    map.insert("LT_101", "Level Tank 1");
    map.insert("LT_102", "Level Tank 2");
    map.insert("FT_101", "Flow Tank 1");
    map.insert("FT_102", "Flow Tank 2");
    map.insert("ST_101", "Stirring Tank 1");
    map.insert("ST_102", "Stirring Tank 2");
    map.insert("AT_101", "Analyzer/Composition");
    map.insert("CT_104", "Controller Output 104");
    map.insert("CT_105", "Controller Output 105");
    map.insert("CT_106", "Controller Output 106");
    map.insert("conversion", "Process Conversion");
    map.insert("selectivity", "Process Selectivity");
    map
}

/// Look up the description for a column or base name.
///
/// Unmapped names fall back to the name itself, so the lookup never fails.
pub fn column_description(name: &str) -> String {
    reactor_tag_descriptions()
        .get(name)
        .copied()
        .unwrap_or(name)
        .to_string()
}


// src/column_descriptions.rs
