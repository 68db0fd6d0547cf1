use tracing::debug;

use crate::config::{DiffConfig, DEFAULT_MARKER, DEFAULT_SENTINEL};
use crate::workbook::{CellValue, Table};

/// Replaces a known error marker with a sentinel so it never causes a false
/// mismatch. Only text cells exactly equal to the marker are touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    marker: String,
    sentinel: String,
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER, DEFAULT_SENTINEL)
    }
}

impl Normalizer {
    pub fn new(marker: impl Into<String>, sentinel: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
            sentinel: sentinel.into(),
        }
    }

    pub fn from_config(config: &DiffConfig) -> Self {
        Self::new(config.marker.clone(), config.sentinel.clone())
    }

    /// Normalize `table` in place, returning how many cells were replaced.
    pub fn apply(&self, table: &mut Table) -> usize {
        let mut replaced = 0;
        for cell in table.cells_mut() {
            if cell.as_text() == Some(self.marker.as_str()) {
                *cell = CellValue::Text(self.sentinel.clone());
                replaced += 1;
            }
        }

        if replaced > 0 {
            debug!(
                "Replaced {} '{}' cell(s) with '{}'",
                replaced, self.marker, self.sentinel
            );
        }
        replaced
    }

    /// Normalized copy of `table`; the input is left as loaded.
    pub fn normalized(&self, table: &Table) -> Table {
        let mut copy = table.clone();
        self.apply(&mut copy);
        copy
    }
}
