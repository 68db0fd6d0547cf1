// Workbook differ
//
// Drives the comparison: sheet-set gate, then per sheet normalize, shape
// check and cell check. By default the run stops at the first sheet that
// differs; exhaustive mode keeps going and collects every mismatch.

pub mod cells;
pub mod sheet_set;

pub use cells::{compare_cells, compare_shape, CellMismatch};
pub use sheet_set::{check_sheet_sets, SheetSetCheck};

use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::{DiffConfig, ReportMode};
use crate::error::{LoadError, Mismatch};
use crate::loader;
use crate::normalize::Normalizer;
use crate::workbook::{Table, Workbook};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Identical,
    Different,
}

impl Verdict {
    pub fn exit_code(self) -> u8 {
        match self {
            Verdict::Identical => 0,
            Verdict::Different => 1,
        }
    }
}

/// Everything a run found, in the order it was found.
#[derive(Debug, Clone, PartialEq)]
pub struct DiffReport {
    pub mode: ReportMode,
    pub left_sheets: Vec<String>,
    pub right_sheets: Vec<String>,
    pub order_differs: bool,
    /// Sheets that went through the shape and cell checks.
    pub sheets_compared: usize,
    pub mismatches: Vec<Mismatch>,
}

impl DiffReport {
    pub fn verdict(&self) -> Verdict {
        if self.mismatches.is_empty() {
            Verdict::Identical
        } else {
            Verdict::Different
        }
    }

    pub fn is_identical(&self) -> bool {
        self.verdict() == Verdict::Identical
    }

    /// Number of sheets reported as different.
    pub fn sheets_differing(&self) -> usize {
        self.mismatches.iter().filter(|m| m.sheet().is_some()).count()
    }
}

#[derive(Debug, Clone, Default)]
pub struct WorkbookDiffer {
    config: DiffConfig,
    normalizer: Normalizer,
}

impl WorkbookDiffer {
    pub fn new(config: DiffConfig) -> Self {
        let normalizer = Normalizer::from_config(&config);
        Self { config, normalizer }
    }

    pub fn config(&self) -> &DiffConfig {
        &self.config
    }

    /// Load both files, then compare them.
    ///
    /// Both workbooks are fully loaded before any comparison starts.
    pub fn compare_files(
        &self,
        left: impl AsRef<Path>,
        right: impl AsRef<Path>,
    ) -> Result<DiffReport, LoadError> {
        let left = loader::load(left)?;
        let right = loader::load(right)?;
        Ok(self.compare(&left, &right))
    }

    pub fn compare(&self, left: &Workbook, right: &Workbook) -> DiffReport {
        let mut report = DiffReport {
            mode: self.config.mode,
            left_sheets: left.sheet_names().iter().map(|s| s.to_string()).collect(),
            right_sheets: right.sheet_names().iter().map(|s| s.to_string()).collect(),
            order_differs: false,
            sheets_compared: 0,
            mismatches: Vec::new(),
        };

        let check = check_sheet_sets(left, right);
        report.order_differs = check.order_differs;
        if let Some(mismatch) = check.into_mismatch() {
            warn!("Sheet names differ, skipping sheet comparison");
            report.mismatches.push(mismatch);
            return report;
        }

        for sheet in left.sheets() {
            // The set check above guarantees the name exists on both sides
            let Some(right_table) = right.sheet(&sheet.name) else {
                continue;
            };

            report.sheets_compared += 1;
            if let Some(mismatch) = self.compare_sheet(&sheet.name, &sheet.table, right_table) {
                report.mismatches.push(mismatch);
                if self.config.mode == ReportMode::FirstDifference {
                    debug!("Stopping at first differing sheet '{}'", sheet.name);
                    break;
                }
            }
        }

        info!(
            "Compared {} sheet(s), {} mismatch(es)",
            report.sheets_compared,
            report.mismatches.len()
        );
        report
    }

    /// Normalize both tables, then check shape and cells.
    pub fn compare_sheet(&self, name: &str, left: &Table, right: &Table) -> Option<Mismatch> {
        let left = self.normalizer.normalized(left);
        let right = self.normalizer.normalized(right);

        if let Err(mismatch) = compare_shape(name, &left, &right) {
            debug!("Sheet '{}' shape differs", name);
            return Some(mismatch);
        }

        let cells = compare_cells(&left, &right);
        if cells.is_empty() {
            debug!("Sheet '{}' is identical", name);
            None
        } else {
            debug!("Sheet '{}' has {} differing cell(s)", name, cells.len());
            Some(Mismatch::Values {
                sheet: name.to_string(),
                cells,
            })
        }
    }
}
