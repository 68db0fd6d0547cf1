use crate::error::Mismatch;
use crate::workbook::{CellValue, Table};

/// One position where two tables disagree. `row` and `col` are 1-based.
#[derive(Debug, Clone, PartialEq)]
pub struct CellMismatch {
    pub row: usize,
    pub col: usize,
    pub left: CellValue,
    pub right: CellValue,
}

pub fn compare_shape(sheet: &str, left: &Table, right: &Table) -> Result<(), Mismatch> {
    if left.shape() == right.shape() {
        Ok(())
    } else {
        Err(Mismatch::Shape {
            sheet: sheet.to_string(),
            left: left.shape(),
            right: right.shape(),
        })
    }
}

/// Every differing position in row-major order.
///
/// Both tables must already have the same shape; cells outside the shorter
/// table are never visited.
pub fn compare_cells(left: &Table, right: &Table) -> Vec<CellMismatch> {
    left.rows()
        .zip(right.rows())
        .enumerate()
        .flat_map(|(row_idx, (left_row, right_row))| {
            left_row
                .iter()
                .zip(right_row)
                .enumerate()
                .filter(|(_, (l, r))| l != r)
                .map(move |(col_idx, (l, r))| CellMismatch {
                    row: row_idx + 1,
                    col: col_idx + 1,
                    left: l.clone(),
                    right: r.clone(),
                })
        })
        .collect()
}
