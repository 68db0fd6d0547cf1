// In-memory workbook model
//
// A workbook is an ordered list of named sheets; each sheet owns a
// rectangular table of decoded cell values stored row-major.

use chrono::NaiveDateTime;
use std::fmt;

/// A single decoded cell value.
///
/// Equality is type-sensitive: `Number(0.0)` and `Text("0")` are different,
/// and `Empty` is different from `Text("")`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl CellValue {
    pub fn text(value: impl Into<String>) -> Self {
        CellValue::Text(value.into())
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(s) => f.write_str(s),
            // Whole numbers print like spreadsheets show them: 2, not 2.0
            CellValue::Number(n) if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{n}"),
            CellValue::Bool(true) => f.write_str("TRUE"),
            CellValue::Bool(false) => f.write_str("FALSE"),
            CellValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// Rectangular grid of cells with a fixed shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    rows: usize,
    cols: usize,
    cells: Vec<CellValue>,
}

impl Table {
    /// Build a table from rows of possibly different lengths.
    ///
    /// The width is the longest row; shorter rows are padded with `Empty`.
    pub fn from_rows(rows: Vec<Vec<CellValue>>) -> Self {
        let height = rows.len();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);

        let mut cells = Vec::with_capacity(height * width);
        for mut row in rows {
            row.resize(width, CellValue::Empty);
            cells.extend(row);
        }

        Self {
            rows: height,
            cols: if height == 0 { 0 } else { width },
            cells,
        }
    }

    /// (row count, column count)
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True when the table has no rows or no columns.
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Cell at a 0-based position.
    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        if row < self.rows && col < self.cols {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[CellValue]> {
        // chunks(0) panics, and a table with zero columns has no cells anyway
        self.cells.chunks(self.cols.max(1))
    }

    /// Mutable access to every cell, used by the one-time normalization pass.
    /// Only values change; the shape stays fixed.
    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut CellValue> {
        self.cells.iter_mut()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub table: Table,
}

/// Named sheets in the order the source file lists them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Workbook {
    sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a sheet, replacing any existing sheet with the same name.
    pub fn insert(&mut self, name: impl Into<String>, table: Table) {
        let name = name.into();
        match self.sheets.iter_mut().find(|s| s.name == name) {
            Some(existing) => existing.table = table,
            None => self.sheets.push(Sheet { name, table }),
        }
    }

    pub fn with_sheet(mut self, name: impl Into<String>, table: Table) -> Self {
        self.insert(name, table);
        self
    }

    pub fn sheet(&self, name: &str) -> Option<&Table> {
        self.sheets.iter().find(|s| s.name == name).map(|s| &s.table)
    }

    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }

    pub fn sheets(&self) -> &[Sheet] {
        &self.sheets
    }

    pub fn len(&self) -> usize {
        self.sheets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }
}
