use calamine::{open_workbook_auto, Data, Range, Reader};
use std::path::Path;
use tracing::{debug, info};

use crate::error::LoadError;
use crate::workbook::{CellValue, Table, Workbook};

/// Read every sheet of the workbook at `path` into memory.
///
/// The file format is picked from the extension (xlsx, xlsm, xlsb, xls, ods).
pub fn load(path: impl AsRef<Path>) -> Result<Workbook, LoadError> {
    let path = path.as_ref();
    match path.try_exists() {
        Ok(true) => {}
        Ok(false) => return Err(LoadError::NotFound(path.to_path_buf())),
        Err(source) => {
            return Err(LoadError::Access {
                path: path.to_path_buf(),
                source,
            })
        }
    }

    info!("Opening workbook: {}", path.display());
    let mut source = open_workbook_auto(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let mut workbook = Workbook::new();
    for sheet_name in source.sheet_names() {
        let range = source
            .worksheet_range(&sheet_name)
            .map_err(|source| LoadError::Sheet {
                path: path.to_path_buf(),
                sheet: sheet_name.clone(),
                source,
            })?;

        let table = table_from_range(&range);
        debug!(
            "Loaded sheet '{}' with dimensions {:?}",
            sheet_name,
            table.shape()
        );
        workbook.insert(sheet_name, table);
    }

    info!(
        "Loaded {} sheet(s) from {}",
        workbook.len(),
        path.display()
    );
    Ok(workbook)
}

/// Materialize a calamine range anchored at A1.
///
/// calamine trims leading blank rows and columns from a range; they are put
/// back here so a sheet starting at B2 does not look like one starting at A1.
pub fn table_from_range(range: &Range<Data>) -> Table {
    let Some((end_row, end_col)) = range.end() else {
        return Table::default();
    };

    let rows = (0..=end_row)
        .map(|row| {
            (0..=end_col)
                .map(|col| {
                    range
                        .get_value((row, col))
                        .map(decode_cell)
                        .unwrap_or(CellValue::Empty)
                })
                .collect()
        })
        .collect();

    Table::from_rows(rows)
}

/// Convert one calamine cell into a [`CellValue`].
///
/// Integers and floats share one numeric kind. Error cells keep their display
/// text (`#DIV/0!`, `#N/A`, ...) so they can be normalized like plain text.
pub fn decode_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => dt
            .as_datetime()
            .map(CellValue::DateTime)
            .unwrap_or(CellValue::Number(dt.as_f64())),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}
