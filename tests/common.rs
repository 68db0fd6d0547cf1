// Shared fixtures for the integration tests
//
// Workbooks are written with rust_xlsxwriter into a temp directory that is
// removed when the returned TempDir is dropped.

#![allow(dead_code)]

use rust_xlsxwriter::{Format, Workbook};
use chrono::NaiveDateTime;
use sheet_diff::CellValue;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir")
}

pub fn s(value: &str) -> CellValue {
    CellValue::text(value)
}

pub fn n(value: f64) -> CellValue {
    CellValue::Number(value)
}

/// Write a workbook with the given sheets, starting each sheet at `origin`
/// (0-based row, col).
pub fn write_xlsx_at(
    path: &Path,
    sheets: &[(&str, Vec<Vec<CellValue>>)],
    origin: (u32, u16),
) {
    let mut workbook = Workbook::new();
    let datetime_format = Format::new().set_num_format("yyyy-mm-dd hh:mm:ss");

    for (name, rows) in sheets {
        let sheet = workbook.add_worksheet();
        sheet.set_name(*name).unwrap();

        for (row_idx, row) in rows.iter().enumerate() {
            let excel_row = origin.0 + row_idx as u32;
            for (col_idx, value) in row.iter().enumerate() {
                let excel_col = origin.1 + col_idx as u16;
                match value {
                    CellValue::Text(text) => {
                        sheet.write_string(excel_row, excel_col, text.as_str()).unwrap();
                    }
                    CellValue::Number(number) => {
                        sheet.write_number(excel_row, excel_col, *number).unwrap();
                    }
                    CellValue::Bool(flag) => {
                        sheet.write_boolean(excel_row, excel_col, *flag).unwrap();
                    }
                    CellValue::DateTime(datetime) => {
                        sheet
                            .write_datetime_with_format(
                                excel_row,
                                excel_col,
                                datetime,
                                &datetime_format,
                            )
                            .unwrap();
                    }
                    CellValue::Empty => {}
                }
            }
        }
    }

    workbook.save(path).unwrap();
}

pub fn dt(value: &str) -> CellValue {
    CellValue::DateTime(
        NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").expect("Invalid fixture date"),
    )
}

pub fn write_xlsx(path: &Path, sheets: &[(&str, Vec<Vec<CellValue>>)]) {
    write_xlsx_at(path, sheets, (0, 0));
}

/// Write a workbook named `file_name` inside `dir` and return its path.
pub fn fixture(dir: &TempDir, file_name: &str, sheets: &[(&str, Vec<Vec<CellValue>>)]) -> PathBuf {
    let path = dir.path().join(file_name);
    write_xlsx(&path, sheets);
    path
}
