//! Human-readable rendering of a [`DiffReport`]
use std::io::{self, Write};

use crate::config::ReportMode;
use crate::differ::{CellMismatch, DiffReport};
use crate::error::Mismatch;

pub const IDENTICAL_MESSAGE: &str = "Excel files are identical";

/// Labels for the two inputs, usually their paths as given on the command line.
#[derive(Debug, Clone, Copy)]
pub struct Labels<'a> {
    pub left: &'a str,
    pub right: &'a str,
}

pub fn write_text_report<W: Write>(
    w: &mut W,
    report: &DiffReport,
    labels: Labels<'_>,
) -> io::Result<()> {
    if report.order_differs {
        writeln!(
            w,
            "note: sheets appear in a different order ({} vs {})",
            report.left_sheets.join(", "),
            report.right_sheets.join(", ")
        )?;
    }

    for mismatch in &report.mismatches {
        write_mismatch(w, mismatch, labels)?;
    }

    if report.is_identical() {
        writeln!(w, "{IDENTICAL_MESSAGE}")?;
    } else if report.mode == ReportMode::Exhaustive && report.sheets_compared > 0 {
        writeln!(
            w,
            "{} of {} sheets differ",
            report.sheets_differing(),
            report.sheets_compared
        )?;
    }

    Ok(())
}

fn write_mismatch<W: Write>(w: &mut W, mismatch: &Mismatch, labels: Labels<'_>) -> io::Result<()> {
    writeln!(w, "{mismatch}")?;

    match mismatch {
        Mismatch::SheetNames {
            only_in_left,
            only_in_right,
        } => {
            if !only_in_left.is_empty() {
                writeln!(w, "  only in {}: {}", labels.left, only_in_left.join(", "))?;
            }
            if !only_in_right.is_empty() {
                writeln!(w, "  only in {}: {}", labels.right, only_in_right.join(", "))?;
            }
        }
        Mismatch::Shape { .. } => {}
        Mismatch::Values { sheet, cells } => {
            for cell in cells {
                writeln!(w, "{}", cell_line(sheet, cell))?;
            }
        }
    }

    Ok(())
}

/// `sheet '<name>' at cell (row=<r>, col=<c>): '<v1>' vs '<v2>'`
pub fn cell_line(sheet: &str, cell: &CellMismatch) -> String {
    format!(
        "sheet '{}' at cell (row={}, col={}): '{}' vs '{}'",
        sheet, cell.row, cell.col, cell.left, cell.right
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::differ::WorkbookDiffer;
    use crate::workbook::{CellValue, Table, Workbook};
    use crate::DiffConfig;

    const LABELS: Labels<'static> = Labels {
        left: "a.xlsx",
        right: "b.xlsx",
    };

    fn render(report: &DiffReport) -> String {
        let mut out = Vec::new();
        write_text_report(&mut out, report, LABELS).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn sheet1(rows: Vec<Vec<CellValue>>) -> Workbook {
        Workbook::new().with_sheet("Sheet1", Table::from_rows(rows))
    }

    #[test]
    fn test_identical_message() {
        let wb = sheet1(vec![vec![CellValue::text("a")]]);
        let report = WorkbookDiffer::default().compare(&wb, &wb);
        assert_eq!(render(&report), "Excel files are identical\n");
    }

    #[test]
    fn test_value_mismatch_lines() {
        let a = sheet1(vec![
            vec![CellValue::text("a"), CellValue::Number(1.0)],
            vec![CellValue::text("b"), CellValue::Number(2.0)],
        ]);
        let b = sheet1(vec![
            vec![CellValue::text("a"), CellValue::Number(1.0)],
            vec![CellValue::text("b"), CellValue::Number(3.0)],
        ]);

        let output = render(&WorkbookDiffer::default().compare(&a, &b));
        assert_eq!(
            output,
            "Difference found in sheet: Sheet1\n\
             sheet 'Sheet1' at cell (row=2, col=2): '2' vs '3'\n"
        );
    }

    #[test]
    fn test_sheet_name_mismatch_lists_each_side() {
        let a = sheet1(vec![]).with_sheet("Old", Table::default());
        let b = sheet1(vec![]).with_sheet("New", Table::default());

        let output = render(&WorkbookDiffer::default().compare(&a, &b));
        assert_eq!(
            output,
            "Mismatch in sheet names\n  only in a.xlsx: Old\n  only in b.xlsx: New\n"
        );
    }

    #[test]
    fn test_shape_message() {
        let a = sheet1(vec![vec![CellValue::Number(1.0)]]);
        let b = sheet1(vec![
            vec![CellValue::Number(1.0), CellValue::Empty],
            vec![CellValue::Empty, CellValue::Number(2.0)],
        ]);

        let output = render(&WorkbookDiffer::default().compare(&a, &b));
        assert_eq!(
            output,
            "Sheet 'Sheet1' has different dimensions: 1x1 vs 2x2\n"
        );
    }

    #[test]
    fn test_order_note_and_exhaustive_summary() {
        let a = Workbook::new()
            .with_sheet("A", Table::from_rows(vec![vec![CellValue::Bool(true)]]))
            .with_sheet("B", Table::default());
        let b = Workbook::new()
            .with_sheet("B", Table::default())
            .with_sheet("A", Table::from_rows(vec![vec![CellValue::Bool(false)]]));

        let differ = WorkbookDiffer::new(DiffConfig::default().exhaustive());
        let output = render(&differ.compare(&a, &b));

        assert!(output.starts_with("note: sheets appear in a different order (A, B vs B, A)\n"));
        assert!(output.contains("sheet 'A' at cell (row=1, col=1): 'TRUE' vs 'FALSE'\n"));
        assert!(output.ends_with("1 of 2 sheets differ\n"));
    }
}
