pub mod config;
pub mod differ;
pub mod error;
pub mod loader;
pub mod normalize;
pub mod report;
pub mod workbook;

pub use config::{DiffConfig, ReportMode};
pub use differ::{DiffReport, Verdict, WorkbookDiffer};
pub use error::{DiffError, LoadError, Mismatch};
pub use workbook::{CellValue, Table, Workbook};
