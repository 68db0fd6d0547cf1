use std::path::PathBuf;

use crate::config::ConfigError;
use crate::differ::CellMismatch;

/// Failure to turn a path into a [`Workbook`](crate::workbook::Workbook).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to access {}: {source}", .path.display())]
    Access {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to open workbook {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Failed to read sheet '{sheet}' from {}: {source}", .path.display())]
    Sheet {
        path: PathBuf,
        sheet: String,
        #[source]
        source: calamine::Error,
    },
}

/// A reason two workbooks are not identical.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Mismatch {
    #[error("Mismatch in sheet names")]
    SheetNames {
        only_in_left: Vec<String>,
        only_in_right: Vec<String>,
    },

    #[error(
        "Sheet '{sheet}' has different dimensions: {} vs {}",
        dims(.left),
        dims(.right)
    )]
    Shape {
        sheet: String,
        left: (usize, usize),
        right: (usize, usize),
    },

    #[error("Difference found in sheet: {sheet}")]
    Values {
        sheet: String,
        cells: Vec<CellMismatch>,
    },
}

fn dims(shape: &(usize, usize)) -> String {
    format!("{}x{}", shape.0, shape.1)
}

impl Mismatch {
    /// Sheet the mismatch belongs to, if it is tied to one.
    pub fn sheet(&self) -> Option<&str> {
        match self {
            Mismatch::SheetNames { .. } => None,
            Mismatch::Shape { sheet, .. } | Mismatch::Values { sheet, .. } => Some(sheet),
        }
    }
}

/// Errors that stop a run before a verdict is reached.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    #[error("{0}")]
    Usage(String),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
