use std::collections::HashSet;

use crate::error::Mismatch;
use crate::workbook::Workbook;

/// Result of comparing the sheet names of two workbooks as sets.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SheetSetCheck {
    pub only_in_left: Vec<String>,
    pub only_in_right: Vec<String>,
    /// Same names on both sides, listed in a different order.
    pub order_differs: bool,
}

impl SheetSetCheck {
    pub fn is_match(&self) -> bool {
        self.only_in_left.is_empty() && self.only_in_right.is_empty()
    }

    pub fn into_mismatch(self) -> Option<Mismatch> {
        if self.is_match() {
            None
        } else {
            Some(Mismatch::SheetNames {
                only_in_left: self.only_in_left,
                only_in_right: self.only_in_right,
            })
        }
    }
}

/// Compare sheet names ignoring order. Missing names are listed in the order
/// their own workbook lists them.
pub fn check_sheet_sets(left: &Workbook, right: &Workbook) -> SheetSetCheck {
    let left_names = left.sheet_names();
    let right_names = right.sheet_names();

    let left_set: HashSet<&str> = left_names.iter().copied().collect();
    let right_set: HashSet<&str> = right_names.iter().copied().collect();

    let only_in_left: Vec<String> = left_names
        .iter()
        .filter(|name| !right_set.contains(*name))
        .map(|name| name.to_string())
        .collect();
    let only_in_right: Vec<String> = right_names
        .iter()
        .filter(|name| !left_set.contains(*name))
        .map(|name| name.to_string())
        .collect();

    let order_differs =
        only_in_left.is_empty() && only_in_right.is_empty() && left_names != right_names;

    SheetSetCheck {
        only_in_left,
        only_in_right,
        order_differs,
    }
}
