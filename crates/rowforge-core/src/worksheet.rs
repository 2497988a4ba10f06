//! Worksheet type

use std::collections::BTreeMap;

use crate::column::letters_to_column;
use crate::error::Result;
use crate::grid::SheetGrid;
use crate::style::StyleResolver;
use crate::value::ScalarValue;

/// A single named sheet owning one grid
///
/// The grid is reachable only through `&self`/`&mut self` accessors, so a
/// worksheet has at most one writer at a time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Worksheet {
    name: String,
    grid: SheetGrid,
}

impl Worksheet {
    /// Create a new worksheet with the given name and an empty grid
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            grid: SheetGrid::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// Read access to the sheet's grid
    pub fn grid(&self) -> &SheetGrid {
        &self.grid
    }

    /// Exclusive write access to the sheet's grid
    pub fn grid_mut(&mut self) -> &mut SheetGrid {
        &mut self.grid
    }

    /// Check if the sheet has no allocated rows
    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    /// Append one row at the current end of the sheet from column-label
    /// keyed values.
    ///
    /// Every label is resolved before the grid is touched, so an invalid
    /// address leaves the sheet unchanged. The grid is grown to cover the
    /// widest target column, each value is converted and written with its
    /// style resolved through `styles`, and the 1-based number of the new
    /// row is returned. A row is appended even when `values` is empty.
    pub fn append_row_values<R: StyleResolver>(
        &mut self,
        values: &BTreeMap<String, ScalarValue>,
        styles: &mut R,
    ) -> Result<u32> {
        let mut targets = Vec::with_capacity(values.len());
        let mut width = 0u16;
        for (label, value) in values {
            let col = letters_to_column(label)?;
            width = width.max(col + 1);
            targets.push((col, value));
        }

        let row_number = self.grid.row_count() + 1;
        self.grid.ensure_size(row_number, width)?;

        for (col, value) in targets {
            let cell = self.grid.cell_mut_checked(row_number - 1, col)?;
            cell.set_style_index(styles.resolve(cell.style_index(), col as u32 + 1));
            cell.set_scalar(value);
        }

        Ok(row_number)
    }
}
