//! Dense row/cell storage and preallocation
//!
//! A [`SheetGrid`] holds one worksheet's rows as a dense, gap-free sequence:
//! the row at position i carries number i+1, and a preallocated cell at
//! column j of that row carries the reference `column_label(j) + (i+1)`.
//! Growth only ever appends; rows and cells are never removed, reindexed, or
//! shrunk. All mutation goes through `&mut`, so a grid has exactly one
//! writer at a time.

use crate::cell::Cell;
use crate::column::label_sequence;
use crate::error::{Error, Result};
use crate::style::StyleResolver;
use crate::value::CellType;
use crate::{MAX_CELL_TEXT_LEN, MAX_COLS, MAX_ROWS};

/// One worksheet row: its 1-based number plus position-indexed cells
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    number: u32,
    cells: Vec<Cell>,
}

impl Row {
    fn new(number: u32) -> Self {
        Self {
            number,
            cells: Vec::new(),
        }
    }

    /// The 1-based row number (always position + 1 within its grid)
    pub fn number(&self) -> u32 {
        self.number
    }

    /// The row's cells, indexed by 0-based column position
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Mutable access to the row's cells
    pub fn cells_mut(&mut self) -> &mut [Cell] {
        &mut self.cells
    }

    /// Get a cell by 0-based column index
    pub fn cell(&self, col: u16) -> Option<&Cell> {
        self.cells.get(col as usize)
    }

    /// Number of preallocated cells in this row
    pub fn width(&self) -> u16 {
        self.cells.len() as u16
    }
}

/// The dense in-memory grid for one worksheet
///
/// Owned exclusively by its [`Worksheet`](crate::Worksheet); obtained
/// through [`Workbook::grid_mut`](crate::Workbook::grid_mut). The
/// serialization stage reads the structure directly via [`SheetGrid::rows`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetGrid {
    rows: Vec<Row>,
}

impl SheetGrid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of allocated rows
    pub fn row_count(&self) -> u32 {
        self.rows.len() as u32
    }

    /// Check if no rows are allocated
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// All rows in order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Get a row by 0-based index
    pub fn row(&self, index: u32) -> Option<&Row> {
        self.rows.get(index as usize)
    }

    /// Get a mutable row by 0-based index
    pub fn row_mut(&mut self, index: u32) -> Option<&mut Row> {
        self.rows.get_mut(index as usize)
    }

    /// Iterate over all cells: (0-based row, 0-based column, cell)
    pub fn iter_cells(&self) -> impl Iterator<Item = (u32, u16, &Cell)> {
        self.rows.iter().enumerate().flat_map(|(i, row)| {
            row.cells
                .iter()
                .enumerate()
                .map(move |(j, cell)| (i as u32, j as u16, cell))
        })
    }

    /// Grow the grid so at least `rows` rows exist and every row has at
    /// least `cols` cells.
    ///
    /// New rows are appended with number = position + 1; missing trailing
    /// cells are appended with their derived reference labels. Existing
    /// cells are untouched. Idempotent: equal-or-smaller targets are a
    /// no-op, and shrink requests never error.
    ///
    /// # Examples
    /// ```
    /// use rowforge_core::SheetGrid;
    ///
    /// let mut grid = SheetGrid::new();
    /// grid.ensure_size(3, 2).unwrap();
    /// assert_eq!(grid.row(2).unwrap().cell(1).unwrap().reference(), "B3");
    /// ```
    pub fn ensure_size(&mut self, rows: u32, cols: u16) -> Result<()> {
        if rows > MAX_ROWS {
            return Err(Error::RowOutOfBounds(rows, MAX_ROWS));
        }
        if cols > MAX_COLS {
            return Err(Error::ColumnOutOfBounds(cols as u32, MAX_COLS));
        }

        let mut grew = false;

        if (self.rows.len() as u32) < rows {
            grew = true;
            self.rows.reserve(rows as usize - self.rows.len());
            while (self.rows.len() as u32) < rows {
                let number = self.rows.len() as u32 + 1;
                self.rows.push(Row::new(number));
            }
        }

        let labels = label_sequence(cols);
        for row in &mut self.rows {
            if row.cells.len() >= cols as usize {
                continue;
            }
            grew = true;
            row.cells.reserve(cols as usize - row.cells.len());
            for label in &labels[row.cells.len()..] {
                row.cells.push(Cell::at(format!("{}{}", label, row.number)));
            }
        }

        if grew {
            log::debug!(
                "grid allocated: {} rows x {} cols",
                self.rows.len(),
                self.rows.last().map(Row::width).unwrap_or(0)
            );
        }

        Ok(())
    }

    /// Set an integer value into an already-preallocated cell.
    ///
    /// Resolves the cell's style through `styles` before writing, so style
    /// and value update together from the caller's perspective.
    pub fn set_cell_int(
        &mut self,
        row: u32,
        col: u16,
        value: i64,
        styles: &mut dyn StyleResolver,
    ) -> Result<()> {
        let cell = self.cell_mut_checked(row, col)?;
        cell.set_style_index(styles.resolve(cell.style_index(), col as u32 + 1));
        cell.store(value.to_string(), CellType::Number, false);
        Ok(())
    }

    /// Set a string value into an already-preallocated cell.
    ///
    /// Input is truncated to [`MAX_CELL_TEXT_LEN`] characters (the format's
    /// per-cell text limit). If the stored text begins with a space, the
    /// cell's whitespace-preserve flag is set so serialization does not
    /// collapse it.
    pub fn set_cell_str(
        &mut self,
        row: u32,
        col: u16,
        value: &str,
        styles: &mut dyn StyleResolver,
    ) -> Result<()> {
        let mut text = value;
        if let Some((idx, _)) = text.char_indices().nth(MAX_CELL_TEXT_LEN) {
            text = &text[..idx];
        }
        let preserve = text.starts_with(' ');

        let cell = self.cell_mut_checked(row, col)?;
        cell.set_style_index(styles.resolve(cell.style_index(), col as u32 + 1));
        cell.store(text.to_owned(), CellType::String, preserve);
        Ok(())
    }

    /// Set an already-serialized value into a preallocated cell under the
    /// default numeric interpretation, without string tagging or escaping.
    pub fn set_cell_default(
        &mut self,
        row: u32,
        col: u16,
        value: &str,
        styles: &mut dyn StyleResolver,
    ) -> Result<()> {
        let cell = self.cell_mut_checked(row, col)?;
        cell.set_style_index(styles.resolve(cell.style_index(), col as u32 + 1));
        cell.store(value.to_owned(), CellType::Number, false);
        Ok(())
    }

    /// Look up a preallocated cell, failing with a typed error when the
    /// slot does not exist. Callers must preallocate first.
    pub(crate) fn cell_mut_checked(&mut self, row: u32, col: u16) -> Result<&mut Cell> {
        let allocated_rows = self.rows.len() as u32;
        let target = self
            .rows
            .get_mut(row as usize)
            .ok_or(Error::RowNotAllocated {
                row,
                allocated: allocated_rows,
            })?;

        let allocated = target.cells.len() as u16;
        target
            .cells
            .get_mut(col as usize)
            .ok_or(Error::ColumnNotAllocated { col, allocated })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::KeepStyle;
    use pretty_assertions::assert_eq;

    fn references(grid: &SheetGrid) -> Vec<Vec<&str>> {
        grid.rows()
            .iter()
            .map(|row| row.cells().iter().map(Cell::reference).collect())
            .collect()
    }

    #[test]
    fn test_ensure_size_labels() {
        let mut grid = SheetGrid::new();
        grid.ensure_size(3, 2).unwrap();

        assert_eq!(
            references(&grid),
            vec![vec!["A1", "B1"], vec!["A2", "B2"], vec!["A3", "B3"]]
        );
        assert_eq!(grid.row(0).unwrap().number(), 1);
        assert_eq!(grid.row(2).unwrap().number(), 3);
    }

    #[test]
    fn test_ensure_size_idempotent() {
        let mut grid = SheetGrid::new();
        grid.ensure_size(5, 4).unwrap();

        let before = grid.clone();
        grid.ensure_size(5, 4).unwrap();
        grid.ensure_size(3, 2).unwrap();
        grid.ensure_size(0, 0).unwrap();
        assert_eq!(grid, before);
    }

    #[test]
    fn test_ensure_size_widens_existing_rows() {
        let mut grid = SheetGrid::new();
        grid.ensure_size(2, 1).unwrap();
        grid.set_cell_int(0, 0, 99, &mut KeepStyle).unwrap();

        grid.ensure_size(3, 3).unwrap();

        // New trailing cells appended everywhere, old content untouched
        assert_eq!(
            references(&grid),
            vec![
                vec!["A1", "B1", "C1"],
                vec!["A2", "B2", "C2"],
                vec!["A3", "B3", "C3"],
            ]
        );
        assert_eq!(grid.row(0).unwrap().cell(0).unwrap().value(), "99");
        assert!(grid.row(0).unwrap().cell(1).unwrap().is_empty());
    }

    #[test]
    fn test_ensure_size_limits() {
        let mut grid = SheetGrid::new();
        assert!(matches!(
            grid.ensure_size(MAX_ROWS + 1, 1),
            Err(Error::RowOutOfBounds(_, _))
        ));
        assert!(matches!(
            grid.ensure_size(1, MAX_COLS + 1),
            Err(Error::ColumnOutOfBounds(_, _))
        ));
        assert!(grid.is_empty());
    }

    #[test]
    fn test_set_cell_int() {
        let mut grid = SheetGrid::new();
        grid.ensure_size(1, 1).unwrap();
        grid.set_cell_int(0, 0, -7, &mut KeepStyle).unwrap();

        let cell = grid.row(0).unwrap().cell(0).unwrap();
        assert_eq!(cell.value(), "-7");
        assert_eq!(cell.cell_type(), CellType::Number);
    }

    #[test]
    fn test_setters_require_preallocation() {
        let mut grid = SheetGrid::new();
        grid.ensure_size(2, 2).unwrap();

        assert!(matches!(
            grid.set_cell_int(2, 0, 1, &mut KeepStyle),
            Err(Error::RowNotAllocated { row: 2, .. })
        ));
        assert!(matches!(
            grid.set_cell_str(1, 2, "x", &mut KeepStyle),
            Err(Error::ColumnNotAllocated { col: 2, .. })
        ));
    }

    #[test]
    fn test_set_cell_str_truncates() {
        let mut grid = SheetGrid::new();
        grid.ensure_size(1, 1).unwrap();

        let long = "a".repeat(40_000);
        grid.set_cell_str(0, 0, &long, &mut KeepStyle).unwrap();
        let cell = grid.row(0).unwrap().cell(0).unwrap();
        assert_eq!(cell.value().chars().count(), MAX_CELL_TEXT_LEN);
        assert_eq!(cell.cell_type(), CellType::String);
    }

    #[test]
    fn test_set_cell_str_truncates_on_char_boundary() {
        let mut grid = SheetGrid::new();
        grid.ensure_size(1, 1).unwrap();

        let long = "é".repeat(40_000);
        grid.set_cell_str(0, 0, &long, &mut KeepStyle).unwrap();
        let cell = grid.row(0).unwrap().cell(0).unwrap();
        assert_eq!(cell.value().chars().count(), MAX_CELL_TEXT_LEN);
        assert!(cell.value().chars().all(|c| c == 'é'));
    }

    #[test]
    fn test_set_cell_str_preserve_space() {
        let mut grid = SheetGrid::new();
        grid.ensure_size(1, 2).unwrap();

        grid.set_cell_str(0, 0, " leading", &mut KeepStyle).unwrap();
        assert!(grid.row(0).unwrap().cell(0).unwrap().preserve_space());

        grid.set_cell_str(0, 1, "plain", &mut KeepStyle).unwrap();
        assert!(!grid.row(0).unwrap().cell(1).unwrap().preserve_space());

        // Overwriting clears a previously set flag
        grid.set_cell_str(0, 0, "plain", &mut KeepStyle).unwrap();
        assert!(!grid.row(0).unwrap().cell(0).unwrap().preserve_space());
    }

    #[test]
    fn test_set_cell_default() {
        let mut grid = SheetGrid::new();
        grid.ensure_size(1, 1).unwrap();
        grid.set_cell_default(0, 0, "00123", &mut KeepStyle).unwrap();

        let cell = grid.row(0).unwrap().cell(0).unwrap();
        assert_eq!(cell.value(), "00123");
        assert_eq!(cell.cell_type(), CellType::Number);
    }

    #[test]
    fn test_style_resolver_sees_one_based_column() {
        let mut grid = SheetGrid::new();
        grid.ensure_size(1, 3).unwrap();
        grid.row_mut(0).unwrap().cells_mut()[2].set_style_index(5);

        let mut calls = Vec::new();
        let mut resolver = |current: u32, column: u32| {
            calls.push((current, column));
            current + 10
        };

        grid.set_cell_int(0, 0, 1, &mut resolver).unwrap();
        grid.set_cell_str(0, 2, "x", &mut resolver).unwrap();

        assert_eq!(calls, vec![(0, 1), (5, 3)]);
        assert_eq!(grid.row(0).unwrap().cell(0).unwrap().style_index(), 10);
        assert_eq!(grid.row(0).unwrap().cell(2).unwrap().style_index(), 15);
    }

    #[test]
    fn test_iter_cells_row_major() {
        let mut grid = SheetGrid::new();
        grid.ensure_size(2, 2).unwrap();

        let coords: Vec<(u32, u16)> = grid.iter_cells().map(|(r, c, _)| (r, c)).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }
}
