//! Sequential bulk row writer

use rowforge_core::{Error, Result, ScalarValue, SheetGrid, Workbook, MAX_COLS};

/// Cursor-based writer that appends full-width rows to a grid
///
/// The builder holds the grid's exclusive borrow for its whole lifetime, so
/// nothing else can interleave writes. Rows are populated gap-free and in
/// order starting at `start_row`; the cursor advances only after a row has
/// been fully written.
///
/// # Example
///
/// ```rust
/// use rowforge::{RowBuilder, Workbook};
///
/// let mut workbook = Workbook::new();
/// let mut builder = RowBuilder::for_sheet(&mut workbook, "Sheet1", 1, 3).unwrap();
///
/// builder.add_row(&[1.into(), "x".into(), true.into()], &[0, 0, 0]).unwrap();
/// assert_eq!(builder.next_row(), 2);
/// ```
#[derive(Debug)]
pub struct RowBuilder<'a> {
    grid: &'a mut SheetGrid,
    num_columns: u16,
    start_row: u32,
    next_row: u32,
}

impl<'a> RowBuilder<'a> {
    /// Create a writer appending `num_columns`-wide rows to `grid`,
    /// starting at the 1-based `start_row`.
    pub fn new(grid: &'a mut SheetGrid, start_row: u32, num_columns: u16) -> Result<Self> {
        if start_row == 0 {
            return Err(Error::InvalidStartRow(start_row));
        }
        if num_columns > MAX_COLS {
            return Err(Error::ColumnOutOfBounds(num_columns as u32, MAX_COLS));
        }

        Ok(Self {
            grid,
            num_columns,
            start_row,
            next_row: start_row,
        })
    }

    /// Like [`RowBuilder::new`], resolving the grid through the workbook's
    /// lazy worksheet accessor.
    pub fn for_sheet(
        workbook: &'a mut Workbook,
        sheet: &str,
        start_row: u32,
        num_columns: u16,
    ) -> Result<Self> {
        let grid = workbook.grid_mut(sheet)?;
        Self::new(grid, start_row, num_columns)
    }

    /// The fixed row width this builder was created with
    pub fn num_columns(&self) -> u16 {
        self.num_columns
    }

    /// The 1-based row number the first `add_row` call targeted
    pub fn start_row(&self) -> u32 {
        self.start_row
    }

    /// The 1-based row number the next `add_row` call will fill
    pub fn next_row(&self) -> u32 {
        self.next_row
    }

    /// Number of rows written so far
    pub fn rows_written(&self) -> u32 {
        self.next_row - self.start_row
    }

    /// Append one row: apply the style indices, then the converted values.
    ///
    /// The target row is preallocated to the builder width first; this
    /// widens every row of the grid, not just the target. `styles` entries
    /// are opaque indices resolved by the document model beforehand.
    ///
    /// Fails fast without touching the grid when `values` or `styles`
    /// exceed the builder width. The cursor advances only on success.
    pub fn add_row(&mut self, values: &[ScalarValue], styles: &[u32]) -> Result<()> {
        if values.len() > self.num_columns as usize {
            return Err(Error::TooManyValues {
                given: values.len(),
                columns: self.num_columns,
            });
        }
        if styles.len() > self.num_columns as usize {
            return Err(Error::TooManyStyles {
                given: styles.len(),
                columns: self.num_columns,
            });
        }

        self.grid.ensure_size(self.next_row, self.num_columns)?;

        let allocated = self.grid.row_count();
        let row = self
            .grid
            .row_mut(self.next_row - 1)
            .ok_or(Error::RowNotAllocated {
                row: self.next_row - 1,
                allocated,
            })?;

        for (cell, &style) in row.cells_mut().iter_mut().zip(styles) {
            cell.set_style_index(style);
        }
        for (cell, value) in row.cells_mut().iter_mut().zip(values) {
            cell.set_scalar(value);
        }

        self.next_row += 1;
        Ok(())
    }
}
