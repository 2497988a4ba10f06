//! # rowforge
//!
//! Bulk population engine for spreadsheet worksheets.
//!
//! Rowforge fills the in-memory grid of a worksheet at high throughput
//! before it is handed to a serializer: preallocate the grid once, then
//! append converted, style-tagged rows sequentially without per-cell
//! reallocation.
//!
//! - [`RowBuilder`] - sequential cursor-based row writer
//! - [`SheetGrid::ensure_size`] - dense preallocation of rows and cells
//! - [`ScalarValue`] - the typed value taxonomy and its serialized form
//! - Direct cell setters for single-slot updates on a preallocated grid
//!
//! ## Example
//!
//! ```rust
//! use rowforge::prelude::*;
//!
//! let mut workbook = Workbook::new();
//! let mut builder = RowBuilder::for_sheet(&mut workbook, "Sheet1", 1, 3).unwrap();
//!
//! builder.add_row(&["name".into(), "count".into(), "ok".into()], &[0, 0, 0]).unwrap();
//! builder.add_row(&["widget".into(), 12.into(), true.into()], &[0, 0, 0]).unwrap();
//!
//! let sheet = workbook.worksheet(0).unwrap();
//! assert_eq!(sheet.grid().row(1).unwrap().cell(1).unwrap().value(), "12");
//! ```

pub mod builder;
pub mod prelude;

pub use builder::RowBuilder;

// Re-export core types
pub use rowforge_core::{
    column_label,
    label_sequence,
    letters_to_column,

    // Cell types
    Cell,
    CellType,
    ScalarValue,

    // Error types
    Error,
    Result,

    // Grid types
    Row,
    SheetGrid,

    // Style seam
    KeepStyle,
    StyleResolver,

    // Main types
    Workbook,
    Worksheet,

    // Constants
    MAX_CELL_TEXT_LEN,
    MAX_COLS,
    MAX_ROWS,
    MAX_SHEET_NAME_LEN,
};
