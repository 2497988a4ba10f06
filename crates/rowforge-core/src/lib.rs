//! # rowforge-core
//!
//! Core data structures for the rowforge bulk-fill engine: the in-memory
//! grid that backs bulk population of a spreadsheet worksheet before it is
//! serialized to a file format.
//!
//! This crate provides:
//! - [`column_label`] / [`label_sequence`] - column address computation
//! - [`ScalarValue`] and [`CellType`] - the typed value taxonomy and its
//!   serialized `(text, type tag)` form
//! - [`SheetGrid`], [`Row`], [`Cell`] - the dense row/cell store, its
//!   preallocation contract, and bounds-checked direct cell setters
//! - [`StyleResolver`] - the seam to the externally-owned style table
//! - [`Workbook`], [`Worksheet`] - the minimal document model that owns
//!   the grids
//!
//! File encoding, style interning, and formula evaluation are external
//! collaborators; the serialization stage reads the grid structure
//! directly.
//!
//! ## Example
//!
//! ```rust
//! use rowforge_core::{KeepStyle, Workbook};
//!
//! let mut workbook = Workbook::new();
//! let grid = workbook.grid_mut("Sheet1").unwrap();
//!
//! grid.ensure_size(2, 2).unwrap();
//! grid.set_cell_int(0, 0, 42, &mut KeepStyle).unwrap();
//! grid.set_cell_str(0, 1, "answer", &mut KeepStyle).unwrap();
//!
//! assert_eq!(grid.row(0).unwrap().cell(0).unwrap().reference(), "A1");
//! assert_eq!(grid.row(0).unwrap().cell(0).unwrap().value(), "42");
//! ```

pub mod cell;
pub mod column;
pub mod error;
pub mod grid;
pub mod style;
pub mod value;
pub mod workbook;
pub mod worksheet;

// Re-exports for convenience
pub use cell::Cell;
pub use column::{column_label, label_sequence, letters_to_column};
pub use error::{Error, Result};
pub use grid::{Row, SheetGrid};
pub use style::{KeepStyle, StyleResolver};
pub use value::{CellType, ScalarValue};
pub use workbook::Workbook;
pub use worksheet::Worksheet;

/// Maximum number of rows in a worksheet (format limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (format limit)
pub const MAX_COLS: u16 = 16_384;

/// Maximum number of characters a cell can hold (format limit)
pub const MAX_CELL_TEXT_LEN: usize = 32_767;

/// Maximum length of a sheet name
pub const MAX_SHEET_NAME_LEN: usize = 31;
