//! Error types for rowforge-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in rowforge-core
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed column letters or cell address
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Row number or target row count past the worksheet limit
    #[error("Row {0} out of bounds (max: {1})")]
    RowOutOfBounds(u32, u32),

    /// Column index or target column count past the worksheet limit
    #[error("Column {0} out of bounds (max: {1})")]
    ColumnOutOfBounds(u32, u16),

    /// Direct cell write into a row that was never preallocated
    #[error("Row index {row} is not preallocated (allocated rows: {allocated})")]
    RowNotAllocated { row: u32, allocated: u32 },

    /// Direct cell write past the preallocated width of a row
    #[error("Column index {col} is not preallocated (allocated cells: {allocated})")]
    ColumnNotAllocated { col: u16, allocated: u16 },

    /// More values handed to a row builder than its fixed width
    #[error("{given} values exceed the builder width of {columns} columns")]
    TooManyValues { given: usize, columns: u16 },

    /// More style indices handed to a row builder than its fixed width
    #[error("{given} styles exceed the builder width of {columns} columns")]
    TooManyStyles { given: usize, columns: u16 },

    /// Row numbers are 1-based; a builder cannot start before row 1
    #[error("Invalid start row {0}: row numbers begin at 1")]
    InvalidStartRow(u32),

    /// Invalid sheet name
    #[error("Invalid sheet name: {0}")]
    InvalidSheetName(String),

    /// Duplicate sheet name
    #[error("Sheet name already exists: {0}")]
    DuplicateSheetName(String),
}
