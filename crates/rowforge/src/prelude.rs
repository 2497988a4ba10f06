//! Prelude module - common imports for rowforge users
//!
//! ```rust
//! use rowforge::prelude::*;
//! ```

pub use crate::{
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

    // Builder
    RowBuilder,

    // Main types
    Workbook,
    Worksheet,
};
