//! Cell record

use crate::value::{CellType, ScalarValue};

/// A single grid slot
///
/// The reference label (e.g. `"B3"`) is derived from the cell's position at
/// preallocation time and is not independently settable. The value is always
/// held in its serialized string form; the type tag tells the serializer how
/// to interpret it. The style index refers to an externally-interned style
/// record.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    reference: String,
    cell_type: CellType,
    value: String,
    style_index: u32,
    preserve_space: bool,
}

impl Cell {
    /// Create an empty placeholder cell for the given reference label.
    pub(crate) fn at(reference: String) -> Self {
        Self {
            reference,
            cell_type: CellType::Empty,
            value: String::new(),
            style_index: 0,
            preserve_space: false,
        }
    }

    /// The cell's address label, e.g. `"B3"`
    pub fn reference(&self) -> &str {
        &self.reference
    }

    /// How the serialized value should be interpreted
    pub fn cell_type(&self) -> CellType {
        self.cell_type
    }

    /// The serialized value text
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Index into the externally-owned style table (0 = default)
    pub fn style_index(&self) -> u32 {
        self.style_index
    }

    /// Whether downstream serialization must keep leading whitespace
    pub fn preserve_space(&self) -> bool {
        self.preserve_space
    }

    /// Check if the cell has never been written
    pub fn is_empty(&self) -> bool {
        self.cell_type == CellType::Empty && self.value.is_empty()
    }

    /// Overwrite the style index; resolving a style record to an index is
    /// the document model's concern.
    pub fn set_style_index(&mut self, style_index: u32) {
        self.style_index = style_index;
    }

    /// Convert and store a scalar, replacing any previous payload.
    pub fn set_scalar(&mut self, value: &ScalarValue) {
        let (value, cell_type) = value.convert();
        self.store(value, cell_type, false);
    }

    /// Store an already-serialized payload.
    pub(crate) fn store(&mut self, value: String, cell_type: CellType, preserve_space: bool) {
        self.value = value;
        self.cell_type = cell_type;
        self.preserve_space = preserve_space;
    }
}
