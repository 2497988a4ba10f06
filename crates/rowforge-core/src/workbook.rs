//! Workbook type - the document structure owning the worksheets

use crate::error::{Error, Result};
use crate::grid::SheetGrid;
use crate::worksheet::Worksheet;
use crate::MAX_SHEET_NAME_LEN;

/// The container of named worksheets
///
/// The grid of a sheet is handed out only through [`Workbook::grid_mut`],
/// which requires exclusive access to the whole workbook for the duration
/// of the borrow.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Workbook {
    worksheets: Vec<Worksheet>,
}

impl Workbook {
    /// Create a new workbook with one worksheet named "Sheet1"
    pub fn new() -> Self {
        let mut wb = Self::empty();
        wb.add_worksheet_with_name("Sheet1")
            .expect("default sheet name is valid in an empty workbook");
        wb
    }

    /// Create a workbook with no worksheets
    pub fn empty() -> Self {
        Self {
            worksheets: Vec::new(),
        }
    }

    /// Get the number of worksheets
    pub fn sheet_count(&self) -> usize {
        self.worksheets.len()
    }

    /// Check if the workbook has no worksheets
    pub fn is_empty(&self) -> bool {
        self.worksheets.is_empty()
    }

    /// Get a worksheet by index
    pub fn worksheet(&self, index: usize) -> Option<&Worksheet> {
        self.worksheets.get(index)
    }

    /// Get a mutable worksheet by index
    pub fn worksheet_mut(&mut self, index: usize) -> Option<&mut Worksheet> {
        self.worksheets.get_mut(index)
    }

    /// Get a worksheet by name
    pub fn worksheet_by_name(&self, name: &str) -> Option<&Worksheet> {
        self.worksheets.iter().find(|ws| ws.name() == name)
    }

    /// Get a mutable worksheet by name
    pub fn worksheet_by_name_mut(&mut self, name: &str) -> Option<&mut Worksheet> {
        self.worksheets.iter_mut().find(|ws| ws.name() == name)
    }

    /// Get the index of a worksheet by name
    pub fn sheet_index(&self, name: &str) -> Option<usize> {
        self.worksheets.iter().position(|ws| ws.name() == name)
    }

    /// Iterate over all worksheets
    pub fn worksheets(&self) -> impl Iterator<Item = &Worksheet> {
        self.worksheets.iter()
    }

    /// Add a new worksheet with a generated name
    pub fn add_worksheet(&mut self) -> Result<usize> {
        let name = self.generate_sheet_name();
        self.add_worksheet_with_name(&name)
    }

    /// Add a new worksheet with the specified name
    pub fn add_worksheet_with_name(&mut self, name: &str) -> Result<usize> {
        self.validate_sheet_name(name)?;

        let index = self.worksheets.len();
        self.worksheets.push(Worksheet::new(name));
        Ok(index)
    }

    /// Exclusive access to the grid of the named sheet, creating the
    /// worksheet if it does not exist yet.
    ///
    /// This is the entry point for all bulk-fill operations: parsing or
    /// creating worksheet state happens lazily on first access.
    ///
    /// # Examples
    /// ```
    /// use rowforge_core::Workbook;
    ///
    /// let mut workbook = Workbook::empty();
    /// let grid = workbook.grid_mut("Results").unwrap();
    /// grid.ensure_size(1, 1).unwrap();
    /// assert_eq!(workbook.sheet_count(), 1);
    /// ```
    pub fn grid_mut(&mut self, sheet: &str) -> Result<&mut SheetGrid> {
        let index = match self.sheet_index(sheet) {
            Some(index) => index,
            None => self.add_worksheet_with_name(sheet)?,
        };
        Ok(self.worksheets[index].grid_mut())
    }

    /// Validate a sheet name
    fn validate_sheet_name(&self, name: &str) -> Result<()> {
        if name.is_empty() {
            return Err(Error::InvalidSheetName("Sheet name cannot be empty".into()));
        }
        if name.len() > MAX_SHEET_NAME_LEN {
            return Err(Error::InvalidSheetName(format!(
                "Sheet name too long (max {} characters)",
                MAX_SHEET_NAME_LEN
            )));
        }

        const INVALID_CHARS: &[char] = &[':', '\\', '/', '?', '*', '[', ']'];
        for c in INVALID_CHARS {
            if name.contains(*c) {
                return Err(Error::InvalidSheetName(format!(
                    "Sheet name cannot contain '{}'",
                    c
                )));
            }
        }

        // Duplicate check is case-insensitive
        let name_lower = name.to_lowercase();
        if self
            .worksheets
            .iter()
            .any(|ws| ws.name().to_lowercase() == name_lower)
        {
            return Err(Error::DuplicateSheetName(name.into()));
        }

        Ok(())
    }

    /// Generate a unique sheet name
    fn generate_sheet_name(&self) -> String {
        let mut n = self.worksheets.len() + 1;
        loop {
            let name = format!("Sheet{}", n);
            if self.validate_sheet_name(&name).is_ok() {
                return name;
            }
            n += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_workbook() {
        let wb = Workbook::new();
        assert_eq!(wb.sheet_count(), 1);
        assert_eq!(wb.worksheet(0).unwrap().name(), "Sheet1");
    }

    #[test]
    fn test_grid_mut_creates_sheet_lazily() {
        let mut wb = Workbook::empty();
        assert!(wb.worksheet_by_name("Data").is_none());

        wb.grid_mut("Data").unwrap().ensure_size(1, 1).unwrap();
        assert_eq!(wb.sheet_count(), 1);
        assert_eq!(wb.worksheet_by_name("Data").unwrap().grid().row_count(), 1);

        // A second access reuses the existing sheet
        wb.grid_mut("Data").unwrap().ensure_size(2, 1).unwrap();
        assert_eq!(wb.sheet_count(), 1);
        assert_eq!(wb.worksheet_by_name("Data").unwrap().grid().row_count(), 2);
    }

    #[test]
    fn test_grid_mut_rejects_invalid_names() {
        let mut wb = Workbook::empty();
        assert!(wb.grid_mut("bad/name").is_err());
        assert!(wb.is_empty());
    }

    #[test]
    fn test_duplicate_name() {
        let mut wb = Workbook::new();
        assert!(wb.add_worksheet_with_name("SHEET1").is_err());
        assert!(wb.add_worksheet_with_name("sheet1").is_err());
    }

    #[test]
    fn test_invalid_sheet_name() {
        let mut wb = Workbook::new();

        assert!(wb.add_worksheet_with_name("").is_err());
        assert!(wb.add_worksheet_with_name("Sheet:1").is_err());
        assert!(wb.add_worksheet_with_name("Sheet[1]").is_err());

        let long_name = "A".repeat(MAX_SHEET_NAME_LEN + 1);
        assert!(wb.add_worksheet_with_name(&long_name).is_err());
    }

    #[test]
    fn test_generated_names() {
        let mut wb = Workbook::new();
        let idx = wb.add_worksheet().unwrap();
        assert_eq!(wb.worksheet(idx).unwrap().name(), "Sheet2");
    }
}
