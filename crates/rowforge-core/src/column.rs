//! Column address computation
//!
//! Spreadsheet columns are numbered in a bijective base-26 alphabetic system
//! with no zero digit: A..Z, then AA..AZ, BA.. and so on. One implementation
//! serves every caller; bulk growth precomputes a label run with
//! [`label_sequence`] instead of re-deriving the label per cell.

use crate::error::{Error, Result};
use crate::MAX_COLS;

/// Convert a column index to its alphabetic label (0 = "A", 25 = "Z", 26 = "AA").
///
/// # Examples
/// ```
/// use rowforge_core::column_label;
///
/// assert_eq!(column_label(0), "A");
/// assert_eq!(column_label(26), "AA");
/// assert_eq!(column_label(16383), "XFD");
/// ```
pub fn column_label(col: u16) -> String {
    let mut label = String::new();
    let mut n = col as u32 + 1; // 1-based for the bijective numeral calculation

    while n > 0 {
        n -= 1;
        let c = ((n % 26) as u8 + b'A') as char;
        label.insert(0, c);
        n /= 26;
    }

    label
}

/// Build the labels for columns `0..n` in order.
///
/// Postcondition: `label_sequence(n)[j] == column_label(j)` for all `j < n`.
pub fn label_sequence(n: u16) -> Vec<String> {
    (0..n).map(column_label).collect()
}

/// Convert alphabetic column letters back to the index ("A" = 0, "AA" = 26).
///
/// Case-insensitive. Rejects empty or non-alphabetic input and labels past
/// the worksheet column limit.
pub fn letters_to_column(letters: &str) -> Result<u16> {
    if letters.is_empty() {
        return Err(Error::InvalidAddress("empty column letters".into()));
    }

    let mut col: u32 = 0;
    for c in letters.chars() {
        if !c.is_ascii_alphabetic() {
            return Err(Error::InvalidAddress(format!(
                "invalid column letter '{}'",
                c
            )));
        }
        col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
        if col > MAX_COLS as u32 {
            return Err(Error::ColumnOutOfBounds(col - 1, MAX_COLS - 1));
        }
    }

    Ok((col - 1) as u16)
}
