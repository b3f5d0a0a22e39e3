//! Column widths and fixed-width field layout.
//!
//! Widths are measured in characters: each column is one character wider than
//! the longest trimmed value it holds, so adjacent values never touch. The
//! layout assigns every column a 1-based start offset by accumulating widths.

use std::ops::Index;

use crate::sheet::Worksheet;

/// Character width of every column, in source column order.
///
/// Every entry is at least 1; a column whose cells are all empty still takes
/// one character.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnWidths(Vec<usize>);

impl ColumnWidths {
    /// Compute widths for every column of a worksheet's used range.
    pub fn from_worksheet(sheet: &Worksheet) -> Self {
        let widths = (0..sheet.column_count())
            .map(|col| {
                let max_len = (0..sheet.row_count())
                    .map(|row| text_width(sheet.cell_text(row, col)))
                    .max()
                    .unwrap_or(0);
                max_len + 1
            })
            .collect();
        ColumnWidths(widths)
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no columns.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Widths as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    /// Iterate widths in column order.
    pub fn iter(&self) -> std::slice::Iter<'_, usize> {
        self.0.iter()
    }

    /// Length of one fixed-width line, excluding the line terminator.
    pub fn record_length(&self) -> usize {
        self.0.iter().sum()
    }
}

impl From<Vec<usize>> for ColumnWidths {
    fn from(widths: Vec<usize>) -> Self {
        ColumnWidths(widths)
    }
}

impl Index<usize> for ColumnWidths {
    type Output = usize;

    fn index(&self, col: usize) -> &usize {
        &self.0[col]
    }
}

impl<'a> IntoIterator for &'a ColumnWidths {
    type Item = &'a usize;
    type IntoIter = std::slice::Iter<'a, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Width of a piece of text in characters.
///
/// Counts Unicode scalar values, not UTF-16 code units, so a character
/// outside the Basic Multilingual Plane counts once. This is the same unit
/// `format!("{:<width$}")` pads by, which keeps every record exactly
/// `record_length()` characters long.
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

/// Position of one column in the fixed-width record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutEntry {
    /// Trimmed header text from the first row
    pub header: String,
    /// 1-based character offset where the field starts
    pub start: usize,
    /// Field length in characters
    pub length: usize,
}

/// Field layout of a fixed-width record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    pub entries: Vec<LayoutEntry>,
}

impl Layout {
    /// Pair each column width with its header and assign start offsets.
    ///
    /// Offsets start at 1 and each one is the previous offset plus the
    /// previous width. Headers missing from `headers` become empty text.
    pub fn new<S: AsRef<str>>(headers: &[S], widths: &ColumnWidths) -> Self {
        let mut start = 1;
        let entries = widths
            .iter()
            .enumerate()
            .map(|(col, &length)| {
                let header = headers
                    .get(col)
                    .map(|h| h.as_ref().trim().to_string())
                    .unwrap_or_default();
                let entry = LayoutEntry {
                    header,
                    start,
                    length,
                };
                start += length;
                entry
            })
            .collect();
        Layout { entries }
    }

    /// Build the layout from the first row of a worksheet.
    pub fn from_header_row(sheet: &Worksheet, widths: &ColumnWidths) -> Self {
        let headers: Vec<&str> = (0..widths.len()).map(|col| sheet.cell_text(0, col)).collect();
        Self::new(&headers, widths)
    }
}
