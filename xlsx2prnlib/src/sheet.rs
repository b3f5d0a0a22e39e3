//! Worksheet loading.
//!
//! Opens a workbook with calamine and materializes its first worksheet as a
//! grid of display text, anchored at A1 and sized by the used range. Everything downstream works on
//! that grid and never touches calamine types.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use tracing::debug;

use crate::display::display_text;
use crate::error::PrnError;
use crate::Result;

/// Read-only grid of cell display text for a worksheet.
///
/// Row and column indices are 0-based and absolute, so `(0, 0)` is always A1.
/// The grid has as many rows and columns as the used range, even when the
/// used range starts further down or to the right. Cells outside a short row
/// read as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Worksheet {
    /// Sheet name as stored in the workbook
    pub name: String,
    rows: Vec<Vec<String>>,
    column_count: usize,
}

impl Worksheet {
    /// Build a worksheet from rows of display text.
    ///
    /// The column count is the length of the longest row.
    pub fn from_rows(name: impl Into<String>, rows: Vec<Vec<String>>) -> Self {
        let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self {
            name: name.into(),
            rows,
            column_count,
        }
    }

    /// Read `height x width` cells starting at A1, where the dimensions come
    /// from the used range. Cells outside the used range are empty.
    fn from_range(name: String, range: &Range<Data>) -> Self {
        let (height, width) = range.get_size();
        let rows = (0..height)
            .map(|row| {
                (0..width)
                    .map(|col| {
                        range
                            .get_value((row as u32, col as u32))
                            .map(display_text)
                            .unwrap_or_default()
                    })
                    .collect()
            })
            .collect();
        Self::from_rows(name, rows)
    }

    /// Number of rows in the grid.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns in the grid.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// True when the grid holds no cells.
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0 || self.column_count == 0
    }

    /// Display text of a cell with surrounding whitespace trimmed.
    pub fn cell_text(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(col))
            .map(|text| text.trim())
            .unwrap_or("")
    }

    /// Trimmed cells of one row, padded out to the column count.
    pub fn row_texts(&self, row: usize) -> impl Iterator<Item = &str> + '_ {
        (0..self.column_count).map(move |col| self.cell_text(row, col))
    }
}

/// Open a workbook and load its first worksheet.
///
/// Fails when the file is not a readable `.xlsx` container, when the workbook
/// has no worksheets, or when the first worksheet's used range is empty.
pub fn load_first_worksheet(path: impl AsRef<Path>) -> Result<Worksheet> {
    let path = path.as_ref();

    let mut workbook: Xlsx<BufReader<File>> =
        open_workbook(path).map_err(|source| PrnError::WorkbookOpen {
            path: path.to_path_buf(),
            source,
        })?;

    let name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| PrnError::NoWorksheet(path.to_path_buf()))?;

    let range = match workbook.worksheet_range_at(0) {
        Some(Ok(range)) => range,
        Some(Err(source)) => return Err(PrnError::WorksheetRead { sheet: name, source }),
        None => return Err(PrnError::NoWorksheet(path.to_path_buf())),
    };

    let sheet = Worksheet::from_range(name, &range);
    if sheet.is_empty() {
        return Err(PrnError::EmptySheet {
            sheet: sheet.name,
            path: path.to_path_buf(),
        });
    }

    debug!(
        "Loaded worksheet '{}' from {}: {} rows x {} columns",
        sheet.name,
        path.display(),
        sheet.row_count(),
        sheet.column_count()
    );

    Ok(sheet)
}
