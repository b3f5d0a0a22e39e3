//! High-level conversion API.
//!
//! This module provides the entry points that turn an `.xlsx` file into its
//! two companion text files:
//!
//! 1. [`convert_to_prn`] loads the first worksheet, computes column widths
//!    and writes `<base>.prn`
//! 2. [`write_layout_info`] re-reads the header row and writes
//!    `<base>_info.txt` from those widths
//!
//! [`convert`] runs both in order.

use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::PrnError;
use crate::layout::{ColumnWidths, Layout};
use crate::output::{write_layout, write_prn};
use crate::sheet::load_first_worksheet;
use crate::Result;

/// Extension accepted for input workbooks, compared case-insensitively.
pub const XLSX_EXTENSION: &str = "xlsx";
/// Suffix appended to the input stem for the fixed-width file.
pub const PRN_SUFFIX: &str = ".prn";
/// Suffix appended to the input stem for the layout listing.
pub const INFO_SUFFIX: &str = "_info.txt";

/// Locations of the two output files for one input workbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// `<dir>/<base>.prn`
    pub prn: PathBuf,
    /// `<dir>/<base>_info.txt`
    pub info: PathBuf,
}

impl OutputPaths {
    /// Derive output paths next to the input, named from its file stem.
    pub fn for_input(input: impl AsRef<Path>) -> Self {
        let input = input.as_ref();
        let stem = input.file_stem().unwrap_or_else(|| OsStr::new(""));
        Self {
            prn: input.with_file_name(suffixed(stem, PRN_SUFFIX)),
            info: input.with_file_name(suffixed(stem, INFO_SUFFIX)),
        }
    }
}

fn suffixed(stem: &OsStr, suffix: &str) -> OsString {
    let mut name = stem.to_os_string();
    name.push(suffix);
    name
}

/// Result of a completed conversion.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// Files that were written
    pub paths: OutputPaths,
    /// Width of each column in the PRN file
    pub widths: ColumnWidths,
    /// Number of lines written to the PRN file
    pub row_count: usize,
}

/// Check that a path names an existing file with an `.xlsx` extension.
pub fn validate_input(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(PrnError::PathNotFound(path.to_path_buf()));
    }

    let is_xlsx = path
        .extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case(XLSX_EXTENSION));
    if !is_xlsx {
        return Err(PrnError::NotXlsxFile(path.to_path_buf()));
    }

    Ok(())
}

/// Write the fixed-width file for the first worksheet and return its widths.
///
/// The worksheet is fully loaded before `prn_path` is created, so a workbook
/// that cannot be parsed leaves nothing behind.
pub fn convert_to_prn(input: impl AsRef<Path>, prn_path: impl AsRef<Path>) -> Result<ColumnWidths> {
    write_prn_file(input.as_ref(), prn_path.as_ref()).map(|(widths, _)| widths)
}

fn write_prn_file(input: &Path, prn_path: &Path) -> Result<(ColumnWidths, usize)> {
    let sheet = load_first_worksheet(input)?;
    let widths = ColumnWidths::from_worksheet(&sheet);
    debug!("Column widths for '{}': {:?}", sheet.name, widths.as_slice());

    write_file(prn_path, |out| write_prn(out, &sheet, &widths))?;
    info!(
        "Wrote {} rows of {} characters to {}",
        sheet.row_count(),
        widths.record_length(),
        prn_path.display()
    );

    Ok((widths, sheet.row_count()))
}

/// Write the layout listing for `widths`, taking headers from the first row.
///
/// `widths` should come from [`convert_to_prn`] on the same input; header
/// cells beyond the worksheet's width are written as empty text.
pub fn write_layout_info(
    input: impl AsRef<Path>,
    info_path: impl AsRef<Path>,
    widths: &ColumnWidths,
) -> Result<Layout> {
    let info_path = info_path.as_ref();
    let sheet = load_first_worksheet(input)?;
    let layout = Layout::from_header_row(&sheet, widths);

    write_file(info_path, |out| write_layout(out, &layout))?;
    info!(
        "Wrote layout of {} columns to {}",
        layout.entries.len(),
        info_path.display()
    );

    Ok(layout)
}

/// Convert a workbook into its `.prn` and `_info.txt` files.
///
/// # Example
///
/// ```rust,ignore
/// use xlsx2prnlib::convert;
///
/// let result = convert("ventas.xlsx")?;
/// println!("{}", result.paths.prn.display()); // ventas.prn
/// println!("{}", result.paths.info.display()); // ventas_info.txt
/// ```
pub fn convert(input: impl AsRef<Path>) -> Result<ConvertResult> {
    let input = input.as_ref();
    let paths = OutputPaths::for_input(input);

    let (widths, row_count) = write_prn_file(input, &paths.prn)?;
    write_layout_info(input, &paths.info, &widths)?;

    Ok(ConvertResult {
        paths,
        widths,
        row_count,
    })
}

/// Create `path`, hand a buffered writer to `body`, then flush.
fn write_file<F>(path: &Path, body: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> std::io::Result<()>,
{
    let to_error = |source: std::io::Error| PrnError::FileWrite {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_error)?;
    let mut out = BufWriter::new(file);
    body(&mut out).map_err(to_error)?;
    out.flush().map_err(to_error)?;
    Ok(())
}
