//! Text rendering for the two output files.
//!
//! - **PRN**: one line per worksheet row, each cell left-aligned and padded
//!   with spaces to its column width, no separators.
//! - **Layout info**: one line per column, `<header>  Inicio: <start>  Longitud: <length>`.
//!
//! Both writers work on any `Write` and do no file handling of their own.

use std::io::{self, Write};

use crate::layout::{ColumnWidths, Layout, LayoutEntry};
use crate::sheet::Worksheet;

/// Platform line terminator.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Platform line terminator.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Render one worksheet row as a fixed-width line, without terminator.
pub fn format_record(sheet: &Worksheet, row: usize, widths: &ColumnWidths) -> String {
    let mut line = String::with_capacity(widths.record_length());
    for (text, &width) in sheet.row_texts(row).zip(widths) {
        line.push_str(&format!("{:<width$}", text, width = width));
    }
    line
}

/// Render one layout entry as a line, without terminator.
pub fn format_layout_entry(entry: &LayoutEntry) -> String {
    format!(
        "{}  Inicio: {}  Longitud: {}",
        entry.header, entry.start, entry.length
    )
}

/// Write every worksheet row as a fixed-width line.
pub fn write_prn<W: Write>(out: &mut W, sheet: &Worksheet, widths: &ColumnWidths) -> io::Result<()> {
    for row in 0..sheet.row_count() {
        out.write_all(format_record(sheet, row, widths).as_bytes())?;
        out.write_all(LINE_ENDING.as_bytes())?;
    }
    Ok(())
}

/// Write one line per layout entry.
pub fn write_layout<W: Write>(out: &mut W, layout: &Layout) -> io::Result<()> {
    for entry in &layout.entries {
        out.write_all(format_layout_entry(entry).as_bytes())?;
        out.write_all(LINE_ENDING.as_bytes())?;
    }
    Ok(())
}
