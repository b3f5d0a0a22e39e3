//! # xlsx2prnlib
//!
//! Converts the first worksheet of an `.xlsx` workbook into a fixed-width
//! positional text file (PRN) and a companion layout listing.
//!
//! ## Overview
//!
//! Every column gets a width of one more than its longest trimmed value, every
//! cell is left-aligned and space-padded to that width, and the layout listing
//! records where each column starts:
//!
//! - **`<base>.prn`**: one line per worksheet row, no separators
//! - **`<base>_info.txt`**: `<header>  Inicio: <start>  Longitud: <length>` per column
//!
//! Both files are written next to the input workbook.
//!
//! ## Display text
//!
//! Cells are read through calamine and rendered as a viewer would show them:
//! numbers in Excel "General" style, date-formatted cells as `YYYY-MM-DD`,
//! errors as `#DIV/0!` and friends. See [`display`].
//!
//! ## Example
//!
//! ```rust
//! use xlsx2prnlib::{ColumnWidths, Layout, Worksheet};
//!
//! let sheet = Worksheet::from_rows(
//!     "Sheet1",
//!     vec![
//!         vec!["Name".to_string(), "Age".to_string()],
//!         vec!["Al".to_string(), "5".to_string()],
//!     ],
//! );
//!
//! let widths = ColumnWidths::from_worksheet(&sheet);
//! assert_eq!(widths.as_slice(), &[5, 4]);
//!
//! let mut prn = Vec::new();
//! xlsx2prnlib::output::write_prn(&mut prn, &sheet, &widths).unwrap();
//! let prn = String::from_utf8(prn).unwrap();
//! assert_eq!(prn.lines().collect::<Vec<_>>(), vec!["Name Age ", "Al   5   "]);
//!
//! let layout = Layout::from_header_row(&sheet, &widths);
//! assert_eq!(layout.entries[1].start, 6);
//! ```

pub mod convert;
pub mod display;
pub mod error;
pub mod layout;
pub mod output;
pub mod sheet;

pub use convert::{
    convert, convert_to_prn, validate_input, write_layout_info, ConvertResult, OutputPaths,
};
pub use error::PrnError;
pub use layout::{ColumnWidths, Layout, LayoutEntry};
pub use sheet::{load_first_worksheet, Worksheet};

/// Result type for xlsx2prnlib operations
pub type Result<T> = std::result::Result<T, PrnError>;
