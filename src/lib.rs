//! # sheetview
//!
//! Render the first sheet of a spreadsheet workbook as an HTML table.
//!
//! A workbook buffer (xlsx, xlsm, xlsb, xls or ods) is decoded into a
//! [`RecordSet`], one [`Record`] per row keyed by the header row. When the
//! sheet has an `Age` column an `AgeGroup` column is derived. The records are
//! then projected into a [`DisplayGrid`] and rendered.
//!
//! ## Quick Start
//!
//! ```no_run
//! use sheetview::{load_file, to_html_table, ViewerOptions};
//!
//! // Records of the first sheet, with the derived column
//! let records = load_file("people.xlsx", &ViewerOptions::default())?;
//! println!("Columns: {:?}", records.column_names());
//!
//! // Straight to an HTML table
//! let html = to_html_table("people.xlsx")?;
//! std::fs::write("people.html", html)?;
//! # Ok::<(), sheetview::Error>(())
//! ```
//!
//! ## Upload Controller
//!
//! ```no_run
//! use sheetview::{FileSelection, HtmlView, UploadController, ViewerOptions};
//!
//! # async fn run() {
//! let controller = UploadController::new(HtmlView::new(), ViewerOptions::default());
//! let selection = FileSelection::from_paths(["people.xlsx"]);
//! controller.handle_selection(&selection).await;
//! println!("{}", controller.view().container_html());
//! # }
//! ```

pub mod acquire;
pub mod controller;
pub mod decode;
pub mod derive;
pub mod detect;
pub mod error;
pub mod model;
pub mod options;
pub mod render;
pub mod view;

// Re-exports
pub use acquire::{read_file, FilePicker, FileSelection, FileSource, LocalFile, MemoryFile};
pub use controller::{UploadController, UploadOutcome, UploadState};
pub use decode::{decode_bytes, decode_workbook, DecodedSheet, SheetSummary};
pub use derive::{derive_age_group, AgeGroupRule};
pub use detect::{detect_format_from_bytes, detect_format_from_path, FormatType};
pub use error::{Error, ErrorKind, Result};
pub use model::{DisplayGrid, Record, RecordSet, Value};
pub use options::ViewerOptions;
pub use view::{ContainerContent, DisplayTarget, HtmlView};

use std::path::Path;

/// Decode a workbook buffer and apply the derived column rule.
///
/// # Example
///
/// ```no_run
/// use sheetview::{load_bytes, ViewerOptions};
///
/// let data = std::fs::read("people.xlsx")?;
/// let records = load_bytes(&data, &ViewerOptions::default())?;
/// # Ok::<(), sheetview::Error>(())
/// ```
pub fn load_bytes(data: &[u8], options: &ViewerOptions) -> Result<RecordSet> {
    let records = decode_bytes(data)?;
    if options.derive {
        Ok(options.rule.apply(records))
    } else {
        Ok(records)
    }
}

/// Read a workbook from disk, decode it and apply the derived column rule.
pub fn load_file(path: impl AsRef<Path>, options: &ViewerOptions) -> Result<RecordSet> {
    let data = acquire::read_path(path)?;
    load_bytes(&data, options)
}

/// Convert the first sheet of a workbook to an HTML table.
///
/// # Example
///
/// ```no_run
/// use sheetview::to_html_table;
///
/// let html = to_html_table("people.xlsx")?;
/// # Ok::<(), sheetview::Error>(())
/// ```
pub fn to_html_table(path: impl AsRef<Path>) -> Result<String> {
    let records = load_file(path, &ViewerOptions::default())?;
    Ok(render::to_html_table(&DisplayGrid::from_records(&records)))
}
