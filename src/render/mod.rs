//! Output rendering for decoded sheets.
//!
//! This module provides renderers for display grids and record sets:
//! HTML tables and pages, aligned plain text, and JSON.
//!
//! # Example
//!
//! ```no_run
//! use sheetview::{load_file, render::*, DisplayGrid, ViewerOptions};
//!
//! let records = load_file("people.xlsx", &ViewerOptions::default())?;
//! let grid = DisplayGrid::from_records(&records);
//!
//! // Render to an HTML table
//! let html = to_html_table(&grid);
//!
//! // Render to aligned text
//! let text = to_text_table(&grid);
//!
//! // Render to JSON
//! let json = to_json(&records, JsonFormat::Pretty)?;
//! # Ok::<(), sheetview::Error>(())
//! ```

mod html;
mod json;
mod options;
mod page;
mod text;

pub use html::{escape_html, to_html_table};
pub use json::{to_json, JsonFormat};
pub use options::{RenderOptions, SampleLink};
pub use page::to_html_page;
pub use text::to_text_table;
